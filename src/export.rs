//! Squad output formats: plain-text cards, CSV rows, JSON.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::{HellpodError, Result};
use crate::loadout::squad::{RoleAssignment, Squad};

const MISSING: &str = "—";
pub const CURATED_BADGE: &str = "Optimized by Community + Curation";
pub const CHALLENGE_BADGE: &str = "Challenge Loadout";

pub const CSV_HEADER: [&str; 8] = [
    "role_id", "role", "primary", "sidearm", "grenade", "booster", "armor", "stratagems",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown format '{other}' (expected json, text or csv)")),
        }
    }
}

fn cell(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

fn stratagem_cell(member: &RoleAssignment) -> String {
    if member.stratagems.is_empty() {
        MISSING.to_string()
    } else {
        member.stratagems.join(", ")
    }
}

/// One card per role: label, badge, then a keyed row per slot.
pub fn render_cards(squad: &[RoleAssignment], badge: &str) -> String {
    let mut out = String::new();
    for (index, member) in squad.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "== {} ==", member.role.label());
        let _ = writeln!(out, "[{badge}]");
        let rows = [
            ("Primary", cell(member.primary.as_deref()).to_string()),
            ("Sidearm", cell(member.sidearm.as_deref()).to_string()),
            ("Grenade", cell(member.grenade.as_deref()).to_string()),
            ("Booster", cell(member.booster.as_deref()).to_string()),
            ("Armor", cell(member.armor.as_deref()).to_string()),
            ("Stratagems", stratagem_cell(member)),
        ];
        for (key, value) in rows {
            let _ = writeln!(out, "{key:<11} {value}");
        }
    }
    out
}

pub fn squad_to_csv(squad: &[RoleAssignment]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for member in squad {
        writer.write_record([
            member.role.id(),
            member.role.label(),
            member.primary.as_deref().unwrap_or(""),
            member.sidearm.as_deref().unwrap_or(""),
            member.grenade.as_deref().unwrap_or(""),
            member.booster.as_deref().unwrap_or(""),
            member.armor.as_deref().unwrap_or(""),
            member.stratagems.join("; ").as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| HellpodError::Io(err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| HellpodError::Config(format!("csv output is not utf-8: {err}")))
}

pub fn render(squad: &Squad, format: OutputFormat, badge: &str) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(squad)?),
        OutputFormat::Text => Ok(render_cards(squad, badge)),
        OutputFormat::Csv => squad_to_csv(squad),
    }
}
