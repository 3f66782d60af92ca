//! Team synergy modes and the small ranking nudges they produce.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::loadout::squad::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SynergyMode {
    AntiArmor,
    Control,
    Sustain,
    Recon,
    #[default]
    Balanced,
}

impl SynergyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AntiArmor => "anti-armor",
            Self::Control => "control",
            Self::Sustain => "sustain",
            Self::Recon => "recon",
            Self::Balanced => "balanced",
        }
    }

    /// Unrecognized modes behave like `balanced`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn biases(self) -> SynergyBiases {
        match self {
            Self::AntiArmor => SynergyBiases {
                anti_armor: Some(0.25),
                control: Some(0.05),
                sustain: Some(0.05),
                recon: Some(0.05),
            },
            Self::Control => SynergyBiases {
                control: Some(0.25),
                sustain: Some(0.05),
                ..SynergyBiases::default()
            },
            Self::Sustain => SynergyBiases {
                sustain: Some(0.25),
                control: Some(0.05),
                ..SynergyBiases::default()
            },
            Self::Recon => SynergyBiases {
                recon: Some(0.25),
                control: Some(0.05),
                ..SynergyBiases::default()
            },
            Self::Balanced => SynergyBiases::default(),
        }
    }
}

impl fmt::Display for SynergyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SynergyMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "anti-armor" => Ok(Self::AntiArmor),
            "control" => Ok(Self::Control),
            "sustain" => Ok(Self::Sustain),
            "recon" => Ok(Self::Recon),
            "balanced" => Ok(Self::Balanced),
            other => Err(format!("unknown synergy mode '{other}'")),
        }
    }
}

/// Per-tag bonuses. `None` means the mode says nothing about that tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SynergyBiases {
    pub anti_armor: Option<f64>,
    pub control: Option<f64>,
    pub sustain: Option<f64>,
    pub recon: Option<f64>,
}

impl SynergyBiases {
    /// Role-specific lean, used on top of the base bias for primaries.
    pub fn role_bias(&self, role: Role) -> f64 {
        match role {
            Role::Heavy => self.anti_armor.unwrap_or(0.0),
            Role::Demo => self.anti_armor.unwrap_or(0.05),
            Role::Support => self.sustain.unwrap_or(0.05),
            Role::Medic => self.sustain.unwrap_or(0.10),
            Role::Recon => self.recon.unwrap_or(0.10),
            Role::Assault => self.control.unwrap_or(0.05),
        }
    }

    pub fn stratagem_bias(&self) -> f64 {
        self.control.unwrap_or(0.0)
    }

    pub fn booster_bias(&self) -> f64 {
        self.sustain.unwrap_or(0.0)
    }

    pub fn grenade_bias(&self) -> f64 {
        self.control.unwrap_or(0.02)
    }
}
