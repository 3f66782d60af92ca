use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{Settings, DEFAULT_DIFFICULTY, DEFAULT_FACTION};
use crate::data::validate::validate_context;
use crate::data::Session;
use crate::error::{HellpodError, Result};
use crate::export::{render, OutputFormat, CHALLENGE_BADGE, CURATED_BADGE};
use crate::loadout::challenge::DEFAULT_PLAYERS;
use crate::loadout::rng::Rng;
use crate::loadout::squad::Squad;
use crate::loadout::synergy::SynergyMode;
use crate::loadout::{ChallengeRequest, FinderRequest};

#[derive(Debug, Parser)]
#[command(name = "hellpod", version, about = "Squad loadout recommender and challenge generator")]
pub struct Cli {
    /// Directory holding items.json, curated.json and usage.json.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// YAML file overriding the built-in loadout rules.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Curated squad: one ranked loadout per role.
    Recommend(RecommendArgs),
    /// Random challenge loadouts.
    Challenge(ChallengeArgs),
    /// Re-apply the booster cap to a squad saved as JSON.
    Repair(RepairArgs),
    /// Objective options for a faction and difficulty.
    Objectives(ObjectivesArgs),
    /// Check the data documents against each other.
    Validate,
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    #[arg(long, default_value = DEFAULT_FACTION)]
    pub faction: String,
    #[arg(long, default_value = DEFAULT_DIFFICULTY)]
    pub difficulty: String,
    /// Defaults to the objective the data suggests for this faction and difficulty.
    #[arg(long)]
    pub objective: Option<String>,
    #[arg(long, default_value = "balanced")]
    pub synergy: String,
    /// Take the top-ranked grenade even when it ignores the faction.
    #[arg(long)]
    pub no_faction_grenades: bool,
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ChallengeArgs {
    #[arg(long, default_value = DEFAULT_FACTION)]
    pub faction: String,
    #[arg(long, default_value_t = DEFAULT_PLAYERS)]
    pub players: usize,
    /// Fixed seed for a reproducible squad.
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub faction_grenades: bool,
    /// Cap duplicate boosters across the squad.
    #[arg(long)]
    pub enforce_boosters: bool,
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

/// Flow that produced a saved squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SquadSource {
    Curated,
    Challenge,
}

impl SquadSource {
    pub fn badge(self) -> &'static str {
        match self {
            Self::Curated => CURATED_BADGE,
            Self::Challenge => CHALLENGE_BADGE,
        }
    }
}

#[derive(Debug, Args)]
pub struct RepairArgs {
    /// JSON array of role assignments.
    pub squad: PathBuf,
    /// Flow the squad came from; picks the card badge.
    #[arg(long, value_enum, default_value_t = SquadSource::Curated)]
    pub from: SquadSource,
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ObjectivesArgs {
    #[arg(long, default_value = DEFAULT_FACTION)]
    pub faction: String,
    #[arg(long, default_value = DEFAULT_DIFFICULTY)]
    pub difficulty: String,
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 2 } else { 0 };
            let _ = err.print();
            return code;
        }
    };

    let settings = Settings::from_env().with_overrides(cli.data_dir.as_deref(), cli.rules.as_deref());
    let mut session = Session::new();
    if let Err(err) = session.load(&settings) {
        eprintln!("{}", err.user_message());
        return 1;
    }

    let result = match cli.command {
        Command::Recommend(args) => handle_recommend(&session, args),
        Command::Challenge(args) => handle_challenge(&session, args),
        Command::Repair(args) => handle_repair(&session, args),
        Command::Objectives(args) => handle_objectives(&session, args),
        Command::Validate => return handle_validate(&session),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(HellpodError::InvalidRequest(msg)) => {
            eprintln!("invalid request: {msg}");
            2
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            1
        }
    }
}

fn handle_recommend(session: &Session, args: RecommendArgs) -> Result<String> {
    let objective = match args.objective {
        Some(objective) => objective,
        None => session.objective_choices(&args.faction, &args.difficulty)?.default,
    };
    let request = FinderRequest {
        faction: args.faction,
        difficulty: args.difficulty,
        objective,
        synergy: SynergyMode::parse_lenient(&args.synergy),
        enforce_faction_grenades: !args.no_faction_grenades,
    };
    let squad = session.finder_squad(&request)?;
    render(&squad, args.format, CURATED_BADGE)
}

fn handle_challenge(session: &Session, args: ChallengeArgs) -> Result<String> {
    let request = ChallengeRequest {
        faction: args.faction,
        enforce_faction_grenades: args.faction_grenades,
        player_count: args.players,
        enforce_booster_cap: args.enforce_boosters,
    };
    let mut rng = match args.seed {
        Some(seed) => Rng::new(seed),
        None => Rng::from_entropy(),
    };
    let squad = session.challenge_squad(&request, &mut rng)?;
    render(&squad, args.format, CHALLENGE_BADGE)
}

fn handle_repair(session: &Session, args: RepairArgs) -> Result<String> {
    let raw = fs::read_to_string(&args.squad)?;
    let mut squad: Squad = serde_json::from_str(&raw)
        .map_err(|err| HellpodError::InvalidRequest(format!("squad file is not a squad: {err}")))?;
    let outcome = session.repair(&mut squad)?;
    if !outcome.unresolved.is_empty() {
        log::warn!("booster cap left {} slot(s) over the limit", outcome.unresolved.len());
    }
    render(&squad, args.format, args.from.badge())
}

fn handle_objectives(session: &Session, args: ObjectivesArgs) -> Result<String> {
    let choices = session.objective_choices(&args.faction, &args.difficulty)?;
    Ok(serde_json::to_string_pretty(&choices)?)
}

fn handle_validate(session: &Session) -> i32 {
    let context = match session.context() {
        Ok(context) => context,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return 1;
        }
    };
    let report = validate_context(context);
    for diagnostic in &report.diagnostics {
        eprintln!("- {diagnostic}");
    }
    if report.has_errors() {
        eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
        1
    } else {
        println!("validation passed: {} note(s)", report.diagnostics.len());
        0
    }
}
