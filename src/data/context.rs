//! Startup-loaded data cache (DataContext) and the readiness-gated Session in front of it.
//! Load once, then every squad entry point reads from the same immutable context.

use std::sync::Arc;

use crate::config::Settings;
use crate::data::catalog::ItemCatalog;
use crate::data::curated::{CuratedTable, ObjectiveChoices};
use crate::data::loader::{load_documents, LoadedDocuments};
use crate::data::usage::UsageDataset;
use crate::error::{HellpodError, Result};
use crate::loadout::booster::RepairOutcome;
use crate::loadout::rng::RandomSource;
use crate::loadout::rules::LoadoutRules;
use crate::loadout::squad::{RoleAssignment, Squad};
use crate::loadout::weights::UsageWeights;
use crate::loadout::whitelist::Whitelist;
use crate::loadout::{
    build_challenge_squad, build_finder_squad, repair_squad, ChallengeRequest, FinderRequest,
    SquadInputs,
};

/// Read-only data plus everything derived from it. Rebuilt as a whole on reload.
#[derive(Debug)]
pub struct DataContext {
    pub catalog: ItemCatalog,
    pub curated: CuratedTable,
    pub usage: UsageDataset,
    pub weights: UsageWeights,
    pub whitelist: Whitelist,
    pub rules: LoadoutRules,
}

impl DataContext {
    pub fn from_documents(documents: LoadedDocuments, rules: LoadoutRules) -> Self {
        let whitelist = Whitelist::from_catalog(&documents.catalog);
        let weights = UsageWeights::from_dataset(&documents.usage);
        log::info!(
            "data context ready: {} catalog names, {} weighted names",
            whitelist.len(),
            weights.len()
        );
        Self {
            catalog: documents.catalog,
            curated: documents.curated,
            usage: documents.usage,
            weights,
            whitelist,
            rules,
        }
    }

    pub fn load(settings: &Settings) -> Result<Arc<DataContext>> {
        let rules = LoadoutRules::load_optional(settings.rules_path.as_deref())?;
        let documents = load_documents(settings)?;
        Ok(Arc::new(Self::from_documents(documents, rules)))
    }

    pub fn inputs(&self) -> SquadInputs<'_> {
        SquadInputs {
            catalog: &self.catalog,
            weights: &self.weights,
            whitelist: &self.whitelist,
            rules: &self.rules,
        }
    }

    pub fn finder_squad(&self, request: &FinderRequest) -> Squad {
        build_finder_squad(&self.inputs(), &self.curated, request)
    }

    pub fn challenge_squad<R: RandomSource>(&self, request: &ChallengeRequest, rng: &mut R) -> Result<Squad> {
        build_challenge_squad(&self.inputs(), request, rng)
    }

    /// Booster cap against the catalog-wide usage ranking.
    pub fn repair(&self, squad: &mut [RoleAssignment]) -> RepairOutcome {
        repair_squad(squad, &self.inputs().ranked_boosters(), self.rules.booster_cap)
    }

    pub fn objective_choices(&self, faction: &str, difficulty: &str) -> ObjectiveChoices {
        self.curated.objective_choices(&self.usage, faction, difficulty)
    }
}

/// Entry point for callers. Every squad operation is refused until data has loaded.
#[derive(Debug, Default)]
pub struct Session {
    context: Option<Arc<DataContext>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: Arc<DataContext>) -> Self {
        Self {
            context: Some(context),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.context.is_some()
    }

    /// Load (or reload) all data. On failure the session is left not ready.
    pub fn load(&mut self, settings: &Settings) -> Result<()> {
        self.context = None;
        match DataContext::load(settings) {
            Ok(context) => {
                self.context = Some(context);
                Ok(())
            }
            Err(err) => {
                log::error!("data load failed: {err}");
                Err(err)
            }
        }
    }

    pub fn context(&self) -> Result<&DataContext> {
        self.context.as_deref().ok_or(HellpodError::NotReady)
    }

    pub fn finder_squad(&self, request: &FinderRequest) -> Result<Squad> {
        Ok(self.context()?.finder_squad(request))
    }

    pub fn challenge_squad<R: RandomSource>(&self, request: &ChallengeRequest, rng: &mut R) -> Result<Squad> {
        self.context()?.challenge_squad(request, rng)
    }

    pub fn repair(&self, squad: &mut [RoleAssignment]) -> Result<RepairOutcome> {
        Ok(self.context()?.repair(squad))
    }

    pub fn objective_choices(&self, faction: &str, difficulty: &str) -> Result<ObjectiveChoices> {
        Ok(self.context()?.objective_choices(faction, difficulty))
    }
}
