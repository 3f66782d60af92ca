//! Read the three JSON documents. Any failure here is fatal to initialization.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::Settings;
use crate::data::catalog::ItemCatalog;
use crate::data::curated::CuratedTable;
use crate::data::usage::UsageDataset;
use crate::error::{HellpodError, Result};

/// Raw documents as loaded from disk, before any derived data is built.
#[derive(Debug, Clone, Default)]
pub struct LoadedDocuments {
    pub catalog: ItemCatalog,
    pub curated: CuratedTable,
    pub usage: UsageDataset,
}

/// Parse one JSON document. `null` documents become empty objects.
pub fn load_json_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let document = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|err| HellpodError::load(&document, err.into()))?;
    let value: Value = serde_json::from_str(&raw).map_err(|err| HellpodError::load(&document, err.into()))?;
    Ok(if value.is_null() {
        Value::Object(Default::default())
    } else {
        value
    })
}

pub fn load_documents(settings: &Settings) -> Result<LoadedDocuments> {
    let catalog = ItemCatalog::from_value(load_json_document(settings.items_path())?);
    let curated = CuratedTable::from_value(load_json_document(settings.curated_path())?);
    let usage = UsageDataset::from_value(load_json_document(settings.usage_path())?);
    log::info!("loaded data documents from {}", settings.data_dir.display());
    Ok(LoadedDocuments {
        catalog,
        curated,
        usage,
    })
}
