pub mod analyze;
pub mod catalog;
pub mod config;
pub mod meal_plan;
pub mod questionnaire;
pub mod radar;
pub mod recommend;
pub mod session;

use anyhow::{Context, Result};
use nutrigene_tools::catalog::Catalog;
use nutrigene_tools::config::Config;
use nutrigene_tools::store::JsonFileStore;
use nutrigene_tools::NutriService;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) type Service = NutriService<JsonFileStore>;

/// Builds the service over the on-disk session store.
pub(crate) fn open_service(store_dir: Option<PathBuf>) -> Result<Service> {
    let mut config = Config::load();
    if let Some(dir) = store_dir {
        config.store.dir = Some(dir);
    }
    let dir = config.session_dir()?;
    let store = JsonFileStore::open(&dir)
        .with_context(|| format!("opening session store at {}", dir.display()))?;
    Ok(NutriService::new(Arc::new(Catalog::builtin()), store, config))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
