use crate::units::Unit;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The upstream export wraps the records: `{ "__note__": ..., "data": [ ... ] }`.
#[derive(Deserialize)]
struct WrappedDocument {
    data: Vec<Unit>,
}

/// Accepts a bare array or the wrapped export. The shape is chosen up front
/// so serde_json reports the position of a malformed record.
fn parse_units(json: &str) -> Result<Vec<Unit>, serde_json::Error> {
    if json.trim_start().starts_with('{') {
        let doc: WrappedDocument = serde_json::from_str(json)?;
        Ok(doc.data)
    } else {
        serde_json::from_str(json)
    }
}

/// The immutable, fully resident unit dataset.
#[derive(Debug, Clone, Default)]
pub struct UnitRepository {
    units: Vec<Unit>,
}

impl UnitRepository {
    pub fn from_units(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RepositoryError> {
        let repo = Self::from_units(parse_units(json)?);

        for unit in repo.units.iter().filter(|u| u.civs.is_empty()) {
            log::warn!("Unit {} belongs to no civilization", unit.id);
        }

        Ok(repo)
    }

    /// Loads the dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RepositoryError> {
        let json = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let repo = Self::from_json_str(&json)?;
        log::info!("Loaded {} units from {:?}", repo.len(), path);
        Ok(repo)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units fielded by `civ`, in dataset order.
    pub fn units_of_civ<'a>(&'a self, civ: &'a str) -> impl Iterator<Item = &'a Unit> + 'a {
        self.units.iter().filter(move |u| u.belongs_to(civ))
    }

    /// Every civilization code referenced by at least one unit.
    pub fn civ_codes(&self) -> BTreeSet<&str> {
        self.units
            .iter()
            .flat_map(|u| u.civs.iter().map(String::as_str))
            .collect()
    }

    /// Age variants of one base unit within a civilization, ascending by age.
    pub fn age_progression(&self, civ: &str, base_id: &str) -> Vec<&Unit> {
        let mut variants: Vec<&Unit> = self
            .units
            .iter()
            .filter(|u| u.belongs_to(civ) && u.base_id == base_id)
            .collect();
        variants.sort_by_key(|u| u.age);
        variants
    }
}
