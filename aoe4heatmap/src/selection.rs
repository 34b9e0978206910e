//! Current civilization pair and filter toggles.

use crate::config::HeatmapConfig;
use crate::filter::{filter_matrix, RelevanceFilter};
use crate::matrix::{HeatmapMatrix, MatrixCache};
use aoe4data::{CivTable, UnitRepository};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("No heatmap for attacker {attacker} vs defender {defender}")]
    NotFound { attacker: String, defender: String },
    #[error("Unknown civilization: {0}")]
    UnknownCivilization(String),
}

/// Holds the precomputed matrices and the user's current selection.
///
/// Setters only record state; [`current_view`](Self::current_view) resolves
/// it, so selection changes can arrive in any order.
#[derive(Debug, Clone)]
pub struct SelectionController {
    cache: MatrixCache,
    civs: CivTable,
    attacker_civ: String,
    defender_civ: String,
    filter: RelevanceFilter,
}

impl SelectionController {
    pub fn new(cache: MatrixCache, config: &HeatmapConfig) -> Self {
        Self {
            cache,
            civs: config.civs.clone(),
            attacker_civ: config.attacker_civ.clone(),
            defender_civ: config.defender_civ.clone(),
            filter: config.filter,
        }
    }

    /// Precomputes every civilization pair present in `repo`.
    pub fn from_repository(repo: &UnitRepository, config: &HeatmapConfig) -> Self {
        Self::new(MatrixCache::for_repository(repo, &config.civs), config)
    }

    pub fn set_attacker_civ(&mut self, code: &str) {
        log::debug!("Attacker civilization -> {}", code);
        self.attacker_civ = code.to_string();
    }

    pub fn set_defender_civ(&mut self, code: &str) {
        log::debug!("Defender civilization -> {}", code);
        self.defender_civ = code.to_string();
    }

    /// Selects the attacker by code or display title.
    pub fn select_attacker(&mut self, code_or_title: &str) -> Result<(), SelectionError> {
        let code = self.resolve(code_or_title)?;
        self.set_attacker_civ(&code);
        Ok(())
    }

    /// Selects the defender by code or display title.
    pub fn select_defender(&mut self, code_or_title: &str) -> Result<(), SelectionError> {
        let code = self.resolve(code_or_title)?;
        self.set_defender_civ(&code);
        Ok(())
    }

    pub fn set_filter_attacker(&mut self, enabled: bool) {
        self.filter.attackers = enabled;
    }

    pub fn set_filter_defender(&mut self, enabled: bool) {
        self.filter.defenders = enabled;
    }

    pub fn attacker_civ(&self) -> &str {
        &self.attacker_civ
    }

    pub fn defender_civ(&self) -> &str {
        &self.defender_civ
    }

    pub fn filter(&self) -> RelevanceFilter {
        self.filter
    }

    pub fn civs(&self) -> &CivTable {
        &self.civs
    }

    pub fn cache(&self) -> &MatrixCache {
        &self.cache
    }

    /// Display title of a civilization, falling back to its code.
    pub fn civ_title<'a>(&'a self, code: &'a str) -> &'a str {
        self.civs.title(code).unwrap_or(code)
    }

    /// The base matrix of the selected pair with the current filter applied.
    ///
    /// Recomputed on every call; the cached base matrix is never modified.
    pub fn current_view(&self) -> Result<HeatmapMatrix, SelectionError> {
        let base = self
            .cache
            .get(&self.attacker_civ, &self.defender_civ)
            .ok_or_else(|| SelectionError::NotFound {
                attacker: self.attacker_civ.clone(),
                defender: self.defender_civ.clone(),
            })?;
        Ok(filter_matrix(base, self.filter))
    }

    fn resolve(&self, code_or_title: &str) -> Result<String, SelectionError> {
        if let Some(code) = self.civs.resolve(code_or_title) {
            return Ok(code.to_string());
        }
        // Codes missing from the table are still selectable if they were precomputed
        if self.cache.civs().iter().any(|c| c == code_or_title) {
            return Ok(code_or_title.to_string());
        }
        Err(SelectionError::UnknownCivilization(
            code_or_title.to_string(),
        ))
    }
}
