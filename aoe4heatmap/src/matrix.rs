//! Attacker × defender bonus matrices.

use crate::modifiers::{extract_modifiers, ClassBonus};
use crate::names::{canonical_roster, CanonicalUnit};
use aoe4data::{CivTable, UnitRepository};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Bonus damage one attacker deals to one defender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifierCell {
    pub attacker: String,
    pub defender: String,
    pub value: f64,
}

/// Dense bonus grid for one (attacker civ, defender civ) pair.
///
/// `cells` is row-major over `attacker_names` × `defender_names`. Attacker
/// names are sorted descending, defender names ascending; renderers rely on
/// that orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapMatrix {
    pub attacker_civ: String,
    pub defender_civ: String,
    pub attacker_names: Vec<String>,
    pub defender_names: Vec<String>,
    pub cells: Vec<ModifierCell>,
    /// Largest bonus that fired against any defender, floored at 0. Upper
    /// bound of the colour scale.
    ///
    /// Counts modifiers later overwritten in their cell, so it can exceed
    /// every cell value when an attacker has colliding modifiers.
    pub max_bonus: f64,
}

impl HeatmapMatrix {
    /// Looks a cell up by position in the row-major layout.
    pub fn cell(&self, attacker: &str, defender: &str) -> Option<&ModifierCell> {
        let row = self.attacker_names.iter().position(|a| a == attacker)?;
        let col = self.defender_names.iter().position(|d| d == defender)?;
        self.cells
            .get(row * self.defender_names.len() + col)
            .filter(|c| c.attacker == attacker && c.defender == defender)
    }

    pub fn value(&self, attacker: &str, defender: &str) -> Option<f64> {
        self.cell(attacker, defender).map(|c| c.value)
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.attacker_names.len(), self.defender_names.len())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells of one attacker row, in defender order. Empty for an unknown
    /// attacker.
    pub fn row(&self, attacker: &str) -> &[ModifierCell] {
        let width = self.defender_names.len();
        match self.attacker_names.iter().position(|a| a == attacker) {
            Some(row) => self
                .cells
                .get(row * width..(row + 1) * width)
                .unwrap_or(&[]),
            None => &[],
        }
    }
}

/// Builds the bonus matrix of `attacker_civ` units attacking `defender_civ` units.
///
/// Each attacker and defender is represented by its lowest-age variant. A
/// cell takes the value of the last extracted modifier whose class the
/// defender carries, or 0 when none matches. `max_bonus` folds in every
/// modifier that fires, including ones a later match overwrites.
pub fn build_matrix(
    attacker_civ: &str,
    defender_civ: &str,
    repo: &UnitRepository,
) -> HeatmapMatrix {
    let attackers = canonical_roster(repo, attacker_civ);
    let defenders = canonical_roster(repo, defender_civ);
    build_from_rosters(attacker_civ, defender_civ, &attackers, &defenders)
}

fn build_from_rosters(
    attacker_civ: &str,
    defender_civ: &str,
    attackers: &[CanonicalUnit<'_>],
    defenders: &[CanonicalUnit<'_>],
) -> HeatmapMatrix {
    let mut attackers: Vec<&CanonicalUnit<'_>> = attackers.iter().collect();
    attackers.sort_by(|a, b| b.name.cmp(&a.name));
    let mut defenders: Vec<&CanonicalUnit<'_>> = defenders.iter().collect();
    defenders.sort_by(|a, b| a.name.cmp(&b.name));

    let defender_classes: Vec<HashSet<&str>> = defenders
        .iter()
        .map(|d| d.unit.classes.iter().map(String::as_str).collect())
        .collect();

    let mut cells = Vec::with_capacity(attackers.len() * defenders.len());
    let mut max_bonus: f64 = 0.0;
    for attacker in &attackers {
        let bonuses = extract_modifiers(attacker.unit);
        for (defender, classes) in defenders.iter().zip(&defender_classes) {
            let mut value = 0.0;
            for bonus in matching_bonuses(&bonuses, classes) {
                value = bonus.value;
                max_bonus = max_bonus.max(bonus.value);
            }
            cells.push(ModifierCell {
                attacker: attacker.name.clone(),
                defender: defender.name.clone(),
                value,
            });
        }
    }

    HeatmapMatrix {
        attacker_civ: attacker_civ.to_string(),
        defender_civ: defender_civ.to_string(),
        attacker_names: attackers.iter().map(|a| a.name.clone()).collect(),
        defender_names: defenders.iter().map(|d| d.name.clone()).collect(),
        cells,
        max_bonus,
    }
}

/// Modifiers that fire against a defender, in extraction order. The cell
/// keeps the last one (overwrite, not max) even when it is smaller.
fn matching_bonuses<'b>(
    bonuses: &'b [ClassBonus],
    defender_classes: &'b HashSet<&'b str>,
) -> impl Iterator<Item = &'b ClassBonus> + 'b {
    bonuses
        .iter()
        .filter(move |b| defender_classes.contains(b.class.as_str()))
}

/// Base matrices for every civilization pair of one repository.
///
/// Built once after the repository is loaded and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct MatrixCache {
    civs: Vec<String>,
    matrices: HashMap<(String, String), HeatmapMatrix>,
}

impl MatrixCache {
    /// Builds all `civs.len()²` matrices.
    pub fn precompute(repo: &UnitRepository, civs: &[String]) -> Self {
        let rosters: Vec<Vec<CanonicalUnit<'_>>> =
            civs.iter().map(|civ| canonical_roster(repo, civ)).collect();

        let mut matrices = HashMap::with_capacity(civs.len() * civs.len());
        for (attacker_civ, attackers) in civs.iter().zip(&rosters) {
            for (defender_civ, defenders) in civs.iter().zip(&rosters) {
                let matrix = build_from_rosters(attacker_civ, defender_civ, attackers, defenders);
                log::debug!(
                    "Heatmap {} -> {}: {}x{} (max bonus {})",
                    attacker_civ,
                    defender_civ,
                    matrix.attacker_names.len(),
                    matrix.defender_names.len(),
                    matrix.max_bonus
                );
                matrices.insert((attacker_civ.clone(), defender_civ.clone()), matrix);
            }
        }

        log::info!(
            "Precomputed {} heatmaps for {} civilizations",
            matrices.len(),
            civs.len()
        );

        Self {
            civs: civs.to_vec(),
            matrices,
        }
    }

    /// Precomputes every civilization present in the repository.
    ///
    /// Civilizations listed in `table` come first, in table order; codes the
    /// table does not know follow alphabetically.
    pub fn for_repository(repo: &UnitRepository, table: &CivTable) -> Self {
        let present = repo.civ_codes();
        let mut civs: Vec<String> = table
            .codes()
            .filter(|code| present.contains(code))
            .map(str::to_string)
            .collect();
        for code in &present {
            if table.title(code).is_none() {
                log::warn!("Civilization {} has no title, labelling by code", code);
                civs.push(code.to_string());
            }
        }
        Self::precompute(repo, &civs)
    }

    pub fn get(&self, attacker_civ: &str, defender_civ: &str) -> Option<&HeatmapMatrix> {
        self.matrices
            .get(&(attacker_civ.to_string(), defender_civ.to_string()))
    }

    pub fn civs(&self) -> &[String] {
        &self.civs
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RepositoryBuilder, UnitBuilder};

    fn sample_repo() -> UnitRepository {
        RepositoryBuilder::new()
            .with_unit(
                UnitBuilder::new("spearman", 1)
                    .civs(&["en", "fr"])
                    .classes(&["infantry", "melee"])
                    .modifier(17.0, &["cavalry"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("archer", 2)
                    .civs(&["en"])
                    .classes(&["infantry", "ranged"])
                    .modifier(3.0, &["light_melee_infantry"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("knight", 2)
                    .civs(&["fr"])
                    .classes(&["cavalry", "heavy"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("man-at-arms", 2)
                    .civs(&["fr"])
                    .classes(&["infantry", "heavy", "melee"])
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_axis_ordering() {
        let matrix = build_matrix("en", "fr", &sample_repo());
        assert_eq!(matrix.attacker_names, vec!["Spearman", "Archer"]);
        assert_eq!(
            matrix.defender_names,
            vec!["Knight", "Man-At-Arms", "Spearman"]
        );
    }

    #[test]
    fn test_dense_row_major_cells() {
        let matrix = build_matrix("en", "fr", &sample_repo());
        assert_eq!(matrix.cells.len(), 6);
        assert_eq!(matrix.dimensions(), (2, 3));

        let order: Vec<_> = matrix
            .cells
            .iter()
            .map(|c| (c.attacker.as_str(), c.defender.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Spearman", "Knight"),
                ("Spearman", "Man-At-Arms"),
                ("Spearman", "Spearman"),
                ("Archer", "Knight"),
                ("Archer", "Man-At-Arms"),
                ("Archer", "Spearman"),
            ]
        );
    }

    #[test]
    fn test_values_and_max_bonus() {
        let matrix = build_matrix("en", "fr", &sample_repo());
        assert_eq!(matrix.value("Spearman", "Knight"), Some(17.0));
        assert_eq!(matrix.value("Spearman", "Man-At-Arms"), Some(0.0));
        assert_eq!(matrix.value("Archer", "Knight"), Some(0.0));
        assert_eq!(matrix.value("Archer", "Nobody"), None);
        assert_eq!(matrix.max_bonus, 17.0);
    }

    #[test]
    fn test_last_match_wins_over_larger_value() {
        // Whether last-match or max-match was intended upstream is unclear;
        // the reference output uses last-match.
        let repo = RepositoryBuilder::new()
            .with_unit(
                UnitBuilder::new("crossbowman", 1)
                    .civs(&["en"])
                    .modifier(10.0, &["heavy"])
                    .modifier(4.0, &["armored"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("knight", 1)
                    .civs(&["fr"])
                    .classes(&["heavy", "armored"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("lancer", 1)
                    .civs(&["fr"])
                    .classes(&["heavy"])
                    .build(),
            )
            .build();

        let matrix = build_matrix("en", "fr", &repo);
        assert_eq!(matrix.value("Crossbowman", "Knight"), Some(4.0));
        assert_eq!(matrix.value("Crossbowman", "Lancer"), Some(10.0));
        assert_eq!(matrix.max_bonus, 10.0);
    }

    #[test]
    fn test_overwritten_bonus_still_raises_max() {
        let repo = RepositoryBuilder::new()
            .with_unit(
                UnitBuilder::new("crossbowman", 1)
                    .civs(&["en"])
                    .modifier(10.0, &["heavy"])
                    .modifier(4.0, &["armored"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("knight", 1)
                    .civs(&["fr"])
                    .classes(&["heavy", "armored"])
                    .build(),
            )
            .build();

        let matrix = build_matrix("en", "fr", &repo);
        assert_eq!(matrix.value("Crossbowman", "Knight"), Some(4.0));
        assert_eq!(matrix.max_bonus, 10.0);
    }

    #[test]
    fn test_cell_lookup_after_filter() {
        let matrix = build_matrix("en", "fr", &sample_repo());
        let filtered = crate::filter::filter_matrix(
            &matrix,
            crate::filter::RelevanceFilter::new(true, true),
        );
        assert_eq!(filtered.dimensions(), (1, 1));
        assert_eq!(filtered.value("Spearman", "Knight"), Some(17.0));
        assert_eq!(filtered.value("Archer", "Knight"), None);
        assert_eq!(filtered.value("Spearman", "Spearman"), None);
        assert!(filtered.row("Archer").is_empty());
    }

    #[test]
    fn test_any_group_matches() {
        let repo = RepositoryBuilder::new()
            .with_unit(
                UnitBuilder::new("springald", 3)
                    .civs(&["hr"])
                    .modifier_groups(40.0, &[&["siege"], &["naval", "warship"]])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("galley", 2)
                    .civs(&["hr"])
                    .classes(&["warship"])
                    .build(),
            )
            .build();

        let matrix = build_matrix("hr", "hr", &repo);
        assert_eq!(matrix.value("Springald", "Galley"), Some(40.0));
        assert_eq!(matrix.value("Springald", "Springald"), Some(0.0));
    }

    #[test]
    fn test_negative_bonus_does_not_raise_max() {
        let repo = RepositoryBuilder::new()
            .with_unit(
                UnitBuilder::new("militia", 1)
                    .civs(&["ru"])
                    .modifier(-2.0, &["building"])
                    .build(),
            )
            .with_unit(
                UnitBuilder::new("palisade", 1)
                    .civs(&["ru"])
                    .classes(&["building"])
                    .build(),
            )
            .build();

        let matrix = build_matrix("ru", "ru", &repo);
        assert_eq!(matrix.value("Militia", "Palisade"), Some(-2.0));
        assert_eq!(matrix.max_bonus, 0.0);
    }

    #[test]
    fn test_unknown_civ_yields_empty_axis() {
        let matrix = build_matrix("en", "zz", &sample_repo());
        assert_eq!(matrix.dimensions(), (2, 0));
        assert!(matrix.is_empty());
        assert_eq!(matrix.max_bonus, 0.0);
    }

    #[test]
    fn test_cache_covers_all_pairs() {
        let repo = sample_repo();
        let cache = MatrixCache::for_repository(&repo, &CivTable::default());

        assert_eq!(cache.civs(), &["en".to_string(), "fr".to_string()]);
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.get("en", "fr"), Some(&build_matrix("en", "fr", &repo)));
        assert!(cache.get("en", "ru").is_none());
    }

    #[test]
    fn test_cache_appends_untitled_civs() {
        let repo = RepositoryBuilder::new()
            .with_unit(UnitBuilder::new("samurai", 1).civs(&["ja"]).build())
            .with_unit(UnitBuilder::new("archer", 1).civs(&["en"]).build())
            .build();
        let cache = MatrixCache::for_repository(&repo, &CivTable::default());
        assert_eq!(cache.civs(), &["en".to_string(), "ja".to_string()]);
        assert!(cache.get("ja", "en").is_some());
    }

    #[test]
    fn test_row_iteration() {
        let matrix = build_matrix("en", "fr", &sample_repo());
        let row: Vec<_> = matrix.row("Spearman").iter().map(|c| c.value).collect();
        assert_eq!(row, vec![17.0, 0.0, 0.0]);
        assert!(matrix.row("Nobody").is_empty());
    }
}
