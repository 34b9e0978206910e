//! Pruning of rows and columns that carry no bonus at all.

use crate::matrix::HeatmapMatrix;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which axes of a matrix to restrict to relevant (non-zero) units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceFilter {
    pub attackers: bool,
    pub defenders: bool,
}

impl RelevanceFilter {
    pub const NONE: RelevanceFilter = RelevanceFilter {
        attackers: false,
        defenders: false,
    };

    pub fn new(attackers: bool, defenders: bool) -> Self {
        Self {
            attackers,
            defenders,
        }
    }

    pub fn is_active(&self) -> bool {
        self.attackers || self.defenders
    }
}

/// Returns a copy of `matrix` without all-zero attacker rows and/or defender
/// columns.
///
/// Attackers are pruned first; the defender pass only sees the cells that
/// survived it. A row or column with no cells left counts as all-zero. The
/// input is left untouched and `max_bonus` is carried over unchanged.
pub fn filter_matrix(matrix: &HeatmapMatrix, filter: RelevanceFilter) -> HeatmapMatrix {
    let mut result = matrix.clone();

    if filter.attackers {
        let relevant: HashSet<&str> = matrix
            .cells
            .iter()
            .filter(|c| c.value != 0.0)
            .map(|c| c.attacker.as_str())
            .collect();
        result
            .attacker_names
            .retain(|name| relevant.contains(name.as_str()));
        result
            .cells
            .retain(|c| relevant.contains(c.attacker.as_str()));
    }

    if filter.defenders {
        let relevant: HashSet<String> = result
            .cells
            .iter()
            .filter(|c| c.value != 0.0)
            .map(|c| c.defender.clone())
            .collect();
        result.defender_names.retain(|name| relevant.contains(name));
        result.cells.retain(|c| relevant.contains(&c.defender));
    }

    result
}
