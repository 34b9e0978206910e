//! # AoE4 Combat Modifier Heatmap
//!
//! Computes, for every pair of civilizations, the attacker × defender grid of
//! conditional bonus damage, and serves filtered views of it.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ UnitRepository │────▶│ canonical    │────▶│ build_matrix  │
//! │ (aoe4data)     │     │ roster/names │     │ (per civ pair)│
//! └────────────────┘     └──────────────┘     └───────┬───────┘
//!                                                     │
//!                        ┌──────────────┐     ┌───────▼───────┐
//!                        │ filter_matrix│◀────│ Selection     │
//!                        │ (relevance)  │     │ Controller    │
//!                        └──────────────┘     └───────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`HeatmapMatrix`] | Dense bonus grid for one (attacker civ, defender civ) pair |
//! | [`MatrixCache`] | Every civ pair, precomputed once per dataset |
//! | [`RelevanceFilter`] | Which axes to prune of all-zero rows/columns |
//! | [`SelectionController`] | Current civ pair + filter toggles → current view |
//! | [`BonusScale`] | Maps cell values onto the display colour ramp |
//!
//! Everything here is synchronous and pure apart from logging; the
//! repository is read-only and matrices are never mutated once built.

pub mod config;
pub mod filter;
pub mod matrix;
pub mod modifiers;
pub mod names;
pub mod scale;
pub mod selection;
pub mod testing;


pub use config::{ConfigError, HeatmapConfig};
pub use filter::{filter_matrix, RelevanceFilter};
pub use matrix::{build_matrix, HeatmapMatrix, MatrixCache, ModifierCell};
pub use modifiers::{extract_modifiers, ClassBonus};
pub use names::{canonical_roster, canonicalize, prettify_unit_name, CanonicalUnit};
pub use scale::BonusScale;
pub use selection::{SelectionController, SelectionError};
