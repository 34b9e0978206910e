//! Static Age of Empires IV unit data.
//!
//! Loads the unit dataset into an immutable [`UnitRepository`] and exposes the
//! civilization code table and the numeric attribute accessors the views plot.

pub mod attributes;
pub mod civs;
pub mod repository;
pub mod units;

pub use attributes::{Age, UnitAttribute};
pub use civs::{CivEntry, CivTable};
pub use repository::{RepositoryError, UnitRepository};
pub use units::{Armor, Costs, Modifier, ModifierTarget, Movement, Sight, Unit, Weapon};
