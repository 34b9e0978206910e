//! Numeric unit attributes as plotted by the stat views.
//!
//! Missing data reads as zero: a unit without weapons has 0 weapon damage,
//! a unit without a ranged armor entry has 0 ranged armor.

use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitAttribute {
    Hitpoints,
    LineOfSight,
    Speed,
    WeaponDamage,
    Food,
    Gold,
    Wood,
    MeleeArmor,
    RangedArmor,
}

impl UnitAttribute {
    pub const ALL: [UnitAttribute; 9] = [
        UnitAttribute::Hitpoints,
        UnitAttribute::LineOfSight,
        UnitAttribute::Speed,
        UnitAttribute::WeaponDamage,
        UnitAttribute::Food,
        UnitAttribute::Gold,
        UnitAttribute::Wood,
        UnitAttribute::MeleeArmor,
        UnitAttribute::RangedArmor,
    ];

    pub fn title(self) -> &'static str {
        match self {
            UnitAttribute::Hitpoints => "Hitpoints",
            UnitAttribute::LineOfSight => "Line of sight",
            UnitAttribute::Speed => "Speed",
            UnitAttribute::WeaponDamage => "Weapon damage",
            UnitAttribute::Food => "Food",
            UnitAttribute::Gold => "Gold",
            UnitAttribute::Wood => "Wood",
            UnitAttribute::MeleeArmor => "Melee armor",
            UnitAttribute::RangedArmor => "Ranged armor",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.title() == title)
    }

    pub fn value(self, unit: &Unit) -> f64 {
        match self {
            UnitAttribute::Hitpoints => unit.hitpoints,
            UnitAttribute::LineOfSight => unit.sight.line,
            UnitAttribute::Speed => unit.movement.speed,
            UnitAttribute::WeaponDamage => unit.primary_weapon().map_or(0.0, |w| w.damage),
            UnitAttribute::Food => unit.costs.food,
            UnitAttribute::Gold => unit.costs.gold,
            UnitAttribute::Wood => unit.costs.wood,
            UnitAttribute::MeleeArmor => unit.armor_value("melee"),
            UnitAttribute::RangedArmor => unit.armor_value("ranged"),
        }
    }
}

impl fmt::Display for UnitAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Age number rendered as a roman numeral (ages run I-IV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(pub u8);

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("I"),
            2 => f.write_str("II"),
            3 => f.write_str("III"),
            4 => f.write_str("IV"),
            n => write!(f, "{}", n),
        }
    }
}
