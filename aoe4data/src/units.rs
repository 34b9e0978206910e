use serde::{Deserialize, Serialize};

/// A single unit record from the dataset.
///
/// The same named unit usually appears several times, once per age variant
/// (e.g. `archer-1`, `archer-2`, ... all sharing `base_id = "archer"`).
/// Everything except the identifiers is optional in the source data and
/// defaults to zero/empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Unique identifier of this age variant (e.g. "archer-2")
    pub id: String,
    /// Identifier shared by all age variants (e.g. "archer")
    pub base_id: String,
    /// Display name as shipped in the dataset
    #[serde(default)]
    pub name: String,
    /// Age the variant becomes available in (1-4)
    #[serde(default)]
    pub age: u8,
    /// Civilization codes fielding this unit
    #[serde(default)]
    pub civs: Vec<String>,
    /// Class tags, matched against modifier targets
    #[serde(default)]
    pub classes: Vec<String>,
    /// Human readable classes; the first one is shown in the unit table
    #[serde(default)]
    pub display_classes: Vec<String>,
    #[serde(default)]
    pub hitpoints: f64,
    #[serde(default)]
    pub costs: Costs,
    #[serde(default)]
    pub sight: Sight,
    #[serde(default)]
    pub movement: Movement,
    #[serde(default)]
    pub armor: Vec<Armor>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

impl Unit {
    pub fn belongs_to(&self, civ: &str) -> bool {
        self.civs.iter().any(|c| c == civ)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The weapon the stat views read damage and type from.
    pub fn primary_weapon(&self) -> Option<&Weapon> {
        self.weapons.first()
    }

    /// Armor value of the given kind ("melee", "ranged"), 0 if the unit has none.
    pub fn armor_value(&self, kind: &str) -> f64 {
        self.armor
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.value)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Costs {
    pub food: f64,
    pub wood: f64,
    pub stone: f64,
    pub gold: f64,
    pub total: f64,
    pub popcap: f64,
    /// Training time in seconds
    pub time: f64,
}

impl Costs {
    /// Sum of the four gathered resources.
    ///
    /// Differs from `total`, which upstream also folds special resources into.
    pub fn resource_total(&self) -> f64 {
        self.food + self.gold + self.stone + self.wood
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sight {
    pub line: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movement {
    pub speed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Armor {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: f64,
    /// Seconds between attacks
    pub speed: f64,
    pub modifiers: Vec<Modifier>,
}

/// Conditional bonus damage carried by a weapon.
///
/// Fires against any defender carrying at least one class listed in any of
/// the target groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifier {
    /// Stat the modifier applies to (e.g. "meleeAttack")
    pub property: String,
    /// How the value is applied (e.g. "change")
    pub effect: String,
    pub value: f64,
    pub target: ModifierTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierTarget {
    /// Groups of class tags. Upstream nests them, but for matching purposes
    /// every class in every group is an alternative.
    pub class: Vec<Vec<String>>,
}

impl ModifierTarget {
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.iter().flatten().map(String::as_str)
    }
}
