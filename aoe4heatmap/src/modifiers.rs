//! Flattening of weapon modifiers into per-class bonuses.

use aoe4data::Unit;
use serde::Serialize;

/// Bonus damage a unit deals against defenders carrying `class`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBonus {
    pub class: String,
    pub value: f64,
}

/// Every (class, value) pair the unit's modifiers target.
///
/// Order follows weapons → modifiers → target groups → classes. Nothing is
/// deduplicated: a class targeted by two modifiers appears twice, and the
/// matrix builder lets the later entry win.
pub fn extract_modifiers(unit: &Unit) -> Vec<ClassBonus> {
    unit.weapons
        .iter()
        .flat_map(|weapon| weapon.modifiers.iter())
        .flat_map(|modifier| {
            modifier.target.classes().map(move |class| ClassBonus {
                class: class.to_string(),
                value: modifier.value,
            })
        })
        .collect()
}
