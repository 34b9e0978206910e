//! Display names and canonical (lowest age) unit selection.

use aoe4data::{Unit, UnitRepository};
use std::collections::HashMap;

/// The one identifier whose display form is not derived by the general rule.
const MAN_AT_ARMS: (&str, &str) = ("man-at-arms", "Man-At-Arms");

/// Converts a hyphenated identifier into its display name.
///
/// Hyphens become spaces and the first word character of every word is
/// upper-cased; the remaining characters are left as they are.
/// `"light-cavalry-archer"` → `"Light Cavalry Archer"`.
pub fn prettify_unit_name(base_id: &str) -> String {
    if base_id == MAN_AT_ARMS.0 {
        return MAN_AT_ARMS.1.to_string();
    }

    let mut out = String::with_capacity(base_id.len());
    let mut word_start = true;
    for c in base_id.chars() {
        let c = if c == '-' { ' ' } else { c };
        if word_start && is_word_char(c) {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The representative of all same-named variants of a unit in one civilization.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalUnit<'a> {
    pub name: String,
    pub civ: String,
    pub unit: &'a Unit,
}

/// Picks the lowest-age unit among `units`, all sharing `display_name`.
///
/// When several variants share the lowest age the one encountered last wins.
///
/// # Panics
///
/// If `units` is empty. Groups are only ever formed from observed units, so
/// an empty group is a logic error upstream.
pub fn canonicalize<'a>(display_name: &str, civ: &str, units: &[&'a Unit]) -> CanonicalUnit<'a> {
    assert!(
        !units.is_empty(),
        "canonicalize called with no units for {}",
        display_name
    );

    let unit = units[1..].iter().copied().fold(units[0], |acc, unit| {
        if acc.age < unit.age {
            acc
        } else {
            unit
        }
    });

    CanonicalUnit {
        name: display_name.to_string(),
        civ: civ.to_string(),
        unit,
    }
}

/// One canonical unit per display name fielded by `civ`, in order of first
/// appearance in the repository.
pub fn canonical_roster<'a>(repo: &'a UnitRepository, civ: &str) -> Vec<CanonicalUnit<'a>> {
    let mut groups: Vec<(String, Vec<&'a Unit>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for unit in repo.units().iter().filter(|u| u.belongs_to(civ)) {
        let name = prettify_unit_name(&unit.base_id);
        match index.get(&name) {
            Some(&i) => groups[i].1.push(unit),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push((name, vec![unit]));
            }
        }
    }

    groups
        .iter()
        .map(|(name, units)| canonicalize(name, civ, units))
        .collect()
}
