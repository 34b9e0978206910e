use aoe4data::{Modifier, ModifierTarget, Unit, UnitRepository, Weapon};

pub struct UnitBuilder {
    unit: Unit,
}

impl UnitBuilder {
    pub fn new(base_id: &str, age: u8) -> Self {
        Self {
            unit: Unit {
                id: format!("{}-{}", base_id, age),
                base_id: base_id.to_string(),
                name: base_id.to_string(),
                age,
                ..Default::default()
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.unit.id = id.to_string();
        self
    }

    pub fn civs(mut self, civs: &[&str]) -> Self {
        self.unit.civs = civs.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn classes(mut self, classes: &[&str]) -> Self {
        self.unit.classes = classes.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Starts a new weapon; subsequent modifiers are attached to it.
    pub fn weapon(mut self, name: &str) -> Self {
        self.unit.weapons.push(Weapon {
            name: name.to_string(),
            ..Default::default()
        });
        self
    }

    /// Adds a modifier with a single target group.
    pub fn modifier(self, value: f64, classes: &[&str]) -> Self {
        self.modifier_groups(value, &[classes])
    }

    /// Adds a modifier to the most recent weapon, creating one if needed.
    pub fn modifier_groups(mut self, value: f64, groups: &[&[&str]]) -> Self {
        if self.unit.weapons.is_empty() {
            self = self.weapon("weapon");
        }
        let modifier = Modifier {
            property: "meleeAttack".to_string(),
            effect: "change".to_string(),
            value,
            target: ModifierTarget {
                class: groups
                    .iter()
                    .map(|g| g.iter().map(|c| c.to_string()).collect())
                    .collect(),
            },
        };
        if let Some(weapon) = self.unit.weapons.last_mut() {
            weapon.modifiers.push(modifier);
        }
        self
    }

    pub fn build(self) -> Unit {
        self.unit
    }
}

#[derive(Default)]
pub struct RepositoryBuilder {
    units: Vec<Unit>,
}

impl RepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn build(self) -> UnitRepository {
        UnitRepository::from_units(self.units)
    }
}
