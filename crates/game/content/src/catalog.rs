//! In-memory unit and skill definitions.

use std::collections::HashMap;

use battle_core::{Skill, Unit, UnitKind};

/// Named unit and skill definitions a roster draws from.
///
/// Lookups hand out fresh copies, so two teams naming the same unit never
/// share HP or MP.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    skills: HashMap<String, Skill>,
    leaders: HashMap<String, Unit>,
    summonables: HashMap<String, Unit>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a skill; a later definition with the same name wins.
    pub fn insert_skill(&mut self, skill: Skill) {
        self.skills.insert(skill.name.clone(), skill);
    }

    /// Registers a unit under the table matching its kind.
    pub fn insert_unit(&mut self, unit: Unit) {
        let table = match unit.kind() {
            UnitKind::Leader => &mut self.leaders,
            UnitKind::Summonable => &mut self.summonables,
        };
        table.insert(unit.name().to_string(), unit);
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn leader(&self, name: &str) -> Option<Unit> {
        self.leaders.get(name).cloned()
    }

    pub fn summonable(&self, name: &str) -> Option<Unit> {
        self.summonables.get(name).cloned()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn unit_count(&self) -> usize {
        self.leaders.len() + self.summonables.len()
    }
}
