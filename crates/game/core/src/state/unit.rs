use std::fmt;

use arrayvec::ArrayVec;

use super::affinity::{AffinityTable, Element};
use super::skill::Skill;
use crate::config::BattleConfig;

/// Identifier of a unit within its team.
///
/// The value is the unit's roster index: the leader is always `0`, summonable
/// units follow in the order the roster listed them. Reserve ordering relies on
/// this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    pub const LEADER: Self = Self(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Base statistics as they appear in the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    #[cfg_attr(feature = "serde", serde(rename = "HP"))]
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(rename = "MP"))]
    pub mp: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Str"))]
    pub str: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Skl"))]
    pub skl: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Mag"))]
    pub mag: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Spd"))]
    pub spd: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Lck"))]
    pub lck: u32,
}

impl Stats {
    /// Offensive stat used by `element`.
    ///
    /// Phys reads Strength, Gun reads Skill, the magic elements and Almighty read
    /// Magic. Light and Dark never deal damage and fall back to Strength.
    pub fn attack_stat(&self, element: Element) -> u32 {
        match element {
            Element::Gun => self.skl,
            Element::Fire | Element::Ice | Element::Elec | Element::Force | Element::Almighty => {
                self.mag
            }
            Element::Phys | Element::Light | Element::Dark => self.str,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    /// Stays on the board when defeated.
    Leader,
    /// Returns to the reserve when defeated and can be swapped in and out.
    Summonable,
}

/// A deserialized unit whose current resources exceed its base stats.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitStateError {
    #[error("{unit} has {current} HP, above its maximum of {max}")]
    HpAboveMax { unit: String, current: u32, max: u32 },

    #[error("{unit} has {current} MP, above its maximum of {max}")]
    MpAboveMax { unit: String, current: u32, max: u32 },
}

/// A combatant with base stats, current resources and learned skills.
///
/// Current HP and MP only change through the clamping methods below, so
/// `0 <= hp <= stats.hp` and `0 <= mp <= stats.mp` always hold. Deserialized
/// units are checked against the same bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UnitRecord")
)]
pub struct Unit {
    name: String,
    kind: UnitKind,
    stats: Stats,
    hp: u32,
    mp: u32,
    affinities: AffinityTable,
    skills: ArrayVec<Skill, { BattleConfig::MAX_UNIT_SKILLS }>,
}

/// Wire shape of [`Unit`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UnitRecord {
    name: String,
    kind: UnitKind,
    stats: Stats,
    hp: u32,
    mp: u32,
    affinities: AffinityTable,
    skills: ArrayVec<Skill, { BattleConfig::MAX_UNIT_SKILLS }>,
}

#[cfg(feature = "serde")]
impl TryFrom<UnitRecord> for Unit {
    type Error = UnitStateError;

    fn try_from(record: UnitRecord) -> Result<Self, Self::Error> {
        if record.hp > record.stats.hp {
            return Err(UnitStateError::HpAboveMax {
                unit: record.name,
                current: record.hp,
                max: record.stats.hp,
            });
        }
        if record.mp > record.stats.mp {
            return Err(UnitStateError::MpAboveMax {
                unit: record.name,
                current: record.mp,
                max: record.stats.mp,
            });
        }

        Ok(Self {
            name: record.name,
            kind: record.kind,
            stats: record.stats,
            hp: record.hp,
            mp: record.mp,
            affinities: record.affinities,
            skills: record.skills,
        })
    }
}

impl Unit {
    pub fn new(
        name: impl Into<String>,
        kind: UnitKind,
        stats: Stats,
        affinities: AffinityTable,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            stats,
            hp: stats.hp,
            mp: stats.mp,
            affinities,
            skills: ArrayVec::new(),
        }
    }

    pub fn leader(name: impl Into<String>, stats: Stats, affinities: AffinityTable) -> Self {
        Self::new(name, UnitKind::Leader, stats, affinities)
    }

    pub fn summonable(name: impl Into<String>, stats: Stats, affinities: AffinityTable) -> Self {
        Self::new(name, UnitKind::Summonable, stats, affinities)
    }

    /// Builder that teaches a skill. Skills past capacity are ignored.
    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.learn(skill);
        self
    }

    /// Teaches a skill. Returns `false` when the skill list is full.
    pub fn learn(&mut self, skill: Skill) -> bool {
        self.skills.try_push(skill).is_ok()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_leader(&self) -> bool {
        self.kind == UnitKind::Leader
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn mp(&self) -> u32 {
        self.mp
    }

    pub fn affinities(&self) -> &AffinityTable {
        &self.affinities
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Skills that can be cast right now: not passive and affordable.
    pub fn usable_skills(&self) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|skill| skill.is_castable() && skill.cost <= self.mp)
            .collect()
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.stats.hp);
    }

    pub fn consume_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_sub(amount);
    }

    pub fn restore_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_add(amount).min(self.stats.mp);
    }

    pub fn kill(&mut self) {
        self.hp = 0;
    }

    /// HP missing from the maximum.
    pub fn hp_deficit(&self) -> u32 {
        self.stats.hp - self.hp
    }

    pub fn mp_deficit(&self) -> u32 {
        self.stats.mp - self.mp
    }
}
