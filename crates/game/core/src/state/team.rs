//! Squad ownership: roster, board slots and reserve.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use super::unit::{Unit, UnitId, UnitKind};
use crate::config::BattleConfig;
use crate::error::{BattleError, ClassifiedError, ErrorSeverity};

/// The two players. Player one always opens the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    J1,
    J2,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::J1 => Side::J2,
            Side::J2 => Side::J1,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::J1 => 0,
            Side::J2 => 1,
        }
    }
}

/// Roster rules violated while assembling a team.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("team leader '{0}' is not a leader unit")]
    LeaderKind(String),

    #[error("unit '{0}' cannot join as a summonable unit")]
    SummonableKind(String),

    #[error("team has {count} summonable units (max {max})")]
    TooManySummonables { count: usize, max: usize },

    #[error("team has {count} units (max {max})")]
    TooManyUnits { count: usize, max: usize },

    #[error("unit '{0}' appears more than once")]
    DuplicateUnit(String),

    #[error("leader has {count} skills (max {max})")]
    TooManyLeaderSkills { count: usize, max: usize },

    #[error("leader skill '{0}' appears more than once")]
    DuplicateLeaderSkill(String),
}

impl ClassifiedError for TeamError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LeaderKind(_) => "TEAM_LEADER_KIND",
            Self::SummonableKind(_) => "TEAM_SUMMONABLE_KIND",
            Self::TooManySummonables { .. } => "TEAM_TOO_MANY_SUMMONABLES",
            Self::TooManyUnits { .. } => "TEAM_TOO_MANY_UNITS",
            Self::DuplicateUnit(_) => "TEAM_DUPLICATE_UNIT",
            Self::TooManyLeaderSkills { .. } => "TEAM_TOO_MANY_LEADER_SKILLS",
            Self::DuplicateLeaderSkill(_) => "TEAM_DUPLICATE_LEADER_SKILL",
        }
    }
}

type Board = [Option<UnitId>; BattleConfig::BOARD_SIZE];

/// One side's units and their placement.
///
/// The leader always holds slot 0, even when defeated. The first three
/// summonable units start in slots 1..=3; the rest wait in the reserve, which is
/// kept sorted by roster order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    side: Side,
    units: ArrayVec<Unit, { BattleConfig::MAX_UNITS }>,
    board: Board,
    reserve: ArrayVec<UnitId, { BattleConfig::MAX_SUMMONABLES }>,
}

impl Team {
    pub fn new(side: Side, leader: Unit, summonables: Vec<Unit>) -> Result<Self, TeamError> {
        Self::validate(&leader, &summonables)?;

        let mut units = ArrayVec::new();
        units.push(leader);
        units.extend(summonables);

        let mut board: Board = [None; BattleConfig::BOARD_SIZE];
        board[BattleConfig::LEADER_SLOT] = Some(UnitId::LEADER);

        let mut reserve = ArrayVec::new();
        for index in 1..units.len() {
            let id = UnitId(index as u32);
            if index < BattleConfig::BOARD_SIZE {
                board[index] = Some(id);
            } else {
                reserve.push(id);
            }
        }

        Ok(Self {
            side,
            units,
            board,
            reserve,
        })
    }

    fn validate(leader: &Unit, summonables: &[Unit]) -> Result<(), TeamError> {
        if leader.kind() != UnitKind::Leader {
            return Err(TeamError::LeaderKind(leader.name().to_string()));
        }
        if let Some(unit) = summonables
            .iter()
            .find(|unit| unit.kind() != UnitKind::Summonable)
        {
            return Err(TeamError::SummonableKind(unit.name().to_string()));
        }
        if summonables.len() > BattleConfig::MAX_SUMMONABLES {
            return Err(TeamError::TooManySummonables {
                count: summonables.len(),
                max: BattleConfig::MAX_SUMMONABLES,
            });
        }
        let total = summonables.len() + 1;
        if total > BattleConfig::MAX_UNITS {
            return Err(TeamError::TooManyUnits {
                count: total,
                max: BattleConfig::MAX_UNITS,
            });
        }

        let mut names = HashSet::new();
        for unit in std::iter::once(leader).chain(summonables) {
            if !names.insert(unit.name()) {
                return Err(TeamError::DuplicateUnit(unit.name().to_string()));
            }
        }

        let skills = leader.skills();
        if skills.len() > BattleConfig::MAX_LEADER_SKILLS {
            return Err(TeamError::TooManyLeaderSkills {
                count: skills.len(),
                max: BattleConfig::MAX_LEADER_SKILLS,
            });
        }
        let mut skill_names = HashSet::new();
        for skill in skills {
            if !skill_names.insert(skill.name.as_str()) {
                return Err(TeamError::DuplicateLeaderSkill(skill.name.clone()));
            }
        }

        Ok(())
    }

    // ===== lookups =====

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn leader(&self) -> &Unit {
        &self.units[UnitId::LEADER.index()]
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id.index())
    }

    /// Like [`Team::unit`] but reports unknown ids as an error.
    pub fn get(&self, id: UnitId) -> Result<&Unit, BattleError> {
        self.unit(id).ok_or(BattleError::UnknownUnit(id))
    }

    pub fn get_mut(&mut self, id: UnitId) -> Result<&mut Unit, BattleError> {
        self.unit_mut(id).ok_or(BattleError::UnknownUnit(id))
    }

    pub fn units(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| (UnitId(index as u32), unit))
    }

    pub fn board(&self) -> &[Option<UnitId>] {
        &self.board
    }

    pub fn occupant(&self, slot: usize) -> Option<UnitId> {
        self.board.get(slot).copied().flatten()
    }

    pub fn slot_of(&self, id: UnitId) -> Option<usize> {
        self.board.iter().position(|slot| *slot == Some(id))
    }

    pub fn reserve(&self) -> &[UnitId] {
        &self.reserve
    }

    fn is_alive(&self, id: UnitId) -> bool {
        self.unit(id).is_some_and(Unit::is_alive)
    }

    /// Alive units on the board, in slot order.
    pub fn active_units(&self) -> Vec<UnitId> {
        self.board
            .iter()
            .flatten()
            .copied()
            .filter(|id| self.is_alive(*id))
            .collect()
    }

    pub fn has_active_units(&self) -> bool {
        self.board.iter().flatten().any(|id| self.is_alive(*id))
    }

    /// Alive and on the board.
    pub fn is_fieldable(&self, id: UnitId) -> bool {
        self.is_alive(id) && self.slot_of(id).is_some()
    }

    /// Reserve units eligible for a summon, in reserve order.
    pub fn summon_candidates(&self, include_fallen: bool) -> Vec<UnitId> {
        self.reserve
            .iter()
            .copied()
            .filter(|id| include_fallen || self.is_alive(*id))
            .collect()
    }

    /// Fallen allies a revive can reach: a fallen leader first, then fallen
    /// reserve units in reserve order.
    pub fn revive_candidates(&self) -> Vec<UnitId> {
        let leader_down = !self.leader().is_alive() && self.slot_of(UnitId::LEADER).is_some();
        let mut candidates: Vec<UnitId> = self
            .reserve
            .iter()
            .copied()
            .filter(|id| !self.is_alive(*id))
            .collect();
        if leader_down {
            candidates.insert(0, UnitId::LEADER);
        }
        candidates
    }

    // ===== mutations =====

    fn insert_into_reserve(&mut self, id: UnitId) {
        let position = self
            .reserve
            .iter()
            .position(|queued| *queued > id)
            .unwrap_or(self.reserve.len());
        self.reserve.insert(position, id);
    }

    fn take_from_reserve(&mut self, id: UnitId) -> Result<(), BattleError> {
        let position = self
            .reserve
            .iter()
            .position(|queued| *queued == id)
            .ok_or(BattleError::NotInReserve(id))?;
        self.reserve.remove(position);
        Ok(())
    }

    /// Moves a fallen summonable unit from the board to the reserve.
    ///
    /// Returns `true` when the unit left the board. Living units and the leader
    /// stay where they are.
    pub fn bench_if_fallen(&mut self, id: UnitId) -> bool {
        let Some(unit) = self.unit(id) else {
            return false;
        };
        if unit.is_alive() || unit.is_leader() {
            return false;
        }
        let Some(slot) = self.slot_of(id) else {
            return false;
        };
        self.board[slot] = None;
        self.insert_into_reserve(id);
        true
    }

    /// Places a reserve unit into field slot `slot` (1..=3).
    ///
    /// The previous occupant, if any, returns to the reserve. Returns the
    /// displaced unit.
    pub fn summon_to_slot(&mut self, id: UnitId, slot: usize) -> Result<Option<UnitId>, BattleError> {
        if slot == BattleConfig::LEADER_SLOT || slot >= BattleConfig::BOARD_SIZE {
            return Err(BattleError::InvalidSlot { slot });
        }
        self.take_from_reserve(id)?;

        let displaced = self.board[slot].take();
        if let Some(previous) = displaced {
            self.insert_into_reserve(previous);
        }
        self.board[slot] = Some(id);
        Ok(displaced)
    }

    /// Swaps an on-board summonable unit with a reserve unit in the same slot.
    pub fn swap_with_reserve(&mut self, current: UnitId, incoming: UnitId) -> Result<usize, BattleError> {
        if current == UnitId::LEADER {
            return Err(BattleError::LeaderNotSwappable(current));
        }
        let slot = self.slot_of(current).ok_or(BattleError::NotOnBoard(current))?;
        self.summon_to_slot(incoming, slot)?;
        Ok(slot)
    }

    /// Knocks out the leader and every unit on the board.
    pub fn surrender(&mut self) {
        for id in self.active_units() {
            if let Some(unit) = self.unit_mut(id) {
                unit.kill();
            }
        }
        if let Some(leader) = self.unit_mut(UnitId::LEADER) {
            leader.kill();
        }
    }
}
