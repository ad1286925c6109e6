//! Round-scoped turn currency and action order.

use std::collections::VecDeque;

use crate::combat::{TurnCost, TurnsSpent};
use crate::state::{Team, UnitId};

/// Where the acting side is within its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// No round has started yet.
    Idle,
    /// Turns remain.
    Active,
    /// Every turn was spent.
    Exhausted,
}

/// Full and blinking turns of the acting side plus its action queue.
///
/// A round starts with one full turn per active unit and no blinking turns.
/// The queue holds unit ids of the acting team; the acting unit is popped
/// with [`take_next`](Self::take_next) and appended back once its action
/// completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEconomy {
    full: u32,
    blinking: u32,
    queue: VecDeque<UnitId>,
    started: bool,
}

impl TurnEconomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the counters and builds the action order for `team`.
    ///
    /// Order is Spd descending, ties broken by board slot.
    pub fn start_round(&mut self, team: &Team) {
        let mut order = team.active_units();
        // Stable sort keeps slot order for equal speed.
        order.sort_by_key(|id| std::cmp::Reverse(team.unit(*id).map_or(0, |unit| unit.stats().spd)));

        self.full = order.len() as u32;
        self.blinking = 0;
        self.queue = order.into();
        self.started = true;
    }

    pub fn full(&self) -> u32 {
        self.full
    }

    pub fn blinking(&self) -> u32 {
        self.blinking
    }

    pub fn order(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.queue.iter().copied()
    }

    pub fn phase(&self) -> TurnPhase {
        if !self.started {
            TurnPhase::Idle
        } else if self.full > 0 || self.blinking > 0 {
            TurnPhase::Active
        } else {
            TurnPhase::Exhausted
        }
    }

    /// Pops the next unit able to act, discarding queued units that fell or
    /// left the board.
    pub fn take_next(&mut self, team: &Team) -> Option<UnitId> {
        self.queue.retain(|id| team.is_fieldable(*id));
        self.queue.pop_front()
    }

    pub fn has_turns_remaining(&self, team: &Team) -> bool {
        let has_turns = self.full > 0 || self.blinking > 0;
        has_turns && self.queue.iter().any(|id| team.is_fieldable(*id))
    }

    pub fn append(&mut self, id: UnitId) {
        self.queue.push_back(id);
    }

    /// Re-enqueues a unit after its action; any stale entry is dropped first.
    pub fn return_to_tail(&mut self, id: UnitId) {
        self.remove(id);
        self.append(id);
    }

    pub fn remove(&mut self, id: UnitId) {
        self.queue.retain(|queued| *queued != id);
    }

    /// Replaces `old` with `new` at the same queue position.
    ///
    /// Returns `false` (and leaves the queue untouched) when `old` is not queued.
    pub fn replace(&mut self, old: UnitId, new: UnitId) -> bool {
        match self.queue.iter_mut().find(|queued| **queued == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Queues a unit that just entered the board.
    ///
    /// Takes over the queue entry of the unit it displaced, if any; a unit
    /// filling an empty slot goes to the tail.
    pub fn swap_in(&mut self, displaced: Option<UnitId>, incoming: UnitId) {
        match displaced {
            Some(previous) => {
                self.replace(previous, incoming);
            }
            None => self.append(incoming),
        }
    }

    /// Spends turns according to `cost` and reports what was actually taken.
    ///
    /// Requests never drive a counter below zero.
    pub fn consume(&mut self, cost: TurnCost) -> TurnsSpent {
        match cost {
            TurnCost::ConsumeAll => {
                let spent = TurnsSpent::new(self.full, self.blinking, 0);
                self.full = 0;
                self.blinking = 0;
                spent
            }
            TurnCost::PassOrSummon => {
                if self.blinking > 0 {
                    self.blinking -= 1;
                    TurnsSpent::new(0, 1, 0)
                } else if self.full > 0 {
                    self.full -= 1;
                    self.blinking += 1;
                    TurnsSpent::new(1, 0, 1)
                } else {
                    TurnsSpent::NONE
                }
            }
            TurnCost::SkillAction => {
                if self.blinking > 0 {
                    self.blinking -= 1;
                    TurnsSpent::new(0, 1, 0)
                } else if self.full > 0 {
                    self.full -= 1;
                    TurnsSpent::new(1, 0, 0)
                } else {
                    TurnsSpent::NONE
                }
            }
            TurnCost::Weak => {
                if self.full > 0 {
                    self.full -= 1;
                    self.blinking += 1;
                    TurnsSpent::new(1, 0, 1)
                } else if self.blinking > 0 {
                    self.blinking -= 1;
                    TurnsSpent::new(0, 1, 0)
                } else {
                    TurnsSpent::NONE
                }
            }
            TurnCost::Generic {
                full,
                blinking,
                gained,
            } => {
                let mut spent = TurnsSpent::new(0, 0, gained);

                spent.blinking = self.blinking.min(blinking);
                self.blinking -= spent.blinking;

                // Blinking demand the counter could not cover falls on full turns.
                let overflow = self.full.min(blinking - spent.blinking);
                self.full -= overflow;

                let direct = self.full.min(full);
                self.full -= direct;
                spent.full = overflow + direct;

                self.blinking += gained;
                spent
            }
        }
    }
}
