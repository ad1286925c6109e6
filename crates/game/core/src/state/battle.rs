use super::team::{Side, Team};

/// Both teams of a match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    teams: [Team; 2],
}

impl BattleState {
    pub fn new(first: Team, second: Team) -> Self {
        Self {
            teams: [first, second],
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        &mut self.teams[side.index()]
    }

    /// Mutable access to the acting team and its opponent at once.
    pub fn split_mut(&mut self, acting: Side) -> (&mut Team, &mut Team) {
        let [first, second] = &mut self.teams;
        match acting {
            Side::J1 => (first, second),
            Side::J2 => (second, first),
        }
    }

    /// The match ends as soon as either side has nobody left on the board.
    pub fn is_over(&self) -> bool {
        self.teams.iter().any(|team| !team.has_active_units())
    }

    /// Winning side once the match is over. Player one is checked first.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        if !self.team(Side::J1).has_active_units() {
            Some(Side::J2)
        } else {
            Some(Side::J1)
        }
    }
}
