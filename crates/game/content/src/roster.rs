//! Team roster text format.
//!
//! ```text
//! Player 1 Team
//! [Samurai] Flynn (Agi, Dia)
//! Pixie
//! Jack Frost
//! Player 2 Team
//! [Samurai] Walter
//! Slime
//! ```
//!
//! Lines before the first section header are ignored, as are blank lines.

use battle_core::{BattleConfig, Side, Team, TeamError, Unit};

use crate::catalog::Catalog;

/// Why a roster could not be turned into two teams.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("{0} has no leader")]
    MissingLeader(Side),

    #[error("{0} declares more than one leader")]
    DuplicateLeader(Side),

    #[error("unknown leader '{0}'")]
    UnknownLeader(String),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("unknown skill '{0}'")]
    UnknownSkill(String),

    #[error(transparent)]
    Team(#[from] TeamError),
}

pub struct RosterParser;

impl RosterParser {
    pub const PLAYER_ONE_HEADER: &'static str = "Player 1 Team";
    pub const PLAYER_TWO_HEADER: &'static str = "Player 2 Team";
    pub const LEADER_MARKER: &'static str = "[Samurai]";

    /// Builds both teams from roster text, resolving names through `catalog`.
    pub fn parse(text: &str, catalog: &Catalog) -> Result<(Team, Team), RosterError> {
        let mut sections: [Vec<&str>; 2] = [Vec::new(), Vec::new()];
        let mut current: Option<Side> = None;

        for line in text.lines().map(str::trim) {
            match line {
                Self::PLAYER_ONE_HEADER => current = Some(Side::J1),
                Self::PLAYER_TWO_HEADER => current = Some(Side::J2),
                "" => {}
                entry => {
                    if let Some(side) = current {
                        sections[side.index()].push(entry);
                    }
                }
            }
        }

        let [first, second] = sections;
        Ok((
            Self::parse_team(Side::J1, &first, catalog)?,
            Self::parse_team(Side::J2, &second, catalog)?,
        ))
    }

    fn parse_team(side: Side, lines: &[&str], catalog: &Catalog) -> Result<Team, RosterError> {
        let mut leader = None;
        let mut summonables = Vec::new();

        for line in lines {
            if let Some(declaration) = line.strip_prefix(Self::LEADER_MARKER) {
                if leader.is_some() {
                    return Err(RosterError::DuplicateLeader(side));
                }
                leader = Some(Self::parse_leader(declaration, catalog)?);
            } else {
                let unit = catalog
                    .summonable(line)
                    .ok_or_else(|| RosterError::UnknownUnit(line.to_string()))?;
                summonables.push(unit);
            }
        }

        let leader = leader.ok_or(RosterError::MissingLeader(side))?;
        Ok(Team::new(side, leader, summonables)?)
    }

    /// `Name (skill, skill, ...)`; the skill list is optional.
    fn parse_leader(declaration: &str, catalog: &Catalog) -> Result<Unit, RosterError> {
        let (name, skills) = match declaration.split_once('(') {
            Some((name, rest)) => (name.trim(), rest.trim().trim_end_matches(')')),
            None => (declaration.trim(), ""),
        };

        let mut leader = catalog
            .leader(name)
            .ok_or_else(|| RosterError::UnknownLeader(name.to_string()))?;

        let names: Vec<&str> = skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .collect();
        for skill_name in &names {
            let skill = catalog
                .skill(skill_name)
                .ok_or_else(|| RosterError::UnknownSkill(skill_name.to_string()))?;
            if !leader.learn(skill.clone()) {
                return Err(TeamError::TooManyLeaderSkills {
                    count: names.len(),
                    max: BattleConfig::MAX_LEADER_SKILLS,
                }
                .into());
            }
        }
        Ok(leader)
    }
}
