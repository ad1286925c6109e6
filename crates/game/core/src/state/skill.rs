//! Skill definitions and the classification helpers used to dispatch them.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use super::affinity::Element;

/// What a skill does, as declared by its catalog `type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillType {
    /// Offensive skill of the given element.
    Attack(Element),
    Heal,
    Support,
    Special,
    /// Always-on effect; never appears in the skill menu.
    Passive,
}

impl SkillType {
    pub fn element(&self) -> Option<Element> {
        match self {
            SkillType::Attack(element) => Some(*element),
            _ => None,
        }
    }

    /// Reads a catalog type name. Unrecognized names are treated as `Special`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if let Ok(element) = name.parse::<Element>() {
            return SkillType::Attack(element);
        }
        match name {
            "Heal" => SkillType::Heal,
            "Support" => SkillType::Support,
            "Passive" => SkillType::Passive,
            _ => SkillType::Special,
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillType::Attack(element) => write!(f, "{}", element),
            SkillType::Heal => f.write_str("Heal"),
            SkillType::Support => f.write_str("Support"),
            SkillType::Special => f.write_str("Special"),
            SkillType::Passive => f.write_str("Passive"),
        }
    }
}

/// Who a skill is aimed at.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetMode {
    /// One chosen enemy.
    #[default]
    Single,
    /// Every enemy on the board.
    All,
    /// Several hits spread over enemies in a round-robin walk.
    Multi,
    /// Every ally on the board.
    Party,
    /// One chosen ally.
    Ally,
    #[strum(serialize = "Self")]
    Caster,
    /// Both sides.
    Universal,
}

/// Error returned when a hit specification cannot be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid hit specification '{0}'")]
pub struct HitSpecError(pub String);

/// Number of hits a skill lands per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitSpec {
    Fixed(u32),
    /// Inclusive range; the actual count rotates with the side's skill-use counter.
    Range { min: u32, max: u32 },
}

impl HitSpec {
    pub const SINGLE: Self = HitSpec::Fixed(1);

    /// Lenient parse used for catalog data: anything unreadable counts as one hit.
    pub fn parse_lenient(spec: &str) -> Self {
        spec.parse().unwrap_or(Self::SINGLE)
    }

    /// Hit count for the given skill-use counter.
    ///
    /// A range resolves to `min + counter % (max - min + 1)`.
    pub fn count(&self, counter: u32) -> u32 {
        match *self {
            HitSpec::Fixed(hits) => hits,
            HitSpec::Range { min, max } => min + counter % (max - min + 1),
        }
    }
}

impl Default for HitSpec {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl FromStr for HitSpec {
    type Err = HitSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(hits) = trimmed.parse::<u32>() {
            return Ok(HitSpec::Fixed(hits));
        }

        let invalid = || HitSpecError(s.to_string());
        let (min, max) = trimmed.split_once('-').ok_or_else(invalid)?;
        let min: u32 = min.trim().parse().map_err(|_| invalid())?;
        let max: u32 = max.trim().parse().map_err(|_| invalid())?;
        if max < min {
            return Err(invalid());
        }
        Ok(HitSpec::Range { min, max })
    }
}

impl fmt::Display for HitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitSpec::Fixed(hits) => write!(f, "{}", hits),
            HitSpec::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

bitflags! {
    /// Resources siphoned by an Almighty drain skill.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DrainKind: u8 {
        const HP = 1 << 0;
        const MP = 1 << 1;
    }
}

/// How the runtime should carry a skill out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillRole {
    /// Damage or instant-kill skill aimed at enemies.
    Offensive(Element),
    Heal,
    Revive,
    /// Brings a reserve unit onto the board. `revives` also accepts fallen units.
    Summon { revives: bool },
    /// Support effects with no resolution rules.
    Unsupported,
}

/// Immutable skill definition loaded from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub kind: SkillType,
    pub cost: u32,
    pub power: u32,
    pub target: TargetMode,
    pub hits: HitSpec,
    /// Free-text description; only keyword matches are meaningful.
    pub effect: String,
}

impl Skill {
    const SABBATMA: &'static str = "Sabbatma";
    const INVITATION: &'static str = "Invitation";

    pub fn new(name: impl Into<String>, kind: SkillType, cost: u32, power: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            cost,
            power,
            target: TargetMode::default(),
            hits: HitSpec::default(),
            effect: String::new(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetMode) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_hits(mut self, hits: HitSpec) -> Self {
        self.hits = hits;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    pub fn is_castable(&self) -> bool {
        self.kind != SkillType::Passive
    }

    pub fn heals(&self) -> bool {
        ["Heals HP", "heals HP"]
            .iter()
            .any(|keyword| self.effect.contains(keyword))
    }

    pub fn revives(&self) -> bool {
        self.effect.contains("Revive")
    }

    /// Resources drained per hit, for Almighty skills that mention "drains".
    pub fn drain_kind(&self) -> Option<DrainKind> {
        if self.kind != SkillType::Attack(Element::Almighty) || !self.effect.contains("drains") {
            return None;
        }
        let effect = self.effect.as_str();
        if effect.contains("HP/MP") || effect.contains("HP and MP") {
            Some(DrainKind::HP | DrainKind::MP)
        } else if effect.contains("HP") {
            Some(DrainKind::HP)
        } else if effect.contains("MP") {
            Some(DrainKind::MP)
        } else {
            None
        }
    }

    pub fn role(&self) -> SkillRole {
        let support_target = matches!(self.target, TargetMode::Ally | TargetMode::Party);

        if self.target == TargetMode::Ally && self.name == Self::SABBATMA {
            return SkillRole::Summon { revives: false };
        }
        if self.target == TargetMode::Ally && self.name == Self::INVITATION {
            return SkillRole::Summon { revives: true };
        }
        if support_target && self.revives() {
            return SkillRole::Revive;
        }
        if support_target && self.heals() {
            return SkillRole::Heal;
        }
        match (self.kind, self.target) {
            (SkillType::Attack(element), TargetMode::Single | TargetMode::All | TargetMode::Multi) => {
                SkillRole::Offensive(element)
            }
            _ => SkillRole::Unsupported,
        }
    }
}
