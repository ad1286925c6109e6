//! Elements and the per-unit reaction table.

use crate::config::BattleConfig;

/// Attack element.
///
/// The string forms match the catalog data (`"Phys"`, `"Gun"`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Phys,
    Gun,
    Fire,
    Ice,
    Elec,
    Force,
    Light,
    Dark,
    Almighty,
}

impl Element {
    /// Elements with an explicit affinity entry, in table order.
    pub const TABLE_ORDER: [Element; BattleConfig::AFFINITY_SLOTS] = [
        Element::Phys,
        Element::Gun,
        Element::Fire,
        Element::Ice,
        Element::Elec,
        Element::Force,
        Element::Light,
        Element::Dark,
    ];

    /// Light and Dark resolve through the luck contest instead of damage.
    pub const fn is_instant_kill(self) -> bool {
        matches!(self, Element::Light | Element::Dark)
    }

    /// Index into [`AffinityTable`]; `None` for Almighty.
    pub const fn slot(self) -> Option<usize> {
        match self {
            Element::Phys => Some(0),
            Element::Gun => Some(1),
            Element::Fire => Some(2),
            Element::Ice => Some(3),
            Element::Elec => Some(4),
            Element::Force => Some(5),
            Element::Light => Some(6),
            Element::Dark => Some(7),
            Element::Almighty => None,
        }
    }
}

/// How a unit reacts to one element.
///
/// String forms are the catalog codes: `-`, `Wk`, `Rs`, `Nu`, `Rp`, `Dr`.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affinity {
    #[default]
    #[strum(serialize = "-")]
    Neutral,
    #[strum(serialize = "Wk")]
    Weak,
    #[strum(serialize = "Rs")]
    Resist,
    #[strum(serialize = "Nu")]
    Null,
    #[strum(serialize = "Rp")]
    Repel,
    #[strum(serialize = "Dr")]
    Drain,
}

impl Affinity {
    /// Parses a catalog code. Unknown codes read as neutral.
    pub fn from_code(code: &str) -> Self {
        code.trim().parse().unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Affinity::Neutral => "-",
            Affinity::Weak => "Wk",
            Affinity::Resist => "Rs",
            Affinity::Null => "Nu",
            Affinity::Repel => "Rp",
            Affinity::Drain => "Dr",
        }
    }
}

/// Fixed mapping from the eight tabled elements to an [`Affinity`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityTable {
    slots: [Affinity; BattleConfig::AFFINITY_SLOTS],
}

impl AffinityTable {
    pub fn new(slots: [Affinity; BattleConfig::AFFINITY_SLOTS]) -> Self {
        Self { slots }
    }

    /// Table where every element reads as neutral.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Builder that overrides a single element.
    #[must_use]
    pub fn with(mut self, element: Element, affinity: Affinity) -> Self {
        if let Some(slot) = element.slot() {
            self.slots[slot] = affinity;
        }
        self
    }

    /// Affinity toward `element`. Almighty is always neutral.
    pub fn get(&self, element: Element) -> Affinity {
        element
            .slot()
            .map(|slot| self.slots[slot])
            .unwrap_or(Affinity::Neutral)
    }
}
