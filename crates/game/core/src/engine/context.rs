use crate::state::HitSpec;

/// Per-side bookkeeping that persists across rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideContext {
    skill_uses: u32,
}

impl SideContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skills used so far by this side. Drives range hit counts and the
    /// round-robin starting target.
    pub fn skill_uses(&self) -> u32 {
        self.skill_uses
    }

    pub fn hit_count(&self, hits: &HitSpec) -> u32 {
        hits.count(self.skill_uses)
    }

    pub fn record_skill_use(&mut self) {
        self.skill_uses += 1;
    }
}
