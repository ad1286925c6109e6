/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Numeric parameters used when resolving attacks.
    pub combat: CombatParams,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Board slots per team. Slot 0 belongs to the leader.
    pub const BOARD_SIZE: usize = 4;
    pub const LEADER_SLOT: usize = 0;
    /// Summonable units a team may bring.
    pub const MAX_SUMMONABLES: usize = 7;
    /// Leader plus summonables.
    pub const MAX_UNITS: usize = 8;
    pub const MAX_LEADER_SKILLS: usize = 8;
    /// Skills any single unit can hold.
    pub const MAX_UNIT_SKILLS: usize = 16;
    /// Elements that carry an explicit affinity entry (Almighty has none).
    pub const AFFINITY_SLOTS: usize = 8;

    pub fn new() -> Self {
        Self {
            combat: CombatParams::default(),
        }
    }

    pub fn with_combat(combat: CombatParams) -> Self {
        Self { combat }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Damage and luck-contest parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatParams {
    /// Element modifier for basic melee attacks.
    pub melee_modifier: f64,
    /// Element modifier for basic gun attacks.
    pub gun_modifier: f64,
    /// Scaling constant applied to basic attacks.
    pub damage_scale: f64,
    pub weak_multiplier: f64,
    pub resist_multiplier: f64,
    /// Target luck is multiplied by this when an instant kill hits a resistant unit.
    pub resist_luck_factor: u32,
}

impl CombatParams {
    pub const DEFAULT_MELEE_MODIFIER: f64 = 54.0;
    pub const DEFAULT_GUN_MODIFIER: f64 = 80.0;
    pub const DEFAULT_DAMAGE_SCALE: f64 = 0.0114;
    pub const DEFAULT_WEAK_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_RESIST_MULTIPLIER: f64 = 0.5;
    pub const DEFAULT_RESIST_LUCK_FACTOR: u32 = 2;
}

impl Default for CombatParams {
    fn default() -> Self {
        Self {
            melee_modifier: Self::DEFAULT_MELEE_MODIFIER,
            gun_modifier: Self::DEFAULT_GUN_MODIFIER,
            damage_scale: Self::DEFAULT_DAMAGE_SCALE,
            weak_multiplier: Self::DEFAULT_WEAK_MULTIPLIER,
            resist_multiplier: Self::DEFAULT_RESIST_MULTIPLIER,
            resist_luck_factor: Self::DEFAULT_RESIST_LUCK_FACTOR,
        }
    }
}
