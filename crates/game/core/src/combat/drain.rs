use crate::state::{DrainKind, Unit};

/// Resources moved by one drain hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDrain {
    pub kind: DrainKind,
    pub hp: u32,
    pub mp: u32,
}

/// Siphons HP and/or MP from `target` into `attacker` after a hit of `damage`.
///
/// HP: `min(damage, target.hp)` is restored to the attacker (capped at its
/// maximum); the hit itself already took it from the target.
/// MP: `min(damage, target.mp)` leaves the target and is restored to the
/// attacker, again capped.
pub fn apply_drain(attacker: &mut Unit, target: &mut Unit, damage: u32, kind: DrainKind) -> StatDrain {
    let mut drain = StatDrain {
        kind,
        ..StatDrain::default()
    };

    if kind.contains(DrainKind::HP) {
        drain.hp = damage.min(target.hp());
        attacker.heal(drain.hp.min(attacker.hp_deficit()));
    }

    if kind.contains(DrainKind::MP) {
        drain.mp = damage.min(target.mp());
        attacker.restore_mp(drain.mp.min(attacker.mp_deficit()));
        target.consume_mp(drain.mp);
    }

    drain
}
