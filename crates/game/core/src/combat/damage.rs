//! Base damage calculation.

use crate::config::CombatParams;
use crate::state::{Element, Stats};

/// Calculate the unscaled damage of an attack.
///
/// # Formula
///
/// ```text
/// stat = attacker attack stat for the element
///
/// with skill power:  sqrt(stat * power)
/// basic attack:      stat * modifier * damage_scale
///     modifier = gun_modifier for Gun, melee_modifier otherwise
/// ```
///
/// The result is not truncated; affinity scaling floors it afterwards.
pub fn base_damage(
    attacker: &Stats,
    element: Element,
    skill_power: Option<u32>,
    params: &CombatParams,
) -> f64 {
    let stat = f64::from(attacker.attack_stat(element));

    match skill_power {
        Some(power) => (stat * f64::from(power)).sqrt(),
        None => {
            let modifier = if element == Element::Gun {
                params.gun_modifier
            } else {
                params.melee_modifier
            };
            stat * modifier * params.damage_scale
        }
    }
}

/// Truncates a scaled damage value to whole hit points.
pub fn truncate(value: f64) -> u32 {
    if value <= 0.0 { 0 } else { value.floor() as u32 }
}

/// HP restored by a heal or revive of `power` percent of `max_hp`.
pub fn heal_amount(max_hp: u32, power: u32) -> u32 {
    truncate(f64::from(max_hp) * (f64::from(power) / 100.0))
}
