//! Action menus offered to the acting unit.

use battle_core::UnitKind;

/// An entry of the per-turn action menu. The string form is the menu label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
pub enum ActionChoice {
    #[strum(serialize = "Atacar")]
    Attack,
    #[strum(serialize = "Disparar")]
    Shoot,
    #[strum(serialize = "Usar Habilidad")]
    UseSkill,
    #[strum(serialize = "Invocar")]
    Summon,
    #[strum(serialize = "Pasar Turno")]
    Pass,
    #[strum(serialize = "Rendirse")]
    Surrender,
}

impl ActionChoice {
    pub const LEADER_MENU: [ActionChoice; 6] = [
        ActionChoice::Attack,
        ActionChoice::Shoot,
        ActionChoice::UseSkill,
        ActionChoice::Summon,
        ActionChoice::Pass,
        ActionChoice::Surrender,
    ];

    pub const SUMMONABLE_MENU: [ActionChoice; 4] = [
        ActionChoice::Attack,
        ActionChoice::UseSkill,
        ActionChoice::Summon,
        ActionChoice::Pass,
    ];

    pub fn menu(kind: UnitKind) -> &'static [ActionChoice] {
        match kind {
            UnitKind::Leader => &Self::LEADER_MENU,
            UnitKind::Summonable => &Self::SUMMONABLE_MENU,
        }
    }

    /// Menu entry for a 1-based `choice`, if it exists for `kind`.
    pub fn from_menu(kind: UnitKind, choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::menu(kind).get(index).copied()
    }
}

/// Whether an action went through or the player backed out of a sub-menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStatus {
    Completed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_differ_by_unit_kind() {
        assert_eq!(
            ActionChoice::from_menu(UnitKind::Leader, 2),
            Some(ActionChoice::Shoot)
        );
        assert_eq!(
            ActionChoice::from_menu(UnitKind::Summonable, 2),
            Some(ActionChoice::UseSkill)
        );
        assert_eq!(ActionChoice::from_menu(UnitKind::Summonable, 5), None);
        assert_eq!(ActionChoice::from_menu(UnitKind::Leader, 0), None);
        assert_eq!(ActionChoice::from_menu(UnitKind::Leader, -3), None);
        assert_eq!(ActionChoice::UseSkill.as_ref(), "Usar Habilidad");
    }
}
