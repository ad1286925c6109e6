//! Every line the match shows, in one place.
//!
//! The session decides *what* happened; the presenter turns it into the exact
//! strings of the match surface and forwards them to the [`BattleView`].

use battle_core::{AttackOutcome, BattleConfig, Element, Side, Skill, Team, TurnsSpent, Unit};

use crate::api::{BattleView, Result};

pub const SEPARATOR: &str = "----------------------------------------";
pub const CANCEL: &str = "Cancelar";
pub const INVALID_TEAM: &str = "Archivo de equipos inválido";
pub const CHOOSE_TEAM_FILE: &str = "Elige un archivo para cargar los equipos";

/// Narration verb for an attack of `element`.
pub fn attack_verb(element: Element) -> &'static str {
    match element {
        Element::Gun => "dispara a",
        Element::Fire => "lanza fuego a",
        Element::Ice => "lanza hielo a",
        Element::Elec => "lanza electricidad a",
        Element::Force => "lanza viento a",
        Element::Light => "ataca con luz a",
        Element::Dark => "ataca con oscuridad a",
        Element::Phys | Element::Almighty => "ataca a",
    }
}

fn unit_status(unit: &Unit) -> String {
    format!(
        "{} HP:{}/{} MP:{}/{}",
        unit.name(),
        unit.hp(),
        unit.stats().hp,
        unit.mp(),
        unit.stats().mp
    )
}

pub struct Presenter<V> {
    view: V,
}

impl<V: BattleView> Presenter<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn line(&mut self, line: &str) {
        self.view.write_line(line);
    }

    pub fn separator(&mut self) {
        self.line(SEPARATOR);
    }

    /// Reads a menu choice. Tokens that are not integers yield `None`.
    pub fn read_choice(&mut self) -> Result<Option<i64>> {
        let input = self.view.read_line()?;
        Ok(input.trim().parse().ok())
    }

    /// Reads a 1-based pick among `count` options as a 0-based index.
    pub fn read_option(&mut self, count: usize) -> Result<Option<usize>> {
        Ok(self
            .read_choice()?
            .filter(|choice| (1..=count as i64).contains(choice))
            .map(|choice| choice as usize - 1))
    }

    // ===== match frame =====

    pub fn round_header(&mut self, leader: &str, side: Side) {
        self.separator();
        self.line(&format!("Ronda de {leader} ({side})"));
    }

    pub fn board(&mut self, team: &Team) {
        self.line(&format!("Equipo de {} ({})", team.leader().name(), team.side()));
        for slot in 0..BattleConfig::BOARD_SIZE {
            let label = char::from(b'A' + slot as u8);
            match team.occupant(slot).and_then(|id| team.unit(id)) {
                Some(unit) => self.line(&format!("{label}-{}", unit_status(unit))),
                None => self.line(&format!("{label}-")),
            }
        }
    }

    pub fn turn_counters(&mut self, full: u32, blinking: u32) {
        self.separator();
        self.line(&format!("Full Turns: {full}"));
        self.line(&format!("Blinking Turns: {blinking}"));
    }

    pub fn action_order<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.separator();
        self.line("Orden:");
        for (index, name) in names.into_iter().enumerate() {
            self.line(&format!("{}-{name}", index + 1));
        }
    }

    pub fn winner(&mut self, leader: &str, side: Side) {
        self.separator();
        self.line(&format!("Ganador: {leader} ({side})"));
    }

    // ===== menus =====

    pub fn action_menu(&mut self, unit: &str, labels: &[&str]) {
        self.line(&format!("Seleccione una acción para {unit}"));
        for (index, label) in labels.iter().enumerate() {
            self.line(&format!("{}: {label}", index + 1));
        }
    }

    pub fn target_menu(&mut self, actor: &str, candidates: &[&Unit]) {
        self.separator();
        self.line(&format!("Seleccione un objetivo para {actor}"));
        self.unit_options(candidates);
    }

    pub fn skill_menu(&mut self, actor: &str, skills: &[&Skill]) {
        self.separator();
        self.line(&format!("Seleccione una habilidad para que {actor} use"));
        for (index, skill) in skills.iter().enumerate() {
            self.line(&format!("{}-{} MP:{}", index + 1, skill.name, skill.cost));
        }
        self.line(&format!("{}-{CANCEL}", skills.len() + 1));
    }

    pub fn summon_menu(&mut self, candidates: &[&Unit]) {
        self.separator();
        self.line("Seleccione un monstruo para invocar");
        self.unit_options(candidates);
    }

    /// Field slots 1..=3 with their occupants.
    pub fn slot_menu(&mut self, team: &Team) {
        self.separator();
        self.line("Seleccione una posición para invocar");
        let slots = BattleConfig::LEADER_SLOT + 1..BattleConfig::BOARD_SIZE;
        let count = slots.len();
        for (index, slot) in slots.enumerate() {
            match team.occupant(slot).and_then(|id| team.unit(id)) {
                Some(unit) => self.line(&format!(
                    "{}-{} (Puesto {})",
                    index + 1,
                    unit_status(unit),
                    slot + 1
                )),
                None => self.line(&format!("{}-Vacío (Puesto {})", index + 1, slot + 1)),
            }
        }
        self.line(&format!("{}-{CANCEL}", count + 1));
    }

    fn unit_options(&mut self, units: &[&Unit]) {
        for (index, unit) in units.iter().enumerate() {
            self.line(&format!("{}-{}", index + 1, unit_status(unit)));
        }
        self.line(&format!("{}-{CANCEL}", units.len() + 1));
    }

    // ===== narration =====

    /// One resolved hit: action line, affinity line and damage line.
    pub fn hit(&mut self, attacker: &str, target: &str, element: Element, outcome: &AttackOutcome) {
        self.line(&format!("{attacker} {} {target}", attack_verb(element)));

        if outcome.missed() {
            self.line(&format!("{} ha fallado el ataque", outcome.attacker_name));
            return;
        }
        self.affinity_line(target, outcome);
        self.damage_line(attacker, target, outcome);
    }

    fn affinity_line(&mut self, target: &str, outcome: &AttackOutcome) {
        use battle_core::Affinity;

        if outcome.instant_kill() && outcome.repelled() {
            return;
        }
        let attacker = &outcome.attacker_name;
        match outcome.affinity {
            Affinity::Weak => self.line(&format!("{target} es débil contra el ataque de {attacker}")),
            Affinity::Resist if !outcome.instant_kill() => {
                self.line(&format!("{target} es resistente el ataque de {attacker}"))
            }
            Affinity::Null => self.line(&format!("{target} bloquea el ataque de {attacker}")),
            _ => {}
        }
    }

    fn damage_line(&mut self, attacker: &str, target: &str, outcome: &AttackOutcome) {
        if outcome.nullified() {
            return;
        }
        let damage = outcome.damage;
        if outcome.instant_kill() {
            self.line(&format!("{target} ha sido eliminado"));
        } else if outcome.repelled() {
            self.line(&format!("{target} devuelve {damage} daño a {attacker}"));
        } else if outcome.drained() {
            self.line(&format!("{target} absorbe {damage} daño"));
        } else if damage > 0 {
            self.line(&format!("{target} recibe {damage} de daño"));
        }
    }

    pub fn final_hp(&mut self, unit: &Unit) {
        self.line(&format!(
            "{} termina con HP:{}/{}",
            unit.name(),
            unit.hp(),
            unit.stats().hp
        ));
    }

    pub fn turns_spent(&mut self, spent: TurnsSpent) {
        self.separator();
        self.line(&format!(
            "Se han consumido {} Full Turn(s) y {} Blinking Turn(s)",
            spent.full, spent.blinking
        ));
        self.line(&format!("Se han obtenido {} Blinking Turn(s)", spent.gained));
    }

    pub fn healed(&mut self, user: &str, target: &str, amount: u32, revived: bool) {
        if revived {
            self.line(&format!("{user} revive a {target}"));
        } else {
            self.line(&format!("{user} cura a {target}"));
        }
        self.line(&format!("{target} recibe {amount} de HP"));
    }

    pub fn invoked(&mut self, unit: &str) {
        self.separator();
        self.line(&format!("{unit} ha sido invocado"));
    }

    pub fn surrender(&mut self, unit: &str, side: Side) {
        self.separator();
        self.line(&format!("{unit} ({side}) se rinde"));
    }

    // ===== lobby =====

    pub fn team_files<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.line(CHOOSE_TEAM_FILE);
        for (index, name) in names.into_iter().enumerate() {
            self.line(&format!("{index}: {name}"));
        }
    }

    pub fn invalid_team(&mut self) {
        self.line(INVALID_TEAM);
    }
}
