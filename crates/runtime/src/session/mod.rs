//! Match orchestration.
//!
//! [`BattleSession`] owns the battle state, the acting side's turn economy and
//! the presenter. It alternates rounds between the two sides until one of them
//! has nobody left on the board:
//!
//! 1. round header and full game state
//! 2. per turn: pop the next unit, show its menu, run the chosen action
//! 3. re-queue the acting unit (or whoever took over its slot)
//! 4. game state again while turns remain
//!
//! Action flows live in the sibling modules as further `impl` blocks.
mod attack;
mod basic;
mod menu;
mod skill;
mod summon;

pub use menu::{ActionChoice, ActionStatus};

use battle_core::{
    BattleConfig, BattleState, ClassifiedError, Element, Side, SideContext, TurnEconomy, Unit,
    UnitId, UnitKind,
};
use tracing::{debug, error, info, warn};

use crate::api::{BattleView, Result, RuntimeError};
use crate::presenter::Presenter;

pub struct BattleSession<V> {
    state: BattleState,
    config: BattleConfig,
    turns: TurnEconomy,
    contexts: [SideContext; 2],
    acting: Side,
    presenter: Presenter<V>,
}

impl<V: BattleView> BattleSession<V> {
    /// Player one opens the match.
    pub fn new(state: BattleState, config: BattleConfig, view: V) -> Self {
        Self::with_presenter(state, config, Presenter::new(view))
    }

    pub fn with_presenter(state: BattleState, config: BattleConfig, presenter: Presenter<V>) -> Self {
        Self {
            state,
            config,
            turns: TurnEconomy::new(),
            contexts: [SideContext::new(); 2],
            acting: Side::J1,
            presenter,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn acting(&self) -> Side {
        self.acting
    }

    pub fn turns(&self) -> &TurnEconomy {
        &self.turns
    }

    pub fn context(&self, side: Side) -> &SideContext {
        &self.contexts[side.index()]
    }

    pub fn view(&self) -> &V {
        self.presenter.view()
    }

    pub fn into_view(self) -> V {
        self.presenter.into_view()
    }

    /// Plays rounds until a side is wiped out and announces the winner.
    ///
    /// # Errors
    /// Fails when the decision feed runs dry or a board mutation breaks an
    /// engine precondition; the match cannot continue in either case.
    pub fn run(&mut self) -> Result<Side> {
        info!(
            first = self.state.team(Side::J1).leader().name(),
            second = self.state.team(Side::J2).leader().name(),
            "match started"
        );

        while !self.state.is_over() {
            self.start_round();

            while self.has_turns_left() {
                if let Err(e) = self.play_turn() {
                    if let RuntimeError::Battle(inner) = &e {
                        error!(
                            code = inner.error_code(),
                            severity = inner.severity().as_str(),
                            error = %inner,
                            "battle precondition violated"
                        );
                    }
                    return Err(e);
                }
                if self.state.is_over() {
                    break;
                }
                if self.has_turns_left() {
                    self.show_state();
                }
            }

            if self.state.is_over() {
                break;
            }
            self.acting = self.acting.opponent();
        }

        // The loop only exits once a side is wiped out.
        let winner = self.state.winner().unwrap_or(Side::J1);
        let leader = self.state.team(winner).leader().name();
        self.presenter.winner(leader, winner);
        info!(%winner, leader, "match finished");
        Ok(winner)
    }

    fn has_turns_left(&self) -> bool {
        !self.state.is_over() && self.turns.has_turns_remaining(self.state.team(self.acting))
    }

    fn start_round(&mut self) {
        let team = self.state.team(self.acting);
        self.turns.start_round(team);
        info!(
            side = %self.acting,
            full = self.turns.full(),
            "round started"
        );

        self.presenter.round_header(team.leader().name(), self.acting);
        self.show_state();
    }

    fn show_state(&mut self) {
        self.presenter.separator();
        self.presenter.board(self.state.team(Side::J1));
        self.presenter.board(self.state.team(Side::J2));
        self.presenter
            .turn_counters(self.turns.full(), self.turns.blinking());

        let team = self.state.team(self.acting);
        let names = self
            .turns
            .order()
            .filter_map(|id| team.unit(id))
            .map(Unit::name);
        self.presenter.action_order(names);
    }

    fn play_turn(&mut self) -> Result<()> {
        let team = self.state.team(self.acting);
        let Some(actor) = self.turns.take_next(team) else {
            return Ok(());
        };
        let origin = team.slot_of(actor);
        let kind = team.get(actor)?.kind();
        debug!(side = %self.acting, unit = %actor, ?origin, "turn started");

        self.presenter.separator();
        self.show_menu(actor)?;
        let mut choice = self.read_action(actor, kind)?;

        loop {
            match self.perform(actor, kind, choice)? {
                ActionStatus::Completed => break,
                ActionStatus::Cancelled => {
                    debug!(unit = %actor, action = choice.as_ref(), "action cancelled");
                    self.presenter.separator();
                    self.show_menu(actor)?;
                    choice = self.read_action(actor, kind)?;
                }
            }
        }

        self.requeue(actor, origin);
        Ok(())
    }

    fn show_menu(&mut self, actor: UnitId) -> Result<()> {
        let unit = self.state.team(self.acting).get(actor)?;
        let labels: Vec<&str> = ActionChoice::menu(unit.kind())
            .iter()
            .map(|choice| choice.as_ref())
            .collect();
        self.presenter.action_menu(unit.name(), &labels);
        Ok(())
    }

    /// Reads menu choices until one names an action of the unit's menu.
    fn read_action(&mut self, actor: UnitId, kind: UnitKind) -> Result<ActionChoice> {
        loop {
            let choice = self.presenter.read_choice()?;
            if let Some(action) = choice.and_then(|choice| ActionChoice::from_menu(kind, choice)) {
                return Ok(action);
            }
            warn!(unit = %actor, ?choice, "rejected action choice");
            self.show_menu(actor)?;
        }
    }

    fn perform(&mut self, actor: UnitId, kind: UnitKind, choice: ActionChoice) -> Result<ActionStatus> {
        match choice {
            ActionChoice::Attack => self.basic_attack(actor, Element::Phys),
            ActionChoice::Shoot => self.basic_attack(actor, Element::Gun),
            ActionChoice::UseSkill => self.use_skill(actor),
            ActionChoice::Summon => match kind {
                UnitKind::Leader => self.leader_summon(),
                UnitKind::Summonable => self.swap_summon(actor),
            },
            ActionChoice::Pass => Ok(self.pass_turn()),
            ActionChoice::Surrender => self.surrender(actor),
        }
    }

    /// Puts the unit that acted back at the tail of the order.
    ///
    /// When the acting unit left the board during its own action, the unit now
    /// holding its slot takes the place instead.
    fn requeue(&mut self, actor: UnitId, origin: Option<usize>) {
        let team = self.state.team(self.acting);
        let next = if team.is_fieldable(actor) {
            Some(actor)
        } else {
            origin
                .and_then(|slot| team.occupant(slot))
                .filter(|id| *id != actor && team.is_fieldable(*id))
        };

        if let Some(id) = next {
            self.turns.return_to_tail(id);
        }
    }

    /// Clears a fallen unit out of the way.
    ///
    /// Fallen summonable units leave the board; a fallen leader stays in its
    /// slot. Only the acting side's units ever sit in the action order.
    fn settle_casualty(&mut self, side: Side, id: UnitId) {
        let team = self.state.team_mut(side);
        if team.unit(id).is_none_or(Unit::is_alive) {
            return;
        }
        if side == self.acting {
            self.turns.remove(id);
        }
        if team.bench_if_fallen(id) {
            debug!(%side, unit = %id, "fallen unit returned to reserve");
        }
    }

    fn record_skill_use(&mut self) {
        self.contexts[self.acting.index()].record_skill_use();
    }

    fn skill_uses(&self) -> u32 {
        self.contexts[self.acting.index()].skill_uses()
    }
}
