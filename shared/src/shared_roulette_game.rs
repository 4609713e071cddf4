use serde::{Serialize, Deserialize};
use crate::analytics::AnalyticsEvent;
use crate::constants::{
    LIMIT_REACHED_MESSAGE, MISSING_SELECTION_MESSAGE, SELECT_PROMPT_MESSAGE, SPINNING_MESSAGE,
};
use crate::outcome_script::{DecideError, Outcome, OutcomeScript};
use crate::rotation::{next_rotation, MAX_REVOLUTIONS, MIN_REVOLUTIONS};
use crate::wheel_layout::Label;

/// Tunable amounts for a demo session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub stake: i64,
    pub initial_balance: i64,
    pub payout_multiplier: i64,
    pub min_revolutions: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stake: 100,
            initial_balance: 1000,
            payout_multiplier: 35,
            min_revolutions: MIN_REVOLUTIONS,
        }
    }
}

impl GameConfig {
    /// Replaces amounts the engine cannot honor with defaults and pins the
    /// revolution count to `MIN_REVOLUTIONS..=MAX_REVOLUTIONS`, so every spin
    /// visibly turns the wheel.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            stake: if self.stake > 0 { self.stake } else { defaults.stake },
            initial_balance: self.initial_balance,
            payout_multiplier: if self.payout_multiplier > 0 {
                self.payout_multiplier
            } else {
                defaults.payout_multiplier
            },
            min_revolutions: self.min_revolutions.clamp(MIN_REVOLUTIONS, MAX_REVOLUTIONS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Selecting,
    Spinning,
    Resolving,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Popup {
    #[default]
    None,
    Win,
    Final,
}

/// Inputs the game accepts. `AnimationComplete` is the only thing that resolves a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Select(Label),
    Spin,
    AnimationComplete,
    DismissPopup,
}

/// Why an event was refused. Refusals never change balance, rotation or spin count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoSelection,
    SpinInProgress,
    SessionLocked,
    NotSpinning,
    PopupNotDismissable,
}

impl Rejection {
    /// Message to show in place of the current one, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoSelection => Some(MISSING_SELECTION_MESSAGE),
            Self::SpinInProgress => Some(SPINNING_MESSAGE),
            Self::SessionLocked => Some(LIMIT_REACHED_MESSAGE),
            // Adapter noise; the player did nothing to be told about
            Self::NotSpinning | Self::PopupNotDismissable => None,
        }
    }
}

/// Everything the presentation layer needs to draw the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub rotation: f64,
    /// Input is locked while the wheel spins and after the session ends
    pub locked: bool,
    pub message: String,
    pub spins_remaining: usize,
    pub popup: Popup,
    pub balance: i64,
    pub selected: Option<Label>,
    pub last_landed: Option<Label>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub view: GameView,
    pub rejected: Option<Rejection>,
    pub analytics: Option<AnalyticsEvent>,
}

impl Transition {
    pub fn is_accepted(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Scripted roulette session. Owns all mutable state; each event is handled
/// to completion before the next one is looked at.
#[derive(Debug, Clone)]
pub struct RouletteGame {
    config: GameConfig,
    script: OutcomeScript,
    phase: Phase,
    spins_taken: usize,
    rotation: f64,
    balance: i64,
    bet: Option<Label>,
    pending: Option<Outcome>,
    last_landed: Option<Label>,
    message: String,
    popup: Popup,
}

impl Default for RouletteGame {
    fn default() -> Self {
        Self::new(GameConfig::default(), OutcomeScript::default())
    }
}

impl RouletteGame {
    pub fn new(config: GameConfig, script: OutcomeScript) -> Self {
        let normalized = config.clone().normalized();
        if normalized != config {
            log::warn!("game config {:?} adjusted to {:?}", config, normalized);
        }
        let config = normalized;
        // An empty script allows no spins at all
        let phase = if script.is_empty() { Phase::Locked } else { Phase::Selecting };
        Self {
            balance: config.initial_balance,
            config,
            script,
            phase,
            spins_taken: 0,
            rotation: 0.0,
            bet: None,
            pending: None,
            last_landed: None,
            message: SELECT_PROMPT_MESSAGE.to_string(),
            popup: Popup::None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn script(&self) -> &OutcomeScript {
        &self.script
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn spins_taken(&self) -> usize {
        self.spins_taken
    }

    pub fn spin_limit(&self) -> usize {
        self.script.len()
    }

    pub fn spins_remaining(&self) -> usize {
        self.spin_limit().saturating_sub(self.spins_taken)
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn selected(&self) -> Option<Label> {
        self.bet
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn popup(&self) -> Popup {
        self.popup
    }

    pub fn is_input_locked(&self) -> bool {
        matches!(self.phase, Phase::Spinning | Phase::Locked)
    }

    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase,
            rotation: self.rotation,
            locked: self.is_input_locked(),
            message: self.message.clone(),
            spins_remaining: self.spins_remaining(),
            popup: self.popup,
            balance: self.balance,
            selected: self.bet,
            last_landed: self.last_landed,
        }
    }

    pub fn handle(&mut self, event: GameEvent) -> Transition {
        match event {
            GameEvent::Select(label) => self.select_number(label),
            GameEvent::Spin => self.spin(),
            GameEvent::AnimationComplete => self.animation_complete(),
            GameEvent::DismissPopup => self.dismiss_popup(),
        }
    }

    pub fn select_number(&mut self, label: Label) -> Transition {
        match self.phase {
            Phase::Spinning | Phase::Resolving => return self.reject(Rejection::SpinInProgress),
            Phase::Locked => return self.reject(Rejection::SessionLocked),
            Phase::Selecting => {}
        }

        self.bet = Some(label);
        self.message = format!("BET PLACED ON {}", label);
        log::debug!("bet placed on {}", label);
        self.accept(None)
    }

    pub fn spin(&mut self) -> Transition {
        match self.phase {
            Phase::Spinning | Phase::Resolving => return self.reject(Rejection::SpinInProgress),
            Phase::Locked => {
                // Pressing spin on a finished session brings the final offer back up
                self.popup = Popup::Final;
                return self.reject(Rejection::SessionLocked);
            }
            Phase::Selecting => {}
        }

        let Some(bet) = self.bet else {
            return self.reject(Rejection::NoSelection);
        };
        let outcome = match self.script.decide(self.spins_taken, Some(bet)) {
            Ok(outcome) => outcome,
            Err(DecideError::NoSelection) => return self.reject(Rejection::NoSelection),
            Err(DecideError::ScriptExhausted { .. }) => return self.reject(Rejection::SessionLocked),
        };

        self.balance = self.balance.saturating_sub(self.config.stake);
        self.rotation = next_rotation(self.rotation, outcome.landed, self.config.min_revolutions);
        self.pending = Some(outcome);
        self.popup = Popup::None;
        self.message = SPINNING_MESSAGE.to_string();
        self.phase = Phase::Spinning;

        let spin_number = self.spins_taken + 1;
        log::debug!(
            "spin {} started: bet {}, landing on {}, rotation {:.3}",
            spin_number, bet, outcome.landed, self.rotation
        );
        self.accept(Some(AnalyticsEvent::spin_start(spin_number, bet)))
    }

    pub fn animation_complete(&mut self) -> Transition {
        if self.phase != Phase::Spinning {
            // Duplicate or stray completion signal
            return self.ignore(Rejection::NotSpinning);
        }
        let Some(outcome) = self.pending.take() else {
            self.phase = Phase::Selecting;
            return self.ignore(Rejection::NotSpinning);
        };

        self.phase = Phase::Resolving;
        self.spins_taken += 1;
        self.last_landed = Some(outcome.landed);
        let is_final = self.spins_taken >= self.spin_limit();

        let credit = outcome.amount_delta(self.config.stake, self.config.payout_multiplier);
        let analytics = if outcome.won {
            self.balance = self.balance.saturating_add(credit);
            self.message = format!("JACKPOT! YOU WON ${}", credit);
            Some(AnalyticsEvent::spin_win(self.spins_taken, outcome.landed, credit))
        } else {
            self.message = LIMIT_REACHED_MESSAGE.to_string();
            None
        };

        self.popup = if outcome.won && !is_final { Popup::Win } else { Popup::Final };
        if !is_final {
            self.bet = None;
        }
        self.phase = if is_final { Phase::Locked } else { Phase::Selecting };

        log::debug!(
            "spin {} resolved: landed {}, won {}, balance {}, phase {:?}",
            self.spins_taken, outcome.landed, outcome.won, self.balance, self.phase
        );
        self.accept(analytics)
    }

    pub fn dismiss_popup(&mut self) -> Transition {
        match self.popup {
            Popup::Final => self.ignore(Rejection::PopupNotDismissable),
            Popup::Win | Popup::None => {
                self.popup = Popup::None;
                self.accept(None)
            }
        }
    }

    fn accept(&self, analytics: Option<AnalyticsEvent>) -> Transition {
        Transition {
            view: self.view(),
            rejected: None,
            analytics,
        }
    }

    fn reject(&mut self, rejection: Rejection) -> Transition {
        if let Some(message) = rejection.message() {
            self.message = message.to_string();
        }
        self.ignore(rejection)
    }

    fn ignore(&self, rejection: Rejection) -> Transition {
        log::debug!("event rejected in {:?}: {:?}", self.phase, rejection);
        Transition {
            view: self.view(),
            rejected: Some(rejection),
            analytics: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::lands_on;
    use proptest::prelude::*;

    fn label(n: u8) -> Label {
        Label::new(n).unwrap()
    }

    fn play(game: &mut RouletteGame, n: u8) -> Transition {
        game.select_number(label(n));
        game.spin();
        game.animation_complete()
    }

    #[test]
    fn test_new_session() {
        let game = RouletteGame::default();
        let view = game.view();
        assert_eq!(view.phase, Phase::Selecting);
        assert_eq!(view.balance, 1000);
        assert_eq!(view.spins_remaining, 3);
        assert_eq!(view.rotation, 0.0);
        assert_eq!(view.message, SELECT_PROMPT_MESSAGE);
        assert!(!view.locked);
    }

    #[test]
    fn test_select_records_bet() {
        let mut game = RouletteGame::default();
        let t = game.select_number(label(12));
        assert!(t.is_accepted());
        assert_eq!(t.view.selected, Some(label(12)));
        assert_eq!(t.view.message, "BET PLACED ON 12");

        game.select_number(label(30));
        assert_eq!(game.selected(), Some(label(30)));
    }

    #[test]
    fn test_spin_without_selection() {
        let mut game = RouletteGame::default();
        let t = game.spin();
        assert_eq!(t.rejected, Some(Rejection::NoSelection));
        assert_eq!(t.view.phase, Phase::Selecting);
        assert_eq!(t.view.balance, 1000);
        assert_eq!(t.view.message, MISSING_SELECTION_MESSAGE);
        assert_eq!(t.analytics, None);
    }

    #[test]
    fn test_spin_locks_input_until_completion() {
        let mut game = RouletteGame::default();
        game.select_number(label(17));
        let t = game.spin();
        assert!(t.is_accepted());
        assert_eq!(t.view.phase, Phase::Spinning);
        assert!(t.view.locked);
        assert_eq!(t.view.balance, 900);
        assert_eq!(t.view.message, SPINNING_MESSAGE);
        assert_eq!(t.analytics, Some(AnalyticsEvent::spin_start(1, label(17))));

        // Nothing moves until the wheel reports it has stopped
        let rotation = game.rotation();
        assert_eq!(game.spin().rejected, Some(Rejection::SpinInProgress));
        assert_eq!(game.select_number(label(3)).rejected, Some(Rejection::SpinInProgress));
        assert_eq!(game.rotation(), rotation);
        assert_eq!(game.balance(), 900);
        assert_eq!(game.selected(), Some(label(17)));
        assert_eq!(game.spins_taken(), 0);
    }

    #[test]
    fn test_winning_spin_scenario() {
        let mut game = RouletteGame::default();
        let t = play(&mut game, 17);
        assert!(t.is_accepted());
        assert_eq!(t.view.balance, 1000 - 100 + 3500);
        assert_eq!(t.view.message, "JACKPOT! YOU WON $3500");
        assert_eq!(t.view.spins_remaining, 2);
        assert_eq!(t.view.popup, Popup::Win);
        assert_eq!(t.view.phase, Phase::Selecting);
        assert_eq!(t.view.selected, None);
        assert_eq!(t.view.last_landed, Some(label(17)));
        assert!(lands_on(t.view.rotation, label(17)));
    }

    #[test]
    fn test_full_session_scenario() {
        let mut game = RouletteGame::default();
        play(&mut game, 17);
        game.dismiss_popup();
        play(&mut game, 5);
        game.dismiss_popup();
        let t = play(&mut game, 23);

        assert_eq!(t.view.balance, 1000 - 3 * 100 + 2 * 3500);
        assert_eq!(t.view.phase, Phase::Locked);
        assert_eq!(t.view.popup, Popup::Final);
        assert_eq!(t.view.message, LIMIT_REACHED_MESSAGE);
        assert_eq!(t.view.spins_remaining, 0);
        assert_eq!(t.view.last_landed, Some(Label::ZERO));
        // Last bet stays on the board after the final spin
        assert_eq!(t.view.selected, Some(label(23)));
        assert!(lands_on(t.view.rotation, Label::ZERO));
    }

    #[test]
    fn test_losing_on_zero_lands_on_thirty_two() {
        let mut game = RouletteGame::new(GameConfig::default(), OutcomeScript::new(vec![false]));
        let t = play(&mut game, 0);
        assert_eq!(t.view.last_landed, Some(label(32)));
        assert!(lands_on(t.view.rotation, label(32)));
    }

    #[test]
    fn test_locked_session_refuses_everything() {
        let mut game = RouletteGame::default();
        for n in [1, 2, 3] {
            play(&mut game, n);
            game.dismiss_popup();
        }
        let balance = game.balance();
        let rotation = game.rotation();

        assert_eq!(game.select_number(label(9)).rejected, Some(Rejection::SessionLocked));
        let t = game.spin();
        assert_eq!(t.rejected, Some(Rejection::SessionLocked));
        assert_eq!(t.view.popup, Popup::Final);
        assert_eq!(game.animation_complete().rejected, Some(Rejection::NotSpinning));
        assert_eq!(game.balance(), balance);
        assert_eq!(game.rotation(), rotation);
        assert_eq!(game.spins_taken(), 3);
        assert_eq!(game.phase(), Phase::Locked);
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let mut game = RouletteGame::default();
        play(&mut game, 8);
        let before = game.view();
        let first = game.animation_complete();
        let second = game.animation_complete();
        assert_eq!(first.rejected, Some(Rejection::NotSpinning));
        assert_eq!(first.view, before);
        assert_eq!(second.view, before);
    }

    #[test]
    fn test_completion_before_any_spin_is_ignored() {
        let mut game = RouletteGame::default();
        let before = game.view();
        assert_eq!(game.animation_complete().view, before);
    }

    #[test]
    fn test_early_loss_raises_final_popup() {
        let mut game = RouletteGame::new(
            GameConfig::default(),
            OutcomeScript::new(vec![false, true, true]),
        );
        let t = play(&mut game, 14);
        assert_eq!(t.view.popup, Popup::Final);
        assert_eq!(t.view.balance, 900);
        assert_eq!(t.view.phase, Phase::Selecting);
        assert_eq!(game.dismiss_popup().rejected, Some(Rejection::PopupNotDismissable));
        assert_eq!(game.popup(), Popup::Final);
    }

    #[test]
    fn test_win_popup_dismisses() {
        let mut game = RouletteGame::default();
        play(&mut game, 19);
        let t = game.dismiss_popup();
        assert!(t.is_accepted());
        assert_eq!(t.view.popup, Popup::None);
    }

    #[test]
    fn test_empty_script_starts_locked() {
        let mut game = RouletteGame::new(GameConfig::default(), OutcomeScript::new(vec![]));
        assert_eq!(game.phase(), Phase::Locked);
        game.select_number(label(1));
        assert_eq!(game.spin().rejected, Some(Rejection::SessionLocked));
        assert_eq!(game.balance(), 1000);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig {
            stake: 10,
            initial_balance: 50,
            payout_multiplier: 35,
            min_revolutions: 10,
        };
        let mut game = RouletteGame::new(config, OutcomeScript::new(vec![true]));
        game.select_number(label(36));
        let t = game.spin();
        assert!(t.view.rotation >= 3600.0);
        assert!(t.view.rotation < 3960.0);
        let t = game.animation_complete();
        assert_eq!(t.view.balance, 50 - 10 + 350);
        assert_eq!(t.view.phase, Phase::Locked);
        assert_eq!(t.view.popup, Popup::Final);
        assert_eq!(t.analytics, Some(AnalyticsEvent::spin_win(1, label(36), 350)));
    }

    #[test]
    fn test_zero_revolutions_still_turns_the_wheel() {
        let config = GameConfig { min_revolutions: 0, ..GameConfig::default() };
        let mut game = RouletteGame::new(config, OutcomeScript::new(vec![true, true]));
        assert_eq!(game.config().min_revolutions, MIN_REVOLUTIONS);

        // Zero sits under the pointer already, so only the revolutions move the wheel
        game.select_number(Label::ZERO);
        let t = game.spin();
        assert!(t.is_accepted());
        assert!(t.view.rotation >= f64::from(MIN_REVOLUTIONS) * 360.0);
        assert!(lands_on(t.view.rotation, Label::ZERO));
    }

    #[test]
    fn test_revolutions_are_capped() {
        let config = GameConfig { min_revolutions: u32::MAX, ..GameConfig::default() };
        let game = RouletteGame::new(config, OutcomeScript::default());
        assert_eq!(game.config().min_revolutions, MAX_REVOLUTIONS);
    }

    #[test]
    fn test_non_positive_amounts_fall_back() {
        let config = GameConfig {
            stake: -50,
            initial_balance: 1000,
            payout_multiplier: 0,
            min_revolutions: MIN_REVOLUTIONS,
        };
        let game = RouletteGame::new(config, OutcomeScript::default());
        assert_eq!(game.config(), &GameConfig::default());
    }

    #[test]
    fn test_huge_stake_saturates() {
        let config = GameConfig { stake: i64::MAX / 2, ..GameConfig::default() };
        let mut game = RouletteGame::new(config, OutcomeScript::default());
        game.select_number(label(17));
        let t = game.spin();
        assert_eq!(t.view.balance, 1000 - i64::MAX / 2);

        let t = game.animation_complete();
        assert!(t.is_accepted());
        assert_eq!(t.view.phase, Phase::Selecting);
        assert_eq!(t.view.balance, (1000 - i64::MAX / 2).saturating_add(i64::MAX));
        assert_eq!(t.view.message, format!("JACKPOT! YOU WON ${}", i64::MAX));
    }

    #[test]
    fn test_refusals_explain_themselves() {
        let mut game = RouletteGame::default();
        game.select_number(label(17));
        game.spin();
        let t = game.select_number(label(4));
        assert_eq!(t.rejected, Some(Rejection::SpinInProgress));
        assert_eq!(t.view.message, SPINNING_MESSAGE);

        game.animation_complete();
        game.dismiss_popup();
        play(&mut game, 6);
        game.dismiss_popup();
        play(&mut game, 7);
        let t = game.select_number(label(9));
        assert_eq!(t.rejected, Some(Rejection::SessionLocked));
        assert_eq!(t.view.message, LIMIT_REACHED_MESSAGE);

        // Stray completions stay silent
        let before = game.message().to_string();
        assert_eq!(game.animation_complete().view.message, before);
    }

    #[test]
    fn test_view_serializes_for_the_wire() {
        let game = RouletteGame::default();
        let json = serde_json::to_value(game.view()).unwrap();
        assert_eq!(json["phase"], "selecting");
        assert_eq!(json["popup"], "none");
        assert_eq!(json["spins_remaining"], 3);
    }

    fn arb_event() -> impl Strategy<Value = GameEvent> {
        prop_oneof![
            (0u8..=36).prop_map(|n| GameEvent::Select(Label::new(n).unwrap())),
            Just(GameEvent::Spin),
            Just(GameEvent::AnimationComplete),
            Just(GameEvent::DismissPopup),
        ]
    }

    proptest! {
        #[test]
        fn prop_session_invariants(
            script in prop::collection::vec(any::<bool>(), 0..6),
            events in prop::collection::vec(arb_event(), 0..80),
        ) {
            let config = GameConfig::default();
            let limit = script.len();
            let script = OutcomeScript::new(script);
            let mut game = RouletteGame::new(config.clone(), script.clone());
            let mut expected_balance = config.initial_balance;

            for event in events {
                let before = game.clone();
                let t = game.handle(event);

                prop_assert!(game.spins_taken() >= before.spins_taken());
                prop_assert!(game.spins_taken() <= limit);
                prop_assert!(game.rotation() >= before.rotation());
                prop_assert_ne!(game.phase(), Phase::Resolving);
                if before.phase() == Phase::Locked {
                    prop_assert_eq!(game.phase(), Phase::Locked);
                }
                if game.spins_taken() == limit {
                    prop_assert_eq!(game.phase(), Phase::Locked);
                }

                if t.rejected.is_some() {
                    prop_assert_eq!(game.balance(), before.balance());
                    prop_assert_eq!(game.rotation(), before.rotation());
                    prop_assert_eq!(game.spins_taken(), before.spins_taken());
                }

                if event == GameEvent::Spin && t.is_accepted() {
                    expected_balance -= config.stake;
                    let turned = game.rotation() - before.rotation();
                    prop_assert!(turned >= f64::from(config.min_revolutions) * 360.0 - 1e-6);
                    prop_assert_eq!(game.phase(), Phase::Spinning);
                }

                if event == GameEvent::AnimationComplete && t.is_accepted() {
                    let spin_index = before.spins_taken();
                    let landed = t.view.last_landed.unwrap();
                    let bet = before.selected().unwrap();
                    if script.get(spin_index).unwrap() {
                        prop_assert_eq!(landed, bet);
                        expected_balance += config.stake * config.payout_multiplier;
                    } else {
                        prop_assert_ne!(landed, bet);
                    }
                    prop_assert!(lands_on(game.rotation(), landed));
                }

                prop_assert_eq!(game.balance(), expected_balance);
            }
        }
    }
}
