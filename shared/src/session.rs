use crate::analytics::EventSink;
use crate::shared_roulette_game::{GameEvent, GameView, RouletteGame, Transition};

/// Renders game state and animates the wheel toward `view.rotation`.
///
/// When the wheel stops, the adapter's owner must deliver
/// [`GameEvent::AnimationComplete`] back through [`RouletteSession::dispatch`].
/// The game never advances on a timer, so an adapter that never reports
/// completion leaves the session spinning.
pub trait PresentationAdapter {
    fn present(&mut self, view: &GameView);
}

/// Wires a game to its renderer and analytics sink. Events are applied one at a
/// time through `&mut self`, which is what serializes rapid double clicks.
pub struct RouletteSession<A, S> {
    game: RouletteGame,
    adapter: A,
    sink: S,
}

impl<A: PresentationAdapter, S: EventSink> RouletteSession<A, S> {
    pub fn new(game: RouletteGame, mut adapter: A, sink: S) -> Self {
        adapter.present(&game.view());
        Self { game, adapter, sink }
    }

    pub fn dispatch(&mut self, event: GameEvent) -> Transition {
        let transition = self.game.handle(event);
        if let Some(record) = transition.analytics.clone() {
            self.sink.record(record);
        }
        self.adapter.present(&transition.view);
        transition
    }

    pub fn game(&self) -> &RouletteGame {
        &self.game
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
