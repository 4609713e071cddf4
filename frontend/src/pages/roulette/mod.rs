mod betting_board;
mod popup;
mod wheel;

use gloo_timers::callback::Timeout;
use shared::analytics::CallToAction;
use shared::session::{PresentationAdapter, RouletteSession};
use shared::shared_roulette_game::{GameEvent, GameView, Phase, Popup, RouletteGame};
use shared::ClientConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::api::{fetch_client_config, follow_call_to_action, HttpEventSink};
use crate::styles;
use betting_board::BettingBoard;
use popup::SessionPopup;
use wheel::RouletteWheel;

// Let the landing sink in before covering the table
const WIN_POPUP_DELAY_MS: u32 = 1000;
const FINAL_POPUP_DELAY_MS: u32 = 1200;

/// Pushes every game view into component state so yew re-renders.
pub struct ViewAdapter {
    view: UseStateHandle<GameView>,
}

impl PresentationAdapter for ViewAdapter {
    fn present(&mut self, view: &GameView) {
        self.view.set(view.clone());
    }
}

type Session = RouletteSession<ViewAdapter, HttpEventSink>;

fn spin_button_label(view: &GameView) -> &'static str {
    if view.phase == Phase::Locked {
        "LOCKED"
    } else {
        "PLACE BET"
    }
}

fn popup_delay_ms(popup: Popup) -> Option<u32> {
    match popup {
        Popup::None => None,
        Popup::Win => Some(WIN_POPUP_DELAY_MS),
        Popup::Final => Some(FINAL_POPUP_DELAY_MS),
    }
}

#[function_component(RoulettePage)]
pub fn roulette_page() -> Html {
    let config = use_state(|| None::<ClientConfig>);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_client_config().await {
                    Ok(loaded) => config.set(Some(loaded)),
                    Err(e) => {
                        log::warn!("Using built-in demo config: {}", e);
                        config.set(Some(ClientConfig::default()));
                    }
                }
            });
            || ()
        });
    }

    match &*config {
        Some(config) => html! { <RouletteTable config={config.clone()} /> },
        None => html! { <div class={styles::LOADING}>{ "Loading..." }</div> },
    }
}

#[derive(Properties, PartialEq)]
pub struct RouletteTableProps {
    pub config: ClientConfig,
}

#[function_component(RouletteTable)]
pub fn roulette_table(props: &RouletteTableProps) -> Html {
    let view = {
        let config = props.config.clone();
        use_state_eq(move || RouletteGame::new(config.game, config.script).view())
    };

    // The session lives for the whole page; every input goes through it one at a time
    let session = {
        let view = view.clone();
        let config = props.config.clone();
        use_mut_ref(move || -> Session {
            let game = RouletteGame::new(config.game, config.script);
            RouletteSession::new(game, ViewAdapter { view }, HttpEventSink)
        })
    };

    let dispatch = {
        let session = session.clone();
        Callback::from(move |event: GameEvent| {
            let transition = session.borrow_mut().dispatch(event);
            if let Some(rejection) = transition.rejected {
                log::debug!("{:?} refused: {:?}", event, rejection);
            }
        })
    };

    // Popups appear a moment after the game raises them
    let shown_popup = use_state_eq(|| Popup::None);
    {
        let shown_popup = shown_popup.clone();
        use_effect_with(view.popup, move |popup| {
            let popup = *popup;
            let timeout = match popup_delay_ms(popup) {
                Some(delay) => Some(Timeout::new(delay, move || shown_popup.set(popup))),
                None => {
                    shown_popup.set(Popup::None);
                    None
                }
            };
            move || drop(timeout)
        });
    }

    let spin_limit = session.borrow().game().spin_limit();
    let spins_taken = spin_limit.saturating_sub(view.spins_remaining);
    let redirect_url = props.config.redirect_url.clone();

    let on_cta = |cta: CallToAction| {
        let redirect_url = redirect_url.clone();
        Callback::from(move |_: MouseEvent| follow_call_to_action(cta, redirect_url.clone()))
    };
    let on_claim = {
        let redirect_url = redirect_url.clone();
        Callback::from(move |_: ()| {
            follow_call_to_action(CallToAction::FinalPopupClaim, redirect_url.clone())
        })
    };
    let on_continue = dispatch.reform(|_: ()| GameEvent::DismissPopup);
    let on_select = dispatch.reform(GameEvent::Select);
    let on_stop = dispatch.reform(|_: ()| GameEvent::AnimationComplete);
    let on_spin = dispatch.reform(|_: MouseEvent| GameEvent::Spin);

    let message_class = if view.message.contains("WON") {
        styles::MESSAGE_WIN
    } else {
        styles::MESSAGE
    };

    html! {
        <main class={styles::PAGE}>
            <header class={styles::HEADER}>
                <h1 class={styles::BRAND}>{ "FUN88" }</h1>
                <div class="flex items-center gap-4">
                    <div class="text-right">
                        <p class={styles::WALLET_LABEL}>{ "Wallet" }</p>
                        <p class={styles::WALLET_AMOUNT}>{ format!("${}", view.balance) }</p>
                    </div>
                    <button class={styles::BUTTON_GOLD} onclick={on_cta(CallToAction::HeaderJoin)}>
                        { "Join Now" }
                    </button>
                </div>
            </header>

            <div class={styles::HERO}>
                <div class={styles::HERO_BADGE}>{ "🔥 Live Promo Active" }</div>
                <h2 class={styles::HERO_TITLE}>
                    { "Spin to " }<span class="text-white italic">{ "Win" }</span><br />
                    <span class="text-white">{ "488% BONUS" }</span>
                </h2>
            </div>

            <div class={styles::CONSOLE}>
                <RouletteWheel rotation={view.rotation} {on_stop} />

                <div class="text-center my-8">
                    <div class={styles::MESSAGE_LABEL}>{ "Casino Message" }</div>
                    <div class={message_class}>{ view.message.clone() }</div>
                </div>

                <BettingBoard selected={view.selected} {on_select} />

                <button class={styles::SPIN_BUTTON} onclick={on_spin} disabled={view.locked}>
                    { spin_button_label(&view) }
                </button>

                <div class="mt-8 flex flex-col items-center gap-3">
                    <div class="flex gap-4">
                        { for (0..spin_limit).map(|i| html! {
                            <div key={i} class={if i < spins_taken { styles::DOT_USED } else { styles::DOT_UNUSED }}></div>
                        }) }
                    </div>
                    <span class={styles::SPINS_LABEL}>
                        { format!("Spins Remaining: {}", view.spins_remaining) }
                    </span>
                </div>
            </div>

            <SessionPopup popup={*shown_popup} {on_continue} {on_claim} />

            <div class={styles::FOOTER}>
                <button class={styles::FOOTER_BUTTON} onclick={on_cta(CallToAction::StickyFooterDeposit)}>
                    { "🚀 DEPOSIT & START WINNING" }
                </button>
            </div>
        </main>
    }
}
