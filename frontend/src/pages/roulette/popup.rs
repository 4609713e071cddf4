use shared::shared_roulette_game::Popup;
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub popup: Popup,
    /// Win popup: back to the table
    pub on_continue: Callback<()>,
    /// Final popup: off to the sign-up page
    pub on_claim: Callback<()>,
}

#[function_component(SessionPopup)]
pub fn session_popup(props: &PopupProps) -> Html {
    let (title, body, button, action) = match props.popup {
        Popup::None => return html! {},
        Popup::Win => (
            "UNBELIEVABLE!",
            "You have an incredible winning streak! Don't let the luck cool down. Spin again now!",
            "NEXT SPIN",
            props.on_continue.clone(),
        ),
        Popup::Final => (
            "SESSION LIMIT",
            "You've hit the maximum demo win limit. Open a Real Account now to keep your winnings and get a 488% Bonus!",
            "CLAIM BONUS NOW",
            props.on_claim.clone(),
        ),
    };

    let onclick = Callback::from(move |_: MouseEvent| action.emit(()));

    html! {
        <div class={styles::OVERLAY}>
            <div class={styles::POPUP_CARD}>
                <h3 class={styles::POPUP_TITLE}>{ title }</h3>
                <p class={styles::POPUP_BODY}>{ body }</p>
                <button class={styles::POPUP_BUTTON} {onclick}>{ button }</button>
            </div>
        </div>
    }
}
