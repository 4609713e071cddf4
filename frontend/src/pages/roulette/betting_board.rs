use shared::wheel_layout::{Label, SegmentColor};
use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BettingBoardProps {
    pub selected: Option<Label>,
    pub on_select: Callback<Label>,
}

fn cell_class(label: Label, selected: Option<Label>) -> &'static str {
    let is_selected = selected == Some(label);
    match (label.color(), is_selected) {
        (SegmentColor::Neutral, true) => styles::BOARD_ZERO_SELECTED,
        (SegmentColor::Neutral, false) => styles::BOARD_ZERO,
        (_, true) => styles::BOARD_CELL_SELECTED,
        (SegmentColor::Red, false) => styles::BOARD_CELL_RED,
        (SegmentColor::Black, false) => styles::BOARD_CELL_BLACK,
    }
}

/// Zero across the top, then 1..36 in rows of six
#[function_component(BettingBoard)]
pub fn betting_board(props: &BettingBoardProps) -> Html {
    let cell = |label: Label| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(label));
        html! {
            <button key={label.value()} class={cell_class(label, props.selected)} {onclick}>
                { label.to_string() }
            </button>
        }
    };

    html! {
        <div class={styles::BOARD}>
            { cell(Label::ZERO) }
            <div class="grid grid-cols-6 gap-1">
                { for Label::all().filter(|label| *label != Label::ZERO).map(&cell) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_class_highlights_selection() {
        let seven = Label::new(7).unwrap();
        let eight = Label::new(8).unwrap();
        assert_eq!(cell_class(seven, None), styles::BOARD_CELL_RED);
        assert_eq!(cell_class(eight, None), styles::BOARD_CELL_BLACK);
        assert_eq!(cell_class(seven, Some(seven)), styles::BOARD_CELL_SELECTED);
        assert_eq!(cell_class(Label::ZERO, Some(Label::ZERO)), styles::BOARD_ZERO_SELECTED);
        assert_eq!(cell_class(Label::ZERO, Some(seven)), styles::BOARD_ZERO);
    }
}
