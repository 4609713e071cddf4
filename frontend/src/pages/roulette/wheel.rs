use shared::wheel_layout::{label_at, round_for_render, segment_angle, SEGMENT_COUNT, SEGMENT_WIDTH};
use yew::prelude::*;
use crate::styles;

const SIZE: f64 = 320.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 150.0;
const LABEL_RADIUS: f64 = 128.0;
const HUB_RADIUS: f64 = 46.0;

/// Seconds the wheel takes to settle, with a long ease-out tail
const SPIN_SECONDS: f64 = 5.0;
const SPIN_EASING: &str = "cubic-bezier(0.15, 0, 0.15, 1)";

/// Point on the wheel at `angle` degrees clockwise from 12 o'clock.
fn polar(angle: f64, radius: f64) -> (f64, f64) {
    let radians = (angle - 90.0).to_radians();
    (CENTER + radius * radians.cos(), CENTER + radius * radians.sin())
}

/// Wedge for a segment, centered on its landing angle so the pointer
/// sits in the middle of the winning slot.
pub fn segment_path(index: usize) -> String {
    let start = segment_angle(index) - SEGMENT_WIDTH / 2.0;
    let (x1, y1) = polar(start, RADIUS);
    let (x2, y2) = polar(start + SEGMENT_WIDTH, RADIUS);
    format!(
        "M {c} {c} L {x1:.3} {y1:.3} A {r} {r} 0 0 1 {x2:.3} {y2:.3} Z",
        c = CENTER,
        r = RADIUS,
        x1 = x1,
        y1 = y1,
        x2 = x2,
        y2 = y2,
    )
}

/// CSS for the spinning disc. The wheel turns counter-clockwise so the
/// segment at `rotation` degrees ends up under the top pointer.
pub fn wheel_style(rotation: f64) -> String {
    format!(
        "transform: rotate({}deg); transition: transform {}s {};",
        -round_for_render(rotation),
        SPIN_SECONDS,
        SPIN_EASING
    )
}

#[derive(Properties, PartialEq)]
pub struct RouletteWheelProps {
    pub rotation: f64,
    pub on_stop: Callback<()>,
}

#[function_component(RouletteWheel)]
pub fn roulette_wheel(props: &RouletteWheelProps) -> Html {
    let ontransitionend = {
        let on_stop = props.on_stop.clone();
        Callback::from(move |event: TransitionEvent| {
            if event.property_name() == "transform" {
                on_stop.emit(());
            }
        })
    };

    let segments = (0..SEGMENT_COUNT).filter_map(|index| {
        let label = label_at(index)?;
        let angle = segment_angle(index);
        let (x, y) = polar(angle, LABEL_RADIUS);
        Some(html! {
            <g key={index}>
                <path
                    d={segment_path(index)}
                    fill={label.color().hex()}
                    stroke="#eab308"
                    stroke-width="0.6"
                />
                <text
                    x={format!("{:.3}", x)}
                    y={format!("{:.3}", y)}
                    fill="white"
                    font-size="11"
                    font-weight="900"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    transform={format!("rotate({:.3} {:.3} {:.3})", angle, x, y)}
                >
                    { label.to_string() }
                </text>
            </g>
        })
    });

    html! {
        <div class={styles::WHEEL_FRAME}>
            <div class={styles::WHEEL_POINTER}></div>
            <div style={wheel_style(props.rotation)} {ontransitionend}>
                <svg viewBox={format!("0 0 {} {}", SIZE, SIZE)} class="w-full h-full">
                    <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r={(RADIUS + 6.0).to_string()} fill="#78350f" />
                    { for segments }
                    <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r={HUB_RADIUS.to_string()} fill="#0a0f1d" stroke="#eab308" stroke-width="3" />
                </svg>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment_straddles_top() {
        let (x, y) = polar(0.0, RADIUS);
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER - RADIUS)).abs() < 1e-9);

        let path = segment_path(0);
        assert!(path.starts_with("M 160 160 L "));
        // Left edge sits left of the pointer, right edge to its right
        let (left_x, _) = polar(-SEGMENT_WIDTH / 2.0, RADIUS);
        let (right_x, _) = polar(SEGMENT_WIDTH / 2.0, RADIUS);
        assert!(left_x < CENTER && right_x > CENTER);
    }

    #[test]
    fn test_wheel_turns_counter_clockwise() {
        assert!(wheel_style(3240.0).starts_with("transform: rotate(-3240deg);"));
        assert!(wheel_style(0.0).contains("transition: transform 5s"));
    }
}
