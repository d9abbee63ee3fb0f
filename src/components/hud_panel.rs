use crate::model::Support;
use crate::state::{HudSnapshot, Key};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub snapshot: HudSnapshot,
}

fn tenths(v: i32) -> String {
    format!("{:.1}", f64::from(v) / 10.0)
}

fn arrow(key: Key) -> &'static str {
    match key {
        Key::Left => "←",
        Key::Right => "→",
        Key::Up => "↑",
        Key::Down => "↓",
    }
}

#[function_component]
pub fn HudPanel(props: &HudPanelProps) -> Html {
    let s = props.snapshot;
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let held: String = Key::ALL
        .iter()
        .zip(s.held)
        .filter(|(_, down)| *down)
        .map(|(k, _)| arrow(*k))
        .collect();
    let support_color = match s.support {
        Support::Falling => "#f85149",
        Support::OnPlatform => "#d4af37",
        Support::OnLadder => "#58a6ff",
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); color:#c9d1d9; border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:{};", label_style, support_color)}>{"State"}</span>
                <span style={format!("{} color:{};", value_style, support_color)}>{ s.support.label() }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Position"}</span>
                <span style={value_style}>{ format!("{}, {}", s.x, s.y) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Velocity"}</span>
                <span style={value_style}>{ format!("{}, {}", tenths(s.speed_x_tenths), tenths(s.speed_y_tenths)) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Keys"}</span>
                <span style={value_style}>{ if held.is_empty() { "-".to_string() } else { held } }</span>
            </div>
        </div>
    }
}
