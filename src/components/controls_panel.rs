use yew::prelude::*;

#[function_component]
pub fn ControlsPanel() -> Html {
    let row = |key: &'static str, what: &'static str| {
        html! {
            <div style="display:flex; gap:8px;">
                <span style="min-width:28px; text-align:center; background:#1c2128; border:1px solid #30363d; border-radius:4px; padding:0 4px;">{ key }</span>
                <span>{ what }</span>
            </div>
        }
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); color:#c9d1d9; border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px; font-size:12px;">
        { row("←", "Run left") }
        { row("→", "Run right") }
        { row("↑", "Climb up (on ladder)") }
        { row("↓", "Climb down (on ladder)") }
        <div style="font-size:11px; opacity:0.7;">{"The gray column is the ladder."}</div>
    </div>}
}
