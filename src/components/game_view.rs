use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::config::GameConfig;
use crate::render::draw_scene;
use crate::state::{HudSnapshot, Key, Session};
use crate::util::{clog, cwarn};

use super::{controls_panel::ControlsPanel, hud_panel::HudPanel};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub config: GameConfig,
}

fn listen(window: &Window, event: &str, cb: &JsValue) {
    if let Err(err) = window.add_event_listener_with_callback(event, cb.unchecked_ref()) {
        cwarn(&format!("could not listen for {}: {:?}", event, err));
    }
}

fn unlisten(window: &Window, event: &str, cb: &JsValue) {
    let _ = window.remove_event_listener_with_callback(event, cb.unchecked_ref());
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(|| None::<Session>);
    let hud = use_state(HudSnapshot::default);
    let last_hud = use_mut_ref(HudSnapshot::default);

    // Main mount effect (session, key listeners, frame loop)
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let config = props.config.clone();
        let hud = hud.clone();
        let last_hud = last_hud.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");

            // Viewport size is read once; there is no resize handling.
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas.set_width(width.max(1.0) as u32);
            canvas.set_height(height.max(1.0) as u32);

            let s = Session::new(config, canvas.width() as f64, canvas.height() as f64);
            clog(&format!(
                "world generated: {}x{} canvas, {} platforms, ladder at x={}",
                s.bounds.width,
                s.bounds.height,
                s.world.platforms.len(),
                s.world.ladder.x
            ));
            *session.borrow_mut() = Some(s);

            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
            if ctx.is_none() {
                cwarn("2d context unavailable; simulating without drawing");
            }

            // RAF loop: one physics step and one paint per display refresh
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let closure_cell_clone = closure_cell.clone();
                let window_loop = window.clone();
                let session = session.clone();
                let mut ctx = ctx;
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if let Some(s) = session.borrow_mut().as_mut() {
                        s.tick();
                        if let Some(ctx) = ctx.as_mut() {
                            draw_scene(ctx, s);
                        }
                        let snap = s.hud();
                        let mut last = last_hud.borrow_mut();
                        if *last != snap {
                            *last = snap;
                            hud.set(snap);
                        }
                    }
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        let next = window_loop.request_animation_frame(cb.as_ref().unchecked_ref());
                        if let Ok(id) = next {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                })
                    as Box<dyn FnMut()>));
            }
            if let Some(cb) = closure_cell.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => *raf_id.borrow_mut() = Some(id),
                    Err(err) => cwarn(&format!("could not start frame loop: {:?}", err)),
                }
            }

            // Keys only queue intent; the next frame applies it.
            let keydown_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let Some(key) = Key::from_key_name(&e.key()) else {
                        return;
                    };
                    e.prevent_default();
                    if let Some(s) = session.borrow_mut().as_mut() {
                        s.input.press(key);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let keyup_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let Some(key) = Key::from_key_name(&e.key()) else {
                        return;
                    };
                    e.prevent_default();
                    if let Some(s) = session.borrow_mut().as_mut() {
                        s.input.release(key);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            // keyup never arrives for keys released while unfocused
            let blur_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some(s) = session.borrow_mut().as_mut() {
                        s.input.clear();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            listen(&window, "keydown", keydown_cb.as_ref());
            listen(&window, "keyup", keyup_cb.as_ref());
            listen(&window, "blur", blur_cb.as_ref());

            let window_clone = window.clone();
            move || {
                unlisten(&window_clone, "keydown", keydown_cb.as_ref());
                unlisten(&window_clone, "keyup", keyup_cb.as_ref());
                unlisten(&window_clone, "blur", blur_cb.as_ref());
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                // breaks the closure's reference to its own cell
                closure_cell.borrow_mut().take();
                let frames = session.borrow().as_ref().map_or(0, |s| s.frame);
                clog(&format!("game view unmounted after {} frames", frames));
            }
        });
    }

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <canvas ref={canvas_ref} style="display:block;" />
            <HudPanel snapshot={*hud} />
            <ControlsPanel />
        </div>
    }
}
