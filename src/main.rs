mod components;
mod config;
mod model;
mod physics;
mod render;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
