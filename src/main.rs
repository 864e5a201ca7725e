mod components;
mod config;
mod input;
mod render;
mod sketchpad;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
