use super::{canvas_view::CanvasView, controls_panel::ControlsPanel};
use crate::config::SketchConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| SketchConfig::load());
    // Each bump repaints the background; the canvas view watches the value.
    let clear_generation = use_state(|| 0u32);

    let on_clear = {
        let clear_generation = clear_generation.clone();
        Callback::from(move |_| clear_generation.set(clear_generation.wrapping_add(1)))
    };

    html! {
        <div id="root">
            <CanvasView config={config.clone()} clear_generation={*clear_generation} />
            <ControlsPanel {on_clear} />
        </div>
    }
}
