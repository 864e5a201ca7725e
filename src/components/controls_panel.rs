use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="margin-top:8px; display:flex; gap:6px; align-items:center;">
        <button id="clear" onclick={clear_cb}>{"Clear"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Draw with up to three fingers, or hold the mouse button"}</div>
    </div>}
}
