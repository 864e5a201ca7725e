use std::cell::RefCell;
use std::rc::Rc;
use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, Window};
use yew::prelude::*;

use crate::config::SketchConfig;
use crate::input::{self, ContactEvent};
use crate::render::{CanvasSurface, StrokeRenderer, SurfaceError};
use crate::sketchpad::Sketchpad;
use crate::state::{ContactId, SLOT_COUNT};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasViewProps {
    pub config: Rc<SketchConfig>,
    /// Bumped by the shell each time the user asks for a clear.
    pub clear_generation: u32,
}

type SharedPad = Rc<RefCell<Sketchpad>>;
type SharedSurface = Rc<RefCell<Option<CanvasSurface>>>;

// DOM listeners kept alive for as long as the canvas is mounted.
struct Listeners {
    canvas: HtmlCanvasElement,
    window: Window,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    touch_cancel: Closure<dyn FnMut(TouchEvent)>,
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
}

impl Listeners {
    fn canvas_bindings(&self) -> [(&'static str, &Function); 6] {
        [
            ("touchstart", self.touch_start.as_ref().unchecked_ref()),
            ("touchmove", self.touch_move.as_ref().unchecked_ref()),
            ("touchend", self.touch_end.as_ref().unchecked_ref()),
            ("touchcancel", self.touch_cancel.as_ref().unchecked_ref()),
            ("mousedown", self.mouse_down.as_ref().unchecked_ref()),
            ("mousemove", self.mouse_move.as_ref().unchecked_ref()),
        ]
    }

    fn attach(&self) -> Result<(), SurfaceError> {
        for (name, cb) in self.canvas_bindings() {
            listen(&self.canvas, name, cb)?;
        }
        // Released outside the canvas still ends the stroke.
        listen(&self.window, "mouseup", self.mouse_up.as_ref().unchecked_ref())
    }

    fn detach(&self) {
        for (name, cb) in self.canvas_bindings() {
            let _ = self.canvas.remove_event_listener_with_callback(name, cb);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("mouseup", self.mouse_up.as_ref().unchecked_ref());
    }
}

fn listen(target: &EventTarget, name: &'static str, cb: &Function) -> Result<(), SurfaceError> {
    target
        .add_event_listener_with_callback(name, cb)
        .map_err(|_| SurfaceError::Listener(name))
}

fn setup(
    canvas_ref: &NodeRef,
    config: &SketchConfig,
    sketchpad: &SharedPad,
    surface_slot: &SharedSurface,
) -> Result<Listeners, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(SurfaceError::MissingCanvas)?;
    let client_width = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|el| el.client_width())
        .unwrap_or(0);
    canvas.set_width(config.canvas_width(client_width));
    canvas.set_height(config.canvas_height);

    let mut surface = CanvasSurface::from_canvas(canvas.clone())?;
    sketchpad.borrow().clear(&mut surface);
    *surface_slot.borrow_mut() = Some(surface);

    let dispatch: Rc<dyn Fn(ContactEvent)> = {
        let sketchpad = sketchpad.clone();
        let surface_slot = surface_slot.clone();
        Rc::new(move |event: ContactEvent| {
            let mut surface = surface_slot.borrow_mut();
            let Some(surface) = surface.as_mut() else {
                return;
            };
            let mut pad = sketchpad.borrow_mut();
            let report = pad.handle(&event, surface);
            if report.full > 0 {
                clog(&format!(
                    "{} contact(s) not drawn: {}/{SLOT_COUNT} slots busy",
                    report.full,
                    pad.tracker().active_count()
                ));
            }
        })
    };

    // Touch handlers share one shape; only the event mapping differs.
    let touch_cb = |to_event: fn(&TouchEvent, &HtmlCanvasElement) -> ContactEvent, prevent: bool| {
        let canvas = canvas.clone();
        let dispatch = dispatch.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if prevent {
                e.prevent_default();
            }
            dispatch(to_event(&e, &canvas));
        }) as Box<dyn FnMut(_)>)
    };
    let mouse_cb = |to_event: fn(&MouseEvent, &HtmlCanvasElement) -> Option<ContactEvent>| {
        let canvas = canvas.clone();
        let dispatch = dispatch.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if let Some(event) = to_event(&e, &canvas) {
                dispatch(event);
            }
        }) as Box<dyn FnMut(_)>)
    };

    // Cancelling touchstart also stops the browser from synthesizing mouse events for the touch.
    let listeners = Listeners {
        canvas: canvas.clone(),
        window,
        touch_start: touch_cb(
            |e, canvas| {
                ContactEvent::Start(input::touch_contacts(e, &canvas.get_bounding_client_rect()))
            },
            true,
        ),
        touch_move: touch_cb(
            |e, canvas| {
                ContactEvent::Move(input::touch_contacts(e, &canvas.get_bounding_client_rect()))
            },
            true,
        ),
        touch_end: touch_cb(|e, _| ContactEvent::End(input::touch_ids(e)), false),
        touch_cancel: touch_cb(|e, _| ContactEvent::Cancel(input::touch_ids(e)), false),
        mouse_down: mouse_cb(|e, canvas| {
            (e.button() == 0).then(|| {
                ContactEvent::Start(vec![input::mouse_contact(
                    e,
                    &canvas.get_bounding_client_rect(),
                )])
            })
        }),
        mouse_move: mouse_cb(|e, canvas| {
            Some(ContactEvent::Move(vec![input::mouse_contact(
                e,
                &canvas.get_bounding_client_rect(),
            )]))
        }),
        mouse_up: mouse_cb(|e, _| {
            (e.button() == 0).then(|| ContactEvent::End(vec![ContactId::Mouse]))
        }),
    };
    listeners.attach()?;
    Ok(listeners)
}

#[function_component(CanvasView)]
pub fn canvas_view(props: &CanvasViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let sketchpad = use_mut_ref(|| Sketchpad::new(StrokeRenderer::from_config(&props.config)));
    let surface = use_mut_ref(|| None::<CanvasSurface>);

    // Mount: size the canvas, clear it, start listening.
    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        let sketchpad = sketchpad.clone();
        let surface = surface.clone();
        use_effect_with((), move |_| {
            let listeners = match setup(&canvas_ref, &config, &sketchpad, &surface) {
                Ok(listeners) => Some(listeners),
                Err(e) => {
                    clog(&format!("sketching disabled: {e}"));
                    None
                }
            };
            move || {
                if let Some(listeners) = listeners {
                    listeners.detach();
                }
                sketchpad.borrow_mut().reset();
                surface.borrow_mut().take();
            }
        });
    }

    // External clear trigger
    {
        let sketchpad = sketchpad.clone();
        let surface = surface.clone();
        use_effect_with(props.clear_generation, move |_| {
            if let Some(surface) = surface.borrow_mut().as_mut() {
                sketchpad.borrow().clear(surface);
            }
            || ()
        });
    }

    html! {
        <canvas
            id="canvas"
            ref={canvas_ref}
            style="display:block; border:1px solid #30363d; touch-action:none;"
        />
    }
}
