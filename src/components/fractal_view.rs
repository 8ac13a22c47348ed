use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::error::RenderError;
use crate::model::ViewerConfig;
use crate::render::Renderer;
use crate::state::Viewer;
use crate::util::{cerror, clog};

#[derive(Properties, PartialEq, Clone)]
pub struct FractalViewProps {
    pub config: ViewerConfig,
}

#[function_component(FractalView)]
pub fn fractal_view(props: &FractalViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let viewer = use_mut_ref(|| Viewer::new(props.config.clone()));

    {
        let canvas_ref = canvas_ref.clone();
        let viewer = viewer.clone();
        use_effect_with((), move |_| {
            let teardown = match mount(&canvas_ref, viewer) {
                Ok(t) => Some(t),
                Err(e) => {
                    cerror(&format!("fractal view setup failed: {e}"));
                    None
                }
            };
            move || {
                if let Some(t) = teardown {
                    t();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="main-canvas" style="display:block; width:100vw; height:100vh;"></canvas>
    }
}

fn window_size(window: &Window) -> (f64, f64) {
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
    (width, height)
}

/// Wires the viewer to the page: key and resize listeners plus the animation
/// frame loop. The returned closure undoes all of it.
fn mount(
    canvas_ref: &NodeRef,
    viewer: Rc<RefCell<Viewer>>,
) -> Result<Box<dyn FnOnce()>, RenderError> {
    let window = web_sys::window().ok_or(RenderError::Js("no global `window`".into()))?;
    let canvas: HtmlCanvasElement = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(RenderError::Js("canvas ref not attached".into()))?;
    let renderer = Rc::new(RefCell::new(Renderer::new(canvas)?));

    let apply_size = {
        let window = window.clone();
        let viewer = viewer.clone();
        let renderer = renderer.clone();
        move || {
            let (w, h) = window_size(&window);
            let changed = viewer.borrow_mut().on_resize(w, h);
            if let Some(rect) = changed {
                renderer.borrow_mut().apply_viewport(&rect);
            }
        }
    };
    apply_size();
    {
        let rect = viewer.borrow().viewport.rect();
        clog(&format!("fractal view mounted at {}x{}", rect.width, rect.height));
    }

    let keydown_cb = {
        let viewer = viewer.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if viewer.borrow_mut().on_key_down(&e.key()) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())?;

    let keyup_cb = {
        let viewer = viewer.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if viewer.borrow_mut().on_key_up(&e.key()) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(_)>)
    };
    window.add_event_listener_with_callback("keyup", keyup_cb.as_ref().unchecked_ref())?;

    let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        apply_size();
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

    // RAF loop: the closure reschedules itself through the shared cell.
    let raf_id = Rc::new(Cell::new(None::<i32>));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id = raf_id.clone();
        let closure_cell_loop = closure_cell.clone();
        let window_loop = window.clone();
        let last_ts = Cell::new(None::<f64>);
        *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let elapsed = last_ts.get().map_or(0.0, |prev| ts - prev);
            last_ts.set(Some(ts));
            let uniforms = viewer.borrow_mut().tick(elapsed);
            renderer.borrow().draw(&uniforms);
            if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                raf_id.set(window_loop.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let Some(cb) = closure_cell.borrow().as_ref() {
        raf_id.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
    }

    Ok(Box::new(move || {
        let _ = window.remove_event_listener_with_callback(
            "keydown",
            keydown_cb.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "keyup",
            keyup_cb.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "resize",
            resize_cb.as_ref().unchecked_ref(),
        );
        if let Some(id) = raf_id.get() {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure <-> cell cycle.
        closure_cell.borrow_mut().take();
        drop((keydown_cb, keyup_cb, resize_cb));
    }))
}
