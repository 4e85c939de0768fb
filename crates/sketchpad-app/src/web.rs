//! WebAssembly entry point and canvas mounting.

use crate::config::apply_query_params;
use kurbo::Vec2;
use sketchpad_core::{CanvasConfig, CanvasSize, PointerEvent, ShapeKind, Sketchpad};
use sketchpad_render::{WebContext, context_2d};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

thread_local! {
    /// Canvas mounted by the start function, kept alive for the page lifetime.
    static MOUNTED: RefCell<Option<CanvasMount>> = const { RefCell::new(None) };
}

/// Canvas element plus the sketchpad driving it.
struct WebSketchpad {
    canvas: HtmlCanvasElement,
    pad: Sketchpad,
}

impl WebSketchpad {
    fn canvas_offset(&self) -> Option<Vec2> {
        if !self.canvas.is_connected() {
            return None;
        }
        Some(Vec2::new(
            f64::from(self.canvas.offset_left()),
            f64::from(self.canvas.offset_top()),
        ))
    }

    fn handle(&mut self, event: PointerEvent) {
        let offset = self.canvas_offset();
        if !self.pad.needs_surface(&event) {
            self.pad.dispatch(&event, offset, None);
            return;
        }
        match context_2d(&self.canvas) {
            Ok(ctx) => {
                let mut surface = WebContext::new(&ctx);
                self.pad.dispatch(&event, offset, Some(&mut surface));
            }
            Err(e) => {
                log::debug!("{e}");
                self.pad.dispatch(&event, offset, None);
            }
        }
    }
}

type Listener = (&'static str, Closure<dyn FnMut(MouseEvent)>);

/// A mounted sketchpad canvas.
///
/// Dropping the mount (or calling `unmount`) removes its event listeners and
/// detaches the canvas from the page.
#[wasm_bindgen]
pub struct CanvasMount {
    canvas: HtmlCanvasElement,
    state: Rc<RefCell<WebSketchpad>>,
    listeners: Vec<Listener>,
    window: Window,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
}

#[wasm_bindgen]
impl CanvasMount {
    /// Remove the canvas and its listeners.
    pub fn unmount(self) {}

    /// Select the shape drawn between pointer positions.
    #[wasm_bindgen(js_name = setShape)]
    pub fn set_shape(&self, name: &str) -> Result<(), JsValue> {
        let kind = name
            .parse::<ShapeKind>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.state.borrow_mut().pad.set_shape_kind(kind);
        Ok(())
    }

    /// Switch to the next shape and return its name.
    #[wasm_bindgen(js_name = cycleShape)]
    pub fn cycle_shape(&self) -> String {
        self.state.borrow_mut().pad.cycle_shape_kind().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> String {
        self.state.borrow().pad.shape_kind().to_string()
    }

    #[wasm_bindgen(getter, js_name = shapesDrawn)]
    pub fn shapes_drawn(&self) -> usize {
        self.state.borrow().pad.shapes_drawn()
    }
}

impl Drop for CanvasMount {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            if let Err(e) = self
                .canvas
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {name} listener: {e:?}");
            }
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove keydown listener: {e:?}");
        }
        self.canvas.remove();
        log::info!("Sketchpad unmounted");
    }
}

fn listen(
    canvas: &HtmlCanvasElement,
    state: &Rc<RefCell<WebSketchpad>>,
    name: &'static str,
    to_event: fn(kurbo::Point) -> PointerEvent,
) -> Result<Listener, JsValue> {
    let state = Rc::clone(state);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let position = kurbo::Point::new(f64::from(event.page_x()), f64::from(event.page_y()));
        state.borrow_mut().handle(to_event(position));
    });
    canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    Ok((name, closure))
}

/// `s` cycles the shape drawn between pointer positions.
fn listen_keys(
    window: &Window,
    state: &Rc<RefCell<WebSketchpad>>,
) -> Result<Closure<dyn FnMut(KeyboardEvent)>, JsValue> {
    let state = Rc::clone(state);
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.repeat() || !event.key().eq_ignore_ascii_case("s") {
            return;
        }
        let kind = state.borrow_mut().pad.cycle_shape_kind();
        log::info!("Drawing {kind}s");
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))
}

/// Current viewport size in CSS pixels.
fn viewport_size(window: &Window) -> CanvasSize {
    let dimension = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v.max(0.0) as u32)
    };
    CanvasSize::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

/// Create a canvas inside `parent` and start listening for pointer events.
fn mount(parent: &Element, config: &CanvasConfig) -> Result<CanvasMount, JsValue> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let size = config.resolve(viewport_size(&window));
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    parent.append_child(&canvas)?;

    let state = Rc::new(RefCell::new(WebSketchpad {
        canvas: canvas.clone(),
        pad: Sketchpad::with_config(config),
    }));

    let listeners = vec![
        listen(&canvas, &state, "mousedown", |position| PointerEvent::Down { position })?,
        listen(&canvas, &state, "mousemove", |position| PointerEvent::Move { position })?,
        listen(&canvas, &state, "mouseup", |position| PointerEvent::Up { position })?,
        listen(&canvas, &state, "mouseleave", |position| PointerEvent::Leave { position })?,
    ];

    let on_key = listen_keys(&window, &state)?;

    log::info!(
        "Sketchpad mounted ({}x{}, {})",
        size.width,
        size.height,
        config.shape
    );

    Ok(CanvasMount {
        canvas,
        state,
        listeners,
        window,
        on_key,
    })
}

/// Mount a sketchpad into the element with id `parent_id`, or the document
/// body when no id is given. Missing dimensions fill the viewport.
#[wasm_bindgen(js_name = mountSketchpad)]
pub fn mount_sketchpad(
    parent_id: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<CanvasMount, JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let parent: Element = match parent_id {
        Some(id) => document
            .get_element_by_id(&id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing element #{id}")))?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("Missing body"))?
            .into(),
    };
    let config = CanvasConfig {
        width,
        height,
        ..CanvasConfig::default()
    };
    mount(&parent, &config)
}

/// Read canvas overrides from the page URL.
fn config_from_url(window: &Window) -> CanvasConfig {
    let mut config = CanvasConfig::default();
    let location = window.location();
    if let Ok(search) = location.search() {
        apply_query_params(&mut config, &search);
    }
    if let Ok(hash) = location.hash() {
        apply_query_params(&mut config, &hash);
    }
    config
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to initialize logger: {e}")))?;

    log::info!("Starting Sketchpad (WASM)");

    let window = window()?;
    let config = config_from_url(&window);
    let body: Element = window
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("Missing body"))?
        .into();

    let mounted = mount(&body, &config)?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
    Ok(())
}
