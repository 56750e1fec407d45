use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use folio_engine::{Animator, FieldConfig, FieldError, InputEvent, SurfaceSize};

use crate::canvas::CanvasRenderer;

type SharedAnimator = Rc<RefCell<Animator<CanvasRenderer>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser side of a mounted field: DOM listeners plus the
/// `requestAnimationFrame` loop driving an `Animator`.
///
/// Everything runs on the main thread. Listeners only queue input; the frame
/// callback is the only place the particles move.
pub struct FieldRunner {
    animator: SharedAnimator,
    window: Window,
    canvas: HtmlCanvasElement,
    on_resize: Closure<dyn FnMut()>,
    on_pointer: Closure<dyn FnMut(MouseEvent)>,
    frame: FrameCallback,
    /// Handle of the pending animation frame, if any.
    frame_id: Rc<Cell<Option<i32>>>,
    stopped: bool,
}

fn viewport_size(window: &Window) -> SurfaceSize {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    SurfaceSize::new(width as f32, height as f32)
}

fn host_seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (js_sys::Date::now() as u64) << 16 ^ noise
}

fn js_err(context: &str, e: JsValue) -> FieldError {
    FieldError::SurfaceUnavailable(format!("{}: {:?}", context, e))
}

impl FieldRunner {
    /// Size the canvas to the viewport, wire listeners and start the loop.
    pub fn start(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Self, FieldError> {
        let window = web_sys::window()
            .ok_or_else(|| FieldError::SurfaceUnavailable("no window".into()))?;
        let renderer = CanvasRenderer::acquire(canvas.clone())?;
        let size = viewport_size(&window);
        let animator = Rc::new(RefCell::new(Animator::mount(config, renderer, size, host_seed())?));

        let on_resize = {
            let animator = animator.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let size = viewport_size(&window);
                animator.borrow_mut().push_input(InputEvent::Resize {
                    width: size.width,
                    height: size.height,
                });
            }) as Box<dyn FnMut()>)
        };

        let on_pointer = {
            let animator = animator.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                animator.borrow_mut().push_input(InputEvent::PointerMove {
                    x: (event.client_x() as f64 - rect.left()) as f32,
                    y: (event.client_y() as f64 - rect.top()) as f32,
                });
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| js_err("resize listener", e))?;
        canvas
            .add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())
            .map_err(|e| js_err("mousemove listener", e))?;

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        {
            let animator = animator.clone();
            let slot = frame.clone();
            let frame_id = frame_id.clone();
            let window = window.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame_id.set(None);
                if !animator.borrow_mut().frame() {
                    return;
                }
                if let Some(callback) = slot.borrow().as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(id) => frame_id.set(Some(id)),
                        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        let mut runner = Self {
            animator,
            window,
            canvas,
            on_resize,
            on_pointer,
            frame,
            frame_id,
            stopped: false,
        };
        if let Err(e) = runner.schedule_first_frame() {
            runner.stop();
            return Err(e);
        }
        Ok(runner)
    }

    fn schedule_first_frame(&self) -> Result<(), FieldError> {
        let slot = self.frame.borrow();
        if let Some(callback) = slot.as_ref() {
            let id = self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .map_err(|e| js_err("requestAnimationFrame", e))?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }

    /// Cancel the pending frame, remove both listeners and freeze the field.
    /// Idempotent.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        let _ = self
            .canvas
            .remove_event_listener_with_callback("mousemove", self.on_pointer.as_ref().unchecked_ref());

        self.animator.borrow_mut().unmount();
        // Breaks the callback's reference to itself.
        self.frame.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        !self.stopped && self.animator.borrow().is_running()
    }

    // ---- Frame buffer views (read by the host straight out of WASM memory) ----

    pub fn circles_ptr(&self) -> *const f32 {
        self.animator.borrow().field().frame_buffer().circles_ptr()
    }

    pub fn circle_count(&self) -> u32 {
        self.animator.borrow().field().frame_buffer().circle_count()
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.animator.borrow().field().frame_buffer().links_ptr()
    }

    pub fn link_count(&self) -> u32 {
        self.animator.borrow().field().frame_buffer().link_count()
    }
}

impl Drop for FieldRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
