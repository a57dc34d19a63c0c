//! Per-frame driver: clears both surfaces, advances and draws every waveform,
//! then every particle. The loop runs on `requestAnimationFrame` and pauses
//! while the page is hidden.

use crate::core::particles::ParticleField;
use crate::core::waves::WaveBand;
use crate::events::pointer::PointerState;
use crate::render;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a frame touches, owned explicitly instead of read from ambient
/// globals.
pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub band: Rc<RefCell<WaveBand>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub signal_canvas: web::HtmlCanvasElement,
    pub particles_canvas: web::HtmlCanvasElement,
    pub signal_ctx: web::CanvasRenderingContext2d,
    pub particles_ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.signal_ctx.clear_rect(
            0.0,
            0.0,
            self.signal_canvas.width() as f64,
            self.signal_canvas.height() as f64,
        );
        self.particles_ctx.clear_rect(
            0.0,
            0.0,
            self.particles_canvas.width() as f64,
            self.particles_canvas.height() as f64,
        );

        {
            let mut band = self.band.borrow_mut();
            band.update();
            let width = band.width;
            for wave in &band.waves {
                render::draw_wave(&self.signal_ctx, wave, width);
            }
        }

        let pointer = *self.pointer.borrow();
        let mut field = self.field.borrow_mut();
        field.update(Vec2::new(pointer.x, pointer.y));
        for particle in field.particles() {
            render::draw_particle(&self.particles_ctx, particle);
        }
    }
}

/// Handle to the RAF loop; pause/resume are idempotent.
#[derive(Clone)]
pub struct FrameDriver {
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameDriver {
    let driver = FrameDriver {
        running: Rc::new(Cell::new(false)),
        tick: Rc::new(RefCell::new(None)),
    };
    let tick_clone = driver.tick.clone();
    let running = driver.running.clone();
    *driver.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(tick) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(tick.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    driver.resume();
    driver
}

impl FrameDriver {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn pause(&self) {
        self.running.set(false);
    }

    pub fn resume(&self) {
        // Guard against double-scheduling when already running.
        if self.running.get() {
            return;
        }
        self.running.set(true);
        if let Some(w) = web::window() {
            if let Some(tick) = self.tick.borrow().as_ref() {
                let _ = w.request_animation_frame(tick.as_ref().unchecked_ref());
            }
        }
    }
}

/// Pause the loop while the page is hidden, resume when visible again.
pub fn wire_visibility(driver: FrameDriver) {
    if let Some(document) = crate::dom::window_document() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if doc.hidden() {
                driver.pause();
            } else {
                driver.resume();
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
