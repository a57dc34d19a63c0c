use crate::constants::BURST_SIZE;
use crate::core::particles::ParticleField;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known pointer position in canvas pixels (canvases are viewport-sized,
/// so client coordinates map 1:1).
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            x: width / 2.0,
            y: height / 2.0,
        }
    }
}

pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerState>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let mut p = pointer.borrow_mut();
                p.x = ev.client_x() as f32;
                p.y = ev.client_y() as f32;
            }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Clicks anywhere spawn a short-lived burst at the click point.
pub fn wire_click_burst(field: Rc<RefCell<ParticleField>>) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            field.borrow_mut().spawn_burst(at, BURST_SIZE);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
