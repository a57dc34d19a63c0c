#![cfg(target_arch = "wasm32")]
use crate::core::content::REGISTRATION_OPENS_MS;
use crate::core::content::REGISTRATION_OPEN_TEXT;
use crate::core::countdown::{pad2, Countdown};
use crate::core::particles::{FieldConfig, ParticleField};
use crate::core::waves::WaveBand;
use crate::events::pointer::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod modal;
mod pages;
mod render;

fn canvas_2d(
    document: &web::Document,
    id: &str,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}

fn wire_canvas_resize(
    signal_canvas: web::HtmlCanvasElement,
    particles_canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    band: Rc<RefCell<WaveBand>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_viewport_size(&signal_canvas);
        dom::sync_canvas_viewport_size(&particles_canvas);
        let width = particles_canvas.width() as f32;
        let height = particles_canvas.height() as f32;
        field.borrow_mut().set_bounds(width, height);
        band.borrow_mut().rebuild(width, height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn update_countdown(document: &web::Document, countdown: &Countdown) {
    match countdown.remaining(js_sys::Date::now()) {
        Some(parts) => {
            dom::set_text(document, "days", &pad2(parts.days));
            dom::set_text(document, "hours", &pad2(parts.hours));
            dom::set_text(document, "minutes", &pad2(parts.minutes));
            dom::set_text(document, "seconds", &pad2(parts.seconds));
        }
        None => {
            dom::set_text(document, "reg-text", REGISTRATION_OPEN_TEXT);
        }
    }
}

fn wire_countdown(document: &web::Document) {
    let countdown = Countdown::new(REGISTRATION_OPENS_MS);
    update_countdown(document, &countdown);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        update_countdown(&doc, &countdown);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            constants::COUNTDOWN_INTERVAL_MS,
        );
    }
    closure.forget();
}

fn hide_loading_screen(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading-screen") {
        let _ = el.class_list().add_1("hidden");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sigcup-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    pages::wire_navigation(&document);
    pages::navigate_to(&document, "home");
    events::keyboard::wire_global_keydown(&document);
    wire_countdown(&document);

    // The decorative canvases are optional; without them the page degrades
    // to static content.
    match (
        canvas_2d(&document, "signal-canvas"),
        canvas_2d(&document, "particles-canvas"),
    ) {
        (Some((signal_canvas, signal_ctx)), Some((particles_canvas, particles_ctx))) => {
            dom::sync_canvas_viewport_size(&signal_canvas);
            dom::sync_canvas_viewport_size(&particles_canvas);
            let width = particles_canvas.width() as f32;
            let height = particles_canvas.height() as f32;
            let seed = js_sys::Date::now() as u64;

            let config = FieldConfig {
                count: constants::PARTICLE_COUNT,
                ..FieldConfig::default()
            };
            let field = Rc::new(RefCell::new(ParticleField::new(config, width, height, seed)));
            let band = Rc::new(RefCell::new(WaveBand::new(
                width,
                height,
                seed.rotate_left(17),
            )));
            let pointer_state = Rc::new(RefCell::new(PointerState::centered(width, height)));

            pointer::wire_pointer_tracking(pointer_state.clone());
            pointer::wire_click_burst(field.clone());
            wire_canvas_resize(
                signal_canvas.clone(),
                particles_canvas.clone(),
                field.clone(),
                band.clone(),
            );

            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                field,
                band,
                pointer: pointer_state,
                signal_canvas,
                particles_canvas,
                signal_ctx,
                particles_ctx,
            }));
            let driver = frame::start_loop(frame_ctx);
            frame::wire_visibility(driver);
            log::info!("animation loop started ({}x{})", width, height);
        }
        _ => {
            log::warn!("animation canvases missing; content only");
        }
    }

    hide_loading_screen(&document);
    Ok(())
}
