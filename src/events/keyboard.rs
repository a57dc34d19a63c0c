use crate::modal;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    match ev.key().as_str() {
        "r" | "R" => {
            modal::open_registration(document);
        }
        "Escape" => {
            if modal::is_open(document) {
                modal::close(document);
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &doc);
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
