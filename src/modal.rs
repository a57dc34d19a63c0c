//! Track-detail and registration modals, rendered into a `#modal-root`
//! container. Opening replaces whatever is currently shown, so at most one
//! modal is active at a time.

use crate::core::content::Track;
use crate::core::markup;
use crate::dom;
use web_sys as web;

pub fn open_track(document: &web::Document, track: &'static Track) {
    open_with(document, &markup::track_modal_html(track));
}

pub fn open_registration(document: &web::Document) {
    open_with(document, &markup::registration_modal_html());
}

fn open_with(document: &web::Document, body: &str) {
    let Some(root) = document.get_element_by_id("modal-root") else {
        return;
    };
    root.set_inner_html(body);
    let _ = root.class_list().add_1("active");
    let doc = document.clone();
    dom::add_click_listener(document, "modal-close", move || close(&doc));
}

pub fn close(document: &web::Document) {
    if let Some(root) = document.get_element_by_id("modal-root") {
        root.set_inner_html("");
        let _ = root.class_list().remove_1("active");
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id("modal-root")
        .map(|el| el.class_list().contains("active"))
        .unwrap_or(false)
}
