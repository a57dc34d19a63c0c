//! Idempotent content population and page navigation. Containers that are
//! already populated are left alone, so loaders can run on every visit.

use crate::core::content::{BRAND, NAV_PAGES, TRACKS};
use crate::core::markup;
use crate::dom;
use crate::modal;
use wasm_bindgen::JsCast;
use web_sys as web;

fn is_populated(el: &web::Element) -> bool {
    el.child_element_count() > 0
}

pub fn populate_tracks(document: &web::Document) {
    let Some(grid) = document.get_element_by_id("tracks-grid") else {
        return;
    };
    if is_populated(&grid) {
        return;
    }
    grid.set_inner_html(&markup::tracks_grid_html());
    for track in TRACKS {
        let doc = document.clone();
        dom::add_click_listener(document, &format!("track-card-{}", track.id), move || {
            modal::open_track(&doc, track)
        });
    }
}

pub fn populate_home(document: &web::Document) {
    populate_container(document, "home-content", markup::home_html);
}

pub fn populate_timeline(document: &web::Document) {
    populate_container(document, "timeline-container", markup::timeline_html);
}

pub fn populate_guidelines(document: &web::Document) {
    populate_container(document, "guidelines-content", markup::guidelines_html);
}

pub fn populate_contact(document: &web::Document) {
    populate_container(document, "contact-content", markup::contact_html);
}

fn populate_container(document: &web::Document, id: &str, build: impl Fn() -> String) {
    let Some(container) = document.get_element_by_id(id) else {
        return;
    };
    if is_populated(&container) {
        return;
    }
    container.set_inner_html(&build());
}

pub fn load_page_content(document: &web::Document, page_id: &str) {
    match page_id {
        "home" => populate_home(document),
        "tracks" => populate_tracks(document),
        "timeline" => populate_timeline(document),
        "guidelines" => populate_guidelines(document),
        "contact" => populate_contact(document),
        _ => {}
    }
}

/// Switch the active `.page` element and nav states, populating the target
/// page's content on first visit.
pub fn navigate_to(document: &web::Document, page_id: &str) {
    if let Ok(pages) = document.query_selector_all(".page") {
        for i in 0..pages.length() {
            if let Some(el) = pages.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                let _ = el.class_list().remove_1("active");
            }
        }
    }
    if let Some(target) = document.get_element_by_id(&format!("page-{page_id}")) {
        let _ = target.class_list().add_1("active");
    }
    load_page_content(document, page_id);
    update_active_nav(document, page_id);
}

fn update_active_nav(document: &web::Document, page_id: &str) {
    if let Ok(links) = document.query_selector_all(".nav-link") {
        for i in 0..links.length() {
            if let Some(el) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                let active = el.get_attribute("data-page").as_deref() == Some(page_id);
                let _ = el.class_list().toggle_with_force("active", active);
            }
        }
    }
}

pub fn wire_navigation(document: &web::Document) {
    for page in NAV_PAGES {
        let doc = document.clone();
        dom::add_click_listener(document, &format!("nav-{}", page.id), move || {
            navigate_to(&doc, page.id)
        });
    }
    let doc = document.clone();
    dom::add_click_listener(document, "register-btn", move || {
        modal::open_registration(&doc)
    });
    let doc = document.clone();
    dom::add_click_listener(document, "floating-register", move || {
        modal::open_registration(&doc)
    });
    dom::set_text(document, "nav-brand", BRAND);
    let doc = document.clone();
    dom::add_click_listener(document, "nav-brand", move || navigate_to(&doc, "home"));
}
