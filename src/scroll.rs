use crate::constants::{HEADER_OFFSET_PX, PARALLAX_RATE, PARALLAX_SHRINK_PER_PX};
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intercept clicks on in-page anchors and animate the scroll instead of
/// jumping. A bare `#` is ignored; an unresolved target id leaves the
/// default navigation untouched.
pub fn wire_anchor_scroll(window: &web::Window, document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^='#']") {
        let window = window.clone();
        let document = document.clone();
        let anchor_el = anchor.clone();
        dom::add_click_listener(&anchor, move |ev: web::MouseEvent| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(target) = document.query_selector(&href).ok().flatten() else {
                return;
            };
            ev.prevent_default();

            let rect_top = target.get_bounding_client_rect().top();
            let page_y = window.page_y_offset().unwrap_or(0.0);
            let top = input::anchor_scroll_top(rect_top, page_y, HEADER_OFFSET_PX);

            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

/// Subtle parallax on the hero image: translate and shrink with the scroll
/// offset while still inside the first viewport. Past one viewport height the
/// handler writes nothing, leaving the last transform in place.
pub fn wire_parallax(window: &web::Window, hero: web::HtmlElement) {
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let scrolled = win.page_y_offset().unwrap_or(0.0);
        let viewport_h = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if let Some((translate_y, scale)) =
            input::hero_transform(scrolled, viewport_h, PARALLAX_RATE, PARALLAX_SHRINK_PER_PX)
        {
            _ = hero
                .style()
                .set_property("transform", &format!("translateY({translate_y}px) scale({scale})"));
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
