use crate::constants::{
    FADE_HIDDEN_OFFSET_PX, FADE_ROOT_MARGIN, FADE_SELECTOR, FADE_THRESHOLD, FADE_TRANSITION,
    FADE_VISIBLE_CLASS, FADE_VISIBLE_RULE,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One-shot fade-in for content blocks: each observed element gains the
/// visible class the first time it intersects the viewport and is then
/// unobserved, so a later exit/re-entry changes nothing.
pub fn wire_fade_in(document: &web::Document) {
    let targets = dom::query_all(document, FADE_SELECTOR);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));
    options.set_root_margin(FADE_ROOT_MARGIN);

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(FADE_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            log::error!("[fade] intersection observer unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();

    for el in &targets {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let style = html.style();
            _ = style.set_property("opacity", "0");
            _ = style.set_property("transform", &format!("translateY({FADE_HIDDEN_OFFSET_PX}px)"));
            _ = style.set_property("transition", FADE_TRANSITION);
        }
        observer.observe(el);
    }

    dom::inject_style_rule(document, FADE_VISIBLE_RULE);
}
