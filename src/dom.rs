use crate::constants::MOBILE_MEDIA_QUERY;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler and leak the closure; listeners live for the page.
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn elements_of(list: web::NodeList) -> Vec<web::Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

/// Append a `<style>` rule to the document head.
pub fn inject_style_rule(document: &web::Document, css: &str) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(css));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
}

// ---------------- Capability gates ----------------

#[inline]
pub fn is_mobile_viewport(window: &web::Window) -> bool {
    window
        .match_media(MOBILE_MEDIA_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// `"ontouchstart" in window`
#[inline]
pub fn is_touch_device(window: &web::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}
