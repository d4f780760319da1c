use crate::input::PointerState;
use crate::reveal::Revealables;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub cursor: web::HtmlElement,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
    wire_enter_leave(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut p = w.pointer.borrow_mut();
        p.position = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = crate::dom::window_document() {
        _ = doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Hide the lantern when the pointer leaves the window so a stale visual is
// never left behind; restore it on re-entry.
fn wire_enter_leave(w: &PointerWiring) {
    let cursor_leave = w.cursor.clone();
    let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        _ = cursor_leave.style().set_property("opacity", "0");
    }) as Box<dyn FnMut()>);

    let cursor_enter = w.cursor.clone();
    let enter = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        _ = cursor_enter.style().set_property("opacity", "1");
    }) as Box<dyn FnMut()>);

    if let Some(doc) = crate::dom::window_document() {
        _ = doc.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        _ = doc.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    }
    leave.forget();
    enter.forget();
}

/// Touch devices get a single proximity evaluation per tap instead of the
/// continuous frame loop.
pub fn wire_touch_reveal(document: &web::Document, revealables: Revealables) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().item(0) else {
            return;
        };
        revealables.reveal_near_tap(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}
