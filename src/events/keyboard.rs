use crate::constants::KONAMI_SEQUENCE;
use crate::konami::KonamiTracker;
use crate::reveal::Revealables;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed every keydown into the Konami tracker; a full match force-reveals all
/// hidden elements.
pub fn wire_global_keydown(document: &web::Document, revealables: Revealables) {
    let tracker = Rc::new(RefCell::new(KonamiTracker::new(&KONAMI_SEQUENCE)));
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if tracker.borrow_mut().observe(&ev.key()) {
            revealables.reveal_all();
            log::info!("[konami] the lantern reveals all truths...");
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
