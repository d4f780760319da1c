use crate::constants::CURSOR_EASE;
use crate::input::{self, PointerState};
use crate::reveal::Revealables;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the lantern cursor: the element being moved, the raw
/// pointer target shared with the mousemove handler, and the eased position
/// owned exclusively by this loop.
pub struct FrameContext {
    pub cursor: web::HtmlElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub revealables: Revealables,
    pub eased: Vec2,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let target = self.pointer.borrow().position;
        self.eased = input::ease_toward(self.eased, target, CURSOR_EASE);

        let style = self.cursor.style();
        _ = style.set_property("left", &format!("{}px", self.eased.x));
        _ = style.set_property("top", &format!("{}px", self.eased.y));

        // Proximity tracks the raw pointer, not the trailing lantern
        self.revealables.apply_proximity(target);
    }
}

/// Drive the frame loop with requestAnimationFrame. The tick closure
/// reschedules itself indefinitely; it is only torn down with the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
