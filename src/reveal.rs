use crate::constants::{
    INLINE_REVEAL_CLASS, REVEALED_CLASS, REVEAL_RADIUS_PX, REVEAL_SELECTOR, TOUCH_REVEAL_RADIUS_PX,
};
use crate::dom;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The fixed set of `[data-reveal]` elements captured at init.
#[derive(Clone)]
pub struct Revealables {
    elements: Vec<web::Element>,
}

impl Revealables {
    pub fn collect(document: &web::Document) -> Self {
        let elements = dom::query_all(document, REVEAL_SELECTOR);
        log::info!("[reveal] tracking {} hidden elements", elements.len());
        Self { elements }
    }

    fn center(el: &web::Element) -> Vec2 {
        let rect = el.get_bounding_client_rect();
        input::rect_center(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    /// Desktop pass, run every frame: `revealed` iff the pointer is strictly
    /// inside the reveal radius of the element's center.
    pub fn apply_proximity(&self, pointer: Vec2) {
        for el in &self.elements {
            let cl = el.class_list();
            if input::within_radius(pointer, Self::center(el), REVEAL_RADIUS_PX) {
                _ = cl.add_1(REVEALED_CLASS);
            } else {
                _ = cl.remove_1(REVEALED_CLASS);
            }
        }
    }

    /// Touch pass, run once per tap: inline revealables near the touch point
    /// stay revealed; nothing is ever un-revealed by a later tap.
    pub fn reveal_near_tap(&self, tap: Vec2) {
        for el in &self.elements {
            if !el.class_list().contains(INLINE_REVEAL_CLASS) {
                continue;
            }
            if input::within_radius(tap, Self::center(el), TOUCH_REVEAL_RADIUS_PX) {
                _ = el.class_list().add_1(REVEALED_CLASS);
            }
        }
    }

    /// Fixed-positioned revealables track the cursor; without a persistent
    /// pointer they are meaningless, so on touch devices they are hidden.
    pub fn hide_fixed(&self, window: &web::Window) {
        for el in &self.elements {
            let fixed = window
                .get_computed_style(el)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("position").ok())
                .map(|position| position == "fixed")
                .unwrap_or(false);
            if fixed {
                if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                    _ = html.style().set_property("display", "none");
                }
            }
        }
    }

    /// Easter egg: reveal everything at once.
    pub fn reveal_all(&self) {
        for el in &self.elements {
            _ = el.class_list().add_1(REVEALED_CLASS);
        }
    }
}
