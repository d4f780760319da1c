use crate::constants::NAV_ACTIVE_CLASS;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn close(toggle: &web::Element, links: &web::Element) {
    _ = links.class_list().remove_1(NAV_ACTIVE_CLASS);
    _ = toggle.class_list().remove_1(NAV_ACTIVE_CLASS);
}

/// Mobile navigation: the toggle flips the `active` state on itself and the
/// menu; clicking a menu link or anywhere outside both force-closes it.
/// Closing is idempotent.
pub fn wire_nav(document: &web::Document, toggle: web::Element, links: web::Element) {
    {
        let toggle_for_click = toggle.clone();
        let links = links.clone();
        dom::add_click_listener(&toggle, move |_| {
            _ = links.class_list().toggle(NAV_ACTIVE_CLASS);
            _ = toggle_for_click.class_list().toggle(NAV_ACTIVE_CLASS);
        });
    }

    // Close on link click for single-page anchor navigation
    if let Ok(anchors) = links.query_selector_all("a") {
        for link in dom::elements_of(anchors) {
            let toggle = toggle.clone();
            let links = links.clone();
            dom::add_click_listener(&link, move |_| close(&toggle, &links));
        }
    }

    // Close when the click lands outside both the toggle and the menu
    {
        let toggle = toggle.clone();
        let links = links.clone();
        dom::add_click_listener(document, move |ev: web::MouseEvent| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
                return;
            };
            if !toggle.contains(Some(&target)) && !links.contains(Some(&target)) {
                close(&toggle, &links);
            }
        });
    }
}
