#![cfg(target_arch = "wasm32")]
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fade;
mod frame;
mod input;
mod konami;
mod nav;
mod reveal;
mod scroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lantern-web starting");

    // Defer wiring past the current script turn; the module is loaded
    // deferred, so the DOM is fully parsed by the time this runs.
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let is_mobile = dom::is_mobile_viewport(&window);
    let is_touch = dom::is_touch_device(&window);
    let revealables = reveal::Revealables::collect(&document);

    // Desktop gets the eased lantern and continuous proximity tracking;
    // touch/mobile gets per-tap reveal instead. The branches are exclusive.
    if !is_mobile && !is_touch {
        wire_lantern(&document, revealables.clone());
    } else {
        revealables.hide_fixed(&window);
        events::wire_touch_reveal(&document, revealables.clone());
    }

    if let (Some(toggle), Some(links)) = (
        document.get_element_by_id("navToggle"),
        document.get_element_by_id("navLinks"),
    ) {
        nav::wire_nav(&document, toggle, links);
    }

    scroll::wire_anchor_scroll(&window, &document);

    if !is_touch {
        if let Some(hero) = document
            .query_selector(".hero-image")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            scroll::wire_parallax(&window, hero);
        }
    }

    fade::wire_fade_in(&document);
    events::wire_global_keydown(&document, revealables);

    log::info!("Diogenes' Dog says: \"I am looking for an honest developer...\"");
    Ok(())
}

fn wire_lantern(document: &web::Document, revealables: reveal::Revealables) {
    let Some(cursor) = document
        .get_element_by_id("lanternCursor")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[cursor] missing #lanternCursor, follower disabled");
        return;
    };

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_handlers(events::PointerWiring {
        cursor: cursor.clone(),
        pointer: pointer.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        cursor,
        pointer,
        revealables,
        eased: glam::Vec2::ZERO,
    }));
    frame::start_loop(frame_ctx);
}
