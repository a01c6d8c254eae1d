#![cfg(target_arch = "wasm32")]
use holo_core::{Controller, Settings};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod events;
mod timers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tarot-holo starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let controller = Controller::attach(
        dom::WebDocument::new(document.clone()),
        timers::WebScheduler::new(),
        Settings::default(),
    )?;
    let app = Rc::new(RefCell::new(controller));

    // timers call back through a weak handle; the listeners keep the app alive
    let weak = Rc::downgrade(&app);
    app.borrow().scheduler().connect(move |task| {
        if let Some(app) = weak.upgrade() {
            app.borrow_mut().fire(task);
        }
    });

    events::wire_bindings(&app, &document);
    app.borrow_mut().start();
    Ok(())
}
