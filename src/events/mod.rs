mod keyboard;
mod pointer;

use crate::dom::WebDocument;
use crate::timers::WebScheduler;
use holo_core::{Binding, Controller};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type App = Controller<WebDocument, WebScheduler>;

/// Register every binding the controller asks for.
pub fn wire_bindings(app: &Rc<RefCell<App>>, document: &web::Document) {
    let bindings = app.borrow().bindings();
    let count = bindings.len();
    for binding in bindings {
        let target: web::EventTarget = match app.borrow().target_node(binding.target) {
            Some(node) => node.clone().into(),
            None => document.clone().into(),
        };
        wire_binding(app.clone(), &target, binding);
    }
    log::info!("[events] wired {} listeners", count);
}

fn wire_binding(app: Rc<RefCell<App>>, target: &web::EventTarget, binding: Binding) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let point = if binding.kind.needs_point() {
            pointer::client_point(&ev, binding.kind.is_touch())
        } else {
            None
        };
        let key = keyboard::key_of(&ev);
        let Some(input) = binding.decode(point, key.as_deref()) else {
            return;
        };
        if binding.stop_propagation {
            ev.stop_propagation();
        }
        match app.try_borrow_mut() {
            Ok(mut ctrl) => ctrl.handle(binding.target, input),
            Err(_) => log::warn!("[events] dropped re-entrant {}", binding.kind.dom_name()),
        }
    }) as Box<dyn FnMut(_)>);

    let name = binding.kind.dom_name();
    let result = if binding.passive {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
    } else {
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
    };
    if let Err(e) = result {
        log::warn!("[events] could not listen for {} on {:?}: {:?}", name, binding.target, e);
    }
    closure.forget();
}
