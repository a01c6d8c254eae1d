use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn key_of(ev: &web::Event) -> Option<String> {
    ev.dyn_ref::<web::KeyboardEvent>().map(|k| k.key())
}
