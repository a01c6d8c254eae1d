use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client position of a mouse event, or of the first active touch.
///
/// `touchend` carries no active touches and yields `None`.
#[inline]
pub fn client_point(ev: &web::Event, is_touch: bool) -> Option<DVec2> {
    if is_touch {
        let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
        return Some(DVec2::new(touch.client_x() as f64, touch.client_y() as f64));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| DVec2::new(m.client_x() as f64, m.client_y() as f64))
}
