//! Staggered fade/rise-in of the spread on load.

use crate::constants::{
    Settings, ENTRANCE_HIDDEN_TRANSFORM, ENTRANCE_SHOWN_TRANSFORM, ENTRANCE_TRANSITION,
};
use crate::document::{Document, Scheduler, Task};
use crate::spread::SpreadLayout;

/// Hide every spread card and schedule its reveal.
pub fn begin<D: Document, S: Scheduler>(
    doc: &D,
    scheduler: &S,
    spread: &SpreadLayout<D::Node>,
    settings: &Settings,
) {
    for (i, slot) in spread.slots.iter().enumerate() {
        doc.set_style(&slot.node, "opacity", "0");
        // centre cards keep their rotation transform from the stylesheet
        if !slot.central {
            doc.set_style(&slot.node, "transform", ENTRANCE_HIDDEN_TRANSFORM);
        }
        scheduler.schedule(settings.entrance_delay(i), Task::Reveal(i));
    }
    log::debug!("[entrance] scheduled {} cards", spread.len());
}

pub fn reveal<D: Document>(doc: &D, spread: &SpreadLayout<D::Node>, index: usize) {
    let Some(slot) = spread.slots.get(index) else {
        log::warn!("[entrance] no spread card at index {}", index);
        return;
    };
    doc.set_style(&slot.node, "transition", ENTRANCE_TRANSITION);
    doc.set_style(&slot.node, "opacity", "1");
    if !slot.central {
        doc.set_style(&slot.node, "transform", ENTRANCE_SHOWN_TRANSFORM);
    }
}
