//! Per-card hover/touch state machine.

use crate::constants::{
    ACTIVE_CLASS, CARD_FRONT_SELECTOR, IMAGE_DATA_ATTR, MODAL_CARD_CLASS, READING_CLASS,
};
use crate::document::Document;
use crate::holo::{map_pointer, HoloState};
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceState {
    #[default]
    Idle,
    Active,
}

/// A node that carries the holo effect.
#[derive(Clone, Debug)]
pub struct HoloSurface<N> {
    pub node: N,
    state: SurfaceState,
    last: HoloState,
}

impl<N: Clone + PartialEq + std::fmt::Debug> HoloSurface<N> {
    pub fn new(node: N) -> Self {
        Self {
            node,
            state: SurfaceState::Idle,
            last: HoloState::NEUTRAL,
        }
    }

    #[inline]
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Last property set written to the node.
    #[inline]
    pub fn holo(&self) -> HoloState {
        self.last
    }

    pub fn enter<D: Document<Node = N>>(&mut self, doc: &D, pointer: DVec2) {
        doc.add_class(&self.node, ACTIVE_CLASS);
        self.state = SurfaceState::Active;
        self.write(doc, map_pointer(doc.bounds(&self.node), pointer));
    }

    pub fn update<D: Document<Node = N>>(&mut self, doc: &D, pointer: DVec2) {
        if self.state == SurfaceState::Idle {
            self.enter(doc, pointer);
            return;
        }
        self.write(doc, map_pointer(doc.bounds(&self.node), pointer));
    }

    /// Back to neutral; also used when the surface is reset from outside.
    pub fn reset<D: Document<Node = N>>(&mut self, doc: &D) {
        self.write(doc, HoloState::NEUTRAL);
        doc.remove_class(&self.node, ACTIVE_CLASS);
        self.state = SurfaceState::Idle;
    }

    fn write<D: Document<Node = N>>(&mut self, doc: &D, holo: HoloState) {
        for (name, value) in holo.properties() {
            doc.set_style(&self.node, name, &value);
        }
        self.last = holo;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    /// Standalone card in the reading section.
    Reading,
    /// Card placed in the spread layout.
    Spread,
    /// A `.card-modal` copy outside the viewer; hover effect only.
    Viewer,
}

impl CardKind {
    pub fn classify<D: Document>(doc: &D, node: &D::Node) -> CardKind {
        if doc.has_class(node, READING_CLASS) {
            CardKind::Reading
        } else if doc.has_class(node, MODAL_CARD_CLASS) {
            CardKind::Viewer
        } else {
            CardKind::Spread
        }
    }

    /// Whether a click on this card shows it in the modal.
    #[inline]
    pub fn opens_modal(self) -> bool {
        self != CardKind::Viewer
    }
}

#[derive(Clone, Debug)]
pub struct Card<N> {
    pub kind: CardKind,
    pub surface: HoloSurface<N>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Card<N> {
    pub fn new(kind: CardKind, node: N) -> Self {
        Self {
            kind,
            surface: HoloSurface::new(node),
        }
    }

    /// Image shown in the modal when this card is clicked.
    ///
    /// Reading cards may override their face with `data-image`.
    pub fn image_source<D: Document<Node = N>>(&self, doc: &D) -> Option<String> {
        let node = &self.surface.node;
        if self.kind == CardKind::Reading {
            if let Some(src) = doc.attribute(node, IMAGE_DATA_ATTR).filter(|s| !s.is_empty()) {
                return Some(src);
            }
        }
        doc.query_in(node, CARD_FRONT_SELECTOR)
            .and_then(|front| doc.attribute(&front, "src"))
            .filter(|s| !s.is_empty())
    }
}
