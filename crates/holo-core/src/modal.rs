//! Singleton card viewer overlay.

use crate::card::HoloSurface;
use crate::constants::{
    ACTIVE_CLASS, MODAL_CARD_ID, MODAL_CLOSE_SELECTOR, MODAL_ID, MODAL_IMAGE_ALT, MODAL_IMAGE_ID,
    MODAL_OVERLAY_SELECTOR,
};
use crate::document::Document;
use crate::error::HoloError;

pub struct Modal<N> {
    pub root: N,
    pub overlay: N,
    pub close: N,
    pub image: N,
    pub card: HoloSurface<N>,
    body: N,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Modal<N> {
    /// Resolve the modal's elements. All of them are required.
    pub fn locate<D: Document<Node = N>>(doc: &D) -> Result<Self, HoloError> {
        let root = doc
            .by_id(MODAL_ID)
            .ok_or(HoloError::missing("#card-modal"))?;
        let overlay = doc
            .query_in(&root, MODAL_OVERLAY_SELECTOR)
            .ok_or(HoloError::missing(".modal__overlay"))?;
        let close = doc
            .query_in(&root, MODAL_CLOSE_SELECTOR)
            .ok_or(HoloError::missing(".modal__close"))?;
        let image = doc
            .by_id(MODAL_IMAGE_ID)
            .ok_or(HoloError::missing("#modal-card-image"))?;
        let card = doc
            .by_id(MODAL_CARD_ID)
            .ok_or(HoloError::missing("#modal-card"))?;
        let body = doc.body().ok_or(HoloError::MissingBody)?;
        Ok(Self {
            root,
            overlay,
            close,
            image,
            card: HoloSurface::new(card),
            body,
        })
    }

    /// The `active` class on the root is the source of truth.
    pub fn is_open<D: Document<Node = N>>(&self, doc: &D) -> bool {
        doc.has_class(&self.root, ACTIVE_CLASS)
    }

    pub fn open<D: Document<Node = N>>(&mut self, doc: &D, image_src: &str) {
        doc.set_attribute(&self.image, "src", image_src);
        doc.set_attribute(&self.image, "alt", MODAL_IMAGE_ALT);
        self.card.reset(doc);
        doc.add_class(&self.root, ACTIVE_CLASS);
        doc.set_style(&self.body, "overflow", "hidden");
        log::info!("[modal] open {}", image_src);
    }

    pub fn close<D: Document<Node = N>>(&mut self, doc: &D) {
        doc.remove_class(&self.root, ACTIVE_CLASS);
        doc.set_style(&self.body, "overflow", "");
        self.card.reset(doc);
        log::info!("[modal] closed");
    }

    /// Escape dismisses the modal; any other key, or Escape while closed, is ignored.
    pub fn on_key<D: Document<Node = N>>(&mut self, doc: &D, key: &str) -> bool {
        if key == "Escape" && self.is_open(doc) {
            self.close(doc);
            return true;
        }
        false
    }
}
