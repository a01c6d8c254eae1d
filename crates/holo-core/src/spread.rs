use crate::constants::{CENTRAL_CLASSES, SPREAD_CARD_SELECTOR};
use crate::document::Document;

#[derive(Clone, Debug, PartialEq)]
pub struct SpreadSlot<N> {
    pub node: N,
    /// One of the two rotated centre cards; never translated or floated.
    pub central: bool,
}

/// Cards of the cross layout in document order.
#[derive(Clone, Debug, Default)]
pub struct SpreadLayout<N> {
    pub slots: Vec<SpreadSlot<N>>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> SpreadLayout<N> {
    pub fn locate<D: Document<Node = N>>(doc: &D) -> Self {
        let slots = doc
            .query_all(SPREAD_CARD_SELECTOR)
            .into_iter()
            .map(|node| {
                let central = CENTRAL_CLASSES.iter().any(|c| doc.has_class(&node, c));
                SpreadSlot { node, central }
            })
            .collect();
        Self { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots that take part in translate and float animations.
    pub fn floating(&self) -> impl Iterator<Item = &SpreadSlot<N>> {
        self.slots.iter().filter(|s| !s.central)
    }
}
