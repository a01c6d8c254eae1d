//! The effect & modal controller.
//!
//! Owns every piece of transient UI state on the page and mutates the
//! document in response to decoded input and fired timers. Hosts subscribe
//! the list returned by [`Controller::bindings`] and forward each event to
//! [`Controller::handle`]; timers come back through [`Controller::fire`].

use crate::card::{Card, CardKind, HoloSurface};
use crate::constants::{Settings, CARD_SELECTOR, FLOAT_KEYFRAMES_CSS};
use crate::document::{Document, Scheduler, Task};
use crate::entrance;
use crate::error::HoloError;
use crate::events::{surface_bindings, Binding, EventKind, Input, Target};
use crate::idle::IdleAnimator;
use crate::modal::Modal;
use crate::spread::SpreadLayout;

pub struct Controller<D: Document, S: Scheduler> {
    doc: D,
    scheduler: S,
    settings: Settings,
    cards: Vec<Card<D::Node>>,
    spread: SpreadLayout<D::Node>,
    modal: Modal<D::Node>,
    idle: IdleAnimator,
}

impl<D: Document, S: Scheduler> Controller<D, S> {
    /// Resolve the page elements and install the float keyframes.
    pub fn attach(doc: D, scheduler: S, settings: Settings) -> Result<Self, HoloError> {
        let modal = Modal::locate(&doc)?;
        let cards: Vec<Card<D::Node>> = doc
            .query_all(CARD_SELECTOR)
            .into_iter()
            .filter(|node| *node != modal.card.node)
            .map(|node| Card::new(CardKind::classify(&doc, &node), node))
            .collect();
        let spread = SpreadLayout::locate(&doc);
        doc.append_style_sheet(FLOAT_KEYFRAMES_CSS);
        log::info!(
            "[init] cards={} spread={} central={}",
            cards.len(),
            spread.len(),
            spread.slots.iter().filter(|s| s.central).count()
        );
        Ok(Self {
            doc,
            scheduler,
            settings,
            cards,
            spread,
            modal,
            idle: IdleAnimator::new(),
        })
    }

    /// Every subscription the host has to register, in registration order.
    pub fn bindings(&self) -> Vec<Binding> {
        let mut out = Vec::with_capacity(self.cards.len() * 7 + 12);
        for (i, card) in self.cards.iter().enumerate() {
            out.extend(surface_bindings(Target::Card(i)));
            if card.kind.opens_modal() {
                out.push(Binding::new(Target::Card(i), EventKind::Click).stopping_propagation());
            }
        }
        out.push(Binding::new(Target::ModalOverlay, EventKind::Click));
        out.push(Binding::new(Target::ModalClose, EventKind::Click));
        out.push(Binding::new(Target::Document, EventKind::KeyDown));
        out.extend(surface_bindings(Target::ModalCard));
        out.push(Binding::new(Target::Document, EventKind::MouseMove));
        out.push(Binding::new(Target::Document, EventKind::TouchStart));
        out
    }

    /// Node a binding is attached to; `None` means the document itself.
    pub fn target_node(&self, target: Target) -> Option<&D::Node> {
        match target {
            Target::Card(i) => self.cards.get(i).map(|c| &c.surface.node),
            Target::ModalCard => Some(&self.modal.card.node),
            Target::ModalOverlay => Some(&self.modal.overlay),
            Target::ModalClose => Some(&self.modal.close),
            Target::Document => None,
        }
    }

    /// Kick off the entrance animation and the initial idle activation.
    pub fn start(&mut self) {
        entrance::begin(&self.doc, &self.scheduler, &self.spread, &self.settings);
        self.idle.arm_initial(&self.scheduler, &self.settings);
    }

    pub fn handle(&mut self, target: Target, input: Input) {
        match target {
            Target::Card(i) => self.handle_card(i, input),
            Target::ModalCard => handle_surface(&self.doc, &mut self.modal.card, input),
            Target::ModalOverlay | Target::ModalClose => {
                if input == Input::Click {
                    self.modal.close(&self.doc);
                }
            }
            Target::Document => match input {
                Input::Activity => self.idle.activity(
                    &self.doc,
                    &self.scheduler,
                    &self.spread,
                    &self.settings,
                ),
                Input::Key(key) => {
                    self.modal.on_key(&self.doc, &key);
                }
                _ => {}
            },
        }
    }

    pub fn fire(&mut self, task: Task) {
        match task {
            Task::Reveal(i) => entrance::reveal(&self.doc, &self.spread, i),
            Task::InitialIdle => self.idle.start(&self.doc, &self.spread),
            Task::IdleTimeout => self.idle.timeout(&self.doc, &self.spread),
        }
    }

    fn handle_card(&mut self, index: usize, input: Input) {
        let Some(card) = self.cards.get_mut(index) else {
            log::warn!("[card] event for unknown card {}", index);
            return;
        };
        if input != Input::Click {
            handle_surface(&self.doc, &mut card.surface, input);
            return;
        }
        if !card.kind.opens_modal() {
            log::debug!("[card] card {} is hover-only", index);
            return;
        }
        match card.image_source(&self.doc) {
            Some(src) => self.modal.open(&self.doc, &src),
            None => log::warn!("[card] card {} has no image to show", index),
        }
    }

    #[inline]
    pub fn document(&self) -> &D {
        &self.doc
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn cards(&self) -> &[Card<D::Node>] {
        &self.cards
    }

    #[inline]
    pub fn spread(&self) -> &SpreadLayout<D::Node> {
        &self.spread
    }

    #[inline]
    pub fn modal(&self) -> &Modal<D::Node> {
        &self.modal
    }

    #[inline]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open(&self.doc)
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.idle.is_idle()
    }

    /// Time since the page last saw pointer or touch activity.
    #[inline]
    pub fn quiet_for(&self) -> Option<std::time::Duration> {
        self.idle.quiet_for()
    }
}

fn handle_surface<D: Document>(doc: &D, surface: &mut HoloSurface<D::Node>, input: Input) {
    match input {
        Input::Enter(p) => surface.enter(doc, p),
        Input::Move(p) => surface.update(doc, p),
        Input::Leave => surface.reset(doc),
        _ => {}
    }
}
