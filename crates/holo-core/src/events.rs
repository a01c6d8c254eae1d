//! Event vocabulary shared between the controller and its host.

use glam::DVec2;

/// What a subscription is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A page card, by index in document order of `.card`.
    Card(usize),
    ModalCard,
    ModalOverlay,
    ModalClose,
    /// The document itself (global activity and keyboard).
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    MouseEnter,
    MouseMove,
    MouseLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    Click,
    KeyDown,
}

impl EventKind {
    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseLeave => "mouseleave",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
        }
    }

    #[inline]
    pub fn is_touch(self) -> bool {
        matches!(
            self,
            EventKind::TouchStart | EventKind::TouchMove | EventKind::TouchEnd
        )
    }

    /// Whether the event carries a pointer position the controller reads.
    #[inline]
    pub fn needs_point(self) -> bool {
        matches!(
            self,
            EventKind::MouseEnter
                | EventKind::MouseMove
                | EventKind::TouchStart
                | EventKind::TouchMove
        )
    }
}

/// Decoded input handed to [`crate::Controller::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Enter(DVec2),
    Move(DVec2),
    Leave,
    Click,
    /// Pointer or touch activity anywhere on the page.
    Activity,
    Key(String),
}

/// A subscription the host must register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub target: Target,
    pub kind: EventKind,
    /// Register as a passive listener (touch handlers never prevent scrolling).
    pub passive: bool,
    pub stop_propagation: bool,
}

impl Binding {
    pub fn new(target: Target, kind: EventKind) -> Self {
        Self {
            target,
            kind,
            passive: matches!(kind, EventKind::TouchStart | EventKind::TouchMove),
            stop_propagation: false,
        }
    }

    pub fn stopping_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    /// Translate a raw event of this binding into controller input.
    ///
    /// `point` is the client position of the mouse or first touch, `key` the
    /// `KeyboardEvent.key` value. Returns `None` when the event lacks the data
    /// the binding needs (a touch start with no touches, say).
    pub fn decode(&self, point: Option<DVec2>, key: Option<&str>) -> Option<Input> {
        if self.target == Target::Document {
            return match self.kind {
                EventKind::MouseMove | EventKind::TouchStart => Some(Input::Activity),
                EventKind::KeyDown => key.map(|k| Input::Key(k.to_string())),
                _ => None,
            };
        }
        match self.kind {
            EventKind::MouseEnter | EventKind::TouchStart => point.map(Input::Enter),
            EventKind::MouseMove | EventKind::TouchMove => point.map(Input::Move),
            EventKind::MouseLeave | EventKind::TouchEnd => Some(Input::Leave),
            EventKind::Click => Some(Input::Click),
            EventKind::KeyDown => None,
        }
    }
}

/// Hover and touch subscriptions for a holo surface.
pub fn surface_bindings(target: Target) -> [Binding; 6] {
    [
        Binding::new(target, EventKind::MouseEnter),
        Binding::new(target, EventKind::MouseMove),
        Binding::new(target, EventKind::MouseLeave),
        Binding::new(target, EventKind::TouchStart),
        Binding::new(target, EventKind::TouchMove),
        Binding::new(target, EventKind::TouchEnd),
    ]
}
