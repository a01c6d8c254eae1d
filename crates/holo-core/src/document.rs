//! Capability interfaces the controller runs against.
//!
//! The web frontend implements these over `web-sys`; host tests implement
//! them over an in-memory node tree.

use crate::holo::CardRect;
use std::fmt;
use std::time::Duration;

/// Element query and mutation surface of a DOM-like document.
///
/// All methods take `&self`; implementations are expected to use interior
/// mutability the same way the browser DOM does.
pub trait Document {
    type Node: Clone + PartialEq + fmt::Debug;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// First descendant of `scope` matching `selector`.
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn bounds(&self, node: &Self::Node) -> CardRect;

    /// Append a `<style>` element with `css` to the document head.
    fn append_style_sheet(&self, css: &str);
}

/// Handle of a scheduled task, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

/// Deferred work the controller asks the host to run later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Reveal the spread card at this index.
    Reveal(usize),
    /// First idle activation after start-up.
    InitialIdle,
    /// The inactivity countdown ran out.
    IdleTimeout,
}

/// One-shot timers on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;
    /// Cancelling an unknown or already fired timer is a no-op.
    fn cancel(&self, id: TimerId);
}
