// In-memory document and virtual-clock scheduler for host-side tests.
// The web crate is wasm-only, so tests drive holo-core against these.

#![allow(dead_code)]

use fnv::FnvHashMap;
use holo_core::{CardRect, Controller, Document, Scheduler, Settings, Task, TimerId};
use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Default)]
struct MockNode {
    id: Option<String>,
    classes: Vec<String>,
    attrs: FnvHashMap<String, String>,
    styles: FnvHashMap<String, String>,
    rect: CardRect,
    parent: Option<NodeId>,
}

pub struct MockDocument {
    nodes: RefCell<Vec<MockNode>>,
    sheets: RefCell<Vec<String>>,
}

pub const BODY: NodeId = NodeId(0);

impl MockDocument {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![MockNode::default()]),
            sheets: RefCell::new(Vec::new()),
        }
    }

    /// Append a node; insertion order is document order.
    pub fn add(&self, parent: NodeId, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MockNode {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: Some(parent),
            ..MockNode::default()
        });
        NodeId(nodes.len() - 1)
    }

    pub fn set_rect(&self, node: NodeId, rect: CardRect) {
        self.nodes.borrow_mut()[node.0].rect = rect;
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].styles.get(property).cloned()
    }

    pub fn style_sheets(&self) -> Vec<String> {
        self.sheets.borrow().clone()
    }

    fn matches_simple(node: &MockNode, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            return node.id.as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.iter().any(|c| c == class);
        }
        false
    }

    fn matches(nodes: &[MockNode], index: usize, selector: &str) -> bool {
        let mut parts: Vec<&str> = selector.split_whitespace().collect();
        let Some(last) = parts.pop() else {
            return false;
        };
        if !Self::matches_simple(&nodes[index], last) {
            return false;
        }
        // remaining parts must match ancestors, innermost last
        let mut cursor = nodes[index].parent;
        while let Some(wanted) = parts.last() {
            match cursor {
                Some(NodeId(p)) => {
                    if Self::matches_simple(&nodes[p], wanted) {
                        parts.pop();
                    }
                    cursor = nodes[p].parent;
                }
                None => return false,
            }
        }
        true
    }

    fn is_descendant(nodes: &[MockNode], index: usize, scope: NodeId) -> bool {
        let mut cursor = nodes[index].parent;
        while let Some(p) = cursor {
            if p == scope {
                return true;
            }
            cursor = nodes[p.0].parent;
        }
        false
    }
}

impl Document for MockDocument {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .filter(|&i| Self::matches(&nodes, i, selector))
            .map(NodeId)
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query_in(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .find(|&i| Self::is_descendant(&nodes, i, *scope) && Self::matches(&nodes, i, selector))
            .map(NodeId)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[node.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn bounds(&self, node: &NodeId) -> CardRect {
        self.nodes.borrow()[node.0].rect
    }

    fn append_style_sheet(&self, css: &str) {
        self.sheets.borrow_mut().push(css.to_string());
    }
}

/// Virtual clock; tasks only run when a test advances time.
pub struct MockScheduler {
    now: Cell<Duration>,
    next_id: Cell<u32>,
    queue: RefCell<Vec<(Duration, TimerId, Task)>>,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            next_id: Cell::new(1),
            queue: RefCell::new(Vec::new()),
        }
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> Vec<Task> {
        self.queue.borrow().iter().map(|(_, _, t)| *t).collect()
    }

    /// Remove and return the earliest task due by `deadline`, moving the clock to it.
    pub fn pop_due(&self, deadline: Duration) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let (pos, _) = queue
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= deadline)
            .min_by_key(|(_, (due, id, _))| (*due, id.0))?;
        let (due, _, task) = queue.remove(pos);
        self.now.set(due);
        Some(task)
    }

    fn set_now(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Scheduler for MockScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.queue
            .borrow_mut()
            .push((self.now.get() + delay, id, task));
        id
    }

    fn cancel(&self, id: TimerId) {
        self.queue.borrow_mut().retain(|(_, t, _)| *t != id);
    }
}

pub type TestController = Controller<MockDocument, MockScheduler>;

/// Run every task due within `by`, in order, then park the clock at the deadline.
pub fn advance(ctrl: &mut TestController, by: Duration) {
    let deadline = ctrl.scheduler().now() + by;
    while let Some(task) = ctrl.scheduler().pop_due(deadline) {
        ctrl.fire(task);
    }
    ctrl.scheduler().set_now(deadline);
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub const SPREAD_LEN: usize = 10;
pub const CARD_W: f64 = 100.0;
pub const CARD_H: f64 = 160.0;

/// Node ids of the fixture page.
pub struct Page {
    /// `[with data-image, front image only]`
    pub reading: [NodeId; 2],
    /// Spread cards in document order; the first two are the centre cards.
    pub spread: Vec<NodeId>,
    pub modal: NodeId,
    pub overlay: NodeId,
    pub close: NodeId,
    pub modal_card: NodeId,
    pub modal_image: NodeId,
}

fn add_card(doc: &MockDocument, parent: NodeId, classes: &[&str], rect: CardRect, src: &str) -> NodeId {
    let card = doc.add(parent, None, classes);
    doc.set_rect(card, rect);
    let front = doc.add(card, None, &["card__front"]);
    doc.set_attribute(&front, "src", src);
    card
}

/// Reading section, ten-card cross, then the modal.
pub fn tarot_page() -> (MockDocument, Page) {
    let doc = MockDocument::new();

    let reading_section = doc.add(BODY, None, &["reading"]);
    let with_data = add_card(
        &doc,
        reading_section,
        &["card", "card-reading"],
        CardRect::new(0.0, 600.0, CARD_W, CARD_H),
        "cards/reading-front.jpg",
    );
    doc.set_attribute(&with_data, "data-image", "cards/reading-large.jpg");
    let front_only = add_card(
        &doc,
        reading_section,
        &["card", "card-reading"],
        CardRect::new(120.0, 600.0, CARD_W, CARD_H),
        "cards/reading-2.jpg",
    );

    let cross = doc.add(BODY, None, &["celtic-cross"]);
    let spread = (0..SPREAD_LEN)
        .map(|i| {
            let classes: &[&str] = match i {
                0 => &["card", "card-base"],
                1 => &["card", "card-crossing"],
                _ => &["card"],
            };
            add_card(
                &doc,
                cross,
                classes,
                CardRect::new(i as f64 * 120.0, 100.0, CARD_W, CARD_H),
                &format!("cards/spread-{i}.jpg"),
            )
        })
        .collect();

    let modal = doc.add(BODY, Some("card-modal"), &["modal"]);
    let overlay = doc.add(modal, None, &["modal__overlay"]);
    let close = doc.add(modal, None, &["modal__close"]);
    let modal_card = doc.add(modal, Some("modal-card"), &["card", "card-modal"]);
    doc.set_rect(modal_card, CardRect::new(300.0, 50.0, 400.0, 640.0));
    let modal_image = doc.add(modal_card, Some("modal-card-image"), &[]);

    let page = Page {
        reading: [with_data, front_only],
        spread,
        modal,
        overlay,
        close,
        modal_card,
        modal_image,
    };
    (doc, page)
}

pub fn attach(doc: MockDocument) -> TestController {
    Controller::attach(doc, MockScheduler::new(), Settings::default()).expect("fixture page attaches")
}

/// Controller index of a card node.
pub fn card_index(ctrl: &TestController, node: NodeId) -> usize {
    ctrl.cards()
        .iter()
        .position(|c| c.surface.node == node)
        .expect("node is a page card")
}
