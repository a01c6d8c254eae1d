use gloo::timers::callback::Timeout;
use holo_core::{Scheduler, Task, TimerId, TimerTable};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

type TaskSink = Rc<RefCell<Option<Rc<dyn Fn(Task)>>>>;

/// `setTimeout`-backed scheduler. Fired tasks are delivered to the sink set
/// with [`WebScheduler::connect`].
pub struct WebScheduler {
    timers: Rc<TimerTable<Timeout>>,
    sink: TaskSink,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self {
            timers: Rc::new(TimerTable::new()),
            sink: Rc::new(RefCell::new(None)),
        }
    }

    pub fn connect(&self, handler: impl Fn(Task) + 'static) {
        *self.sink.borrow_mut() = Some(Rc::new(handler));
    }
}

impl Default for WebScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn fire(timers: &Weak<TimerTable<Timeout>>, sink: &TaskSink, id: TimerId, task: Task) {
    // wasm-bindgen defers freeing a closure dropped during its own call
    let fired = timers.upgrade().and_then(|t| t.take(id));
    if fired.is_none() {
        log::debug!("[timers] {:?} fired after its table went away", task);
    }
    // clone out so the handler can schedule without holding the sink
    let handler = sink.borrow().clone();
    match handler {
        Some(h) => h(task),
        None => log::warn!("[timers] {:?} fired with nothing connected", task),
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = self.timers.reserve();
        let timers = Rc::downgrade(&self.timers);
        let sink = self.sink.clone();
        let millis = delay.as_millis().min(u32::MAX as u128) as u32;
        let timeout = Timeout::new(millis, move || fire(&timers, &sink, id, task));
        self.timers.insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        // dropping a gloo Timeout clears it
        drop(self.timers.take(id));
    }
}
