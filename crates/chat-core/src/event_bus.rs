//! Queue of controller events, drained by the UI once per frame.
//!
//! Single-threaded (WASM); shared by cloning the `Rc`. The queue is bounded:
//! a backgrounded tab stops repainting, and the controller must not grow
//! memory without limit while nobody drains.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::event::ChatEvent;

pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
    capacity: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Queue an event, evicting the oldest one when full.
    pub fn emit(&self, event: ChatEvent) {
        let mut queue = self.queue.borrow_mut();
        if queue.len() >= self.capacity {
            queue.pop_front();
            log::debug!("Event queue full, dropped oldest event");
        }
        queue.push_back(event);
    }

    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
