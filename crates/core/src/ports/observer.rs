use crate::domain::Event;
use std::cell::RefCell;
use std::rc::Rc;

/// Subscriber for session state changes.
///
/// The session calls `notify` once per event, in emission order, after the
/// change has been applied.
pub trait SessionObserver {
    fn notify(&mut self, event: &Event);
}

impl<F> SessionObserver for F
where
    F: FnMut(&Event),
{
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}

/// Observer that keeps every event it sees.
///
/// Clones share the same buffer, so one clone can be handed to the session
/// while another is kept to read the events back.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl SessionObserver for EventRecorder {
    fn notify(&mut self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
