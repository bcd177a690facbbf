use dispatch::{Dispatcher, Listener};

/// Client-side events this core knows how to route back to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Change,
}

impl EventKind {
    /// Suffix of the synthetic event key.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "Click",
            EventKind::Change => "Change",
        }
    }

    /// Presentation classes that make the client emit this event.
    pub fn dispatch_class(self) -> &'static str {
        match self {
            EventKind::Click => "dispatch-event dispatch-event-click",
            EventKind::Change => "dispatch-event dispatch-event-change",
        }
    }
}

/// Derives synthetic event keys and forwards registration to the dispatch
/// subsystem. This core names and routes listeners; it never invokes them.
pub struct EventBinder;

impl EventBinder {
    /// `identifier + event name`, e.g. `"btn1Click"`.
    pub fn synthetic_key(identifier: &str, kind: EventKind) -> String {
        format!("{identifier}{}", kind.name())
    }

    pub fn bind(dispatcher: &mut Dispatcher, identifier: &str, kind: EventKind, listener: Listener) {
        let key = Self::synthetic_key(identifier, kind);
        dispatcher.add_listener(listener, &[key.as_str()]);
    }
}
