use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

/// What a listener receives when its key fires. Invocation payloads beyond
/// the key are owned by the host layer, not this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub key: String,
}

pub type Listener = Arc<dyn Fn(&Event) + Send + Sync>;

/// Stores server-side listeners under string event keys and invokes them
/// when a client-triggered event is routed back by key.
#[derive(Clone, Default)]
pub struct Dispatcher {
    listeners: HashMap<String, Vec<Listener>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one listener under every given key.
    pub fn add_listener(&mut self, listener: Listener, keys: &[&str]) {
        for key in keys {
            debug!("dispatch: listener registered under {key:?}");
            self.listeners
                .entry((*key).to_string())
                .or_default()
                .push(Arc::clone(&listener));
        }
    }

    /// Invoke every listener registered under `key`. An unknown key is a
    /// normal outcome and invokes nothing. Returns the invocation count.
    pub fn dispatch(&self, key: &str) -> usize {
        let Some(listeners) = self.listeners.get(key) else {
            return 0;
        };
        let event = Event {
            key: key.to_string(),
        };
        for listener in listeners {
            listener(&event);
        }
        listeners.len()
    }

    pub fn listener_count(&self, key: &str) -> usize {
        self.listeners.get(key).map_or(0, Vec::len)
    }

    pub fn has_listeners(&self, key: &str) -> bool {
        self.listener_count(key) > 0
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.listeners.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Dispatcher").field("keys", &keys).finish()
    }
}
