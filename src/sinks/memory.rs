//! In-memory sink capturing events for inspection in tests

use crate::core::{event::Event, Result};
use crate::sinks::Sink;
use parking_lot::Mutex;

/// Captures emitted events instead of writing them anywhere.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured events in emission order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, event: &Event) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Payload;
    use crate::core::severity::Severity;
    use serde_json::Map;

    #[test]
    fn test_capture_order() {
        let sink = MemorySink::new();
        for msg in ["first", "second", "third"] {
            sink.emit(&Event::new(Severity::Info, msg, Payload::Fields(Map::new())))
                .unwrap();
        }
        assert_eq!(sink.messages(), vec!["first", "second", "third"]);

        sink.clear();
        assert!(sink.is_empty());
    }
}
