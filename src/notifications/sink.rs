use std::sync::{Arc, Mutex};

/// Destination for rendered notification lines.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn deliver(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every delivered line so callers can inspect them later.
#[derive(Debug, Default, Clone)]
pub struct InMemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl NotificationSink for InMemorySink {
    fn deliver(&self, line: &str) {
        let mut guard = self.lines.lock().expect("sink mutex poisoned");
        guard.push(line.to_string());
    }
}

impl InMemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink mutex poisoned").clone()
    }
}
