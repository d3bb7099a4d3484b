//! Diagnostics channel: куда контроллер сообщает о recoverable проблемах
//!
//! Контроллер получает `&dyn DiagnosticsSink` при создании, а не дёргает
//! глобальный logger напрямую — тесты подставляют RecordingSink.

use std::sync::{Arc, Mutex, PoisonError};

use super::log_warning;

/// Приёмник developer-facing warning'ов (fire-and-forget, никогда не паникует)
pub trait DiagnosticsSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Production sink: пишет в глобальный logger с уровнем Warning
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerSink;

impl DiagnosticsSink for LoggerSink {
    fn warn(&self, message: &str) {
        log_warning(message);
    }
}

/// Test sink: копит сообщения, клоны делят один буфер
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl DiagnosticsSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
