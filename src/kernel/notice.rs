use std::collections::VecDeque;

use crate::kernel::services::ports::{CollabError, FailureKind};

const MAX_QUEUED: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

impl NoticeSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A user-facing message (toast) produced by the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
    pub failure: Option<FailureKind>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message: message.into(),
            failure: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            message: message.into(),
            failure: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
            failure: None,
        }
    }

    pub fn from_failure(context: &str, error: &CollabError) -> Self {
        let severity = match error.kind() {
            FailureKind::Validation | FailureKind::Conflict => NoticeSeverity::Warning,
            FailureKind::NotFound | FailureKind::Transport => NoticeSeverity::Error,
        };
        Self {
            severity,
            message: format!("{context}: {error}"),
            failure: Some(error.kind()),
        }
    }
}

/// Bounded queue drained by the host; the oldest notice is dropped on overflow.
#[derive(Debug, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
    pushed: u64,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        match notice.severity {
            NoticeSeverity::Error => tracing::warn!(message = %notice.message, "notice"),
            _ => tracing::debug!(message = %notice.message, "notice"),
        }
        if self.queue.len() == MAX_QUEUED {
            self.queue.pop_front();
        }
        self.queue.push_back(notice);
        self.pushed += 1;
    }

    /// Number of notices ever pushed, including dropped and drained ones.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notice.rs"]
mod tests;
