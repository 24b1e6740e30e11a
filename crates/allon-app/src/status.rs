//! Transient status banner

use std::time::{Duration, Instant};

/// Banner severity, which also decides whether it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Stays until replaced
    Loading,
    Success,
    Error,
}

impl StatusKind {
    pub fn expires(&self) -> bool {
        !matches!(self, StatusKind::Loading)
    }
}

/// A single status line shown under the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

impl StatusBanner {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Loading, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, message)
    }

    /// Whether the banner should be hidden at `now`
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        self.kind.expires() && now.saturating_duration_since(self.shown_at) >= timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_expires_after_timeout() {
        let banner = StatusBanner::success("5 projects loaded");
        let timeout = Duration::from_millis(3000);

        assert!(!banner.is_expired(banner.shown_at, timeout));
        assert!(!banner.is_expired(banner.shown_at + Duration::from_millis(2999), timeout));
        assert!(banner.is_expired(banner.shown_at + timeout, timeout));
    }

    #[test]
    fn test_loading_never_expires() {
        let banner = StatusBanner::loading("Loading projects...");
        let later = banner.shown_at + Duration::from_secs(3600);
        assert!(!banner.is_expired(later, Duration::from_millis(3000)));
    }
}
