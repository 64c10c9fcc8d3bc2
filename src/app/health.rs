// VCScout - app/health.rs
//
// One-shot backend health check run at startup on a background thread.
// The result only feeds the status bar; nothing is gated on it.

use crate::core::model::BackendHealth;
use crate::platform::api::HttpBackend;
use crate::util::error::HealthError;
use std::sync::mpsc::{self, TryRecvError};

type CheckResult = Result<BackendHealth, HealthError>;

pub struct HealthCheck {
    rx: Option<mpsc::Receiver<CheckResult>>,
}

impl HealthCheck {
    /// Start probing `backend` immediately.
    pub fn spawn(backend: HttpBackend) -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(backend.health());
        });
        Self::from_receiver(rx)
    }

    fn from_receiver(rx: mpsc::Receiver<CheckResult>) -> Self {
        Self { rx: Some(rx) }
    }

    /// Status-bar text once the check has finished. Returns `Some` exactly once.
    ///
    /// A check thread that exits without reporting counts as unreachable.
    pub fn poll(&mut self) -> Option<String> {
        let result = match self.rx.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(HealthError::NoReport),
        };
        self.rx = None;
        Some(status_text(&result))
    }
}

/// Render a check result for the status bar.
pub fn status_text(result: &CheckResult) -> String {
    match result {
        Ok(h) if h.is_healthy() => format!("Backend: healthy ({} firms indexed)", h.vc_count),
        Ok(h) => {
            tracing::warn!(status = %h.status, "Backend reported an unhealthy status");
            format!("Backend: {}", h.status)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Backend health check failed");
            "Backend unreachable".to_string()
        }
    }
}
