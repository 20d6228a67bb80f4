//! Backend health status model.

use serde::{Deserialize, Serialize};

/// Reported state of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// Outcome of the one-shot health probe.
///
/// Decoded from `GET /api/health` on success, or synthesized by the controller
/// with [`HealthStatus::unhealthy`] when the probe fails. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,

    /// Failure description when the probe itself failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Service name advertised by the backend, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthStatus {
    /// Builds the unhealthy status shown when the probe could not complete.
    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: HealthState::Unhealthy,
            error: Some(error.into()),
            service: None,
        }
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthState::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload_with_extra_fields() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "service": "weather-api"}"#).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.service.as_deref(), Some("weather-api"));
        assert!(health.error.is_none());
    }

    #[test]
    fn rejects_unknown_status_values() {
        assert!(serde_json::from_str::<HealthStatus>(r#"{"status": "degraded"}"#).is_err());
    }

    #[test]
    fn unhealthy_carries_error_text() {
        let health = HealthStatus::unhealthy("HTTP error! Status: 500");
        assert!(!health.is_healthy());
        assert_eq!(health.error.as_deref(), Some("HTTP error! Status: 500"));
    }
}
