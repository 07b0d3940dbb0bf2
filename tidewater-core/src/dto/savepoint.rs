//! Savepoint DTOs

use serde::{Deserialize, Serialize};

use crate::domain::savepoint::SavepointCreationStatus;

/// Body of `POST /jobs/{id}/savepoints`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TriggerSavepointRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_directory: Option<String>,
    pub cancel_job: bool,
}

/// Response of `POST /jobs/{id}/savepoints`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSavepointResponse {
    #[serde(rename = "request-id")]
    pub request_id: String,
}

/// Response of `GET /jobs/{id}/savepoints/{request_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSavepointCreationResponse {
    pub status: QueueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<SavepointOperation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStatus {
    pub id: SavepointCreationStatus,
}

/// Outcome of a finished savepoint operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SavepointOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_cause: Option<FailureCause>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FailureCause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl MonitorSavepointCreationResponse {
    /// Effective state of the request
    ///
    /// The cluster reports a failed savepoint as `COMPLETED` with a failure
    /// cause attached, so that combination maps to `Failed`.
    pub fn state(&self) -> SavepointCreationStatus {
        match self.status.id {
            SavepointCreationStatus::Completed if self.failure_cause().is_some() => {
                SavepointCreationStatus::Failed
            }
            other => other,
        }
    }

    /// Short description of why the savepoint failed, if it did
    pub fn failure_cause(&self) -> Option<String> {
        let cause = self.operation.as_ref()?.failure_cause.as_ref()?;
        let summary = cause
            .stack_trace
            .as_deref()
            .and_then(|trace| trace.lines().next())
            .map(str::to_string)
            .or_else(|| cause.class.clone())
            .unwrap_or_else(|| "unknown cause".to_string());
        Some(summary)
    }

    /// Location the savepoint was written to
    pub fn location(&self) -> Option<&str> {
        self.operation.as_ref()?.location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress() {
        let resp: MonitorSavepointCreationResponse =
            serde_json::from_str(r#"{"status":{"id":"IN_PROGRESS"}}"#).unwrap();
        assert_eq!(resp.state(), SavepointCreationStatus::InProgress);
        assert_eq!(resp.location(), None);
    }

    #[test]
    fn test_completed_with_location() {
        let resp: MonitorSavepointCreationResponse = serde_json::from_str(
            r#"{"status":{"id":"COMPLETED"},"operation":{"location":"file:/data/savepoint-1a2b"}}"#,
        )
        .unwrap();
        assert_eq!(resp.state(), SavepointCreationStatus::Completed);
        assert_eq!(resp.location(), Some("file:/data/savepoint-1a2b"));
    }

    #[test]
    fn test_completed_with_failure_cause_is_failed() {
        let resp: MonitorSavepointCreationResponse = serde_json::from_str(
            r#"{"status":{"id":"COMPLETED"},"operation":{"failure-cause":{"class":"java.lang.Exception","stack-trace":"java.lang.Exception: checkpoint declined\n\tat foo"}}}"#,
        )
        .unwrap();
        assert_eq!(resp.state(), SavepointCreationStatus::Failed);
        assert_eq!(
            resp.failure_cause().as_deref(),
            Some("java.lang.Exception: checkpoint declined")
        );
    }

    #[test]
    fn test_trigger_request_wire_format() {
        let req = TriggerSavepointRequest {
            target_directory: Some("/data/savepoints".to_string()),
            cancel_job: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["target-directory"], "/data/savepoints");
        assert_eq!(json["cancel-job"], false);
    }
}
