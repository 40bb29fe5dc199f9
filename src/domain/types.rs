//! # Domain Types
//!
//! Application records as the CRM service returns them, the status
//! enumeration, operator actions, and the inbound event model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A customer application as served by the CRM. The bot only ever holds a
/// transient view of one; the remote service owns the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub contact_method: Option<String>,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub lot: Lot,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Lot {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub price: Option<serde_json::Number>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Application status, as enumerated by the CRM service.
/// The bot writes `IN_PROGRESS` and the three terminal states only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    New,
    InProgress,
    Approved,
    Rejected,
    NeedInfo,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::NeedInfo => "NEED_INFO",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator decision carried by an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Approve,
    Reject,
    NeedInfo,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::NeedInfo => "needinfo",
        }
    }

    /// Terminal status this action resolves an application to.
    pub fn target_status(&self) -> ApplicationStatus {
        match self {
            Self::Approve => ApplicationStatus::Approved,
            Self::Reject => ApplicationStatus::Rejected,
            Self::NeedInfo => ApplicationStatus::NeedInfo,
        }
    }

    /// Encode this action against an application id as a callback token.
    pub fn token(&self, app_id: &str) -> String {
        format!("{}:{}", self.as_str(), app_id)
    }

    /// Decode a callback token back into an action and an application id.
    pub fn parse_token(token: &str) -> Result<(Action, String), ActionParseError> {
        let malformed = || ActionParseError {
            token: token.to_string(),
        };
        let (action, app_id) = token.split_once(':').ok_or_else(malformed)?;
        if app_id.is_empty() {
            return Err(malformed());
        }
        let action = match action {
            "approve" => Action::Approve,
            "reject" => Action::Reject,
            "needinfo" => Action::NeedInfo,
            _ => return Err(malformed()),
        };
        Ok((action, app_id.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed action token: {token:?}")]
pub struct ActionParseError {
    pub token: String,
}

/// One selectable control attached to a presented application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub token: String,
}

/// Failure of a single CRM call. One attempt only; there are no retries.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("remote service returned {status}: {body}")]
    Remote { status: u16, body: String },
}

/// An inbound chat event after the transport-specific envelope is stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `/start` command: greet the operator.
    Start { chat_id: i64 },
    /// `/next` command: claim the next pending application.
    Next { chat_id: i64 },
    /// A button press on a presented application.
    Action(CallbackEvent),
}

/// A button press, with enough context to edit the original presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackEvent {
    pub callback_id: String,
    pub chat_id: i64,
    pub message_id: i64,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_token_round_trip() {
        for action in [Action::Approve, Action::Reject, Action::NeedInfo] {
            let token = action.token("42");
            assert_eq!(Action::parse_token(&token), Ok((action, "42".to_string())));
        }
    }

    #[test]
    fn parse_token_rejects_malformed_input() {
        assert!(Action::parse_token("").is_err());
        assert!(Action::parse_token("approve").is_err());
        assert!(Action::parse_token("approve:").is_err());
        assert!(Action::parse_token("frobnicate:42").is_err());
    }

    #[test]
    fn target_status_maps_to_terminal_states() {
        assert_eq!(Action::Approve.target_status(), ApplicationStatus::Approved);
        assert_eq!(Action::Reject.target_status(), ApplicationStatus::Rejected);
        assert_eq!(Action::NeedInfo.target_status(), ApplicationStatus::NeedInfo);
    }

    #[test]
    fn status_wire_format_is_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<ApplicationStatus>("\"NEED_INFO\"").unwrap(),
            ApplicationStatus::NeedInfo
        );
        assert_eq!(ApplicationStatus::Approved.to_string(), "APPROVED");
    }

    #[test]
    fn application_deserializes_from_crm_json() {
        let app: Application = serde_json::from_value(serde_json::json!({
            "id": "42",
            "status": "NEW",
            "customer": {"name": "A", "phone": "+1"},
            "lot": {"title": "L1", "city": "C", "block": "B", "price": 100, "tags": []}
        }))
        .unwrap();

        assert_eq!(app.id, "42");
        assert_eq!(app.status, ApplicationStatus::New);
        assert_eq!(app.customer.name.as_deref(), Some("A"));
        assert_eq!(app.lot.price.as_ref().map(|p| p.to_string()), Some("100".to_string()));
        assert!(app.lot.tags.is_empty());
        assert_eq!(app.comment, None);
    }

    #[test]
    fn application_tolerates_missing_nested_records() {
        let app: Application = serde_json::from_value(serde_json::json!({"id": "7"})).unwrap();
        assert_eq!(app.status, ApplicationStatus::New);
        assert_eq!(app.customer, Customer::default());
        assert_eq!(app.lot, Lot::default());
    }
}
