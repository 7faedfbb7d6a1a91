//! Ticket domain types, independent of the wire format.

use serde::{Deserialize, Serialize};

/// A normalized ticket as tools see it.
#[derive(Debug, Clone)]
pub struct Ticket {
    /// Internal id, required by mutations.
    pub id: String,
    /// Human-facing identifier such as "ENG-123".
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: u8,
    pub priority_label: String,
    pub assignee: Option<super::user::User>,
    pub url: String,
}

/// A workflow state, either embedded in a ticket or listed for a team.
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
}

/// Maps Linear's numeric priority to its display label.
pub fn priority_label(priority: u8) -> &'static str {
    match priority {
        1 => "Urgent",
        2 => "High",
        3 => "Medium",
        4 => "Low",
        _ => "No priority",
    }
}

/// Fields for creating a ticket. Serializes to Linear's `IssueCreateInput`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreate {
    pub team_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Fields for updating a ticket. `None` fields are omitted from the wire
/// payload, which leaves them unchanged remotely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.state_id.is_none()
            && self.priority.is_none()
            && self.assignee_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels_cover_the_scale() {
        assert_eq!(priority_label(0), "No priority");
        assert_eq!(priority_label(1), "Urgent");
        assert_eq!(priority_label(2), "High");
        assert_eq!(priority_label(3), "Medium");
        assert_eq!(priority_label(4), "Low");
        assert_eq!(priority_label(9), "No priority");
    }

    #[test]
    fn update_omits_unset_fields() {
        let input = TicketUpdate {
            priority: Some(2),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({ "priority": 2 }));
    }

    #[test]
    fn update_field_names_are_camel_case() {
        let input = TicketUpdate {
            state_id: Some("state-1".into()),
            assignee_id: Some("user-1".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("stateId").is_some());
        assert!(json.get("assigneeId").is_some());
        assert!(json.get("state_id").is_none());
    }

    #[test]
    fn create_omits_unset_fields() {
        let input = TicketCreate {
            team_id: "team-1".into(),
            title: "New ticket".into(),
            description: None,
            assignee_id: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "teamId": "team-1", "title": "New ticket" })
        );
    }

    #[test]
    fn empty_update_knows_it_is_empty() {
        assert!(TicketUpdate::default().is_empty());
        let input = TicketUpdate {
            title: Some("t".into()),
            ..Default::default()
        };
        assert!(!input.is_empty());
    }
}
