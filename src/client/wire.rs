//! GraphQL envelope and payload shapes for the Linear API.
//!
//! Every ticket-shaped payload funnels through [`IssueNode`]'s `From` impl;
//! that conversion is the only code that has to change if the remote schema
//! changes shape.

use serde::Deserialize;

use crate::error::{ApiResult, Error};
use crate::model::ticket::{priority_label, Status, Ticket};
use crate::model::user::{Team, User};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    message: String,
}

impl<T> Envelope<T> {
    /// Unwraps `data`, turning GraphQL-level errors into [`Error::Remote`].
    pub(crate) fn into_data(self) -> ApiResult<T> {
        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::Remote(joined));
        }
        self.data
            .ok_or_else(|| Error::Remote("response carried no data".into()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub(crate) nodes: Vec<T>,
}

/// Raw issue payload, shared by every document that selects a ticket.
#[derive(Debug, Deserialize)]
pub(crate) struct IssueNode {
    id: String,
    identifier: String,
    title: String,
    description: Option<String>,
    #[serde(default)]
    priority: u8,
    url: String,
    state: Option<Status>,
    assignee: Option<User>,
}

impl From<IssueNode> for Ticket {
    fn from(node: IssueNode) -> Self {
        Ticket {
            priority_label: priority_label(node.priority).to_string(),
            id: node.id,
            identifier: node.identifier,
            title: node.title,
            description: node.description,
            status: node.state,
            priority: node.priority,
            assignee: node.assignee,
            url: node.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TicketData {
    pub(crate) issue: Option<IssueNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    #[serde(rename = "issueSearch")]
    pub(crate) issue_search: Connection<IssueNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TicketsData {
    pub(crate) issues: Connection<IssueNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersData {
    pub(crate) users: Connection<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamsData {
    pub(crate) teams: Connection<Team>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamStatesData {
    pub(crate) team: Option<TeamStatesNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamStatesNode {
    pub(crate) states: Connection<Status>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateData {
    #[serde(rename = "issueCreate")]
    pub(crate) issue_create: MutationPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateData {
    #[serde(rename = "issueUpdate")]
    pub(crate) issue_update: MutationPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MutationPayload {
    pub(crate) success: bool,
    pub(crate) issue: Option<IssueNode>,
}

impl MutationPayload {
    pub(crate) fn into_ticket(self, op: &str) -> ApiResult<Ticket> {
        if !self.success {
            return Err(Error::Remote(format!("{op} was not accepted")));
        }
        self.issue
            .map(Ticket::from)
            .ok_or_else(|| Error::Remote(format!("{op} returned no issue")))
    }
}
