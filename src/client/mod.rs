//! Remote access layer for the Linear GraphQL API.
//!
//! [`LinearClient`] owns the API credential and every network round trip.
//! Callers go through the [`TicketApi`] trait so the whole layer can be
//! swapped for a mock in tests.

mod wire;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{ApiResult, Error};
use crate::model::ticket::{Status, Ticket, TicketCreate, TicketUpdate};
use crate::model::user::{Team, User};
use wire::{
    CreateData, Envelope, SearchData, TeamStatesData, TeamsData, TicketData, TicketsData,
    UpdateData, UsersData,
};

const ENDPOINT: &str = "https://api.linear.app/graphql";

const TICKET_QUERY: &str = r#"
    query Ticket($id: String!) {
        issue(id: $id) {
            id identifier title description priority url
            state { id name }
            assignee { id name email active }
        }
    }
"#;

const TICKET_SEARCH_QUERY: &str = r#"
    query TicketSearch($query: String!) {
        issueSearch(query: $query, first: 1) {
            nodes {
                id identifier title description priority url
                state { id name }
                assignee { id name email active }
            }
        }
    }
"#;

const TICKETS_QUERY: &str = r#"
    query Tickets($filter: IssueFilter, $first: Int!) {
        issues(filter: $filter, first: $first, orderBy: updatedAt) {
            nodes {
                id identifier title description priority url
                state { id name }
                assignee { id name email active }
            }
        }
    }
"#;

const CREATE_MUTATION: &str = r#"
    mutation CreateTicket($input: IssueCreateInput!) {
        issueCreate(input: $input) {
            success
            issue {
                id identifier title description priority url
                state { id name }
                assignee { id name email active }
            }
        }
    }
"#;

const UPDATE_MUTATION: &str = r#"
    mutation UpdateTicket($id: String!, $input: IssueUpdateInput!) {
        issueUpdate(id: $id, input: $input) {
            success
            issue {
                id identifier title description priority url
                state { id name }
                assignee { id name email active }
            }
        }
    }
"#;

const USERS_QUERY: &str = r#"
    query Users {
        users {
            nodes { id name email active }
        }
    }
"#;

const TEAMS_QUERY: &str = r#"
    query Teams {
        teams {
            nodes { id key name }
        }
    }
"#;

const TEAM_STATES_QUERY: &str = r#"
    query TeamStates($teamId: String!) {
        team(id: $teamId) {
            states {
                nodes { id name }
            }
        }
    }
"#;

/// Ticket operations against the remote tracker.
#[async_trait]
pub trait TicketApi: Send + Sync {
    async fn create_ticket(&self, input: TicketCreate) -> ApiResult<Ticket>;
    /// Looks a ticket up by identifier (e.g. "ENG-123") or internal id.
    async fn ticket(&self, identifier: &str) -> ApiResult<Ticket>;
    async fn update_ticket(&self, identifier: &str, input: TicketUpdate) -> ApiResult<Ticket>;
    async fn assign_ticket(&self, identifier: &str, user_id: &str) -> ApiResult<Ticket>;
    /// Lists a team's tickets, most recently updated first.
    async fn tickets(
        &self,
        team_key: &str,
        status: Option<&str>,
        limit: u32,
    ) -> ApiResult<Vec<Ticket>>;
    async fn users(&self) -> ApiResult<Vec<User>>;
    async fn teams(&self) -> ApiResult<Vec<Team>>;
    async fn workflow_states(&self, team_id: &str) -> ApiResult<Vec<Status>>;
}

/// HTTP client for the Linear GraphQL endpoint. Sole owner of the API key.
pub struct LinearClient {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl LinearClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, ENDPOINT.to_string())
    }

    fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: Client::new(),
        }
    }

    async fn request<T: DeserializeOwned>(&self, document: &str, variables: Value) -> ApiResult<T> {
        let body = json!({ "query": document, "variables": variables });
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<T> = response.json().await?;
        envelope.into_data()
    }
}

/// Builds the `IssueFilter` variables object for a team listing.
///
/// The filter is always passed as GraphQL variables, never spliced into the
/// document text.
fn ticket_filter(team_key: &str, status: Option<&str>) -> Value {
    let mut filter = json!({ "team": { "key": { "eq": team_key } } });
    if let Some(name) = status {
        filter["state"] = json!({ "name": { "eq": name } });
    }
    filter
}

#[async_trait]
impl TicketApi for LinearClient {
    async fn create_ticket(&self, input: TicketCreate) -> ApiResult<Ticket> {
        let data: CreateData = self
            .request(CREATE_MUTATION, json!({ "input": input }))
            .await?;
        data.issue_create.into_ticket("create")
    }

    async fn ticket(&self, identifier: &str) -> ApiResult<Ticket> {
        // Direct lookup handles both internal ids and "ENG-123" identifiers;
        // fall back to search when Linear rejects the argument outright.
        match self
            .request::<TicketData>(TICKET_QUERY, json!({ "id": identifier }))
            .await
        {
            Ok(data) => {
                if let Some(node) = data.issue {
                    return Ok(node.into());
                }
                debug!(identifier, "direct lookup returned no issue, searching");
            }
            Err(err) => {
                debug!(identifier, %err, "direct lookup failed, searching");
            }
        }
        let data: SearchData = self
            .request(TICKET_SEARCH_QUERY, json!({ "query": identifier }))
            .await?;
        data.issue_search
            .nodes
            .into_iter()
            .next()
            .map(Ticket::from)
            .ok_or_else(|| Error::NotFound(identifier.to_string()))
    }

    async fn update_ticket(&self, identifier: &str, input: TicketUpdate) -> ApiResult<Ticket> {
        // The mutation wants the internal id, so resolve the ticket first.
        let current = self.ticket(identifier).await?;
        let data: UpdateData = self
            .request(UPDATE_MUTATION, json!({ "id": current.id, "input": input }))
            .await?;
        data.issue_update.into_ticket("update")
    }

    async fn assign_ticket(&self, identifier: &str, user_id: &str) -> ApiResult<Ticket> {
        let input = TicketUpdate {
            assignee_id: Some(user_id.to_string()),
            ..Default::default()
        };
        self.update_ticket(identifier, input).await
    }

    async fn tickets(
        &self,
        team_key: &str,
        status: Option<&str>,
        limit: u32,
    ) -> ApiResult<Vec<Ticket>> {
        let variables = json!({
            "filter": ticket_filter(team_key, status),
            "first": limit,
        });
        let data: TicketsData = self.request(TICKETS_QUERY, variables).await?;
        Ok(data
            .issues
            .nodes
            .into_iter()
            .take(limit as usize)
            .map(Ticket::from)
            .collect())
    }

    async fn users(&self) -> ApiResult<Vec<User>> {
        let data: UsersData = self.request(USERS_QUERY, json!({})).await?;
        Ok(data.users.nodes)
    }

    async fn teams(&self) -> ApiResult<Vec<Team>> {
        let data: TeamsData = self.request(TEAMS_QUERY, json!({})).await?;
        Ok(data.teams.nodes)
    }

    async fn workflow_states(&self, team_id: &str) -> ApiResult<Vec<Status>> {
        let data: TeamStatesData = self
            .request(TEAM_STATES_QUERY, json!({ "teamId": team_id }))
            .await?;
        Ok(data.team.map(|t| t.states.nodes).unwrap_or_default())
    }
}
