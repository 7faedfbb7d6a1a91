//! Tool that files a new ticket on a team.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::client::TicketApi;
use crate::error::ApiResult;
use crate::model::ticket::TicketCreate;
use crate::tools::schema::{Field, FieldKind, InputSchema};
use crate::tools::{render, resolve, Tool};

pub struct CreateTicket {
    api: Arc<dyn TicketApi>,
}

impl CreateTicket {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: Args) -> ApiResult<String> {
        let team = resolve::team_by_key(self.api.as_ref(), &args.team_key).await?;
        let input = TicketCreate {
            team_id: team.id,
            title: args.title,
            description: args.description,
            assignee_id: args.assignee_id,
        };
        let ticket = self.api.create_ticket(input).await?;
        Ok(render::created(&ticket))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Args {
    title: String,
    team_key: String,
    description: Option<String>,
    assignee_id: Option<String>,
}

#[async_trait]
impl Tool for CreateTicket {
    fn name(&self) -> &'static str {
        "create-ticket"
    }

    fn description(&self) -> &'static str {
        "Create a new ticket on a team. Returns the new ticket's identifier and URL."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new(vec![
            Field::required("title", FieldKind::String, "Ticket title"),
            Field::required("teamKey", FieldKind::String, "Team key, e.g. ENG"),
            Field::optional("description", FieldKind::String, "Ticket body in markdown"),
            Field::optional(
                "assigneeId",
                FieldKind::String,
                "User id to assign the ticket to (from list-users)",
            ),
        ])
    }

    async fn call(&self, args: &Value) -> String {
        let parsed: Args = match serde_json::from_value(args.clone()) {
            Ok(parsed) => parsed,
            Err(err) => return format!("Failed to create ticket: {err}"),
        };
        self.run(parsed)
            .await
            .unwrap_or_else(|err| format!("Failed to create ticket: {err}"))
    }
}
