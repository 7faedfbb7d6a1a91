//! Tool that lists a team's tickets, optionally filtered by status.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::client::TicketApi;
use crate::error::ApiResult;
use crate::tools::schema::{Field, FieldKind, InputSchema};
use crate::tools::{render, resolve, Tool};

const DEFAULT_LIMIT: u32 = 50;

pub struct ListTickets {
    api: Arc<dyn TicketApi>,
}

impl ListTickets {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: Args) -> ApiResult<String> {
        // Resolving first both validates the key and recovers its canonical
        // casing, which the remote filter matches exactly.
        let team = resolve::team_by_key(self.api.as_ref(), &args.team_key).await?;
        let limit = args.limit.unwrap_or(DEFAULT_LIMIT);
        let tickets = self
            .api
            .tickets(&team.key, args.status.as_deref(), limit)
            .await?;
        Ok(render::ticket_list(&team.key, &tickets))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Args {
    team_key: String,
    status: Option<String>,
    limit: Option<u32>,
}

#[async_trait]
impl Tool for ListTickets {
    fn name(&self) -> &'static str {
        "list-tickets"
    }

    fn description(&self) -> &'static str {
        "List a team's tickets, most recently updated first. Optionally filter by status name."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new(vec![
            Field::required("teamKey", FieldKind::String, "Team key, e.g. ENG"),
            Field::optional(
                "status",
                FieldKind::String,
                "Only tickets in this status, e.g. In Progress",
            ),
            Field::optional(
                "limit",
                FieldKind::Integer { min: 1, max: 100 },
                "Maximum number of tickets (default 50)",
            ),
        ])
    }

    async fn call(&self, args: &Value) -> String {
        let parsed: Args = match serde_json::from_value(args.clone()) {
            Ok(parsed) => parsed,
            Err(err) => return format!("Failed to list tickets: {err}"),
        };
        self.run(parsed)
            .await
            .unwrap_or_else(|err| format!("Failed to list tickets: {err}"))
    }
}
