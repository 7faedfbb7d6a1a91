//! Tool that assigns a ticket to a user.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::client::TicketApi;
use crate::error::ApiResult;
use crate::tools::schema::{Field, FieldKind, InputSchema};
use crate::tools::{render, Tool};

pub struct AssignTicket {
    api: Arc<dyn TicketApi>,
}

impl AssignTicket {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: Args) -> ApiResult<String> {
        let ticket = self
            .api
            .assign_ticket(&args.identifier, &args.user_id)
            .await?;
        Ok(render::assigned(&ticket))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Args {
    identifier: String,
    user_id: String,
}

#[async_trait]
impl Tool for AssignTicket {
    fn name(&self) -> &'static str {
        "assign-ticket"
    }

    fn description(&self) -> &'static str {
        "Assign a ticket to a user by id. Use list-users to find the id."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new(vec![
            Field::required(
                "identifier",
                FieldKind::String,
                "Ticket identifier, e.g. ENG-123",
            ),
            Field::required(
                "userId",
                FieldKind::String,
                "Id of the user to assign (from list-users)",
            ),
        ])
    }

    async fn call(&self, args: &Value) -> String {
        let parsed: Args = match serde_json::from_value(args.clone()) {
            Ok(parsed) => parsed,
            Err(err) => return format!("Failed to assign ticket: {err}"),
        };
        self.run(parsed)
            .await
            .unwrap_or_else(|err| format!("Failed to assign ticket: {err}"))
    }
}
