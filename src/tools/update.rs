//! Tool that edits a ticket's fields.
//!
//! Status is resolved best-effort: when the requested status name does not
//! match any workflow state of the ticket's team, the other fields are still
//! applied and the response carries a note enumerating the valid statuses.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::client::TicketApi;
use crate::error::{ApiResult, Error};
use crate::model::ticket::TicketUpdate;
use crate::tools::schema::{Field, FieldKind, InputSchema};
use crate::tools::{render, resolve, Tool};

pub struct UpdateTicket {
    api: Arc<dyn TicketApi>,
}

impl UpdateTicket {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: Args) -> ApiResult<String> {
        let mut input = TicketUpdate {
            title: args.title,
            description: args.description,
            priority: args.priority,
            ..Default::default()
        };
        let mut note = None;
        if let Some(status) = &args.status {
            match resolve::state_for_ticket(self.api.as_ref(), &args.identifier, status).await {
                Ok(state) => input.state_id = Some(state.id),
                Err(err @ Error::UnknownStatus { .. }) => note = Some(err.to_string()),
                Err(err) => {
                    warn!(identifier = %args.identifier, %err, "skipping status change");
                }
            }
        }
        if input.is_empty() {
            if let Some(note) = &note {
                // Status was the only requested change and it did not
                // resolve, so there is nothing to send.
                return Ok(format!("Failed to update ticket: {note}"));
            }
            // Nothing left to send; render the confirmation from the
            // current ticket rather than issuing an empty mutation.
            let ticket = self.api.ticket(&args.identifier).await?;
            return Ok(render::updated(&ticket));
        }
        let ticket = self.api.update_ticket(&args.identifier, input).await?;
        let mut out = render::updated(&ticket);
        if let Some(note) = note {
            out.push_str(&format!("\nNote: {note}"));
        }
        Ok(out)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Args {
    identifier: String,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<u8>,
}

#[async_trait]
impl Tool for UpdateTicket {
    fn name(&self) -> &'static str {
        "update-ticket"
    }

    fn description(&self) -> &'static str {
        "Update a ticket's title, description, status or priority. Omitted fields are left unchanged."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new(vec![
            Field::required(
                "identifier",
                FieldKind::String,
                "Ticket identifier, e.g. ENG-123",
            ),
            Field::optional("title", FieldKind::String, "New title"),
            Field::optional("description", FieldKind::String, "New body in markdown"),
            Field::optional(
                "status",
                FieldKind::String,
                "New status by name, e.g. In Progress",
            ),
            Field::optional(
                "priority",
                FieldKind::Integer { min: 0, max: 4 },
                "New priority: 0 none, 1 urgent, 2 high, 3 medium, 4 low",
            ),
        ])
    }

    async fn call(&self, args: &Value) -> String {
        let parsed: Args = match serde_json::from_value(args.clone()) {
            Ok(parsed) => parsed,
            Err(err) => return format!("Failed to update ticket: {err}"),
        };
        self.run(parsed)
            .await
            .unwrap_or_else(|err| format!("Failed to update ticket: {err}"))
    }
}
