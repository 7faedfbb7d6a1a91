//! Tool that reads a single ticket by identifier.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::client::TicketApi;
use crate::error::ApiResult;
use crate::tools::schema::{Field, FieldKind, InputSchema};
use crate::tools::{render, Tool};

pub struct ReadTicket {
    api: Arc<dyn TicketApi>,
}

impl ReadTicket {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: Args) -> ApiResult<String> {
        let ticket = self.api.ticket(&args.identifier).await?;
        Ok(render::ticket_detail(&ticket))
    }
}

#[derive(Debug, Deserialize)]
struct Args {
    identifier: String,
}

#[async_trait]
impl Tool for ReadTicket {
    fn name(&self) -> &'static str {
        "read-ticket"
    }

    fn description(&self) -> &'static str {
        "Read one ticket by identifier (e.g. ENG-123): status, priority, assignee and description."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new(vec![Field::required(
            "identifier",
            FieldKind::String,
            "Ticket identifier, e.g. ENG-123",
        )])
    }

    async fn call(&self, args: &Value) -> String {
        let parsed: Args = match serde_json::from_value(args.clone()) {
            Ok(parsed) => parsed,
            Err(err) => return format!("Failed to read ticket: {err}"),
        };
        self.run(parsed)
            .await
            .unwrap_or_else(|err| format!("Failed to read ticket: {err}"))
    }
}
