//! Intent dispatch layer: the tool surface a host runtime plugs in.
//!
//! Each tool wraps one tracker operation behind a name, a prose description
//! and a JSON input schema. [`ToolRegistry::invoke`] never returns an error;
//! every outcome, including bad arguments and network failures, is rendered
//! as text the calling agent can act on.

pub mod assign;
pub mod create;
pub mod list;
pub mod read;
pub mod render;
pub mod resolve;
pub mod schema;
pub mod update;
pub mod users;


use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{LinearClient, TicketApi};
use crate::config::Config;
use schema::InputSchema;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> InputSchema;
    /// Runs the tool. Failures come back as readable text, never as `Err`.
    async fn call(&self, args: &Value) -> String;
}

/// Wire-ready description of one tool, as advertised to the host.
#[derive(Debug, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools
            .iter()
            .map(|t| ToolSpec {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema().to_json(),
            })
            .collect()
    }

    /// Validates `args` against the tool's schema, then calls it.
    pub async fn invoke(&self, name: &str, args: &Value) -> String {
        let Some(tool) = self.get(name) else {
            let available = self
                .tools
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ");
            return format!("Unknown tool \"{name}\". Available tools: {available}");
        };
        if let Err(problem) = tool.input_schema().validate(args) {
            return format!("Invalid arguments for {name}: {problem}");
        }
        debug!(tool = name, %args, "invoking tool");
        tool.call(args).await
    }
}

/// Builds the standard registry against the live Linear API.
pub fn registry(config: &Config) -> ToolRegistry {
    let api: Arc<dyn TicketApi> = Arc::new(LinearClient::new(config.api_key.clone()));
    registry_with(api)
}

/// Builds the registry over any [`TicketApi`], which tests use to swap in
/// a mock.
pub fn registry_with(api: Arc<dyn TicketApi>) -> ToolRegistry {
    ToolRegistry {
        tools: vec![
            Box::new(create::CreateTicket::new(api.clone())),
            Box::new(read::ReadTicket::new(api.clone())),
            Box::new(update::UpdateTicket::new(api.clone())),
            Box::new(assign::AssignTicket::new(api.clone())),
            Box::new(list::ListTickets::new(api.clone())),
            Box::new(users::ListUsers::new(api)),
        ],
    }
}
