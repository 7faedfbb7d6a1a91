//! Tool that lists the workspace's users.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::TicketApi;
use crate::error::ApiResult;
use crate::tools::schema::InputSchema;
use crate::tools::{render, Tool};

pub struct ListUsers {
    api: Arc<dyn TicketApi>,
}

impl ListUsers {
    pub fn new(api: Arc<dyn TicketApi>) -> Self {
        Self { api }
    }

    async fn run(&self) -> ApiResult<String> {
        let users = self.api.users().await?;
        Ok(render::user_list(&users))
    }
}

#[async_trait]
impl Tool for ListUsers {
    fn name(&self) -> &'static str {
        "list-users"
    }

    fn description(&self) -> &'static str {
        "List the workspace's users with their ids, for assigning tickets."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new(vec![])
    }

    async fn call(&self, _args: &Value) -> String {
        self.run()
            .await
            .unwrap_or_else(|err| format!("Failed to list users: {err}"))
    }
}
