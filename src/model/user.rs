use serde::Deserialize;

/// Workspace member. `active` is informational; inactive users are still
/// accepted as assignees unless the remote refuses them.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub active: bool,
}

/// Resolution intermediate mapping a human team key to the ids the API
/// wants. Never rendered as a result entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: String,
    pub key: String,
    pub name: String,
}
