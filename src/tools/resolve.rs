//! Name-to-id resolution against the remote workspace.
//!
//! Tools accept human-friendly names (team keys, status names) and resolve
//! them here. Misses come back as errors that enumerate what the workspace
//! actually offers, so a caller can self-correct on the next attempt.

use crate::client::TicketApi;
use crate::error::{ApiResult, Error};
use crate::model::ticket::Status;
use crate::model::user::Team;

/// Resolves a team key such as "ENG" to the full team, case-insensitively.
pub async fn team_by_key(api: &dyn TicketApi, key: &str) -> ApiResult<Team> {
    let teams = api.teams().await?;
    let known: Vec<String> = teams.iter().map(|t| t.key.clone()).collect();
    teams
        .into_iter()
        .find(|t| t.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| Error::UnknownTeam {
            key: key.to_string(),
            known,
        })
}

/// Resolves a status name to a workflow state of the ticket's team.
///
/// The team is inferred from the identifier prefix ("ENG-123" belongs to
/// "ENG"), which is how the tracker scopes workflow states.
pub async fn state_for_ticket(
    api: &dyn TicketApi,
    identifier: &str,
    status: &str,
) -> ApiResult<Status> {
    let team_key = identifier.split('-').next().unwrap_or(identifier);
    let team = team_by_key(api, team_key).await?;
    let states = api.workflow_states(&team.id).await?;
    let known: Vec<String> = states.iter().map(|s| s.name.clone()).collect();
    states
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(status))
        .ok_or_else(|| Error::UnknownStatus {
            name: status.to_string(),
            team: team.key,
            known,
        })
}
