//! Plain-text rendering of tickets and users for tool responses.

use crate::model::ticket::Ticket;
use crate::model::user::User;

pub fn ticket_detail(ticket: &Ticket) -> String {
    let status = ticket
        .status
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("Unknown");
    let assignee = ticket
        .assignee
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("Unassigned");
    let mut out = format!(
        "{}: {}\nStatus: {}\nPriority: {}\nAssignee: {}\nURL: {}",
        ticket.identifier, ticket.title, status, ticket.priority_label, assignee, ticket.url
    );
    if let Some(description) = &ticket.description {
        if !description.is_empty() {
            out.push_str("\n\n");
            out.push_str(description);
        }
    }
    out
}

fn ticket_line(ticket: &Ticket) -> String {
    let status = ticket
        .status
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("Unknown");
    format!("- {} [{}] {}", ticket.identifier, status, ticket.title)
}

pub fn ticket_list(team_key: &str, tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return format!("No tickets found for team {team_key}.");
    }
    let mut out = format!("Tickets for {team_key} ({}):", tickets.len());
    for ticket in tickets {
        out.push('\n');
        out.push_str(&ticket_line(ticket));
    }
    out
}

pub fn user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut out = format!("Users ({}):", users.len());
    for user in users {
        // The id is what assign-ticket wants, so it is always shown.
        out.push_str(&format!("\n- {} <{}> (id: {}", user.name, user.email, user.id));
        if !user.active {
            out.push_str(", deactivated");
        }
        out.push(')');
    }
    out
}

pub fn created(ticket: &Ticket) -> String {
    format!("Created {}: {}\n{}", ticket.identifier, ticket.title, ticket.url)
}

pub fn updated(ticket: &Ticket) -> String {
    format!("Updated {}: {}\n{}", ticket.identifier, ticket.title, ticket.url)
}

pub fn assigned(ticket: &Ticket) -> String {
    let assignee = ticket
        .assignee
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("the requested user");
    format!("Assigned {} to {}\n{}", ticket.identifier, assignee, ticket.url)
}
