use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::config::Config;
use crate::tools;

/// One-shot command line entry point: run a single tool and print its text.
pub async fn run(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("help") | Some("--help") | Some("-h") => {
            print_help();
            Ok(())
        }
        Some("tools") => {
            let config = Config::load()?;
            let registry = tools::registry(&config);
            println!("{}", serde_json::to_string_pretty(&registry.specs())?);
            Ok(())
        }
        Some(name) => {
            let arguments = parse_tool_args(&args[1..])?;
            let config = Config::load()?;
            let registry = tools::registry(&config);
            let output = registry.invoke(name, &arguments).await;
            println!("{output}");
            Ok(())
        }
    }
}

/// Parse trailing CLI arguments into the tool's JSON arguments object.
///
/// Supported forms:
///   linear-tools list-users
///   linear-tools list-tickets '{"teamKey": "ENG"}'
pub fn parse_tool_args(rest: &[String]) -> Result<Value> {
    match rest {
        [] => Ok(Value::Object(serde_json::Map::new())),
        [raw] => {
            let value: Value =
                serde_json::from_str(raw).with_context(|| "Arguments are not valid JSON")?;
            if !value.is_object() {
                bail!("Arguments must be a JSON object, e.g. '{{\"teamKey\": \"ENG\"}}'");
            }
            Ok(value)
        }
        _ => {
            bail!("Pass tool arguments as a single JSON object\n\nExample:\n  linear-tools list-tickets '{{\"teamKey\": \"ENG\"}}'");
        }
    }
}

pub fn print_help() {
    println!("linear-tools — Linear ticket tools for agent runtimes\n");
    println!("USAGE:");
    println!("  linear-tools <tool> [json-arguments]");
    println!("  linear-tools tools      Print every tool's name and input schema as JSON");
    println!();
    println!("TOOLS:");
    println!("  create-ticket   Create a ticket: title, teamKey, description?, assigneeId?");
    println!("  read-ticket     Read one ticket: identifier");
    println!("  update-ticket   Edit a ticket: identifier, title?, description?, status?, priority?");
    println!("  assign-ticket   Assign a ticket: identifier, userId");
    println!("  list-tickets    List a team's tickets: teamKey, status?, limit?");
    println!("  list-users      List workspace users and their ids");
    println!();
    println!("EXAMPLES:");
    println!("  linear-tools create-ticket '{{\"title\": \"Fix login bug\", \"teamKey\": \"ENG\"}}'");
    println!("  linear-tools list-tickets '{{\"teamKey\": \"ENG\", \"status\": \"In Progress\"}}'");
    println!("  linear-tools read-ticket '{{\"identifier\": \"ENG-123\"}}'");
    println!();
    println!("The API key is read from LINEAR_API_KEY or ~/.linear-tools/config.toml.");
}
