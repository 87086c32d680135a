//! Stint CLI - a task list that tracks how long each task took.

use clap::Parser;
use std::process;
use std::time::Instant;
use stint::action_log;
use stint::cli::{Cli, Commands};
use stint::commands::{self, Output};
use stint::models::{Filter, parse_filter};
use stint::storage::Storage;

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    let storage = match Storage::open(cli.data_dir.as_deref()) {
        Ok(storage) => storage,
        Err(e) => {
            print_error(&e, human);
            process::exit(1);
        }
    };

    // Serialize command for logging
    let (cmd_name, args_json) = serialize_command(&cli.command);

    // Start timing
    let start = Instant::now();

    // Execute command
    let result = run_command(cli.command, &storage, human);

    // Calculate duration
    let duration = start.elapsed().as_millis() as u64;

    // Determine success/error
    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };

    // Log the action (silently fails if logging encounters errors)
    let _ = action_log::log_action(&storage, &cmd_name, args_json, success, error, duration);

    // Handle result
    if let Err(e) = result {
        print_error(&e, human);
        process::exit(1);
    }
}

fn run_command(
    command: Option<Commands>,
    storage: &Storage,
    human: bool,
) -> Result<(), stint::Error> {
    match command {
        Some(Commands::Add { text }) => {
            let result = commands::add(storage, &text)?;
            output(&result, human);
        }

        Some(Commands::List { filter }) => {
            let filter = parse_filter(&filter)?;
            let result = commands::list(storage, filter)?;
            output(&result, human);
        }

        Some(Commands::Toggle { id }) => {
            let result = commands::toggle(storage, &id)?;
            output(&result, human);
        }

        Some(Commands::Edit { id, text }) => {
            let result = commands::edit(storage, &id, &text)?;
            output(&result, human);
        }

        Some(Commands::Rm { id }) => {
            let result = commands::remove(storage, &id)?;
            output(&result, human);
        }

        Some(Commands::Clear) => {
            let result = commands::clear(storage)?;
            output(&result, human);
        }

        Some(Commands::Stats) => {
            let result = commands::stats(storage)?;
            output(&result, human);
        }

        Some(Commands::Log { limit }) => {
            let result = commands::log(storage, limit)?;
            output(&result, human);
        }

        None => {
            // Default: show the full list
            let result = commands::list(storage, Filter::All)?;
            output(&result, human);
        }
    }

    Ok(())
}

fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

fn print_error(e: &stint::Error, human: bool) {
    if human {
        eprintln!("Error: {}", e);
    } else {
        eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
    }
}

fn serialize_command(command: &Option<Commands>) -> (String, serde_json::Value) {
    match command {
        Some(Commands::Add { text }) => ("add".to_string(), serde_json::json!({ "text": text })),

        Some(Commands::List { filter }) => (
            "list".to_string(),
            serde_json::json!({ "filter": filter }),
        ),

        Some(Commands::Toggle { id }) => ("toggle".to_string(), serde_json::json!({ "id": id })),

        Some(Commands::Edit { id, text }) => (
            "edit".to_string(),
            serde_json::json!({ "id": id, "text": text }),
        ),

        Some(Commands::Rm { id }) => ("rm".to_string(), serde_json::json!({ "id": id })),

        Some(Commands::Clear) => ("clear".to_string(), serde_json::json!({})),

        Some(Commands::Stats) => ("stats".to_string(), serde_json::json!({})),

        Some(Commands::Log { limit }) => ("log".to_string(), serde_json::json!({ "limit": limit })),

        None => ("list".to_string(), serde_json::json!({})),
    }
}
