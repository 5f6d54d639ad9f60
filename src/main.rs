//! Demandas CLI - Demand lifecycle, backlogs, and sprint boards from the terminal

use clap::Parser;
use demandas::cli::{BacklogCommands, Cli, Commands, SprintCommands};
use demandas::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; --verbose overrides the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> demandas::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => demandas::cli::commands::init::run(cwd, force).await,
        Some(Commands::List {
            json,
            status,
            query,
            page,
        }) => demandas::cli::commands::list::run(cwd, json, status, query, page).await,
        Some(Commands::Show { id, protocol, json }) => {
            demandas::cli::commands::show::run(cwd, &id, protocol, json).await
        }
        Some(Commands::SetStatus {
            id,
            status,
            note,
            responsible,
            estimated_delivery,
            author,
        }) => {
            demandas::cli::commands::set_status::run(
                cwd,
                &id,
                status,
                &note,
                responsible,
                estimated_delivery,
                author,
            )
            .await
        }
        Some(Commands::Priority { id, value, yes }) => {
            demandas::cli::commands::priority::run(cwd, &id, &value, yes).await
        }
        Some(Commands::Backlog { command }) => match command {
            BacklogCommands::Create { name, demands } => {
                demandas::cli::commands::backlog::create(cwd, &name, &demands).await
            }
            BacklogCommands::Add { id, demands } => {
                demandas::cli::commands::backlog::add(cwd, &id, &demands).await
            }
            BacklogCommands::List { json, page } => {
                demandas::cli::commands::backlog::list(cwd, json, page).await
            }
            BacklogCommands::Show { id, json } => {
                demandas::cli::commands::backlog::show(cwd, &id, json).await
            }
        },
        Some(Commands::Sprint { command }) => match command {
            SprintCommands::List { json } => demandas::cli::commands::sprint::list(cwd, json).await,
            SprintCommands::Show { id, json } => {
                demandas::cli::commands::sprint::show(cwd, &id, json).await
            }
            SprintCommands::Move {
                sprint_id,
                item_id,
                column,
            } => demandas::cli::commands::sprint::move_item(cwd, &sprint_id, &item_id, column).await,
            SprintCommands::Burndown { id } => {
                demandas::cli::commands::sprint::burndown(cwd, &id).await
            }
        },
        Some(Commands::Regressions { id, json }) => {
            demandas::cli::commands::regressions::run(cwd, &id, json).await
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
