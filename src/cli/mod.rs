//! CLI module for demandas
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{DemandStatus, SprintItemStatus};

/// Demandas - CLI client for the demand tracking service
#[derive(Parser, Debug)]
#[command(name = "demandas")]
#[command(version)]
#[command(about = "CLI client for the demand tracking service - workflow, backlogs, and sprint boards")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the working directory (config discovery)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .demandas/config.json in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List demands with optional filtering
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by lifecycle status (e.g. Aberta, Execucao)
        #[arg(long)]
        status: Option<DemandStatus>,

        /// Free-text search
        #[arg(short, long)]
        query: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show a demand with its status history
    Show {
        /// Demand id
        id: String,

        /// Look the demand up by protocol number instead of id
        #[arg(long)]
        protocol: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a demand's lifecycle status
    SetStatus {
        /// Demand id
        id: String,

        /// Target status
        status: DemandStatus,

        /// Mandatory note explaining the change
        #[arg(short, long)]
        note: String,

        /// Who is responsible for the next action
        #[arg(short, long)]
        responsible: Option<String>,

        /// New estimated delivery date (YYYY-MM-DD), sent as a follow-up update
        #[arg(long)]
        estimated_delivery: Option<String>,

        /// Author recorded in the history entry (defaults to config user)
        #[arg(long)]
        author: Option<String>,
    },

    /// Set, change, or clear a demand's priority (1-5, or "none")
    Priority {
        /// Demand id
        id: String,

        /// Priority value 1-5, or "none" to clear
        value: String,

        /// Confirm replacing or clearing an already-set priority
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage backlogs
    Backlog {
        #[command(subcommand)]
        command: BacklogCommands,
    },

    /// Inspect sprints and move items on the kanban board
    Sprint {
        #[command(subcommand)]
        command: SprintCommands,
    },

    /// Show rework counts derived from a demand's status history
    Regressions {
        /// Demand id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BacklogCommands {
    /// Create a backlog from a selection of demands
    Create {
        /// Backlog name
        name: String,

        /// Demand ids to claim (repeatable)
        #[arg(short, long = "demand", required = true)]
        demands: Vec<String>,
    },

    /// Add demands to an existing backlog
    Add {
        /// Backlog id
        id: String,

        /// Demand ids to claim (repeatable)
        #[arg(short, long = "demand", required = true)]
        demands: Vec<String>,
    },

    /// List backlogs
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show a backlog and its member demands
    Show {
        /// Backlog id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SprintCommands {
    /// List sprints
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a sprint's kanban board
    Show {
        /// Sprint id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a sprint item to another column
    Move {
        /// Sprint id
        sprint_id: String,

        /// Sprint item id
        item_id: String,

        /// Target column: backlog, todo, in-progress, done
        column: SprintItemStatus,
    },

    /// Show a sprint's burndown series
    Burndown {
        /// Sprint id
        id: String,
    },
}
