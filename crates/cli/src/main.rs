//! CAPRA CLI - console front-end for the tab screens and the admin panel.
//!
//! # Usage
//!
//! ```bash
//! # Adoptable pets, optionally narrowed to one species tab
//! capra pets list --species dog
//!
//! # Register a pet through the admin panel
//! capra pets create -n Rex -b Labrador -a "2 anos" --species dog
//!
//! # Admin request workflow
//! capra requests list --status pending
//! capra requests set-status 1 approved
//!
//! # Month-grouped adoption history
//! capra history
//! ```
//!
//! # Commands
//!
//! - `pets` - List, register and remove pets
//! - `users` - List, create and remove users
//! - `requests` - List, inspect and update adoption requests
//! - `history` - Terminal-state requests grouped by month
//! - `donations` - Donation catalog and PIX key
//! - `login` - Simulated login

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use capra_core::{PetSpecies, RequestStatus, SpeciesFilter, StatusFilter};
use capra_store::CapraConfig;

mod commands;

#[derive(Parser)]
#[command(name = "capra")]
#[command(author, version, about = "CAPRA adoption platform tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage pets
    Pets {
        #[command(subcommand)]
        action: PetAction,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage adoption requests
    Requests {
        #[command(subcommand)]
        action: RequestAction,
    },
    /// Show the adoption history timeline
    History {
        /// Print a flat list instead of month groups
        #[arg(long)]
        flat: bool,
    },
    /// Show the donation catalog
    Donations,
    /// Simulated login (password read from the terminal)
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum PetAction {
    /// List adoptable pets
    List {
        /// Species tab: `all`, `dog` or `cat`
        #[arg(long, default_value = "all")]
        species: SpeciesFilter,
    },
    /// Register a new pet
    Create {
        /// Pet display name
        #[arg(short, long)]
        name: String,

        /// Breed
        #[arg(short, long)]
        breed: String,

        /// Age, free text (e.g. "3 anos", "6 meses")
        #[arg(short, long)]
        age: String,

        /// Size label
        #[arg(short, long, default_value = "Médio")]
        size: String,

        /// Species (`dog` or `cat`)
        #[arg(long, default_value = "dog")]
        species: PetSpecies,
    },
    /// Remove a pet (asks for confirmation)
    Delete {
        /// Pet id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List users
    List,
    /// Create a new user
    Create {
        /// User display name
        #[arg(short, long)]
        name: String,

        /// Contact email (stored as entered, not format-checked)
        #[arg(short, long)]
        email: String,
    },
    /// Remove a user (asks for confirmation)
    Delete {
        /// User id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum RequestAction {
    /// List adoption requests
    List {
        /// Status tab: `all`, `pending`, `approved`, `rejected` or `completed`
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show one request in full
    Show {
        /// Request id
        id: String,
    },
    /// Move a request to a new status
    SetStatus {
        /// Request id
        id: String,

        /// New status (`pending`, `approved`, `rejected` or `completed`)
        status: RequestStatus,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CapraConfig::from_env()?;

    match cli.command {
        Commands::Pets { action } => match action {
            PetAction::List { species } => commands::pets::list(config, species),
            PetAction::Create {
                name,
                breed,
                age,
                size,
                species,
            } => commands::pets::create(config, name, breed, age, size, species)?,
            PetAction::Delete { id, yes } => commands::pets::delete(config, &id, yes)?,
        },
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list(config),
            UserAction::Create { name, email } => commands::users::create(config, name, email)?,
            UserAction::Delete { id, yes } => commands::users::delete(config, &id, yes)?,
        },
        Commands::Requests { action } => match action {
            RequestAction::List { status } => commands::requests::list(config, status),
            RequestAction::Show { id } => commands::requests::show(config, &id),
            RequestAction::SetStatus { id, status } => {
                commands::requests::set_status(config, &id, status)?;
            }
        },
        Commands::History { flat } => commands::history::run(config, flat),
        Commands::Donations => commands::donations::run(),
        Commands::Login { email } => commands::login::run(&email).await?,
    }
    Ok(())
}
