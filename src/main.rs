use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kinform::core::{UserDetailsForm, UserDetailsInput};
use kinform::data::{read_json, Database, KeyValueStore, MemoryStore, RelativeRecord, SqliteStore};
use kinform::ui::terminal_guard;
use kinform::{util, App, Config};

#[derive(Debug, Parser)]
#[command(name = "kinform", version, about = "Collect user and relative details")]
struct Cli {
    /// Data directory (defaults to ~/.kinform)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved on exit. User details saved
    /// by an earlier `user` run are not visible, so submitting relatives reports
    /// missing user details
    #[arg(long, global = true)]
    in_memory: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Edit relatives in the terminal form (default)
    Form,
    /// Save the user details required before relatives can be submitted
    User {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        contact: String,
    },
    /// Print the saved user and relative details
    Show,
    /// Remove saved user and relative details
    Reset,
}

fn init_logging() -> Result<()> {
    // Log to a file (~/.kinform/logs/kinform.log) so output never lands in the TUI
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

fn open_store(in_memory: bool) -> Result<Arc<dyn KeyValueStore>> {
    if in_memory {
        return Ok(Arc::new(MemoryStore::new()));
    }
    let db = Database::open_default()?;
    Ok(Arc::new(SqliteStore::new(db.connection())))
}

fn show(store: &dyn KeyValueStore, config: &Config) -> Result<()> {
    println!("User Details");
    match UserDetailsForm::new(store, &config.storage).load()? {
        Some(user) => {
            println!("First Name {}", user.first_name);
            println!("Last Name {}", user.last_name);
            println!("Email {}", user.email);
            println!("Contact Details {}", user.contact_details);
        }
        None => println!("Not saved"),
    }

    println!();
    println!("Relative Details");
    let relatives: Option<Vec<RelativeRecord>> =
        read_json(store, &config.storage.relatives_key)?;
    match relatives {
        Some(relatives) => {
            for (index, relative) in relatives.iter().enumerate() {
                println!("Relative {}", index + 1);
                println!("First Name: {}", relative.first_name);
                println!("Last Name: {}", relative.last_name);
                println!("Relation: {}", relative.relation);
            }
        }
        None => println!("Not saved"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir);
    init_logging()?;

    let config = Config::load();
    let store = open_store(cli.in_memory)?;

    match cli.command.unwrap_or(Command::Form) {
        Command::Form => {
            terminal_guard::install_panic_hook();
            let mut app = App::new(store, &config);
            app.run().await
        }
        Command::User {
            first_name,
            last_name,
            email,
            contact,
        } => {
            let input = UserDetailsInput {
                first_name,
                last_name,
                email,
                contact_details: contact,
            };
            let details = UserDetailsForm::new(store.as_ref(), &config.storage).save(&input)?;
            println!(
                "Saved user details for {} {}",
                details.first_name, details.last_name
            );
            Ok(())
        }
        Command::Show => show(store.as_ref(), &config),
        Command::Reset => {
            store.remove(&config.storage.user_details_key)?;
            store.remove(&config.storage.relatives_key)?;
            println!("Saved details removed");
            Ok(())
        }
    }
}
