use clap::Parser;
use phonebook::application::{init::init, ConfigService, ContactStore};
use phonebook::cli::{format_contact_table, Cli, Commands, MenuSession};
use phonebook::domain::{Contact, ContactPatch};
use phonebook::error::PhonebookError;
use phonebook::infrastructure::config::CONFIG_FILE_NAME;
use phonebook::infrastructure::Config;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never mix with tables on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PhonebookError> {
    // `config` must still work when the file it edits is missing or broken
    let discovered = if matches!(cli.command, Some(Commands::Config { .. })) {
        Config::discover_lenient(cli.config.as_deref())
    } else {
        Config::discover(cli.config.as_deref())?
    };
    let config = discovered.with_overrides(cli.file, cli.delimiter)?;

    match cli.command {
        Some(Commands::Init) => {
            init(&config.file)?;
            println!("Initialized phone book at {}", config.file.display());
            Ok(())
        }
        Some(Commands::List) => {
            let store = open_store(&config)?;
            println!(
                "{}",
                format_contact_table(store.records(), "Phone book is empty").trim_end()
            );
            Ok(())
        }
        Some(Commands::Add {
            name,
            phone,
            comment,
        }) => {
            let mut store = open_store(&config)?;
            let id = store.add_contact(Contact::new(name, phone, comment))?;
            store.save()?;
            println!("Contact added with id {}", id);
            Ok(())
        }
        Some(Commands::Edit {
            id,
            name,
            phone,
            comment,
        }) => {
            let mut store = open_store(&config)?;
            let merged = store.edit_contact(&id, ContactPatch::new(name, phone, comment))?;
            store.save()?;
            println!("Contact {} updated: {}", id.trim(), merged.name);
            Ok(())
        }
        Some(Commands::Find { keyword }) => {
            let store = open_store(&config)?;
            let found = store.find_contact(&keyword)?;
            println!(
                "{}",
                format_contact_table(&found, "No contacts found").trim_end()
            );
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut store = open_store(&config)?;
            let removed = store.delete_contact(&id)?;
            store.save()?;
            println!("Contact '{}' deleted", removed.name);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            let mut service = ConfigService::new(path, config);

            if list {
                let config = service.list();
                println!("file = {}", config.file.display());
                println!("delimiter = {}", config.delimiter);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: phonebook config [--list | <key> [<value>]]");
                println!("Valid keys: file, delimiter");
                Ok(())
            }
        }
        None => {
            let store = ContactStore::from_config(&config);
            let stdin = io::stdin();
            let mut session = MenuSession::new(store, stdin.lock(), io::stdout().lock());
            session.run()?;
            Ok(())
        }
    }
}

/// Load the configured phone book for a one-shot command
fn open_store(config: &Config) -> Result<ContactStore, PhonebookError> {
    let mut store = ContactStore::from_config(config);
    store.load()?;
    Ok(store)
}
