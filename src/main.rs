use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};

use wl::utils::logger;
use wl::{AddOutcome, CliConfig, Command, Item, Status, Watchlist, WlError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        tracing::error!("Command failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let path = config.watchlist_path();
    tracing::debug!("Using watchlist file: {}", path.display());

    let mut list = match Watchlist::from_file(&path) {
        Ok(list) => list,
        Err(WlError::FileNotFoundError { .. }) => {
            tracing::debug!("No watchlist file yet, starting empty");
            Watchlist::default()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("could not load {}", path.display()));
        }
    };

    let mut write_required = false;

    match config.command {
        Command::Add { name, status } => match list.add(name.clone(), status) {
            AddOutcome::Added => write_required = true,
            AddOutcome::Duplicate => {
                if confirm_duplicate_add(&name)? {
                    list.force_add(name, status);
                    write_required = true;
                } else {
                    println!("No items were added");
                }
            }
        },

        Command::Remove { name } => {
            let removed = list.remove(&name)?;
            tracing::info!("Removed {} item(s) named '{}'", removed, name);
            write_required = true;
        }

        Command::Update { name, status } => {
            list.update(&name, status)?;
            write_required = true;
        }

        Command::Rename { name, new_name } => {
            list.rename(&name, new_name)?;
            write_required = true;
        }

        Command::Search { search, status } => {
            for item in list.search(&search, status) {
                print_item(item);
            }
        }

        Command::List => {
            for item in &list {
                print_item(item);
            }
        }

        Command::Summary => print_summary(&list),
    }

    if write_required {
        list.to_file(&path)
            .with_context(|| format!("could not save {}", path.display()))?;
    }

    Ok(())
}

fn confirm_duplicate_add(name: &str) -> anyhow::Result<bool> {
    print!("'{}' already exists. Add anyway? [y/N] ", name);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "ye" | "yes"
    ))
}

fn print_item(item: &Item) {
    println!("{} => {}", item.name, item.status);
}

fn print_summary(list: &Watchlist) {
    let summary = list.summary(None);
    let total: usize = summary.iter().map(|(_, count)| count).sum();

    let status_col_width = Status::ALL
        .iter()
        .map(|s| s.as_str().len())
        .max()
        .unwrap_or(0)
        + 1;
    let count_col_width = summary
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(1);

    for (status, count) in &summary {
        println!(
            " {:<sw$} | {:>cw$}",
            status.as_str(),
            count,
            sw = status_col_width,
            cw = count_col_width
        );
    }

    println!("{}", "-".repeat(status_col_width + count_col_width + 5));

    println!(
        " {:<sw$} | {:>cw$}",
        "total",
        total,
        sw = status_col_width,
        cw = count_col_width
    );
}
