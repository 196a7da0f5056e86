//! Todo CLI - interactive personal task tracking.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use todo::codec::Format;
use todo::domain::{ConfigDomain, ImportOutcome, InterchangeDomain, TasksDomain};
use todo::errors::{TodoError, TodoResult};
use todo::storage::FileStorage;
use todo::ui::{self, MenuChoice, TerminalConfirm};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal task tracking backed by a local JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// Task store file (overrides the config file)
    #[arg(short, long, env = "TODO_FILE")]
    file: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, env = "TODO_CONFIG", default_value = "todo-config.json")]
    config: PathBuf,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigDomain::new(&cli.config)
        .load()
        .await
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(file) = cli.file {
        config.store_file = file;
    }
    if cli.no_banner {
        config.show_banner = false;
    }

    // A corrupt store halts startup instead of being overwritten later
    let storage = Arc::new(FileStorage::new(&config.store_file));
    let mut tasks = TasksDomain::load(storage, &config)
        .await
        .with_context(|| {
            format!(
                "Task file {} could not be loaded; fix or move it before starting",
                config.store_file.display()
            )
        })?;
    let interchange = InterchangeDomain::new(&config);

    if config.show_banner {
        ui::show_banner().await;
    } else {
        println!("{}", "Welcome to the ToDo App".cyan());
    }

    loop {
        ui::print_menu();
        let input = ui::prompt_text("Please enter the number for your selected mode")?;

        let Some(choice) = MenuChoice::parse(&input) else {
            ui::print_error("Please enter a number between 0 and 6.");
            continue;
        };

        if choice == MenuChoice::Exit {
            println!(
                "{}",
                "Thank you for using the ToDo app. Have a nice day!".green()
            );
            return Ok(());
        }

        match dispatch(choice, &mut tasks, &interchange).await {
            Ok(()) => {}
            // Closed stdin would otherwise spin the menu forever
            Err(e @ TodoError::Prompt { .. }) => return Err(e.into()),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}

async fn dispatch(
    choice: MenuChoice,
    tasks: &mut TasksDomain,
    interchange: &InterchangeDomain,
) -> TodoResult<()> {
    match choice {
        MenuChoice::View => ui::view_tasks(tasks.tasks()),

        MenuChoice::Add => {
            let title = ui::prompt_text("Enter task you wanna add")?;
            let due = ui::prompt_text(
                "(OPTIONAL) Enter task due date (DD.MM.YYYY) or number of days from today",
            )?;
            let priority = ui::prompt_text(
                "(OPTIONAL) Enter task priority - low[l], medium[m], high[h] (default = low)",
            )?;

            tasks.add_task(&title, &due, &priority).await?;
            ui::print_success("Task added.");
        }

        MenuChoice::Complete => {
            ui::view_tasks(tasks.tasks());
            let index = ui::prompt_text("Enter task number to complete")?;

            let task = tasks.complete(&index).await?;
            ui::print_success(&format!("Task '{}' marked as completed.", task.title));
            ui::view_tasks(tasks.tasks());
        }

        MenuChoice::Delete => {
            ui::view_tasks(tasks.tasks());
            let index = ui::prompt_text("Enter task number to delete")?;

            match tasks.delete(&index, &TerminalConfirm).await? {
                Some(removed) => ui::print_success(&format!("Deleted task: {}", removed.title)),
                None => ui::print_info("Task deletion cancelled."),
            }
        }

        MenuChoice::Export => {
            if tasks.is_empty() {
                ui::print_info("No tasks to export.");
                return Ok(());
            }

            let format = Format::from_choice(&ui::prompt_text("Export to CSV (c) or JSON (j)?")?)?;
            let default_path = interchange.export_path(format, "");
            let name = ui::prompt_text(&format!(
                "Enter tasks filename (default = {})",
                default_path.display()
            ))?;

            let path = interchange.export(tasks.tasks(), format, &name).await?;
            ui::print_success(&format!("Tasks exported to {}", path.display()));
        }

        MenuChoice::Import => {
            let format = Format::from_choice(&ui::prompt_text("Import from CSV (c) or JSON (j)?")?)?;
            let path = ui::prompt_text("Enter path of the file to import")?;

            match interchange
                .import(tasks, format, Path::new(path.trim()), &TerminalConfirm)
                .await?
            {
                ImportOutcome::Imported { count } => {
                    ui::print_success(&format!("Imported {count} task(s)."));
                }
                ImportOutcome::Cancelled => ui::print_info("Import cancelled."),
            }
        }

        MenuChoice::Exit => {}
    }

    Ok(())
}
