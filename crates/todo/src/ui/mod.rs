//! Terminal UI helpers for task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

mod menu;
mod prompt;

use std::time::Duration;

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use crate::entities::{Task, TaskPriority};

pub use menu::MenuChoice;
pub use prompt::{prompt_text, TerminalConfirm};

fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::High => Color::Red,
        TaskPriority::Medium => Color::Yellow,
        TaskPriority::Low => Color::Blue,
    }
}

/// Create a table for displaying tasks with their 1-based positions
pub fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Sr. No").fg(Color::Cyan),
        Cell::new("Task").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Due Date").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
    ]);

    for (position, task) in tasks.iter().enumerate() {
        let status_color = if task.done { Color::Green } else { Color::Red };
        let due = task
            .due
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);

        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&task.title).fg(priority_color(task.priority)),
            Cell::new(task.status_label()).fg(status_color),
            Cell::new(due),
            Cell::new(task.priority.to_string()),
        ]);
    }

    table
}

/// Print the collection, or a notice when it is empty
pub fn view_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        print_warning("No tasks found.");
        return;
    }

    println!("{}", "Here's the list of your tasks:".cyan().bold());
    println!("{}", task_table(tasks));
}

/// Startup banner with a short progress bar
pub async fn show_banner() {
    println!("{}", "ToDo App".cyan().bold());

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {percent:>3}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    for _ in 0..100 {
        bar.inc(1);
        tokio::time::sleep(Duration::from_millis(4)).await;
    }
    bar.finish_and_clear();
}

/// Print the numbered menu
pub fn print_menu() {
    println!();
    println!("{}", "--- To-Do App Modes ---".bold());
    println!();
    for choice in MenuChoice::ALL {
        println!("{}. {}", choice.key(), choice.label());
    }
    println!();
    println!("{}", "-".repeat(24).dimmed());
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
