use std::sync::Arc;

use anyhow::bail;
use carryover_client::{ApiClient, TaskBoard, TaskDraft};
use carryover_core::{Clock, Color};
use carryover_tasks::{Task, TaskUpdateInput, TaskView};
use clap::Subcommand;
use colored::*;

use super::utils::{color_label, format_timestamp, new_table, truncate};

#[derive(Subcommand)]
pub enum TasksCommands {
    /// List tasks (today, history, or all)
    List {
        #[arg(short, long, default_value = "today")]
        view: String,
    },
    /// Add a task for today
    Add {
        /// Task text
        text: String,
        #[arg(short, long)]
        color: Option<Color>,
    },
    /// Complete a task, or re-open a completed one
    Toggle {
        /// Task ID
        id: String,
    },
    /// Change a task's text or color
    Edit {
        /// Task ID
        id: String,
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long)]
        color: Option<Color>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub async fn handle_tasks_command(
    command: TasksCommands,
    client: ApiClient,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<()> {
    let mut board = TaskBoard::new(client, clock);

    match command {
        TasksCommands::List { view } => {
            let view = TaskView::from_param(Some(view.as_str()));
            board.refresh(view).await?;
            print_tasks(view, board.tasks());
        }
        TasksCommands::Add { text, color } => {
            let mut draft = TaskDraft::new(text);
            draft.color = color;
            let task = board.add_task(draft).await?;
            println!("{} {}", "Added".green().bold(), task.id.cyan());
        }
        TasksCommands::Toggle { id } => {
            board.load_containing(&id).await?;
            let task = board.toggle(&id).await?;
            if task.completed {
                println!("{} {}", "Completed".green().bold(), task.text);
            } else {
                println!("{} {} for {}", "Re-opened".yellow().bold(), task.text, task.day);
            }
        }
        TasksCommands::Edit { id, text, color } => {
            if text.is_none() && color.is_none() {
                bail!("Nothing to change; pass --text or --color");
            }
            board.refresh(TaskView::All).await?;
            let input = TaskUpdateInput {
                text,
                color,
                ..Default::default()
            };
            let task = board.edit(&id, input).await?;
            println!("{} {}", "Updated".green().bold(), task.text);
        }
        TasksCommands::Delete { id } => {
            board.refresh(TaskView::All).await?;
            board.delete(&id).await?;
            println!("{} {}", "Deleted".green().bold(), id);
        }
    }

    Ok(())
}

fn print_tasks(view: TaskView, tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", format!("No tasks in the {} view", view.as_str()).yellow());
        return;
    }

    let mut table = new_table(vec!["ID", "Task", "Color", "Day", "Done", "Completed"]);
    for task in tasks {
        let done = if task.completed {
            "✔".green().to_string()
        } else {
            String::new()
        };
        let completed_at = task
            .completed_at
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_default();

        table.add_row(vec![
            task.id.clone(),
            truncate(&task.text, 40),
            color_label(task.color).to_string(),
            task.day.to_string(),
            done,
            completed_at,
        ]);
    }

    println!("{}", table);
    println!("Total: {} tasks", tasks.len().to_string().cyan());
}
