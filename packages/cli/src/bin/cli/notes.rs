use std::sync::Arc;

use carryover_client::{ApiClient, NoteBoard, NoteDraft};
use carryover_core::{Clock, Color};
use carryover_notes::Note;
use clap::Subcommand;
use colored::*;

use super::utils::{color_label, format_timestamp, new_table, truncate};

#[derive(Subcommand)]
pub enum NotesCommands {
    /// List notes, most recently updated first
    List,
    /// Add a note
    Add {
        /// Note text
        text: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        color: Option<Color>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
}

pub async fn handle_notes_command(
    command: NotesCommands,
    client: ApiClient,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<()> {
    let mut board = NoteBoard::new(client, clock);

    match command {
        NotesCommands::List => {
            board.refresh().await?;
            print_notes(board.notes());
        }
        NotesCommands::Add { text, title, color } => {
            let draft = NoteDraft {
                title,
                text,
                color,
            };
            let note = board.add_note(draft).await?;
            println!("{} {}", "Added".green().bold(), note.id.cyan());
        }
        NotesCommands::Delete { id } => {
            board.delete(&id).await?;
            println!("{} {}", "Deleted".green().bold(), id);
        }
    }

    Ok(())
}

fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("{}", "No notes yet".yellow());
        return;
    }

    let mut table = new_table(vec!["ID", "Title", "Note", "Color", "Updated"]);
    for note in notes {
        table.add_row(vec![
            note.id.clone(),
            truncate(&note.title, 20),
            truncate(&note.text, 40),
            color_label(note.color).to_string(),
            format_timestamp(&note.updated_at),
        ]);
    }

    println!("{}", table);
    println!("Total: {} notes", notes.len().to_string().cyan());
}
