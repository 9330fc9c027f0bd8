use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use todolist_core::{view, TodoApi};

#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "Manage to-do lists on a remote server")]
pub struct Cli {
    /// API base URL (falls back to $TODO_API_BASE_URL, then http://localhost:8081)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show all lists
    Lists,
    /// Show one list with its todos
    Show { list_id: i64 },
    /// Create a list
    AddList { title: String },
    /// Delete a list and its todos
    RmList { id: i64 },
    /// Add a todo to a list
    Add { list_id: i64, description: String },
    /// Mark a todo as complete
    Done { id: i64 },
    /// Mark a todo as not complete
    Undo { id: i64 },
    /// Delete a todo
    Rm { id: i64 },
}

/// Execute one command and return what should be printed.
pub async fn run(api: &TodoApi, command: Command) -> Result<String> {
    let output = match command {
        // An unreachable server shows as no lists; the failure is logged.
        Command::Lists => view::render_lists(&api.list_all().await.unwrap_or_default()),
        Command::Show { list_id } => {
            let lists = api.list_all().await.context("could not fetch lists")?;
            let Some(list) = lists.into_iter().find(|l| l.id == list_id) else {
                bail!("list {list_id} not found");
            };
            view::render_list(Some(&list))
        }
        Command::AddList { title } => {
            let id = api.create_list(&title).await.context("could not add list")?;
            format!("created list {id}\n")
        }
        Command::RmList { id } => {
            api.delete_list(id).await.with_context(|| format!("could not delete list {id}"))?;
            format!("deleted list {id}\n")
        }
        Command::Add { list_id, description } => {
            let id = api
                .create_todo(list_id, &description)
                .await
                .with_context(|| format!("could not add todo to list {list_id}"))?;
            format!("created todo {id}\n")
        }
        Command::Done { id } => {
            api.update_todo(id, true).await.with_context(|| format!("could not update todo {id}"))?;
            format!("completed todo {id}\n")
        }
        Command::Undo { id } => {
            api.update_todo(id, false).await.with_context(|| format!("could not update todo {id}"))?;
            format!("reopened todo {id}\n")
        }
        Command::Rm { id } => {
            api.delete_todo(id).await.with_context(|| format!("could not delete todo {id}"))?;
            format!("deleted todo {id}\n")
        }
    };
    Ok(output)
}
