use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::PathBuf;
use todolist::{Store, TaskId};

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "To-do list manager backed by SQLite")]
#[command(version)]
struct Cli {
    /// Path to the task database (default: platform data directory)
    #[arg(short, long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// Remove a task by id
    Remove {
        /// Id of the task to remove
        id: TaskId,
    },

    /// Mark a task as completed
    Done {
        /// Id of the task to complete
        id: TaskId,
    },

    /// Replace a task's description
    Update {
        /// Id of the task to update
        id: TaskId,
        /// New task description
        description: String,
    },

    /// List all tasks
    List {
        /// Print tasks as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Import tasks from a JSON file
    Import {
        /// Path to a JSON array of {description, completed} records
        file: PathBuf,
    },
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("todolist").join("tasks.db"))
        .unwrap_or_else(|| PathBuf::from("tasks.db"))
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(default_db_path);
    let mut store = Store::open(&db_path)?;

    match cli.command {
        Commands::Add { description } => {
            let id = store.add(&description)?;
            println!("Added task {}", id);
        }
        Commands::Remove { id } => {
            store.remove(id)?;
            println!("Removed task {}", id);
        }
        Commands::Done { id } => {
            store.mark_completed(id)?;
            println!("Marked task {} completed", id);
        }
        Commands::Update { id, description } => {
            store.update_description(id, &description)?;
            println!("Updated task {}", id);
        }
        Commands::List { json } => {
            let tasks = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks");
            } else {
                for task in &tasks {
                    let status = if task.completed {
                        "Completed".green()
                    } else {
                        "Pending".yellow()
                    };
                    println!("{:>4}  {} - {}", task.id, task.description, status);
                }
            }
        }
        Commands::Import { file } => {
            let count = store.import_from_file(&file)?;
            println!("Imported {} tasks", count);
        }
    }

    Ok(())
}
