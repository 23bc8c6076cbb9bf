//! `tracker` - terminal front-end for the task tracker API

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use shared::models::serde_helpers::parse_timestamp;
use shared::{EmployeeId, EmployeePayload, TaskId, TaskPayload, TaskPriority, TaskStatus};
use tracing_subscriber::EnvFilter;
use tracker_client::{
    ClientConfig, ClientError, ClientResult, DashboardView, EmployeeListView, HttpTrackerClient,
    TaskListView, TrackerApi,
};

#[derive(Parser, Debug)]
#[command(name = "tracker", version, about = "Employee task tracker")]
struct Cli {
    /// API root, e.g. http://localhost:5001/api
    #[arg(long, env = "TRACKER_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline counts and recent tasks
    Dashboard,
    /// List active employees
    Employees {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add, edit or delete an employee
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },
    /// List tasks
    Tasks {
        /// Matches title or description
        #[arg(long)]
        search: Option<String>,
        /// Code, name or label, e.g. 1, InProgress, "in progress"
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        #[arg(long)]
        employee: Option<EmployeeId>,
    },
    /// Add, edit, delete or complete a task
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
}

#[derive(Subcommand, Debug)]
enum EmployeeAction {
    Add(EmployeeFields),
    Edit {
        id: EmployeeId,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    Delete {
        id: EmployeeId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct EmployeeFields {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    position: Option<String>,
}

impl EmployeeFields {
    fn apply(self, payload: &mut EmployeePayload) {
        if let Some(v) = self.first_name {
            payload.first_name = v;
        }
        if let Some(v) = self.last_name {
            payload.last_name = v;
        }
        if let Some(v) = self.email {
            payload.email = v;
        }
        if let Some(v) = self.department {
            payload.department = v;
        }
        if let Some(v) = self.position {
            payload.position = v;
        }
    }
}

#[derive(Subcommand, Debug)]
enum TaskAction {
    Add(TaskFields),
    Edit {
        id: TaskId,
        #[command(flatten)]
        fields: TaskFields,
    },
    Delete {
        id: TaskId,
        #[arg(long, short)]
        yes: bool,
    },
    /// Mark a task as completed
    Complete { id: TaskId },
}

#[derive(Args, Debug)]
struct TaskFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    status: Option<TaskStatus>,
    #[arg(long)]
    priority: Option<TaskPriority>,
    /// YYYY-MM-DD or RFC 3339
    #[arg(long, conflicts_with = "clear_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
    #[arg(long)]
    employee: Option<EmployeeId>,
}

impl TaskFields {
    fn apply(self, payload: &mut TaskPayload) -> ClientResult<()> {
        if let Some(v) = self.title {
            payload.title = v;
        }
        if let Some(v) = self.description {
            payload.description = v;
        }
        if let Some(v) = self.status {
            payload.status = v;
        }
        if let Some(v) = self.priority {
            payload.priority = v;
        }
        if let Some(due) = self.due {
            let parsed = parse_timestamp(&due)
                .ok_or_else(|| ClientError::InvalidInput(format!("unrecognized date: {due}")))?;
            payload.due_date = Some(parsed);
        }
        if self.clear_due {
            payload.due_date = None;
        }
        if let Some(v) = self.employee {
            payload.employee_id = v;
        }
        Ok(())
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

async fn run(cli: Cli, api: Arc<dyn TrackerApi>) -> ClientResult<()> {
    match cli.command {
        Command::Dashboard => {
            let mut view = DashboardView::new(api);
            view.load().await?;
            print!("{}", view.render());
        }
        Command::Employees { search } => {
            let mut view = EmployeeListView::new(api);
            view.load().await?;
            if let Some(term) = search {
                view.set_search(term);
            }
            print!("{}", view.render());
        }
        Command::Employee { action } => {
            let mut view = EmployeeListView::new(api);
            view.load().await?;
            match action {
                EmployeeAction::Add(fields) => {
                    let mut payload = EmployeePayload::default();
                    fields.apply(&mut payload);
                    view.save(payload).await?;
                }
                EmployeeAction::Edit { id, fields } => {
                    let mut payload = view.edit_form(id)?;
                    fields.apply(&mut payload);
                    view.save(payload).await?;
                }
                EmployeeAction::Delete { id, yes } => {
                    if !yes && !confirm("Are you sure you want to delete this employee?") {
                        return Ok(());
                    }
                    view.delete(id).await?;
                }
            }
            print!("{}", view.render());
        }
        Command::Tasks {
            search,
            status,
            priority,
            employee,
        } => {
            let mut view = TaskListView::new(api);
            view.load().await?;
            view.filter.search = search.unwrap_or_default();
            view.filter.status = status;
            view.filter.priority = priority;
            view.filter.employee_id = employee;
            print!("{}", view.render());
        }
        Command::Task { action } => {
            let mut view = TaskListView::new(api);
            view.load().await?;
            match action {
                TaskAction::Add(fields) => {
                    let mut payload = TaskPayload::default();
                    fields.apply(&mut payload)?;
                    view.save(payload).await?;
                }
                TaskAction::Edit { id, fields } => {
                    let mut payload = view.edit_form(id)?;
                    fields.apply(&mut payload)?;
                    view.save(payload).await?;
                }
                TaskAction::Delete { id, yes } => {
                    if !yes && !confirm("Are you sure you want to delete this task?") {
                        return Ok(());
                    }
                    view.delete(id).await?;
                }
                TaskAction::Complete { id } => view.mark_completed(id).await?,
            }
            print!("{}", view.render());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }

    let client = match HttpTrackerClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, Arc::new(client)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ClientError::Validation { errors }) => {
            eprintln!("error: validation failed");
            for (field, messages) in errors {
                eprintln!("  {field}: {}", messages.join(", "));
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
