//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use ugdash_core::api::ApiClient;
use ugdash_core::auth::AuthContext;
use ugdash_core::config::{self, paths};
use ugdash_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "ugdash")]
#[command(version)]
#[command(about = "Student recruitment CRM dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "UGDASH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out and delete the stored session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show pipeline counts and recent students
    Dashboard,

    /// Browse students
    Students {
        #[command(subcommand)]
        command: StudentCommands,
    },

    /// Internal notes on a student
    Notes {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// Follow-up reminders on a student
    Reminders {
        #[command(subcommand)]
        command: ReminderCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum StudentCommands {
    /// List students, optionally filtered
    List {
        /// Match first name, last name, or email (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Exact status (exploring, shortlisting, applying, submitted, ...)
        #[arg(long)]
        status: Option<String>,

        /// Match country (case-insensitive substring)
        #[arg(long)]
        country: Option<String>,

        /// Exact grade
        #[arg(long)]
        grade: Option<String>,
    },
    /// Show a student's full profile
    Show {
        #[arg(value_name = "STUDENT_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum NoteCommands {
    /// List notes for a student
    List {
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
    },
    /// Add a note to a student
    Add {
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,

        /// Note text
        #[arg(long)]
        content: String,
    },
}

#[derive(clap::Subcommand)]
enum ReminderCommands {
    /// List reminders for a student
    List {
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
    },
    /// Schedule a reminder for a student
    Add {
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,

        /// Due date: RFC 3339, or local time as YYYY-MM-DDTHH:MM
        #[arg(long)]
        due: String,

        /// Reminder type (call_student, review_application, send_documents, follow_up_check)
        #[arg(long = "type", default_value = "call_student")]
        reminder_type: String,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
    /// Persist the backend base URL
    SetBaseUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands must work even when the config file is broken.
    if let Commands::Config { command } = cli.command {
        return run_config(command);
    }

    let config = config::Config::load().context("load config")?;
    logging::init(&config.log, &paths::logs_dir());

    let mut auth = AuthContext::init_default().context("load session")?;
    let api = ApiClient::from_config(&config, &auth).context("build API client")?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&api, &mut auth, email, password.unwrap_or_default()).await
        }
        Commands::Logout => commands::auth::logout(&mut auth),
        Commands::Whoami => commands::auth::whoami(&api, &auth).await,
        Commands::Dashboard => {
            commands::require_session(&auth)?;
            commands::dashboard::show(&api, config.recent_students).await
        }
        Commands::Students { command } => {
            commands::require_session(&auth)?;
            match command {
                StudentCommands::List {
                    search,
                    status,
                    country,
                    grade,
                } => {
                    let filter = commands::students::build_filter(search, status, country, grade)?;
                    commands::students::list(&api, filter).await
                }
                StudentCommands::Show { id } => commands::students::show(&api, &id).await,
            }
        }
        Commands::Notes { command } => {
            commands::require_session(&auth)?;
            match command {
                NoteCommands::List { student_id } => {
                    commands::notes::list(&api, &student_id).await
                }
                NoteCommands::Add {
                    student_id,
                    content,
                } => commands::notes::add(&api, &auth, &student_id, content).await,
            }
        }
        Commands::Reminders { command } => {
            commands::require_session(&auth)?;
            match command {
                ReminderCommands::List { student_id } => {
                    commands::reminders::list(&api, &student_id).await
                }
                ReminderCommands::Add {
                    student_id,
                    due,
                    reminder_type,
                    notes,
                } => {
                    commands::reminders::add(
                        &api,
                        &auth,
                        &student_id,
                        commands::reminders::Draft {
                            reminder_type,
                            due,
                            notes,
                        },
                    )
                    .await
                }
            }
        }
        Commands::Config { command } => run_config(command),
    }
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
        ConfigCommands::Generate => commands::config::generate(),
        ConfigCommands::SetBaseUrl { url } => commands::config::set_base_url(&url),
    }
}
