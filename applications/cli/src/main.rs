/// ResumeCheck - ATS resume scoring from the terminal
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use resumecheck_cli::pages::AdminTab;
use resumecheck_cli::{App, AppConfig, Screen};
use resumecheck_client::UploadFile;
use resumecheck_core::validation::{LoginForm, RegisterForm};
use resumecheck_core::{ReportTab, ResumeId, UserId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "resumecheck")]
#[command(about = "Score your resume against applicant tracking systems", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration
    #[arg(long, global = true, env = "RESUMECHECK_API_URL")]
    api_url: Option<String>,

    /// Keep the session in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Draw the score gauge without animating it
    #[arg(long, global = true)]
    no_animate: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page
    Home,
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Repeat the password
        #[arg(long)]
        confirm_password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// List your resumes and their scores
    Dashboard,
    /// Upload a PDF, DOC or DOCX resume for analysis
    Upload {
        /// Resume file
        file: PathBuf,
    },
    /// Show the analysis report for a resume
    Report {
        id: String,
        /// overview, strengths, improvements or details
        #[arg(short, long, default_value = "overview")]
        tab: ReportTab,
        /// Delete this resume from the report
        #[arg(long)]
        delete: bool,
        /// Skip the delete confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete one of your resumes
    Delete {
        id: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Admin panel: all users and resumes
    Admin {
        /// Filter by name, email or file name
        #[arg(short, long)]
        search: Option<String>,
        /// users or resumes
        #[arg(short, long, default_value = "users")]
        tab: AdminTab,
    },
    /// Delete a user and all of their resumes (admin only)
    DeleteUser {
        id: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Open a route path such as /dashboard or /report/<id>
    Open { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resumecheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    if cli.no_animate {
        config.ui.animate = false;
    }

    let mut app = App::from_config(&config, cli.ephemeral)
        .await?
        .with_progress(true);

    let screen = match cli.command.unwrap_or(Commands::Home) {
        Commands::Home => app.open("/").await,
        Commands::Login { email, password } => app.login(LoginForm { email, password }).await,
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            app.register(RegisterForm {
                name,
                email,
                password,
                confirm_password,
            })
            .await
        }
        Commands::Logout => app.logout().await,
        Commands::Dashboard => app.open("/dashboard").await,
        Commands::Upload { file } => {
            let file = UploadFile::from_path(&file).await?;
            app.upload(file).await
        }
        Commands::Report {
            id,
            tab,
            delete,
            yes,
        } => {
            let id = ResumeId::new(id);
            if delete {
                if !confirm("Are you sure you want to delete this resume?", yes)? {
                    return Ok(());
                }
                app.delete_from_report(&id).await
            } else {
                app.report(&id, tab).await
            }
        }
        Commands::Delete { id, yes } => {
            if !confirm("Are you sure you want to delete this resume?", yes)? {
                return Ok(());
            }
            app.delete_resume(&ResumeId::new(id)).await
        }
        Commands::Admin { search, tab } => app.admin(search.as_deref(), tab).await,
        Commands::DeleteUser { id, yes } => {
            let prompt = "Are you sure you want to delete this user? All their resumes will also be deleted.";
            if !confirm(prompt, yes)? {
                return Ok(());
            }
            app.delete_user(&UserId::new(id)).await
        }
        Commands::Open { path } => app.reload(&path).await,
    };

    show(screen).await?;
    Ok(())
}

/// Print the page, then draw the report gauge if there is one
async fn show(screen: Screen) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    tracing::debug!(route = %screen.route, "Rendering");
    write!(stdout, "{}", screen.body)?;

    if let Some(mut gauge) = screen.gauge {
        if gauge.is_animating() {
            gauge.play(&mut stdout).await?;
        } else {
            writeln!(stdout, "{gauge}")?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Ask on stdin unless `--yes` was given
fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
