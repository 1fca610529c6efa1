//! File Overview CLI
//!
//! Command-line front end for the overview backend:
//! - Log in and register
//! - Upload files and print their generated overview
//! - Browse the upload history
//! - Check backend status

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use file_overview::api::SESSION_COOKIE;
use file_overview::config::generate_default_config;
use file_overview::screens::{HistoryView, OpenMode};
use file_overview::{
    logging, Config, DashboardScreen, FileEntry, HomeScreen, HttpClient, LoginScreen, Model,
    OverviewApi, RegisterScreen, SessionStore, StoredSession, UploadFile,
};

#[derive(Parser)]
#[command(name = "overview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upload files and let AI generate smart overviews")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and keep the session for later commands
    Login {
        #[arg(short, long)]
        email: String,
        /// Password (default: $OVERVIEW_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        /// Password (default: $OVERVIEW_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Upload a file and print its overview
    Upload {
        /// File to upload
        path: PathBuf,
        /// Model (gpt-4, gpt-3.5, claude-3)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List uploaded files
    Files,

    /// Show the overview of an uploaded file
    Overview {
        /// File name as listed by `files`
        name: String,
        /// Show a local placeholder instead of asking the backend
        #[arg(long)]
        preview: bool,
    },

    /// Forget the stored session
    Logout,

    /// Show backend status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, &content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    logging::init(&config.logging)?;

    let client = HttpClient::new(config.api.client_config())?;
    let store = config.session.store();
    if config.session.persist {
        restore_session(&client, &store);
    }

    match cli.command {
        Commands::Login { email, password } => {
            let password = require_password(password);
            let mut screen = LoginScreen::new(email, password);
            match screen.submit(&client).await {
                Some(_) => {
                    println!("Logged in as {}", screen.email);
                    if config.session.persist {
                        save_session(&client, &store)?;
                    }
                }
                None => fail(screen.error()),
            }
        }

        Commands::Register {
            username,
            email,
            password,
        } => {
            let password = require_password(password);
            let mut screen = RegisterScreen::new(username, email, password);
            match screen.submit(&client).await {
                Some(_) => {
                    println!("Account created for {}", screen.email);
                    println!();
                    println!("Log in with:");
                    println!("  overview login --email {}", screen.email);
                }
                None => fail(screen.error()),
            }
        }

        Commands::Upload { path, model } => {
            let model = match model {
                Some(m) => m.parse::<Model>().map_err(anyhow::Error::msg)?,
                None => config.dashboard.model(),
            };
            let file = UploadFile::read(&path)
                .await
                .with_context(|| format!("Failed to read {:?}", path))?;

            println!("Uploading {} ({} bytes) with {}...", file.name, file.size(), model.label());

            let mut dashboard = DashboardScreen::new(model, config.dashboard.open_mode());
            dashboard.select_file(file);
            let accepted = dashboard.upload(&client).await;

            println!();
            println!("{}", dashboard.overview_text());
            if !accepted {
                std::process::exit(1);
            }

            println!();
            print_history(&dashboard, &cli.format)?;
        }

        Commands::Files => {
            let mut dashboard = DashboardScreen::default();
            dashboard.mount(&client).await;
            print_history(&dashboard, &cli.format)?;
        }

        Commands::Overview { name, preview } => {
            let mode = if preview {
                OpenMode::Preview
            } else {
                config.dashboard.open_mode()
            };
            let mut dashboard = DashboardScreen::new(config.dashboard.model(), mode);
            let found = dashboard.open_entry(&client, &name).await;

            if cli.format == "json" {
                let body = serde_json::json!({
                    "file": name,
                    "summary": dashboard.overview_text(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", dashboard.overview_text());
            }
            if !found {
                std::process::exit(1);
            }
        }

        Commands::Logout => {
            if store.clear()? {
                println!("Logged out");
            } else {
                println!("No stored session");
            }
        }

        Commands::Status => {
            println!("{} v{}", HomeScreen::TITLE, env!("CARGO_PKG_VERSION"));
            println!("{}", HomeScreen::TAGLINE);
            println!();

            match client.health().await {
                Ok(health) => {
                    println!("Backend: {}", client.base_url());
                    println!("Status:  {}", health.message.as_deref().unwrap_or("ok"));
                    println!(
                        "Session: {}",
                        if client.session_token().is_some() {
                            "active"
                        } else {
                            "none (run `overview login`)"
                        }
                    );
                }
                Err(e) => {
                    eprintln!("Cannot reach backend at {}", client.base_url());
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// `--password` wins over `OVERVIEW_PASSWORD`
fn resolve_password(flag: Option<String>, env: Option<String>) -> Option<String> {
    flag.or(env)
}

fn require_password(flag: Option<String>) -> String {
    match resolve_password(flag, std::env::var("OVERVIEW_PASSWORD").ok()) {
        Some(password) => password,
        None => {
            eprintln!("Password required: pass --password or set OVERVIEW_PASSWORD");
            std::process::exit(2);
        }
    }
}

/// Put a stored session back into the client's cookie jar
fn restore_session(client: &HttpClient, store: &SessionStore) {
    match store.load(client.base_url()) {
        Ok(Some(session)) => {
            tracing::debug!("Restoring session from {:?}", store.path());
            client.restore_session(&session.cookie);
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Ignoring stored session: {}", e),
    }
}

fn save_session(client: &HttpClient, store: &SessionStore) -> anyhow::Result<()> {
    match client.session_token() {
        Some(token) => {
            store.save(&StoredSession::new(client.base_url(), token))?;
            println!("Session saved to {:?}", store.path());
        }
        None => eprintln!(
            "Warning: backend did not set a {} cookie; later commands will be anonymous",
            SESSION_COOKIE
        ),
    }
    Ok(())
}

fn print_history(dashboard: &DashboardScreen, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(dashboard.files())?);
        return Ok(());
    }

    match dashboard.history() {
        HistoryView::Entries(files) => print_table(files),
        view => {
            if let Some(message) = view.message() {
                println!("{}", message);
            }
        }
    }
    Ok(())
}

fn print_table(files: &[FileEntry]) {
    println!("{:<40} {}", "Name", "Uploaded");
    println!("{}", "-".repeat(60));
    for file in files {
        println!("{:<40} {}", file.name, file.uploaded_label());
    }
}

fn fail(message: Option<&str>) -> ! {
    eprintln!("{}", message.unwrap_or("Request failed"));
    std::process::exit(1);
}
