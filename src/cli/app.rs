//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use blogo::config::BlogConfig;
use blogo::output::OutputMode;

/// blogo - A small blog with word-repetition analysis
#[derive(Parser, Debug)]
#[command(
    name = "blogo",
    version,
    about = "A small blog with word-repetition analysis",
    long_about = "Serve a blog, publish posts as the admin, and score posts by how much\n\
                  they repeat themselves.\n\n\
                  Score = max(100 - misspelled - repetitions, 0), where repetitions is\n\
                  the number of words minus the number of distinct words."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./blogo.toml, then ~/.blogo/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write blogo.toml with admin credentials and create the data directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,

        /// Admin email
        #[arg(long)]
        email: String,

        /// Admin password (stored hashed)
        #[arg(long)]
        password: String,
    },

    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Keep posts in memory only
        #[arg(long)]
        ephemeral: bool,
    },

    /// Analyze text for repeated words (reads stdin when no text or file is given)
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Analysis table for all stored posts
    Report,

    /// Print a salted password hash for the [admin] config section
    HashPassword {
        /// Password to hash
        password: String,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum PostAction {
    /// Publish a post
    Add {
        /// Post title
        #[arg(short, long)]
        title: String,

        /// Post content
        #[arg(short, long, required_unless_present = "file", conflicts_with = "file")]
        content: Option<String>,

        /// Read the content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List posts
    List,

    /// Show one post
    Show {
        /// Post ID
        id: u64,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Init {
            force,
            email,
            password,
        }) => commands::init(config_path, force, &email, &password, output_mode),
        Some(Command::Serve {
            host,
            port,
            ephemeral,
        }) => {
            let mut config = BlogConfig::load(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(&config, ephemeral)
        },
        Some(Command::Analyze { text, file }) => {
            commands::analyze(text.as_deref(), file.as_deref(), output_mode)
        },
        Some(Command::Post { action }) => {
            let config = BlogConfig::load(config_path)?;
            commands::post(&config, action, output_mode)
        },
        Some(Command::Report) => {
            let config = BlogConfig::load(config_path)?;
            commands::report(&config, output_mode)
        },
        Some(Command::HashPassword { password }) => commands::hash_password(&password, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": blogo::VERSION
                    })
                );
            } else {
                println!("blogo v{}", blogo::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": blogo::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("blogo v{}", blogo::VERSION);
                println!("\nRun 'blogo --help' for usage");
                println!("Run 'blogo init --email <EMAIL> --password <PASSWORD>' to get started");
            }
            Ok(())
        },
    }
}
