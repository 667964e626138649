//! tp CLI - save social threads and articles as Markdown

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use threadpocket::{FetchConfig, ThreadPocket};

#[derive(Parser)]
#[command(name = "tp")]
#[command(version)]
#[command(about = "Save threads and rich-text articles as Markdown", long_about = None)]
struct Cli {
    /// Directory for saved documents
    #[arg(long, value_name = "DIR", default_value = "./threads", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a thread or article by URL and save it
    Save {
        /// Status URL (e.g. https://x.com/user/status/123...)
        #[arg(value_name = "URL")]
        url: String,

        /// Auth token for the fetcher
        #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
        auth_token: Option<String>,

        /// CT0 credential for the fetcher
        #[arg(long, env = "CT0", hide_env_values = true)]
        ct0: Option<String>,
    },

    /// List saved documents, newest first
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved document
    #[command(alias = "rm")]
    Delete {
        /// Filename inside the store directory
        #[arg(value_name = "FILENAME")]
        filename: String,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("store dir: {}", cli.dir.display());

    let result = match cli.command {
        Commands::Save {
            url,
            auth_token,
            ct0,
        } => cmd_save(&cli.dir, &url, auth_token, ct0),
        Commands::List { json } => cmd_list(&cli.dir, json),
        Commands::Delete { filename } => cmd_delete(&cli.dir, &filename),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_save(
    dir: &PathBuf,
    url: &str,
    auth_token: Option<String>,
    ct0: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = FetchConfig::new();
    if let Some(token) = auth_token {
        config = config.with_auth_token(token);
    }
    if let Some(ct0) = ct0 {
        config = config.with_ct0(ct0);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("Fetching...");

    let tp = ThreadPocket::new(dir, config);
    let outcome = tp.save_url(url);
    pb.finish_and_clear();

    let outcome = outcome?;
    println!(
        "{} {} by {} ({})",
        "Saved".green().bold(),
        outcome.filename,
        outcome.author_name,
        format!("{} posts", outcome.tweet_count).dimmed()
    );

    Ok(())
}

fn cmd_list(dir: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tp = ThreadPocket::new(dir, FetchConfig::new());
    let threads = tp.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&threads)?);
        return Ok(());
    }

    if threads.is_empty() {
        println!("{}", "No saved threads.".yellow());
        return Ok(());
    }

    for thread in &threads {
        let label = thread
            .meta
            .title
            .clone()
            .unwrap_or_else(|| thread.meta.kind.as_str().to_string());
        println!(
            "{}  {} {} {}",
            thread.filename.cyan(),
            thread.meta.author.bold(),
            label,
            thread.meta.saved_at.dimmed()
        );
    }

    Ok(())
}

fn cmd_delete(dir: &PathBuf, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tp = ThreadPocket::new(dir, FetchConfig::new());
    tp.delete(filename)?;
    println!("{} {}", "Deleted".green(), filename);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "tp".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Thread and article archiver");
}
