//! Command-line interface

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movedesk")]
#[command(version = VERSION)]
#[command(about = "Terminal front desk for the Exxo Move service catalogue")]
#[command(
    long_about = "movedesk is a terminal UI for browsing the Exxo Move service\n\
                  catalogue: frequently asked questions, a moving-cost estimator,\n\
                  a work gallery, customer reviews, and a contact form."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,

        /// Open configuration file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Print configuration file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI arguments. Returns true if the TUI should start.
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if show {
                show_config();
            } else if reset {
                reset_config();
            } else if edit {
                edit_config();
            } else if path {
                print_config_path();
            } else {
                // No flag given - show help for the subcommand
                eprintln!("Usage: movedesk config [--show | --reset | --edit | --path]");
            }
            false
        }
        None => true,
    }
}

fn show_config() {
    let config = Config::from_env();
    println!("Current configuration (env > file > defaults):\n");
    print!("{}", config.to_toml());
    if let Some(path) = Config::config_path() {
        println!("\n# File: {}", path.display());
        if !path.exists() {
            println!("# (file does not exist yet; showing defaults)");
        }
    }
}

fn reset_config() {
    let Some(path) = Config::config_path() else {
        eprintln!("Cannot determine config path (no home directory)");
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Failed to create config directory: {}", e);
            return;
        }
    }

    match std::fs::write(&path, Config::default().to_toml()) {
        Ok(()) => println!("Configuration reset: {}", path.display()),
        Err(e) => eprintln!("Failed to write config: {}", e),
    }
}

fn edit_config() {
    let Some(path) = Config::config_path() else {
        eprintln!("Cannot determine config path (no home directory)");
        return;
    };

    // Make sure there is something to edit
    Config::ensure_config_exists();

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    match std::process::Command::new(&editor).arg(&path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => eprintln!("{} exited with {}", editor, status),
        Err(e) => eprintln!("Failed to launch {}: {}", editor, e),
    }
}

fn print_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("Cannot determine config path (no home directory)"),
    }
}
