mod clipboard;
mod config;
mod interactive;
mod jwt;
mod log;
mod output;

use std::io::Read;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::clipboard::{copy_to_clipboard, read_from_clipboard};
use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "jwtpeek")]
#[command(about = "Decode JSON Web Tokens in the terminal (no verification)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Token to decode; `-` or no token reads from stdin
    token: Option<String>,

    /// Read the token from the system clipboard
    #[arg(long)]
    paste: bool,

    /// Print the decoded result as one JSON document
    #[arg(long)]
    json: bool,

    /// Copy the decoded payload JSON to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive full-screen decoder
    Ui,
    /// Set the default output format
    SetOutput {
        /// The format to use when none is given on the command line
        #[arg(value_enum)]
        format: OutputFormat,
    },
}

fn cmd_set_output(format: OutputFormat) -> Result<()> {
    let mut config = Config::load()?;
    config.output = format;
    config.save()?;
    log::success(&format!("Default output set to: {:?}", format));
    Ok(())
}

/// Decode and print one token. Returns false if the token did not decode.
fn cmd_decode(token: &str, format: OutputFormat, copy: bool) -> Result<bool> {
    let decoded = match jwt::decode(token) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::error(&err.to_string());
            return Ok(false);
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decoded)?),
        OutputFormat::Pretty => output::print_pretty(&decoded),
    }

    if copy {
        let payload = serde_json::to_string_pretty(&decoded.payload)?;
        if let Err(e) = copy_to_clipboard(&payload) {
            log::warn(&format!("Failed to copy to clipboard: {}", e));
        } else {
            log::success("Payload copied to clipboard");
        }
    }

    Ok(true)
}

/// Resolve the token from clipboard, argument, or stdin.
fn read_token(cli: &Cli) -> Result<String> {
    if cli.paste {
        return Ok(read_from_clipboard()
            .map_err(|e| anyhow::anyhow!("Failed to read clipboard: {}", e))?);
    }

    match cli.token.as_deref() {
        Some("-") | None => {
            if atty::is(atty::Stream::Stdin) && cli.token.is_none() {
                log::error("Please provide a token, pipe one in, or use --paste.");
                log::info("Run `jwtpeek --help` for usage.");
                std::process::exit(1);
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(token) => Ok(token.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ui) => {
            interactive::run_interactive()?;
        }
        Some(Commands::SetOutput { format }) => {
            cmd_set_output(format)?;
        }
        None => {
            let token = read_token(&cli)?;
            let config = Config::load()?;
            let format = if cli.json {
                OutputFormat::Json
            } else {
                config.output
            };

            if !cmd_decode(token.trim(), format, cli.copy)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
