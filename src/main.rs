//! `remediate` command-line front end for the security helpers.
//!
//! Every subcommand prints its result as JSON on stdout; logs go to stderr.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;

use secure_remediation::config::{load_config, ToolkitConfig};
use secure_remediation::observability::init_logging;
use secure_remediation::security::{
    generate_secure_token, hash_password, hash_password_bytes, sanitize_sql_input,
    security_headers, validate_file_upload, validate_file_upload_strict, verify_password,
    PasswordCredential,
};

#[derive(Parser)]
#[command(name = "remediate")]
#[command(about = "Defense-in-depth web security helpers", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrub SQL injection fragments from input
    Sanitize { input: String },
    /// Generate a random hex token
    Token {
        /// Number of random bytes (output is twice as many hex characters)
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Hash a password with PBKDF2-HMAC-SHA256
    Hash {
        password: OsString,
        /// Hex-encoded salt; a random 32-byte salt is used when omitted
        #[arg(short, long)]
        salt: Option<String>,
    },
    /// Verify a password against a stored hash and salt
    Verify {
        password: String,
        #[arg(long)]
        hash: String,
        #[arg(long)]
        salt: String,
    },
    /// Validate a file as an upload
    Upload {
        path: PathBuf,
        /// Also require the magic number to match the extension
        #[arg(long)]
        strict: bool,
    },
    /// Print the recommended security response headers
    Headers,
    /// Run the helpers against sample values
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ToolkitConfig::default(),
    };
    init_logging(&config.logging)?;

    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Sanitize { input } => {
            print_json(&json!({ "sanitized": sanitize_sql_input(&input) }))?;
        }
        Commands::Token { length } => {
            let length = length.unwrap_or(config.tokens.default_length);
            let token = generate_secure_token(length)?;
            print_json(&json!({ "token": token }))?;
        }
        Commands::Hash { password, salt } => {
            let salt = salt.map(hex::decode).transpose()?;
            let credential = hash_password_bytes(password.as_encoded_bytes(), salt.as_deref())?;
            print_json(&credential)?;
        }
        Commands::Verify { password, hash, salt } => {
            let credential = PasswordCredential { hash, salt };
            let valid = verify_password(&password, &credential)?;
            print_json(&json!({ "valid": valid }))?;
        }
        Commands::Upload { path, strict } => {
            let content = std::fs::read(&path)?;
            let filename = file_name(&path);
            let verdict = if strict || config.uploads.strict {
                validate_file_upload_strict(&filename, &content)
            } else {
                validate_file_upload(&filename, &content)
            };
            print_json(&verdict)?;
        }
        Commands::Headers => {
            let headers: serde_json::Map<String, serde_json::Value> = security_headers()
                .iter()
                .map(|(name, value)| (name.to_string(), json!(value)))
                .collect();
            print_json(&headers)?;
        }
        Commands::Demo => run_demo(config.tokens.default_length)?,
    }

    Ok(())
}

fn run_demo(token_length: usize) -> Result<(), Box<dyn std::error::Error>> {
    let malicious_input = "'; DROP TABLE users;--";
    println!("Sanitized input: {}", sanitize_sql_input(malicious_input));

    let token = generate_secure_token(token_length)?;
    println!("Generated token: {}", token);

    let credential = hash_password("StrongPassword123!", None)?;
    let preview: String = credential.hash.chars().take(20).collect();
    println!("Password hash: {} ...", preview);
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
