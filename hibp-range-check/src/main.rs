//! Checks passwords against the Have I Been Pwned range API.
//!
//! Only a 5-character SHA1 prefix of each password is sent to the service.
//! Pwned passwords are printed one per line in input order.
//!
//! ```sh
//! printf 'password\nhunter2\n' | hibp-range-check
//! hibp-range-check --threshold 1000 --counts password 12345
//! ```
//!
//! Exit status is 0 when nothing is pwned, 1 when at least one password is,
//! and 2 on error.

mod error;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hibp_range_client::{BreachLookupClient, ClientConfig, HIBP_API_URL_ENV, api_url_from_env};
use tracing_subscriber::EnvFilter;

use crate::error::Error;

#[derive(Parser, Debug)]
#[command(name = "hibp-range-check")]
#[command(about = "Check passwords against Have I Been Pwned without revealing them")]
struct Args {
    /// Passwords to check. Read one per line from stdin when omitted.
    passwords: Vec<String>,

    /// Range API endpoint (default: $HIBP_API_URL or the public service)
    #[arg(long)]
    api_url: Option<String>,

    /// Minimum breach count for a password to be reported as pwned
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    threshold: i64,

    /// Number of concurrent lookups
    #[arg(short = 'j', long, default_value_t = 8)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Ask the service to pad responses so their size reveals nothing
    #[arg(long)]
    padding: bool,

    /// Print "count<TAB>password" for every input instead of only pwned passwords
    #[arg(long)]
    counts: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether any password was pwned.
async fn run(args: Args) -> Result<bool, Error> {
    let api_url = args.api_url.clone().unwrap_or_else(api_url_from_env);
    tracing::debug!(api_url = %api_url, env = HIBP_API_URL_ENV, "resolved range endpoint");

    let config = ClientConfig::builder()
        .base_address(api_url)
        .pwn_threshold(args.threshold)
        .concurrency(args.concurrency)
        .timeout(Duration::from_secs(args.timeout_secs))
        .add_padding(args.padding)
        .build()
        .map_err(hibp_range_client::Error::from)?;
    let threshold = config.pwn_threshold();
    let client = BreachLookupClient::with_config(config)?;

    let passwords = if args.passwords.is_empty() {
        read_stdin_passwords()?
    } else {
        args.passwords
    };
    if passwords.is_empty() {
        return Err(Error::NoPasswords);
    }

    if args.counts {
        let counts = client.pwned_counts(passwords).await?;
        let any_pwned = counts.iter().any(|(_, count)| *count >= threshold);

        let mut stdout = io::stdout().lock();
        for (password, count) in counts {
            writeln!(stdout, "{count}\t{password}")?;
        }
        return Ok(any_pwned);
    }

    let pwned = client.filter_pwned(passwords).await?;

    let mut stdout = io::stdout().lock();
    for password in &pwned {
        writeln!(stdout, "{password}")?;
    }

    Ok(!pwned.is_empty())
}

fn read_stdin_passwords() -> Result<Vec<String>, Error> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading passwords from stdin, one per line (Ctrl-D to finish)");
    }

    let mut passwords = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let password = line.strip_suffix('\r').unwrap_or(&line);
        if !password.is_empty() {
            passwords.push(password.to_string());
        }
    }

    Ok(passwords)
}
