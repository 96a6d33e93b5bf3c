use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use solana_security_txt_extractor::config::{Command, RPC_URL_ENV};
use solana_security_txt_extractor::constants::security_txt::fields;
use solana_security_txt_extractor::models::{Extraction, SecurityInfo};
use solana_security_txt_extractor::monitor::Monitor;
use solana_security_txt_extractor::tool::{self, ToolResponse, ToolStatus};
use std::io::Write;

// Simple CLI without clap
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = std::env::args().collect();
    let bin = args.first().map(String::as_str).unwrap_or("security-txt");
    let command = Command::parse(args.get(1..).unwrap_or(&[]), std::env::var(RPC_URL_ENV).ok())?;

    match command {
        Command::Help => print_usage(bin),
        Command::Version => {
            println!("Solana security.txt extractor v{}", solana_security_txt_extractor::VERSION);
        }
        Command::File { path, json } => {
            let extraction = solana_security_txt_extractor::extract_from_file(&path)
                .with_context(|| format!("Failed to read program image: {}", path.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&extraction.info)?);
            } else {
                print_extraction(&path.display().to_string(), &extraction);
            }
        }
        Command::Program { program_id, rpc_url, json } => {
            println!("Extracting security.txt for program: {}", program_id);
            let monitor = Monitor::new(&rpc_url);
            let response = tool::get_security_txt(&monitor, &program_id).await;

            if json {
                println!("{}", response.to_json()?);
            } else {
                print_response(&response);
            }

            if response.status == ToolStatus::Error {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_usage(bin: &str) {
    println!("Solana security.txt extractor v{}", solana_security_txt_extractor::VERSION);
    println!("\nUsage:");
    println!("  {} <PROGRAM_ID> [--cluster URL] [--json]", bin);
    println!("  {} --file PATH [--json]", bin);
    println!("  {} --version", bin);
    println!("\nOptions:");
    println!("  --cluster, -c URL    Use the specified RPC URL (default: ${} or mainnet-beta)", RPC_URL_ENV);
    println!("  --file, -f PATH      Search a local program image instead of fetching one");
    println!("  --json               Print machine-readable JSON");
    println!("  --version, -v        Show version information");
}

fn print_response(response: &ToolResponse) {
    match response.status {
        ToolStatus::Error => println!("Error: {}", response.message),
        ToolStatus::Warning | ToolStatus::Success => {
            println!("{}", response.message);
            print_fields(&response.security_info);
        }
    }
}

fn print_extraction(label: &str, extraction: &Extraction) {
    if extraction.is_empty() {
        println!("No security.txt metadata found in {}", label);
        return;
    }

    println!("Security.txt in {} (matched by {:?}):", label, extraction.source);
    print_fields(&extraction.info);
}

/// Well-known fields first in their usual order, then anything program-specific
fn print_fields(info: &SecurityInfo) {
    for field in fields::WELL_KNOWN {
        if let Some(value) = info.get(field) {
            println!("  {}: {}", field, value);
        }
    }

    let mut custom = info.custom_fields().peekable();
    if custom.peek().is_some() {
        println!("  Other fields:");
        for (field, value) in custom {
            println!("    {}: {}", field, value);
        }
    }
}
