//! Command-line configuration

use std::path::PathBuf;

use crate::errors::{ExtractorError, ExtractorResult};

/// Default cluster when neither `--cluster` nor `SOLANA_RPC_URL` is set
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Environment variable consulted for the RPC URL
pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage
    Help,
    /// Print version
    Version,
    /// Fetch a program from the cluster and search it
    Program {
        program_id: String,
        rpc_url: String,
        json: bool,
    },
    /// Search a local program image
    File { path: PathBuf, json: bool },
}

impl Command {
    /// Parse arguments (without the binary name).
    ///
    /// `env_rpc_url` is the value of [`RPC_URL_ENV`], passed in so parsing stays pure.
    pub fn parse(args: &[String], env_rpc_url: Option<String>) -> ExtractorResult<Self> {
        let mut program_id = None;
        let mut file = None;
        let mut cluster = None;
        let mut json = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-v" => return Ok(Command::Version),
                "--cluster" | "-c" => {
                    cluster = Some(value_for(args, i)?);
                    i += 2;
                }
                "--file" | "-f" => {
                    file = Some(PathBuf::from(value_for(args, i)?));
                    i += 2;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                arg if arg.starts_with('-') => {
                    return Err(ExtractorError::InvalidInput(format!("Unknown argument: {}", arg)));
                }
                arg => {
                    if program_id.replace(arg.to_string()).is_some() {
                        return Err(ExtractorError::InvalidInput(format!("Unexpected argument: {}", arg)));
                    }
                    i += 1;
                }
            }
        }

        match (program_id, file) {
            (Some(_), Some(_)) => Err(ExtractorError::InvalidInput(
                "Pass either a PROGRAM_ID or --file, not both".to_string(),
            )),
            (None, Some(path)) => Ok(Command::File { path, json }),
            (Some(program_id), None) => Ok(Command::Program {
                program_id,
                rpc_url: cluster
                    .or(env_rpc_url.filter(|url| !url.trim().is_empty()))
                    .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
                json,
            }),
            (None, None) => Ok(Command::Help),
        }
    }
}

fn value_for(args: &[String], i: usize) -> ExtractorResult<String> {
    args.get(i + 1)
        .filter(|value| !value.starts_with('-'))
        .cloned()
        .ok_or_else(|| ExtractorError::InvalidInput(format!("Missing value for {}", args[i])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rpc_url_precedence() {
        let id = "BPFLoaderUpgradeab1e11111111111111111111111";

        let cmd = Command::parse(&args(&[id]), None).unwrap();
        assert_eq!(
            cmd,
            Command::Program { program_id: id.to_string(), rpc_url: DEFAULT_RPC_URL.to_string(), json: false }
        );

        let cmd = Command::parse(&args(&[id]), Some("http://env:8899".to_string())).unwrap();
        assert!(matches!(cmd, Command::Program { rpc_url, .. } if rpc_url == "http://env:8899"));

        let cmd = Command::parse(
            &args(&["--cluster", "http://flag:8899", id, "--json"]),
            Some("http://env:8899".to_string()),
        )
        .unwrap();
        assert!(matches!(cmd, Command::Program { rpc_url, json: true, .. } if rpc_url == "http://flag:8899"));
    }

    #[test]
    fn test_file_mode() {
        let cmd = Command::parse(&args(&["--file", "program.so"]), None).unwrap();
        assert_eq!(cmd, Command::File { path: PathBuf::from("program.so"), json: false });
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(Command::parse(&[], None).unwrap(), Command::Help);
        assert_eq!(Command::parse(&args(&["-v"]), None).unwrap(), Command::Version);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(Command::parse(&args(&["--cluster"]), None).is_err());
        assert!(Command::parse(&args(&["--bogus"]), None).is_err());
        assert!(Command::parse(&args(&["a", "b"]), None).is_err());
        assert!(Command::parse(&args(&["a", "--file", "x.so"]), None).is_err());
    }
}
