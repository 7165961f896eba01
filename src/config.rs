/*!
 * Configuration handling for Monofile
 */

use std::io;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::context::DEFAULT_CONTEXT_BUDGET;

/// Command-line arguments for Monofile
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "monofile",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten codebases into a single deterministic document for LLM context",
    long_about = "Ingests loose files, directory trees and ZIP archives, filters out binary and dependency noise, and flattens every remaining text file into one annotated document suitable as context for Large Language Models (LLMs)."
)]
pub struct Args {
    /// Files, directories or ZIP archives to process
    #[clap(default_value = ".")]
    pub inputs: Vec<String>,

    /// Output file name for the flattened document
    #[clap(short, long, default_value = "monofile_codebase.txt")]
    pub output: String,

    /// Comma-separated list of patterns to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Comma-separated list of patterns to include (if specified, only matching files are included)
    #[clap(long, value_delimiter = ',')]
    pub include_patterns: Vec<String>,

    /// Number of threads to use for processing
    #[clap(long, default_value = "4")]
    pub threads: usize,

    /// Print statistics as JSON instead of the console report
    #[clap(long)]
    pub json: bool,

    /// Also write the AI context payload (structure plus truncated document) to this file
    #[clap(long, value_name = "FILE")]
    pub context_file: Option<String>,

    /// Character budget for the context payload
    #[clap(long, default_value_t = DEFAULT_CONTEXT_BUDGET)]
    pub max_context_chars: usize,

    /// Skip saving the session bundle after a successful run
    #[clap(long)]
    pub no_session: bool,

    /// Present the previously saved session and exit
    #[clap(long)]
    pub restore: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Inputs to process
    pub inputs: Vec<PathBuf>,

    /// Output file path for the flattened document
    pub output_file: PathBuf,

    /// Patterns to ignore
    pub ignore_patterns: Vec<String>,

    /// Patterns to include (if empty, include all)
    pub include_patterns: Vec<String>,

    /// Number of threads to use for processing
    pub num_threads: usize,

    /// Whether to print statistics as JSON instead of the console report
    pub emit_json: bool,

    /// Optional path for the AI context payload
    pub context_file: Option<PathBuf>,

    /// Character budget for the context payload
    pub max_context_chars: usize,

    /// Whether to save the session bundle after a successful run
    pub save_session: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            inputs: args.inputs.iter().map(PathBuf::from).collect(),
            output_file: PathBuf::from(args.output),
            ignore_patterns: args.ignore_patterns,
            include_patterns: args.include_patterns,
            num_threads: args.threads,
            emit_json: args.json,
            context_file: args.context_file.map(PathBuf::from),
            max_context_chars: args.max_context_chars,
            save_session: !args.no_session,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> io::Result<()> {
        // Check that every input exists; readers only see paths we hand them
        for input in &self.inputs {
            if !input.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Input not found: {}", input.display()),
                ));
            }
        }

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != PathBuf::from("") {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Output directory not found: {}", parent.display()),
                ));
            }
        }

        if let Some(context_file) = &self.context_file {
            if let Some(parent) = context_file.parent() {
                if !parent.exists() && parent != PathBuf::from("") {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("Context output directory not found: {}", parent.display()),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            inputs: vec![PathBuf::from(".")],
            output_file: PathBuf::from("monofile_codebase.txt"),
            ignore_patterns: vec![],
            include_patterns: vec![],
            num_threads: 4,
            emit_json: false,
            context_file: None,
            max_context_chars: DEFAULT_CONTEXT_BUDGET,
            save_session: true,
        }
    }

    #[test]
    fn test_validate_accepts_current_directory() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let mut config = base_config();
        config.inputs.push(PathBuf::from("definitely/not/here"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_output_directory() {
        let mut config = base_config();
        config.output_file = PathBuf::from("no/such/dir/out.txt");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_args_inverts_no_session() {
        let args = Args::parse_from(["monofile", "--no-session"]);
        let config = Config::from_args(args);
        assert!(!config.save_session);
        assert_eq!(config.output_file, PathBuf::from("monofile_codebase.txt"));
        assert_eq!(config.inputs, vec![PathBuf::from(".")]);
    }

    #[test]
    fn test_pattern_lists_split_on_commas() {
        let args = Args::parse_from(["monofile", "--ignore-patterns", "*.log,*.tmp"]);
        let config = Config::from_args(args);
        assert_eq!(config.ignore_patterns, vec!["*.log", "*.tmp"]);
    }
}
