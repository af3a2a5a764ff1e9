//! Command-line settings.
//!
//! The host engine starts the adapter with whatever arguments it was given.
//! Parsing stops quietly at the first argument this crate does not know, and
//! any flag not seen by then keeps its default.

use clap::Parser;

pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 64 * 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "sssp_adapter=info";

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "sssp-adapter",
    about = "SSSP vertex program for a gather-apply-scatter engine",
    ignore_errors = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Largest request body accepted, in bytes.
    #[arg(long)]
    max_message_bytes: Option<usize>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[arg(long = "log")]
    log_filter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Largest request body accepted.
    pub max_message_bytes: usize,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// `args[0]` is the program name.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Args::try_parse_from(args).unwrap_or_default();
        let defaults = Self::default();
        Self {
            max_message_bytes: args.max_message_bytes.unwrap_or(defaults.max_message_bytes),
            log_filter: args.log_filter.unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::from_args(["sssp-adapter"]);
        assert_eq!(cfg.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::from_args([
            "sssp-adapter",
            "--max-message-bytes",
            "4096",
            "--log",
            "debug",
        ]);
        assert_eq!(cfg.max_message_bytes, 4096);
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn engine_args_after_flags_are_ignored() {
        let cfg = Config::from_args([
            "sssp-adapter",
            "--log",
            "trace",
            "--engine-opt",
            "x",
            "graph.tsv",
        ]);
        assert_eq!(cfg.log_filter, "trace");
        assert_eq!(cfg.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
    }

    #[test]
    fn unknown_only_args_give_defaults() {
        let cfg = Config::from_args(["sssp-adapter", "--help", "--ncpus", "4"]);
        assert_eq!(cfg.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn bad_number_falls_back() {
        let cfg = Config::from_args(["sssp-adapter", "--max-message-bytes", "lots"]);
        assert_eq!(cfg.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
    }
}
