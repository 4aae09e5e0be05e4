//! Runtime settings for the binaries.
//!
//! Values come from the environment first and can then be overridden by
//! `--flag value` command line arguments.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::input::pointer_mapping::Viewport;

pub const ENV_MIRRORED: &str = "DROP_CHESS_MIRRORED";
pub const ENV_LOG: &str = "DROP_CHESS_LOG";
pub const ENV_VIEWPORT: &str = "DROP_CHESS_VIEWPORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Draw the board from Black's side and flip pointer mapping with it.
    pub mirrored: bool,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    pub viewport: Viewport,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mirrored: false,
            log_filter: "info".to_owned(),
            viewport: Viewport::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> ChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(value) = lookup(ENV_MIRRORED) {
            settings.mirrored = parse_flag(ENV_MIRRORED, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG) {
            if !value.trim().is_empty() {
                settings.log_filter = value.trim().to_owned();
            }
        }
        if let Some(value) = lookup(ENV_VIEWPORT) {
            settings.viewport = Viewport::parse(&value)?;
        }
        Ok(settings)
    }

    /// Apply `--mirrored <bool>`, `--log <filter>` and `--viewport <WxH>`.
    /// Unrelated arguments are left for the caller.
    pub fn apply_args(mut self, args: &[String]) -> ChessResult<Self> {
        if let Some(value) = arg_value(args, "--mirrored") {
            self.mirrored = parse_flag("--mirrored", value)?;
        }
        if let Some(value) = arg_value(args, "--log") {
            self.log_filter = value.to_owned();
        }
        if let Some(value) = arg_value(args, "--viewport") {
            self.viewport = Viewport::parse(value)?;
        }
        Ok(self)
    }
}

/// Value following `flag` in `args`, if both are present.
pub fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag(name: &'static str, value: &str) -> ChessResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ChessErrors::InvalidSetting {
            name,
            value: value.to_owned(),
        }),
    }
}
