//! Process Configuration
//!
//! Settings are read once at startup. Every setting has a default, can be overridden by
//! an environment variable, and the command-line flag wins over both.

use crate::directory::service::ViewRange;

use anyhow::{Result, anyhow};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_STATS_INTERVAL_SECS: u64 = 30;

pub const ENV_BIND: &str = "STUDENT_DIR_BIND";
pub const ENV_VIEW_GT: &str = "STUDENT_DIR_VIEW_GT";
pub const ENV_VIEW_LT: &str = "STUDENT_DIR_VIEW_LT";
pub const ENV_STATS_INTERVAL: &str = "STUDENT_DIR_STATS_INTERVAL";
pub const ENV_LOG: &str = "STUDENT_DIR_LOG";

/// Raw command line of the `student-directory` binary.
#[derive(Debug, Parser)]
#[command(name = "student-directory", version, about = "In-memory student directory over HTTP")]
pub struct Args {
    /// Address the HTTP server listens on
    #[arg(long, env = ENV_BIND, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Exclusive lower bound of the ids served by /get-student
    #[arg(long, env = ENV_VIEW_GT, default_value_t = 0)]
    pub view_gt: u64,

    /// Exclusive upper bound of the ids served by /get-student
    #[arg(long, env = ENV_VIEW_LT, default_value_t = 3)]
    pub view_lt: u64,

    /// Seconds between stats log lines, 0 disables the reporter
    #[arg(long, env = ENV_STATS_INTERVAL, default_value_t = DEFAULT_STATS_INTERVAL_SECS)]
    pub stats_interval: u64,

    /// Maximum tracing level (error, warn, info, debug, trace)
    #[arg(long, env = ENV_LOG, default_value = "info")]
    pub log_level: tracing::Level,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Ids served by `GET /get-student/{id}`.
    pub view_range: ViewRange,
    /// Period of the stats reporter. `None` disables it.
    pub stats_interval: Option<Duration>,
    pub log_level: tracing::Level,
}

impl Config {
    /// Parses the process arguments and environment. Exits with usage on `--help` or bad flags.
    pub fn load() -> Result<Self> {
        Self::try_from(Args::parse())
    }
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let view_range = ViewRange::new(args.view_gt, args.view_lt).ok_or_else(|| {
            anyhow!(
                "View range ({}, {}) contains no ids",
                args.view_gt,
                args.view_lt
            )
        })?;

        let stats_interval = match args.stats_interval {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            bind_addr: args.bind,
            view_range,
            stats_interval,
            log_level: args.log_level,
        })
    }
}
