use clap::{Parser, ValueEnum};
use idsmoe_gateway::state::{DEFAULT_DATASET_BASE_URL, DEFAULT_HOMEPAGE_URL};
use idsmoe_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "IDSMOE_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "IDSMOE_GATEWAY_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "IDSMOE_GATEWAY_REDIS_URL";
pub const LOG_FORMAT_ENV: &str = "IDSMOE_GATEWAY_LOG_FORMAT";
pub const DATASET_BASE_URL_ENV: &str = "IDSMOE_GATEWAY_DATASET_BASE_URL";
pub const HOMEPAGE_URL_ENV: &str = "IDSMOE_GATEWAY_HOMEPAGE_URL";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "redis")]
    Redis,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::Redis => write!(f, "redis"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "idsmoe-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Key-value store backend. `in-memory` starts empty and is meant for
    /// local testing only.
    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Redis
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    #[arg(long, env = DATASET_BASE_URL_ENV, default_value = DEFAULT_DATASET_BASE_URL)]
    pub dataset_base_url: String,

    #[arg(long, env = HOMEPAGE_URL_ENV, default_value = DEFAULT_HOMEPAGE_URL)]
    pub homepage_url: String,
}
