use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tinylink_gateway::telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "TINYLINK_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "TINYLINK_GATEWAY_PUBLIC_BASE_URL";
pub const MAX_RETRIES_ENV: &str = "TINYLINK_SHORTENER_MAX_RETRIES";
pub const DIGEST_SEED_ENV: &str = "TINYLINK_ENCODER_DIGEST_SEED";
pub const STORAGE_BACKEND_ENV: &str = "TINYLINK_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "TINYLINK_MYSQL_DSN";
pub const LOG_FORMAT_ENV: &str = "TINYLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinylink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix of every `short_url` in responses.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    /// Retries after the first colliding candidate.
    #[arg(
        long,
        env = MAX_RETRIES_ENV,
        default_value_t = tinylink_shortener::DEFAULT_MAX_RETRIES,
    )]
    pub max_retries: u32,

    /// XXH3 seed for code derivation. Changing it changes every future code.
    #[arg(
        long,
        env = DIGEST_SEED_ENV,
        default_value_t = tinylink_encoder::hash::DEFAULT_DIGEST_SEED,
    )]
    pub digest_seed: u64,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
