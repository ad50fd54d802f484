use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use menulens_core::domain::common::{LLMConfig, MenulensConfig, ObjectStorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "menulens", version, about = "Menu FODMAP analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub object_storage: ObjectStorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-tls-cert", env = "SERVER_TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "server-tls-key", env = "SERVER_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = "gpt-4o")]
    pub model: String,

    /// Output-token budget of one menu analysis
    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 2000)]
    pub max_tokens: u32,

    #[arg(
        long = "llm-base-url",
        env = "LLM_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ObjectStorageArgs {
    #[arg(
        long = "object-storage-endpoint",
        env = "OBJECT_STORAGE_ENDPOINT",
        default_value = "http://localhost:9000"
    )]
    pub endpoint: String,

    #[arg(
        long = "object-storage-region",
        env = "OBJECT_STORAGE_REGION",
        default_value = "us-east-1"
    )]
    pub region: String,

    #[arg(long = "object-storage-access-key", env = "OBJECT_STORAGE_ACCESS_KEY")]
    pub access_key: String,

    #[arg(
        long = "object-storage-secret-key",
        env = "OBJECT_STORAGE_SECRET_KEY",
        hide_env_values = true
    )]
    pub secret_key: String,

    #[arg(
        long = "object-storage-bucket",
        env = "OBJECT_STORAGE_BUCKET",
        default_value = "menus"
    )]
    pub bucket: String,

    /// Base URL under which uploaded objects are publicly readable
    #[arg(
        long = "object-storage-public-url",
        env = "OBJECT_STORAGE_PUBLIC_URL",
        default_value = "http://localhost:9000"
    )]
    pub public_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for MenulensConfig {
    fn from(args: Args) -> Self {
        MenulensConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                model: args.llm.model,
                max_tokens: args.llm.max_tokens,
                base_url: args.llm.base_url,
                timeout_secs: args.llm.timeout_secs,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.object_storage.endpoint,
                region: args.object_storage.region,
                access_key: args.object_storage.access_key,
                secret_key: args.object_storage.secret_key,
                bucket: args.object_storage.bucket,
                public_url: args.object_storage.public_url,
            },
        }
    }
}
