/// Configuration key read by the processor
pub const OUTPUT_KEY: &str = "output";
/// Value returned when no string output is configured
pub const FALLBACK_OUTPUT: &str = "default";
/// Environment variables with this prefix become configuration keys
pub const ENV_PREFIX: &str = "DATA_PROCESSOR_";
/// Default timeout for remote content retrieval (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "data_processor=info";
