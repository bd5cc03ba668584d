//! Default values shared by the configuration types and the CLI.

/// Matching preset used when none is configured.
pub const DEFAULT_PRESET: &str = "balanced";

/// Chat-completion model for LLM name generation.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI-compatible chat-completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// HTTP timeout for LLM name generation, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
