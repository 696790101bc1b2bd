pub mod chat;

use clap::{ Parser, Subcommand };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    // --- Chat LLM Provider Args ---
    /// Type of LLM provider for chat completion (openai, ollama)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "openai", global = true)]
    pub chat_llm_type: String,

    /// Base URL for the Chat LLM provider API (e.g., http://localhost:11434 for Ollama)
    #[arg(long, env = "CHAT_BASE_URL", global = true)] // No default, let adapters handle defaults if None
    pub chat_base_url: Option<String>,

    /// API Key for the Chat LLM provider (required for OpenAI)
    #[arg(long, env = "CHAT_API_KEY", default_value = "", hide_env_values = true, global = true)]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., gpt-4o, llama3)
    #[arg(long, env = "CHAT_MODEL", global = true)] // No default, rely on adapter defaults if None
    pub chat_model: Option<String>,

    // --- General App Args ---
    /// Optional JSON file overriding built-in system prompts and templates.
    #[arg(long, env = "PROMPTS_PATH", global = true)]
    pub prompts_path: Option<String>,

    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API (default).
    Serve,
    /// Chat with the coach in the terminal.
    Chat(ChatArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ChatArgs {
    /// Starting mode (interview, resume, questions).
    #[arg(long, default_value = "interview")]
    pub mode: String,

    /// Send messages to the configured model instead of the canned responder.
    #[arg(long, default_value = "false")]
    pub remote: bool,

    /// Simulated thinking time before canned replies, in milliseconds.
    #[arg(long, env = "REPLY_DELAY_MS", default_value = "1500")]
    pub reply_delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_implied_without_subcommand() {
        let args = Args::try_parse_from(["job-coach", "--server-addr", "0.0.0.0:8080"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.server_addr, "0.0.0.0:8080");
    }

    #[test]
    fn chat_subcommand_takes_global_provider_flags() {
        let args = Args::try_parse_from([
            "job-coach",
            "chat",
            "--mode",
            "resume",
            "--remote",
            "--chat-llm-type",
            "ollama",
        ]).unwrap();
        assert_eq!(args.chat_llm_type, "ollama");
        match args.command {
            Some(Command::Chat(chat)) => {
                assert_eq!(chat.mode, "resume");
                assert!(chat.remote);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
