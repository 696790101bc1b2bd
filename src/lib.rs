pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod responder;
pub mod server;
pub mod session;

use agent::CoachAgent;
use cli::{ Args, Command };
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Chat LLM Type: {}", args.chat_llm_type);
    info!("Chat Base URL: {}", args.chat_base_url.as_deref().unwrap_or("<default>"));
    info!("Chat Model: {}", args.chat_model.as_deref().unwrap_or("<default>"));
    info!("Prompts Path: {}", args.prompts_path.as_deref().unwrap_or("<built-in>"));
    info!("-------------------------");

    match args.command.clone() {
        Some(Command::Chat(chat)) => cli::chat::run(&args, &chat).await,
        Some(Command::Serve) | None => {
            info!("Server Address: {}", args.server_addr);
            info!("TLS Enabled: {}", args.enable_tls);
            let agent = CoachAgent::from_args(&args)?;
            let server = Server::new(args.server_addr.clone(), agent, args);
            server.run().await
        }
    }
}
