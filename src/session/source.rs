use async_trait::async_trait;

use crate::agent::CoachAgent;
use crate::error::CoachResult;
use crate::models::chat::{ ChatMode, Message };
use crate::responder;

/// Produces the assistant message answering one user message.
#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn reply(&self, mode: ChatMode, text: &str) -> CoachResult<Message>;
}

/// Answers from the canned keyword responder without leaving the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSource;

#[async_trait]
impl ReplySource for KeywordSource {
    async fn reply(&self, mode: ChatMode, text: &str) -> CoachResult<Message> {
        Ok(responder::respond(mode, text).into_message())
    }
}

/// Answers through the hosted model.
#[derive(Clone)]
pub struct AgentSource {
    agent: CoachAgent,
}

impl AgentSource {
    pub fn new(agent: CoachAgent) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl ReplySource for AgentSource {
    async fn reply(&self, mode: ChatMode, text: &str) -> CoachResult<Message> {
        let reply = self.agent.reply(mode, text).await?;
        Ok(Message::assistant(reply.text, &reply.suggestions))
    }
}
