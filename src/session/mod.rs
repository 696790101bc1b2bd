//! Per-widget conversation state.
//!
//! A `ChatSession` owns an append-only message log, the active mode and the
//! widget's open/minimized flags. Sending a message appends the user entry
//! right away and hands back a `PendingReply` that borrows nothing from the
//! session; once resolved, the reply is appended with `deliver`.

mod delay;
mod source;

pub use delay::{ FixedDelay, NoDelay, ReplyDelay };
pub use source::{ AgentSource, KeywordSource, ReplySource };

use log::error;

use crate::models::chat::{ ChatMode, Message, Role };
use crate::responder::{ mode_greeting, welcome };

pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub open: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    mode: ChatMode,
    log: Vec<Message>,
    visibility: Visibility,
    pending: usize,
}

/// A sent message waiting for its answer. Keeps the mode it was sent in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    mode: ChatMode,
    text: String,
}

impl PendingReply {
    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Waits out `delay`, then asks `source`. Source failures become the apology message.
    pub async fn resolve(self, source: &dyn ReplySource, delay: &dyn ReplyDelay) -> Message {
        delay.wait().await;
        match source.reply(self.mode, &self.text).await {
            Ok(message) => message,
            Err(e) => {
                error!("Error generating {} reply: {}", self.mode, e);
                Message::assistant::<&str>(APOLOGY, &[])
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ChatMode::default())
    }
}

impl ChatSession {
    pub fn new(mode: ChatMode) -> Self {
        Self {
            mode,
            log: vec![welcome().into_message()],
            visibility: Visibility::default(),
            pending: 0,
        }
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn toggle_open(&mut self) {
        self.visibility.open = !self.visibility.open;
        self.visibility.minimized = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.visibility.minimized = !self.visibility.minimized;
    }

    fn push(&mut self, message: Message) -> &Message {
        self.log.push(message);
        &self.log[self.log.len() - 1]
    }

    /// Enters `mode` and appends its greeting. Earlier messages are left as they were.
    pub fn switch_mode(&mut self, mode: ChatMode) -> &Message {
        self.mode = mode;
        self.push(mode_greeting(mode).into_message())
    }

    /// Appends `text` as a user message. Blank input is dropped.
    pub fn send(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Message::user(text));
        self.pending += 1;
        Some(PendingReply {
            mode: self.mode,
            text: text.to_string(),
        })
    }

    /// Re-sends the `index`-th suggestion of the latest assistant message.
    pub fn pick_suggestion(&mut self, index: usize) -> Option<PendingReply> {
        let suggestion = self.log
            .iter()
            .rev()
            .find(|m| m.role() == Role::Assistant)
            .and_then(|m| m.suggestions().get(index))
            .cloned()?;
        self.send(&suggestion)
    }

    pub fn deliver(&mut self, reply: Message) -> &Message {
        self.pending = self.pending.saturating_sub(1);
        self.push(reply)
    }

    /// Sends `text` and appends the resolved reply in one step.
    pub async fn send_and_wait(
        &mut self,
        text: &str,
        source: &dyn ReplySource,
        delay: &dyn ReplyDelay
    ) -> Option<&Message> {
        let pending = self.send(text)?;
        let reply = pending.resolve(source, delay).await;
        Some(self.deliver(reply))
    }
}
