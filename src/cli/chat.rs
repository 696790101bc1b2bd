use log::info;
use std::error::Error;
use tokio::io::{ AsyncBufReadExt, BufReader };

use super::{ Args, ChatArgs };
use crate::agent::CoachAgent;
use crate::models::chat::{ ChatMode, Message, Role };
use crate::session::{
    AgentSource,
    ChatSession,
    FixedDelay,
    KeywordSource,
    NoDelay,
    PendingReply,
    ReplyDelay,
    ReplySource,
};

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Help,
    Mode(ChatMode),
    Pick(usize),
    Text(String),
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Input::Text(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "exit"), _) => Input::Quit,
        (Some("help"), _) => Input::Help,
        (Some("mode"), Some(name)) =>
            match name.parse() {
                Ok(mode) => Input::Mode(mode),
                Err(e) => Input::Invalid(e.to_string()),
            }
        (Some("mode"), None) => Input::Invalid("Usage: /mode interview|resume|questions".into()),
        (Some(n), None) =>
            match n.parse::<usize>() {
                Ok(i) if i > 0 => Input::Pick(i - 1),
                _ => Input::Invalid(format!("Unknown command: /{}", command)),
            }
        _ => Input::Invalid(format!("Unknown command: /{}", command)),
    }
}

fn render(message: &Message) {
    let speaker = match message.role() {
        Role::User => "You",
        Role::Assistant => "Coach",
    };
    println!("\n{}: {}", speaker, message.content());
    if let Some(outline) = message.outline() {
        for section in &outline.sections {
            println!("  [{}]", section.title);
        }
    }
    for (i, suggestion) in message.suggestions().iter().enumerate() {
        println!("  /{} {}", i + 1, suggestion);
    }
}

fn print_help() {
    println!("Type a message, /<n> to pick a suggestion, /mode <name> to switch, /quit to leave.");
}

async fn answer(
    session: &mut ChatSession,
    pending: PendingReply,
    source: &dyn ReplySource,
    delay: &dyn ReplyDelay
) {
    if let Some(sent) = session.messages().last() {
        render(sent);
    }
    let reply = pending.resolve(source, delay).await;
    render(session.deliver(reply));
}

pub async fn run(args: &Args, chat: &ChatArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mode: ChatMode = chat.mode.parse()?;
    let (source, delay): (Box<dyn ReplySource>, Box<dyn ReplyDelay>) = if chat.remote {
        let agent = CoachAgent::from_args(args)?;
        (Box::new(AgentSource::new(agent)), Box::new(NoDelay))
    } else {
        (Box::new(KeywordSource), Box::new(FixedDelay::from_millis(chat.reply_delay_ms)))
    };
    info!("Starting terminal chat in {} mode (remote: {})", mode, chat.remote);

    let mut session = ChatSession::new(mode);
    session.toggle_open();
    render(&session.messages()[0]);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Quit => {
                break;
            }
            Input::Help => print_help(),
            Input::Mode(mode) => render(session.switch_mode(mode)),
            Input::Pick(index) =>
                match session.pick_suggestion(index) {
                    Some(pending) =>
                        answer(&mut session, pending, source.as_ref(), delay.as_ref()).await,
                    None => println!("No suggestion #{}", index + 1),
                }
            Input::Text(text) => {
                if let Some(pending) = session.send(&text) {
                    answer(&mut session, pending, source.as_ref(), delay.as_ref()).await;
                }
            }
            Input::Invalid(message) => println!("{}", message),
        }
    }

    info!("Chat ended after {} messages", session.len());
    Ok(())
}
