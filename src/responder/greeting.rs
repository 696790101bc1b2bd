use crate::models::chat::{ ChatMode, Message };

const WELCOME: &str =
    "Hello! I'm your AI career coach. How can I help you today? I can assist with interview preparation, resume building, or answer HR questions.";

const WELCOME_SUGGESTIONS: &[&str] = &[
    "Help me prepare for an interview",
    "I need help with my resume",
    "What are common HR questions?",
];

/// Greeting posted when a session enters a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub content: &'static str,
    pub suggestions: &'static [&'static str],
}

impl Greeting {
    pub fn into_message(self) -> Message {
        Message::assistant(self.content, self.suggestions)
    }
}

pub fn welcome() -> Greeting {
    Greeting {
        content: WELCOME,
        suggestions: WELCOME_SUGGESTIONS,
    }
}

pub fn mode_greeting(mode: ChatMode) -> Greeting {
    match mode {
        ChatMode::Interview =>
            Greeting {
                content: "I'm now in interview preparation mode. What type of interview are you preparing for? I can help with behavioral, technical, or general interview questions.",
                suggestions: &[
                    "Prepare for a behavioral interview",
                    "Help with technical interview questions",
                    "How to answer 'Tell me about yourself'",
                ],
            },
        ChatMode::Resume =>
            Greeting {
                content: "I'm now in resume building mode. I can help you craft a professional resume. Would you like help with your summary, work experience, skills section, or formatting?",
                suggestions: &[
                    "Help me write a professional summary",
                    "How to list my work experience",
                    "Tips for formatting my resume",
                ],
            },
        ChatMode::Questions =>
            Greeting {
                content: "I'm now in HR questions mode. I can provide common HR questions and sample answers. What type of position are you applying for?",
                suggestions: &[
                    "Common HR questions for software engineers",
                    "How to answer salary expectations",
                    "Questions about work-life balance",
                ],
            },
    }
}
