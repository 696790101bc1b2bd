use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Coaching context a chat session or request runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Interview,
    Resume,
    Questions,
}

impl ChatMode {
    pub const ALL: [ChatMode; 3] = [ChatMode::Interview, ChatMode::Resume, ChatMode::Questions];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Interview => "interview",
            ChatMode::Resume => "resume",
            ChatMode::Questions => "questions",
        }
    }
}

impl Default for ChatMode {
    fn default() -> Self {
        ChatMode::Interview
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Invalid chat mode: '{0}'")]
pub struct ParseChatModeError(String);

impl FromStr for ChatMode {
    type Err = ParseChatModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interview" => Ok(ChatMode::Interview),
            "resume" => Ok(ChatMode::Resume),
            "questions" => Ok(ChatMode::Questions),
            _ => Err(ParseChatModeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "bot")]
    Assistant,
}

/// How the client should render an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    Plain,
    StructuredResume,
    StructuredQuestions,
}

impl Default for ResponseKind {
    fn default() -> Self {
        ResponseKind::Plain
    }
}

/// Outline handed to the client when it should collect resume details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeOutline {
    pub sections: Vec<OutlineSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSection {
    pub title: String,
    #[serde(flatten)]
    pub detail: SectionDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionDetail {
    Fields(Vec<String>),
    Description(String),
}

impl OutlineSection {
    pub fn with_fields(title: &str, fields: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            detail: SectionDetail::Fields(fields.iter().map(|f| f.to_string()).collect()),
        }
    }

    pub fn with_description(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            detail: SectionDetail::Description(description.to_string()),
        }
    }
}

/// One entry of a conversation log. Fields are read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    content: String,
    role: Role,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    kind: ResponseKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    outline: Option<ResumeOutline>,
}

impl Message {
    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            role,
            timestamp: Utc::now(),
            kind: ResponseKind::Plain,
            suggestions: Vec::new(),
            outline: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    pub fn assistant<S: AsRef<str>>(content: impl Into<String>, suggestions: &[S]) -> Self {
        let mut message = Self::new(Role::Assistant, content.into());
        message.suggestions = suggestions
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        message
    }

    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_outline(mut self, outline: ResumeOutline) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn outline(&self) -> Option<&ResumeOutline> {
        self.outline.as_ref()
    }
}
