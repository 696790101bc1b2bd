use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;

use crate::cli::Args;
use crate::config::prompt::{ self, PromptConfig, ResumeSection, SUGGESTIONS_HEADING };
use crate::error::{ CoachError, CoachResult };
use crate::llm::LlmConfig;
use crate::llm::chat::{ ChatClient, CompletionRequest, new_client as new_chat_client };
use crate::models::api::{
    ChatResponse,
    IncomingMessage,
    QuestionsRequest,
    QuestionsResponse,
    ReplyType,
    ResumeRequest,
    ResumeResponse,
};
use crate::models::chat::ChatMode;

const MAX_SUGGESTIONS: usize = 3;

/// Model text for a chat turn with the follow-ups that go under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub suggestions: Vec<String>,
}

/// Turns coaching requests into one completion call each.
#[derive(Clone)]
pub struct CoachAgent {
    chat_client: Arc<dyn ChatClient>,
    prompt_config: Arc<PromptConfig>,
}

impl CoachAgent {
    pub fn new(chat_client: Arc<dyn ChatClient>, prompt_config: Arc<PromptConfig>) -> Self {
        Self { chat_client, prompt_config }
    }

    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let chat_config = LlmConfig {
            llm_type: args.chat_llm_type.parse()?,
            base_url: args.chat_base_url.clone(),
            api_key: Some(args.chat_api_key.clone()).filter(|k| !k.is_empty()),
            completion_model: args.chat_model.clone(),
        };
        let chat_client = new_chat_client(&chat_config)?;
        info!(
            "Chat client configured: Type={}, Model={}, BaseURL={}",
            chat_config.llm_type,
            chat_client.get_model(),
            chat_client.get_base_url().as_deref().unwrap_or("adapter default")
        );

        let prompt_config = match &args.prompts_path {
            Some(path) => prompt::load_prompts(path)?,
            None => {
                info!("No prompts file configured, using built-in prompts");
                Arc::new(PromptConfig::default())
            }
        };

        Ok(Self::new(chat_client, prompt_config))
    }

    async fn complete(&self, request: &CompletionRequest) -> CoachResult<String> {
        let response = self.chat_client.complete(request).await.map_err(CoachError::Upstream)?;
        Ok(response.response)
    }

    /// Answers `message` in `mode`. Suggestions come from the model's own
    /// follow-up block when it wrote one, else from the mode's fixed list.
    pub async fn reply(&self, mode: ChatMode, message: &str) -> CoachResult<ChatReply> {
        let request = prompt::chat_prompt(&self.prompt_config, mode, message)?;
        let text = self.complete(&request).await?;
        let (body, suggestions) = split_suggestions(&text);

        let suggestions = if suggestions.is_empty() {
            default_chat_suggestions(mode)
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            suggestions
        };

        Ok(ChatReply { text: body, suggestions })
    }

    pub async fn chat(
        &self,
        mode: ChatMode,
        messages: &[IncomingMessage]
    ) -> CoachResult<ChatResponse> {
        let last = messages.last().ok_or(CoachError::EmptyConversation)?;
        let reply = self.reply(mode, &last.content).await?;

        Ok(ChatResponse {
            response: reply.text,
            suggestions: reply.suggestions,
            reply_type: ReplyType::Text,
        })
    }

    pub async fn questions(&self, req: &QuestionsRequest) -> CoachResult<QuestionsResponse> {
        let request = prompt::questions_prompt(&self.prompt_config, req)?;
        let text = self.complete(&request).await?;

        Ok(QuestionsResponse {
            questions: text,
            related_questions: related_questions(&req.question_type)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }

    pub async fn resume(&self, req: &ResumeRequest) -> CoachResult<ResumeResponse> {
        let section = ResumeSection::from_name(req.section.as_deref());
        let request = prompt::resume_prompt(&self.prompt_config, section, &req.resume_data)?;
        let text = self.complete(&request).await?;

        Ok(ResumeResponse {
            resume_content: text,
            suggestions: resume_suggestions(section)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            section: req.section.clone(),
        })
    }
}

pub fn default_chat_suggestions(mode: ChatMode) -> &'static [&'static str] {
    match mode {
        ChatMode::Interview =>
            &[
                "How to answer 'Tell me about yourself'",
                "Common behavioral questions",
                "How to discuss salary expectations",
            ],
        ChatMode::Resume =>
            &[
                "Help with my professional summary",
                "How to highlight achievements",
                "Best format for my resume",
            ],
        ChatMode::Questions =>
            &[
                "Questions for software engineers",
                "Behavioral interview questions",
                "Questions about leadership experience",
            ],
    }
}

pub fn related_questions(question_type: &str) -> &'static [&'static str] {
    match question_type.trim().to_lowercase().as_str() {
        "behavioral" =>
            &[
                "Tell me about a time you faced a challenge at work",
                "Describe a situation where you showed leadership",
                "Give an example of how you handled a conflict with a colleague",
            ],
        "technical" =>
            &[
                "Explain your approach to problem-solving",
                "How do you stay updated with industry trends?",
                "Describe a complex technical problem you solved",
            ],
        "situational" =>
            &[
                "How would you handle a disagreement with your manager?",
                "What would you do if you were assigned a task outside your expertise?",
                "How would you prioritize multiple urgent tasks?",
            ],
        _ => &[],
    }
}

pub fn resume_suggestions(section: ResumeSection) -> &'static [&'static str] {
    match section {
        ResumeSection::Summary =>
            &[
                "Make it more achievement-focused",
                "Tailor it for a specific industry",
                "Make it more concise",
            ],
        ResumeSection::Experience =>
            &[
                "Add more metrics and results",
                "Use stronger action verbs",
                "Focus more on achievements than responsibilities",
            ],
        ResumeSection::Skills =>
            &[
                "Add more technical skills",
                "Organize by proficiency level",
                "Add industry-specific keywords",
            ],
        ResumeSection::Full => &[],
    }
}

fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim();
    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest);
        }
    }
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return Some(rest);
        }
    }
    None
}

/// Splits a trailing "Follow-up suggestions:" block off `text`.
///
/// Returns the text before the block and up to three cleaned-up bullet
/// entries. Text without a block (or with a heading but no bullets) comes
/// back trimmed and with no suggestions.
pub fn split_suggestions(text: &str) -> (String, Vec<String>) {
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lowered = text.to_ascii_lowercase();
    let heading = SUGGESTIONS_HEADING.to_ascii_lowercase();
    let Some(found) = lowered.rfind(&heading) else {
        return (text.trim().to_string(), Vec::new());
    };

    let line_start = text[..found].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let after_heading = &text[found + heading.len()..];
    let list_start = after_heading.find('\n').map(|i| i + 1).unwrap_or(after_heading.len());

    let mut suggestions = Vec::new();
    for line in after_heading[list_start..].lines() {
        if line.trim().is_empty() {
            continue;
        }
        match strip_bullet(line) {
            Some(entry) => {
                let entry = entry
                    .trim()
                    .trim_matches(|c| c == '"' || c == '*')
                    .trim();
                if !entry.is_empty() {
                    suggestions.push(entry.to_string());
                }
            }
            None => {
                break;
            }
        }
    }

    if suggestions.is_empty() {
        warn!("Model wrote a suggestions heading without any entries");
        return (text.trim().to_string(), Vec::new());
    }
    suggestions.truncate(MAX_SUGGESTIONS);

    (text[..line_start].trim().to_string(), suggestions)
}
