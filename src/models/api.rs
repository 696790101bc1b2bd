use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value;

use super::chat::ChatMode;

#[derive(Deserialize, Debug, Clone)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
    pub mode: ChatMode,
}

/// Only the text of client-side messages matters to the server.
#[derive(Deserialize, Debug, Clone)]
pub struct IncomingMessage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplyType {
    Text,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
    #[serde(rename = "type")]
    pub reply_type: ReplyType,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub question_type: String,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub specific_question: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: String,
    pub related_questions: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    #[serde(default)]
    pub resume_data: ResumeData,
    #[serde(default)]
    pub section: Option<String>,
}

/// Union of the form fields every resume section can send. Absent fields stay empty.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub current_position: String,
    #[serde(deserialize_with = "lenient_text")]
    pub years_experience: String,
    #[serde(deserialize_with = "lenient_text")]
    pub industry: String,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub achievements: String,
    #[serde(deserialize_with = "lenient_text")]
    pub target_position: String,
    #[serde(deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_text")]
    pub responsibilities: String,
    #[serde(deserialize_with = "lenient_list")]
    pub technical_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub soft_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub keywords: String,
    #[serde(deserialize_with = "lenient_text")]
    pub education: String,
    #[serde(deserialize_with = "lenient_text")]
    pub work_history: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub resume_content: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

// Form fields arrive as strings, numbers or arrays depending on the client.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error> where D: Deserializer<'de> {
    let value = Value::deserialize(deserializer)?;
    Ok(render_value(&value))
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de>
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(render_value(&other)),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where D: Deserializer<'de>
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(render_value).collect(),
        other => {
            let text = render_value(&other);
            if text.is_empty() { Vec::new() } else { vec![text] }
        }
    })
}
