use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use log::info;

use crate::error::{ CoachError, CoachResult };
use crate::llm::chat::CompletionRequest;
use crate::models::api::{ QuestionsRequest, ResumeData };
use crate::models::chat::ChatMode;

/// Heading the chat instruction asks the model to put before its follow-up list.
pub const SUGGESTIONS_HEADING: &str = "Follow-up suggestions:";

const CHAT_INTERVIEW_SYSTEM: &str =
    "You are an expert interview coach specializing in job interview preparation. Provide detailed, actionable advice for job interviews, including sample answers, preparation tips, and feedback on user responses. Include specific examples and frameworks for answering common interview questions. When appropriate, suggest follow-up questions or topics the user might want to explore.";

const CHAT_RESUME_SYSTEM: &str =
    "You are a professional resume writer with 15+ years of experience. Help users create and improve their resumes with specific, actionable advice tailored to their industry and experience level. Provide templates, examples, and formatting guidance. Suggest specific wording for resume sections and help users highlight their achievements effectively. When possible, include metrics and quantifiable results in your suggestions.";

const CHAT_QUESTIONS_SYSTEM: &str =
    "You are an HR expert with extensive experience in interviewing candidates across various industries. Provide common interview questions and detailed sample answers that will help the user prepare for job interviews. Include behavioral, technical, and situational questions relevant to the user's field. For each question, provide a framework for structuring an effective answer and include specific examples.";

const CHAT_SUGGESTION_INSTRUCTION: &str =
    "Finish every reply with a line reading \"{heading}\" followed by up to three short follow-up prompts the user could send next, one per line, each starting with \"- \".";

const QUESTIONS_SYSTEM: &str =
    "You are an HR expert with extensive experience in interviewing candidates. Provide detailed, industry-specific interview questions and sample answers. Your answers should be structured, concise, and follow best practices for interview responses. Include the STAR method (Situation, Task, Action, Result) where appropriate.";

const RESUME_SYSTEM: &str =
    "You are a professional resume writer with expertise in creating compelling, ATS-friendly resumes that highlight candidates' strengths and achievements. You specialize in creating content that is concise, achievement-focused, and tailored to specific industries and positions.";

const SPECIFIC_QUESTION_TEMPLATE: &str =
    "Provide a detailed answer framework for the following interview question:
\"{specific_question}\"

For a {position} position in the {industry} industry.

Include:
1. A structure for answering this question effectively
2. Key points to include in the answer
3. A sample answer using the STAR method (if applicable)
4. Common mistakes to avoid
5. Follow-up questions the interviewer might ask";

const QUESTION_SET_TEMPLATE: &str =
    "Generate {question_type} interview questions and detailed sample answers for a {position} position in the {industry} industry.

Include:
1. 5 common {question_type} questions for this role
2. For each question:
   - Why interviewers ask this question
   - Key points to include in your answer
   - A detailed sample answer using the STAR method (if applicable)
   - Common mistakes to avoid
3. Tips for how to prepare for these types of questions";

const RESUME_SUMMARY_TEMPLATE: &str =
    "Generate a professional summary for a resume based on the following information:

Name: {name}
Current Position: {current_position}
Years of Experience: {years_experience}
Industry: {industry}
Key Skills: {skills}
Career Achievements: {achievements}
Target Position: {target_position}

Create a compelling, concise professional summary (3-5 sentences) that highlights their experience, skills, and value proposition. Tailor it for the target position.";

const RESUME_EXPERIENCE_TEMPLATE: &str =
    "Generate professional work experience bullet points based on the following information:

Position: {position}
Company: {company}
Duration: {duration}
Responsibilities: {responsibilities}
Achievements: {achievements}
Target Position: {target_position}

Create 4-5 achievement-focused bullet points that start with strong action verbs. Include metrics and quantifiable results where possible. Tailor the content to be relevant for the target position.";

const RESUME_SKILLS_TEMPLATE: &str =
    "Generate a skills section for a resume based on the following information:

Technical Skills: {technical_skills}
Soft Skills: {soft_skills}
Industry: {industry}
Target Position: {target_position}
Job Description Keywords: {keywords}

Organize the skills by category and prioritize those most relevant to the target position. Include both technical and soft skills.";

const RESUME_FULL_TEMPLATE: &str =
    "Generate professional resume content based on the following information:

Name: {name}
Current Position: {current_position}
Years of Experience: {years_experience}
Skills: {skills}
Education: {education}
Work History: {work_history}

Please provide a complete resume including professional summary, work experience with achievement-focused bullet points, skills section, and education. Format it professionally.";

/// Resume section a `/api/resume` request asks for. Unknown names get the full resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeSection {
    Summary,
    Experience,
    Skills,
    Full,
}

impl ResumeSection {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("summary") => ResumeSection::Summary,
            Some("experience") => ResumeSection::Experience,
            Some("skills") => ResumeSection::Skills,
            _ => ResumeSection::Full,
        }
    }

    fn template_key(&self) -> &'static str {
        match self {
            ResumeSection::Summary => "resume_summary",
            ResumeSection::Experience => "resume_experience",
            ResumeSection::Skills => "resume_skills",
            ResumeSection::Full => "resume_full",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub system_prompts: HashMap<String, String>,
    pub templates: HashMap<String, String>,
}

/// Shape of a prompt file: any subset of the built-in keys.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PromptOverrides {
    pub system_prompts: HashMap<String, String>,
    pub templates: HashMap<String, String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        let system_prompts = [
            ("chat_interview", CHAT_INTERVIEW_SYSTEM),
            ("chat_resume", CHAT_RESUME_SYSTEM),
            ("chat_questions", CHAT_QUESTIONS_SYSTEM),
            ("chat_suggestions", CHAT_SUGGESTION_INSTRUCTION),
            ("questions", QUESTIONS_SYSTEM),
            ("resume", RESUME_SYSTEM),
        ];
        let templates = [
            ("specific_question", SPECIFIC_QUESTION_TEMPLATE),
            ("question_set", QUESTION_SET_TEMPLATE),
            ("resume_summary", RESUME_SUMMARY_TEMPLATE),
            ("resume_experience", RESUME_EXPERIENCE_TEMPLATE),
            ("resume_skills", RESUME_SKILLS_TEMPLATE),
            ("resume_full", RESUME_FULL_TEMPLATE),
        ];

        Self {
            system_prompts: to_map(&system_prompts),
            templates: to_map(&templates),
        }
    }
}

fn to_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl PromptConfig {
    /// Keys missing from `overrides` keep their current value.
    pub fn merge(mut self, overrides: PromptOverrides) -> Self {
        self.system_prompts.extend(overrides.system_prompts);
        self.templates.extend(overrides.templates);
        self
    }

    fn system(&self, key: &str) -> CoachResult<&str> {
        self.system_prompts
            .get(key)
            .map(|s| s.as_str())
            .ok_or_else(|| CoachError::TemplateNotFound(format!("system_prompts:{}", key)))
    }

    fn template(&self, key: &str) -> CoachResult<&str> {
        self.templates
            .get(key)
            .map(|s| s.as_str())
            .ok_or_else(|| CoachError::TemplateNotFound(format!("templates:{}", key)))
    }
}

/// Reads a prompt file and layers it over the built-in prompt set.
pub fn load_prompts<P: AsRef<Path>>(path: P) -> CoachResult<Arc<PromptConfig>> {
    let file_content = fs::read_to_string(&path)?;
    let overrides: PromptOverrides = serde_json::from_str(&file_content)?;
    info!(
        "Loaded {} system prompt(s) and {} template(s) from {}",
        overrides.system_prompts.len(),
        overrides.templates.len(),
        path.as_ref().display()
    );
    Ok(Arc::new(PromptConfig::default().merge(overrides)))
}

/// Replaces each `{key}` in `template` in one pass. Substituted text is never rescanned,
/// and braces that name no known key are copied through.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let found = after
            .find('}')
            .map(|close| &after[..close])
            .and_then(|token| values.iter().find(|(key, _)| *key == token));
        match found {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn chat_prompt(
    config: &PromptConfig,
    mode: ChatMode,
    last_message: &str
) -> CoachResult<CompletionRequest> {
    let key = format!("chat_{}", mode.as_str());
    let instruction = fill(config.system("chat_suggestions")?, &[("heading", SUGGESTIONS_HEADING)]);
    Ok(CompletionRequest {
        system: format!("{}\n\n{}", config.system(&key)?, instruction),
        prompt: last_message.to_string(),
    })
}

pub fn questions_prompt(
    config: &PromptConfig,
    req: &QuestionsRequest
) -> CoachResult<CompletionRequest> {
    // Any non-empty text counts as a specific question, whitespace included.
    let specific = req.specific_question.as_deref().filter(|q| !q.is_empty());
    let values = [
        ("industry", req.industry.as_str()),
        ("position", req.position.as_str()),
        ("question_type", req.question_type.as_str()),
        ("specific_question", specific.unwrap_or_default()),
    ];
    let template = match specific {
        Some(_) => config.template("specific_question")?,
        None => config.template("question_set")?,
    };

    Ok(CompletionRequest {
        system: config.system("questions")?.to_string(),
        prompt: fill(template, &values),
    })
}

pub fn resume_prompt(
    config: &PromptConfig,
    section: ResumeSection,
    data: &ResumeData
) -> CoachResult<CompletionRequest> {
    let skills = data.skills.join(", ");
    let technical_skills = data.technical_skills.join(", ");
    let soft_skills = data.soft_skills.join(", ");
    let values = [
        ("name", data.name.as_str()),
        ("current_position", data.current_position.as_str()),
        ("years_experience", data.years_experience.as_str()),
        ("industry", data.industry.as_str()),
        ("skills", skills.as_str()),
        ("achievements", data.achievements.as_str()),
        ("target_position", data.target_position.as_str()),
        ("position", data.position.as_str()),
        ("company", data.company.as_str()),
        ("duration", data.duration.as_str()),
        ("responsibilities", data.responsibilities.as_str()),
        ("technical_skills", technical_skills.as_str()),
        ("soft_skills", soft_skills.as_str()),
        ("keywords", data.keywords.as_str()),
        ("education", data.education.as_str()),
        ("work_history", data.work_history.as_str()),
    ];

    Ok(CompletionRequest {
        system: config.system("resume")?.to_string(),
        prompt: fill(config.template(section.template_key())?, &values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn chat_prompt_selects_system_by_mode() {
        let config = PromptConfig::default();
        let req = chat_prompt(&config, ChatMode::Resume, "fix my resume").unwrap();
        assert!(req.system.starts_with("You are a professional resume writer with 15+ years"));
        assert!(req.system.contains("\"Follow-up suggestions:\""));
        assert_eq!(req.prompt, "fix my resume");

        let req = chat_prompt(&config, ChatMode::Questions, "q").unwrap();
        assert!(req.system.starts_with("You are an HR expert with extensive experience in interviewing candidates across"));
    }

    #[test]
    fn specific_question_uses_answer_framework() {
        let req = QuestionsRequest {
            industry: "fintech".into(),
            position: "Data Analyst".into(),
            question_type: "behavioral".into(),
            specific_question: Some("Why this company?".into()),
        };
        let out = questions_prompt(&PromptConfig::default(), &req).unwrap();
        assert!(out.prompt.contains("\"Why this company?\""));
        assert!(out.prompt.contains("For a Data Analyst position in the fintech industry."));
        assert!(out.system.contains("STAR method"));
    }

    #[test]
    fn whitespace_specific_question_still_selects_answer_framework() {
        let req = QuestionsRequest {
            industry: "retail".into(),
            position: "Store Manager".into(),
            question_type: "situational".into(),
            specific_question: Some("   ".into()),
        };
        let out = questions_prompt(&PromptConfig::default(), &req).unwrap();
        assert!(out.prompt.starts_with("Provide a detailed answer framework for the following interview question:\n\"   \""));
    }

    #[test]
    fn empty_specific_question_falls_back_to_question_set() {
        let req = QuestionsRequest {
            industry: "retail".into(),
            position: "Store Manager".into(),
            question_type: "situational".into(),
            specific_question: Some(String::new()),
        };
        let out = questions_prompt(&PromptConfig::default(), &req).unwrap();
        assert!(
            out.prompt.starts_with(
                "Generate situational interview questions and detailed sample answers for a Store Manager position in the retail industry."
            )
        );
        assert!(out.prompt.contains("1. 5 common situational questions for this role"));
        assert!(!out.prompt.contains('{'));
    }

    #[test]
    fn resume_sections_pick_their_template() {
        let data = ResumeData {
            name: "Ada".into(),
            skills: vec!["Rust".into(), "SQL".into()],
            technical_skills: vec!["Kubernetes".into()],
            soft_skills: vec!["Mentoring".into(), "Writing".into()],
            company: "Acme".into(),
            ..Default::default()
        };
        let config = PromptConfig::default();

        let summary = resume_prompt(&config, ResumeSection::Summary, &data).unwrap();
        assert!(summary.prompt.contains("Key Skills: Rust, SQL"));
        assert!(summary.prompt.contains("Name: Ada"));

        let experience = resume_prompt(&config, ResumeSection::Experience, &data).unwrap();
        assert!(experience.prompt.contains("Company: Acme"));

        let skills = resume_prompt(&config, ResumeSection::Skills, &data).unwrap();
        assert!(skills.prompt.contains("Soft Skills: Mentoring, Writing"));

        let full = resume_prompt(&config, ResumeSection::Full, &data).unwrap();
        assert!(full.prompt.contains("Please provide a complete resume"));
        assert!(full.system.contains("ATS-friendly"));
    }

    #[test]
    fn caller_text_with_braces_is_copied_literally() {
        let data = ResumeData {
            name: "Ada {target_position}".into(),
            target_position: "CTO".into(),
            achievements: "{unknown} and {".into(),
            ..Default::default()
        };
        let out = resume_prompt(&PromptConfig::default(), ResumeSection::Summary, &data).unwrap();
        assert!(out.prompt.contains("Name: Ada {target_position}\n"));
        assert!(out.prompt.contains("Career Achievements: {unknown} and {\n"));
        assert!(out.prompt.contains("Target Position: CTO\n"));
    }

    #[test]
    fn fill_leaves_unknown_placeholders_alone() {
        assert_eq!(fill("{a}-{b}-{a}", &[("a", "{b}")]), "{b}-{b}-{b}");
        assert_eq!(fill("{ x } {", &[("x", "y")]), "{ x } {");
    }

    #[test]
    fn unknown_section_name_means_full_resume() {
        assert_eq!(ResumeSection::from_name(Some("education")), ResumeSection::Full);
        assert_eq!(ResumeSection::from_name(None), ResumeSection::Full);
        assert_eq!(ResumeSection::from_name(Some("skills")), ResumeSection::Skills);
    }

    #[test]
    fn prompt_file_overrides_only_given_keys() {
        let path = std::env::temp_dir().join(format!("job-coach-prompts-{}.json", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"system_prompts": {{"questions": "Be brief."}}}}"#
        ).unwrap();

        let config = load_prompts(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.system_prompts["questions"], "Be brief.");
        assert_eq!(config.system_prompts["resume"], RESUME_SYSTEM);
        assert_eq!(config.templates.len(), 6);
    }

    #[test]
    fn missing_template_is_reported() {
        let mut config = PromptConfig::default();
        config.templates.remove("resume_skills");
        let err = resume_prompt(&config, ResumeSection::Skills, &ResumeData::default()).unwrap_err();
        assert!(matches!(err, CoachError::TemplateNotFound(key) if key == "templates:resume_skills"));
    }
}
