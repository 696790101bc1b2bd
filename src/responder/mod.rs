//! Keyword-driven canned replies.
//!
//! Each mode owns an ordered rule table. The lower-cased user text is tested
//! against every rule's substring triggers in order and the first hit wins;
//! when nothing matches the mode's fallback reply is used. The lookup is pure,
//! so the same `(mode, text)` pair always yields the same reply.

mod greeting;
mod interview;
mod questions;
mod resume;

pub use greeting::{ mode_greeting, welcome, Greeting };

use crate::models::chat::{ ChatMode, Message, ResponseKind, ResumeOutline };

pub(crate) struct Rule {
    triggers: &'static [&'static str],
    reply: Canned,
}

impl Rule {
    const fn new(triggers: &'static [&'static str], reply: Canned) -> Self {
        Self { triggers, reply }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|trigger| lowered.contains(trigger))
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Canned {
    content: &'static str,
    kind: ResponseKind,
    suggestions: &'static [&'static str],
    outline: Option<fn() -> ResumeOutline>,
}

impl Canned {
    const fn plain(content: &'static str, suggestions: &'static [&'static str]) -> Self {
        Self { content, kind: ResponseKind::Plain, suggestions, outline: None }
    }

    const fn questions(content: &'static str, suggestions: &'static [&'static str]) -> Self {
        Self { content, kind: ResponseKind::StructuredQuestions, suggestions, outline: None }
    }

    const fn resume_outline(
        content: &'static str,
        suggestions: &'static [&'static str],
        outline: fn() -> ResumeOutline
    ) -> Self {
        Self { content, kind: ResponseKind::StructuredResume, suggestions, outline: Some(outline) }
    }

    fn reply(&self) -> CannedReply {
        CannedReply {
            content: self.content,
            kind: self.kind,
            suggestions: self.suggestions,
            outline: self.outline.map(|build| build()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CannedReply {
    pub content: &'static str,
    pub kind: ResponseKind,
    pub suggestions: &'static [&'static str],
    pub outline: Option<ResumeOutline>,
}

impl CannedReply {
    pub fn into_message(self) -> Message {
        let message = Message::assistant(self.content, self.suggestions).with_kind(self.kind);
        match self.outline {
            Some(outline) => message.with_outline(outline),
            None => message,
        }
    }
}

fn rules_for(mode: ChatMode) -> (&'static [Rule], &'static Canned) {
    match mode {
        ChatMode::Interview => (interview::RULES, &interview::FALLBACK_REPLY),
        ChatMode::Resume => (resume::RULES, &resume::FALLBACK_REPLY),
        ChatMode::Questions => (questions::RULES, &questions::FALLBACK_REPLY),
    }
}

/// Picks the canned reply for `text` in `mode`. Never fails.
pub fn respond(mode: ChatMode, text: &str) -> CannedReply {
    let lowered = text.to_lowercase();
    let (rules, fallback) = rules_for(mode);

    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| &rule.reply)
        .unwrap_or(fallback)
        .reply()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts_with(mode: ChatMode, text: &str, prefix: &str) {
        let reply = respond(mode, text);
        assert!(
            reply.content.starts_with(prefix),
            "{} / {:?} gave {:?}",
            mode,
            text,
            reply.content.chars().take(60).collect::<String>()
        );
    }

    const BEHAVIORAL_SAMPLES: &[&str] = &[
        "Tell me about a time when you faced a difficult challenge at work.",
        "Describe a situation where you had to work with a difficult colleague.",
        "Give an example of a time you showed leadership.",
        "Tell me about a time you failed and what you learned.",
        "Describe a situation where you had to meet a tight deadline.",
    ];
    const TECHNICAL_SAMPLES: &[&str] = &[
        "How would you explain [complex concept] to someone without technical background?",
        "Describe a technical problem you solved recently.",
        "How do you stay updated with industry trends and new technologies?",
        "What's your approach to troubleshooting technical issues?",
        "Describe your experience with [specific technology].",
    ];
    const SELF_INTRO_TIPS: &[&str] = &[
        "How to end my self-introduction?",
        "Should I mention personal interests?",
        "How to tailor this for different roles?",
    ];
    const WEAKNESS_TIPS: &[&str] = &[
        "Weaknesses to avoid mentioning",
        "How many weaknesses should I share?",
        "Follow-up questions about weaknesses",
    ];
    const STRENGTH_TIPS: &[&str] = &[
        "How to quantify my strengths",
        "Top strengths employers look for",
        "Balancing confidence and humility",
    ];
    const MOCK_TIPS: &[&str] = &[
        "Ask me another interview question",
        "Give me feedback on my answer",
        "What are common interview mistakes?",
    ];
    const INTERVIEW_GENERAL: &[&str] = &[
        "How to research a company",
        "What questions should I ask the interviewer?",
        "How to handle salary negotiations",
    ];
    const SUMMARY_TIPS: &[&str] = &[
        "Help me write my summary",
        "Should I include career objectives?",
        "Summary vs. objective statement",
    ];
    const EXPERIENCE_TIPS: &[&str] = &[
        "Action verbs for my resume",
        "How to explain employment gaps",
        "How far back should my work history go?",
    ];
    const SKILLS_TIPS: &[&str] = &[
        "Most in-demand skills for my industry",
        "How many skills should I list?",
        "Should I rate my skill proficiency?",
    ];
    const FORMAT_TIPS: &[&str] = &[
        "Best format for career changers",
        "ATS-friendly resume templates",
        "Should I include a photo on my resume?",
    ];
    const CREATE_STEPS: &[&str] = &[
        "Start with my professional summary",
        "Help with my work experience section",
        "What skills should I include?",
    ];
    const RESUME_GENERAL: &[&str] = &[
        "Help me write my professional summary",
        "How to highlight achievements",
        "Make my resume ATS-friendly",
    ];
    const SOFTWARE_TIPS: &[&str] = &[
        "System design interview tips",
        "How to answer coding questions",
        "Behavioral questions for developers",
    ];
    const MANAGEMENT_TIPS: &[&str] = &[
        "Leadership style examples",
        "Handling difficult employees",
        "Strategic thinking questions",
    ];
    const STAR_TIPS: &[&str] = &[
        "STAR method examples",
        "Common behavioral questions",
        "How to prepare for behavioral interviews",
    ];
    const SALARY_TIPS: &[&str] = &[
        "Negotiating a higher salary",
        "When to discuss compensation",
        "Benefits beyond salary",
    ];
    const WHY_HIRE_TIPS: &[&str] = &[
        "How to stand out from other candidates",
        "Addressing potential weaknesses",
        "Following up after answering this question",
    ];
    const QUESTIONS_GENERAL: &[&str] = &[
        "Common questions for entry-level positions",
        "Questions for experienced professionals",
        "How to answer 'What is your greatest weakness?'",
    ];

    #[test]
    fn every_trigger_yields_its_kind_and_suggestions() {
        use ChatMode::*;
        use ResponseKind::*;

        let cases: &[(ChatMode, &str, ResponseKind, &[&str])] = &[
            (Interview, "behavioral", StructuredQuestions, BEHAVIORAL_SAMPLES),
            (Interview, "behavior", StructuredQuestions, BEHAVIORAL_SAMPLES),
            (Interview, "technical", StructuredQuestions, TECHNICAL_SAMPLES),
            (Interview, "tell me about yourself", Plain, SELF_INTRO_TIPS),
            (Interview, "introduce yourself", Plain, SELF_INTRO_TIPS),
            (Interview, "weakness", Plain, WEAKNESS_TIPS),
            (Interview, "weaknesses", Plain, WEAKNESS_TIPS),
            (Interview, "strength", Plain, STRENGTH_TIPS),
            (Interview, "strengths", Plain, STRENGTH_TIPS),
            (Interview, "practice", Plain, MOCK_TIPS),
            (Interview, "mock interview", Plain, MOCK_TIPS),
            (Interview, "dress code", Plain, INTERVIEW_GENERAL),
            (Resume, "summary", Plain, SUMMARY_TIPS),
            (Resume, "profile", Plain, SUMMARY_TIPS),
            (Resume, "experience", Plain, EXPERIENCE_TIPS),
            (Resume, "work history", Plain, EXPERIENCE_TIPS),
            (Resume, "skills", Plain, SKILLS_TIPS),
            (Resume, "technical skills", Plain, SKILLS_TIPS),
            (Resume, "format", Plain, FORMAT_TIPS),
            (Resume, "template", Plain, FORMAT_TIPS),
            (Resume, "layout", Plain, FORMAT_TIPS),
            (Resume, "help me write", StructuredResume, CREATE_STEPS),
            (Resume, "please help me write a cover letter", StructuredResume, CREATE_STEPS),
            (Resume, "create my resume", StructuredResume, CREATE_STEPS),
            (Resume, "fonts", Plain, RESUME_GENERAL),
            (Questions, "software", StructuredQuestions, SOFTWARE_TIPS),
            (Questions, "developer", StructuredQuestions, SOFTWARE_TIPS),
            (Questions, "engineer", StructuredQuestions, SOFTWARE_TIPS),
            (Questions, "manager", StructuredQuestions, MANAGEMENT_TIPS),
            (Questions, "management", StructuredQuestions, MANAGEMENT_TIPS),
            (Questions, "leadership", StructuredQuestions, MANAGEMENT_TIPS),
            (Questions, "behavioral", StructuredQuestions, STAR_TIPS),
            (Questions, "salary", Plain, SALARY_TIPS),
            (Questions, "compensation", Plain, SALARY_TIPS),
            (Questions, "why should we hire you", Plain, WHY_HIRE_TIPS),
            (Questions, "Why are you the best candidate?", Plain, WHY_HIRE_TIPS),
            (Questions, "nursing", Plain, QUESTIONS_GENERAL),
        ];

        for &(mode, text, kind, suggestions) in cases {
            let reply = respond(mode, text);
            assert_eq!(reply.kind, kind, "{} / {:?}", mode, text);
            assert_eq!(reply.suggestions, suggestions, "{} / {:?}", mode, text);
            assert_eq!(reply.outline.is_some(), kind == StructuredResume, "{} / {:?}", mode, text);
        }
    }

    #[test]
    fn full_bodies_match_word_for_word() {
        assert_eq!(
            respond(ChatMode::Interview, "technical").content,
            "Technical interviews vary by field, but here are some common questions and approaches:"
        );
        assert_eq!(
            respond(ChatMode::Resume, "create my resume").content,
            "I'd be happy to help you create your resume. Let's start by gathering some key information:"
        );
        assert_eq!(
            respond(ChatMode::Questions, "salary").content,
            "When asked about salary expectations, follow these guidelines:

1. **Do your research first:**
   • Research salary ranges for similar positions in your location
   • Consider your experience level and unique skills
   • Factor in the company size and industry

2. **During the interview:**
   • Give a range rather than a specific number
   • Example: 'Based on my research, similar roles in this area typically pay between $X and $Y'
   • Emphasize that you're flexible and more interested in the right opportunity

3. **If pressed for a specific number:**
   • You can turn the question back: 'What is the typical range for this position at your company?'
   • Or provide a well-researched range with your ideal salary in the middle

4. **Consider the total package:**
   • Mention that you're considering the entire compensation package, not just salary
   • This includes benefits, work-life balance, growth opportunities, etc.

5. **Timing is important:**
   • Avoid discussing salary too early in the interview process
   • Ideally, let the employer bring it up first

Sample response:
'Based on my research and experience, I'm looking for a position in the range of $85,000 to $95,000. However, I'm open to discussing the compensation package as a whole, as I'm also interested in the growth opportunities and company culture.'"
        );
    }

    #[test]
    fn weakness_question_gets_weakness_framework() {
        let reply = respond(ChatMode::Interview, "What is my greatest weakness?");
        assert!(reply.content.starts_with("When discussing weaknesses in an interview"));
        assert_eq!(reply.kind, ResponseKind::Plain);
        assert_eq!(
            reply.suggestions,
            &[
                "Weaknesses to avoid mentioning",
                "How many weaknesses should I share?",
                "Follow-up questions about weaknesses",
            ]
        );
    }

    #[test]
    fn interview_triggers_in_priority_order() {
        starts_with(ChatMode::Interview, "BEHAVIORAL prep", "Here are some common behavioral");
        starts_with(ChatMode::Interview, "bad behavior", "Here are some common behavioral");
        starts_with(ChatMode::Interview, "technical round", "Technical interviews vary");
        starts_with(ChatMode::Interview, "Tell me about yourself", "When answering 'Tell me about yourself,'");
        starts_with(ChatMode::Interview, "how do I introduce yourself", "When answering 'Tell me about yourself,'");
        starts_with(ChatMode::Interview, "my strengths", "When highlighting strengths");
        starts_with(ChatMode::Interview, "let's practice", "I'd be happy to conduct a mock interview");
        starts_with(ChatMode::Interview, "run a mock interview", "I'd be happy to conduct a mock interview");
        // behavioral outranks weakness
        starts_with(ChatMode::Interview, "behavioral weakness", "Here are some common behavioral");
        // weakness outranks strength
        starts_with(ChatMode::Interview, "strengths and weaknesses", "When discussing weaknesses");
    }

    #[test]
    fn interview_question_kinds_carry_sample_questions() {
        let reply = respond(ChatMode::Interview, "technical");
        assert_eq!(reply.kind, ResponseKind::StructuredQuestions);
        assert_eq!(reply.suggestions.len(), 5);
        assert_eq!(reply.suggestions[1], "Describe a technical problem you solved recently.");
    }

    #[test]
    fn resume_triggers_in_priority_order() {
        starts_with(ChatMode::Resume, "my profile", "For your professional summary");
        starts_with(ChatMode::Resume, "work history gaps", "When listing work experience");
        starts_with(ChatMode::Resume, "which skills?", "For your skills section");
        starts_with(ChatMode::Resume, "page layout", "For an effective resume format");
        starts_with(ChatMode::Resume, "a TEMPLATE please", "For an effective resume format");
        // summary outranks help me write
        starts_with(ChatMode::Resume, "help me write my summary", "For your professional summary");
    }

    #[test]
    fn resume_create_returns_outline() {
        let reply = respond(ChatMode::Resume, "Can you create my resume?");
        assert_eq!(reply.kind, ResponseKind::StructuredResume);
        let outline = reply.outline.clone().expect("outline");
        let titles: Vec<_> = outline.sections
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, [
            "Personal Information",
            "Professional Summary",
            "Work Experience",
            "Education",
            "Skills",
        ]);
        assert_eq!(reply.suggestions[0], "Start with my professional summary");

        let message = reply.into_message();
        assert_eq!(message.kind(), ResponseKind::StructuredResume);
        assert!(message.outline().is_some());
    }

    #[test]
    fn questions_triggers_in_priority_order() {
        starts_with(ChatMode::Questions, "I'm a developer", "Here are common interview questions for software");
        starts_with(ChatMode::Questions, "leadership roles", "Here are common interview questions for management");
        starts_with(ChatMode::Questions, "behavioral", "Here are common behavioral interview questions");
        starts_with(ChatMode::Questions, "compensation talk", "When asked about salary expectations");
        starts_with(ChatMode::Questions, "Why should we hire you?", "When answering 'Why should we hire you?'");
        // engineer outranks behavioral
        starts_with(ChatMode::Questions, "behavioral questions for engineers", "Here are common interview questions for software");
        let salary = respond(ChatMode::Questions, "salary");
        assert_eq!(salary.kind, ResponseKind::Plain);
        assert_eq!(salary.suggestions, &[
            "Negotiating a higher salary",
            "When to discuss compensation",
            "Benefits beyond salary",
        ]);
    }

    #[test]
    fn empty_and_unmatched_input_hit_fallback() {
        starts_with(ChatMode::Interview, "", "That's a great question about interview preparation.");
        starts_with(ChatMode::Resume, "", "I'd be happy to help with your resume.");
        starts_with(ChatMode::Questions, "", "I can provide sample questions and answers");
        let reply = respond(ChatMode::Questions, "zzz");
        assert_eq!(reply.suggestions[2], "How to answer 'What is your greatest weakness?'");
    }

    #[test]
    fn same_input_same_reply_and_never_empty() {
        let inputs = ["", "   ", "weakness", "ÜNICODE ünïcödé", "salary", "help me write", "\n\t"];
        for mode in ChatMode::ALL {
            for input in inputs {
                let first = respond(mode, input);
                assert_eq!(first, respond(mode, input));
                assert!(!first.content.is_empty());
                assert!(!first.suggestions.is_empty());
            }
        }
    }

    #[test]
    fn greetings_cover_every_mode() {
        assert_eq!(welcome().suggestions.len(), 3);
        for mode in ChatMode::ALL {
            let greeting = mode_greeting(mode);
            assert!(greeting.content.contains(match mode {
                ChatMode::Interview => "interview preparation mode",
                ChatMode::Resume => "resume building mode",
                ChatMode::Questions => "HR questions mode",
            }));
            assert_eq!(greeting.suggestions.len(), 3);
        }
    }
}
