use super::{ Canned, Rule };
use crate::models::chat::{ OutlineSection, ResumeOutline };

pub(super) const RULES: &[Rule] = &[
    Rule::new(&["summary", "profile"], Canned::plain(SUMMARY, SUMMARY_SUGGESTIONS)),
    Rule::new(&["experience", "work history"], Canned::plain(EXPERIENCE, EXPERIENCE_SUGGESTIONS)),
    Rule::new(&["skills", "technical skills"], Canned::plain(SKILLS, SKILLS_SUGGESTIONS)),
    Rule::new(&["format", "template", "layout"], Canned::plain(FORMAT, FORMAT_SUGGESTIONS)),
    Rule::new(
        &["help me write", "create my resume"],
        Canned::resume_outline(CREATE, CREATE_SUGGESTIONS, intake_outline)
    ),
];

pub(super) static FALLBACK_REPLY: Canned = Canned::plain(FALLBACK, FALLBACK_SUGGESTIONS);

fn intake_outline() -> ResumeOutline {
    ResumeOutline {
        sections: vec![
            OutlineSection::with_fields(
                "Personal Information",
                &["Full Name", "Email", "Phone", "Location", "LinkedIn (optional)"]
            ),
            OutlineSection::with_description(
                "Professional Summary",
                "A brief 3-4 sentence overview of your experience, skills, and career goals."
            ),
            OutlineSection::with_description(
                "Work Experience",
                "For each position, include: Company, Title, Dates, and 3-5 bullet points highlighting achievements."
            ),
            OutlineSection::with_fields(
                "Education",
                &["Degree", "Institution", "Graduation Year", "Relevant Coursework (optional)"]
            ),
            OutlineSection::with_description(
                "Skills",
                "List relevant technical and soft skills for the position you're targeting."
            )
        ],
    }
}

const SUMMARY: &str = "For your professional summary, follow these guidelines:

1. Keep it concise (3-5 impactful sentences)
2. Highlight years of experience, relevant skills, and notable achievements
3. Tailor it to each job application
4. Use strong action verbs and industry keywords
5. Avoid first-person pronouns

Example for a software developer:

'Results-driven software developer with 5+ years of experience building scalable web applications. Proficient in React, Node.js, and AWS cloud infrastructure. Reduced application load time by 40% and implemented CI/CD pipelines that cut deployment time by 60%. Seeking to leverage technical expertise and leadership skills as a Senior Developer at [Company Name].'";

const SUMMARY_SUGGESTIONS: &[&str] = &[
    "Help me write my summary",
    "Should I include career objectives?",
    "Summary vs. objective statement",
];

const EXPERIENCE: &str = "When listing work experience on your resume:

1. Use reverse chronological order (most recent first)
2. Format each entry consistently:
   • Company Name, Location — Job Title (Month Year - Month Year)
   • 3-5 bullet points per position
   • Start each bullet with a strong action verb
   • Focus on achievements and results, not just responsibilities
   • Include metrics and numbers when possible (e.g., 'increased,' 'reduced,' 'generated')
3. Tailor accomplishments to match the job description
4. For older or less relevant positions, include fewer details

Example bullet point:
'Increased customer retention by 25% through implementation of automated email marketing campaigns that re-engaged 500+ inactive users.'";

const EXPERIENCE_SUGGESTIONS: &[&str] = &[
    "Action verbs for my resume",
    "How to explain employment gaps",
    "How far back should my work history go?",
];

const SKILLS: &str = "For your skills section:

1. Organize skills by category (e.g., Programming Languages, Tools, Soft Skills)
2. List the most relevant skills first, matching keywords from the job description
3. Be honest about your proficiency level
4. For technical roles, consider using a simple rating system or grouping by proficiency level
5. Include both hard skills (technical abilities) and soft skills (communication, leadership)

Example format:

**Technical Skills:**
• Programming: JavaScript (React, Node.js), Python, SQL
• Tools: Git, Docker, AWS, Jira
• Methodologies: Agile, Scrum, TDD

**Soft Skills:**
• Communication, Team Leadership, Problem-solving, Time Management";

const SKILLS_SUGGESTIONS: &[&str] = &[
    "Most in-demand skills for my industry",
    "How many skills should I list?",
    "Should I rate my skill proficiency?",
];

const FORMAT: &str = "For an effective resume format:

1. Choose the right format:
   • Chronological: Best for consistent work history
   • Functional: Highlights skills over experience (good for career changers)
   • Combination: Balances skills and experience (most versatile)

2. Keep it concise (1-2 pages maximum)

3. Use a clean, professional design:
   • Consistent fonts (Arial, Calibri, or Georgia at 10-12pt)
   • Clear section headings
   • Ample white space
   • Margins of 0.5-1 inch

4. Essential sections in order:
   • Contact information
   • Professional summary
   • Skills
   • Work experience
   • Education
   • Optional: Certifications, Projects, Volunteer work

5. Save as PDF to preserve formatting

Would you like me to suggest a specific template based on your industry?";

const FORMAT_SUGGESTIONS: &[&str] = &[
    "Best format for career changers",
    "ATS-friendly resume templates",
    "Should I include a photo on my resume?",
];

const CREATE: &str = "I'd be happy to help you create your resume. Let's start by gathering some key information:";

const CREATE_SUGGESTIONS: &[&str] = &[
    "Start with my professional summary",
    "Help with my work experience section",
    "What skills should I include?",
];

const FALLBACK: &str = "I'd be happy to help with your resume. Here are some key areas we can focus on:

1. **Professional Summary** - Create a compelling introduction
2. **Work Experience** - Highlight achievements with metrics
3. **Skills Section** - Showcase relevant abilities
4. **Education** - Format academic credentials
5. **Formatting** - Ensure a clean, professional layout
6. **ATS Optimization** - Make your resume keyword-rich

What specific aspect of your resume would you like to improve first?";

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Help me write my professional summary",
    "How to highlight achievements",
    "Make my resume ATS-friendly",
];
