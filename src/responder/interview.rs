use super::{ Canned, Rule };

pub(super) const RULES: &[Rule] = &[
    Rule::new(&["behavioral", "behavior"], Canned::questions(BEHAVIORAL, BEHAVIORAL_SUGGESTIONS)),
    Rule::new(&["technical"], Canned::questions(TECHNICAL, TECHNICAL_SUGGESTIONS)),
    Rule::new(
        &["tell me about yourself", "introduce yourself"],
        Canned::plain(SELF_INTRO, SELF_INTRO_SUGGESTIONS)
    ),
    Rule::new(&["weakness", "weaknesses"], Canned::plain(WEAKNESS, WEAKNESS_SUGGESTIONS)),
    Rule::new(&["strength", "strengths"], Canned::plain(STRENGTH, STRENGTH_SUGGESTIONS)),
    Rule::new(
        &["practice", "mock interview"],
        Canned::plain(MOCK_INTERVIEW, MOCK_INTERVIEW_SUGGESTIONS)
    ),
];

pub(super) static FALLBACK_REPLY: Canned = Canned::plain(FALLBACK, FALLBACK_SUGGESTIONS);

// For the question kinds the suggestions are the sample questions themselves.
const BEHAVIORAL: &str = "Here are some common behavioral interview questions and tips for answering them effectively:";

const BEHAVIORAL_SUGGESTIONS: &[&str] = &[
    "Tell me about a time when you faced a difficult challenge at work.",
    "Describe a situation where you had to work with a difficult colleague.",
    "Give an example of a time you showed leadership.",
    "Tell me about a time you failed and what you learned.",
    "Describe a situation where you had to meet a tight deadline.",
];

const TECHNICAL: &str = "Technical interviews vary by field, but here are some common questions and approaches:";

const TECHNICAL_SUGGESTIONS: &[&str] = &[
    "How would you explain [complex concept] to someone without technical background?",
    "Describe a technical problem you solved recently.",
    "How do you stay updated with industry trends and new technologies?",
    "What's your approach to troubleshooting technical issues?",
    "Describe your experience with [specific technology].",
];

const SELF_INTRO: &str = "When answering 'Tell me about yourself,' follow this structure for a compelling response:

1. Present: Start with your current role and a key achievement
2. Past: Briefly mention relevant past experience
3. Future: Express why you're interested in this position
4. Strengths: Highlight 2-3 key strengths relevant to the role

Keep it under 2 minutes and practice until it sounds natural, not rehearsed. Here's a sample answer:

'I'm currently a Senior Developer at TechCorp, where I lead a team of five engineers building cloud-based solutions. Our recent project reduced infrastructure costs by 30%. Before that, I worked at StartupX developing their core payment processing system. I'm passionate about creating efficient, scalable solutions, which is why I'm excited about this opportunity to lead architecture decisions for your new platform. My strengths include system design, mentoring junior developers, and translating business requirements into technical specifications.'";

const SELF_INTRO_SUGGESTIONS: &[&str] = &[
    "How to end my self-introduction?",
    "Should I mention personal interests?",
    "How to tailor this for different roles?",
];

const WEAKNESS: &str = "When discussing weaknesses in an interview, follow these guidelines:

1. Be genuine but strategic - choose a real weakness that isn't critical to the job
2. Show self-awareness and a growth mindset
3. Explain specific steps you're taking to improve
4. Mention progress you've already made

Example answer:
'One area I've been working to improve is public speaking. While I'm confident in one-on-one conversations and small groups, I used to get nervous presenting to larger audiences. To address this, I joined Toastmasters last year and have been volunteering to lead team presentations. I've already noticed significant improvement, and my manager recently complimented me on my presentation to the executive team.'";

const WEAKNESS_SUGGESTIONS: &[&str] = &[
    "Weaknesses to avoid mentioning",
    "How many weaknesses should I share?",
    "Follow-up questions about weaknesses",
];

const STRENGTH: &str = "When highlighting strengths in an interview:

1. Focus on qualities relevant to the position
2. Use the STAR method (Situation, Task, Action, Result) to provide specific examples
3. Align your strengths with the job requirements
4. Be confident but not arrogant

Example answer:
'My greatest strength is problem-solving. For example, at my previous company, we were experiencing significant customer churn (Situation). I was tasked with identifying the root causes (Task). I analyzed customer feedback data and identified that our onboarding process was too complicated (Action). By redesigning the process and creating better documentation, we reduced churn by 25% in three months (Result).'";

const STRENGTH_SUGGESTIONS: &[&str] = &[
    "How to quantify my strengths",
    "Top strengths employers look for",
    "Balancing confidence and humility",
];

const MOCK_INTERVIEW: &str = "I'd be happy to conduct a mock interview with you. Let's start with a common question:

**Can you walk me through your professional background and explain why you're interested in this position?**

After you respond, I'll provide feedback on your answer and suggest improvements.";

const MOCK_INTERVIEW_SUGGESTIONS: &[&str] = &[
    "Ask me another interview question",
    "Give me feedback on my answer",
    "What are common interview mistakes?",
];

const FALLBACK: &str = "That's a great question about interview preparation. Here are some general tips for successful interviews:

1. Research the company thoroughly before the interview
2. Practice common questions but avoid sounding rehearsed
3. Prepare specific examples using the STAR method
4. Have thoughtful questions ready for the interviewer
5. Follow up with a thank-you note within 24 hours

Would you like specific advice on a particular aspect of interview preparation?";

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "How to research a company",
    "What questions should I ask the interviewer?",
    "How to handle salary negotiations",
];
