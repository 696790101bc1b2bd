use super::{ Canned, Rule };

pub(super) const RULES: &[Rule] = &[
    Rule::new(
        &["software", "developer", "engineer"],
        Canned::questions(SOFTWARE, SOFTWARE_SUGGESTIONS)
    ),
    Rule::new(
        &["manager", "management", "leadership"],
        Canned::questions(MANAGEMENT, MANAGEMENT_SUGGESTIONS)
    ),
    Rule::new(&["behavioral"], Canned::questions(BEHAVIORAL, BEHAVIORAL_SUGGESTIONS)),
    Rule::new(&["salary", "compensation"], Canned::plain(SALARY, SALARY_SUGGESTIONS)),
    Rule::new(
        &["why should we hire you", "why are you the best candidate"],
        Canned::plain(WHY_HIRE, WHY_HIRE_SUGGESTIONS)
    ),
];

pub(super) static FALLBACK_REPLY: Canned = Canned::plain(FALLBACK, FALLBACK_SUGGESTIONS);

const SOFTWARE: &str = "Here are common interview questions for software engineering positions:

1. **Technical Questions:**
   • Explain the difference between REST and GraphQL
   • How do you handle error cases in your code?
   • Describe your experience with CI/CD pipelines
   • How do you approach testing your code?
   • Explain a complex technical concept in simple terms

2. **Behavioral Questions:**
   • Tell me about a challenging project you worked on
   • How do you handle disagreements with team members?
   • Describe how you stay updated with new technologies
   • Tell me about a time you had to meet a tight deadline
   • How do you prioritize tasks when working on multiple projects?

3. **Problem-Solving Questions:**
   • You might be asked to solve coding problems or system design questions
   • Be prepared to explain your thought process
   • Practice common algorithms and data structures

Would you like sample answers for any of these questions?";

const SOFTWARE_SUGGESTIONS: &[&str] = &[
    "System design interview tips",
    "How to answer coding questions",
    "Behavioral questions for developers",
];

const MANAGEMENT: &str = "Here are common interview questions for management positions:

1. **Leadership Style:**
   • How would you describe your leadership style?
   • Tell me about a time you had to lead a team through a difficult situation
   • How do you motivate team members?

2. **Decision Making:**
   • Describe a difficult decision you had to make as a manager
   • How do you make decisions when you don't have all the information?
   • Tell me about a time you had to make an unpopular decision

3. **Team Management:**
   • How do you handle underperforming team members?
   • Describe how you've built successful teams in the past
   • How do you handle conflicts within your team?

4. **Strategic Thinking:**
   • How do you set goals for your team?
   • Describe a successful strategic initiative you implemented
   • How do you balance short-term needs with long-term goals?

Would you like sample answers for any of these questions?";

const MANAGEMENT_SUGGESTIONS: &[&str] = &[
    "Leadership style examples",
    "Handling difficult employees",
    "Strategic thinking questions",
];

const BEHAVIORAL: &str = "Here are common behavioral interview questions and how to answer them effectively:

1. **Tell me about a time when you faced a difficult challenge at work.**
   • Use the STAR method: Situation, Task, Action, Result
   • Focus on your specific actions and decisions
   • Highlight positive outcomes and lessons learned

2. **Describe a situation where you had to work with a difficult colleague.**
   • Emphasize communication and conflict resolution skills
   • Avoid speaking negatively about others
   • Focus on the positive resolution

3. **Give an example of a time you showed leadership.**
   • Choose an example that demonstrates initiative
   • Highlight how you motivated others
   • Quantify results if possible

4. **Tell me about a time you failed and what you learned.**
   • Be honest about a real failure
   • Focus more on what you learned and how you improved
   • Show how you applied those lessons successfully

5. **Describe a situation where you had to meet a tight deadline.**
   • Highlight planning and prioritization skills
   • Demonstrate how you handle pressure
   • Emphasize successful outcomes

Remember, the STAR method helps you tell a complete story that showcases your skills and experience.";

const BEHAVIORAL_SUGGESTIONS: &[&str] = &[
    "STAR method examples",
    "Common behavioral questions",
    "How to prepare for behavioral interviews",
];

const SALARY: &str = "When asked about salary expectations, follow these guidelines:

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
'Based on my research and experience, I'm looking for a position in the range of $85,000 to $95,000. However, I'm open to discussing the compensation package as a whole, as I'm also interested in the growth opportunities and company culture.'";

const SALARY_SUGGESTIONS: &[&str] = &[
    "Negotiating a higher salary",
    "When to discuss compensation",
    "Benefits beyond salary",
];

const WHY_HIRE: &str = "When answering 'Why should we hire you?' follow this framework:

1. **Connect your skills to their needs:**
   • Reference specific job requirements
   • Explain how your experience directly addresses those needs

2. **Highlight your unique value:**
   • Emphasize what sets you apart from other candidates
   • Focus on your unique combination of skills and experiences

3. **Provide specific achievements:**
   • Use numbers and metrics when possible
   • Share relevant success stories

4. **Show cultural fit:**
   • Demonstrate knowledge of company values and culture
   • Explain why you're excited about their mission

5. **Be confident but not arrogant:**
   • Use a confident tone
   • Focus on facts rather than opinions about yourself

Example answer:
'Based on the job description, you need someone with strong project management skills and experience with agile methodologies. In my current role, I've successfully led 5 major projects using agile, all delivered on time and under budget. My communication skills and technical background allow me to bridge the gap between technical and non-technical stakeholders, which I understand is important for this position. Additionally, I've researched your company's commitment to innovation and collaboration, which aligns perfectly with my work style and values. I'm excited about your company's mission and believe my experience makes me uniquely qualified to contribute to your team.'";

const WHY_HIRE_SUGGESTIONS: &[&str] = &[
    "How to stand out from other candidates",
    "Addressing potential weaknesses",
    "Following up after answering this question",
];

const FALLBACK: &str = "I can provide sample questions and answers for various interview scenarios. Here are some categories to explore:

1. **General HR Questions:**
   • Tell me about yourself
   • Why do you want to work for this company?
   • Where do you see yourself in 5 years?
   • What are your salary expectations?

2. **Behavioral Questions:**
   • Tell me about a time you faced a challenge
   • Describe a situation where you showed leadership
   • Give an example of how you handled conflict

3. **Job-Specific Questions:**
   • Technical questions for your field
   • Industry knowledge questions
   • Scenario-based questions

4. **Character Assessment:**
   • What are your strengths and weaknesses?
   • How do you handle stress?
   • Describe your work style

What specific type of questions would you like to explore?";

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Common questions for entry-level positions",
    "Questions for experienced professionals",
    "How to answer 'What is your greatest weakness?'",
];
