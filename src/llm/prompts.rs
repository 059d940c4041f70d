use crate::models::MissingSkills;

pub const SYSTEM_PROMPT: &str = r#"You are an experienced career mentor and technical recruiter.
You read resumes, match people to job roles, find skill gaps, plan learning and coach for interviews.
Always answer with a single valid JSON object that matches the schema given in the request.
Do not add commentary before or after the JSON."#;

const JSON_ONLY: &str = "Return ONLY valid JSON, no additional text.";

#[derive(Debug, Clone)]
pub struct ResumeRequest<'a> {
    pub resume_text: &'a str,
}

impl ResumeRequest<'_> {
    pub fn to_prompt(&self) -> String {
        format!(
            r#"Analyze the following resume and extract key information.

Return a JSON response with the following structure:
{{
    "technical_skills": ["skill1", "skill2"],
    "soft_skills": ["skill1", "skill2"],
    "experience_summary": "Brief summary of experience level and years",
    "resume_strength": 7.5,
    "years_of_experience": 3
}}

Resume Text:
{resume}

Instructions:
- List every technical skill: languages, frameworks, tools, platforms
- List soft skills such as communication, leadership and teamwork
- Summarize the experience level in 2-3 sentences
- Rate resume strength from 0 to 10 for clarity, completeness and relevance
- Estimate whole years of professional experience, 0 if unknown

{json_only}"#,
            resume = self.resume_text,
            json_only = JSON_ONLY,
        )
    }
}

#[derive(Debug, Clone)]
pub struct CareerRequest<'a> {
    pub technical_skills: &'a [String],
    pub soft_skills: &'a [String],
    pub experience_summary: &'a str,
    pub years_of_experience: u32,
}

impl CareerRequest<'_> {
    pub fn to_prompt(&self) -> String {
        format!(
            r#"Based on the user's profile, recommend the best-fit job role and alternative roles.

Technical Skills: {technical}
Soft Skills: {soft}
Experience: {experience}
Years of Experience: {years}

Return a JSON response with the following structure:
{{
    "best_fit_role": {{
        "title": "Job Title",
        "match_score": 9.0,
        "reasoning": "Why this role fits best (2-3 sentences)"
    }},
    "alternative_roles": [
        {{
            "title": "Alternative Job Title",
            "match_score": 8.0,
            "reasoning": "Why this is a good alternative (1-2 sentences)"
        }}
    ],
    "career_insights": "Career progression and opportunities (2-3 sentences)"
}}

Instructions:
- Recommend exactly 1 best-fit role
- Suggest 1-2 viable alternative roles
- Give every role a match score from 0 to 10 with clear reasoning

{json_only}"#,
            technical = self.technical_skills.join(", "),
            soft = self.soft_skills.join(", "),
            experience = self.experience_summary,
            years = self.years_of_experience,
            json_only = JSON_ONLY,
        )
    }
}

#[derive(Debug, Clone)]
pub struct SkillGapRequest<'a> {
    pub user_skills: &'a [String],
    pub target_role: &'a str,
    pub experience_summary: &'a str,
}

impl SkillGapRequest<'_> {
    pub fn to_prompt(&self) -> String {
        format!(
            r#"Analyze the gaps between the user's skills and the requirements of the target job role.

User's Skills: {skills}
Target Job Role: {role}
User's Experience: {experience}

Return a JSON response with the following structure:
{{
    "missing_skills": [
        {{
            "skill": "skill name",
            "priority": "High|Medium|Low",
            "reason": "Why this skill matters for the role"
        }}
    ],
    "gap_analysis": "Overall summary of the gaps in 2-3 sentences",
    "readiness_score": 7.5
}}

Instructions:
- Identify the skills the role requires that the user lacks
- Priority is High (critical), Medium (important) or Low (nice to have)
- Give a readiness score from 0 to 10 for how well the user matches the role

{json_only}"#,
            skills = self.user_skills.join(", "),
            role = self.target_role,
            experience = self.experience_summary,
            json_only = JSON_ONLY,
        )
    }
}

#[derive(Debug, Clone)]
pub struct RoadmapRequest<'a> {
    pub target_role: &'a str,
    pub missing_skills: &'a MissingSkills,
    pub current_skills: &'a [String],
    pub months: u32,
}

impl RoadmapRequest<'_> {
    pub fn to_prompt(&self) -> String {
        format!(
            r#"Create a structured {months}-month learning roadmap to prepare for the target job role.

Target Role: {role}
Skills to Learn: {missing}
Current Skills: {current}

Return a JSON response with the following structure:
{{
    "roadmap_duration": {months},
    "target_role": "{role}",
    "monthly_goals": [
        {{
            "month": 1,
            "focus_areas": ["area1", "area2"],
            "learning_objectives": ["objective1", "objective2"],
            "skills_to_acquire": ["skill1", "skill2"],
            "practice_projects": ["project1"],
            "resources": ["resource1", "resource2"]
        }}
    ],
    "overall_strategy": "Learning strategy for the whole roadmap (2-3 sentences)",
    "success_metrics": ["metric1", "metric2"]
}}

Instructions:
- Provide one entry in monthly_goals for each of the {months} months
- Each month has 2-4 focus areas and 1-2 practical projects
- Recommend concrete courses, books or tutorials as resources
- Include measurable success metrics

{json_only}"#,
            months = self.months,
            role = self.target_role,
            missing = self.missing_skills.describe(),
            current = self.current_skills.join(", "),
            json_only = JSON_ONLY,
        )
    }
}

#[derive(Debug, Clone)]
pub struct InterviewRequest<'a> {
    pub target_role: &'a str,
    pub technical_skills: &'a [String],
    pub experience_summary: &'a str,
    pub num_technical: u32,
    pub num_behavioral: u32,
}

impl InterviewRequest<'_> {
    pub fn to_prompt(&self) -> String {
        format!(
            r#"Generate interview questions to prepare for the target job role.

Target Role: {role}
Relevant Skills: {skills}
Candidate Experience: {experience}

Generate {technical} technical questions and {behavioral} behavioral questions.

Return a JSON response with the following structure:
{{
    "target_role": "{role}",
    "technical_questions": [
        {{
            "question": "Question text",
            "category": "Programming, System Design, Algorithms, ...",
            "difficulty": "Easy|Medium|Hard",
            "tips": "How to approach this question"
        }}
    ],
    "behavioral_questions": [
        {{
            "question": "Question text",
            "focus_area": "Leadership, Problem-solving, Teamwork, ...",
            "tips": "What interviewers look for in the answer"
        }}
    ],
    "preparation_tips": ["tip1", "tip2"],
    "common_red_flags": ["red flag 1"],
    "success_strategies": ["strategy1"]
}}

Instructions:
- Technical questions must match the role and the listed skills
- Behavioral questions should suit STAR-method answers
- Add 5-7 general preparation tips
- List common mistakes to avoid and strategies that work

{json_only}"#,
            role = self.target_role,
            skills = self.technical_skills.join(", "),
            experience = self.experience_summary,
            technical = self.num_technical,
            behavioral = self.num_behavioral,
            json_only = JSON_ONLY,
        )
    }
}
