// All LLM prompt templates for the analysis module.
// Placeholders are substituted with `fill_template` before sending.
// Heading text must stay in sync with `sections::RATING_HEADINGS` and
// `sections::COMPARISON_HEADINGS`.

/// Highlights prompt. Replace `{resume_text}` before sending.
pub const HIGHLIGHTS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and extract key information in JSON format:

Resume Text:
{resume_text}

Extract and return ONLY a valid JSON object with these keys:
{
    "skills": ["list of technical and professional skills"],
    "projects": ["list of project names and brief descriptions"],
    "keywords": ["important keywords and buzzwords"],
    "experience_years": "estimated years of experience",
    "education": ["educational qualifications"],
    "certifications": ["any certifications mentioned"]
}

Make sure to return only the JSON object, no additional text."#;

/// Rating prompt. Replace `{resume_text}` before sending.
pub const RATING_PROMPT_TEMPLATE: &str = r#"Rate this resume out of 10 based on clarity, impact, and professional presentation.
Consider factors like:
- Clear formatting and structure
- Strong action-oriented descriptions
- Relevant skills and experience
- Professional tone
- Quantified achievements

Resume:
{resume_text}

Format your response with proper line breaks and structure:

## ⭐ Resume Rating
**X/10** - Brief one-line summary of overall quality

## 📝 Analysis
Write 2-3 sentences explaining the rating, highlighting what works well and what needs improvement.

## 💪 Top Strengths
• **Strength 1**: Brief explanation
• **Strength 2**: Brief explanation
• **Strength 3**: Brief explanation

## 🔧 Areas for Improvement
• **Improvement 1**: Specific actionable suggestion
• **Improvement 2**: Specific actionable suggestion
• **Improvement 3**: Specific actionable suggestion

Keep each point concise and actionable. Use proper line breaks between sections."#;

/// Summary prompt. Replace `{resume_text}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Based on this resume, create a compelling 2-line professional summary that could be placed at the top of the resume.
The summary should:
- Highlight key strengths and experience
- Be concise and impactful
- Use strong action words
- Be exactly 2 lines/sentences

Resume:
{resume_text}

Return only the 2-line summary, nothing else."#;

/// Job comparison prompt. Fill `{job_title}` and `{resume_text}` in one pass.
pub const COMPARISON_PROMPT_TEMPLATE: &str = r#"Compare this resume against the target job title: "{job_title}"

Resume:
{resume_text}

Analyze and provide a structured response with proper line breaks and formatting.

Format your response EXACTLY like this with proper spacing:

## 🎯 Match Score
**X%** - Brief reason for this score

## 🚫 Missing Skills
• **Skill 1**: Brief explanation of why this skill is important
• **Skill 2**: Brief explanation of why this skill is important
• **Skill 3**: Brief explanation of why this skill is important
• **Additional skills**: If needed

## 📊 Experience Alignment
Write a clear paragraph analyzing how the current experience aligns with the target role. Keep it concise but informative.

## 💡 Recommendations
• **Action 1**: Specific recommendation with clear next steps
• **Action 2**: Specific recommendation with clear next steps
• **Action 3**: Specific recommendation with clear next steps
• **Additional recommendations**: If needed

IMPORTANT:
- Keep bullet points concise (1-2 lines each)
- Use proper line breaks between sections
- Make recommendations actionable and specific
- Ensure proper markdown formatting"#;

/// Substitutes `{name}` placeholders in a single scan of `template`.
/// Inserted values are never rescanned, so a value containing another
/// placeholder name stays literal. Unknown `{...}` text is kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let matched = values.iter().find(|(name, _)| {
            tail.strip_prefix(name)
                .is_some_and(|after| after.starts_with('}'))
        });
        match matched {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
