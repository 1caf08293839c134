// Evaluation prompt template.
// The schema block must stay in step with evaluation::schema.

/// Instruction block sent ahead of the resume and job description.
pub const EVALUATION_PROMPT: &str = r#"Act as an advanced ATS (Application Tracking System) specializing in:
- Software Engineering
- Data Science
- Data Analytics
- Big Data Engineering

Analyze the resume against the provided job description and:
- Assign a **percentage match**.
- Identify **missing keywords**.
- Provide a **brief profile summary**.

**STRICTLY return only a JSON object** in the format below and nothing else:

```json
{
  "JD Match": "XX%",
  "MissingKeywords": ["keyword1", "keyword2"],
  "Profile Summary": "Short evaluation"
}
```"#;

/// Renders the full prompt. Inputs are appended verbatim, never validated.
pub fn compose(resume_text: &str, job_description: &str) -> String {
    format!("{EVALUATION_PROMPT}\n\nResume: {resume_text}\nJob Description: {job_description}\n")
}
