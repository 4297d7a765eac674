// Cover letter prompt template.

use crate::llm_client::prompts::fill_template;
use crate::models::user::User;

use super::generator::CoverLetterRequest;

pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for a {job_title} position at {company_name}.

About the candidate:
- Industry: {industry}
- Years of Experience: {experience}
- Skills: {skills}
- Professional Background: {bio}

Job Description:
{job_description}

Requirements:
1. Use a professional, enthusiastic tone
2. Highlight relevant skills and experience
3. Show understanding of the company's needs
4. Keep it concise (max 400 words)
5. Use proper business letter formatting in markdown
6. Include specific examples of achievements
7. Relate candidate's background to job requirements

Format the letter in markdown."#;

pub fn build_cover_letter_prompt(user: &User, request: &CoverLetterRequest) -> String {
    let experience = user
        .experience
        .map(|y| y.to_string())
        .unwrap_or_else(|| "not specified".to_string());
    let skills = user.skills.join(", ");

    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("job_title", request.job_title.as_str()),
            ("company_name", request.company_name.as_str()),
            ("industry", user.industry.as_deref().unwrap_or("not specified")),
            ("experience", experience.as_str()),
            ("skills", skills.as_str()),
            ("bio", user.bio.as_deref().unwrap_or("not provided")),
            (
                "job_description",
                request.job_description.as_deref().unwrap_or("not provided"),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::testing::sample_user;

    #[test]
    fn test_prompt_interpolates_every_field() {
        let request = CoverLetterRequest {
            job_title: "Backend Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_description: Some("Build payment APIs in Rust.".to_string()),
        };
        let prompt = build_cover_letter_prompt(&sample_user(), &request);
        assert!(prompt.starts_with("Write a professional cover letter for a Backend Engineer position at Acme."));
        assert!(prompt.contains("- Industry: tech-software-development"));
        assert!(prompt.contains("- Years of Experience: 4"));
        assert!(prompt.contains("- Skills: Rust, PostgreSQL"));
        assert!(prompt.contains("Build payment APIs in Rust."));
        assert!(!prompt.contains('{'), "unfilled placeholder in: {prompt}");
    }

    #[test]
    fn test_placeholder_text_in_fields_is_inserted_literally() {
        let mut user = sample_user();
        user.bio = Some("I write {job_description} parsers".to_string());
        let request = CoverLetterRequest {
            job_title: "{bio} Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_description: Some("Build APIs.".to_string()),
        };
        let prompt = build_cover_letter_prompt(&user, &request);
        assert!(prompt.starts_with("Write a professional cover letter for a {bio} Engineer position"));
        assert!(prompt.contains("- Professional Background: I write {job_description} parsers"));
        assert!(prompt.contains("Job Description:\nBuild APIs."));
    }
}
