//! Static cover letter used when no model is configured or the call fails.

use crate::models::user::User;

use super::generator::CoverLetterRequest;

const DEFAULT_SKILLS: &[&str] = &["communication", "problem solving"];

pub fn fallback_letter(user: &User, request: &CoverLetterRequest) -> String {
    let skills = if user.skills.is_empty() {
        DEFAULT_SKILLS.join(", ")
    } else {
        user.skills.join(", ")
    };
    let company = &request.company_name;

    format!(
        "Dear Hiring Manager,

I am excited to apply for the {title} position at {company}. With {years} year(s) of experience in {industry}, I have developed strong skills in {skills} that align well with your needs.

In my previous roles, I have contributed to outcomes such as:
- Delivering high-quality features on time
- Collaborating effectively with cross-functional teams
- Continuously improving processes and documentation

I am particularly interested in this opportunity at {company} because it aligns with my background and goals. I believe my experience and proactive approach will enable me to contribute quickly and effectively to your team.

Thank you for considering my application. I would welcome the opportunity to discuss how I can add value to {company}.

Sincerely,
{name}",
        title = request.job_title,
        years = user.experience.unwrap_or(0),
        industry = user.industry.as_deref().unwrap_or("the industry"),
        name = user.name.as_deref().unwrap_or("Candidate"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::testing::sample_user;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: "Platform Engineer".to_string(),
            company_name: "Initech".to_string(),
            job_description: None,
        }
    }

    #[test]
    fn test_fallback_uses_profile() {
        let letter = fallback_letter(&sample_user(), &request());
        assert!(letter.starts_with("Dear Hiring Manager,"));
        assert!(letter.contains("Platform Engineer position at Initech"));
        assert!(letter.contains("With 4 year(s) of experience in tech-software-development"));
        assert!(letter.contains("strong skills in Rust, PostgreSQL"));
        assert!(letter.ends_with("Sincerely,\nAda Lovelace"));
        assert_eq!(letter.matches("Initech").count(), 3);
    }

    #[test]
    fn test_fallback_defaults_for_empty_profile() {
        let mut user = sample_user();
        user.name = None;
        user.industry = None;
        user.experience = None;
        user.skills.clear();

        let letter = fallback_letter(&user, &request());
        assert!(letter.contains("With 0 year(s) of experience in the industry"));
        assert!(letter.contains("strong skills in communication, problem solving"));
        assert!(letter.ends_with("Sincerely,\nCandidate"));
    }
}
