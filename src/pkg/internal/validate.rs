use validator::{Validate, ValidationErrors};

use crate::pkg::server::handlers::{
    jobs::JobPayload, skills::SkillPayload, statistics::StatisticsPayload,
};

/// Schema checks run against candidate records before any database call
/// is attempted. The owner identifier is merged into the candidate by the
/// handlers from the session, so it is present by construction.
pub fn validate_job(candidate: &JobPayload) -> Result<(), ValidationErrors> {
    candidate.validate()
}

pub fn validate_skill(candidate: &SkillPayload) -> Result<(), ValidationErrors> {
    candidate.validate()
}

pub fn validate_statistics(candidate: &StatisticsPayload) -> Result<(), ValidationErrors> {
    candidate.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(raw: &str) -> JobPayload {
        serde_json::from_str(raw).expect("payload json")
    }

    #[test]
    fn missing_title_fails_validation() {
        let candidate = payload(r#"{"description": "build things", "skills": []}"#);
        let errors = validate_job(&candidate).expect_err("title is required");
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn negative_salary_fails_validation() {
        let candidate = payload(
            r#"{"title": "Backend Engineer", "description": "build things", "salary": -1}"#,
        );
        let errors = validate_job(&candidate).expect_err("salary must be non-negative");
        assert!(errors.field_errors().contains_key("salary"));
    }

    #[test]
    fn complete_job_passes_validation() {
        let candidate = payload(
            r#"{
                "title": "Backend Engineer",
                "description": "build things",
                "company": "Acme",
                "location": "Remote",
                "salary": 90000,
                "skills": ["8c2df3e8-6f76-4a0a-bb5a-3a08c9c3a2f1"]
            }"#,
        );
        assert!(validate_job(&candidate).is_ok());
    }

    #[test]
    fn empty_skill_list_fails_statistics_validation() {
        let candidate: StatisticsPayload = serde_json::from_str(r#"{"skills": []}"#).unwrap();
        let errors = validate_statistics(&candidate).expect_err("skills are required");
        assert!(errors.field_errors().contains_key("skills"));
    }

    #[test]
    fn blank_skill_name_fails_validation() {
        let candidate: SkillPayload = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(validate_skill(&candidate).is_err());
    }
}
