//! Data model for resume matching.
//!
//! Every record here is an immutable value: the service produces them once
//! per submission and the UI only reads them.

use serde::{Deserialize, Serialize};

/// A job posting as returned by the recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub min_experience_years: u32,
    pub salary_range: Option<String>,
    pub posted_date: String,
}

/// Parsed resume contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
    pub summary: String,
    pub raw_text: Option<String>,
}

/// How the candidate's experience lines up with a job's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceMatch {
    Perfect,
    Underqualified,
    Overqualified,
}

impl ExperienceMatch {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceMatch::Perfect => "Perfect",
            ExperienceMatch::Underqualified => "Underqualified",
            ExperienceMatch::Overqualified => "Overqualified",
        }
    }
}

/// Structured explanation backing a recommendation's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Fraction of required skills the candidate has, 0 to 1.
    pub skill_overlap_ratio: f64,
    /// Embedding similarity between resume and posting, 0 to 1.
    pub semantic_similarity: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: ExperienceMatch,
    pub reasoning: String,
}

/// A job paired with its match score, 0 to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job: Job,
    pub score: f64,
    pub match_details: MatchDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_match_wire_shape() {
        // The labels a real backend would send are lowercase.
        let json = serde_json::to_string(&ExperienceMatch::Underqualified).unwrap();
        assert_eq!(json, "\"underqualified\"");

        let parsed: ExperienceMatch = serde_json::from_str("\"perfect\"").unwrap();
        assert_eq!(parsed, ExperienceMatch::Perfect);
    }

    #[test]
    fn test_recommendation_round_trips_through_json() {
        let rec = Recommendation {
            job: Job {
                job_id: "1".to_string(),
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                description: "Build things".to_string(),
                required_skills: vec!["Rust".to_string()],
                min_experience_years: 2,
                salary_range: None,
                posted_date: "today".to_string(),
            },
            score: 0.5,
            match_details: MatchDetails {
                skill_overlap_ratio: 0.5,
                semantic_similarity: 0.5,
                matched_skills: vec!["Rust".to_string()],
                missing_skills: vec![],
                experience_match: ExperienceMatch::Perfect,
                reasoning: "ok".to_string(),
            },
        };

        let json = serde_json::to_string(&rec).unwrap();
        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
