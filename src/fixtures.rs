//! Sample postings, resume, and precomputed recommendations.
//!
//! This is the entire "backend" of the demo: the mock service returns these
//! records for any submission. The recommendation scores imitate what a real
//! ranker would produce for the sample resume.

use crate::types::{ExperienceMatch, Job, MatchDetails, Recommendation, ResumeData};

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            job_id: "101".to_string(),
            title: "Senior Frontend Engineer".to_string(),
            company: "TechFlow Systems".to_string(),
            location: "San Francisco, CA (Remote)".to_string(),
            description: "We are looking for a React expert to lead our UI team. \
                          Experience with TypeScript and Tailwind is a must."
                .to_string(),
            required_skills: skills(&["React", "TypeScript", "Tailwind CSS", "Redux", "System Design"]),
            min_experience_years: 5,
            salary_range: Some("$160k - $210k".to_string()),
            posted_date: "2 days ago".to_string(),
        },
        Job {
            job_id: "102".to_string(),
            title: "Full Stack Developer (Python/React)".to_string(),
            company: "DataDriven AI".to_string(),
            location: "New York, NY".to_string(),
            description: "Join our fast-paced team building AI tools. You will work with \
                          Flask APIs and React frontends."
                .to_string(),
            required_skills: skills(&["Python", "Flask", "React", "PostgreSQL", "Docker", "AWS"]),
            min_experience_years: 3,
            salary_range: Some("$130k - $170k".to_string()),
            posted_date: "1 week ago".to_string(),
        },
        Job {
            job_id: "103".to_string(),
            title: "Machine Learning Engineer".to_string(),
            company: "NeuroSync".to_string(),
            location: "Austin, TX".to_string(),
            description: "Develop NLP models for resume parsing. Experience with \
                          transformers and scikit-learn required."
                .to_string(),
            required_skills: skills(&["Python", "PyTorch", "NLP", "scikit-learn", "MLOps"]),
            min_experience_years: 4,
            salary_range: Some("$150k - $190k".to_string()),
            posted_date: "3 days ago".to_string(),
        },
        Job {
            job_id: "104".to_string(),
            title: "Junior Web Developer".to_string(),
            company: "StartUp Inc".to_string(),
            location: "Remote".to_string(),
            description: "Great opportunity for a junior dev to learn React and Node.js.".to_string(),
            required_skills: skills(&["JavaScript", "HTML", "CSS", "React"]),
            min_experience_years: 1,
            salary_range: Some("$70k - $90k".to_string()),
            posted_date: "5 hours ago".to_string(),
        },
        Job {
            job_id: "105".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "CloudScale".to_string(),
            location: "Seattle, WA".to_string(),
            description: "Manage our K8s clusters and CI/CD pipelines.".to_string(),
            required_skills: skills(&["Kubernetes", "Docker", "Jenkins", "Terraform", "Python"]),
            min_experience_years: 4,
            salary_range: Some("$140k - $180k".to_string()),
            posted_date: "4 days ago".to_string(),
        },
    ]
}

pub fn sample_resume() -> ResumeData {
    ResumeData {
        name: "Ashiritha S".to_string(),
        email: "ashiritha.s@example.com".to_string(),
        phone: Some("+1 (555) 123-4567".to_string()),
        skills: skills(&[
            "Python",
            "React",
            "Flask",
            "SQL",
            "Machine Learning",
            "Data Analysis",
            "JavaScript",
            "HTML/CSS",
        ]),
        experience_years: 3,
        education: vec!["B.Tech in Computer Science".to_string()],
        summary: "Full stack developer with a passion for AI integration. Experienced in \
                  building scalable web applications using Python and React."
            .to_string(),
        raw_text: None,
    }
}

/// Recommendations a ranker would produce for the sample resume.
pub fn sample_recommendations() -> Vec<Recommendation> {
    let jobs = sample_jobs();

    vec![
        Recommendation {
            job: jobs[1].clone(),
            score: 0.92,
            match_details: MatchDetails {
                skill_overlap_ratio: 0.83,
                semantic_similarity: 0.95,
                matched_skills: skills(&["Python", "Flask", "React", "PostgreSQL"]),
                missing_skills: skills(&["Docker", "AWS"]),
                experience_match: ExperienceMatch::Perfect,
                reasoning: "Strong match for both Frontend (React) and Backend (Python/Flask) \
                            skills. Experience level aligns perfectly."
                    .to_string(),
            },
        },
        Recommendation {
            job: jobs[2].clone(),
            score: 0.78,
            match_details: MatchDetails {
                skill_overlap_ratio: 0.60,
                semantic_similarity: 0.85,
                matched_skills: skills(&["Python", "NLP", "scikit-learn"]),
                missing_skills: skills(&["PyTorch", "MLOps"]),
                experience_match: ExperienceMatch::Underqualified,
                reasoning: "Good potential due to Python and ML background, but missing \
                            specific MLOps experience."
                    .to_string(),
            },
        },
        Recommendation {
            job: jobs[0].clone(),
            score: 0.65,
            match_details: MatchDetails {
                skill_overlap_ratio: 0.40,
                semantic_similarity: 0.70,
                matched_skills: skills(&["React", "JavaScript"]),
                missing_skills: skills(&["TypeScript", "Redux", "System Design"]),
                experience_match: ExperienceMatch::Underqualified,
                reasoning: "Candidate has React experience but lacks Senior-level requirements \
                            like System Design and TypeScript."
                    .to_string(),
            },
        },
        Recommendation {
            job: jobs[3].clone(),
            score: 0.55,
            match_details: MatchDetails {
                skill_overlap_ratio: 1.0,
                semantic_similarity: 0.50,
                matched_skills: skills(&["JavaScript", "HTML", "CSS", "React"]),
                missing_skills: vec![],
                experience_match: ExperienceMatch::Overqualified,
                reasoning: "Candidate is likely overqualified for this role based on 3+ years \
                            of Full Stack experience."
                    .to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_job_ids_unique() {
        let jobs = sample_jobs();
        let ids: HashSet<&str> = jobs.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len(), "duplicate job_id in sample set");
    }

    #[test]
    fn test_resume_matches_demo_candidate() {
        let resume = sample_resume();
        assert_eq!(resume.name, "Ashiritha S");
        assert_eq!(resume.experience_years, 3);
        assert!(!resume.skills.is_empty());
        assert!(!resume.education.is_empty());
    }

    #[test]
    fn test_top_recommendation_is_full_stack_role() {
        let recs = sample_recommendations();
        let top = recs
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .expect("sample set is non-empty");
        assert_eq!(top.score, 0.92);
        assert_eq!(top.job.title, "Full Stack Developer (Python/React)");
    }

    #[test]
    fn test_scores_and_ratios_within_unit_range() {
        for rec in sample_recommendations() {
            assert!(
                (0.0..=1.0).contains(&rec.score),
                "score {} out of range for job {}",
                rec.score,
                rec.job.job_id
            );
            assert!((0.0..=1.0).contains(&rec.match_details.skill_overlap_ratio));
            assert!((0.0..=1.0).contains(&rec.match_details.semantic_similarity));
        }
    }

    #[test]
    fn test_matched_and_missing_skills_disjoint() {
        for rec in sample_recommendations() {
            let matched: HashSet<&str> = rec
                .match_details
                .matched_skills
                .iter()
                .map(String::as_str)
                .collect();
            for missing in &rec.match_details.missing_skills {
                assert!(
                    !matched.contains(missing.as_str()),
                    "{} listed as both matched and missing for job {}",
                    missing,
                    rec.job.job_id
                );
            }
        }
    }
}
