//! One recommendation card with expandable match detail.

use leptos::prelude::*;

use crate::types::{ExperienceMatch, MatchDetails, Recommendation};

/// Severity bucket for a displayed match score, used for color coding only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Strong,
    Moderate,
    Weak,
}

impl ScoreTier {
    pub fn from_percentage(pct: u32) -> Self {
        if pct >= 70 {
            ScoreTier::Strong
        } else if pct >= 50 {
            ScoreTier::Moderate
        } else {
            ScoreTier::Weak
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            ScoreTier::Strong => "score-strong",
            ScoreTier::Moderate => "score-moderate",
            ScoreTier::Weak => "score-weak",
        }
    }
}

fn experience_class(experience: ExperienceMatch) -> &'static str {
    match experience {
        ExperienceMatch::Perfect => "experience-badge experience-perfect",
        ExperienceMatch::Underqualified => "experience-badge experience-under",
        ExperienceMatch::Overqualified => "experience-badge experience-over",
    }
}

/// How many matched-skill chips the collapsed header shows.
const COLLAPSED_SKILL_LIMIT: usize = 4;

/// Chips for the collapsed header: a taste of the matched skills plus a
/// count of what is missing.
fn collapsed_preview(details: &MatchDetails) -> (Vec<String>, usize) {
    let preview = details
        .matched_skills
        .iter()
        .take(COLLAPSED_SKILL_LIMIT)
        .cloned()
        .collect();
    (preview, details.missing_skills.len())
}

#[component]
pub fn JobCard(recommendation: Recommendation, rank: usize) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let job = recommendation.job.clone();
    let details = recommendation.match_details.clone();

    let score_pct = (recommendation.score * 100.0).round() as u32;
    let tier_class = ScoreTier::from_percentage(score_pct).css_class();

    let semantic_pct = (details.semantic_similarity * 100.0).round() as u32;
    let overlap_pct = (details.skill_overlap_ratio * 100.0).round() as u32;

    let (preview_skills, missing_count) = collapsed_preview(&details);

    view! {
        <div class="job-card" class:job-card-expanded=move || expanded.get()>
            <style>{include_str!("job_card.css")}</style>

            <div class="job-card-header" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                <div class="job-card-main">
                    <div class="rank-block">
                        <span class="rank-number">{format!("#{}", rank)}</span>
                        <span class="rank-caption">"Rank"</span>
                    </div>
                    <div class="job-headline">
                        <h3 class="job-title">{job.title.clone()}</h3>
                        <div class="job-company">{job.company.clone()}</div>
                        <div class="job-meta">
                            <span class="job-meta-item">{job.location.clone()}</span>
                            <span class="job-meta-item">{job.posted_date.clone()}</span>
                            {job.salary_range.clone().map(|salary| view! {
                                <span class="job-meta-item job-salary">{salary}</span>
                            })}
                        </div>
                    </div>
                </div>

                <div class="job-card-score">
                    <div class="score-caption">"Match Score"</div>
                    <div class=format!("score-value {}", tier_class)>
                        {format!("{}%", score_pct)}
                    </div>
                    <span class="expand-hint">
                        {move || if expanded.get() { "\u{25B4}" } else { "\u{25BE}" }}
                    </span>
                </div>
            </div>

            {move || (!expanded.get()).then(|| view! {
                <div class="job-card-preview">
                    {preview_skills
                        .iter()
                        .map(|skill| view! {
                            <span class="skill-chip skill-matched">"\u{2713} " {skill.clone()}</span>
                        })
                        .collect::<Vec<_>>()}
                    {(missing_count > 0).then(|| view! {
                        <span class="skill-chip skill-muted">
                            {format!("+ {} missing skills", missing_count)}
                        </span>
                    })}
                </div>
            })}

            {
                let description = job.description.clone();
                let min_years = job.min_experience_years;
                move || {
                    let details = details.clone();
                    let description = description.clone();
                    expanded.get().then(|| view! {
                        <div class="job-card-detail">
                            <div class="detail-columns">
                                <div class="detail-analysis">
                                    <h4>"Why this job?"</h4>
                                    <blockquote class="reasoning">{details.reasoning.clone()}</blockquote>

                                    <h4>"Skills Analysis"</h4>
                                    <div class="skill-chip-row">
                                        {details.matched_skills
                                            .iter()
                                            .map(|skill| view! {
                                                <span class="skill-chip skill-matched">
                                                    "\u{2713} " {skill.clone()}
                                                </span>
                                            })
                                            .collect::<Vec<_>>()}
                                        {details.missing_skills
                                            .iter()
                                            .map(|skill| view! {
                                                <span class="skill-chip skill-missing">
                                                    "\u{26A0} " {skill.clone()}
                                                </span>
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>

                                    <h4>"Job Description"</h4>
                                    <p class="job-description">{description}</p>
                                </div>

                                <div class="detail-metrics">
                                    <div class="metrics-card">
                                        <h4>"Match Metrics"</h4>
                                        <MetricBar label="Semantic" percent=semantic_pct accent=true />
                                        <MetricBar label="Skills" percent=overlap_pct accent=false />
                                    </div>

                                    <div class="metrics-card">
                                        <h4>"Experience Level"</h4>
                                        <div class=experience_class(details.experience_match)>
                                            {format!("{} Match", details.experience_match.label())}
                                        </div>
                                        <p class="experience-required">
                                            {format!("Required: {} years", min_years)}
                                        </p>
                                    </div>

                                    <button class="btn btn-primary apply-btn">"Apply Now"</button>
                                </div>
                            </div>
                        </div>
                    })
                }
            }
        </div>
    }
}

/// Percent-width bar for one match metric.
#[component]
fn MetricBar(
    #[prop(into)] label: String,
    percent: u32,
    accent: bool,
) -> impl IntoView {
    let fill_class = if accent { "metric-fill metric-fill-accent" } else { "metric-fill" };

    view! {
        <div class="metric-row">
            <span class="metric-label">{label}</span>
            <div class="metric-track">
                <div class=fill_class style=format!("width: {}%", percent)></div>
            </div>
            <span class="metric-value">{format!("{}%", percent)}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_recommendations;

    #[test]
    fn test_score_tier_buckets() {
        assert_eq!(ScoreTier::from_percentage(92), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_percentage(70), ScoreTier::Strong);
        assert_eq!(ScoreTier::from_percentage(69), ScoreTier::Moderate);
        assert_eq!(ScoreTier::from_percentage(50), ScoreTier::Moderate);
        assert_eq!(ScoreTier::from_percentage(49), ScoreTier::Weak);
        assert_eq!(ScoreTier::from_percentage(0), ScoreTier::Weak);
    }

    #[test]
    fn test_display_score_rounds_to_whole_percent() {
        // 0.92 displays as 92, never truncated to 91 by float noise.
        assert_eq!((0.92_f64 * 100.0).round() as u32, 92);
        assert_eq!((0.555_f64 * 100.0).round() as u32, 56);
    }

    #[test]
    fn test_collapsed_preview_caps_chips_and_counts_missing() {
        let recs = sample_recommendations();

        // Top match has 4 matched and 2 missing skills.
        let (preview, missing) = collapsed_preview(&recs[0].match_details);
        assert_eq!(preview.len(), 4);
        assert_eq!(missing, 2);

        // Junior role: everything matched, nothing missing.
        let (preview, missing) = collapsed_preview(&recs[3].match_details);
        assert_eq!(preview, recs[3].match_details.matched_skills);
        assert_eq!(missing, 0);
    }

    #[test]
    fn test_preview_does_not_mutate_recommendation() {
        let recs = sample_recommendations();
        let before = recs[0].clone();
        let _ = collapsed_preview(&recs[0].match_details);
        assert_eq!(recs[0], before);
    }
}
