//! Results screen: resume summary header plus the ranked job list.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::types::{Recommendation, ResumeData};

#[component]
pub fn ResultsView(
    resume: ResumeData,
    recommendations: Vec<Recommendation>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let match_count = recommendations.len();

    view! {
        <div class="results-view">
            <style>{include_str!("results_view.css")}</style>

            <div class="resume-header card">
                <div class="resume-identity">
                    <h2 class="resume-name">{resume.name.clone()}</h2>
                    <div class="resume-contact">
                        <span>{resume.email.clone()}</span>
                        {resume.phone.clone().map(|phone| view! { <span>{phone}</span> })}
                    </div>
                    <p class="resume-summary">{resume.summary.clone()}</p>
                </div>

                <div class="resume-facts">
                    <div class="resume-fact">
                        <span class="fact-label">"Experience"</span>
                        <span class="fact-value">
                            {format!("{} years", resume.experience_years)}
                        </span>
                    </div>
                    <div class="resume-fact">
                        <span class="fact-label">"Education"</span>
                        <span class="fact-value">{resume.education.join(", ")}</span>
                    </div>
                </div>

                <div class="resume-skills">
                    {resume.skills
                        .iter()
                        .map(|skill| view! { <span class="skill-chip">{skill.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>

                <button class="btn btn-secondary reset-btn" on:click=move |_| on_reset.run(())>
                    "Upload Another Resume"
                </button>
            </div>

            <div class="results-list-header">
                <h3>"Top Matches"</h3>
                <span class="results-count">
                    {format!("{} roles ranked by fit", match_count)}
                </span>
            </div>

            <div class="results-list">
                {recommendations
                    .into_iter()
                    .enumerate()
                    .map(|(index, recommendation)| view! {
                        <JobCard recommendation=recommendation rank={index + 1} />
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
