//! Processing screen: progress bar plus the four-stage checklist.
//!
//! Everything rendered here is a pure function of the progress counter
//! owned by `App`.

use leptos::prelude::*;

use crate::state::{PipelineStage, StageStatus, PIPELINE_STAGES};

#[component]
pub fn LoadingState(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="loading-state">
            <style>{include_str!("loading_state.css")}</style>

            <div class="loading-icon">
                <div class="loading-icon-pulse"></div>
                <div class="loading-icon-core">"AI"</div>
            </div>

            <div class="loading-heading">
                <h3>"Analyzing Profile"</h3>
                <p>"Our AI is reading your resume to find the perfect match."</p>
            </div>

            <div class="progress-section">
                <div class="progress-readout">
                    <span>"Processing..."</span>
                    <span class="progress-percent">
                        {move || format!("{}%", progress.get().round())}
                    </span>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%", progress.get())
                    ></div>
                </div>
            </div>

            <div class="stage-list">
                {PIPELINE_STAGES
                    .iter()
                    .map(|stage| view! { <StageRow stage=*stage progress=progress /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn StageRow(stage: PipelineStage, progress: Signal<f64>) -> impl IntoView {
    let status = move || stage.status(progress.get());

    let marker = move || match status() {
        StageStatus::Complete => view! {
            <span class="stage-marker stage-marker-complete">"\u{2713}"</span>
        }
        .into_any(),
        StageStatus::Active => view! {
            <span class="stage-marker stage-marker-active">
                <span class="stage-spinner"></span>
            </span>
        }
        .into_any(),
        StageStatus::Pending => view! {
            <span class="stage-marker stage-marker-pending">
                <span class="stage-dot"></span>
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="stage-row" class:stage-row-active=move || status() == StageStatus::Active>
            {marker}
            <div class="stage-text">
                <p
                    class="stage-label"
                    class:stage-label-complete=move || status() == StageStatus::Complete
                    class:stage-label-active=move || status() == StageStatus::Active
                >
                    {stage.label}
                </p>
                {move || (status() == StageStatus::Active).then(|| view! {
                    <p class="stage-hint">"Working on it..."</p>
                })}
            </div>
        </div>
    }
}
