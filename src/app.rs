use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::components::loading_state::LoadingState;
use crate::components::navbar::Navbar;
use crate::components::results_view::ResultsView;
use crate::components::upload_zone::UploadZone;
use crate::services::{self, ResumeInput, ServiceOptions};
use crate::state::{
    advance_progress, rank_recommendations, AppState, ERROR_RESET_MS, PROGRESS_TICK_MS,
    RESULTS_DELAY_MS,
};
use crate::types::{Recommendation, ResumeData};

/// Application shell and screen state controller.
///
/// All screen transitions happen here: the upload/results/error components
/// only report events back through callbacks, and the processing screen is a
/// pure view over the progress counter.
#[component]
pub fn App() -> impl IntoView {
    let (app_state, set_app_state) = signal(AppState::Upload);
    let (resume, set_resume) = signal::<Option<ResumeData>>(None);
    let (recommendations, set_recommendations) = signal::<Vec<Recommendation>>(Vec::new());
    let (progress, set_progress) = signal(0.0_f64);

    // Browser timer handles. At most one of each is live; both are cleared
    // before a new submission and on unmount.
    let progress_interval = StoredValue::new(None::<i32>);
    let pending_timeout = StoredValue::new(None::<i32>);

    let clear_progress_interval = move || {
        if let Some(id) = progress_interval.get_value() {
            web_sys::window().unwrap().clear_interval_with_handle(id);
            progress_interval.set_value(None);
        }
    };

    let clear_pending_timeout = move || {
        if let Some(id) = pending_timeout.get_value() {
            web_sys::window().unwrap().clear_timeout_with_handle(id);
            pending_timeout.set_value(None);
        }
    };

    let start_progress_interval = move || {
        let tick = Closure::<dyn FnMut()>::new(move || {
            set_progress.update(|p| *p = advance_progress(*p));
        });
        let id = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                PROGRESS_TICK_MS,
            )
            .unwrap();
        tick.forget();
        progress_interval.set_value(Some(id));
    };

    let handle_upload = move |input: ResumeInput| {
        // One timer at a time: drop anything a previous run left behind.
        clear_progress_interval();
        clear_pending_timeout();

        set_app_state.set(AppState::Processing);
        set_progress.set(0.0);
        start_progress_interval();

        let options = ServiceOptions {
            fail: services::failure_requested(),
            ..Default::default()
        };

        spawn_local(async move {
            match services::process_resume(input, options).await {
                Ok(result) => {
                    clear_progress_interval();
                    set_progress.set(100.0);

                    // Hold the full bar briefly before switching views.
                    let show_results = Closure::once(move || {
                        pending_timeout.set_value(None);
                        set_resume.set(Some(result.resume));
                        set_recommendations.set(rank_recommendations(result.recommendations));
                        set_app_state.set(AppState::Results);
                    });
                    let id = web_sys::window()
                        .unwrap()
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            show_results.as_ref().unchecked_ref(),
                            RESULTS_DELAY_MS,
                        )
                        .unwrap();
                    show_results.forget();
                    pending_timeout.set_value(Some(id));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Resume processing failed: {}", err).into(),
                    );
                    clear_progress_interval();
                    set_app_state.set(AppState::Error);

                    let back_to_upload = Closure::once(move || {
                        pending_timeout.set_value(None);
                        set_progress.set(0.0);
                        set_app_state.set(AppState::Upload);
                    });
                    let id = web_sys::window()
                        .unwrap()
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            back_to_upload.as_ref().unchecked_ref(),
                            ERROR_RESET_MS,
                        )
                        .unwrap();
                    back_to_upload.forget();
                    pending_timeout.set_value(Some(id));
                }
            }
        });
    };

    // Safe from any state; also used by the error screen so a pending
    // auto-revert can never fire into a later submission.
    let handle_reset = move || {
        clear_progress_interval();
        clear_pending_timeout();
        set_resume.set(None);
        set_recommendations.set(Vec::new());
        set_progress.set(0.0);
        set_app_state.set(AppState::Upload);
    };

    on_cleanup(move || {
        clear_progress_interval();
        clear_pending_timeout();
    });

    view! {
        <div class="app-shell">
            <Navbar />
            <main class="content">
                {move || match app_state.get() {
                    AppState::Upload => view! {
                        <div class="upload-screen">
                            <UploadZone on_upload=Callback::new(move |input| handle_upload(input)) />

                            <div class="feature-steps">
                                <FeatureStep
                                    number=1
                                    title="Upload Resume"
                                    body="Drag & drop your PDF or paste text directly. We handle the parsing."
                                />
                                <FeatureStep
                                    number=2
                                    title="AI Matching"
                                    body="Our advanced model extracts skills and computes semantic similarity."
                                />
                                <FeatureStep
                                    number=3
                                    title="Get Hired"
                                    body="View top ranked jobs, analysis charts, and apply directly."
                                />
                            </div>
                        </div>
                    }.into_any(),

                    AppState::Processing => view! {
                        <div class="processing-screen">
                            <LoadingState progress=progress />
                        </div>
                    }.into_any(),

                    AppState::Results => match resume.get() {
                        Some(resume_data) => view! {
                            <ResultsView
                                resume=resume_data
                                recommendations=recommendations.get()
                                on_reset=Callback::new(move |_| handle_reset())
                            />
                        }.into_any(),
                        None => view! {
                            <p class="empty-results">"No results to show."</p>
                        }.into_any(),
                    },

                    AppState::Error => view! {
                        <div class="error-screen">
                            <div class="error-icon">"\u{26A0}"</div>
                            <h2>"Something went wrong"</h2>
                            <p>
                                "We couldn't parse your resume. Please check the file and try again."
                            </p>
                            <button class="btn btn-dark" on:click=move |_| handle_reset()>
                                "Try Again"
                            </button>
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn FeatureStep(
    number: u32,
    #[prop(into)] title: String,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <div class="feature-step">
            <div class="feature-step-number">{number}</div>
            <h3 class="feature-step-title">{title}</h3>
            <p class="feature-step-body">{body}</p>
        </div>
    }
}
