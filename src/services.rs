//! Mock resume submission service.
//!
//! Stands in for the real parse/embed/rank backend: it waits a fixed delay,
//! then returns the fixture resume and recommendations regardless of input.
//! A real implementation would POST the payload and deserialize the
//! response; swapping one in only means replacing `process_resume`.

use wasm_bindgen_futures::JsFuture;

use crate::fixtures::{sample_recommendations, sample_resume};
use crate::types::{Recommendation, ResumeData};

/// What the user handed us. The mock never inspects the payload.
#[derive(Debug, Clone)]
pub enum ResumeInput {
    /// A file picked or dropped in the upload zone, forwarded verbatim.
    File(web_sys::File),
    /// Pasted resume text.
    Text(String),
    /// The canned demo resume.
    Sample,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub resume: ResumeData,
    pub recommendations: Vec<Recommendation>,
}

/// Knobs for the mock. `fail` is the fault injector: the real service's
/// error path is otherwise unreachable from fixture data.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOptions {
    pub latency_ms: i32,
    pub fail: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        ServiceOptions { latency_ms: 2500, fail: false }
    }
}

/// Submit a resume and wait for the (simulated) ranking to finish.
pub async fn process_resume(
    input: ResumeInput,
    options: ServiceOptions,
) -> Result<SubmissionResult, String> {
    delay(options.latency_ms).await;
    respond(&input, &options)
}

/// The mock's decision core, kept synchronous so it can be tested off the
/// browser event loop.
fn respond(_input: &ResumeInput, options: &ServiceOptions) -> Result<SubmissionResult, String> {
    if options.fail {
        return Err("simulated processing failure".to_string());
    }
    Ok(SubmissionResult {
        resume: sample_resume(),
        recommendations: sample_recommendations(),
    })
}

/// True when the page URL carries the `simulate_failure` flag, which arms
/// the fault injector for manual testing of the error screen.
pub fn failure_requested() -> bool {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .is_some_and(|query| query.contains("simulate_failure"))
}

/// Sleep on the browser event loop by awaiting a `setTimeout`-resolved
/// promise.
async fn delay(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_returns_fixture_payload() {
        let result = respond(
            &ResumeInput::Text("ten years of Python and React experience".to_string()),
            &ServiceOptions::default(),
        )
        .expect("mock should resolve");

        assert_eq!(result.resume.name, "Ashiritha S");
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_respond_ignores_input_payload() {
        let opts = ServiceOptions::default();
        let from_text = respond(&ResumeInput::Text("x".repeat(500)), &opts).unwrap();
        let from_sample = respond(&ResumeInput::Sample, &opts).unwrap();
        assert_eq!(from_text, from_sample);
    }

    #[test]
    fn test_fault_injection_rejects() {
        let opts = ServiceOptions { fail: true, ..Default::default() };
        let err = respond(&ResumeInput::Sample, &opts).unwrap_err();
        assert!(err.contains("failure"), "unexpected error text: {}", err);
    }
}
