//! Resume intake: file drop zone, paste-text tab, and a demo shortcut.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::ResumeInput;

/// Pasted text must be longer than this (trimmed) before it can be
/// submitted; anything shorter is not a plausible resume.
pub const MIN_TEXT_LEN: usize = 20;

/// Whether pasted text is substantial enough to submit.
pub fn text_submittable(text: &str) -> bool {
    text.trim().len() > MIN_TEXT_LEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    File,
    Text,
}

#[component]
pub fn UploadZone(#[prop(into)] on_upload: Callback<ResumeInput>) -> impl IntoView {
    let (mode, set_mode) = signal(InputMode::File);
    let (text_input, set_text_input) = signal(String::new());
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "resume-file-input";

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_upload.run(ResumeInput::File(file));
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            on_upload.run(ResumeInput::File(file));
        }
    };

    let on_text_submit = move |_| {
        let text = text_input.get();
        if text_submittable(&text) {
            on_upload.run(ResumeInput::Text(text));
        }
    };

    view! {
        <div class="upload-zone">
            <style>{include_str!("upload_zone.css")}</style>

            <div class="upload-header">
                <h2>"Find Your Perfect Job"</h2>
                <p>"Upload your resume to get AI-ranked recommendations instantly."</p>
            </div>

            <div class="upload-tabs">
                <button
                    class="upload-tab"
                    class:upload-tab-active=move || mode.get() == InputMode::File
                    on:click=move |_| set_mode.set(InputMode::File)
                >
                    "Upload PDF/DOCX"
                </button>
                <button
                    class="upload-tab"
                    class:upload-tab-active=move || mode.get() == InputMode::Text
                    on:click=move |_| set_mode.set(InputMode::Text)
                >
                    "Paste Text"
                </button>
            </div>

            <div class="upload-body">
                {move || match mode.get() {
                    InputMode::File => view! {
                        <div class="upload-file-pane">
                            <div
                                class="drop-zone"
                                class:drop-zone-active=move || is_over.get()
                                on:dragover=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    set_is_over.set(true);
                                }
                                on:dragleave=move |_| set_is_over.set(false)
                                on:drop=on_drop
                            >
                                <div class="drop-icon">"\u{1F4C4}"</div>
                                <label for=file_input_id class="drop-main">
                                    "Click to upload or drag and drop"
                                </label>
                                <p class="drop-hint">"PDF, DOCX or TXT (MAX. 5MB)"</p>
                                <input
                                    type="file"
                                    id=file_input_id
                                    accept=".pdf,.docx,.txt"
                                    style="display: none"
                                    on:change=on_file_change
                                />
                            </div>

                            <div class="upload-divider">
                                <span>"Or try demo"</span>
                            </div>

                            <button
                                class="btn btn-outline upload-demo-btn"
                                on:click=move |_| on_upload.run(ResumeInput::Sample)
                            >
                                "Use Sample Resume (Ashiritha S)"
                            </button>
                        </div>
                    }.into_any(),

                    InputMode::Text => view! {
                        <div class="upload-text-pane">
                            <textarea
                                class="upload-textarea"
                                placeholder="Paste your resume content here..."
                                prop:value=move || text_input.get()
                                on:input=move |ev| {
                                    set_text_input.set(event_target_value(&ev));
                                }
                            ></textarea>
                            <button
                                class="btn btn-primary upload-submit-btn"
                                disabled=move || !text_submittable(&text_input.get())
                                on:click=on_text_submit
                            >
                                "Analyze Resume"
                            </button>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Helper to get event target
fn event_target<T: wasm_bindgen::JsCast>(ev: &web_sys::Event) -> T {
    ev.target().unwrap().dyn_into::<T>().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_gate_at_boundary() {
        assert!(!text_submittable(""));
        assert!(!text_submittable("short resume"));
        // Exactly 20 trimmed characters is still too short.
        assert!(!text_submittable("a".repeat(MIN_TEXT_LEN).as_str()));
        assert!(text_submittable("a".repeat(MIN_TEXT_LEN + 1).as_str()));
    }

    #[test]
    fn test_text_gate_ignores_surrounding_whitespace() {
        let padded = format!("   {}   \n", "a".repeat(MIN_TEXT_LEN));
        assert!(!text_submittable(&padded), "padding must not count toward the gate");
        let real = format!("  {}  ", "a".repeat(MIN_TEXT_LEN + 1));
        assert!(text_submittable(&real));
    }
}
