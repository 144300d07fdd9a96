use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-brand">
                    <span class="brand-icon">"\u{1F4BC}"</span>
                    <span class="brand-name">"JobMatch AI"</span>
                </div>
                <div class="navbar-links">
                    <span class="nav-link nav-link-active">"Resume Matcher"</span>
                    <span class="nav-link">"Jobs Database"</span>
                </div>
                <button class="btn btn-ghost">"API Docs"</button>
            </div>
        </nav>
    }
}
