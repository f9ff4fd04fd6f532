//! Load Error Component
//!
//! Error message shown in place of the content, with the recent log lines.

use leptos::prelude::*;

#[component]
pub fn LoadErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    let recent = console_logger::recent_lines();
    let has_lines = !recent.is_empty();
    let details = recent.join("\n");

    view! {
        <div class="load-error">
            <p>"Could not load the pack data. " {message}</p>
            <Show when=move || has_lines>
                <details class="log-details">
                    <summary>"Details"</summary>
                    <pre>{details.clone()}</pre>
                </details>
            </Show>
        </div>
    }
}
