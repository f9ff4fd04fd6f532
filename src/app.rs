//! Pack Checklist App
//!
//! Root component. One bundle serves both pages: the checklist view on the
//! checklist path, the landing view everywhere else.

use leptos::prelude::*;

use crate::components::{ChecklistPage, LandingPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let on_checklist = navigation::is_checklist_path(&navigation::current_pathname(), &config);
    log::debug!("[APP] Mounting {} view", if on_checklist { "checklist" } else { "landing" });

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <main class="main-content">
            {if on_checklist {
                view! { <ChecklistPage /> }.into_any()
            } else {
                view! { <LandingPage /> }.into_any()
            }}
        </main>
    }
}
