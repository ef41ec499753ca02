//! TopHeader component - application top bar.
//!
//! Contains the application title and the backend health badge.

use crate::domain::a001_deal_submission::ui::HealthBadge;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"ReHUB"</span>
                <span class="top-header__subtitle">"Deal Submission"</span>
            </div>

            <div class="top-header__actions">
                <HealthBadge />
            </div>
        </div>
    }
}
