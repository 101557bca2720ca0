//! Onboarding page component

use leptos::prelude::*;

use crate::ui::onboarding::OnboardingWizard;

use super::shell::{SiteFooter, SiteHeader};

/// Onboarding page hosting the wizard
#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>

            <main class="flex-1">
                <OnboardingWizard/>
            </main>

            <SiteFooter/>
        </div>
    }
}
