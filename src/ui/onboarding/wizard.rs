//! Onboarding wizard controller
//!
//! Owns the shared wizard state and renders exactly one step view at a
//! time, with the progress header above it. Steps mutate the state only
//! through its submit/back methods, so merged answers survive navigation.

use leptos::prelude::*;

use crate::core::{WizardState, WizardStep};
use crate::ui::common::ProgressBar;

use super::goals_step::GoalsStep;
use super::identity_step::IdentityStep;
use super::summary_step::SummaryStep;

/// Delay before the progress bar reveals the current step's value
const PROGRESS_REVEAL_DELAY_MS: u32 = 200;

#[component]
pub fn OnboardingWizard() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::new());

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let progress = Signal::derive(move || step.get().progress_percent());

    view! {
        <div class="max-w-3xl mx-auto px-4 py-10">
            // Progress header
            <div class="flex flex-col items-center justify-center gap-2">
                <ProgressBar target=progress delay_ms=PROGRESS_REVEAL_DELAY_MS class="w-3/5"/>
                <p class="text-sm text-theme-secondary">
                    {move || {
                        let current = step.get();
                        format!(
                            "Step {} out of {} - {}%",
                            current.step_number(),
                            WizardStep::total_steps(),
                            current.progress_percent(),
                        )
                    }}
                </p>
            </div>

            // Step heading
            <div class="text-center mt-10 space-y-4">
                <h1 class="text-2xl font-bold text-theme-primary">
                    {move || step.get().title()}
                </h1>
                <p class="text-theme-secondary">
                    {move || step.get().subtitle()}
                </p>
            </div>

            // Exactly one step view at a time
            <div class="mt-10">
                {move || match step.get() {
                    WizardStep::Identity => view! { <IdentityStep wizard=wizard/> }.into_any(),
                    WizardStep::Goals => view! { <GoalsStep wizard=wizard/> }.into_any(),
                    WizardStep::Summary => view! { <SummaryStep wizard=wizard/> }.into_any(),
                }}
            </div>
        </div>
    }
}
