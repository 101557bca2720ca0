//! Terminal summary view: shows the merged record and finishes the flow.
//!
//! This is the completion state past the last data step; it collects no new
//! fields. Finishing is where a backend submission would attach later; for
//! now the payload is logged and acknowledged with a toast.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::WizardState;
use crate::ui::common::{Card, CardContent, StepNavigation};
use crate::ui::notifications::use_notifications;

#[component]
pub fn SummaryStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let notifications = use_notifications();

    let on_back = Callback::new(move |_: ()| {
        wizard.update(|w| {
            w.back();
        });
    });

    let on_finish = Callback::new(move |_: ()| {
        let payload = wizard.with_untracked(|w| w.record().to_payload_json());
        log!("onboarding payload: {}", payload);
        notifications.success("Onboarding complete", "Welcome aboard! Your profile is ready.");
    });

    view! {
        <Card class="max-w-2xl mx-auto".to_string()>
            <CardContent>
                <dl class="space-y-4">
                    <div class="flex items-center justify-between">
                        <dt class="text-sm text-theme-secondary">"Full Name"</dt>
                        <dd class="text-sm font-medium text-theme-primary">
                            {move || wizard.with(|w| {
                                w.record().customer_name.clone().unwrap_or_default()
                            })}
                        </dd>
                    </div>
                    <div class="flex items-center justify-between">
                        <dt class="text-sm text-theme-secondary">"Age"</dt>
                        <dd class="text-sm font-medium text-theme-primary">
                            {move || wizard.with(|w| {
                                w.record()
                                    .customer_age
                                    .map(|age| age.to_string())
                                    .unwrap_or_default()
                            })}
                        </dd>
                    </div>
                    <div class="flex items-center justify-between">
                        <dt class="text-sm text-theme-secondary">"Gender"</dt>
                        <dd class="text-sm font-medium text-theme-primary">
                            {move || wizard.with(|w| {
                                w.record()
                                    .customer_gender
                                    .map(|g| g.display_name())
                                    .unwrap_or_default()
                            })}
                        </dd>
                    </div>
                    <div class="flex items-start justify-between">
                        <dt class="text-sm text-theme-secondary">"Fitness Goals"</dt>
                        <dd class="flex flex-wrap justify-end gap-1.5">
                            {move || wizard.with(|w| {
                                w.record()
                                    .fitness_goals
                                    .iter()
                                    .flatten()
                                    .map(|goal| view! {
                                        <span class="goal-chip text-xs font-medium rounded-full px-2.5 py-0.5">
                                            {goal.display_name()}
                                        </span>
                                    })
                                    .collect_view()
                            })}
                        </dd>
                    </div>
                </dl>

                <StepNavigation
                    continue_text="Finish".to_string()
                    on_back=on_back
                    on_continue=on_finish
                />
            </CardContent>
        </Card>
    }
}
