//! Goal-selection step: togglable fitness goal cards.
//!
//! At least one goal must be selected before the step can complete; back
//! navigation abandons in-progress edits without touching merged data.

use leptos::prelude::*;

use crate::core::{FitnessGoal, GoalSelection, WizardState};
use crate::ui::common::StepNavigation;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

#[component]
pub fn GoalsStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let notifications = use_notifications();

    // Start from previously merged goals so re-entry keeps the selection
    let selection =
        RwSignal::new(wizard.with_untracked(|w| GoalSelection::from_record(w.record())));

    let on_back = Callback::new(move |_: ()| {
        // Retreat never merges and never validates in-progress edits
        wizard.update(|w| {
            w.back();
        });
    });

    let on_continue = Callback::new(move |_: ()| {
        let current = selection.get_untracked();
        match wizard.try_update(|w| w.submit_goals(&current)) {
            Some(Ok(())) => {
                notifications.success("Goals saved", "Your fitness goals were recorded");
            }
            Some(Err(error)) => {
                notifications.error("Nothing selected", error.to_string());
            }
            None => {}
        }
    });

    view! {
        <div class="max-w-2xl mx-auto">
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                {FitnessGoal::all()
                    .into_iter()
                    .map(|goal| view! { <GoalCard goal=goal selection=selection/> })
                    .collect_view()}
            </div>
            <StepNavigation
                on_back=on_back
                on_continue=on_continue
                continue_disabled=Signal::derive(move || selection.get().is_empty())
            />
        </div>
    }
}

/// One togglable goal card with icon and label
#[component]
fn GoalCard(goal: FitnessGoal, selection: RwSignal<GoalSelection>) -> impl IntoView {
    let is_selected = Memo::new(move |_| selection.with(|s| s.contains(goal)));

    view! {
        <button
            type="button"
            class="goal-card aspect-square flex flex-col items-center justify-center gap-3
                   rounded-lg border shadow-md hover:shadow-lg transition-shadow duration-300"
            class:goal-card-selected=move || is_selected.get()
            aria-pressed=move || is_selected.get().to_string()
            on:click=move |_| selection.update(|s| s.toggle(goal))
        >
            <Icon name=goal.icon() class="w-8 h-8"/>
            <span class="text-sm font-medium text-theme-primary">{goal.display_name()}</span>
            {move || {
                is_selected
                    .get()
                    .then(|| view! { <Icon name=icons::CHECK class="w-4 h-4"/> })
            }}
        </button>
    }
}
