//! Identity/demographics step: full name, age and gender.
//!
//! Validates each field locally before anything is merged; failures show as
//! inline errors and leave the wizard untouched.

use leptos::prelude::*;

use crate::core::{Gender, IdentityInput, WizardState};
use crate::ui::common::{Card, CardContent, FormField, SelectField, StepNavigation};
use crate::ui::notifications::use_notifications;

#[component]
pub fn IdentityStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let notifications = use_notifications();

    // Pre-fill from the shared record so re-entry keeps prior answers
    let prefill = wizard.with_untracked(|w| IdentityInput::from_record(w.record()));
    let name = RwSignal::new(prefill.name);
    let age = RwSignal::new(prefill.age);
    let gender = RwSignal::new(prefill.gender);

    let name_error = RwSignal::new(None::<String>);
    let age_error = RwSignal::new(None::<String>);
    let gender_error = RwSignal::new(None::<String>);

    let on_continue = Callback::new(move |_: ()| {
        let input = IdentityInput {
            name: name.get_untracked(),
            age: age.get_untracked(),
            gender: gender.get_untracked(),
        };

        match wizard.try_update(|w| w.submit_identity(&input)) {
            Some(Ok(())) => {
                notifications.success(
                    "Profile saved",
                    "Your details were added to your onboarding profile",
                );
            }
            Some(Err(errors)) => {
                name_error.set(errors.name.map(|e| e.to_string()));
                age_error.set(errors.age.map(|e| e.to_string()));
                gender_error.set(errors.gender.map(|e| e.to_string()));
            }
            None => {}
        }
    });

    let gender_options: Vec<(String, String)> = Gender::all()
        .iter()
        .map(|g| (g.as_str().to_string(), g.display_name().to_string()))
        .collect();

    view! {
        <Card class="max-w-2xl mx-auto".to_string()>
            <CardContent>
                <div class="space-y-6">
                    <FormField
                        label="Full Name".to_string()
                        required=true
                        placeholder="Please input your name here".to_string()
                        value=name
                        on_input=Callback::new(move |value| {
                            name.set(value);
                            name_error.set(None);
                        })
                        description="Your full name".to_string()
                        error=name_error
                    />

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <FormField
                            label="Age".to_string()
                            required=true
                            input_type="number"
                            placeholder="Please input your age here".to_string()
                            value=age
                            on_input=Callback::new(move |value| {
                                age.set(value);
                                age_error.set(None);
                            })
                            description="Your age".to_string()
                            error=age_error
                        />
                        <SelectField
                            label="Gender".to_string()
                            required=true
                            value=gender
                            on_change=Callback::new(move |value| {
                                gender.set(value);
                                gender_error.set(None);
                            })
                            options=gender_options
                            placeholder="Please enter your gender".to_string()
                            description="Your gender".to_string()
                            error=gender_error
                        />
                    </div>

                    // First step: back is not offered
                    <StepNavigation on_continue=on_continue/>
                </div>
            </CardContent>
        </Card>
    }
}
