use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, number, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional helper text shown under the input
    #[prop(optional)]
    description: Option<String>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            {description.map(|desc| view! {
                <p class="text-sm text-theme-muted">{desc}</p>
            })}
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Placeholder shown while nothing is selected
    #[prop(optional)]
    placeholder: Option<String>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional helper text shown under the select
    #[prop(optional)]
    description: Option<String>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <select
                class="select-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run(val);
                }
                disabled=disabled
            >
                {placeholder.map(|text| view! {
                    <option value="" disabled=true>{text}</option>
                })}
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val.clone()>{text}</option>
                    }
                }).collect_view()}
            </select>
            {description.map(|desc| view! {
                <p class="text-sm text-theme-muted">{desc}</p>
            })}
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
