//! Shared authentication form template
//!
//! One parameterized card renders both the login and signup screens; the
//! pages differ only in the strings they pass in. The template carries no
//! state and no submission logic.

use leptos::prelude::*;

use crate::ui::common::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Text labels substituted verbatim into the rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFormConfig {
    /// Title displayed at the top of the card
    pub title: String,
    /// Subtitle shown below the title
    pub description: String,
    /// Label for the primary submit button
    pub button_one: String,
    /// Label for the secondary button (e.g. alternative login)
    pub button_two: String,
    /// Text displayed in the footer below the form
    pub footer: String,
    /// Label for the footer action link
    pub footer_button: String,
}

/// Labeled email/password form with two action buttons and a footer link
#[component]
pub fn AuthForm(config: AuthFormConfig) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <Card>
                <CardHeader>
                    <CardTitle>{config.title}</CardTitle>
                    <CardDescription>{config.description}</CardDescription>
                </CardHeader>
                <CardContent>
                    <form>
                        <div class="flex flex-col gap-6">
                            <div class="space-y-1.5">
                                <label class="label" for="email">"Email"</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    autocomplete="email"
                                    class="input-base"
                                    placeholder="m@example.com"
                                    required=true
                                />
                            </div>
                            <div class="space-y-1.5">
                                <div class="flex items-center">
                                    <label class="label" for="password">"Password"</label>
                                    <a
                                        href="#"
                                        class="ml-auto inline-block text-sm text-theme-secondary hover:underline"
                                    >
                                        "Forgot your password?"
                                    </a>
                                </div>
                                <input
                                    type="password"
                                    id="password"
                                    name="password"
                                    autocomplete="current-password"
                                    class="input-base"
                                    required=true
                                />
                            </div>
                            <div class="flex flex-col gap-3">
                                <button type="submit" class="btn-base btn-primary w-full">
                                    {config.button_one}
                                </button>
                                <button type="button" class="btn-base btn-outline w-full">
                                    {config.button_two}
                                </button>
                            </div>
                        </div>
                        <div class="mt-4 text-center text-sm text-theme-secondary">
                            {config.footer}
                            " "
                            <a href="#" class="text-accent-primary hover:underline">
                                {config.footer_button}
                            </a>
                        </div>
                    </form>
                </CardContent>
            </Card>
        </div>
    }
}
