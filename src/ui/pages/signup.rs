//! Signup page component

use leptos::prelude::*;

use crate::ui::auth::{AuthForm, AuthFormConfig};

use super::shell::{SiteFooter, SiteHeader};

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    let config = AuthFormConfig {
        title: "Create new account".to_string(),
        description: "Enter your email below to create a new account".to_string(),
        button_one: "Sign Up".to_string(),
        button_two: "Sign Up with Google".to_string(),
        footer: "Already have an account?".to_string(),
        footer_button: "Log in".to_string(),
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>

            <main class="flex-1 flex items-center justify-center p-6 md:p-10">
                <div class="w-full max-w-sm">
                    <AuthForm config=config/>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
