//! Login page component

use leptos::prelude::*;

use crate::ui::auth::{AuthForm, AuthFormConfig};

use super::shell::{SiteFooter, SiteHeader};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = AuthFormConfig {
        title: "Login to your account".to_string(),
        description: "Enter your email below to login to your account".to_string(),
        button_one: "Login".to_string(),
        button_two: "Login with Google".to_string(),
        footer: "Don't have an account?".to_string(),
        footer_button: "Sign up".to_string(),
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
