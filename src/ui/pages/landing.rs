//! Landing page component
//!
//! A simple hero page pointing at the auth screens and the onboarding flow.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::shell::{SiteFooter, SiteHeader};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    let on_get_started = move |_| {
        navigate("/signup", Default::default());
    };

    view! {
        <Title text="FitFlow - Your fitness journey starts here"/>
        <Meta
            name="description"
            content="Create an account and complete a short onboarding to personalize your fitness plan."
        />

        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>

            // Hero section
            <main class="flex-1 flex items-center justify-center">
                <div class="text-center px-4 max-w-2xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "FitFlow"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-xl mx-auto mb-10 leading-relaxed">
                        "Tell us a little about yourself and your goals, and we'll shape a fitness plan around you."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <button
                            class="btn-base btn-primary btn-lg"
                            on:click=on_get_started
                        >
                            "Get Started"
                        </button>
                        <A
                            href="/login"
                            attr:class="px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                        >
                            "Login"
                        </A>
                    </div>

                    <p class="mt-8 text-sm text-theme-tertiary">
                        "Already signed up? "
                        <A href="/onboarding" attr:class="text-accent-primary hover:underline">
                            "Continue onboarding"
                        </A>
                    </p>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
