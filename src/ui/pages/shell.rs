//! Shared page chrome: site header with logo and theme toggle, and footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::theme::{ThemeMode, use_theme_context};

/// Site header with logo and theme toggle
#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <header class="border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                      d="M6.5 6.5h11v11h-11z" />
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                      d="M3 9v6M21 9v6M9 3h6M9 21h6" />
                            </svg>
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"FitFlow"</span>
                    </A>

                    // Theme toggle
                    <button
                        class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                        on:click=move |_| theme.toggle()
                        title="Toggle theme"
                    >
                        {move || {
                            if theme.mode.get() == ThemeMode::Dark {
                                view! {
                                    <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                              d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z" />
                                    </svg>
                                }
                            } else {
                                view! {
                                    <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                              d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z" />
                                    </svg>
                                }
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Site footer
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-4 border-t border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-sm text-theme-tertiary">
                    "© 2026 FitFlow. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
