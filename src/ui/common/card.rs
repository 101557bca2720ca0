use leptos::prelude::*;

/// Card container with border, background and shadow
#[component]
pub fn Card(
    /// Card content
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "card-base".to_string()
    } else {
        format!("card-base {}", class)
    };

    view! {
        <div class=full_classes>
            {children()}
        </div>
    }
}

/// Card header section holding the title and description
#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! {
        <div class="px-6 pt-6 space-y-1.5">
            {children()}
        </div>
    }
}

/// Card title line
#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! {
        <h3 class="text-lg font-semibold text-theme-primary">
            {children()}
        </h3>
    }
}

/// Muted description line under the card title
#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! {
        <p class="text-sm text-theme-secondary">
            {children()}
        </p>
    }
}

/// Card body section
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! {
        <div class="p-6">
            {children()}
        </div>
    }
}
