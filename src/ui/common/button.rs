use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::from(false))]
    loading: Signal<bool>,
    /// Optional title/tooltip
    #[prop(optional)]
    title: Option<String>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    on_click.run(())
                }
            }
            disabled=move || disabled.get() || loading.get()
            title=title
        >
            {move || if loading.get() {
                view! {
                    <span class="btn-spinner">
                        <Icon name=icons::SPINNER class="icon-spin"/>
                    </span>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="icon-btn"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}

/// Button group container for multiple buttons
#[component]
pub fn ButtonGroup(
    /// Button elements
    children: Children,
    /// Spacing between buttons
    #[prop(default = "space-x-2")]
    spacing: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center {}", spacing)>
            {children()}
        </div>
    }
}

/// Back/Continue button pair for wizard steps
#[component]
pub fn StepNavigation(
    /// Continue button text
    #[prop(default = "Continue".to_string())]
    continue_text: String,
    /// Continue click handler
    on_continue: Callback<()>,
    /// Back click handler; the back button only renders when present
    #[prop(optional, into)]
    on_back: Option<Callback<()>>,
    /// Whether continue is disabled
    #[prop(into, default = Signal::from(false))]
    continue_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between pt-6">
            {match on_back {
                Some(on_back) => view! {
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=on_back
                        icon=icons::CHEVRON_LEFT
                    >
                        "Back"
                    </Button>
                }.into_any(),
                None => view! { <span></span> }.into_any(),
            }}
            <Button
                variant=ButtonVariant::Primary
                on_click=on_continue
                disabled=continue_disabled
            >
                {continue_text}
            </Button>
        </div>
    }
}
