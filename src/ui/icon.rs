use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for styling
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names for convenience
#[allow(dead_code)]
pub mod icons {
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const SPINNER: &str = "spinner";
    pub const USER: &str = "user";
}
