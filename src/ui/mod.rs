//! UI components for the FitFlow application

pub mod auth;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod onboarding;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
pub use notifications::{
    NotificationManager, NotificationsContainer, provide_notifications, use_notifications,
};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
