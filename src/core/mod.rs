//! Core domain models and business logic for the onboarding flow

mod notification;
mod onboarding;
pub mod validation;

#[cfg(test)]
mod tests;

pub use notification::{Notification, NotificationType};
pub use onboarding::{
    FitnessGoal, Gender, GoalSelection, IdentityData, IdentityErrors, IdentityInput,
    OnboardingRecord, SelectionRequiredError, WizardState, WizardStep,
};
pub use validation::{FieldError, MAX_CUSTOMER_AGE, MIN_CUSTOMER_AGE};
