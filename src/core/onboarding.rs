//! Onboarding domain model: the accumulated customer record, the fixed
//! enumerations it draws from, and the wizard step machine that controls
//! how the record is built up.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::validation::{self, FieldError};

/// Gender choices offered by the identity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Returns all genders in display order
    pub fn all() -> [Gender; 4] {
        [
            Gender::Male,
            Gender::Female,
            Gender::Other,
            Gender::PreferNotToSay,
        ]
    }

    /// Stable form value used by the select control
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    /// Parses a form value back into a gender
    pub fn from_str(s: &str) -> Option<Gender> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "prefer-not-to-say" => Some(Gender::PreferNotToSay),
            _ => None,
        }
    }

    /// Returns a human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Fitness goal tags offered by the goal-selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    CardioHealth,
    Strength,
    Endurance,
    Flexibility,
}

impl FitnessGoal {
    /// Returns all goals in the fixed display order
    pub fn all() -> [FitnessGoal; 6] {
        [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::CardioHealth,
            FitnessGoal::Strength,
            FitnessGoal::Endurance,
            FitnessGoal::Flexibility,
        ]
    }

    /// Returns a human-readable name for the goal card
    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::CardioHealth => "Cardio Health",
            FitnessGoal::Strength => "Strength",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Flexibility => "Flexibility",
        }
    }

    /// Icon name shown on the goal card
    pub fn icon(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "flame",
            FitnessGoal::MuscleGain => "dumbbell",
            FitnessGoal::CardioHealth => "heart-pulse",
            FitnessGoal::Strength => "weight",
            FitnessGoal::Endurance => "timer",
            FitnessGoal::Flexibility => "stretch",
        }
    }
}

/// The accumulated onboarding record, built incrementally across steps.
///
/// The record only grows: a step's merge sets or replaces that step's own
/// fields and never clears fields merged by other steps. Serializes to the
/// submission payload shape (`customerName`, `customerAge`,
/// `customerGender`, `fitnessGoals`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goals: Option<BTreeSet<FitnessGoal>>,
}

impl OnboardingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the identity step's validated fields into the record
    pub fn merge_identity(&mut self, identity: IdentityData) {
        self.customer_name = Some(identity.name);
        self.customer_age = Some(identity.age);
        self.customer_gender = Some(identity.gender);
    }

    /// Merges the goal step's selection into the record
    pub fn merge_goals(&mut self, goals: &BTreeSet<FitnessGoal>) {
        self.fitness_goals = Some(goals.clone());
    }

    /// Returns true once every step has merged its contribution
    pub fn is_complete(&self) -> bool {
        self.customer_name.is_some()
            && self.customer_age.is_some()
            && self.customer_gender.is_some()
            && self.fitness_goals.is_some()
    }

    /// Serializes the record to the submission payload JSON
    pub fn to_payload_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// The validated output of the identity step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityData {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

/// Raw identity form input, exactly as typed into the controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityInput {
    pub name: String,
    pub age: String,
    pub gender: String,
}

impl IdentityInput {
    /// Pre-fills the form from previously merged record fields, so backward
    /// navigation re-enters the step with the prior answers intact
    pub fn from_record(record: &OnboardingRecord) -> Self {
        Self {
            name: record.customer_name.clone().unwrap_or_default(),
            age: record
                .customer_age
                .map(|age| age.to_string())
                .unwrap_or_default(),
            gender: record
                .customer_gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validates every field and returns either the typed identity data or
    /// the per-field errors. All fields are checked so the form can show
    /// every inline error at once.
    pub fn validate(&self) -> Result<IdentityData, IdentityErrors> {
        let name = validation::validate_name(&self.name);
        let age = validation::validate_age(&self.age);
        let gender = validation::validate_gender(&self.gender);

        match (name, age, gender) {
            (Ok(name), Ok(age), Ok(gender)) => Ok(IdentityData { name, age, gender }),
            (name, age, gender) => Err(IdentityErrors {
                name: name.err(),
                age: age.err(),
                gender: gender.err(),
            }),
        }
    }
}

/// Per-field validation errors from the identity step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityErrors {
    pub name: Option<FieldError>,
    pub age: Option<FieldError>,
    pub gender: Option<FieldError>,
}

impl IdentityErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}

/// The goal step's in-progress selection set.
///
/// Unordered for storage; the cards render in `FitnessGoal::all()` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalSelection {
    selected: BTreeSet<FitnessGoal>,
}

impl GoalSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the selection from a previously merged record
    pub fn from_record(record: &OnboardingRecord) -> Self {
        Self {
            selected: record.fitness_goals.clone().unwrap_or_default(),
        }
    }

    /// Selecting an unselected goal adds it; re-selecting removes it
    pub fn toggle(&mut self, goal: FitnessGoal) {
        if !self.selected.remove(&goal) {
            self.selected.insert(goal);
        }
    }

    pub fn contains(&self, goal: FitnessGoal) -> bool {
        self.selected.contains(&goal)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn goals(&self) -> &BTreeSet<FitnessGoal> {
        &self.selected
    }
}

/// One screen of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Identity,
    Goals,
    Summary,
}

impl WizardStep {
    /// Returns the 1-based step number for progress indication
    pub fn step_number(&self) -> usize {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Goals => 2,
            WizardStep::Summary => 3,
        }
    }

    /// Returns the total number of steps
    pub fn total_steps() -> usize {
        3
    }

    /// Returns the next step in the onboarding flow
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => Some(WizardStep::Goals),
            WizardStep::Goals => Some(WizardStep::Summary),
            WizardStep::Summary => None,
        }
    }

    /// Returns the previous step in the onboarding flow
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => None,
            WizardStep::Goals => Some(WizardStep::Identity),
            WizardStep::Summary => Some(WizardStep::Goals),
        }
    }

    /// Returns true if this step allows going back
    pub fn can_go_back(&self) -> bool {
        !matches!(self, WizardStep::Identity)
    }

    /// Progress through the flow as a whole percentage
    pub fn progress_percent(&self) -> u32 {
        (self.step_number() * 100 / Self::total_steps()) as u32
    }

    /// Heading shown above the step
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Welcome to the Onboarding Process",
            WizardStep::Goals => "What are your fitness goals?",
            WizardStep::Summary => "You're all set",
        }
    }

    /// Subtitle shown under the heading
    pub fn subtitle(&self) -> &'static str {
        match self {
            WizardStep::Identity => {
                "We are excited to have you on board! Please follow the steps below to complete your onboarding."
            }
            WizardStep::Goals => "Select all options that apply to you. You can select multiple",
            WizardStep::Summary => "Review your answers below and finish your onboarding.",
        }
    }
}

/// The goal step was submitted with nothing selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRequiredError;

impl std::fmt::Display for SelectionRequiredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Please select at least one goal to continue")
    }
}

impl std::error::Error for SelectionRequiredError {}

/// The wizard controller state: the active step plus the accumulated record.
///
/// Owns both exclusively; every mutation goes through a submit/back method
/// so a step can only advance after its own validation succeeds and merged
/// data is never lost by navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    record: OnboardingRecord,
}

impl WizardState {
    /// Creates a wizard at the first step with an empty record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &OnboardingRecord {
        &self.record
    }

    /// Validates the identity input; on success merges the three identity
    /// fields and advances by one step. On failure nothing changes.
    pub fn submit_identity(&mut self, input: &IdentityInput) -> Result<(), IdentityErrors> {
        let identity = input.validate()?;
        self.record.merge_identity(identity);
        self.advance();
        Ok(())
    }

    /// Merges a non-empty goal selection and advances by one step. An empty
    /// selection is rejected and nothing changes.
    pub fn submit_goals(&mut self, selection: &GoalSelection) -> Result<(), SelectionRequiredError> {
        if selection.is_empty() {
            return Err(SelectionRequiredError);
        }
        self.record.merge_goals(selection.goals());
        self.advance();
        Ok(())
    }

    /// Retreats to the previous step without merging or validating.
    /// Returns false on the first step, where back is not offered.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    fn advance(&mut self) {
        // The last step has no successor; the Summary view is the
        // terminal state instead of falling through to a blank render.
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }
}
