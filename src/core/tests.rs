use std::collections::BTreeSet;

use crate::core::validation::{self, FieldError, MAX_CUSTOMER_AGE, MIN_CUSTOMER_AGE};
use crate::core::{
    FitnessGoal, Gender, GoalSelection, IdentityInput, OnboardingRecord, WizardState, WizardStep,
};

fn valid_identity() -> IdentityInput {
    IdentityInput {
        name: "Jamie Doe".to_string(),
        age: "29".to_string(),
        gender: "female".to_string(),
    }
}

fn selection_of(goals: &[FitnessGoal]) -> GoalSelection {
    let mut selection = GoalSelection::new();
    for goal in goals {
        selection.toggle(*goal);
    }
    selection
}

#[test]
fn identity_submission_merges_three_fields_and_advances() {
    let mut wizard = WizardState::new();

    let result = wizard.submit_identity(&valid_identity());
    assert!(result.is_ok());

    assert_eq!(wizard.step(), WizardStep::Goals);
    assert_eq!(wizard.record().customer_name.as_deref(), Some("Jamie Doe"));
    assert_eq!(wizard.record().customer_age, Some(29));
    assert_eq!(wizard.record().customer_gender, Some(Gender::Female));
    // The goal step has not run yet, so its field stays unset
    assert_eq!(wizard.record().fitness_goals, None);
}

#[test]
fn underage_and_overage_submissions_are_rejected() {
    for age in ["15", "151"] {
        let mut wizard = WizardState::new();
        let input = IdentityInput {
            age: age.to_string(),
            ..valid_identity()
        };

        let errors = wizard.submit_identity(&input).unwrap_err();
        assert!(errors.age.is_some());
        assert!(errors.name.is_none());
        assert!(errors.gender.is_none());

        // Rejection leaves both the step and the record untouched
        assert_eq!(wizard.step(), WizardStep::Identity);
        assert_eq!(wizard.record(), &OnboardingRecord::new());
    }
}

#[test]
fn boundary_ages_are_accepted() {
    for age in [MIN_CUSTOMER_AGE, MAX_CUSTOMER_AGE] {
        let mut wizard = WizardState::new();
        let input = IdentityInput {
            age: age.to_string(),
            ..valid_identity()
        };

        assert!(wizard.submit_identity(&input).is_ok());
        assert_eq!(wizard.record().customer_age, Some(age));
    }
}

#[test]
fn empty_name_and_gender_produce_per_field_errors() {
    let mut wizard = WizardState::new();
    let input = IdentityInput {
        name: "   ".to_string(),
        age: "29".to_string(),
        gender: String::new(),
    };

    let errors = wizard.submit_identity(&input).unwrap_err();
    assert_eq!(errors.name, Some(FieldError::Required));
    assert_eq!(errors.gender, Some(FieldError::Required));
    assert!(errors.age.is_none());
    assert_eq!(wizard.step(), WizardStep::Identity);
}

#[test]
fn non_numeric_age_is_rejected() {
    assert_eq!(validation::validate_age("abc"), Err(FieldError::NotANumber));
    assert_eq!(
        validation::validate_age("17.5"),
        Err(FieldError::NotANumber)
    );
    assert_eq!(validation::validate_age("-4"), Err(FieldError::NotANumber));
    assert_eq!(validation::validate_age(" 42 "), Ok(42));
}

#[test]
fn name_is_trimmed_before_merging() {
    assert_eq!(
        validation::validate_name("  Jamie Doe "),
        Ok("Jamie Doe".to_string())
    );
    assert_eq!(validation::validate_name(""), Err(FieldError::Required));
}

#[test]
fn unknown_gender_value_is_rejected() {
    let error = validation::validate_gender("unicorn").unwrap_err();
    assert_eq!(
        error,
        FieldError::UnknownChoice {
            value: "unicorn".to_string()
        }
    );
}

#[test]
fn gender_form_values_round_trip() {
    for gender in Gender::all() {
        assert_eq!(Gender::from_str(gender.as_str()), Some(gender));
    }
}

#[test]
fn double_toggle_leaves_selection_unchanged() {
    let mut selection = selection_of(&[FitnessGoal::Strength, FitnessGoal::Endurance]);
    let before = selection.clone();

    selection.toggle(FitnessGoal::CardioHealth);
    selection.toggle(FitnessGoal::CardioHealth);

    assert_eq!(selection, before);
    assert_eq!(selection.len(), 2);
}

#[test]
fn toggle_adds_then_removes() {
    let mut selection = GoalSelection::new();

    selection.toggle(FitnessGoal::Flexibility);
    assert!(selection.contains(FitnessGoal::Flexibility));

    selection.toggle(FitnessGoal::Flexibility);
    assert!(!selection.contains(FitnessGoal::Flexibility));
    assert!(selection.is_empty());
}

#[test]
fn empty_goal_submission_is_rejected() {
    let mut wizard = WizardState::new();
    wizard.submit_identity(&valid_identity()).unwrap();

    let result = wizard.submit_goals(&GoalSelection::new());
    assert!(result.is_err());
    assert_eq!(wizard.step(), WizardStep::Goals);
    assert_eq!(wizard.record().fitness_goals, None);
}

#[test]
fn goal_submission_merges_exact_set_and_advances() {
    let mut wizard = WizardState::new();
    wizard.submit_identity(&valid_identity()).unwrap();

    let selection = selection_of(&[FitnessGoal::WeightLoss, FitnessGoal::Flexibility]);
    wizard.submit_goals(&selection).unwrap();

    assert_eq!(wizard.step(), WizardStep::Summary);
    let expected: BTreeSet<_> = [FitnessGoal::WeightLoss, FitnessGoal::Flexibility]
        .into_iter()
        .collect();
    assert_eq!(wizard.record().fitness_goals, Some(expected));
    assert!(wizard.record().is_complete());
}

#[test]
fn back_from_goals_preserves_merged_identity() {
    let mut wizard = WizardState::new();
    wizard.submit_identity(&valid_identity()).unwrap();

    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Identity);

    // Re-entering the step pre-fills the form from the record
    let prefill = IdentityInput::from_record(wizard.record());
    assert_eq!(prefill.name, "Jamie Doe");
    assert_eq!(prefill.age, "29");
    assert_eq!(prefill.gender, "female");
}

#[test]
fn back_is_not_offered_on_the_first_step() {
    let mut wizard = WizardState::new();
    assert!(!WizardStep::Identity.can_go_back());
    assert!(!wizard.back());
    assert_eq!(wizard.step(), WizardStep::Identity);
}

#[test]
fn remerging_identity_does_not_clear_goals() {
    let mut wizard = WizardState::new();
    wizard.submit_identity(&valid_identity()).unwrap();
    wizard
        .submit_goals(&selection_of(&[FitnessGoal::Strength]))
        .unwrap();

    // Walk back to the identity step and resubmit with a different name
    wizard.back();
    wizard.back();
    let updated = IdentityInput {
        name: "Jamie Q. Doe".to_string(),
        ..valid_identity()
    };
    wizard.submit_identity(&updated).unwrap();

    // The identity fields are replaced, the goal field survives
    assert_eq!(
        wizard.record().customer_name.as_deref(),
        Some("Jamie Q. Doe")
    );
    let expected: BTreeSet<_> = [FitnessGoal::Strength].into_iter().collect();
    assert_eq!(wizard.record().fitness_goals, Some(expected));
}

#[test]
fn step_machine_walks_forward_and_backward() {
    assert_eq!(WizardStep::Identity.next(), Some(WizardStep::Goals));
    assert_eq!(WizardStep::Goals.next(), Some(WizardStep::Summary));
    assert_eq!(WizardStep::Summary.next(), None);

    assert_eq!(WizardStep::Summary.previous(), Some(WizardStep::Goals));
    assert_eq!(WizardStep::Goals.previous(), Some(WizardStep::Identity));
    assert_eq!(WizardStep::Identity.previous(), None);
}

#[test]
fn progress_percent_reflects_step_position() {
    assert_eq!(WizardStep::Identity.progress_percent(), 33);
    assert_eq!(WizardStep::Goals.progress_percent(), 66);
    assert_eq!(WizardStep::Summary.progress_percent(), 100);
}

#[test]
fn advancing_past_the_last_step_stays_on_summary() {
    let mut wizard = WizardState::new();
    wizard.submit_identity(&valid_identity()).unwrap();
    wizard
        .submit_goals(&selection_of(&[FitnessGoal::Endurance]))
        .unwrap();
    assert_eq!(wizard.step(), WizardStep::Summary);

    // Submitting the goal step again from the terminal state must not
    // walk off the end of the flow
    wizard
        .submit_goals(&selection_of(&[FitnessGoal::Endurance]))
        .unwrap();
    assert_eq!(wizard.step(), WizardStep::Summary);
}

#[test]
fn payload_serializes_with_camel_case_keys() {
    let mut wizard = WizardState::new();
    let input = IdentityInput {
        name: "Jamie Doe".to_string(),
        age: "29".to_string(),
        gender: "prefer-not-to-say".to_string(),
    };
    wizard.submit_identity(&input).unwrap();
    wizard
        .submit_goals(&selection_of(&[
            FitnessGoal::MuscleGain,
            FitnessGoal::WeightLoss,
        ]))
        .unwrap();

    let payload: serde_json::Value =
        serde_json::from_str(&wizard.record().to_payload_json()).unwrap();

    assert_eq!(payload["customerName"], "Jamie Doe");
    assert_eq!(payload["customerAge"], 29);
    assert_eq!(payload["customerGender"], "prefer-not-to-say");
    // BTreeSet storage keeps the serialized tags in enum order
    assert_eq!(
        payload["fitnessGoals"],
        serde_json::json!(["weight_loss", "muscle_gain"])
    );
}

#[test]
fn unfinished_record_serializes_without_absent_fields() {
    let record = OnboardingRecord::new();
    let payload: serde_json::Value = serde_json::from_str(&record.to_payload_json()).unwrap();
    assert_eq!(payload, serde_json::json!({}));
}
