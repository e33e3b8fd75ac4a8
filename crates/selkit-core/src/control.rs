//! A grouped control: options, flags and the two sources of "checked".

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::option::{OptionList, OptionValue, RenderedOption};
use crate::reconcile::decode_submission;
use crate::request::RequestParams;
use crate::selection::{is_option_selected, Cardinality, SelectedValues, SelectionState};
use crate::validate::validate_matches_options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeOutcome {
    /// Disabled or read-only; nothing was read and the state is unchanged.
    Skipped,
    /// The request did not carry the control; decoded as nothing selected.
    Absent,
    Decoded,
}

#[derive(Debug, Clone)]
pub struct GroupControl {
    pub options: Arc<OptionList>,
    pub cardinality: Cardinality,
    /// Controls share the group id as wire name.
    pub grouped: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub columns: i64,
    pub caption: Option<String>,
    /// Value bound by the application.
    pub model: Option<SelectedValues>,
    /// State decoded from the last submission, not yet committed.
    pub submitted: Option<SelectionState>,
}

impl GroupControl {
    pub fn new(options: Arc<OptionList>, cardinality: Cardinality) -> Self {
        Self {
            options,
            cardinality,
            grouped: true,
            disabled: false,
            read_only: false,
            columns: 1,
            caption: None,
            model: None,
            submitted: None,
        }
    }

    pub fn with_columns(mut self, columns: i64) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_model(mut self, model: SelectedValues) -> Self {
        self.model = Some(model);
        self
    }

    pub fn ungrouped(mut self) -> Self {
        self.grouped = false;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn id(&self) -> &str {
        &self.options.group_id
    }

    pub fn boolean_group(&self) -> bool {
        self.options.is_boolean_group()
    }

    /// Name the input for `option` submits under.
    pub fn wire_name<'a>(&'a self, option: &'a RenderedOption<'_>) -> &'a str {
        if self.grouped {
            self.id()
        } else {
            &option.element_id
        }
    }

    /// String the input for `option` submits when checked. Boolean options in
    /// a named group submit their element id so siblings stay distinguishable.
    pub fn wire_value(&self, option: &RenderedOption<'_>) -> Option<String> {
        if self.grouped && option.is_boolean() {
            return Some(option.element_id.clone());
        }
        option.value().map(OptionValue::wire_string)
    }

    pub fn is_checked(&self, option: &RenderedOption<'_>) -> bool {
        if let Some(submitted) = &self.submitted {
            return is_option_selected(option, Some(submitted));
        }
        match (self.cardinality, &self.model) {
            (Cardinality::Single, Some(SelectedValues::Scalar(value))) => {
                option.value() == Some(value)
            }
            (_, model) => is_option_selected(option, model.as_ref()),
        }
    }

    /// Read this control's values out of `params`.
    pub fn decode(&mut self, params: &RequestParams) -> DecodeOutcome {
        if self.disabled || self.read_only {
            tracing::debug!(control = self.id(), "skipping decode of disabled or read-only control");
            return DecodeOutcome::Skipped;
        }

        let boolean_group = self.boolean_group();
        let rendered = self.options.rendered();

        let (state, outcome) = if self.grouped {
            match params.values(self.id()) {
                Some(raw) => (
                    decode_submission(raw, &rendered, true, boolean_group, self.cardinality),
                    DecodeOutcome::Decoded,
                ),
                None => (SelectionState::empty(self.cardinality), DecodeOutcome::Absent),
            }
        } else {
            self.decode_each(params, &rendered, boolean_group)
        };

        tracing::debug!(
            control = self.id(),
            outcome = ?outcome,
            selected = state.choices().len(),
            "decoded control"
        );
        self.submitted = Some(state);
        outcome
    }

    /// Ungrouped controls each submit under their own element id.
    fn decode_each(
        &self,
        params: &RequestParams,
        rendered: &[RenderedOption<'_>],
        boolean_group: bool,
    ) -> (SelectionState, DecodeOutcome) {
        let mut choices = Vec::new();
        let mut seen = false;
        for option in rendered {
            let Some(raw) = params.values(&option.element_id) else {
                continue;
            };
            seen = true;
            let single = std::slice::from_ref(option);
            let state =
                decode_submission(raw, single, false, boolean_group, Cardinality::Multiple);
            if let SelectionState::Multiple(mut picked) = state {
                choices.append(&mut picked);
            }
        }

        let outcome = if seen {
            DecodeOutcome::Decoded
        } else {
            DecodeOutcome::Absent
        };
        let state = match self.cardinality {
            Cardinality::Multiple => SelectionState::Multiple(choices),
            Cardinality::Single if boolean_group => SelectionState::Single(choices.pop()),
            Cardinality::Single => SelectionState::Single(choices.into_iter().next()),
        };
        (state, outcome)
    }

    /// Check the bound model against the options.
    pub fn validate(&self) -> Result<()> {
        match &self.model {
            Some(model) => validate_matches_options(model.values(), &self.options.options),
            None => Ok(()),
        }
    }

    /// Move the submitted state into the model. Leaves the control untouched
    /// when validation fails.
    pub fn commit(&mut self) -> Result<()> {
        let Some(submitted) = &self.submitted else {
            return Ok(());
        };
        let values = submitted.values();
        validate_matches_options(&values, &self.options.options)?;
        self.model = submitted.to_selected_values();
        self.submitted = None;
        Ok(())
    }
}

/// Checked test of a standalone checkbox or radio button. A boolean control
/// accepts `"true"`/`"false"` text as its selected value.
pub fn standalone_checked(
    selected_value: Option<&OptionValue>,
    selected: Option<&OptionValue>,
) -> bool {
    match (selected_value, selected) {
        (Some(OptionValue::Bool(expected)), Some(OptionValue::Text(text))) => {
            text.eq_ignore_ascii_case("true") == *expected
        }
        (Some(value), Some(selected)) => value == selected,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;

    fn colors() -> Arc<OptionList> {
        Arc::new(OptionList::new(
            "colors",
            vec![
                SelectOption::new("red", "Red"),
                SelectOption::new("green", "Green"),
                SelectOption::new("blue", "Blue"),
            ],
        ))
    }

    fn flags() -> Arc<OptionList> {
        Arc::new(OptionList::new(
            "flags",
            vec![SelectOption::new(true, "A"), SelectOption::new(true, "B")],
        ))
    }

    #[test]
    fn test_disabled_decode_leaves_state_untouched() {
        let mut control = GroupControl::new(colors(), Cardinality::Multiple)
            .with_model(SelectedValues::Array(vec![OptionValue::from("red")]))
            .disabled(true);
        control.submitted = Some(SelectionState::Multiple(vec![]));
        let model_before = control.model.clone();
        let submitted_before = control.submitted.clone();

        let params = RequestParams::parse_urlencoded("colors=blue").unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Skipped);
        assert_eq!(control.model, model_before);
        assert_eq!(control.submitted, submitted_before);
    }

    #[test]
    fn test_read_only_is_skipped() {
        let mut control = GroupControl::new(colors(), Cardinality::Multiple).read_only(true);
        let params = RequestParams::parse_urlencoded("colors=blue").unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Skipped);
        assert!(control.submitted.is_none());
    }

    #[test]
    fn test_absent_name_means_nothing_selected() {
        let mut control = GroupControl::new(colors(), Cardinality::Multiple)
            .with_model(SelectedValues::Array(vec![OptionValue::from("red")]));
        let params = RequestParams::parse_urlencoded("other=1").unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Absent);
        assert_eq!(control.submitted, Some(SelectionState::Multiple(vec![])));

        let rendered = control.options.rendered();
        assert!(!control.is_checked(&rendered[0]));
    }

    #[test]
    fn test_checked_prefers_submission_over_model() {
        let mut control = GroupControl::new(colors(), Cardinality::Multiple)
            .with_model(SelectedValues::Array(vec![OptionValue::from("red")]));
        let options = control.options.clone();
        let rendered = options.rendered();
        assert!(control.is_checked(&rendered[0]));

        let params = RequestParams::parse_urlencoded("colors=green").unwrap();
        control.decode(&params);
        assert!(!control.is_checked(&rendered[0]));
        assert!(control.is_checked(&rendered[1]));
    }

    #[test]
    fn test_single_choice_model_is_scalar() {
        let control = GroupControl::new(colors(), Cardinality::Single)
            .with_model(SelectedValues::Scalar(OptionValue::from("blue")));
        let rendered = control.options.rendered();
        assert!(control.is_checked(&rendered[2]));
        assert!(!control.is_checked(&rendered[0]));
    }

    #[test]
    fn test_wire_values() {
        let control = GroupControl::new(flags(), Cardinality::Multiple);
        let rendered = control.options.rendered();
        assert_eq!(control.wire_value(&rendered[1]).as_deref(), Some("flags_1"));
        assert_eq!(control.wire_name(&rendered[1]), "flags");

        let loose = GroupControl::new(flags(), Cardinality::Multiple).ungrouped();
        assert_eq!(loose.wire_value(&rendered[1]).as_deref(), Some("true"));
        assert_eq!(loose.wire_name(&rendered[1]), "flags_1");
    }

    #[test]
    fn test_ungrouped_booleans_decode_per_element() {
        let mut control = GroupControl::new(flags(), Cardinality::Multiple).ungrouped();
        let params = RequestParams::parse_urlencoded("flags_1=true").unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Decoded);
        let rendered = control.options.rendered();
        assert!(!control.is_checked(&rendered[0]));
        assert!(control.is_checked(&rendered[1]));
    }

    #[test]
    fn test_ungrouped_single_boolean_keeps_last() {
        let mut control = GroupControl::new(flags(), Cardinality::Single).ungrouped();
        let params = RequestParams::parse_urlencoded("flags_0=true&flags_1=true").unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Decoded);
        let rendered = control.options.rendered();
        assert!(!control.is_checked(&rendered[0]));
        assert!(control.is_checked(&rendered[1]));
    }

    #[test]
    fn test_ungrouped_single_value_keeps_first() {
        let mut control = GroupControl::new(colors(), Cardinality::Single).ungrouped();
        let params = RequestParams::parse_urlencoded("colors_2=blue&colors_0=red").unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Decoded);
        let rendered = control.options.rendered();
        assert!(control.is_checked(&rendered[0]));
        assert!(!control.is_checked(&rendered[2]));
    }

    #[test]
    fn test_mixed_group_boolean_survives_round_trip() {
        let options = Arc::new(OptionList::new(
            "g",
            vec![SelectOption::new(true, "Agree"), SelectOption::new("x", "Other")],
        ));
        let mut control = GroupControl::new(options.clone(), Cardinality::Multiple);
        let rendered = options.rendered();
        assert!(!control.boolean_group());
        let wire = control.wire_value(&rendered[0]).unwrap();
        assert_eq!(wire, "g_0");

        let params = RequestParams::parse_urlencoded(&format!("g={}", wire)).unwrap();
        assert_eq!(control.decode(&params), DecodeOutcome::Decoded);
        assert!(control.is_checked(&rendered[0]));
        assert!(!control.is_checked(&rendered[1]));
        control.commit().unwrap();
        assert_eq!(control.model, Some(SelectedValues::Array(vec![OptionValue::Bool(true)])));
    }

    #[test]
    fn test_commit_moves_submission_into_model() {
        let mut control = GroupControl::new(colors(), Cardinality::Single);
        let params = RequestParams::parse_urlencoded("colors=green&colors=red").unwrap();
        control.decode(&params);
        control.commit().unwrap();
        assert_eq!(control.model, Some(SelectedValues::Scalar(OptionValue::from("green"))));
        assert!(control.submitted.is_none());
    }

    #[test]
    fn test_validate_rejects_foreign_model() {
        let control = GroupControl::new(colors(), Cardinality::Multiple)
            .with_model(SelectedValues::Array(vec![OptionValue::from("purple")]));
        assert!(control.validate().is_err());
    }

    #[test]
    fn test_standalone_checked() {
        let t = OptionValue::Bool(true);
        assert!(standalone_checked(Some(&t), Some(&OptionValue::from("TRUE"))));
        assert!(!standalone_checked(Some(&t), Some(&OptionValue::from("yes"))));
        assert!(standalone_checked(
            Some(&OptionValue::Bool(false)),
            Some(&OptionValue::from("false"))
        ));
        assert!(standalone_checked(Some(&OptionValue::Int(3)), Some(&OptionValue::Int(3))));
        assert!(!standalone_checked(None, Some(&t)));
        assert!(!standalone_checked(Some(&t), None));
    }
}
