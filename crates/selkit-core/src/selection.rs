//! Selection containers and the "is this option checked" test.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::option::{OptionValue, RenderedOption};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Radio-style: at most one option.
    Single,
    /// Checkbox-style: any number of options.
    #[default]
    Multiple,
}

impl Cardinality {
    pub fn label(&self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Multiple => "multiple",
        }
    }

    /// HTML input type used for the controls of the group.
    pub fn input_type(&self) -> &'static str {
        match self {
            Cardinality::Single => "radio",
            Cardinality::Multiple => "checkbox",
        }
    }
}

/// Selection as held by the application model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedValues {
    /// Selected values are the map's values, keys are ignored.
    Map(BTreeMap<String, OptionValue>),
    Collection(BTreeSet<OptionValue>),
    Array(Vec<OptionValue>),
    /// A lone value. Not a container: containment is always false.
    Scalar(OptionValue),
}

impl SelectedValues {
    fn contains_value(&self, value: &OptionValue) -> bool {
        match self {
            SelectedValues::Map(map) => map.values().any(|v| v == value),
            SelectedValues::Collection(set) => set.contains(value),
            SelectedValues::Array(items) => items.iter().any(|v| v == value),
            SelectedValues::Scalar(_) => {
                tracing::trace!("scalar selection is not a container, treating as not selected");
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SelectedValues::Map(map) => map.is_empty(),
            SelectedValues::Collection(set) => set.is_empty(),
            SelectedValues::Array(items) => items.is_empty(),
            SelectedValues::Scalar(_) => false,
        }
    }

    /// All values in iteration order of the container.
    pub fn values(&self) -> Vec<&OptionValue> {
        match self {
            SelectedValues::Map(map) => map.values().collect(),
            SelectedValues::Collection(set) => set.iter().collect(),
            SelectedValues::Array(items) => items.iter().collect(),
            SelectedValues::Scalar(v) => vec![v],
        }
    }
}

/// A decoded pick: which rendered element, carrying which value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub element_id: String,
    pub value: OptionValue,
}

/// Selection decoded from a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Single(Option<Choice>),
    Multiple(Vec<Choice>),
}

impl SelectionState {
    pub fn empty(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::Single => SelectionState::Single(None),
            Cardinality::Multiple => SelectionState::Multiple(Vec::new()),
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        match self {
            SelectionState::Single(_) => Cardinality::Single,
            SelectionState::Multiple(_) => Cardinality::Multiple,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        match self {
            SelectionState::Single(choice) => choice.as_slice(),
            SelectionState::Multiple(choices) => choices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.choices().is_empty()
    }

    pub fn values(&self) -> Vec<OptionValue> {
        self.choices().iter().map(|c| c.value.clone()).collect()
    }

    /// Model value equivalent of this state; `None` when nothing is selected
    /// on a single-choice control.
    pub fn to_selected_values(&self) -> Option<SelectedValues> {
        match self {
            SelectionState::Single(choice) => {
                choice.as_ref().map(|c| SelectedValues::Scalar(c.value.clone()))
            }
            SelectionState::Multiple(choices) => Some(SelectedValues::Array(
                choices.iter().map(|c| c.value.clone()).collect(),
            )),
        }
    }
}

/// Something that can answer whether a rendered option is selected.
pub trait Selection {
    fn contains(&self, option: &RenderedOption<'_>) -> bool;
}

impl Selection for SelectedValues {
    fn contains(&self, option: &RenderedOption<'_>) -> bool {
        option.value().is_some_and(|v| self.contains_value(v))
    }
}

impl Selection for SelectionState {
    fn contains(&self, option: &RenderedOption<'_>) -> bool {
        let Some(value) = option.value() else {
            return false;
        };
        self.choices()
            .iter()
            .any(|c| c.element_id == option.element_id && &c.value == value)
    }
}

/// Whether `option` is selected by `state`. Options without a value and an
/// absent state are never selected.
pub fn is_option_selected<S: Selection + ?Sized>(
    option: &RenderedOption<'_>,
    state: Option<&S>,
) -> bool {
    match state {
        Some(state) if option.value().is_some() => state.contains(option),
        _ => false,
    }
}
