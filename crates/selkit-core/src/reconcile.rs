//! Decoding submitted form values into a [`SelectionState`].

use std::collections::BTreeSet;

use crate::option::RenderedOption;
use crate::selection::{Cardinality, Choice, SelectionState};

fn choice_for(option: &RenderedOption<'_>) -> Option<Choice> {
    option.value().map(|value| Choice {
        element_id: option.element_id.clone(),
        value: value.clone(),
    })
}

/// Does `raw` denote `option`? Boolean options sharing a name are keyed by
/// element id, everything else by the value's wire string.
fn denotes(option: &RenderedOption<'_>, raw: &str, grouped: bool) -> bool {
    match option.value() {
        None => false,
        Some(value) if grouped && value.is_bool() => option.element_id == raw,
        Some(value) => value.wire_string() == raw,
    }
}

/// Map submitted strings back onto the rendered options.
///
/// Each raw string selects the first option it denotes; unmatched strings are
/// dropped. For single-choice controls a boolean group keeps the last matching
/// option in rendering order while a value group keeps the option denoted by
/// the first matching raw string.
pub fn decode_submission<S: AsRef<str>>(
    raw_values: &[S],
    options: &[RenderedOption<'_>],
    grouped: bool,
    boolean_group: bool,
    cardinality: Cardinality,
) -> SelectionState {
    if raw_values.is_empty() {
        return SelectionState::empty(cardinality);
    }

    let lookup = |raw: &str| options.iter().find(|o| denotes(o, raw, grouped));

    match cardinality {
        Cardinality::Multiple => {
            let mut matched = BTreeSet::new();
            for raw in raw_values {
                match lookup(raw.as_ref()) {
                    Some(option) => {
                        matched.insert(option.index);
                    }
                    None => tracing::debug!(raw = raw.as_ref(), "dropping unmatched submitted value"),
                }
            }
            SelectionState::Multiple(
                options
                    .iter()
                    .filter(|o| matched.contains(&o.index))
                    .filter_map(choice_for)
                    .collect(),
            )
        }
        Cardinality::Single if grouped && boolean_group => SelectionState::Single(
            options
                .iter()
                .rev()
                .find(|o| raw_values.iter().any(|r| denotes(o, r.as_ref(), grouped)))
                .and_then(choice_for),
        ),
        Cardinality::Single => SelectionState::Single(
            raw_values
                .iter()
                .find_map(|r| lookup(r.as_ref()))
                .and_then(choice_for),
        ),
    }
}
