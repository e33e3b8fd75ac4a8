use crate::error::{Result, SelkitError};
use crate::option::{OptionValue, SelectOption};

/// Check that every selected value is offered by one of `options`.
/// An empty selection is always valid.
pub fn validate_matches_options<'a, I>(values: I, options: &[SelectOption]) -> Result<()>
where
    I: IntoIterator<Item = &'a OptionValue>,
{
    for value in values {
        let offered = options.iter().any(|o| o.value.as_ref() == Some(value));
        if !offered {
            tracing::debug!(value = %value, "selected value is not among the options");
            return Err(SelkitError::ValueNotInOptions(value.to_string()));
        }
    }
    Ok(())
}
