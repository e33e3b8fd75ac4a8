use serde::{Deserialize, Serialize};

use super::OptionValue;

/// One selectable choice in a grouped control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: Option<OptionValue>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: label.into(),
            tooltip: None,
            image: None,
        }
    }

    /// An option without a value; it can never be selected.
    pub fn without_value(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
            tooltip: None,
            image: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_boolean(&self) -> bool {
        self.value.as_ref().is_some_and(OptionValue::is_bool)
    }
}

/// Element id of the option at `index` inside group `group_id`.
pub fn element_id(group_id: &str, index: usize) -> String {
    format!("{}_{}", group_id, index)
}

/// An option as placed in a rendered group: its position and unique element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption<'a> {
    pub index: usize,
    pub element_id: String,
    pub option: &'a SelectOption,
}

impl RenderedOption<'_> {
    pub fn value(&self) -> Option<&OptionValue> {
        self.option.value.as_ref()
    }

    pub fn is_boolean(&self) -> bool {
        self.option.is_boolean()
    }
}

/// Ordered, read-only options of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionList {
    pub group_id: String,
    pub options: Vec<SelectOption>,
}

impl OptionList {
    pub fn new(group_id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            group_id: group_id.into(),
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<RenderedOption<'_>> {
        self.options.get(index).map(|option| RenderedOption {
            index,
            element_id: element_id(&self.group_id, index),
            option,
        })
    }

    pub fn rendered(&self) -> Vec<RenderedOption<'_>> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| RenderedOption {
                index,
                element_id: element_id(&self.group_id, index),
                option,
            })
            .collect()
    }

    /// True when every option carrying a value carries a boolean.
    pub fn is_boolean_group(&self) -> bool {
        let mut valued = self.options.iter().filter_map(|o| o.value.as_ref()).peekable();
        valued.peek().is_some() && valued.all(OptionValue::is_bool)
    }

    /// Read options from a JSON array.
    pub fn from_json(group_id: impl Into<String>, json: &str) -> crate::Result<Self> {
        let options: Vec<SelectOption> = serde_json::from_str(json)?;
        Ok(Self::new(group_id, options))
    }
}
