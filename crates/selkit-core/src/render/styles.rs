use crate::selection::Cardinality;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Group,
    Caption,
    RowOdd,
    RowEven,
    CellOdd,
    CellEven,
    Span,
    SpanDisabled,
    Input,
    InputDisabled,
    Label,
    LabelDisabled,
    Image,
    ImageDisabled,
}

impl StyleRole {
    pub fn suffix(&self) -> &'static str {
        match self {
            StyleRole::Group => "group",
            StyleRole::Caption => "caption",
            StyleRole::RowOdd => "row-odd",
            StyleRole::RowEven => "row-even",
            StyleRole::CellOdd => "cell-odd",
            StyleRole::CellEven => "cell-even",
            StyleRole::Span => "span",
            StyleRole::SpanDisabled => "span-disabled",
            StyleRole::Input => "input",
            StyleRole::InputDisabled => "input-disabled",
            StyleRole::Label => "label",
            StyleRole::LabelDisabled => "label-disabled",
            StyleRole::Image => "image",
            StyleRole::ImageDisabled => "image-disabled",
        }
    }

    /// Pick the disabled variant of a role when `disabled` is set.
    pub fn when_disabled(self, disabled: bool) -> Self {
        if !disabled {
            return self;
        }
        match self {
            StyleRole::Span => StyleRole::SpanDisabled,
            StyleRole::Input => StyleRole::InputDisabled,
            StyleRole::Label => StyleRole::LabelDisabled,
            StyleRole::Image => StyleRole::ImageDisabled,
            other => other,
        }
    }
}

/// Maps a style role to a CSS class.
pub trait StyleResolver {
    fn class(&self, role: StyleRole) -> Option<String>;
}

/// Static class names: `selkit-{checkbox|radio}-{role}`.
#[derive(Debug, Clone, Copy)]
pub struct DefaultStyles {
    cardinality: Cardinality,
}

impl DefaultStyles {
    pub fn new(cardinality: Cardinality) -> Self {
        Self { cardinality }
    }
}

impl StyleResolver for DefaultStyles {
    fn class(&self, role: StyleRole) -> Option<String> {
        Some(format!(
            "selkit-{}-{}",
            self.cardinality.input_type(),
            role.suffix()
        ))
    }
}

/// Resolver that emits no classes at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyles;

impl StyleResolver for NoStyles {
    fn class(&self, _role: StyleRole) -> Option<String> {
        None
    }
}
