// Domain modules
pub mod config;
pub mod control;
pub mod error;
pub mod layout;
pub mod option;
pub mod reconcile;
pub mod render;
pub mod request;
pub mod selection;
pub mod validate;

pub use config::{LayoutConfig, RenderConfig, SelkitConfig, ServerConfig};
pub use control::{standalone_checked, DecodeOutcome, GroupControl};
pub use error::{Result, SelkitError};
pub use layout::{Cell, GridLayout, Parity};
pub use option::{element_id, OptionList, OptionValue, RenderedOption, SelectOption};
pub use reconcile::decode_submission;
pub use render::{
    render_control_label, render_group, render_to_string, DefaultStyles, LabelParams, NoStyles,
    OptionSource, RenderContext, SelectionCodec, StyleResolver, StyleRole,
};
pub use request::RequestParams;
pub use selection::{
    is_option_selected, Cardinality, Choice, SelectedValues, Selection, SelectionState,
};
pub use validate::validate_matches_options;
