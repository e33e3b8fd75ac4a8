mod types;
mod value;

pub use types::{element_id, OptionList, RenderedOption, SelectOption};
pub use value::OptionValue;
