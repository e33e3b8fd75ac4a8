use std::sync::Arc;

use anyhow::{Context, Result};
use selkit_core::{
    Cardinality, DefaultStyles, GroupControl, NoStyles, OptionList, OptionValue, SelectOption,
    SelectedValues, SelkitConfig, StyleResolver,
};
use tokio::sync::RwLock;
use tracing::info;

const GROUP_ID: &str = "toppings";

fn default_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("cheese", "Cheese"),
        SelectOption::new("mushroom", "Mushroom").with_tooltip("sliced"),
        SelectOption::new("olive", "Olive"),
        SelectOption::new("pepper", "Pepper"),
        SelectOption::new("onion", "Onion"),
        SelectOption::new("basil", "Basil"),
        SelectOption::new("chili", "Chili").with_tooltip("hot"),
    ]
}

/// Demo state: a single control whose model outlives requests. The options are
/// shared read-only; every request works on its own copy of the control.
pub struct AppState {
    pub config: SelkitConfig,
    pub options: Arc<OptionList>,
    pub control: RwLock<GroupControl>,
}

impl AppState {
    pub fn new(config: SelkitConfig) -> Result<Self> {
        let options = match &config.server.options_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read options from {}", path))?;
                let list = OptionList::from_json(GROUP_ID, &json)
                    .with_context(|| format!("failed to parse options in {}", path))?;
                info!("Loaded {} options from {}", list.len(), path);
                list
            }
            None => OptionList::new(GROUP_ID, default_options()),
        };
        Ok(Self::with_options(config, options))
    }

    pub fn with_options(config: SelkitConfig, options: OptionList) -> Self {
        let options = Arc::new(options);
        let mut control = GroupControl::new(options.clone(), config.render.cardinality)
            .with_columns(config.layout.columns);
        if let Some(caption) = &config.render.caption {
            control = control.with_caption(caption.clone());
        }
        if let Some(first) = options.options.first().and_then(|o| o.value.clone()) {
            let model = initial_model(control.cardinality, first);
            control = control.with_model(model);
        }
        Self {
            config,
            options,
            control: RwLock::new(control),
        }
    }

    pub fn styles(&self) -> Box<dyn StyleResolver + Send + Sync> {
        if self.config.render.styled {
            Box::new(DefaultStyles::new(self.config.render.cardinality))
        } else {
            Box::new(NoStyles)
        }
    }
}

fn initial_model(cardinality: Cardinality, first: OptionValue) -> SelectedValues {
    match cardinality {
        Cardinality::Single => SelectedValues::Scalar(first),
        Cardinality::Multiple => SelectedValues::Array(vec![first]),
    }
}
