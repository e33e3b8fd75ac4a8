use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use selkit_core::{
    decode_submission, is_option_selected, render_to_string, validate_matches_options,
    Cardinality, Cell, DefaultStyles, GridLayout, GroupControl, NoStyles, OptionList, OptionValue,
    RequestParams, SelkitConfig, StyleResolver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selkit")]
#[command(about = "selkit - grouped form control toolkit", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode submitted values against an option list
    Decode {
        /// JSON file with the options
        #[arg(short, long)]
        options: PathBuf,

        /// Group id the options are rendered under
        #[arg(short, long, default_value = "group")]
        group: String,

        /// Submitted value (repeatable, in submission order)
        #[arg(short, long = "raw")]
        raw: Vec<String>,

        /// Controls have independent names instead of sharing the group id
        #[arg(long)]
        ungrouped: bool,

        /// Radio-style single choice
        #[arg(long)]
        single: bool,

        /// Print JSON instead of a checklist
        #[arg(long)]
        json: bool,
    },

    /// Show how many rows a group takes and where each option goes
    Layout {
        /// Number of options
        #[arg(short = 'n', long)]
        count: usize,

        /// Requested column count
        #[arg(short, long, allow_negative_numbers = true)]
        columns: Option<i64>,

        #[arg(long)]
        json: bool,
    },

    /// Render a group to HTML
    Render {
        #[arg(short, long)]
        options: PathBuf,

        #[arg(short, long, default_value = "group")]
        group: String,

        #[arg(short, long, allow_negative_numbers = true)]
        columns: Option<i64>,

        /// Selected option as submitted on the wire (repeatable): the value,
        /// or the element id for boolean options
        #[arg(short, long = "selected")]
        selected: Vec<String>,

        #[arg(long)]
        single: bool,

        #[arg(long)]
        caption: Option<String>,

        /// Omit CSS classes
        #[arg(long)]
        plain: bool,
    },

    /// Validate that values are offered by the options
    Check {
        #[arg(short, long)]
        options: PathBuf,

        /// Value as JSON (`true`, `3`, `"x"`); bare words are text
        #[arg(short, long = "value")]
        value: Vec<String>,
    },
}

fn cardinality(single: bool) -> Cardinality {
    if single {
        Cardinality::Single
    } else {
        Cardinality::Multiple
    }
}

fn load_options(path: &Path, group: &str) -> Result<OptionList> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    OptionList::from_json(group, &json)
        .with_context(|| format!("invalid options in {}", path.display()))
}

fn parse_value(raw: &str) -> OptionValue {
    serde_json::from_str(raw).unwrap_or_else(|_| OptionValue::Text(raw.to_string()))
}

/// Feed `wire` to `control` as if the group had been submitted with it.
fn select_from_wire(control: &mut GroupControl, wire: &[String]) {
    if wire.is_empty() {
        return;
    }
    let mut params = RequestParams::new();
    for value in wire {
        params.push(control.id(), value.as_str());
    }
    control.decode(&params);
}

fn format_grid(grid: &GridLayout) -> String {
    grid.rows()
        .map(|cells| {
            cells
                .iter()
                .map(|cell| match cell {
                    Cell::Item(i) => format!("{:>3}", i),
                    Cell::Placeholder => "  .".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SelkitConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SelkitConfig::default(),
    };

    match cli.command {
        Commands::Decode {
            options,
            group,
            raw,
            ungrouped,
            single,
            json,
        } => cmd_decode(&options, &group, &raw, !ungrouped, single, json),
        Commands::Layout {
            count,
            columns,
            json,
        } => cmd_layout(count, columns.unwrap_or(config.layout.columns), json),
        Commands::Render {
            options,
            group,
            columns,
            selected,
            single,
            caption,
            plain,
        } => cmd_render(&config, &options, &group, columns, &selected, single, caption, plain),
        Commands::Check { options, value } => {
            let list = load_options(&options, "group")?;
            let values: Vec<OptionValue> =
                value.iter().map(String::as_str).map(parse_value).collect();
            validate_matches_options(&values, &list.options)?;
            println!("OK: {} value(s) match the options", values.len());
            Ok(())
        }
    }
}

fn cmd_decode(
    options: &Path,
    group: &str,
    raw: &[String],
    grouped: bool,
    single: bool,
    json: bool,
) -> Result<()> {
    let list = load_options(options, group)?;
    let rendered = list.rendered();
    let boolean_group = list.is_boolean_group();
    tracing::debug!(grouped, boolean_group, raw = raw.len(), "decoding");

    let state = decode_submission(raw, &rendered, grouped, boolean_group, cardinality(single));

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    for option in &rendered {
        let mark = if is_option_selected(option, Some(&state)) {
            "[x]"
        } else {
            "[ ]"
        };
        println!("  {} {:<12} {}", mark, option.element_id, option.option.label);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    config: &SelkitConfig,
    options: &Path,
    group: &str,
    columns: Option<i64>,
    selected: &[String],
    single: bool,
    caption: Option<String>,
    plain: bool,
) -> Result<()> {
    let list = load_options(options, group)?;
    let single = single || config.render.cardinality == Cardinality::Single;
    let mut control = GroupControl::new(list.into(), cardinality(single))
        .with_columns(columns.unwrap_or(config.layout.columns));
    if let Some(caption) = caption.or_else(|| config.render.caption.clone()) {
        control = control.with_caption(caption);
    }

    select_from_wire(&mut control, selected);

    let styles: Box<dyn StyleResolver> = if plain || !config.render.styled {
        Box::new(NoStyles)
    } else {
        Box::new(DefaultStyles::new(control.cardinality))
    };
    println!("{}", render_to_string(&control, styles.as_ref())?);
    Ok(())
}

fn cmd_layout(count: usize, columns: i64, json: bool) -> Result<()> {
    let Some(grid) = GridLayout::new(count, columns) else {
        println!("No options to lay out.");
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }
    println!("{} rows x {} columns", grid.rows, grid.columns);
    println!("{}", format_grid(&grid));
    Ok(())
}
