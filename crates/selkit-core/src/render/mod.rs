//! Markup for grouped controls.
//!
//! A renderer is a function of the control and a few capabilities:
//! [`OptionSource`] supplies the options, [`SelectionCodec`] decides wire
//! names, wire values and the checked flag, and a [`StyleResolver`] inside the
//! [`RenderContext`] maps style roles to CSS classes.

mod styles;

pub use styles::{DefaultStyles, NoStyles, StyleResolver, StyleRole};

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::{self, Write};

use crate::control::GroupControl;
use crate::error::Result;
use crate::layout::{Cell, GridLayout, Parity};
use crate::option::{OptionList, RenderedOption};

pub trait OptionSource {
    fn group_id(&self) -> &str;
    fn rendered_options(&self) -> Vec<RenderedOption<'_>>;
}

impl OptionSource for OptionList {
    fn group_id(&self) -> &str {
        &self.group_id
    }

    fn rendered_options(&self) -> Vec<RenderedOption<'_>> {
        self.rendered()
    }
}

pub trait SelectionCodec {
    fn input_type(&self) -> &'static str;
    fn wire_name<'a>(&'a self, option: &'a RenderedOption<'_>) -> &'a str;
    fn wire_value(&self, option: &RenderedOption<'_>) -> Option<String>;
    fn is_checked(&self, option: &RenderedOption<'_>) -> bool;
}

impl SelectionCodec for GroupControl {
    fn input_type(&self) -> &'static str {
        self.cardinality.input_type()
    }

    fn wire_name<'a>(&'a self, option: &'a RenderedOption<'_>) -> &'a str {
        GroupControl::wire_name(self, option)
    }

    fn wire_value(&self, option: &RenderedOption<'_>) -> Option<String> {
        GroupControl::wire_value(self, option)
    }

    fn is_checked(&self, option: &RenderedOption<'_>) -> bool {
        GroupControl::is_checked(self, option)
    }
}

/// Everything a render call needs, passed explicitly.
pub struct RenderContext<'a> {
    pub styles: &'a dyn StyleResolver,
    pub out: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(styles: &'a dyn StyleResolver) -> Self {
        Self {
            styles,
            out: String::new(),
        }
    }

    pub fn into_markup(self) -> String {
        self.out
    }

    fn class_attr(&mut self, role: StyleRole) -> fmt::Result {
        match self.styles.class(role) {
            Some(class) => write!(self.out, " class=\"{}\"", attr(&class)),
            None => Ok(()),
        }
    }
}

/// Label of a single control. Built per call instead of patching shared
/// component state.
#[derive(Debug, Clone, Copy)]
pub struct LabelParams<'a> {
    pub for_id: &'a str,
    pub text: &'a str,
    pub icon: Option<&'a str>,
    pub tooltip: Option<&'a str>,
    pub disabled: bool,
}

pub fn render_control_label(params: &LabelParams<'_>, ctx: &mut RenderContext<'_>) -> fmt::Result {
    if let Some(icon) = params.icon {
        write!(ctx.out, "<img src=\"{}\" alt=\"\"", attr(icon))?;
        ctx.class_attr(StyleRole::Image.when_disabled(params.disabled))?;
        ctx.out.push_str(" />");
    }
    write!(ctx.out, "<label for=\"{}\"", attr(params.for_id))?;
    ctx.class_attr(StyleRole::Label.when_disabled(params.disabled))?;
    if let Some(tooltip) = params.tooltip {
        write!(ctx.out, " title=\"{}\"", attr(tooltip))?;
    }
    write!(ctx.out, ">{}</label>", text(params.text))
}

struct ControlFlags {
    disabled: bool,
    read_only: bool,
}

fn render_option<C: SelectionCodec + ?Sized>(
    codec: &C,
    option: &RenderedOption<'_>,
    flags: &ControlFlags,
    ctx: &mut RenderContext<'_>,
) -> fmt::Result {
    let id = &option.element_id;
    write!(ctx.out, "<span id=\"{}_span\"", attr(id))?;
    ctx.class_attr(StyleRole::Span.when_disabled(flags.disabled))?;
    ctx.out.push('>');

    write!(
        ctx.out,
        "<input type=\"{}\" id=\"{}\" name=\"{}\"",
        codec.input_type(),
        attr(id),
        attr(codec.wire_name(option))
    )?;
    if let Some(value) = codec.wire_value(option) {
        write!(ctx.out, " value=\"{}\"", attr(&value))?;
    }
    if codec.is_checked(option) {
        ctx.out.push_str(" checked=\"checked\"");
    }
    if flags.read_only {
        ctx.out.push_str(" readonly=\"readonly\"");
    }
    if flags.disabled {
        ctx.out.push_str(" disabled=\"disabled\"");
    }
    ctx.class_attr(StyleRole::Input.when_disabled(flags.disabled))?;
    if let Some(tooltip) = &option.option.tooltip {
        write!(ctx.out, " title=\"{}\"", attr(tooltip))?;
    }
    ctx.out.push_str(" />");

    render_control_label(
        &LabelParams {
            for_id: id,
            text: &option.option.label,
            icon: option.option.image.as_deref(),
            tooltip: option.option.tooltip.as_deref(),
            disabled: flags.disabled,
        },
        ctx,
    )?;
    ctx.out.push_str("</span>");
    Ok(())
}

/// Write a grouped control as a table: a caption column, then the options
/// tiled row-major. Nothing is written for an empty option list.
pub fn render_group(control: &GroupControl, ctx: &mut RenderContext<'_>) -> fmt::Result {
    let options = control.options.rendered_options();
    let Some(grid) = GridLayout::new(options.len(), control.columns) else {
        tracing::trace!(control = control.id(), "no options, nothing to render");
        return Ok(());
    };
    let flags = ControlFlags {
        disabled: control.disabled,
        read_only: control.read_only,
    };

    write!(ctx.out, "<table id=\"{}\"", attr(control.options.group_id()))?;
    ctx.class_attr(StyleRole::Group)?;
    ctx.out.push('>');

    for (row, cells) in grid.rows().enumerate() {
        ctx.out.push_str("<tr");
        ctx.class_attr(match grid.row_parity(row) {
            Parity::Odd => StyleRole::RowOdd,
            Parity::Even => StyleRole::RowEven,
        })?;
        ctx.out.push('>');

        if row == 0 {
            ctx.out.push_str("<td");
            ctx.class_attr(StyleRole::Caption)?;
            ctx.out.push('>');
            if let Some(caption) = &control.caption {
                write!(ctx.out, "{}", text(caption))?;
            }
            ctx.out.push_str("</td>");
        } else {
            ctx.out.push_str("<td></td>");
        }

        for (column, cell) in cells.into_iter().enumerate() {
            ctx.out.push_str("<td");
            ctx.class_attr(match grid.cell_parity(column) {
                Parity::Odd => StyleRole::CellOdd,
                Parity::Even => StyleRole::CellEven,
            })?;
            ctx.out.push('>');
            if let Cell::Item(index) = cell {
                render_option(control, &options[index], &flags, ctx)?;
            }
            ctx.out.push_str("</td>");
        }
        ctx.out.push_str("</tr>");
    }
    ctx.out.push_str("</table>");
    Ok(())
}

/// Render `control` with `styles` into a fresh string.
pub fn render_to_string(control: &GroupControl, styles: &dyn StyleResolver) -> Result<String> {
    let mut ctx = RenderContext::new(styles);
    render_group(control, &mut ctx)?;
    Ok(ctx.into_markup())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{OptionValue, SelectOption};
    use crate::request::RequestParams;
    use crate::selection::{Cardinality, SelectedValues};
    use std::sync::Arc;

    fn pets() -> Arc<OptionList> {
        Arc::new(OptionList::new(
            "pets",
            vec![
                SelectOption::new("cat", "Cat").with_tooltip("meows"),
                SelectOption::new("dog", "Dog <big>"),
                SelectOption::new("fish", "Fish").with_image("/img/fish.png"),
            ],
        ))
    }

    #[test]
    fn test_marks_only_checked_options() {
        let control = GroupControl::new(pets(), Cardinality::Multiple)
            .with_columns(2)
            .with_model(SelectedValues::Array(vec![OptionValue::from("dog")]));
        let html = render_to_string(&control, &NoStyles).unwrap();

        assert_eq!(html.matches("checked=\"checked\"").count(), 1);
        assert!(html.contains(
            "<input type=\"checkbox\" id=\"pets_1\" name=\"pets\" value=\"dog\" checked=\"checked\" />"
        ));
        assert_eq!(html.matches("<tr").count(), 2);
        // the padding cell of the last row is still emitted
        assert!(html.ends_with("<td></td></tr></table>"));
    }

    #[test]
    fn test_escapes_labels_and_attributes() {
        let control = GroupControl::new(pets(), Cardinality::Single).with_caption("Pets & co");
        let html = render_to_string(&control, &NoStyles).unwrap();
        assert!(html.contains("Dog &lt;big&gt;"));
        assert!(html.contains("Pets &amp; co"));
        assert!(html.contains("title=\"meows\""));
        assert!(html.contains("<img src=\"/img/fish.png\" alt=\"\" />"));
        assert!(html.contains("type=\"radio\""));
    }

    #[test]
    fn test_disabled_uses_disabled_styles() {
        let control = GroupControl::new(pets(), Cardinality::Multiple).disabled(true);
        let styles = DefaultStyles::new(Cardinality::Multiple);
        let html = render_to_string(&control, &styles).unwrap();
        assert_eq!(html.matches("disabled=\"disabled\"").count(), 3);
        assert!(html.contains("class=\"selkit-checkbox-input-disabled\""));
        assert!(html.contains("class=\"selkit-checkbox-row-odd\""));
        assert!(!html.contains("class=\"selkit-checkbox-input\""));
    }

    #[test]
    fn test_submission_drives_checked_flag() {
        let mut control = GroupControl::new(pets(), Cardinality::Multiple)
            .with_model(SelectedValues::Array(vec![OptionValue::from("cat")]));
        control.decode(&RequestParams::parse_urlencoded("pets=fish").unwrap());
        let html = render_to_string(&control, &NoStyles).unwrap();
        assert!(html.contains("value=\"fish\" checked=\"checked\""));
        assert!(!html.contains("value=\"cat\" checked"));
    }

    #[test]
    fn test_boolean_group_submits_element_ids() {
        let flags = Arc::new(OptionList::new(
            "opts",
            vec![SelectOption::new(true, "A"), SelectOption::new(true, "B")],
        ));
        let control = GroupControl::new(flags, Cardinality::Multiple);
        let html = render_to_string(&control, &NoStyles).unwrap();
        assert!(html.contains("value=\"opts_0\""));
        assert!(html.contains("value=\"opts_1\""));
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let control = GroupControl::new(Arc::new(OptionList::new("none", vec![])), Cardinality::Single);
        assert_eq!(render_to_string(&control, &NoStyles).unwrap(), "");
    }

    #[test]
    fn test_label_params() {
        let mut ctx = RenderContext::new(&NoStyles);
        render_control_label(
            &LabelParams {
                for_id: "alarm",
                text: "3 critical",
                icon: Some("/icons/crit.gif"),
                tooltip: None,
                disabled: false,
            },
            &mut ctx,
        )
        .unwrap();
        assert_eq!(
            ctx.into_markup(),
            "<img src=\"/icons/crit.gif\" alt=\"\" /><label for=\"alarm\">3 critical</label>"
        );
    }
}
