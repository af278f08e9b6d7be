//! Sparse style objects paired with their update field mask.
//!
//! The remote service overwrites exactly the sub-fields named in `fields` and
//! leaves the rest of the target range's style untouched. A key set in the
//! style but missing from the mask is silently ignored upstream, so both are
//! written through the single [`MaskedStyle::set`] entry point.

use crate::docs::options::{UpdateParagraphStyleOptions, UpdateTextStyleOptions};
use crate::docs::requests::Dimension;
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskedStyle {
    style: Map<String, Value>,
    fields: Vec<&'static str>,
}

impl MaskedStyle {
    fn set(&mut self, field: &'static str, value: impl Serialize) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        if self.style.insert(field.to_string(), value).is_none() {
            self.fields.push(field);
        }
    }

    fn set_some<T: Serialize>(&mut self, field: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn mask(&self) -> String {
        self.fields.join(",")
    }

    #[cfg(test)]
    pub fn style(&self) -> &Map<String, Value> {
        &self.style
    }

    pub fn into_parts(self) -> (Map<String, Value>, String) {
        let mask = self.mask();
        (self.style, mask)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `{color: {rgbColor: {...}}}` when any channel is given; absent channels are 0.
fn optional_color(red: Option<f64>, green: Option<f64>, blue: Option<f64>) -> Option<Value> {
    if red.is_none() && green.is_none() && blue.is_none() {
        return None;
    }
    Some(json!({
        "color": {
            "rgbColor": {
                "red": red.unwrap_or(0.0),
                "green": green.unwrap_or(0.0),
                "blue": blue.unwrap_or(0.0)
            }
        }
    }))
}

pub fn text_style(options: &UpdateTextStyleOptions) -> MaskedStyle {
    let mut masked = MaskedStyle::default();
    masked.set_some("bold", options.bold);
    masked.set_some("italic", options.italic);
    masked.set_some("underline", options.underline);
    masked.set_some("strikethrough", options.strikethrough);
    masked.set_some("smallCaps", options.small_caps);
    masked.set_some("fontSize", options.font_size.map(Dimension::points));
    masked.set_some(
        "weightedFontFamily",
        non_empty(&options.font_family).map(|family| json!({"fontFamily": family})),
    );
    masked.set_some(
        "foregroundColor",
        optional_color(
            options.foreground_color_red,
            options.foreground_color_green,
            options.foreground_color_blue,
        ),
    );
    masked.set_some(
        "backgroundColor",
        optional_color(
            options.background_color_red,
            options.background_color_green,
            options.background_color_blue,
        ),
    );
    masked.set_some(
        "link",
        non_empty(&options.link_url).map(|url| json!({"url": url})),
    );
    masked.set_some("baselineOffset", options.baseline_offset);
    masked
}

pub fn paragraph_style(options: &UpdateParagraphStyleOptions) -> MaskedStyle {
    let mut masked = MaskedStyle::default();
    masked.set_some("namedStyleType", options.named_style_type);
    masked.set_some("alignment", options.alignment);
    masked.set_some("lineSpacing", options.line_spacing);
    masked.set_some("direction", options.direction);
    masked.set_some("headingId", non_empty(&options.heading_id));
    masked.set_some(
        "spaceAbove",
        options.space_above_magnitude.map(Dimension::points),
    );
    masked.set_some(
        "spaceBelow",
        options.space_below_magnitude.map(Dimension::points),
    );
    masked.set_some(
        "indentFirstLine",
        options.indent_first_line_magnitude.map(Dimension::points),
    );
    masked.set_some(
        "indentStart",
        options.indent_start_magnitude.map(Dimension::points),
    );
    masked.set_some(
        "indentEnd",
        options.indent_end_magnitude.map(Dimension::points),
    );
    masked
}
