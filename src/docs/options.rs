//! Per-operation option records.
//!
//! Field names follow the flat snake_case argument convention of the tool
//! surface, so each record deserializes directly from a tool call's
//! arguments. `validate` rejects requests the remote service would refuse.

use crate::docs::values::{
    Alignment, BaselineOffset, BulletPreset, ContentDirection, DimensionUnit, HeaderFooterType,
    NamedStyleType, SectionType, SuggestionsViewMode,
};
use crate::error::{DocsError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DocsError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Document ids are placed in the request path, so only the id alphabet is
/// accepted.
fn require_document_id(value: &str) -> Result<()> {
    require_text("document_id", value)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(DocsError::invalid_input(
            "document_id may only contain letters, digits, '_' and '-'",
        ));
    }
    Ok(())
}

fn require_ordered(start_index: u32, end_index: u32) -> Result<()> {
    if start_index > end_index {
        return Err(DocsError::invalid_input(format!(
            "start_index ({start_index}) must not exceed end_index ({end_index})"
        )));
    }
    Ok(())
}

fn require_positive(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(DocsError::invalid_input(format!("{field} must be at least 1")));
    }
    Ok(())
}

fn require_channel(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(channel) if !(0.0..=1.0).contains(&channel) => Err(DocsError::invalid_input(
            format!("{field} must be between 0 and 1"),
        )),
        _ => Ok(()),
    }
}

fn require_non_negative(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(magnitude) if !magnitude.is_finite() || magnitude < 0.0 => Err(
            DocsError::invalid_input(format!("{field} must be a non-negative number")),
        ),
        _ => Ok(()),
    }
}

/// Optional enum arguments treat `""` the same as an omitted value.
fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ========== Document ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDocumentOptions {
    pub title: String,
}

impl Validate for CreateDocumentOptions {
    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetDocumentOptions {
    pub document_id: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub suggestions_view_mode: Option<SuggestionsViewMode>,
}

impl Validate for GetDocumentOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

// ========== Content ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertTextOptions {
    pub document_id: String,
    pub text: String,
    pub index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
}

impl Validate for InsertTextOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        if self.text.is_empty() {
            return Err(DocsError::invalid_input("text must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeOptions {
    pub document_id: String,
    pub start_index: u32,
    pub end_index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
}

impl Validate for RangeOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_ordered(self.start_index, self.end_index)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceAllTextOptions {
    pub document_id: String,
    pub search_text: String,
    pub replace_text: String,
    #[serde(default)]
    pub match_case: Option<bool>,
}

impl Validate for ReplaceAllTextOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        if self.search_text.is_empty() {
            return Err(DocsError::invalid_input("search_text must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertInlineImageOptions {
    pub document_id: String,
    pub uri: String,
    pub index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub width_magnitude: Option<f64>,
    #[serde(default)]
    pub height_magnitude: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub width_unit: Option<DimensionUnit>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub height_unit: Option<DimensionUnit>,
}

impl Validate for InsertInlineImageOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_text("uri", &self.uri)?;
        require_non_negative("width_magnitude", self.width_magnitude)?;
        require_non_negative("height_magnitude", self.height_magnitude)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertPageBreakOptions {
    pub document_id: String,
    pub index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
}

impl Validate for InsertPageBreakOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

// ========== Text Formatting ==========

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTextStyleOptions {
    pub document_id: String,
    pub start_index: u32,
    pub end_index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub italic: Option<bool>,
    #[serde(default)]
    pub underline: Option<bool>,
    #[serde(default)]
    pub strikethrough: Option<bool>,
    #[serde(default)]
    pub small_caps: Option<bool>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub foreground_color_red: Option<f64>,
    #[serde(default)]
    pub foreground_color_green: Option<f64>,
    #[serde(default)]
    pub foreground_color_blue: Option<f64>,
    #[serde(default)]
    pub background_color_red: Option<f64>,
    #[serde(default)]
    pub background_color_green: Option<f64>,
    #[serde(default)]
    pub background_color_blue: Option<f64>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub baseline_offset: Option<BaselineOffset>,
}

impl Validate for UpdateTextStyleOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_ordered(self.start_index, self.end_index)?;
        require_non_negative("font_size", self.font_size)?;
        for (field, value) in [
            ("foreground_color_red", self.foreground_color_red),
            ("foreground_color_green", self.foreground_color_green),
            ("foreground_color_blue", self.foreground_color_blue),
            ("background_color_red", self.background_color_red),
            ("background_color_green", self.background_color_green),
            ("background_color_blue", self.background_color_blue),
        ] {
            require_channel(field, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateParagraphStyleOptions {
    pub document_id: String,
    pub start_index: u32,
    pub end_index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub named_style_type: Option<NamedStyleType>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub line_spacing: Option<f64>,
    #[serde(default)]
    pub space_above_magnitude: Option<f64>,
    #[serde(default)]
    pub space_below_magnitude: Option<f64>,
    #[serde(default)]
    pub indent_first_line_magnitude: Option<f64>,
    #[serde(default)]
    pub indent_start_magnitude: Option<f64>,
    #[serde(default)]
    pub indent_end_magnitude: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub direction: Option<ContentDirection>,
    #[serde(default)]
    pub heading_id: Option<String>,
}

impl Validate for UpdateParagraphStyleOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_ordered(self.start_index, self.end_index)?;
        require_non_negative("line_spacing", self.line_spacing)?;
        require_non_negative("space_above_magnitude", self.space_above_magnitude)?;
        require_non_negative("space_below_magnitude", self.space_below_magnitude)
    }
}

// ========== Lists ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBulletsOptions {
    pub document_id: String,
    pub start_index: u32,
    pub end_index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
    pub bullet_preset: BulletPreset,
}

impl Validate for CreateBulletsOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_ordered(self.start_index, self.end_index)
    }
}

// ========== Tables ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertTableOptions {
    pub document_id: String,
    pub rows: u32,
    pub columns: u32,
    pub index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
}

impl Validate for InsertTableOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_positive("rows", self.rows)?;
        require_positive("columns", self.columns)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertTableRowOptions {
    pub document_id: String,
    pub table_start_index: u32,
    pub row_index: u32,
    pub column_index: u32,
    pub insert_below: bool,
}

impl Validate for InsertTableRowOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertTableColumnOptions {
    pub document_id: String,
    pub table_start_index: u32,
    pub row_index: u32,
    pub column_index: u32,
    pub insert_right: bool,
}

impl Validate for InsertTableColumnOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

/// Shared by row and column deletion: both address one reference cell.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableCellOptions {
    pub document_id: String,
    pub table_start_index: u32,
    pub row_index: u32,
    pub column_index: u32,
}

impl Validate for TableCellOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableRangeOptions {
    pub document_id: String,
    pub table_start_index: u32,
    pub row_index: u32,
    pub column_index: u32,
    pub row_span: u32,
    pub column_span: u32,
}

impl Validate for TableRangeOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_positive("row_span", self.row_span)?;
        require_positive("column_span", self.column_span)
    }
}

// ========== Headers & Footers ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateHeaderFooterOptions {
    pub document_id: String,
    #[serde(rename = "type")]
    pub kind: HeaderFooterType,
    #[serde(default)]
    pub section_break_index: Option<u32>,
}

impl Validate for CreateHeaderFooterOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteHeaderOptions {
    pub document_id: String,
    pub header_id: String,
}

impl Validate for DeleteHeaderOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_text("header_id", &self.header_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteFooterOptions {
    pub document_id: String,
    pub footer_id: String,
}

impl Validate for DeleteFooterOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_text("footer_id", &self.footer_id)
    }
}

// ========== Sections & Named Ranges ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertSectionBreakOptions {
    pub document_id: String,
    pub index: u32,
    pub section_type: SectionType,
    #[serde(default)]
    pub segment_id: Option<String>,
}

impl Validate for InsertSectionBreakOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNamedRangeOptions {
    pub document_id: String,
    pub name: String,
    pub start_index: u32,
    pub end_index: u32,
    #[serde(default)]
    pub segment_id: Option<String>,
}

impl Validate for CreateNamedRangeOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        require_text("name", &self.name)?;
        require_ordered(self.start_index, self.end_index)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteNamedRangeOptions {
    pub document_id: String,
    #[serde(default)]
    pub named_range_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Validate for DeleteNamedRangeOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        let has = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        if !has(&self.named_range_id) && !has(&self.name) {
            return Err(DocsError::invalid_input(
                "either named_range_id or name is required",
            ));
        }
        Ok(())
    }
}

// ========== Advanced ==========

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchUpdateOptions {
    pub document_id: String,
    pub requests: Vec<Value>,
}

impl Validate for BatchUpdateOptions {
    fn validate(&self) -> Result<()> {
        require_document_id(&self.document_id)?;
        if self.requests.is_empty() {
            return Err(DocsError::invalid_input("requests must not be empty"));
        }
        if let Some(position) = self.requests.iter().position(|r| !r.is_object()) {
            return Err(DocsError::invalid_input(format!(
                "requests[{position}] must be an object"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn range_rejects_inverted_bounds() {
        let options: RangeOptions = serde_json::from_value(json!({
            "document_id": "D1",
            "start_index": 10,
            "end_index": 5
        }))
        .expect("options");
        let err = options.validate().expect_err("inverted");
        assert!(err.to_string().contains("start_index (10)"));
    }

    #[test]
    fn empty_range_is_allowed() {
        let options: RangeOptions = serde_json::from_value(json!({
            "document_id": "D1",
            "start_index": 5,
            "end_index": 5
        }))
        .expect("options");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn negative_index_fails_to_parse() {
        let parsed: std::result::Result<InsertTextOptions, _> = serde_json::from_value(json!({
            "document_id": "D1",
            "text": "Hi",
            "index": -1
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_argument_fails_to_parse() {
        let parsed: std::result::Result<InsertPageBreakOptions, _> =
            serde_json::from_value(json!({
                "document_id": "D1",
                "index": 1,
                "color": "red"
            }));
        assert!(parsed.is_err());
    }

    #[test]
    fn color_channel_out_of_range() {
        let options = UpdateTextStyleOptions {
            document_id: "D1".into(),
            start_index: 1,
            end_index: 2,
            foreground_color_green: Some(1.5),
            ..Default::default()
        };
        let err = options.validate().expect_err("out of range");
        assert!(err.to_string().contains("foreground_color_green"));
    }

    #[test]
    fn table_span_must_be_positive() {
        let options: TableRangeOptions = serde_json::from_value(json!({
            "document_id": "D1",
            "table_start_index": 2,
            "row_index": 0,
            "column_index": 0,
            "row_span": 0,
            "column_span": 2
        }))
        .expect("options");
        assert!(options.validate().is_err());
    }

    #[test]
    fn delete_named_range_needs_target() {
        let options: DeleteNamedRangeOptions =
            serde_json::from_value(json!({"document_id": "D1"})).expect("options");
        assert!(options.validate().is_err());

        let options: DeleteNamedRangeOptions =
            serde_json::from_value(json!({"document_id": "D1", "name": "intro"}))
                .expect("options");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn batch_requires_object_entries() {
        let options: BatchUpdateOptions = serde_json::from_value(json!({
            "document_id": "D1",
            "requests": [{"insertText": {}}, "oops"]
        }))
        .expect("options");
        let err = options.validate().expect_err("not an object");
        assert!(err.to_string().contains("requests[1]"));
    }

    #[test]
    fn blank_enum_arguments_count_as_absent() {
        let options: UpdateParagraphStyleOptions = serde_json::from_value(json!({
            "document_id": "D1",
            "start_index": 1,
            "end_index": 4,
            "alignment": "",
            "named_style_type": "",
            "direction": null,
            "line_spacing": 100
        }))
        .expect("options");
        assert!(options.alignment.is_none());
        assert!(options.named_style_type.is_none());
        assert!(options.direction.is_none());

        let options: GetDocumentOptions =
            serde_json::from_value(json!({"document_id": "D1", "suggestions_view_mode": ""}))
                .expect("options");
        assert!(options.suggestions_view_mode.is_none());

        let options: InsertInlineImageOptions = serde_json::from_value(json!({
            "document_id": "D1",
            "uri": "https://example.com/a.png",
            "index": 1,
            "width_unit": "",
            "height_unit": "PT"
        }))
        .expect("options");
        assert!(options.width_unit.is_none());
        assert_eq!(options.height_unit, Some(DimensionUnit::Pt));
    }

    #[test]
    fn unknown_enum_value_still_fails_to_parse() {
        let parsed: std::result::Result<UpdateTextStyleOptions, _> =
            serde_json::from_value(json!({
                "document_id": "D1",
                "start_index": 1,
                "end_index": 2,
                "baseline_offset": "SIDEWAYS"
            }));
        assert!(parsed.is_err());
    }

    #[test]
    fn document_id_rejects_path_and_query_characters() {
        for id in [
            "D1?suggestionsViewMode=PREVIEW_WITHOUT_SUGGESTIONS",
            "../D1",
            "D 1",
            "D1:batchUpdate",
        ] {
            let options = GetDocumentOptions {
                document_id: id.into(),
                suggestions_view_mode: None,
            };
            let err = options.validate().expect_err("rejected");
            assert!(err.to_string().contains("document_id"), "{id}");
        }

        let options = GetDocumentOptions {
            document_id: "1aB-c_9".into(),
            suggestions_view_mode: None,
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn header_type_reads_type_key() {
        let options: CreateHeaderFooterOptions =
            serde_json::from_value(json!({"document_id": "D1", "type": "DEFAULT"}))
                .expect("options");
        assert_eq!(options.kind, HeaderFooterType::Default);
        assert!(options.section_break_index.is_none());
    }
}
