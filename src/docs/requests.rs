//! Wire shapes for `documents.batchUpdate` requests and responses.

use crate::docs::values::{
    BulletPreset, DimensionUnit, HeaderFooterType, SectionType,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn segment(segment_id: Option<&str>) -> Option<String> {
    segment_id
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
}

impl Location {
    pub fn new(index: u32, segment_id: Option<&str>) -> Self {
        Self {
            index,
            segment_id: segment(segment_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_index: u32,
    pub end_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
}

impl Range {
    pub fn new(start_index: u32, end_index: u32, segment_id: Option<&str>) -> Self {
        Self {
            start_index,
            end_index,
            segment_id: segment(segment_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: DimensionUnit,
}

impl Dimension {
    pub fn new(magnitude: f64, unit: Option<DimensionUnit>) -> Self {
        Self {
            magnitude,
            unit: unit.unwrap_or_default(),
        }
    }

    pub fn points(magnitude: f64) -> Self {
        Self::new(magnitude, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Size {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

/// Anchors a table operation at one cell of the table starting at
/// `table_start_location`. Row and column are 0-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellLocation {
    pub table_start_location: Location,
    pub row_index: u32,
    pub column_index: u32,
}

impl TableCellLocation {
    pub fn new(table_start_index: u32, row_index: u32, column_index: u32) -> Self {
        Self {
            table_start_location: Location::new(table_start_index, None),
            row_index,
            column_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRange {
    pub table_cell_location: TableCellLocation,
    pub row_span: u32,
    pub column_span: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatchCriteria {
    pub text: String,
    pub match_case: bool,
}

/// Index of the section break a header or footer belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBreakLocation {
    pub index: u32,
}

/// One entry of a batch, serialized as `{ "<kind>": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    InsertText {
        text: String,
        location: Location,
    },
    DeleteContentRange {
        range: Range,
    },
    ReplaceAllText {
        contains_text: SubstringMatchCriteria,
        replace_text: String,
    },
    InsertInlineImage {
        uri: String,
        location: Location,
        #[serde(skip_serializing_if = "Option::is_none")]
        object_size: Option<Size>,
    },
    InsertPageBreak {
        location: Location,
    },
    UpdateTextStyle {
        text_style: Map<String, Value>,
        range: Range,
        fields: String,
    },
    UpdateParagraphStyle {
        paragraph_style: Map<String, Value>,
        range: Range,
        fields: String,
    },
    CreateParagraphBullets {
        range: Range,
        bullet_preset: BulletPreset,
    },
    DeleteParagraphBullets {
        range: Range,
    },
    InsertTable {
        rows: u32,
        columns: u32,
        location: Location,
    },
    InsertTableRow {
        table_cell_location: TableCellLocation,
        insert_below: bool,
    },
    InsertTableColumn {
        table_cell_location: TableCellLocation,
        insert_right: bool,
    },
    DeleteTableRow {
        table_cell_location: TableCellLocation,
    },
    DeleteTableColumn {
        table_cell_location: TableCellLocation,
    },
    MergeTableCells {
        table_range: TableRange,
    },
    UnmergeTableCells {
        table_range: TableRange,
    },
    CreateHeader {
        #[serde(rename = "type")]
        kind: HeaderFooterType,
        #[serde(skip_serializing_if = "Option::is_none")]
        section_break_location: Option<SectionBreakLocation>,
    },
    CreateFooter {
        #[serde(rename = "type")]
        kind: HeaderFooterType,
        #[serde(skip_serializing_if = "Option::is_none")]
        section_break_location: Option<SectionBreakLocation>,
    },
    DeleteHeader {
        header_id: String,
    },
    DeleteFooter {
        footer_id: String,
    },
    InsertSectionBreak {
        location: Location,
        section_type: SectionType,
    },
    CreateNamedRange {
        name: String,
        range: Range,
    },
    DeleteNamedRange {
        #[serde(skip_serializing_if = "Option::is_none")]
        named_range_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub replies: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_control: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_without_segment_has_no_segment_key() {
        let value = serde_json::to_value(Location::new(1, None)).expect("value");
        assert_eq!(value, json!({"index": 1}));

        let value = serde_json::to_value(Location::new(1, Some(""))).expect("value");
        assert_eq!(value, json!({"index": 1}));
    }

    #[test]
    fn range_keeps_segment_verbatim() {
        let value = serde_json::to_value(Range::new(3, 9, Some("kix.abc123"))).expect("value");
        assert_eq!(
            value,
            json!({"startIndex": 3, "endIndex": 9, "segmentId": "kix.abc123"})
        );
    }

    #[test]
    fn request_is_keyed_by_camel_case_kind() {
        let request = Request::InsertTableRow {
            table_cell_location: TableCellLocation::new(12, 0, 1),
            insert_below: true,
        };
        assert_eq!(
            serde_json::to_value(request).expect("value"),
            json!({
                "insertTableRow": {
                    "tableCellLocation": {
                        "tableStartLocation": {"index": 12},
                        "rowIndex": 0,
                        "columnIndex": 1
                    },
                    "insertBelow": true
                }
            })
        );
    }

    #[test]
    fn create_header_uses_type_key() {
        let request = Request::CreateHeader {
            kind: HeaderFooterType::Default,
            section_break_location: None,
        };
        assert_eq!(
            serde_json::to_value(request).expect("value"),
            json!({"createHeader": {"type": "DEFAULT"}})
        );
    }

    #[test]
    fn batch_response_tolerates_missing_write_control() {
        let parsed: BatchUpdateResponse =
            serde_json::from_value(json!({"documentId": "D1", "replies": [{}, {}]}))
                .expect("response");
        assert_eq!(parsed.document_id, "D1");
        assert_eq!(parsed.replies.len(), 2);
        assert!(parsed.write_control.is_none());
        assert_eq!(
            serde_json::to_value(&parsed).expect("value"),
            json!({"documentId": "D1", "replies": [{}, {}]})
        );
    }
}
