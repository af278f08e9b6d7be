use crate::docs::values::{
    Alignment, BaselineOffset, BulletPreset, ContentDirection, DimensionUnit, HeaderFooterType,
    NamedStyleType, SectionType, SuggestionsViewMode,
};
use serde_json::{Map, Value, json};

pub const TOOL_CREATE: &str = "gdoc_create";
pub const TOOL_GET: &str = "gdoc_get";
pub const TOOL_INSERT_TEXT: &str = "gdoc_insert_text";
pub const TOOL_DELETE_CONTENT: &str = "gdoc_delete_content";
pub const TOOL_REPLACE_ALL_TEXT: &str = "gdoc_replace_all_text";
pub const TOOL_INSERT_INLINE_IMAGE: &str = "gdoc_insert_inline_image";
pub const TOOL_INSERT_PAGE_BREAK: &str = "gdoc_insert_page_break";
pub const TOOL_UPDATE_TEXT_STYLE: &str = "gdoc_update_text_style";
pub const TOOL_UPDATE_PARAGRAPH_STYLE: &str = "gdoc_update_paragraph_style";
pub const TOOL_CREATE_BULLETS: &str = "gdoc_create_bullets";
pub const TOOL_DELETE_BULLETS: &str = "gdoc_delete_bullets";
pub const TOOL_INSERT_TABLE: &str = "gdoc_insert_table";
pub const TOOL_INSERT_TABLE_ROW: &str = "gdoc_insert_table_row";
pub const TOOL_INSERT_TABLE_COLUMN: &str = "gdoc_insert_table_column";
pub const TOOL_DELETE_TABLE_ROW: &str = "gdoc_delete_table_row";
pub const TOOL_DELETE_TABLE_COLUMN: &str = "gdoc_delete_table_column";
pub const TOOL_MERGE_TABLE_CELLS: &str = "gdoc_merge_table_cells";
pub const TOOL_UNMERGE_TABLE_CELLS: &str = "gdoc_unmerge_table_cells";
pub const TOOL_CREATE_HEADER: &str = "gdoc_create_header";
pub const TOOL_CREATE_FOOTER: &str = "gdoc_create_footer";
pub const TOOL_DELETE_HEADER: &str = "gdoc_delete_header";
pub const TOOL_DELETE_FOOTER: &str = "gdoc_delete_footer";
pub const TOOL_INSERT_SECTION_BREAK: &str = "gdoc_insert_section_break";
pub const TOOL_CREATE_NAMED_RANGE: &str = "gdoc_create_named_range";
pub const TOOL_DELETE_NAMED_RANGE: &str = "gdoc_delete_named_range";
pub const TOOL_BATCH_UPDATE: &str = "gdoc_batch_update";

const SEGMENT_ID: &str = "Segment ID (header/footer ID). Omit for body content";

fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn integer(description: &str) -> Value {
    json!({ "type": "integer", "minimum": 0, "description": description })
}

fn positive_integer(description: &str) -> Value {
    json!({ "type": "integer", "minimum": 1, "description": description })
}

fn number(description: &str) -> Value {
    json!({ "type": "number", "description": description })
}

fn color_channel(description: &str) -> Value {
    json!({ "type": "number", "minimum": 0, "maximum": 1, "description": description })
}

fn boolean(description: &str) -> Value {
    json!({ "type": "boolean", "description": description })
}

fn one_of(description: &str, values: Vec<&'static str>) -> Value {
    json!({ "type": "string", "description": description, "enum": values })
}

fn document_id() -> (&'static str, Value) {
    ("document_id", string("The document ID"))
}

fn segment_id() -> (&'static str, Value) {
    ("segment_id", string(SEGMENT_ID))
}

fn object_schema(properties: Vec<(&'static str, Value)>, required: &[&str]) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn range_properties(what: &str) -> Vec<(&'static str, Value)> {
    vec![
        document_id(),
        (
            "start_index",
            integer(&format!("Start index of the {what} (inclusive)")),
        ),
        (
            "end_index",
            integer(&format!("End index of the {what} (exclusive)")),
        ),
        segment_id(),
    ]
}

fn table_cell_properties(row: &str, column: &str) -> Vec<(&'static str, Value)> {
    vec![
        document_id(),
        (
            "table_start_index",
            integer("Start index of the table element in the document"),
        ),
        ("row_index", integer(row)),
        ("column_index", integer(column)),
    ]
}

// ========== Document ==========

pub fn create_schema() -> Value {
    object_schema(
        vec![("title", string("Title for the new document"))],
        &["title"],
    )
}

pub fn get_schema() -> Value {
    object_schema(
        vec![
            ("document_id", string("The ID of the document to retrieve")),
            (
                "suggestions_view_mode",
                one_of(
                    "How to render suggestions in the returned content",
                    SuggestionsViewMode::wire_values(),
                ),
            ),
        ],
        &["document_id"],
    )
}

// ========== Content ==========

pub fn insert_text_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            ("text", string("Text to insert")),
            (
                "index",
                integer("The index to insert at (1 = start of body content)"),
            ),
            segment_id(),
        ],
        &["document_id", "text", "index"],
    )
}

pub fn delete_content_schema() -> Value {
    object_schema(
        range_properties("content to delete"),
        &["document_id", "start_index", "end_index"],
    )
}

pub fn replace_all_text_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            ("search_text", string("Text to search for")),
            ("replace_text", string("Replacement text")),
            (
                "match_case",
                boolean("Whether the search is case-sensitive (default: false)"),
            ),
        ],
        &["document_id", "search_text", "replace_text"],
    )
}

pub fn insert_inline_image_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            ("uri", string("Public URL of the image to insert")),
            ("index", integer("Position to insert the image at")),
            segment_id(),
            (
                "width_magnitude",
                number("Image width value (in units specified by width_unit)"),
            ),
            (
                "height_magnitude",
                number("Image height value (in units specified by height_unit)"),
            ),
            (
                "width_unit",
                one_of("Unit for width. Default: PT", DimensionUnit::wire_values()),
            ),
            (
                "height_unit",
                one_of("Unit for height. Default: PT", DimensionUnit::wire_values()),
            ),
        ],
        &["document_id", "uri", "index"],
    )
}

pub fn insert_page_break_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            ("index", integer("Position to insert the page break at")),
            segment_id(),
        ],
        &["document_id", "index"],
    )
}

// ========== Text Formatting ==========

pub fn update_text_style_schema() -> Value {
    let mut properties = range_properties("text range");
    properties.extend([
        ("bold", boolean("Set text to bold")),
        ("italic", boolean("Set text to italic")),
        ("underline", boolean("Set text to underline")),
        ("strikethrough", boolean("Set text to strikethrough")),
        ("small_caps", boolean("Set text to small caps")),
        (
            "font_size",
            number("Font size in points (e.g., 12, 14, 18)"),
        ),
        (
            "font_family",
            string("Font family name (e.g., \"Arial\", \"Times New Roman\")"),
        ),
        (
            "foreground_color_red",
            color_channel("Text color red component (0-1)"),
        ),
        (
            "foreground_color_green",
            color_channel("Text color green component (0-1)"),
        ),
        (
            "foreground_color_blue",
            color_channel("Text color blue component (0-1)"),
        ),
        (
            "background_color_red",
            color_channel("Text background color red component (0-1)"),
        ),
        (
            "background_color_green",
            color_channel("Text background color green component (0-1)"),
        ),
        (
            "background_color_blue",
            color_channel("Text background color blue component (0-1)"),
        ),
        ("link_url", string("URL to link the text to")),
        (
            "baseline_offset",
            one_of("Baseline offset", BaselineOffset::wire_values()),
        ),
    ]);
    object_schema(properties, &["document_id", "start_index", "end_index"])
}

pub fn update_paragraph_style_schema() -> Value {
    let mut properties = range_properties("paragraph range");
    properties.extend([
        (
            "named_style_type",
            one_of(
                "Named style: NORMAL_TEXT, TITLE, SUBTITLE, HEADING_1 through HEADING_6",
                NamedStyleType::wire_values(),
            ),
        ),
        (
            "alignment",
            one_of("Paragraph alignment", Alignment::wire_values()),
        ),
        (
            "line_spacing",
            number("Line spacing as percentage (e.g., 100 = single, 200 = double)"),
        ),
        (
            "space_above_magnitude",
            number("Space above paragraph in points"),
        ),
        (
            "space_below_magnitude",
            number("Space below paragraph in points"),
        ),
        (
            "indent_first_line_magnitude",
            number("First line indent in points"),
        ),
        (
            "indent_start_magnitude",
            number("Start (left) indent in points"),
        ),
        ("indent_end_magnitude", number("End (right) indent in points")),
        (
            "direction",
            one_of("Text direction", ContentDirection::wire_values()),
        ),
        (
            "heading_id",
            string("Heading ID to assign to the paragraph"),
        ),
    ]);
    object_schema(properties, &["document_id", "start_index", "end_index"])
}

// ========== Lists ==========

pub fn create_bullets_schema() -> Value {
    let mut properties = range_properties("range");
    properties.push((
        "bullet_preset",
        one_of("Bullet preset type", BulletPreset::wire_values()),
    ));
    object_schema(
        properties,
        &["document_id", "start_index", "end_index", "bullet_preset"],
    )
}

pub fn delete_bullets_schema() -> Value {
    object_schema(
        range_properties("range"),
        &["document_id", "start_index", "end_index"],
    )
}

// ========== Tables ==========

pub fn insert_table_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            ("rows", positive_integer("Number of rows in the table")),
            ("columns", positive_integer("Number of columns in the table")),
            ("index", integer("Position to insert the table at")),
            segment_id(),
        ],
        &["document_id", "rows", "columns", "index"],
    )
}

pub fn insert_table_row_schema() -> Value {
    let mut properties = table_cell_properties(
        "0-based row index of a reference cell",
        "0-based column index of a reference cell",
    );
    properties.push((
        "insert_below",
        boolean("true = insert below reference row, false = insert above"),
    ));
    object_schema(
        properties,
        &[
            "document_id",
            "table_start_index",
            "row_index",
            "column_index",
            "insert_below",
        ],
    )
}

pub fn insert_table_column_schema() -> Value {
    let mut properties = table_cell_properties(
        "0-based row index of a reference cell",
        "0-based column index of a reference cell",
    );
    properties.push((
        "insert_right",
        boolean("true = insert right of reference column, false = insert left"),
    ));
    object_schema(
        properties,
        &[
            "document_id",
            "table_start_index",
            "row_index",
            "column_index",
            "insert_right",
        ],
    )
}

const TABLE_CELL_REQUIRED: &[&str] = &[
    "document_id",
    "table_start_index",
    "row_index",
    "column_index",
];

const TABLE_RANGE_REQUIRED: &[&str] = &[
    "document_id",
    "table_start_index",
    "row_index",
    "column_index",
    "row_span",
    "column_span",
];

pub fn delete_table_row_schema() -> Value {
    object_schema(
        table_cell_properties(
            "0-based index of the row to delete",
            "0-based column index for cell reference (typically 0)",
        ),
        TABLE_CELL_REQUIRED,
    )
}

pub fn delete_table_column_schema() -> Value {
    object_schema(
        table_cell_properties(
            "0-based row index for cell reference (typically 0)",
            "0-based index of the column to delete",
        ),
        TABLE_CELL_REQUIRED,
    )
}

pub fn merge_table_cells_schema() -> Value {
    let mut properties = table_cell_properties(
        "0-based row index of the top-left cell to merge",
        "0-based column index of the top-left cell to merge",
    );
    properties.extend([
        ("row_span", positive_integer("Number of rows to span in the merge")),
        (
            "column_span",
            positive_integer("Number of columns to span in the merge"),
        ),
    ]);
    object_schema(properties, TABLE_RANGE_REQUIRED)
}

pub fn unmerge_table_cells_schema() -> Value {
    let mut properties = table_cell_properties(
        "0-based row index of the merged cell",
        "0-based column index of the merged cell",
    );
    properties.extend([
        ("row_span", positive_integer("Number of rows in the merged area")),
        (
            "column_span",
            positive_integer("Number of columns in the merged area"),
        ),
    ]);
    object_schema(properties, TABLE_RANGE_REQUIRED)
}

// ========== Headers & Footers ==========

fn create_header_footer_schema(what: &str) -> Value {
    object_schema(
        vec![
            document_id(),
            (
                "type",
                one_of(
                    &format!("{what} type: DEFAULT (applies to all pages unless overridden)"),
                    HeaderFooterType::wire_values(),
                ),
            ),
            (
                "section_break_index",
                integer(&format!(
                    "Index of section break to create the {} for (omit for document-level)",
                    what.to_lowercase()
                )),
            ),
        ],
        &["document_id", "type"],
    )
}

pub fn create_header_schema() -> Value {
    create_header_footer_schema("Header")
}

pub fn create_footer_schema() -> Value {
    create_header_footer_schema("Footer")
}

pub fn delete_header_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            (
                "header_id",
                string("ID of the header to delete (from gdoc_get response headers object)"),
            ),
        ],
        &["document_id", "header_id"],
    )
}

pub fn delete_footer_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            (
                "footer_id",
                string("ID of the footer to delete (from gdoc_get response footers object)"),
            ),
        ],
        &["document_id", "footer_id"],
    )
}

// ========== Sections & Named Ranges ==========

pub fn insert_section_break_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            ("index", integer("Position to insert the section break at")),
            (
                "section_type",
                one_of("Type of section break", SectionType::wire_values()),
            ),
            ("segment_id", string("Segment ID. Omit for body content")),
        ],
        &["document_id", "index", "section_type"],
    )
}

pub fn create_named_range_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            (
                "name",
                string("Name for the range (used for referencing later)"),
            ),
            ("start_index", integer("Start index of the range (inclusive)")),
            ("end_index", integer("End index of the range (exclusive)")),
            ("segment_id", string("Segment ID. Omit for body content")),
        ],
        &["document_id", "name", "start_index", "end_index"],
    )
}

pub fn delete_named_range_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            (
                "named_range_id",
                string("ID of the named range to delete (from gdoc_get response)"),
            ),
            (
                "name",
                string("Name of the named range to delete (alternative to named_range_id)"),
            ),
        ],
        &["document_id"],
    )
}

// ========== Advanced ==========

pub fn batch_update_schema() -> Value {
    object_schema(
        vec![
            document_id(),
            (
                "requests",
                json!({
                    "type": "array",
                    "description": "Array of request objects. Each object has one key (e.g., insertText, updateTextStyle). See Google Docs API batchUpdate reference.",
                    "items": { "type": "object" },
                    "minItems": 1
                }),
            ),
        ],
        &["document_id", "requests"],
    )
}
