use crate::tools::Tool;
use serde_json::{Value, json};

pub mod contracts;
pub mod errors;
pub mod prompts;
pub mod resources;

/// Name reported in `initialize` and the server-info resource.
pub const SERVER_NAME: &str = "google-docs-mcp";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
struct Hints {
    read_only: bool,
    destructive: bool,
    idempotent: bool,
}

const READ: Hints = Hints {
    read_only: true,
    destructive: false,
    idempotent: true,
};

const WRITE: Hints = Hints {
    read_only: false,
    destructive: false,
    idempotent: false,
};

const REWRITE: Hints = Hints {
    read_only: false,
    destructive: false,
    idempotent: true,
};

const REMOVE: Hints = Hints {
    read_only: false,
    destructive: true,
    idempotent: false,
};

const REMOVE_ONCE: Hints = Hints {
    read_only: false,
    destructive: true,
    idempotent: true,
};

struct ToolInfo {
    title: &'static str,
    description: &'static str,
    schema: Value,
    hints: Hints,
}

fn info(tool: Tool) -> ToolInfo {
    let (title, description, schema, hints) = match tool {
        Tool::Create => (
            "Create Document",
            "Create a new Google Docs document with a title. Returns the document ID and metadata.",
            contracts::create_schema(),
            WRITE,
        ),
        Tool::Get => (
            "Get Document",
            "Get a Google Docs document including its full content structure, headers, footers, and named ranges.",
            contracts::get_schema(),
            READ,
        ),
        Tool::InsertText => (
            "Insert Text",
            "Insert text at a specific position in the document. Use index 1 to insert at the beginning of the body.",
            contracts::insert_text_schema(),
            WRITE,
        ),
        Tool::DeleteContent => (
            "Delete Content",
            "Delete content in a range. Get indices from gdoc_get response.",
            contracts::delete_content_schema(),
            REMOVE,
        ),
        Tool::ReplaceAllText => (
            "Replace All Text",
            "Find and replace all occurrences of text in the entire document.",
            contracts::replace_all_text_schema(),
            REWRITE,
        ),
        Tool::InsertInlineImage => (
            "Insert Image",
            "Insert an image from a URL at a specific position in the document.",
            contracts::insert_inline_image_schema(),
            WRITE,
        ),
        Tool::InsertPageBreak => (
            "Insert Page Break",
            "Insert a page break at a specific position in the document.",
            contracts::insert_page_break_schema(),
            WRITE,
        ),
        Tool::UpdateTextStyle => (
            "Update Text Style",
            "Update text style (bold, italic, font, color, etc.) for a range of text. Only specified fields are changed.",
            contracts::update_text_style_schema(),
            REWRITE,
        ),
        Tool::UpdateParagraphStyle => (
            "Update Paragraph Style",
            "Update paragraph style (alignment, spacing, indentation, heading) for a range.",
            contracts::update_paragraph_style_schema(),
            REWRITE,
        ),
        Tool::CreateBullets => (
            "Create Bullets",
            "Convert paragraphs in a range to a bulleted or numbered list.",
            contracts::create_bullets_schema(),
            REWRITE,
        ),
        Tool::DeleteBullets => (
            "Delete Bullets",
            "Remove bullets or numbering from paragraphs in a range.",
            contracts::delete_bullets_schema(),
            REWRITE,
        ),
        Tool::InsertTable => (
            "Insert Table",
            "Insert a new table at a specific position in the document.",
            contracts::insert_table_schema(),
            WRITE,
        ),
        Tool::InsertTableRow => (
            "Insert Table Row",
            "Insert a new row in an existing table.",
            contracts::insert_table_row_schema(),
            WRITE,
        ),
        Tool::InsertTableColumn => (
            "Insert Table Column",
            "Insert a new column in an existing table.",
            contracts::insert_table_column_schema(),
            WRITE,
        ),
        Tool::DeleteTableRow => (
            "Delete Table Row",
            "Delete a row from an existing table.",
            contracts::delete_table_row_schema(),
            REMOVE,
        ),
        Tool::DeleteTableColumn => (
            "Delete Table Column",
            "Delete a column from an existing table.",
            contracts::delete_table_column_schema(),
            REMOVE,
        ),
        Tool::MergeTableCells => (
            "Merge Table Cells",
            "Merge cells in a table. Specify the top-left cell and span.",
            contracts::merge_table_cells_schema(),
            REWRITE,
        ),
        Tool::UnmergeTableCells => (
            "Unmerge Table Cells",
            "Unmerge previously merged cells in a table.",
            contracts::unmerge_table_cells_schema(),
            REWRITE,
        ),
        Tool::CreateHeader => (
            "Create Header",
            "Create a header in the document. Returns the header ID for inserting content.",
            contracts::create_header_schema(),
            WRITE,
        ),
        Tool::CreateFooter => (
            "Create Footer",
            "Create a footer in the document. Returns the footer ID for inserting content.",
            contracts::create_footer_schema(),
            WRITE,
        ),
        Tool::DeleteHeader => (
            "Delete Header",
            "Delete a header from the document. Get the header ID from gdoc_get.",
            contracts::delete_header_schema(),
            REMOVE_ONCE,
        ),
        Tool::DeleteFooter => (
            "Delete Footer",
            "Delete a footer from the document. Get the footer ID from gdoc_get.",
            contracts::delete_footer_schema(),
            REMOVE_ONCE,
        ),
        Tool::InsertSectionBreak => (
            "Insert Section Break",
            "Insert a section break at a specific position.",
            contracts::insert_section_break_schema(),
            WRITE,
        ),
        Tool::CreateNamedRange => (
            "Create Named Range",
            "Create a named range in the document for referencing a section of content.",
            contracts::create_named_range_schema(),
            WRITE,
        ),
        Tool::DeleteNamedRange => (
            "Delete Named Range",
            "Delete a named range by ID or name. Does not delete the content, only the reference.",
            contracts::delete_named_range_schema(),
            REMOVE_ONCE,
        ),
        Tool::BatchUpdate => (
            "Batch Update",
            "Send a raw batchUpdate request with any combination of operations. Use this for complex multi-step updates or operations not covered by other tools.",
            contracts::batch_update_schema(),
            WRITE,
        ),
    };
    ToolInfo {
        title,
        description,
        schema,
        hints,
    }
}

pub fn tool_definition(tool: Tool) -> Value {
    let info = info(tool);
    json!({
        "name": tool.name(),
        "title": info.title,
        "description": info.description,
        "inputSchema": info.schema,
        "annotations": {
            "title": info.title,
            "readOnlyHint": info.hints.read_only,
            "destructiveHint": info.hints.destructive,
            "idempotentHint": info.hints.idempotent,
            "openWorldHint": true
        }
    })
}

pub fn tool_definitions() -> Vec<Value> {
    Tool::ALL.into_iter().map(tool_definition).collect()
}
