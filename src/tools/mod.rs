use crate::config::{MISSING_CREDENTIALS_MESSAGE, ServerConfig, strip_credential_keys};
use crate::docs::options::Validate;
use crate::docs::transport::Transport;
use crate::docs::{ClientFactory, DocsClient};
use crate::error::{DocsError, Result};
use crate::mcp::contracts;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

pub mod advanced;
pub mod content;
pub mod document;
pub mod formatting;
pub mod headers_footers;
pub mod lists;
pub mod sections;
pub mod tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Document,
    Content,
    TextFormatting,
    Lists,
    Tables,
    HeadersFooters,
    SectionsNamedRanges,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Document,
        Category::Content,
        Category::TextFormatting,
        Category::Lists,
        Category::Tables,
        Category::HeadersFooters,
        Category::SectionsNamedRanges,
        Category::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Document => "document",
            Category::Content => "content",
            Category::TextFormatting => "text_formatting",
            Category::Lists => "lists",
            Category::Tables => "tables",
            Category::HeadersFooters => "headers_footers",
            Category::SectionsNamedRanges => "sections_named_ranges",
            Category::Advanced => "advanced",
        }
    }

    pub fn tool_count(self) -> usize {
        Tool::ALL
            .iter()
            .filter(|tool| tool.category() == self)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Create,
    Get,
    InsertText,
    DeleteContent,
    ReplaceAllText,
    InsertInlineImage,
    InsertPageBreak,
    UpdateTextStyle,
    UpdateParagraphStyle,
    CreateBullets,
    DeleteBullets,
    InsertTable,
    InsertTableRow,
    InsertTableColumn,
    DeleteTableRow,
    DeleteTableColumn,
    MergeTableCells,
    UnmergeTableCells,
    CreateHeader,
    CreateFooter,
    DeleteHeader,
    DeleteFooter,
    InsertSectionBreak,
    CreateNamedRange,
    DeleteNamedRange,
    BatchUpdate,
}

static TOOLS_BY_NAME: LazyLock<HashMap<&'static str, Tool>> =
    LazyLock::new(|| Tool::ALL.iter().map(|tool| (tool.name(), *tool)).collect());

impl Tool {
    pub const ALL: [Tool; 26] = [
        Tool::Create,
        Tool::Get,
        Tool::InsertText,
        Tool::DeleteContent,
        Tool::ReplaceAllText,
        Tool::InsertInlineImage,
        Tool::InsertPageBreak,
        Tool::UpdateTextStyle,
        Tool::UpdateParagraphStyle,
        Tool::CreateBullets,
        Tool::DeleteBullets,
        Tool::InsertTable,
        Tool::InsertTableRow,
        Tool::InsertTableColumn,
        Tool::DeleteTableRow,
        Tool::DeleteTableColumn,
        Tool::MergeTableCells,
        Tool::UnmergeTableCells,
        Tool::CreateHeader,
        Tool::CreateFooter,
        Tool::DeleteHeader,
        Tool::DeleteFooter,
        Tool::InsertSectionBreak,
        Tool::CreateNamedRange,
        Tool::DeleteNamedRange,
        Tool::BatchUpdate,
    ];

    pub fn from_name(name: &str) -> Option<Tool> {
        TOOLS_BY_NAME.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Create => contracts::TOOL_CREATE,
            Tool::Get => contracts::TOOL_GET,
            Tool::InsertText => contracts::TOOL_INSERT_TEXT,
            Tool::DeleteContent => contracts::TOOL_DELETE_CONTENT,
            Tool::ReplaceAllText => contracts::TOOL_REPLACE_ALL_TEXT,
            Tool::InsertInlineImage => contracts::TOOL_INSERT_INLINE_IMAGE,
            Tool::InsertPageBreak => contracts::TOOL_INSERT_PAGE_BREAK,
            Tool::UpdateTextStyle => contracts::TOOL_UPDATE_TEXT_STYLE,
            Tool::UpdateParagraphStyle => contracts::TOOL_UPDATE_PARAGRAPH_STYLE,
            Tool::CreateBullets => contracts::TOOL_CREATE_BULLETS,
            Tool::DeleteBullets => contracts::TOOL_DELETE_BULLETS,
            Tool::InsertTable => contracts::TOOL_INSERT_TABLE,
            Tool::InsertTableRow => contracts::TOOL_INSERT_TABLE_ROW,
            Tool::InsertTableColumn => contracts::TOOL_INSERT_TABLE_COLUMN,
            Tool::DeleteTableRow => contracts::TOOL_DELETE_TABLE_ROW,
            Tool::DeleteTableColumn => contracts::TOOL_DELETE_TABLE_COLUMN,
            Tool::MergeTableCells => contracts::TOOL_MERGE_TABLE_CELLS,
            Tool::UnmergeTableCells => contracts::TOOL_UNMERGE_TABLE_CELLS,
            Tool::CreateHeader => contracts::TOOL_CREATE_HEADER,
            Tool::CreateFooter => contracts::TOOL_CREATE_FOOTER,
            Tool::DeleteHeader => contracts::TOOL_DELETE_HEADER,
            Tool::DeleteFooter => contracts::TOOL_DELETE_FOOTER,
            Tool::InsertSectionBreak => contracts::TOOL_INSERT_SECTION_BREAK,
            Tool::CreateNamedRange => contracts::TOOL_CREATE_NAMED_RANGE,
            Tool::DeleteNamedRange => contracts::TOOL_DELETE_NAMED_RANGE,
            Tool::BatchUpdate => contracts::TOOL_BATCH_UPDATE,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Tool::Create | Tool::Get => Category::Document,
            Tool::InsertText
            | Tool::DeleteContent
            | Tool::ReplaceAllText
            | Tool::InsertInlineImage
            | Tool::InsertPageBreak => Category::Content,
            Tool::UpdateTextStyle | Tool::UpdateParagraphStyle => Category::TextFormatting,
            Tool::CreateBullets | Tool::DeleteBullets => Category::Lists,
            Tool::InsertTable
            | Tool::InsertTableRow
            | Tool::InsertTableColumn
            | Tool::DeleteTableRow
            | Tool::DeleteTableColumn
            | Tool::MergeTableCells
            | Tool::UnmergeTableCells => Category::Tables,
            Tool::CreateHeader | Tool::CreateFooter | Tool::DeleteHeader | Tool::DeleteFooter => {
                Category::HeadersFooters
            }
            Tool::InsertSectionBreak | Tool::CreateNamedRange | Tool::DeleteNamedRange => {
                Category::SectionsNamedRanges
            }
            Tool::BatchUpdate => Category::Advanced,
        }
    }

    async fn run(self, client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
        match self {
            Tool::Create => document::create(client, args).await,
            Tool::Get => document::get(client, args).await,
            Tool::InsertText => content::insert_text(client, args).await,
            Tool::DeleteContent => content::delete_content(client, args).await,
            Tool::ReplaceAllText => content::replace_all_text(client, args).await,
            Tool::InsertInlineImage => content::insert_inline_image(client, args).await,
            Tool::InsertPageBreak => content::insert_page_break(client, args).await,
            Tool::UpdateTextStyle => formatting::update_text_style(client, args).await,
            Tool::UpdateParagraphStyle => formatting::update_paragraph_style(client, args).await,
            Tool::CreateBullets => lists::create_bullets(client, args).await,
            Tool::DeleteBullets => lists::delete_bullets(client, args).await,
            Tool::InsertTable => tables::insert_table(client, args).await,
            Tool::InsertTableRow => tables::insert_table_row(client, args).await,
            Tool::InsertTableColumn => tables::insert_table_column(client, args).await,
            Tool::DeleteTableRow => tables::delete_table_row(client, args).await,
            Tool::DeleteTableColumn => tables::delete_table_column(client, args).await,
            Tool::MergeTableCells => tables::merge_table_cells(client, args).await,
            Tool::UnmergeTableCells => tables::unmerge_table_cells(client, args).await,
            Tool::CreateHeader => headers_footers::create_header(client, args).await,
            Tool::CreateFooter => headers_footers::create_footer(client, args).await,
            Tool::DeleteHeader => headers_footers::delete_header(client, args).await,
            Tool::DeleteFooter => headers_footers::delete_footer(client, args).await,
            Tool::InsertSectionBreak => sections::insert_section_break(client, args).await,
            Tool::CreateNamedRange => sections::create_named_range(client, args).await,
            Tool::DeleteNamedRange => sections::delete_named_range(client, args).await,
            Tool::BatchUpdate => advanced::batch_update(client, args).await,
        }
    }
}

/// Deserializes a tool's flat arguments into its option record and runs the
/// record's local checks.
pub fn parse_args<T>(args: Map<String, Value>) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let options: T = serde_json::from_value(Value::Object(args))
        .map_err(|err| DocsError::invalid_input(format!("invalid arguments: {err}")))?;
    options.validate()?;
    Ok(options)
}

pub fn structured(value: impl Serialize) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub fn success_result(result: Value) -> Value {
    let text = serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string());
    json!({
        "content": [{"type": "text", "text": text}],
        "structuredContent": result,
        "isError": false
    })
}

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": format!("Error: {message}")}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

/// Routes `tools/call` requests to the document client and wraps every
/// outcome in a result envelope.
pub struct Dispatcher {
    config: ServerConfig,
    factory: ClientFactory,
}

impl Dispatcher {
    pub fn new(config: ServerConfig, transport: Arc<dyn Transport>) -> Self {
        let factory = ClientFactory::new(config.endpoints.clone(), transport);
        Self { config, factory }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub async fn dispatch(&self, name: &str, args: Value) -> Value {
        match self.try_dispatch(name, args).await {
            Ok(result) => success_result(result),
            Err(err) => {
                tracing::warn!(tool = name, kind = err.kind(), "tool call failed: {err}");
                error_result(err.kind(), err.to_string(), Some(name))
            }
        }
    }

    async fn try_dispatch(&self, name: &str, args: Value) -> Result<Value> {
        let tool = Tool::from_name(name).ok_or_else(|| DocsError::UnknownTool(name.to_string()))?;
        let mut args = match args {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => return Err(DocsError::invalid_input("arguments must be an object")),
        };

        let credentials = self
            .config
            .resolve_credentials(&args)
            .ok_or_else(|| DocsError::Config(MISSING_CREDENTIALS_MESSAGE.to_string()))?;
        strip_credential_keys(&mut args);

        tracing::debug!(tool = name, "dispatching tool call");
        let client = self.factory.client_for(&credentials);
        tool.run(&client, args).await
    }
}
