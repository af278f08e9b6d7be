use crate::config::{Credentials, Endpoints};
use crate::docs::auth::{Clock, SystemClock, TokenProvider};
use crate::docs::options::{
    BatchUpdateOptions, CreateBulletsOptions, CreateDocumentOptions, CreateHeaderFooterOptions,
    CreateNamedRangeOptions, DeleteFooterOptions, DeleteHeaderOptions, DeleteNamedRangeOptions,
    GetDocumentOptions, InsertInlineImageOptions, InsertPageBreakOptions,
    InsertSectionBreakOptions, InsertTableColumnOptions, InsertTableOptions,
    InsertTableRowOptions, InsertTextOptions, RangeOptions, ReplaceAllTextOptions,
    TableCellOptions, TableRangeOptions, UpdateParagraphStyleOptions, UpdateTextStyleOptions,
};
use crate::docs::requests::{
    BatchUpdateRequest, BatchUpdateResponse, Dimension, Location, Range, Request,
    SectionBreakLocation, Size, SubstringMatchCriteria, TableCellLocation, TableRange,
};
use crate::docs::style;
use crate::docs::transport::Transport;
use crate::error::{DocsError, Result};
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;

/// Façade over the Google Docs v1 REST API.
///
/// Every mutating method wraps exactly one request in a `batchUpdate` call.
/// Indices are passed through as given; shifts caused by earlier edits are
/// the caller's concern.
pub struct DocsClient {
    api_base_url: String,
    tokens: TokenProvider,
    transport: Arc<dyn Transport>,
}

impl DocsClient {
    pub fn new(credentials: Credentials, endpoints: &Endpoints, transport: Arc<dyn Transport>) -> Self {
        Self::with_clock(credentials, endpoints, transport, Arc::new(SystemClock))
    }

    pub fn with_clock(
        credentials: Credentials,
        endpoints: &Endpoints,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api_base_url: endpoints.api_base_url.trim_end_matches('/').to_string(),
            tokens: TokenProvider::new(
                credentials,
                endpoints.token_url.clone(),
                transport.clone(),
                clock,
            ),
            transport,
        }
    }

    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let token = self.tokens.valid_token().await?;
        let url = format!("{}{}", self.api_base_url, path);
        tracing::debug!(%method, %url, "calling Google Docs API");

        let response = self
            .transport
            .send_json(method, &url, &token, body)
            .await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, %url, "Google Docs API returned an error");
            return Err(DocsError::Api {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn batch_update_values(
        &self,
        document_id: &str,
        requests: Vec<Value>,
    ) -> Result<BatchUpdateResponse> {
        let body = serde_json::to_value(BatchUpdateRequest { requests })?;
        let path = format!("/documents/{document_id}:batchUpdate");
        let value = self.request(Method::POST, &path, Some(&body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn submit(&self, document_id: &str, request: Request) -> Result<BatchUpdateResponse> {
        let request = serde_json::to_value(request)?;
        self.batch_update_values(document_id, vec![request]).await
    }

    // ========== Document ==========

    pub async fn create_document(&self, options: &CreateDocumentOptions) -> Result<Value> {
        let body = json!({ "title": options.title });
        self.request(Method::POST, "/documents", Some(&body)).await
    }

    pub async fn get_document(&self, options: &GetDocumentOptions) -> Result<Value> {
        let path = match options.suggestions_view_mode {
            Some(mode) => format!(
                "/documents/{}?suggestionsViewMode={}",
                options.document_id,
                mode.as_str()
            ),
            None => format!("/documents/{}", options.document_id),
        };
        self.request(Method::GET, &path, None).await
    }

    // ========== Content ==========

    pub async fn insert_text(&self, options: &InsertTextOptions) -> Result<BatchUpdateResponse> {
        let request = Request::InsertText {
            text: options.text.clone(),
            location: Location::new(options.index, options.segment_id.as_deref()),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn delete_content(&self, options: &RangeOptions) -> Result<BatchUpdateResponse> {
        let request = Request::DeleteContentRange {
            range: range_of(options),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn replace_all_text(
        &self,
        options: &ReplaceAllTextOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::ReplaceAllText {
            contains_text: SubstringMatchCriteria {
                text: options.search_text.clone(),
                match_case: options.match_case.unwrap_or(false),
            },
            replace_text: options.replace_text.clone(),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn insert_inline_image(
        &self,
        options: &InsertInlineImageOptions,
    ) -> Result<BatchUpdateResponse> {
        // A zero magnitude is treated as unset.
        let width = options
            .width_magnitude
            .filter(|magnitude| *magnitude > 0.0)
            .map(|magnitude| Dimension::new(magnitude, options.width_unit));
        let height = options
            .height_magnitude
            .filter(|magnitude| *magnitude > 0.0)
            .map(|magnitude| Dimension::new(magnitude, options.height_unit));
        let object_size = (width.is_some() || height.is_some()).then_some(Size { width, height });

        let request = Request::InsertInlineImage {
            uri: options.uri.clone(),
            location: Location::new(options.index, options.segment_id.as_deref()),
            object_size,
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn insert_page_break(
        &self,
        options: &InsertPageBreakOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::InsertPageBreak {
            location: Location::new(options.index, options.segment_id.as_deref()),
        };
        self.submit(&options.document_id, request).await
    }

    // ========== Text Formatting ==========

    pub async fn update_text_style(
        &self,
        options: &UpdateTextStyleOptions,
    ) -> Result<BatchUpdateResponse> {
        let masked = style::text_style(options);
        if masked.is_empty() {
            return Err(DocsError::invalid_input(
                "at least one text style field is required",
            ));
        }
        let (text_style, fields) = masked.into_parts();
        let request = Request::UpdateTextStyle {
            text_style,
            range: Range::new(
                options.start_index,
                options.end_index,
                options.segment_id.as_deref(),
            ),
            fields,
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn update_paragraph_style(
        &self,
        options: &UpdateParagraphStyleOptions,
    ) -> Result<BatchUpdateResponse> {
        let masked = style::paragraph_style(options);
        if masked.is_empty() {
            return Err(DocsError::invalid_input(
                "at least one paragraph style field is required",
            ));
        }
        let (paragraph_style, fields) = masked.into_parts();
        let request = Request::UpdateParagraphStyle {
            paragraph_style,
            range: Range::new(
                options.start_index,
                options.end_index,
                options.segment_id.as_deref(),
            ),
            fields,
        };
        self.submit(&options.document_id, request).await
    }

    // ========== Lists ==========

    pub async fn create_bullets(
        &self,
        options: &CreateBulletsOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::CreateParagraphBullets {
            range: Range::new(
                options.start_index,
                options.end_index,
                options.segment_id.as_deref(),
            ),
            bullet_preset: options.bullet_preset,
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn delete_bullets(&self, options: &RangeOptions) -> Result<BatchUpdateResponse> {
        let request = Request::DeleteParagraphBullets {
            range: range_of(options),
        };
        self.submit(&options.document_id, request).await
    }

    // ========== Tables ==========

    pub async fn insert_table(&self, options: &InsertTableOptions) -> Result<BatchUpdateResponse> {
        let request = Request::InsertTable {
            rows: options.rows,
            columns: options.columns,
            location: Location::new(options.index, options.segment_id.as_deref()),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn insert_table_row(
        &self,
        options: &InsertTableRowOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::InsertTableRow {
            table_cell_location: TableCellLocation::new(
                options.table_start_index,
                options.row_index,
                options.column_index,
            ),
            insert_below: options.insert_below,
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn insert_table_column(
        &self,
        options: &InsertTableColumnOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::InsertTableColumn {
            table_cell_location: TableCellLocation::new(
                options.table_start_index,
                options.row_index,
                options.column_index,
            ),
            insert_right: options.insert_right,
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn delete_table_row(&self, options: &TableCellOptions) -> Result<BatchUpdateResponse> {
        let request = Request::DeleteTableRow {
            table_cell_location: cell_of(options),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn delete_table_column(
        &self,
        options: &TableCellOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::DeleteTableColumn {
            table_cell_location: cell_of(options),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn merge_table_cells(
        &self,
        options: &TableRangeOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::MergeTableCells {
            table_range: table_range_of(options),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn unmerge_table_cells(
        &self,
        options: &TableRangeOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::UnmergeTableCells {
            table_range: table_range_of(options),
        };
        self.submit(&options.document_id, request).await
    }

    // ========== Headers & Footers ==========

    pub async fn create_header(
        &self,
        options: &CreateHeaderFooterOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::CreateHeader {
            kind: options.kind,
            section_break_location: options
                .section_break_index
                .map(|index| SectionBreakLocation { index }),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn create_footer(
        &self,
        options: &CreateHeaderFooterOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::CreateFooter {
            kind: options.kind,
            section_break_location: options
                .section_break_index
                .map(|index| SectionBreakLocation { index }),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn delete_header(&self, options: &DeleteHeaderOptions) -> Result<BatchUpdateResponse> {
        let request = Request::DeleteHeader {
            header_id: options.header_id.clone(),
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn delete_footer(&self, options: &DeleteFooterOptions) -> Result<BatchUpdateResponse> {
        let request = Request::DeleteFooter {
            footer_id: options.footer_id.clone(),
        };
        self.submit(&options.document_id, request).await
    }

    // ========== Sections & Named Ranges ==========

    pub async fn insert_section_break(
        &self,
        options: &InsertSectionBreakOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::InsertSectionBreak {
            location: Location::new(options.index, options.segment_id.as_deref()),
            section_type: options.section_type,
        };
        self.submit(&options.document_id, request).await
    }

    pub async fn create_named_range(
        &self,
        options: &CreateNamedRangeOptions,
    ) -> Result<BatchUpdateResponse> {
        let request = Request::CreateNamedRange {
            name: options.name.clone(),
            range: Range::new(
                options.start_index,
                options.end_index,
                options.segment_id.as_deref(),
            ),
        };
        self.submit(&options.document_id, request).await
    }

    /// Targets the range by id when one is given, otherwise by name.
    pub async fn delete_named_range(
        &self,
        options: &DeleteNamedRangeOptions,
    ) -> Result<BatchUpdateResponse> {
        let named_range_id = options
            .named_range_id
            .clone()
            .filter(|id| !id.is_empty());
        let name = match named_range_id {
            Some(_) => None,
            None => options.name.clone().filter(|name| !name.is_empty()),
        };
        let request = Request::DeleteNamedRange {
            named_range_id,
            name,
        };
        self.submit(&options.document_id, request).await
    }

    // ========== Advanced ==========

    /// Submits caller-built requests verbatim, in order, as one batch.
    pub async fn batch_update(&self, options: &BatchUpdateOptions) -> Result<BatchUpdateResponse> {
        self.batch_update_values(&options.document_id, options.requests.clone())
            .await
    }
}

fn range_of(options: &RangeOptions) -> Range {
    Range::new(
        options.start_index,
        options.end_index,
        options.segment_id.as_deref(),
    )
}

fn cell_of(options: &TableCellOptions) -> TableCellLocation {
    TableCellLocation::new(
        options.table_start_index,
        options.row_index,
        options.column_index,
    )
}

fn table_range_of(options: &TableRangeOptions) -> TableRange {
    TableRange {
        table_cell_location: TableCellLocation::new(
            options.table_start_index,
            options.row_index,
            options.column_index,
        ),
        row_span: options.row_span,
        column_span: options.column_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::auth::testing::ManualClock;
    use crate::docs::transport::testing::RecordingTransport;
    use crate::docs::values::{
        BulletPreset, DimensionUnit, HeaderFooterType, SectionType, SuggestionsViewMode,
    };

    fn endpoints() -> Endpoints {
        Endpoints {
            api_base_url: "https://docs.test/v1/".to_string(),
            token_url: "https://token.test/token".to_string(),
        }
    }

    fn client() -> (DocsClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let credentials = Credentials::from_parts(
            Some("client".into()),
            Some("secret".into()),
            Some("refresh".into()),
        )
        .expect("credentials");
        let client = DocsClient::with_clock(
            credentials,
            &endpoints(),
            transport.clone(),
            Arc::new(ManualClock::at(1_000)),
        );
        (client, transport)
    }

    fn only_request(transport: &RecordingTransport) -> Value {
        let calls = transport.api_calls();
        assert_eq!(calls.len(), 1, "exactly one API call");
        let body = calls[0].body.clone().expect("body");
        let requests = body["requests"].as_array().cloned().expect("requests");
        assert_eq!(requests.len(), 1);
        requests[0].clone()
    }

    #[tokio::test]
    async fn insert_text_end_to_end() {
        let (client, transport) = client();
        let response = client
            .insert_text(&InsertTextOptions {
                document_id: "D1".into(),
                text: "Hi".into(),
                index: 1,
                segment_id: None,
            })
            .await
            .expect("response");
        assert_eq!(response.document_id, "D1");

        let calls = transport.api_calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].url, "https://docs.test/v1/documents/D1:batchUpdate");
        assert_eq!(calls[0].bearer.as_deref(), Some("token-1"));
        assert_eq!(
            calls[0].body,
            Some(json!({"requests": [{"insertText": {"text": "Hi", "location": {"index": 1}}}]}))
        );
    }

    #[tokio::test]
    async fn update_text_style_end_to_end() {
        let (client, transport) = client();
        client
            .update_text_style(&UpdateTextStyleOptions {
                document_id: "D1".into(),
                start_index: 5,
                end_index: 10,
                bold: Some(true),
                font_size: Some(14.0),
                ..Default::default()
            })
            .await
            .expect("response");
        assert_eq!(
            only_request(&transport),
            json!({
                "updateTextStyle": {
                    "textStyle": {"bold": true, "fontSize": {"magnitude": 14.0, "unit": "PT"}},
                    "range": {"startIndex": 5, "endIndex": 10},
                    "fields": "bold,fontSize"
                }
            })
        );
    }

    #[tokio::test]
    async fn empty_style_update_never_reaches_network() {
        let (client, transport) = client();
        let err = client
            .update_paragraph_style(&UpdateParagraphStyleOptions {
                document_id: "D1".into(),
                start_index: 1,
                end_index: 2,
                ..Default::default()
            })
            .await
            .expect_err("empty style");
        assert!(matches!(err, DocsError::InvalidInput(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn replace_all_defaults_match_case_false() {
        let (client, transport) = client();
        client
            .replace_all_text(&ReplaceAllTextOptions {
                document_id: "D1".into(),
                search_text: "foo".into(),
                replace_text: "bar".into(),
                match_case: None,
            })
            .await
            .expect("response");
        assert_eq!(
            only_request(&transport),
            json!({
                "replaceAllText": {
                    "containsText": {"text": "foo", "matchCase": false},
                    "replaceText": "bar"
                }
            })
        );
    }

    #[tokio::test]
    async fn segment_id_is_attached_when_present() {
        let (client, transport) = client();
        client
            .delete_content(&RangeOptions {
                document_id: "D1".into(),
                start_index: 2,
                end_index: 8,
                segment_id: Some("kix.header1".into()),
            })
            .await
            .expect("response");
        assert_eq!(
            only_request(&transport),
            json!({
                "deleteContentRange": {
                    "range": {"startIndex": 2, "endIndex": 8, "segmentId": "kix.header1"}
                }
            })
        );
    }

    #[tokio::test]
    async fn inline_image_size_defaults_to_points() {
        let (client, transport) = client();
        client
            .insert_inline_image(&InsertInlineImageOptions {
                document_id: "D1".into(),
                uri: "https://example.com/a.png".into(),
                index: 4,
                segment_id: None,
                width_magnitude: Some(120.0),
                height_magnitude: None,
                width_unit: None,
                height_unit: None,
            })
            .await
            .expect("response");
        assert_eq!(
            only_request(&transport),
            json!({
                "insertInlineImage": {
                    "uri": "https://example.com/a.png",
                    "location": {"index": 4},
                    "objectSize": {"width": {"magnitude": 120.0, "unit": "PT"}}
                }
            })
        );
    }

    #[tokio::test]
    async fn inline_image_without_size_omits_object_size() {
        let (client, transport) = client();
        client
            .insert_inline_image(&InsertInlineImageOptions {
                document_id: "D1".into(),
                uri: "https://example.com/a.png".into(),
                index: 4,
                segment_id: None,
                width_magnitude: None,
                height_magnitude: None,
                width_unit: None,
                height_unit: None,
            })
            .await
            .expect("response");
        let request = only_request(&transport);
        assert!(request["insertInlineImage"].get("objectSize").is_none());
    }

    #[tokio::test]
    async fn inline_image_zero_magnitude_is_left_out() {
        let (client, transport) = client();
        client
            .insert_inline_image(&InsertInlineImageOptions {
                document_id: "D1".into(),
                uri: "https://example.com/a.png".into(),
                index: 4,
                segment_id: None,
                width_magnitude: Some(0.0),
                height_magnitude: Some(80.0),
                width_unit: Some(DimensionUnit::Emu),
                height_unit: None,
            })
            .await
            .expect("response");
        assert_eq!(
            only_request(&transport)["insertInlineImage"]["objectSize"],
            json!({"height": {"magnitude": 80.0, "unit": "PT"}})
        );

        client
            .insert_inline_image(&InsertInlineImageOptions {
                document_id: "D1".into(),
                uri: "https://example.com/a.png".into(),
                index: 4,
                segment_id: None,
                width_magnitude: Some(0.0),
                height_magnitude: Some(0.0),
                width_unit: None,
                height_unit: None,
            })
            .await
            .expect("response");
        let calls = transport.api_calls();
        let last = &calls[calls.len() - 1].body.as_ref().expect("body")["requests"][0];
        assert!(last["insertInlineImage"].get("objectSize").is_none());
    }

    #[tokio::test]
    async fn bullets_and_tables() {
        let (client, transport) = client();
        client
            .create_bullets(&CreateBulletsOptions {
                document_id: "D1".into(),
                start_index: 1,
                end_index: 30,
                segment_id: None,
                bullet_preset: BulletPreset::NumberedDecimalNested,
            })
            .await
            .expect("bullets");
        client
            .merge_table_cells(&TableRangeOptions {
                document_id: "D1".into(),
                table_start_index: 40,
                row_index: 1,
                column_index: 0,
                row_span: 2,
                column_span: 3,
            })
            .await
            .expect("merge");

        let bodies: Vec<Value> = transport
            .api_calls()
            .into_iter()
            .map(|call| call.body.expect("body")["requests"][0].clone())
            .collect();
        assert_eq!(
            bodies[0],
            json!({
                "createParagraphBullets": {
                    "range": {"startIndex": 1, "endIndex": 30},
                    "bulletPreset": "NUMBERED_DECIMAL_NESTED"
                }
            })
        );
        assert_eq!(
            bodies[1],
            json!({
                "mergeTableCells": {
                    "tableRange": {
                        "tableCellLocation": {
                            "tableStartLocation": {"index": 40},
                            "rowIndex": 1,
                            "columnIndex": 0
                        },
                        "rowSpan": 2,
                        "columnSpan": 3
                    }
                }
            })
        );
        assert_eq!(transport.token_exchanges(), 1);
    }

    #[tokio::test]
    async fn header_with_section_break() {
        let (client, transport) = client();
        client
            .create_footer(&CreateHeaderFooterOptions {
                document_id: "D1".into(),
                kind: HeaderFooterType::Default,
                section_break_index: Some(0),
            })
            .await
            .expect("footer");
        assert_eq!(
            only_request(&transport),
            json!({
                "createFooter": {"type": "DEFAULT", "sectionBreakLocation": {"index": 0}}
            })
        );
    }

    #[tokio::test]
    async fn section_break_and_named_range_deletion() {
        let (client, transport) = client();
        client
            .insert_section_break(&InsertSectionBreakOptions {
                document_id: "D1".into(),
                index: 10,
                section_type: SectionType::Continuous,
                segment_id: None,
            })
            .await
            .expect("section");
        client
            .delete_named_range(&DeleteNamedRangeOptions {
                document_id: "D1".into(),
                named_range_id: Some("kix.nr1".into()),
                name: Some("ignored".into()),
            })
            .await
            .expect("named range");

        let bodies: Vec<Value> = transport
            .api_calls()
            .into_iter()
            .map(|call| call.body.expect("body")["requests"][0].clone())
            .collect();
        assert_eq!(
            bodies[0],
            json!({"insertSectionBreak": {"location": {"index": 10}, "sectionType": "CONTINUOUS"}})
        );
        assert_eq!(bodies[1], json!({"deleteNamedRange": {"namedRangeId": "kix.nr1"}}));
    }

    #[tokio::test]
    async fn structural_edits_share_one_token() {
        let (client, transport) = client();
        let cell = TableCellOptions {
            document_id: "D1".into(),
            table_start_index: 12,
            row_index: 2,
            column_index: 1,
        };
        client
            .insert_page_break(&InsertPageBreakOptions {
                document_id: "D1".into(),
                index: 8,
                segment_id: None,
            })
            .await
            .expect("page break");
        client
            .insert_table_row(&InsertTableRowOptions {
                document_id: "D1".into(),
                table_start_index: 12,
                row_index: 2,
                column_index: 1,
                insert_below: false,
            })
            .await
            .expect("row");
        client
            .insert_table_column(&InsertTableColumnOptions {
                document_id: "D1".into(),
                table_start_index: 12,
                row_index: 2,
                column_index: 1,
                insert_right: true,
            })
            .await
            .expect("column");
        client.delete_table_row(&cell).await.expect("delete row");
        client
            .delete_table_column(&cell)
            .await
            .expect("delete column");
        client
            .unmerge_table_cells(&TableRangeOptions {
                document_id: "D1".into(),
                table_start_index: 12,
                row_index: 0,
                column_index: 0,
                row_span: 2,
                column_span: 2,
            })
            .await
            .expect("unmerge");
        client
            .delete_header(&DeleteHeaderOptions {
                document_id: "D1".into(),
                header_id: "kix.h1".into(),
            })
            .await
            .expect("header");
        client
            .delete_footer(&DeleteFooterOptions {
                document_id: "D1".into(),
                footer_id: "kix.f1".into(),
            })
            .await
            .expect("footer");
        client
            .create_named_range(&CreateNamedRangeOptions {
                document_id: "D1".into(),
                name: "intro".into(),
                start_index: 1,
                end_index: 9,
                segment_id: Some(String::new()),
            })
            .await
            .expect("named range");
        client
            .delete_bullets(&RangeOptions {
                document_id: "D1".into(),
                start_index: 1,
                end_index: 9,
                segment_id: None,
            })
            .await
            .expect("bullets");

        let cell_location = json!({
            "tableStartLocation": {"index": 12},
            "rowIndex": 2,
            "columnIndex": 1
        });
        let bodies: Vec<Value> = transport
            .api_calls()
            .into_iter()
            .map(|call| call.body.expect("body")["requests"][0].clone())
            .collect();
        assert_eq!(
            bodies,
            vec![
                json!({"insertPageBreak": {"location": {"index": 8}}}),
                json!({"insertTableRow": {"tableCellLocation": cell_location, "insertBelow": false}}),
                json!({"insertTableColumn": {"tableCellLocation": cell_location, "insertRight": true}}),
                json!({"deleteTableRow": {"tableCellLocation": cell_location}}),
                json!({"deleteTableColumn": {"tableCellLocation": cell_location}}),
                json!({
                    "unmergeTableCells": {
                        "tableRange": {
                            "tableCellLocation": {
                                "tableStartLocation": {"index": 12},
                                "rowIndex": 0,
                                "columnIndex": 0
                            },
                            "rowSpan": 2,
                            "columnSpan": 2
                        }
                    }
                }),
                json!({"deleteHeader": {"headerId": "kix.h1"}}),
                json!({"deleteFooter": {"footerId": "kix.f1"}}),
                json!({"createNamedRange": {"name": "intro", "range": {"startIndex": 1, "endIndex": 9}}}),
                json!({"deleteParagraphBullets": {"range": {"startIndex": 1, "endIndex": 9}}}),
            ]
        );
        assert_eq!(transport.token_exchanges(), 1);
    }

    #[tokio::test]
    async fn raw_batch_is_forwarded_verbatim() {
        let (client, transport) = client();
        let requests = vec![
            json!({"insertText": {"text": "b", "location": {"index": 1}}}),
            json!({"insertText": {"text": "a", "location": {"index": 1}}}),
        ];
        client
            .batch_update(&BatchUpdateOptions {
                document_id: "D1".into(),
                requests: requests.clone(),
            })
            .await
            .expect("batch");
        let calls = transport.api_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].body, Some(json!({"requests": requests})));
    }

    #[tokio::test]
    async fn get_document_with_view_mode() {
        let (client, transport) = client();
        transport.push_api_response(200, json!({"documentId": "D1", "title": "Notes"}).to_string());
        let document = client
            .get_document(&GetDocumentOptions {
                document_id: "D1".into(),
                suggestions_view_mode: Some(SuggestionsViewMode::SuggestionsInline),
            })
            .await
            .expect("document");
        assert_eq!(document, json!({"documentId": "D1", "title": "Notes"}));

        let calls = transport.api_calls();
        assert_eq!(calls[0].method, Method::GET);
        assert_eq!(
            calls[0].url,
            "https://docs.test/v1/documents/D1?suggestionsViewMode=SUGGESTIONS_INLINE"
        );
        assert!(calls[0].body.is_none());
    }

    #[tokio::test]
    async fn create_document_posts_title() {
        let (client, transport) = client();
        transport.push_api_response(200, json!({"documentId": "NEW", "title": "Plan"}).to_string());
        let created = client
            .create_document(&CreateDocumentOptions {
                title: "Plan".into(),
            })
            .await
            .expect("created");
        assert_eq!(created["documentId"], "NEW");
        let calls = transport.api_calls();
        assert_eq!(calls[0].url, "https://docs.test/v1/documents");
        assert_eq!(calls[0].body, Some(json!({"title": "Plan"})));
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let (client, transport) = client();
        transport.push_api_response(400, "{\"error\":{\"message\":\"Invalid requests[0]\"}}");
        let err = client
            .insert_page_break(&InsertPageBreakOptions {
                document_id: "D1".into(),
                index: 99999,
                segment_id: None,
            })
            .await
            .expect_err("api error");
        match err {
            DocsError::Api { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Invalid requests[0]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn token_failure_skips_api_call() {
        let (client, transport) = client();
        transport.push_token_response(401, json!({"error": "unauthorized_client"}));
        let err = client
            .delete_bullets(&RangeOptions {
                document_id: "D1".into(),
                start_index: 1,
                end_index: 2,
                segment_id: None,
            })
            .await
            .expect_err("auth error");
        assert!(matches!(err, DocsError::Auth(_)));
        assert!(transport.api_calls().is_empty());
    }
}
