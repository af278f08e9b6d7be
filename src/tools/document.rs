use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{CreateDocumentOptions, GetDocumentOptions};
use crate::error::Result;
use serde_json::{Map, Value};

pub async fn create(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: CreateDocumentOptions = parse_args(args)?;
    structured(client.create_document(&options).await?)
}

/// Returns the document verbatim, including headers, footers and named ranges.
pub async fn get(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: GetDocumentOptions = parse_args(args)?;
    client.get_document(&options).await
}
