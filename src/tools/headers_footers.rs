use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{CreateHeaderFooterOptions, DeleteFooterOptions, DeleteHeaderOptions};
use crate::error::Result;
use serde_json::{Map, Value};

/// The reply carries the new header ID, which later content edits use as
/// their `segment_id`.
pub async fn create_header(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: CreateHeaderFooterOptions = parse_args(args)?;
    structured(client.create_header(&options).await?)
}

pub async fn create_footer(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: CreateHeaderFooterOptions = parse_args(args)?;
    structured(client.create_footer(&options).await?)
}

pub async fn delete_header(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: DeleteHeaderOptions = parse_args(args)?;
    structured(client.delete_header(&options).await?)
}

pub async fn delete_footer(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: DeleteFooterOptions = parse_args(args)?;
    structured(client.delete_footer(&options).await?)
}
