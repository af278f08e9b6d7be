use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{
    InsertInlineImageOptions, InsertPageBreakOptions, InsertTextOptions, RangeOptions,
    ReplaceAllTextOptions,
};
use crate::error::Result;
use serde_json::{Map, Value};

pub async fn insert_text(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertTextOptions = parse_args(args)?;
    structured(client.insert_text(&options).await?)
}

pub async fn delete_content(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: RangeOptions = parse_args(args)?;
    structured(client.delete_content(&options).await?)
}

pub async fn replace_all_text(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: ReplaceAllTextOptions = parse_args(args)?;
    structured(client.replace_all_text(&options).await?)
}

pub async fn insert_inline_image(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertInlineImageOptions = parse_args(args)?;
    structured(client.insert_inline_image(&options).await?)
}

pub async fn insert_page_break(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertPageBreakOptions = parse_args(args)?;
    structured(client.insert_page_break(&options).await?)
}
