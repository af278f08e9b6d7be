use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{
    CreateNamedRangeOptions, DeleteNamedRangeOptions, InsertSectionBreakOptions,
};
use crate::error::Result;
use serde_json::{Map, Value};

pub async fn insert_section_break(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertSectionBreakOptions = parse_args(args)?;
    structured(client.insert_section_break(&options).await?)
}

pub async fn create_named_range(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: CreateNamedRangeOptions = parse_args(args)?;
    structured(client.create_named_range(&options).await?)
}

pub async fn delete_named_range(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: DeleteNamedRangeOptions = parse_args(args)?;
    structured(client.delete_named_range(&options).await?)
}
