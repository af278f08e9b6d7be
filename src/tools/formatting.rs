use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{UpdateParagraphStyleOptions, UpdateTextStyleOptions};
use crate::error::Result;
use serde_json::{Map, Value};

pub async fn update_text_style(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: UpdateTextStyleOptions = parse_args(args)?;
    structured(client.update_text_style(&options).await?)
}

pub async fn update_paragraph_style(
    client: &DocsClient,
    args: Map<String, Value>,
) -> Result<Value> {
    let options: UpdateParagraphStyleOptions = parse_args(args)?;
    structured(client.update_paragraph_style(&options).await?)
}
