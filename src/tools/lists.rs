use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{CreateBulletsOptions, RangeOptions};
use crate::error::Result;
use serde_json::{Map, Value};

pub async fn create_bullets(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: CreateBulletsOptions = parse_args(args)?;
    structured(client.create_bullets(&options).await?)
}

pub async fn delete_bullets(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: RangeOptions = parse_args(args)?;
    structured(client.delete_bullets(&options).await?)
}
