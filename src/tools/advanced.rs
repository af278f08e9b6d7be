use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::BatchUpdateOptions;
use crate::error::Result;
use serde_json::{Map, Value};

/// Forwards caller-built requests untouched, in order, as one batch.
pub async fn batch_update(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: BatchUpdateOptions = parse_args(args)?;
    structured(client.batch_update(&options).await?)
}
