use crate::mcp::{self, errors, prompts, resources};
use crate::tools::{self, Dispatcher};
use anyhow::{Context, Result};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub const PROTOCOL_VERSION: &str = "2025-11-25";

const INVALID_PARAMS: i64 = -32602;
const METHOD_NOT_FOUND: i64 = -32601;

pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Answers one JSON-RPC message. Notifications (no `id`) get no reply.
    pub async fn handle(&self, request: &Value) -> Option<Value> {
        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned()?;
        let params = request.get("params");

        let outcome = match method {
            Some("initialize") => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "prompts": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": mcp::SERVER_NAME,
                    "version": mcp::SERVER_VERSION
                }
            })),
            Some("ping") => Ok(json!({})),
            Some("tools/list") => Ok(json!({ "tools": mcp::tool_definitions() })),
            Some("tools/call") => Ok(self.handle_tool_call(params).await),
            Some("prompts/list") => Ok(json!({ "prompts": prompts::prompt_definitions() })),
            Some("prompts/get") => {
                let name = param_str(params, "name").unwrap_or_default();
                prompts::get_prompt(name)
                    .ok_or_else(|| (INVALID_PARAMS, format!("Unknown prompt: {name}")))
            }
            Some("resources/list") => {
                Ok(json!({ "resources": resources::resource_definitions() }))
            }
            Some("resources/read") => {
                let uri = param_str(params, "uri").unwrap_or_default();
                resources::read_resource(uri, self.dispatcher.config())
                    .ok_or_else(|| (INVALID_PARAMS, format!("Unknown resource: {uri}")))
            }
            Some(other) => Err((METHOD_NOT_FOUND, format!("Method not found: {other}"))),
            None => Err((METHOD_NOT_FOUND, "missing method".to_string())),
        };

        Some(match outcome {
            Ok(result) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result
            }),
            Err((code, message)) => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": code, "message": message}
            }),
        })
    }

    async fn handle_tool_call(&self, params: Option<&Value>) -> Value {
        let Some(params) = params.and_then(|value| value.as_object()) else {
            return tools::error_result(errors::INVALID_INPUT, "params must be an object", None);
        };

        let name = params.get("name").and_then(|value| value.as_str());
        let Some(name) = name else {
            return tools::error_result(
                errors::INVALID_INPUT,
                "params.name must be a string",
                None,
            );
        };

        let args = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        self.dispatcher.dispatch(name, args).await
    }
}

fn param_str<'a>(params: Option<&'a Value>, key: &str) -> Option<&'a str> {
    params
        .and_then(|value| value.get(key))
        .and_then(|value| value.as_str())
}

pub async fn run_stdio(server: McpServer) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    serve(&server, reader, writer).await
}

/// Reads newline-delimited JSON-RPC requests and writes one response line per
/// request, in arrival order.
pub async fn serve<R, W>(server: &McpServer, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!(protocol = PROTOCOL_VERSION, "MCP server listening on stdio");
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("skipping malformed request line: {err}");
                continue;
            }
        };

        if let Some(response) = server.handle(&request).await {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writer
                .write_all(serialized.as_bytes())
                .await
                .context("failed to write response")?;
            writer
                .write_all(b"\n")
                .await
                .context("failed to write response")?;
            writer.flush().await.context("failed to flush response")?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::docs::transport::testing::RecordingTransport;
    use std::sync::Arc;

    fn server() -> McpServer {
        McpServer::new(Dispatcher::new(
            ServerConfig::default(),
            Arc::new(RecordingTransport::new()),
        ))
    }

    #[tokio::test]
    async fn notifications_get_no_reply() {
        let reply = server()
            .handle(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn unknown_method_is_a_jsonrpc_error() {
        let reply = server()
            .handle(&json!({"jsonrpc": "2.0", "id": 3, "method": "sampling/createMessage"}))
            .await
            .expect("reply");
        assert_eq!(reply["id"], json!(3));
        assert_eq!(reply["error"]["code"], json!(METHOD_NOT_FOUND));
    }

    #[tokio::test]
    async fn unknown_prompt_is_invalid_params() {
        let reply = server()
            .handle(&json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "prompts/get",
                "params": {"name": "nope"}
            }))
            .await
            .expect("reply");
        assert_eq!(reply["error"]["code"], json!(INVALID_PARAMS));
        assert_eq!(reply["error"]["message"], json!("Unknown prompt: nope"));
    }

    #[tokio::test]
    async fn tool_call_without_name_is_an_error_envelope() {
        let reply = server()
            .handle(&json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": {"arguments": {}}
            }))
            .await
            .expect("reply");
        assert_eq!(reply["result"]["isError"], json!(true));
        assert_eq!(
            reply["result"]["structuredContent"]["error"]["message"],
            json!("params.name must be a string")
        );
    }

    #[tokio::test]
    async fn serve_answers_each_request_line_in_order() {
        let input = concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n",
            "\n",
            "not json\n",
            "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/list\"}\n",
        );
        let mut output = Vec::new();
        serve(&server(), input.as_bytes(), &mut output)
            .await
            .expect("serve");

        let responses: Vec<Value> = String::from_utf8(output)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], json!(1));
        assert_eq!(responses[0]["result"], json!({}));
        assert_eq!(responses[1]["id"], json!(2));
        assert_eq!(
            responses[1]["result"]["tools"]
                .as_array()
                .expect("tools")
                .len(),
            26
        );
    }
}
