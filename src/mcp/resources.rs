use super::{SERVER_NAME, SERVER_VERSION};
use crate::config::ServerConfig;
use crate::tools::{Category, Tool};
use serde_json::{Map, Value, json};

pub const SERVER_INFO_URI: &str = "google-docs://server-info";
const JSON_MIME: &str = "application/json";

pub fn resource_definitions() -> Vec<Value> {
    vec![json!({
        "uri": SERVER_INFO_URI,
        "name": "server-info",
        "description": "Connection status and available tools for this Google Docs MCP server",
        "mimeType": JSON_MIME
    })]
}

pub fn server_info(config: &ServerConfig) -> Value {
    let categories: Map<String, Value> = Category::ALL
        .iter()
        .map(|category| (category.as_str().to_string(), json!(category.tool_count())))
        .collect();
    json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "connected": config.credentials.complete().is_some(),
        "has_oauth": config.credentials.has_client_id(),
        "tools_available": Tool::ALL.len(),
        "tool_categories": categories
    })
}

/// `resources/read` result for a known URI.
pub fn read_resource(uri: &str, config: &ServerConfig) -> Option<Value> {
    if uri != SERVER_INFO_URI {
        return None;
    }
    let info = server_info(config);
    let text = serde_json::to_string_pretty(&info).unwrap_or_else(|_| info.to_string());
    Some(json!({
        "contents": [{
            "uri": SERVER_INFO_URI,
            "mimeType": JSON_MIME,
            "text": text
        }]
    }))
}
