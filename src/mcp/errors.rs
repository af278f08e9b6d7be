pub const INVALID_INPUT: &str = "invalid_input";
pub const UNKNOWN_TOOL: &str = "unknown_tool";
pub const CONFIG_ERROR: &str = "config_error";
pub const AUTH_ERROR: &str = "auth_error";
pub const API_ERROR: &str = "api_error";
pub const TRANSPORT_ERROR: &str = "transport_error";
pub const INTERNAL_ERROR: &str = "internal_error";
