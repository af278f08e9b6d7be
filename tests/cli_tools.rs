use std::process::Command;

#[test]
fn cli_tools_lists_every_tool() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_gdocs-mcp"))
        .args(["tools", "--json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let tools = value.as_array().expect("tool array");
    assert_eq!(tools.len(), 26);
    assert!(tools.iter().any(|tool| tool["name"] == "gdoc_batch_update"));
    Ok(())
}

#[test]
fn cli_call_without_credentials_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let output = Command::new(env!("CARGO_BIN_EXE_gdocs-mcp"))
        .args(["call", "gdoc_get", "--arguments", r#"{"document_id":"D1"}"#])
        .current_dir(dir.path())
        .env_remove("GOOGLE_CLIENT_ID")
        .env_remove("GOOGLE_CLIENT_SECRET")
        .env_remove("GOOGLE_REFRESH_TOKEN")
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET, and GOOGLE_REFRESH_TOKEN are all required."
    ));
    Ok(())
}
