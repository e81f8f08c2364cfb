//! JSON command protocol for driving the viewer from outside.
//!
//! A command is a serialized [`Action`]; the response carries the effects the
//! host has to perform and the snapshot after the action.

use serde::{Deserialize, Serialize};

use crate::shell::{Action, ViewerShell};

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single action on the shell.
pub fn execute_action(shell: &mut ViewerShell, action: Action) -> CommandResponse {
    let effects = shell.dispatch(action);
    match serde_json::to_value(shell.snapshot()) {
        Ok(snapshot) => CommandResponse::ok_with_data(serde_json::json!({
            "effects": effects,
            "snapshot": snapshot,
        })),
        Err(e) => CommandResponse::err(format!("Failed to serialize snapshot: {e}")),
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(shell: &mut ViewerShell, json: &str) -> Result<CommandResponse, String> {
    let action: Action =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_action(shell, action))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    shell: &mut ViewerShell,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let actions: Vec<Action> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(actions
        .into_iter()
        .map(|action| execute_action(shell, action))
        .collect())
}
