//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for session log files inside a temporary sessions directory
pub struct SessionDirBuilder {
    temp_dir: TempDir,
}

impl SessionDirBuilder {
    /// Create a new builder with an empty sessions directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the sessions directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a session file with raw content at `relative` (parent dirs created)
    pub fn with_raw_session(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create session dir");
        }
        fs::write(&path, content).expect("Failed to write session file");
        self
    }

    /// Write a session file built from entries
    pub fn with_session(self, relative: &str, entries: &[EntryBuilder]) -> Self {
        let content = session_content(entries);
        self.with_raw_session(relative, &content)
    }

    /// Absolute path of a file inside the directory
    pub fn file(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Join entries into JSONL text with a trailing newline
pub fn session_content(entries: &[EntryBuilder]) -> String {
    let mut content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
    content.push('\n');
    content
}

/// Builder for one session log line
pub struct EntryBuilder {
    value: Value,
}

impl EntryBuilder {
    /// Session header record
    pub fn header(id: &str, cwd: &str) -> Self {
        Self {
            value: json!({
                "type": "session",
                "version": 3,
                "id": id,
                "timestamp": "2025-01-01T10:00:00.000Z",
                "cwd": cwd,
            }),
        }
    }

    /// User message with a single text block
    pub fn user(text: &str) -> Self {
        Self::message(json!({"role": "user", "content": [{"type": "text", "text": text}]}))
    }

    /// User message with the given content blocks
    pub fn user_with_blocks(blocks: Value) -> Self {
        Self::message(json!({"role": "user", "content": blocks}))
    }

    /// Assistant message with a single text block and no usage
    pub fn assistant(text: &str) -> Self {
        Self::message(json!({
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "stopReason": "stop",
        }))
    }

    /// Tool result for a call to `tool_name`
    pub fn tool_result(tool_name: &str, output: &str) -> Self {
        Self::message(json!({
            "role": "toolResult",
            "toolCallId": format!("call_{}", tool_name),
            "toolName": tool_name,
            "content": [{"type": "text", "text": output}],
            "isError": false,
        }))
    }

    pub fn model_change(provider: &str, model_id: &str) -> Self {
        Self {
            value: json!({
                "type": "model_change",
                "id": "mc-1",
                "parentId": null,
                "timestamp": "2025-01-01T10:00:00.500Z",
                "provider": provider,
                "modelId": model_id,
            }),
        }
    }

    pub fn thinking_level(level: &str) -> Self {
        Self {
            value: json!({
                "type": "thinking_level_change",
                "id": "tl-1",
                "parentId": null,
                "timestamp": "2025-01-01T10:00:00.600Z",
                "thinkingLevel": level,
            }),
        }
    }

    /// Record with an arbitrary `type` tag
    pub fn custom(entry_type: &str) -> Self {
        Self { value: json!({"type": entry_type, "id": "x-1", "data": {"k": "v"}}) }
    }

    fn message(message: Value) -> Self {
        Self {
            value: json!({
                "type": "message",
                "id": "m-1",
                "parentId": null,
                "timestamp": "2025-01-01T10:00:01.000Z",
                "message": message,
            }),
        }
    }

    /// Set the entry timestamp (RFC3339)
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.value["timestamp"] = json!(timestamp);
        self
    }

    /// Set the assistant model name
    pub fn model(mut self, model: &str) -> Self {
        self.value["message"]["model"] = json!(model);
        self
    }

    /// Set the assistant usage with the given cost total
    pub fn cost(mut self, total: f64) -> Self {
        self.value["message"]["usage"] = json!({
            "input": 100,
            "output": 50,
            "cacheRead": 0,
            "cacheWrite": 0,
            "totalTokens": 150,
            "cost": {"input": 0.0, "output": 0.0, "cacheRead": 0.0, "cacheWrite": 0.0, "total": total},
        });
        self
    }

    /// Append a toolCall block to the message content
    pub fn tool_call(mut self, name: &str) -> Self {
        if let Some(content) = self.value["message"]["content"].as_array_mut() {
            let id = format!("call_{}_{}", name, content.len());
            content.push(json!({
                "type": "toolCall",
                "id": id,
                "name": name,
                "arguments": {"command": "ls"},
            }));
        }
        self
    }

    /// Append a content block given as raw JSON
    pub fn block(mut self, block: Value) -> Self {
        if let Some(content) = self.value["message"]["content"].as_array_mut() {
            content.push(block);
        }
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        self.value.to_string()
    }
}

/// Helper to create a realistic multi-turn session
pub fn realistic_session() -> Vec<EntryBuilder> {
    vec![
        EntryBuilder::header("sess-0001", "/home/dev/project"),
        EntryBuilder::model_change("anthropic", "claude-sonnet"),
        EntryBuilder::thinking_level("medium"),
        EntryBuilder::user("List the files").timestamp("2025-01-01T10:00:01Z"),
        EntryBuilder::assistant("Listing").model("claude-sonnet").cost(0.01).tool_call("bash"),
        EntryBuilder::tool_result("bash", "src\nCargo.toml"),
        EntryBuilder::assistant("Here they are").model("claude-sonnet").cost(0.02),
        EntryBuilder::user("Read Cargo.toml").timestamp("2025-01-01T10:05:00Z"),
        EntryBuilder::assistant("Reading").cost(0.005).tool_call("read"),
        EntryBuilder::tool_result("read", "[package]"),
        EntryBuilder::model_change("openai", "gpt-5"),
        EntryBuilder::assistant("Done").model("gpt-5").cost(0.015),
        EntryBuilder::user("Thanks").timestamp("2025-01-01T10:10:00Z"),
    ]
}
