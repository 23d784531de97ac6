//! JSON-lines tool session.
//!
//! Each input line is a tool call, `{"id": "...", "name": "...", "arguments": {...}}`
//! (`id` and `arguments` may be omitted). Each call produces exactly one
//! output line: the serialized `ToolResult`, or `{"id": ..., "error": ...}`
//! when the call could not be made. `exit` or `quit` ends the session, as
//! does end of input.

use healthjournal_core::tool::{ToolCall, ToolRegistry};
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Drive `registry` from `input` until EOF or an exit word, writing one
/// JSON line per call to `output`. Returns the number of calls handled.
pub async fn run_session<R, W>(
    registry: &ToolRegistry,
    input: R,
    mut output: W,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let reply = handle_line(registry, line).await;
        output.write_all(reply.to_string().as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
        handled += 1;
    }

    debug!(calls = handled, "Session ended");
    Ok(handled)
}

async fn handle_line(registry: &ToolRegistry, line: &str) -> serde_json::Value {
    let call: ToolCall = match serde_json::from_str(line) {
        Ok(call) => call,
        Err(e) => {
            warn!(error = %e, "Unparseable tool call");
            return json!({ "id": null, "error": format!("Invalid tool call: {e}") });
        }
    };

    match registry.execute(&call).await {
        Ok(result) => serde_json::to_value(&result)
            .unwrap_or_else(|e| json!({ "id": call.id, "error": e.to_string() })),
        Err(e) => {
            warn!(tool = %call.name, error = %e, "Tool call failed");
            json!({ "id": call.id, "error": e.to_string() })
        }
    }
}
