//! JSON-lines script runner used by the `team-registry` binary
//!
//! Each non-blank line that does not start with `#` is an
//! [`OperationRequest`]. One JSON result object is written per executed line.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use crate::operations::{dispatch, OperationRequest};
use crate::registry::Registry;

/// Outcome counts for a script run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// True when fail-fast stopped the run early
    pub aborted: bool,
}

/// Runs every request in `input`, writing one result line per request
///
/// Only I/O failures abort with an error; failing operations are reported
/// in the output and counted in the summary.
pub fn run_script<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: R,
    mut output: W,
    fail_fast: bool,
) -> io::Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = match serde_json::from_str::<OperationRequest>(trimmed) {
            Ok(request) => {
                let outcome = dispatch(registry, &request).map_err(|e| e.to_string());
                (Value::String(request.op), outcome)
            }
            Err(e) => (Value::Null, Err(format!("Malformed request: {}", e))),
        };

        let record = match result {
            (op, Ok(value)) => {
                summary.succeeded += 1;
                json!({ "line": line_no, "op": op, "ok": value })
            }
            (op, Err(message)) => {
                summary.failed += 1;
                tracing::warn!(line = line_no, "operation failed: {}", message);
                json!({ "line": line_no, "op": op, "error": message })
            }
        };

        writeln!(output, "{}", record)?;

        if fail_fast && summary.failed > 0 {
            summary.aborted = true;
            break;
        }
    }

    output.flush()?;
    Ok(summary)
}
