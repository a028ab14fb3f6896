//! Rendering of command outcomes.

use std::io::{self, Write};

use console::Style;
use serde_json::Value;

use crate::commands::CommandResult;

/// Exit status for a successful command.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for any failure.
pub const EXIT_FAILURE: u8 = 1;

/// Write the outcome of a command and return the process exit status.
///
/// Exactly one of the two forms is written: the JSON value, or a single
/// `Error: <message>` line.
pub fn render<W: Write>(out: &mut W, result: &CommandResult, compact: bool) -> io::Result<u8> {
    match result {
        Ok(value) => {
            write_json(out, value, compact)?;
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            let red = Style::new().red().bold();
            writeln!(out, "{} {}", red.apply_to("Error:"), err.message())?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn write_json<W: Write>(out: &mut W, value: &Value, compact: bool) -> io::Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CliError;
    use serde_json::json;

    fn rendered(result: &CommandResult, compact: bool) -> (u8, String) {
        let mut out = Vec::new();
        let code = render(&mut out, result, compact).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_success_is_pretty_printed() {
        let (code, out) = rendered(&Ok(json!({"_key": "doc1", "value": 100})), false);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, "{\n  \"_key\": \"doc1\",\n  \"value\": 100\n}\n");
    }

    #[test]
    fn test_success_compact() {
        let (code, out) = rendered(&Ok(json!({"result": [1, 2]})), true);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, "{\"result\":[1,2]}\n");
    }

    #[test]
    fn test_error_is_one_line() {
        let err = CliError::from(ddb_client::Error::Api {
            status: 404,
            message: "Document not found".into(),
        });
        let (code, out) = rendered(&Err(err), false);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("Error:"));
        assert!(out.contains("Document not found"));
        assert_eq!(out.lines().count(), 1);
    }
}
