//! The `explain` command: display documentation for error codes.

use std::fmt::Write as _;

use stak_diagnostic::ErrorCode;

/// Documentation for `code`, or the list of every code when `None`.
pub fn explain_text(code: Option<&str>) -> Result<String, String> {
    let Some(code_str) = code else {
        let mut out = String::from("Error codes:\n");
        for code in ErrorCode::ALL {
            let _ = writeln!(out, "  {code}  {}", code.description());
        }
        out.push_str("\nRun `stak explain <CODE>` for details.\n");
        return Ok(out);
    };

    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(format!(
            "Unknown error code: {code_str}\n\n\
             Codes have the format EXXXX where X is a digit.\n\
             Examples: E0001, E1001, E2001"
        ));
    };

    code.explain()
        .map(str::to_string)
        .ok_or_else(|| format!("No documentation available for {code}"))
}

/// Print documentation for a code. Returns whether the code was known.
pub fn explain_error(code: Option<&str>) -> bool {
    match explain_text(code) {
        Ok(text) => {
            println!("{text}");
            true
        }
        Err(message) => {
            eprintln!("{message}");
            false
        }
    }
}
