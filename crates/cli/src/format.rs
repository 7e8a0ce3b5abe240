//! Output formatting for results and errors.

use simple_chaincode::Error;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `OK`, or the value quoted
    Human,
    /// Value bytes only, lossily decoded as UTF-8
    Raw,
    /// One JSON object per result
    Json,
}

/// Format a successful call's payload.
pub fn format_output(payload: Option<&[u8]>, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => match payload {
            None => "OK".to_string(),
            Some(bytes) => format!("{:?}", String::from_utf8_lossy(bytes)),
        },
        OutputMode::Raw => payload
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default(),
        OutputMode::Json => {
            let value = payload.map(|bytes| String::from_utf8_lossy(bytes).into_owned());
            serde_json::json!({ "ok": true, "value": value }).to_string()
        }
    }
}

/// Format a failed call.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", err.message()),
        OutputMode::Raw => err.message(),
        OutputMode::Json => err.to_wire().to_json(),
    }
}
