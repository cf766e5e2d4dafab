use serde::Serialize;

/// All query payloads are plain serializable views, so one pretty-printer
/// covers every command.
pub(crate) fn print<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}
