//! JSON output for `--json`.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

/// Writes `value` as JSON to stdout or to `file`. When `pretty` is true, multi-line; else one line.
pub fn write_json_output<T: Serialize>(
    value: &T,
    file: Option<&Path>,
    pretty: bool,
) -> Result<(), crate::CliError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match file {
        Some(path) => std::fs::write(path, format!("{}\n", s))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", s)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_compact_or_pretty_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let value = serde_json::json!({ "markets": [] , "ok": true });

        write_json_output(&value, Some(&path), false).unwrap();
        let compact = std::fs::read_to_string(&path).unwrap();
        assert_eq!(compact.lines().count(), 1);

        write_json_output(&value, Some(&path), true).unwrap();
        let pretty = std::fs::read_to_string(&path).unwrap();
        assert!(pretty.lines().count() > 1);
        let parsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, value);
    }
}
