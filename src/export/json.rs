//! Project snapshot dump.

use std::io::{BufWriter, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::ReportError;

/// Write the raw project document as pretty-printed JSON (4-space indent,
/// key order preserved). This is a lossless re-serialization kept for
/// archival and debugging.
pub fn write_project_snapshot<W: Write>(out: W, document: &Value) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(out);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    document.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_uses_four_space_indent() {
        let document = json!({"info": {"name": "Demo"}});
        let mut out = Vec::new();
        write_project_snapshot(&mut out, &document).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n    \"info\": {\n        \"name\": \"Demo\""));
    }

    #[test]
    fn snapshot_preserves_document_key_order() {
        let document: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "middle": 3}"#).unwrap();
        let mut out = Vec::new();
        write_project_snapshot(&mut out, &document).unwrap();
        let text = String::from_utf8(out).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let middle = text.find("middle").unwrap();
        assert!(zeta < alpha && alpha < middle);
    }
}
