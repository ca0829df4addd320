//
//  testrail-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output helpers.

use std::io::{self, Write};

use serde::Serialize;

/// Writes `value` to stdout as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes `value` to `writer` as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_appends_newline() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"id": 1})).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "{\n  \"id\": 1\n}\n");
    }

    #[test]
    fn test_write_json_to_omits_unset_fields() {
        let case = crate::api::types::Case {
            id: Some(7),
            title: Some("Login".into()),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &case).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value, json!({"id": 7, "title": "Login"}));
    }
}
