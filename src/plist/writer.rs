// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! XML property list writer.
//!
//! Produces the same layout as Apple's tools: tab indentation, one element
//! per line, self-closing empty containers and booleans.

use std::io::{self, Write};

use super::Value;

/// Document prologue
pub const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">\n",
);

/// Document epilogue
pub const FOOTER: &str = "</plist>\n";

/// Write a complete document with `value` as the root
pub fn write_xml<W: Write>(value: &Value, writer: &mut W) -> io::Result<()> {
    writer.write_all(HEADER.as_bytes())?;
    write_value(writer, value, 0)?;
    writer.write_all(FOOTER.as_bytes())
}

/// Serialize a complete document to a string
pub fn to_xml_string(value: &Value) -> String {
    let mut buffer = Vec::new();
    write_xml(value, &mut buffer).expect("Write to vec should not fail");
    // Only UTF-8 text and ASCII markup are written
    String::from_utf8(buffer).expect("Document is valid UTF-8")
}

fn indent<W: Write>(writer: &mut W, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        writer.write_all(b"\t")?;
    }
    Ok(())
}

fn write_value<W: Write>(writer: &mut W, value: &Value, depth: usize) -> io::Result<()> {
    indent(writer, depth)?;
    match value {
        Value::Integer(v) => writeln!(writer, "<integer>{}</integer>", v),
        Value::Boolean(true) => writeln!(writer, "<true/>"),
        Value::Boolean(false) => writeln!(writer, "<false/>"),
        Value::String(s) => writeln!(writer, "<string>{}</string>", escape(s)),
        Value::Array(items) if items.is_empty() => writeln!(writer, "<array/>"),
        Value::Array(items) => {
            writeln!(writer, "<array>")?;
            for item in items {
                write_value(writer, item, depth + 1)?;
            }
            indent(writer, depth)?;
            writeln!(writer, "</array>")
        }
        Value::Dictionary(dict) if dict.is_empty() => writeln!(writer, "<dict/>"),
        Value::Dictionary(dict) => {
            writeln!(writer, "<dict>")?;
            for (key, item) in dict.iter() {
                indent(writer, depth + 1)?;
                writeln!(writer, "<key>{}</key>", escape(key))?;
                write_value(writer, item, depth + 1)?;
            }
            indent(writer, depth)?;
            writeln!(writer, "</dict>")
        }
    }
}

/// Check that text only holds characters XML 1.0 allows.
///
/// Markup characters are fine (they are escaped); C0 controls other than
/// tab, newline and carriage return, and U+FFFE/U+FFFF are not.
pub fn is_xml_text(text: &str) -> bool {
    text.chars().all(|c| match c {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1F}' => false,
        '\u{FFFE}' | '\u{FFFF}' => false,
        _ => true,
    })
}

/// Escape character data
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
