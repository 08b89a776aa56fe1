// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! XML property list reader.
//!
//! Parses the subset produced by [`super::writer`], which is also what the
//! host writes for articulation sets. Used to verify emitted files.

use thiserror::Error;

use super::{Dictionary, Value};

/// Property list parse error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlistError {
    /// Input ended inside a document
    #[error("Unexpected end of document")]
    UnexpectedEof,

    /// Malformed markup
    #[error("Syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset into the input
        offset: usize,
        /// Description
        message: String,
    },

    /// An element that is not part of the supported subset, or out of place
    #[error("Unexpected <{tag}> at byte {offset}")]
    UnexpectedTag {
        /// Element name
        tag: String,
        /// Byte offset into the input
        offset: usize,
    },

    /// `<integer>` content that is not a 64-bit integer
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),
}

/// Parse a complete document and return its root value
pub fn from_xml_str(input: &str) -> Result<Value, PlistError> {
    let mut parser = Parser { input, pos: 0 };

    parser.skip_misc()?;
    let plist = parser.next_tag()?;
    if plist.name != "plist" || plist.kind != TagKind::Open {
        return Err(parser.unexpected(&plist));
    }

    parser.skip_misc()?;
    let root = parser.parse_value()?;

    parser.skip_misc()?;
    let close = parser.next_tag()?;
    if close.name != "plist" || close.kind != TagKind::Close {
        return Err(parser.unexpected(&close));
    }

    parser.skip_misc()?;
    if parser.pos < input.len() {
        return Err(parser.syntax("trailing content after </plist>"));
    }

    Ok(root)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Open,
    Close,
    Empty,
}

#[derive(Debug)]
struct Tag<'a> {
    name: &'a str,
    kind: TagKind,
    offset: usize,
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn syntax(&self, message: impl Into<String>) -> PlistError {
        PlistError::Syntax {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn unexpected(&self, tag: &Tag<'_>) -> PlistError {
        let tag_name = match tag.kind {
            TagKind::Close => format!("/{}", tag.name),
            _ => tag.name.to_string(),
        };
        PlistError::UnexpectedTag {
            tag: tag_name,
            offset: tag.offset,
        }
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    /// Skip whitespace, XML declarations, DOCTYPE and comments
    fn skip_misc(&mut self) -> Result<(), PlistError> {
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            let terminator = if rest.starts_with("<?") {
                "?>"
            } else if rest.starts_with("<!--") {
                "-->"
            } else if rest.starts_with("<!") {
                ">"
            } else {
                return Ok(());
            };
            let end = rest.find(terminator).ok_or(PlistError::UnexpectedEof)?;
            self.pos += end + terminator.len();
        }
    }

    fn next_tag(&mut self) -> Result<Tag<'a>, PlistError> {
        self.skip_whitespace();
        let offset = self.pos;
        let rest = self.rest();
        if rest.is_empty() {
            return Err(PlistError::UnexpectedEof);
        }
        if !rest.starts_with('<') {
            return Err(self.syntax("expected an element"));
        }
        let end = rest.find('>').ok_or(PlistError::UnexpectedEof)?;
        let body = &rest[1..end];
        self.pos += end + 1;

        let (kind, body) = if let Some(name) = body.strip_prefix('/') {
            (TagKind::Close, name)
        } else if let Some(name) = body.strip_suffix('/') {
            (TagKind::Empty, name)
        } else {
            (TagKind::Open, body)
        };

        let name = body.split_whitespace().next().unwrap_or("");
        if name.is_empty() {
            return Err(PlistError::Syntax {
                offset,
                message: "empty element name".to_string(),
            });
        }

        Ok(Tag { name, kind, offset })
    }

    /// Read character data up to `</name>` and consume the closing tag
    fn text_until_close(&mut self, name: &str) -> Result<String, PlistError> {
        let close = format!("</{}>", name);
        let rest = self.rest();
        let end = rest.find(&close).ok_or(PlistError::UnexpectedEof)?;
        let raw = &rest[..end];
        if raw.contains('<') {
            return Err(self.syntax(format!("markup inside <{}>", name)));
        }
        let text = unescape(raw).map_err(|message| self.syntax(message))?;
        self.pos += end + close.len();
        Ok(text)
    }

    fn parse_value(&mut self) -> Result<Value, PlistError> {
        let tag = self.next_tag()?;
        self.parse_value_from(tag)
    }

    fn parse_value_from(&mut self, tag: Tag<'a>) -> Result<Value, PlistError> {
        match (tag.name, tag.kind) {
            ("integer", TagKind::Open) => {
                let text = self.text_until_close("integer")?;
                text.trim()
                    .parse()
                    .map(Value::Integer)
                    .map_err(|_| PlistError::InvalidInteger(text))
            }
            ("string", TagKind::Open) => Ok(Value::String(self.text_until_close("string")?)),
            ("string", TagKind::Empty) => Ok(Value::String(String::new())),
            ("true", TagKind::Empty) => Ok(Value::Boolean(true)),
            ("false", TagKind::Empty) => Ok(Value::Boolean(false)),
            ("array", TagKind::Empty) => Ok(Value::Array(Vec::new())),
            ("array", TagKind::Open) => {
                let mut items = Vec::new();
                loop {
                    let next = self.next_tag()?;
                    if next.kind == TagKind::Close {
                        if next.name != "array" {
                            return Err(self.unexpected(&next));
                        }
                        return Ok(Value::Array(items));
                    }
                    items.push(self.parse_value_from(next)?);
                }
            }
            ("dict", TagKind::Empty) => Ok(Value::Dictionary(Dictionary::new())),
            ("dict", TagKind::Open) => {
                let mut dict = Dictionary::new();
                loop {
                    let next = self.next_tag()?;
                    match (next.name, next.kind) {
                        ("dict", TagKind::Close) => return Ok(Value::Dictionary(dict)),
                        ("key", TagKind::Open) => {
                            let key = self.text_until_close("key")?;
                            let value = self.parse_value()?;
                            dict.insert(key, value);
                        }
                        _ => return Err(self.unexpected(&next)),
                    }
                }
            }
            _ => Err(self.unexpected(&tag)),
        }
    }
}

/// Resolve entity and character references
fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let semi = after
            .find(';')
            .ok_or_else(|| "unterminated entity reference".to_string())?;
        let entity = &after[..semi];

        let c = match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse().ok()
                } else {
                    None
                };
                code.and_then(char::from_u32)
                    .ok_or_else(|| format!("unknown entity &{};", entity))?
            }
        };

        out.push(c);
        rest = &after[semi + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
