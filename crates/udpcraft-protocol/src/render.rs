//! Text renderings of a message: a byte-string literal for eyeballing and a
//! signed-byte dump that pastes straight into a `byte[]` initializer.

use std::fmt;

use crate::message::Fixture;

pub const JAVADUMP_BLOCK_SIZE: usize = 16;

/// Reinterprets a byte as two's complement, `((v + 128) mod 256) - 128`.
pub const fn to_signed(v: u8) -> i8 {
    v as i8
}

pub const fn from_signed(s: i8) -> u8 {
    s as u8
}

/// Renders `bytes` as a `b'...'` literal. Printable ASCII is kept verbatim,
/// everything else becomes `\t`, `\n`, `\r` or a lowercase `\xNN` escape.
/// Double quotes delimit the literal only when it contains `'` and no `"`.
pub fn byte_string_literal(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(char::from(quote));
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if b == quote => {
                out.push('\\');
                out.push(char::from(quote));
            }
            0x20..=0x7e => out.push(char::from(b)),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push(char::from(quote));
    out
}

/// Comma separated signed values, `per_line` to a line, each right-aligned
/// to width 4. Lines are joined by `,\n` and the last one has no trailing
/// comma. A `per_line` of zero is treated as one.
pub fn signed_byte_dump(bytes: &[u8], per_line: usize) -> String {
    bytes
        .chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(|&b| format!("{:4}", to_signed(b)))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

pub fn javadump(bytes: &[u8]) -> String {
    signed_byte_dump(bytes, JAVADUMP_BLOCK_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: Vec<u8>,
    pub payload_len: usize,
    pub message_literal: String,
    pub javadump: String,
}

pub fn render_report(fixture: &Fixture) -> Report {
    Report {
        message: fixture.message().to_vec(),
        payload_len: fixture.payload().len(),
        message_literal: byte_string_literal(fixture.message()),
        javadump: javadump(fixture.message()),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "message: {}", self.message_literal)?;
        writeln!(f, "payload length: {}", self.payload_len)?;
        writeln!(f, "javadump:")?;
        f.write_str(&self.javadump)
    }
}
