//! Length-prefixed JSON framing.
//!
//! Each message is a line holding the decimal byte count `N`, followed by
//! exactly `N` bytes of JSON. The line may end in `\n` or `\r\n`.
//!
//! stdout carries frames only. Logs go to stderr.

use std::io::{BufRead, Read, Write};

use serde::Serialize;
use serde_json::Value;

use crate::error::{AdapterError, Result};

/// Longest accepted length line, newline included.
pub const MAX_LENGTH_LINE: usize = 32;

/// Result of waiting for the next request.
#[derive(Debug)]
pub enum ReadOutcome {
    Message(Value),
    /// The pipe closed before any byte of a new length line arrived.
    EndOfStream,
}

/// Reads one framed message.
///
/// Declared lengths above `max_len` are refused before the body is read.
pub fn read_message<R: BufRead>(reader: &mut R, max_len: usize) -> Result<ReadOutcome> {
    let mut line = String::new();
    let read = reader
        .by_ref()
        .take(MAX_LENGTH_LINE as u64)
        .read_line(&mut line)?;
    if read == 0 {
        return Ok(ReadOutcome::EndOfStream);
    }
    if read == MAX_LENGTH_LINE && !line.ends_with('\n') {
        return Err(AdapterError::MalformedLength(line));
    }

    let len = parse_length(&line)?;
    if len > max_len {
        return Err(AdapterError::MessageTooLarge { len, max: max_len });
    }

    let mut body = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut body)?;
    if body.len() < len {
        return Err(AdapterError::TruncatedBody {
            expected: len,
            received: body.len(),
        });
    }

    Ok(ReadOutcome::Message(serde_json::from_slice(&body)?))
}

fn parse_length(line: &str) -> Result<usize> {
    let trimmed = line.trim_matches(|c: char| c.is_ascii_whitespace());
    trimmed
        .parse::<usize>()
        .map_err(|_| AdapterError::MalformedLength(trimmed.to_string()))
}

/// Writes `value` as one frame and flushes.
///
/// The length line counts bytes of the compact UTF-8 encoding.
pub fn write_message<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    let body = serde_json::to_vec(value)?;
    writeln!(writer, "{}", body.len())?;
    writer.write_all(&body)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    const MAX: usize = 1024;

    fn read(input: &[u8]) -> Result<ReadOutcome> {
        read_message(&mut Cursor::new(input), MAX)
    }

    #[test]
    fn reads_one_message() {
        let out = read(b"17\n{\"method\":\"exit\"}").unwrap();
        match out {
            ReadOutcome::Message(v) => assert_eq!(v, json!({ "method": "exit" })),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn accepts_crlf_length_line() {
        let out = read(b"2\r\n{}").unwrap();
        assert!(matches!(out, ReadOutcome::Message(v) if v == json!({})));
    }

    #[test]
    fn reads_consecutive_messages() {
        let mut cur = Cursor::new(&b"2\n{}7\n{\"a\":1}"[..]);
        assert!(matches!(read_message(&mut cur, MAX).unwrap(), ReadOutcome::Message(_)));
        match read_message(&mut cur, MAX).unwrap() {
            ReadOutcome::Message(v) => assert_eq!(v, json!({ "a": 1 })),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(read_message(&mut cur, MAX).unwrap(), ReadOutcome::EndOfStream));
    }

    #[test]
    fn empty_input_is_end_of_stream() {
        assert!(matches!(read(b"").unwrap(), ReadOutcome::EndOfStream));
    }

    #[test]
    fn malformed_length() {
        assert!(matches!(read(b"abc\n{}"), Err(AdapterError::MalformedLength(s)) if s == "abc"));
        assert!(matches!(read(b"-3\n{}"), Err(AdapterError::MalformedLength(_))));
        assert!(matches!(read(b"\n{}"), Err(AdapterError::MalformedLength(_))));
    }

    #[test]
    fn overlong_length_line_is_malformed() {
        let input = "9".repeat(10_000);
        assert!(matches!(
            read(input.as_bytes()),
            Err(AdapterError::MalformedLength(s)) if s.len() == MAX_LENGTH_LINE
        ));
    }

    #[test]
    fn padded_length_line_within_bound() {
        let out = read(b"      2\r\n{}").unwrap();
        assert!(matches!(out, ReadOutcome::Message(v) if v == json!({})));
    }

    #[test]
    fn truncated_body() {
        let err = read(b"10\n{}").unwrap_err();
        assert!(matches!(
            err,
            AdapterError::TruncatedBody { expected: 10, received: 2 }
        ));
    }

    #[test]
    fn oversized_length_is_refused() {
        let err = read(b"4096\n{}").unwrap_err();
        assert!(matches!(err, AdapterError::MessageTooLarge { len: 4096, max: MAX }));
    }

    #[test]
    fn invalid_json_body() {
        assert!(matches!(read(b"3\nnot"), Err(AdapterError::Json(_))));
    }

    #[test]
    fn write_prefixes_byte_length() {
        let mut out = Vec::new();
        write_message(&mut out, &json!({ "result": "5.5" })).unwrap();
        assert_eq!(out, b"16\n{\"result\":\"5.5\"}");
    }

    #[test]
    fn write_counts_bytes_not_chars() {
        let mut out = Vec::new();
        let value = json!({ "name": "é" });
        write_message(&mut out, &value).unwrap();

        let text = String::from_utf8(out).unwrap();
        let (len, body) = text.split_once('\n').unwrap();
        assert_eq!(len.parse::<usize>().unwrap(), body.len());
        assert_ne!(body.len(), body.chars().count());
    }

    #[test]
    fn written_frame_reads_back() {
        let mut out = Vec::new();
        write_message(&mut out, &json!({ "signal": "TARGET" })).unwrap();
        match read(&out).unwrap() {
            ReadOutcome::Message(v) => assert_eq!(v, json!({ "signal": "TARGET" })),
            other => panic!("unexpected {other:?}"),
        }
    }
}
