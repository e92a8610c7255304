//! # Line Codec
//!
//! Each persisted record is one line of `|`-separated fields in declaration order:
//!
//! ```text
//! books.txt    title|author|isbn|year|pages|borrowed     Dune|Herbert|111|1965|412|False
//! members.txt  first_name|last_name|number              Ada|Lovelace|5
//! ```
//!
//! There is no header and no escaping. Text containing the delimiter or a line
//! break can't be stored, so [`Record::encode`] refuses it rather than writing a
//! line that would decode differently.
//!
//! Decoding is strict: a wrong field count or an unparsable number/boolean fails
//! the whole batch with [`LibrisError::MalformedRecord`]. Blank lines are skipped.

use crate::error::{LibrisError, Result};
use crate::lending::LoanState;
use crate::model::{Book, Member, PublicationInfo};

pub const DELIMITER: char = '|';

pub trait Record: Sized {
    /// Human name of the record kind, used in error messages.
    const KIND: &'static str;
    const FIELD_COUNT: usize;

    fn encode(&self) -> Result<String>;

    /// Parse a single line. Errors carry line number 0; [`decode_all`] fills in
    /// the real position.
    fn decode(line: &str) -> Result<Self>;
}

/// Reject text that would break the line format.
pub fn check_text(field: &'static str, value: &str) -> Result<()> {
    if value.contains(DELIMITER) {
        return Err(LibrisError::InvalidField {
            field,
            reason: format!("must not contain '{}'", DELIMITER),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(LibrisError::InvalidField {
            field,
            reason: "must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

fn malformed(kind: &'static str, reason: impl Into<String>) -> LibrisError {
    LibrisError::MalformedRecord {
        kind,
        line_number: 0,
        reason: reason.into(),
    }
}

fn split_fields<R: Record>(line: &str) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != R::FIELD_COUNT {
        return Err(malformed(
            R::KIND,
            format!(
                "expected {} fields, found {}",
                R::FIELD_COUNT,
                fields.len()
            ),
        ));
    }
    Ok(fields)
}

fn parse_int(kind: &'static str, name: &str, raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| malformed(kind, format!("{} '{}' is not an integer", name, raw)))
}

fn parse_bool(kind: &'static str, name: &str, raw: &str) -> Result<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(malformed(
            kind,
            format!("{} '{}' is not True or False", name, raw),
        ))
    }
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl Record for Book {
    const KIND: &'static str = "book";
    const FIELD_COUNT: usize = 6;

    fn encode(&self) -> Result<String> {
        check_text("title", &self.info.title)?;
        check_text("author", &self.info.author)?;
        check_text("isbn", &self.info.isbn)?;
        Ok(format!(
            "{}|{}|{}|{}|{}|{}",
            self.info.title,
            self.info.author,
            self.info.isbn,
            self.info.year,
            self.pages,
            format_bool(self.loan.is_borrowed())
        ))
    }

    fn decode(line: &str) -> Result<Self> {
        let f = split_fields::<Self>(line)?;
        let year = parse_int(Self::KIND, "year", f[3])?;
        let pages = parse_int(Self::KIND, "page count", f[4])?;
        let borrowed = parse_bool(Self::KIND, "borrowed flag", f[5])?;

        Ok(Book {
            info: PublicationInfo::new(f[0], f[1], f[2], year),
            pages,
            loan: LoanState::from_borrowed(borrowed),
        })
    }
}

impl Record for Member {
    const KIND: &'static str = "member";
    const FIELD_COUNT: usize = 3;

    fn encode(&self) -> Result<String> {
        check_text("first name", &self.first_name)?;
        check_text("last name", &self.last_name)?;
        Ok(format!(
            "{}|{}|{}",
            self.first_name, self.last_name, self.number
        ))
    }

    fn decode(line: &str) -> Result<Self> {
        let f = split_fields::<Self>(line)?;
        let number = parse_int(Self::KIND, "member number", f[2])?;
        Ok(Member::new(f[0], f[1], number))
    }
}

/// Encode a whole collection, one newline-terminated line per record.
pub fn encode_all<R: Record>(records: &[R]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.encode()?);
        out.push('\n');
    }
    Ok(out)
}

/// Decode a whole file. The first malformed line aborts the batch.
pub fn decode_all<R: Record>(text: &str) -> Result<Vec<R>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = R::decode(line).map_err(|e| match e {
            LibrisError::MalformedRecord { kind, reason, .. } => LibrisError::MalformedRecord {
                kind,
                line_number: idx + 1,
                reason,
            },
            other => other,
        })?;
        records.push(record);
    }
    Ok(records)
}
