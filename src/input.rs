//! Record parser: five text lines per vehicle (brand, model, year, mileage, price)

use std::io::{self, BufRead};

use bstr::ByteSlice;

use crate::error::{CarstockError, Result};
use crate::record::Vehicle;

/// Lines making up one record in the data file
pub const LINES_PER_RECORD: usize = 5;

/// Reads text lines, stripping the trailing CR/LF
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_no: 0,
        }
    }

    /// Read the next line, returning None at EOF
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        self.line_no += 1;
        let line = self.buffer.trim_end_with(|c| c == '\r' || c == '\n');
        Ok(Some(line.to_str_lossy().into_owned()))
    }

    /// Number of lines read so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Read every vehicle from a data file
///
/// Blank lines at the very end are ignored. Any other line count that is
/// not a multiple of five leaves an incomplete record and fails the load.
pub fn read_all_vehicles<R: BufRead>(reader: R) -> Result<Vec<Vehicle>> {
    let mut lines = Vec::new();
    let mut line_reader = LineReader::new(reader);

    while let Some(line) = line_reader.read_line()? {
        lines.push(line);
    }

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    log::debug!(
        "read {} lines, {} after dropping trailing blanks",
        line_reader.line_no(),
        lines.len()
    );

    lines
        .chunks(LINES_PER_RECORD)
        .enumerate()
        .map(|(i, chunk)| parse_vehicle(chunk, i + 1, i * LINES_PER_RECORD + 1))
        .collect()
}

/// Parse one record from its block of lines
///
/// `record` and `first_line` are 1-based and only used for error reporting.
pub fn parse_vehicle<S: AsRef<str>>(lines: &[S], record: usize, first_line: usize) -> Result<Vehicle> {
    let malformed = |offset: usize, reason: String| CarstockError::MalformedRecord {
        record,
        line: first_line + offset,
        reason,
    };

    if lines.len() < LINES_PER_RECORD {
        return Err(malformed(
            lines.len(),
            format!(
                "unexpected end of input: expected {} lines, found {}",
                LINES_PER_RECORD,
                lines.len()
            ),
        ));
    }

    let brand = lines[0].as_ref();
    let model = lines[1].as_ref();
    let year_line = lines[2].as_ref();
    let mileage_line = lines[3].as_ref();
    let price_line = lines[4].as_ref();

    let year = parse_leading_int(year_line)
        .ok_or_else(|| malformed(2, format!("invalid year: {:?}", year_line)))?;
    let mileage = parse_leading_int(mileage_line)
        .ok_or_else(|| malformed(3, format!("invalid mileage: {:?}", mileage_line)))?;
    let price = parse_leading_price(price_line)
        .ok_or_else(|| malformed(4, format!("invalid price: {:?}", price_line)))?;

    Ok(Vehicle::new(brand, model, year, mileage, price))
}

/// Parse the integer at the start of a line, ignoring whatever follows it
///
/// - Skips leading whitespace
/// - Handles optional sign (+ or -)
/// - Returns None when no digits are present or the value overflows
pub fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start().as_bytes();
    let mut end = 0;

    if end < s.len() && matches!(s[end], b'-' | b'+') {
        end += 1;
    }
    let digits_start = end;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    std::str::from_utf8(&s[..end]).ok()?.parse().ok()
}

/// Parse the decimal number at the start of a line, ignoring whatever follows it
///
/// Accepts an optional sign, a fractional part and an exponent (`1.5e4`).
/// An exponent marker without digits is left out of the number.
pub fn parse_leading_price(s: &str) -> Option<f64> {
    let s = s.trim_start().as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if end < s.len() && matches!(s[end], b'-' | b'+') {
        end += 1;
    }
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < s.len() && s[end] == b'.' {
        end += 1;
        while end < s.len() && s[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < s.len() && matches!(s[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < s.len() && matches!(s[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < s.len() && s[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    std::str::from_utf8(&s[..end]).ok()?.parse().ok()
}
