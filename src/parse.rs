//! Parser for the layout-generation model's text output.
//!
//! The model emits layouts in one of three shapes, tried in order:
//!
//! 1. JSON — an array of `{"name", "points"}` objects (the wire contract);
//! 2. coordinate format — `(x,y)(x,y)..., label: (x,y)(x,y)..., ...` where an
//!    unlabeled leading entry is named `"room"`;
//! 3. a line DSL — `Room: Name, WxH, position (x,y)` or
//!    `Room: Name, WxH, next to Other`.
//!
//! All three produce a [`RawLayout`] in raw model coordinates; callers hand
//! it to [`crate::normalize::normalize`] before storing anything.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use crate::geom::Point;
use crate::room::{RawLayout, Room};

/// Error returned by [`parse_layout`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or whitespace.
    #[error("empty layout text")]
    Empty,
    /// The input matched none of the supported layout formats.
    #[error("unrecognized layout text")]
    Unrecognized,
}

/// Parse model output into a raw layout, trying JSON, then the coordinate
/// format, then the DSL.
///
/// # Errors
///
/// [`ParseError::Empty`] for blank input, [`ParseError::Unrecognized`] when
/// no format matches.
pub fn parse_layout(text: &str) -> Result<RawLayout, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    // JSON wire shape. Rooms without a points field deserialize with an
    // empty point list and get filtered at the presentation layer.
    if let Ok(rooms) = serde_json::from_str::<Vec<Room>>(text) {
        return Ok(RawLayout(rooms));
    }

    if let Some(rooms) = parse_coordinate_layout(text) {
        return Ok(RawLayout(rooms));
    }

    if let Some(rooms) = parse_dsl_layout(text) {
        return Ok(RawLayout(rooms));
    }

    Err(ParseError::Unrecognized)
}

// ── Coordinate format ───────────────────────────────────────────

/// Parse `label: (x,y)(x,y)..., label2: ...`. Returns `None` unless the whole
/// input reads as a sequence of such entries with at least one room.
fn parse_coordinate_layout(text: &str) -> Option<Vec<Room>> {
    let mut scanner = Scanner::new(text);
    let mut rooms = Vec::new();

    loop {
        scanner.skip_separators();
        if scanner.at_end() {
            break;
        }

        let name = scanner.read_label().unwrap_or_else(|| "room".to_owned());
        let mut points = Vec::new();
        loop {
            scanner.skip_ws();
            match scanner.read_point() {
                Some(p) => points.push(p),
                None => break,
            }
        }
        if points.is_empty() {
            // Not a coordinate entry; this is some other format.
            return None;
        }
        rooms.push(Room::new(name, points));
    }

    if rooms.is_empty() { None } else { Some(rooms) }
}

/// Minimal byte scanner for the coordinate format.
struct Scanner<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src: src.as_bytes(), pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace() || b == b',') {
            self.bump();
        }
    }

    /// Read `ident:` and return the ident, or leave the position unchanged.
    fn read_label(&mut self) -> Option<String> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.bump();
        }
        if self.pos == start || !self.eat(b':') {
            self.pos = start;
            return None;
        }
        // Ident bytes are ASCII, so the lossy conversion is exact.
        Some(String::from_utf8_lossy(&self.src[start..self.pos - 1]).into_owned())
    }

    /// Read `(x,y)`, or leave the position unchanged.
    fn read_point(&mut self) -> Option<Point> {
        let start = self.pos;
        let parsed = (|| {
            if !self.eat(b'(') {
                return None;
            }
            self.skip_ws();
            let x = self.read_number()?;
            self.skip_ws();
            if !self.eat(b',') {
                return None;
            }
            self.skip_ws();
            let y = self.read_number()?;
            self.skip_ws();
            if !self.eat(b')') {
                return None;
            }
            Some(Point::new(x, y))
        })();
        if parsed.is_none() {
            self.pos = start;
        }
        parsed
    }

    /// Read an optionally negative integer as `f64`.
    fn read_number(&mut self) -> Option<f64> {
        let start = self.pos;
        self.eat(b'-');
        let digits_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.bump();
        }
        if self.pos == digits_start {
            self.pos = start;
            return None;
        }
        let text = std::str::from_utf8(&self.src[start..self.pos]).ok()?;
        text.parse().ok()
    }
}

// ── DSL ─────────────────────────────────────────────────────────

/// Parse `Room: Name, WxH, position (x,y) | next to Other` lines.
///
/// Positioned rooms become rectangles at their anchor. `next to` rooms abut
/// the right edge of the referenced room, top-aligned; an unknown reference
/// falls back to the right of the previously parsed room, then to the origin.
fn parse_dsl_layout(text: &str) -> Option<Vec<Room>> {
    let mut rooms: Vec<Room> = Vec::new();

    for line in text.lines() {
        // Lines that don't parse as room declarations are skipped.
        if let Some(room) = parse_dsl_line(line.trim(), &rooms) {
            rooms.push(room);
        }
    }

    if rooms.is_empty() { None } else { Some(rooms) }
}

fn parse_dsl_line(line: &str, earlier: &[Room]) -> Option<Room> {
    let rest = line.strip_prefix("Room:")?;

    let mut parts = rest.splitn(3, ',').map(str::trim);
    let name = parts.next()?;
    let dims = parts.next()?;
    let placement = parts.next()?;

    let (w, h) = dims.split_once('x')?;
    let width: f64 = w.trim().parse().ok()?;
    let height: f64 = h.trim().parse().ok()?;

    let anchor = if let Some(coords) = placement.strip_prefix("position") {
        parse_paren_pair(coords.trim())?
    } else if let Some(other) = placement.strip_prefix("next to") {
        let reference = earlier
            .iter()
            .find(|r| r.name == other.trim())
            .or_else(|| earlier.last());
        match reference.and_then(Room::bounds) {
            Some(b) => Point::new(b.max_x, b.min_y),
            None => Point::new(0.0, 0.0),
        }
    } else {
        return None;
    };

    Some(Room::rect(name, anchor.x, anchor.y, width, height))
}

/// Parse a standalone `(x,y)` pair.
fn parse_paren_pair(text: &str) -> Option<Point> {
    let mut scanner = Scanner::new(text);
    let point = scanner.read_point()?;
    scanner.skip_ws();
    if scanner.at_end() { Some(point) } else { None }
}
