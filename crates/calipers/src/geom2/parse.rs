//! Point-list parsing for adapters (CLI, tests, fixtures).
//!
//! Two shapes are accepted:
//! - parenthesised tuples anywhere in the text: `(60,10), (60,20) (70,10)`;
//! - one point per line, `x,y` or `x y`, with `#` comments and blank lines.
//!
//! Coordinates use the `Exact` grammar (`7`, `-3/4`, `1.25`).

use super::point::Point;
use crate::error::{GeomError, Result};

pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    if text.contains('(') || text.contains(')') {
        parse_tuples(text)
    } else {
        parse_lines(text)
    }
}

fn parse_tuples(text: &str) -> Result<Vec<Point>> {
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let Some(open) = rest.find(['(', ')']) else {
            check_separators(text, rest)?;
            return Ok(out);
        };
        check_separators(text, &rest[..open])?;
        if rest[open..].starts_with(')') {
            return Err(GeomError::parse(text, "unmatched ')'"));
        }
        let after = &rest[open + 1..];
        let close = after
            .find([')', '('])
            .filter(|&i| after[i..].starts_with(')'))
            .ok_or_else(|| GeomError::parse(text, "unclosed '('"))?;
        out.push(after[..close].parse()?);
        rest = &after[close + 1..];
    }
}

/// Only commas, semicolons and whitespace may sit between tuples.
fn check_separators(whole: &str, between: &str) -> Result<()> {
    match between
        .chars()
        .find(|c| !(c.is_whitespace() || *c == ',' || *c == ';'))
    {
        Some(c) => Err(GeomError::parse(whole, format!("unexpected {c:?} between points"))),
        None => Ok(()),
    }
}

fn parse_lines(text: &str) -> Result<Vec<Point>> {
    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if line.contains(',') {
            out.push(line.parse()?);
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [x, y] => out.push(Point {
                x: x.parse()?,
                y: y.parse()?,
            }),
            _ => return Err(GeomError::parse(line, "expected `x,y` or `x y`")),
        }
    }
    Ok(out)
}
