//! Content stream operators
//!
//! Small helpers that format PDF operators into a page's content buffer.
//! All inputs here are already in PDF space (bottom-left origin).

use crate::color::Cmyk;

/// Format a coordinate with at most two decimals
pub(crate) fn num(value: f32) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// `c m y k k` (non-stroking) or `c m y k K` (stroking)
pub(crate) fn cmyk_op(color: Cmyk, stroking: bool) -> String {
    let [c, m, y, k] = color.fractions();
    format!(
        "{} {} {} {} {}\n",
        num(c),
        num(m),
        num(y),
        num(k),
        if stroking { "K" } else { "k" }
    )
}

pub(crate) fn rect_op(x: f32, y: f32, width: f32, height: f32, paint: &str) -> String {
    format!(
        "{} {} {} {} re {}\n",
        num(x),
        num(y),
        num(width),
        num(height),
        paint
    )
}

pub(crate) fn line_op(x1: f32, y1: f32, x2: f32, y2: f32) -> String {
    format!("{} {} m {} {} l S\n", num(x1), num(y1), num(x2), num(y2))
}

/// Encode text as a PDF literal string in WinAnsiEncoding.
///
/// Latin-1 characters map to themselves, a handful of common typographic
/// characters map to their WinAnsi slots, everything else becomes `?`.
/// Bytes outside printable ASCII are written as octal escapes.
pub(crate) fn literal_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for ch in text.chars() {
        let byte = win_ansi_byte(ch);
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out.push(')');
    out
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\u{20AC}' => 0x80, // euro
        '\u{2026}' => 0x85, // ellipsis
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95, // bullet
        '\u{2013}' => 0x96, // en dash
        '\u{2014}' => 0x97, // em dash
        '\t' => b' ',
        c if (c as u32) < 0x20 => b'?',
        c if (c as u32) <= 0x7E => c as u8,
        c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_trims_trailing_zeros() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(0.126), "0.13");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_cmyk_ops() {
        assert_eq!(cmyk_op(Cmyk::PURE_BLACK, false), "0 0 0 1 k\n");
        assert_eq!(cmyk_op(Cmyk::new(0, 58, 79, 0), true), "0 0.58 0.79 0 K\n");
    }

    #[test]
    fn test_literal_string_escapes() {
        assert_eq!(literal_string("Fish (fried)"), "(Fish \\(fried\\))");
        assert_eq!(literal_string("a\\b"), "(a\\\\b)");
    }

    #[test]
    fn test_literal_string_encodes_latin1_and_euro() {
        assert_eq!(literal_string("Café"), "(Caf\\351)");
        assert_eq!(literal_string("€5"), "(\\2005)");
        assert_eq!(literal_string("日本"), "(??)");
    }
}
