// Character and entity reference decoding.
//
// Recognizes `&name;`, `&#123;` and `&#x1F;`/`&#X1F;`. Only six named
// references are known; anything else is left in the text untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z0-9_]+|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("valid entity pattern")
});

/// Replace HTML character references with the characters they stand for.
///
/// Numeric references use 16-bit code unit semantics: the value wraps modulo
/// 2^16, so astral code points cannot be written this way. A value in the
/// surrogate range becomes U+FFFD.
pub fn unescape(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    ENTITY
        .replace_all(input, |caps: &Captures| decode(&caps[0]))
        .into_owned()
}

/// Decode one complete reference, `&` and `;` included.
fn decode(reference: &str) -> String {
    let body = &reference[1..reference.len() - 1];

    if let Some(number) = body.strip_prefix('#') {
        let unit = match number.strip_prefix(['x', 'X']) {
            Some(hex) => code_unit(hex, 16),
            None => code_unit(number, 10),
        };
        let ch = char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER);
        return ch.to_string();
    }

    let replacement = match body {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        _ => reference,
    };
    replacement.to_string()
}

/// Fold digits into a 16-bit value, wrapping on overflow.
fn code_unit(digits: &str, radix: u32) -> u16 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0u16, |acc, d| {
            // `d < radix <= 16`, so the cast is lossless.
            acc.wrapping_mul(radix as u16).wrapping_add(d as u16)
        })
}
