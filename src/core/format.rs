//! Display formatting for text operands
//!
//! Operands live as raw digit strings; these functions turn them into the
//! grouped form the display shows (`1234.5` -> `1,234.5`) and turn computed
//! results back into operand text.

/// Formats an operand string for display.
///
/// The text is split on the first `.`. The whole-number part is parsed as
/// f64 and rendered with comma thousands separators; if it fails to parse
/// (or is non-finite, the division-by-zero case) the whole part renders
/// blank. A decimal fragment is reattached verbatim after a literal `.`.
///
/// Pure function of its input; formatting the same raw string twice yields
/// the same output.
#[must_use]
pub fn format_operand(text: &str) -> String {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    let formatted = whole
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(group_thousands)
        .unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{formatted}.{fraction}"),
        None => formatted,
    }
}

/// Renders an integral value with comma separators (`1234` -> `"1,234"`)
fn group_thousands(value: f64) -> String {
    // Whole parts are integral by construction; keep the sign of -0 so a
    // mid-entry "-0.5" displays as "-0.5"
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value.is_sign_negative() {
        grouped.push('-');
    }
    let leading = digits.len() % 3;
    if leading > 0 {
        grouped.push_str(&digits[..leading]);
    }
    for (i, chunk) in digits.as_bytes()[leading..].chunks(3).enumerate() {
        if leading > 0 || i > 0 {
            grouped.push(',');
        }
        // Chunks of an ASCII digit string
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    grouped
}

/// Converts a computed f64 result back into operand text.
///
/// Integral values come back bare (`5.0` -> `"5"`) so follow-up entry chains
/// on clean text; everything else is fixed-point with trailing zeros
/// trimmed. Infinity and NaN stringify as-is and later format to a blank
/// display line.
#[must_use]
pub fn stringify_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{value:.0}")
    } else if value.is_finite() {
        let fixed = format!("{value:.10}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        value.to_string()
    }
}
