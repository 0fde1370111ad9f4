//! Number rendering shared by the formatter and `print`.

/// Magnitudes at or above this render in exponent form.
const EXPONENT_ABOVE: f64 = 1e16;
/// Nonzero magnitudes below this render in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;

/// Render a number the way programs expect to read it back.
///
/// Integral values have no fractional part (`8`, not `8.0`); everything
/// else uses the shortest representation that parses back to the same
/// `f64`. Very large and very small magnitudes switch to exponent form
/// (`1e+301`, `1e-07`). Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if value.is_finite() && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return exponent_form(value);
    }
    // `Display` for f64 omits `.0` and never switches to exponent form.
    value.to_string()
}

/// `{:e}` gives the shortest mantissa (`2.5e20`); the exponent gets an
/// explicit sign and at least two digits (`2.5e+20`).
fn exponent_form(value: f64) -> String {
    let rendered = format!("{value:e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
