use crate::config::INPUT_MAX_LEN;
use crate::Direction;
use once_cell::sync::Lazy;
use regex::Regex;

// Anything a numeric text input must not keep
static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Bound `value` to `[lo, hi]`. When `lo == hi` both bounds collapse to it.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Map a value into a 0–100 percentage of `[min, max]`.
///
/// Returns 0 for a degenerate range instead of dividing by zero.
pub fn position_percent(value: f64, min: f64, max: f64) -> f64 {
    if max - min == 0.0 {
        return 0.0;
    }
    (value - min) / (max - min) * 100.0
}

/// Return the fixed value nearest to `value`.
///
/// Ties keep the earlier element, so a midpoint snaps to the lower neighbour.
///
/// # Examples
/// ```
/// use range_slider::utils::closest_fixed_value;
///
/// assert_eq!(closest_fixed_value(12.5, &[0.0, 25.0, 50.0, 75.0, 100.0]), 0.0);
/// assert_eq!(closest_fixed_value(41.0, &[0.0, 25.0, 50.0, 75.0, 100.0]), 50.0);
/// ```
pub fn closest_fixed_value(value: f64, fixed_values: &[f64]) -> f64 {
    fixed_values
        .iter()
        .copied()
        .reduce(|prev, curr| {
            if (curr - value).abs() < (prev - value).abs() {
                curr
            } else {
                prev
            }
        })
        .unwrap_or(value)
}

/// Move one step from `current`.
///
/// Continuous mode adds or subtracts 1 without clamping. In discrete mode the
/// neighbouring fixed value is returned, `current` is kept at either edge, and
/// a `current` missing from the list yields the first fixed value whatever the
/// direction.
pub fn step_value(current: f64, direction: Direction, fixed_values: Option<&[f64]>) -> f64 {
    let Some(values) = fixed_values else {
        return match direction {
            Direction::Increase => current + 1.0,
            Direction::Decrease => current - 1.0,
        };
    };

    let Some(index) = values.iter().position(|&v| v == current) else {
        return values.first().copied().unwrap_or(current);
    };

    match direction {
        Direction::Increase if index + 1 < values.len() => values[index + 1],
        Direction::Decrease if index > 0 => values[index - 1],
        _ => current,
    }
}

/// Round half up, the way browsers round pointer-derived values.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Keep only ASCII digits and cap the buffer at [`INPUT_MAX_LEN`] characters.
pub fn sanitize_input(text: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(text, "");
    digits.chars().take(INPUT_MAX_LEN).collect()
}

/// Parse a text buffer into a number, `None` when empty or not numeric.
pub fn parse_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Canonical text form of a committed value (`100`, `5.99`).
pub fn format_value(value: f64) -> String {
    value.to_string()
}
