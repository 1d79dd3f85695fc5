//! Zone and creature override strings
//!
//! Format: comma-separated entries, each `id health [damage]`:
//!
//! ```text
//! 12 1.2 1.1, 40 1.5, 3456 2.0 0.8
//! ```
//!
//! Parsing is tolerant: a malformed entry is skipped on its own and the rest
//! of the string still loads. Nothing here returns an error.

use ahash::AHashMap;

use crate::core::types::Multipliers;

/// Override lookup keyed by zone id or creature entry
pub type OverrideTable = AHashMap<u32, Multipliers>;

/// Stored multipliers must be finite and strictly positive
pub fn is_valid_multiplier(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Parse an override string into a lookup table
///
/// Rules per entry:
/// - missing `id` or `health`: skipped
/// - missing `damage`: `damage = health`
/// - a token is read up to the end of its leading number, so `1.5x` is
///   `1.5` and `40abc` is `40`
/// - a token with no leading number: skipped
/// - `health` or `damage` not positive: skipped
/// - tokens after `damage` are ignored
///
/// Later entries for the same id replace earlier ones.
pub fn parse_overrides(input: &str) -> OverrideTable {
    let mut overrides = OverrideTable::new();

    for chunk in input.split(',') {
        match parse_entry(chunk) {
            Some((id, multipliers)) => {
                overrides.insert(id, multipliers);
            }
            None => {
                let chunk = chunk.trim();
                if !chunk.is_empty() {
                    tracing::debug!("Skipping malformed override entry '{}'", chunk);
                }
            }
        }
    }

    overrides
}

fn parse_entry(chunk: &str) -> Option<(u32, Multipliers)> {
    let mut tokens = chunk.split_whitespace();

    let id = leading_u32(tokens.next()?)?;
    let health = leading_f32(tokens.next()?)?;
    let damage = match tokens.next() {
        Some(token) => leading_f32(token)?,
        None => health,
    };

    if !is_valid_multiplier(health) || !is_valid_multiplier(damage) {
        return None;
    }

    Some((id, Multipliers::new(health, damage)))
}

/// Number of ASCII digits at the start of `s`
fn digit_run(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading unsigned integer of a token. Negative or out-of-range ids yield `None`.
fn leading_u32(token: &str) -> Option<u32> {
    let digits = token.strip_prefix('+').unwrap_or(token);
    let len = digit_run(digits.as_bytes());
    if len == 0 {
        return None;
    }
    digits[..len].parse().ok()
}

/// Leading decimal number of a token: `[sign] digits [. digits] [e [sign] digits]`
fn leading_f32(token: &str) -> Option<f32> {
    let bytes = token.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    token[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_entry() {
        let table = parse_overrides("12 1.5 2.0");
        assert_eq!(table.len(), 1);
        assert_eq!(table[&12], Multipliers::new(1.5, 2.0));
    }

    #[test]
    fn test_damage_defaults_to_health() {
        let table = parse_overrides("40 1.25");
        assert_eq!(table[&40], Multipliers::uniform(1.25));
    }

    #[test]
    fn test_multiple_entries_with_spacing() {
        let table = parse_overrides("  1 1.1 1.2 ,2   3,\t3 0.5 0.25  ");
        assert_eq!(table.len(), 3);
        assert_eq!(table[&1], Multipliers::new(1.1, 1.2));
        assert_eq!(table[&2], Multipliers::uniform(3.0));
        assert_eq!(table[&3], Multipliers::new(0.5, 0.25));
    }

    #[test]
    fn test_bad_entry_skipped_alone() {
        let table = parse_overrides("1 2.0, x 2.0, 3 abc, 4 1.0 dmg, 5 1.5");
        assert_eq!(table.len(), 2);
        assert!(table.contains_key(&1));
        assert!(table.contains_key(&5));
    }

    #[test]
    fn test_missing_health_skipped() {
        assert!(parse_overrides("7").is_empty());
        assert!(parse_overrides(",,, ,").is_empty());
        assert!(parse_overrides("").is_empty());
    }

    #[test]
    fn test_non_positive_skipped() {
        let table = parse_overrides("1 0, 2 -1.0, 3 1.0 0, 4 1.0 -2, 5 nan, 6 inf, 7 1.0");
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&7));
    }

    #[test]
    fn test_trailing_text_after_number_ignored() {
        let table = parse_overrides("12 1.5x, 40abc 2.0, 7 2.0 1.25dmg");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&12).copied(), Some(Multipliers::uniform(1.5)));
        assert_eq!(table.get(&40).copied(), Some(Multipliers::uniform(2.0)));
        assert_eq!(table.get(&7).copied(), Some(Multipliers::new(2.0, 1.25)));
    }

    #[test]
    fn test_leading_number_forms() {
        assert_eq!(leading_f32("2.5e1x"), Some(25.0));
        assert_eq!(leading_f32("3e"), Some(3.0));
        assert_eq!(leading_f32(".5hp"), Some(0.5));
        assert_eq!(leading_f32("4."), Some(4.0));
        assert_eq!(leading_f32("+1.25"), Some(1.25));
        assert_eq!(leading_f32("x1.5"), None);
        assert_eq!(leading_f32("."), None);
        assert_eq!(leading_f32("-"), None);
        assert_eq!(leading_u32("+7z"), Some(7));
        assert_eq!(leading_u32("99999999999"), None);
    }

    #[test]
    fn test_negative_id_skipped() {
        assert!(parse_overrides("-4 1.5").is_empty());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let table = parse_overrides("9 1.0 1.0, 9 2.0 3.0");
        assert_eq!(table[&9], Multipliers::new(2.0, 3.0));

        // An invalid later duplicate does not erase the earlier entry
        let table = parse_overrides("9 2.0, 9 -1.0");
        assert_eq!(table[&9], Multipliers::uniform(2.0));
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let table = parse_overrides("11 1.5 2.5 trailing words");
        assert_eq!(table[&11], Multipliers::new(1.5, 2.5));
    }

    proptest! {
        #[test]
        fn prop_well_formed_entries_round_trip(
            id in any::<u32>(),
            hp in 0.01f32..100.0,
            dmg in 0.01f32..100.0,
        ) {
            let table = parse_overrides(&format!("{} {} {}", id, hp, dmg));
            prop_assert_eq!(table.get(&id).copied(), Some(Multipliers::new(hp, dmg)));

            let table = parse_overrides(&format!("{} {}", id, hp));
            prop_assert_eq!(table.get(&id).copied(), Some(Multipliers::uniform(hp)));
        }

        #[test]
        fn prop_stored_values_always_positive(input in ".{0,64}") {
            for multipliers in parse_overrides(&input).values() {
                prop_assert!(is_valid_multiplier(multipliers.health));
                prop_assert!(is_valid_multiplier(multipliers.damage));
            }
        }
    }
}
