//! Property tests for the number grammar and parser.

use number_parse::{is_numeric, parse_decimal, NumberSymbols};
use proptest::prelude::*;

fn english() -> NumberSymbols {
    NumberSymbols::default()
}

fn russian() -> NumberSymbols {
    NumberSymbols::default()
        .with_decimal_point(',')
        .with_grouping_separator(' ')
}

/// A digit string of 2..=16 digits plus a mask choosing which interior digit
/// boundaries receive a grouping separator.
fn digits_and_grouping_mask() -> impl Strategy<Value = (String, Vec<bool>)> {
    "[0-9]{2,16}".prop_flat_map(|digits| {
        let boundaries = digits.len() - 1;
        (Just(digits), proptest::collection::vec(any::<bool>(), boundaries))
    })
}

proptest! {
    // Grammar and parser agree on every input: accepted strings parse,
    // rejected strings yield absence.
    #[test]
    fn grammar_and_parser_agree(text in "\\PC{0,24}") {
        for symbols in [english(), russian()] {
            prop_assert_eq!(
                is_numeric(&text, &symbols),
                parse_decimal(&text, &symbols).is_some()
            );
        }
    }

    // Well-formed numbers are accepted under any symbols whose separators
    // they use, regardless of leading zeros or grouping placement.
    #[test]
    fn well_formed_numbers_parse(text in "-?[0-9]{1,12}(\\.[0-9]{1,8})?") {
        prop_assert!(parse_decimal(&text, &english()).is_some());
    }

    // A leading '-' negates and nothing else.
    #[test]
    fn sign_negates(digits in "[0-9]{1,20}") {
        let symbols = english();
        let positive = parse_decimal(&digits, &symbols).unwrap();
        let negative = parse_decimal(&format!("-{}", digits), &symbols).unwrap();
        prop_assert_eq!(negative, -positive);
    }

    // Grouping separators at any digit boundary are numerically inert.
    #[test]
    fn grouping_is_inert((digits, mask) in digits_and_grouping_mask()) {
        for symbols in [english(), russian()] {
            let mut grouped = String::with_capacity(digits.len() * 2);
            for (i, c) in digits.chars().enumerate() {
                grouped.push(c);
                if i < mask.len() && mask[i] {
                    grouped.push(symbols.grouping_separator);
                }
            }
            prop_assert_eq!(
                parse_decimal(&grouped, &symbols),
                parse_decimal(&digits, &symbols)
            );
        }
    }

    // Parsing the canonical rendering of a parsed value reproduces it.
    #[test]
    fn canonical_rendering_round_trips(text in "-?[0-9]{1,16}(\\.[0-9]{1,10})?") {
        let symbols = english();
        let value = parse_decimal(&text, &symbols).unwrap();
        let rendered = value.to_string();
        prop_assert_eq!(parse_decimal(&rendered, &symbols), Some(value));
    }

    // The same digit content parses to the same value under any symbols that
    // designate the typed separator as the decimal point.
    #[test]
    fn decimal_point_is_profile_relative(int in "[0-9]{1,10}", frac in "[0-9]{1,6}") {
        let dotted = format!("{}.{}", int, frac);
        let comma = format!("{},{}", int, frac);
        prop_assert_eq!(
            parse_decimal(&dotted, &english()),
            parse_decimal(&comma, &russian())
        );
    }
}
