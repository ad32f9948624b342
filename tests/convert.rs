//! Conversion behavior through the public API, plus property tests over
//! generated numerals.

use proptest::prelude::*;

use numerus::{Error, Symbol, convert};

#[test]
fn reference_values() {
    assert_eq!(convert("III").unwrap(), 3);
    assert_eq!(convert("LVIII").unwrap(), 58);
    assert_eq!(convert("MCMXCIV").unwrap(), 1994);
    assert_eq!(convert("IV").unwrap(), 4);
    assert_eq!(convert("IX").unwrap(), 9);
    assert_eq!(convert("XL").unwrap(), 40);
}

#[test]
fn length_boundaries() {
    assert!(matches!(convert(""), Err(Error::OutOfRange { .. })));
    assert!(matches!(
        convert(&"M".repeat(16)),
        Err(Error::OutOfRange { .. })
    ));
    assert_eq!(convert(&"M".repeat(15)).unwrap(), 15000);
}

#[test]
fn unrecognized_characters() {
    assert!(matches!(convert("ABC"), Err(Error::InvalidSymbol { .. })));
    assert!(matches!(convert("X I"), Err(Error::InvalidSymbol { symbol: ' ', position: 1 })));
}

#[test]
fn permissive_grammar() {
    assert_eq!(convert("IIII").unwrap(), 4);
    assert_eq!(convert("VX").unwrap(), 5);
}

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(Symbol::ALL.to_vec())
}

fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}

proptest! {
    #[test]
    fn valid_symbols_always_convert(symbols in prop::collection::vec(arb_symbol(), 1..16)) {
        prop_assert!(convert(&render(&symbols)).is_ok());
    }

    #[test]
    fn non_increasing_numerals_sum_their_symbols(
        mut symbols in prop::collection::vec(arb_symbol(), 1..16)
    ) {
        symbols.sort_by(|a, b| b.cmp(a));
        let expected: u32 = symbols.iter().map(|s| s.value()).sum();
        prop_assert_eq!(convert(&render(&symbols)).unwrap(), expected);
    }

    #[test]
    fn long_inputs_are_out_of_range(input in "[IVXLCDM]{16,40}") {
        let is_out_of_range = matches!(convert(&input), Err(Error::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn first_unrecognized_character_is_reported(
        prefix in "[IVXLCDM]{0,7}",
        bad in "[a-zA-Z0-9 ]".prop_filter("not a symbol", |s| !s.chars().any(|c| "IVXLCDM".contains(c))),
        suffix in "[IVXLCDMa-z]{0,7}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let expected_symbol = bad.chars().next().unwrap();
        let expected_position = prefix.chars().count();
        match convert(&input) {
            Err(Error::InvalidSymbol { symbol, position }) => {
                prop_assert_eq!(symbol, expected_symbol);
                prop_assert_eq!(position, expected_position);
            }
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }
}
