//! Run-time typed input: JSON parsing and the `InvalidInput` path.

use serde_json::json;
use sufarray::{Engine, SuffixArrayError, SymbolIndex, SymbolKind, Symbols};

fn parse(value: serde_json::Value) -> Result<Symbols, SuffixArrayError> {
    Symbols::from_json(&value)
}

#[test]
fn test_invalid_input_names_type_and_value() {
    let err = parse(json!({"text": "banana"})).unwrap_err();
    match &err {
        SuffixArrayError::InvalidInput { found, detail, .. } => {
            assert_eq!(found, "object");
            assert!(detail.contains("banana"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_invalid_input_is_not_an_invariant_error() {
    let err = parse(json!(null)).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(std::error::Error::source(&err).is_none());
}

#[test]
fn test_heterogeneous_array_reports_first_bad_element() {
    let err = parse(json!(["a", "b", 3, null])).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("element 2"), "{}", msg);
    assert!(msg.contains("integer"), "{}", msg);
}

#[test]
fn test_query_kind_mismatch() {
    let text = parse(json!([5, 6, 7])).unwrap();
    let index = SymbolIndex::build(Engine::BruteForce, &text);
    assert_eq!(index.kind(), SymbolKind::Integers);

    let err = index.find_all(&Symbols::from_text("56")).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("chars"), "{}", err);

    let found = index.find_all(&parse(json!([6, 7])).unwrap()).unwrap();
    assert_eq!(found.collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_engines_agree_on_every_kind() {
    let cases = [
        (json!("abracadabra"), json!("bra")),
        (json!([3, 1, 3, 1, 3, 1]), json!([3, 1, 3])),
        (json!(["x", "y", "x", "y"]), json!(["y"])),
        (json!([]), json!([])),
    ];
    for (text, pattern) in cases {
        let text = parse(text).unwrap();
        let pattern = parse(pattern).unwrap();
        let brute = SymbolIndex::build(Engine::BruteForce, &text);
        let doubling = SymbolIndex::build(Engine::PrefixDoubling, &text);
        assert_eq!(
            brute.find_all(&pattern).unwrap().into_sorted(),
            doubling.find_all(&pattern).unwrap().into_sorted(),
            "text {:?}",
            text
        );
    }
}

#[test]
fn test_empty_text_still_rejects_other_kinds() {
    let cases = [
        (json!(""), json!([1])),
        (json!(""), json!(["a"])),
    ];
    for (text, pattern) in cases {
        let text = parse(text).unwrap();
        let pattern = parse(pattern).unwrap();
        for engine in Engine::ALL {
            let index = SymbolIndex::build(engine, &text);
            match index.find_all(&pattern) {
                Err(SuffixArrayError::InvalidInput { expected, found, .. }) => {
                    assert_eq!(expected, "chars pattern");
                    assert_ne!(found, "chars");
                }
                Err(other) => panic!("expected InvalidInput, got {:?}", other),
                Ok(matches) => panic!("accepted {:?}: {:?}", pattern, matches.collect::<Vec<_>>()),
            }
        }
    }
}

#[test]
fn test_empty_array_text_adopts_pattern_kind() {
    let text = parse(json!([])).unwrap();
    for engine in Engine::ALL {
        let index = SymbolIndex::build(engine, &text);
        for pattern in [json!("ab"), json!([1]), json!(["x"])] {
            let found = index.find_all(&parse(pattern).unwrap()).unwrap();
            assert_eq!(found.count(), 0);
        }
    }
}
