//! Property-based tests: generated documents agree with the reference
//! decoder.
//!
//! Strategies build arbitrary `serde_json::Value` trees (bounded depth and
//! width), serialize them to text, and feed the text to `pluck_core::parse`.
//! The resulting tree must be structurally equivalent to the generated one:
//! numbers compared as floats, objects as key → value mappings.

use proptest::prelude::*;
use serde_json::{Map, Number};

use pluck_core::{parse, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Object keys: short, no dots (dotted keys are a query-engine concern, not
/// a parsing one).
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,24}",
        Just(String::new()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("42".to_string()),
        Just("with \"quotes\"".to_string()),
        Just("line1\nline2".to_string()),
        Just("back\\slash".to_string()),
        Just("caf\u{00e9} \u{4f60}\u{597d} \u{1F923}".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| serde_json::Value::Number(Number::from(n))),
        (-1.0e9..1.0e9f64).prop_filter_map("finite floats only", |f| {
            Number::from_f64(f).map(serde_json::Value::Number)
        }),
    ]
}

fn arb_primitive() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        arb_number(),
        arb_string().prop_map(serde_json::Value::String),
    ]
}

fn arb_document(depth: u32) -> BoxedStrategy<serde_json::Value> {
    if depth == 0 {
        arb_primitive().boxed()
    } else {
        prop_oneof![
            3 => arb_primitive(),
            1 => prop::collection::vec(arb_document(depth - 1), 0..5)
                .prop_map(serde_json::Value::Array),
            1 => prop::collection::vec((arb_key(), arb_document(depth - 1)), 0..5).prop_map(
                |pairs| {
                    let mut map = Map::new();
                    for (k, v) in pairs {
                        map.insert(k, v);
                    }
                    serde_json::Value::Object(map)
                }
            ),
        ]
        .boxed()
    }
}

// ============================================================================
// Equivalence
// ============================================================================

fn equivalent(ours: &Value<'_>, reference: &serde_json::Value) -> bool {
    match (ours, reference) {
        (Value::Null, serde_json::Value::Null) => true,
        (Value::Bool(a), serde_json::Value::Bool(b)) => a == b,
        (Value::Number(a), serde_json::Value::Number(b)) => Some(*a) == b.as_f64(),
        (Value::String(a), serde_json::Value::String(b)) => a.as_ref() == b,
        (Value::Array(a), serde_json::Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equivalent(x, y))
        }
        (Value::Object(a), serde_json::Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, value)| {
                    b.get(key.as_ref()).is_some_and(|r| equivalent(value, r))
                })
        }
        _ => false,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any document the reference encoder can print, pluck parses to an
    /// equivalent tree.
    #[test]
    fn parse_agrees_with_reference(reference in arb_document(3)) {
        let text = serde_json::to_string(&reference).unwrap();
        let ours = parse(&text).unwrap();
        prop_assert!(
            equivalent(&ours, &reference),
            "trees differ for {text}\n  ours: {ours:?}"
        );
    }

    /// Pretty-printed form (extra structural whitespace) parses identically.
    #[test]
    fn whitespace_is_insignificant(reference in arb_document(2)) {
        let compact = serde_json::to_string(&reference).unwrap();
        let pretty = serde_json::to_string_pretty(&reference).unwrap();
        prop_assert_eq!(parse(&compact).unwrap(), parse(&pretty).unwrap());
    }

    /// Detaching a tree from its buffer never changes its contents.
    #[test]
    fn into_owned_preserves_the_tree(reference in arb_document(2)) {
        let text = serde_json::to_string(&reference).unwrap();
        let borrowed = parse(&text).unwrap();
        let owned = borrowed.clone().into_owned();
        prop_assert_eq!(borrowed, owned);
    }

    /// Parsing never panics on arbitrary input bytes, valid or not.
    #[test]
    fn parse_never_panics(input in "\\PC{0,64}") {
        let _ = parse(&input);
    }
}
