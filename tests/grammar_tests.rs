//! Wire grammar conformance: exact encodings, decoding of hand-written payloads, and the
//! behavior of both splitting strategies on payloads that carry grammar delimiters.

use serde::Serialize;
use serde_tagtext::{
    decode, decode_with_options, encode, encode_with_options, tagtext, to_string, Error, Map,
    Options, Splitting, Value,
};

fn roundtrip(value: &Value) -> Value {
    let text = encode(value).unwrap();
    decode(&text).unwrap()
}

#[test]
fn test_delimiter_free_tree_roundtrips() {
    let tree = tagtext!({
        "name": "Boot",
        "price": 450,
        "sizes": [40, 41, 42],
        "tags": [],
        "stock": { "warehouse": [{ "id": 1, "qty": 0 }], "empty": {} },
        "note": "plain text with spaces, commas. and dashes - fine"
    });
    assert_eq!(roundtrip(&tree), tree);

    for n in [0, 1, -1, i64::MAX, i64::MIN] {
        assert_eq!(roundtrip(&Value::Integer(n)), Value::Integer(n));
    }
}

#[test]
fn test_sequence_separator_exactness() {
    let seq = Value::Sequence(vec![Value::Integer(1), Value::Integer(2)]);
    assert_eq!(encode(&seq).unwrap(), "L:[int(1);int(2);]");
    assert_eq!(decode("L:[int(1);int(2);]").unwrap(), seq);
}

#[test]
fn test_empty_containers() {
    assert_eq!(encode(&Value::Sequence(vec![])).unwrap(), "L:[]");
    assert_eq!(encode(&Value::Mapping(Map::new())).unwrap(), "D:{}");
    assert_eq!(decode("L:[]").unwrap(), Value::Sequence(vec![]));
    assert_eq!(decode("D:{}").unwrap(), Value::Mapping(Map::new()));
}

#[test]
fn test_mapping_item_join() {
    let mut map = Map::new();
    map.insert("name", Value::from("Boot"));
    map.insert("price", Value::Integer(450));
    assert_eq!(
        encode(&Value::Mapping(map)).unwrap(),
        "D:{k:str(name):v:str(Boot); k:str(price):v:int(450)}"
    );
}

#[test]
fn test_three_level_nesting() {
    let mut inner = Map::new();
    inner.insert("id", Value::Integer(1));
    let mut outer = Map::new();
    outer.insert("items", Value::Sequence(vec![Value::Mapping(inner)]));
    let tree = Value::Mapping(outer);

    let text = encode(&tree).unwrap();
    assert_eq!(text, "D:{k:str(items):v:L:[D:{k:str(id):v:int(1)};]}");
    assert_eq!(decode(&text).unwrap(), tree);
}

#[test]
fn test_nested_multi_element_containers() {
    let tree = tagtext!({
        "rows": [[1, 2], [3, 4]],
        "pairs": [{ "a": 1, "b": 2 }, { "c": 3 }]
    });
    assert_eq!(roundtrip(&tree), tree);
}

// "a; b" carries the item separator. The default nested splitting never looks inside a
// `str(..)` payload, so it round-trips.
#[test]
fn test_item_separator_in_text_roundtrips_with_nested_splitting() {
    let tree = tagtext!({ "note": "a; b" });
    let text = encode(&tree).unwrap();
    assert_eq!(text, "D:{k:str(note):v:str(a; b)}");
    assert_eq!(decode(&text).unwrap(), tree);

    let options = Options::new().with_reject_ambiguous(true);
    assert!(encode_with_options(&tree, &options).is_ok());
}

// Known divergence: literal splitting cuts the mapping body at the "; " inside the text.
// The second half has no ":v:" marker, so the whole payload falls back to text.
#[test]
fn test_item_separator_in_text_diverges_with_literal_splitting() {
    let tree = tagtext!({ "note": "a; b" });
    let options = Options::legacy();
    let text = encode_with_options(&tree, &options).unwrap();

    let decoded = decode_with_options(&text, &options).unwrap();
    assert_ne!(decoded, tree);
    assert_eq!(decoded, Value::Text(text.clone()));

    let strict = Options::legacy().with_strict(true);
    assert_eq!(
        decode_with_options(&text, &strict),
        Err(Error::malformed_structure("str(a"))
    );

    let guarded = Options::legacy().with_reject_ambiguous(true);
    assert_eq!(
        encode_with_options(&tree, &guarded),
        Err(Error::ambiguous_delimiter("a; b"))
    );
}

// Known divergence under both strategies: `)` ends a leaf payload early.
#[test]
fn test_closing_paren_in_text_is_flagged() {
    let tree = Value::Sequence(vec![Value::from("a);b"), Value::Integer(1)]);
    let text = encode(&tree).unwrap();
    assert_eq!(text, "L:[str(a);b);int(1);]");
    assert_eq!(
        decode(&text).unwrap(),
        Value::Sequence(vec![Value::from("a"), Value::from("b)"), Value::Integer(1)])
    );

    let options = Options::new().with_reject_ambiguous(true);
    assert_eq!(
        encode_with_options(&tree, &options),
        Err(Error::ambiguous_delimiter("a);b"))
    );
}

// Literal splitting breaks nested containers whatever their text holds, and distinct keys
// can share one text form. The hardened options refuse both instead of losing data.
#[test]
fn test_hardened_options_refuse_lossy_trees() {
    let rows = tagtext!([[1, 2]]);
    let guarded = Options::legacy().with_reject_ambiguous(true);
    let text = encode_with_options(&rows, &Options::legacy()).unwrap();
    assert_ne!(decode_with_options(&text, &Options::legacy()).unwrap(), rows);
    assert!(matches!(
        encode_with_options(&rows, &guarded),
        Err(Error::AmbiguousDelimiter { .. })
    ));

    let colliding = tagtext!({ 1: "a", "1": "b" });
    let text = encode(&colliding).unwrap();
    assert_eq!(decode(&text).unwrap(), tagtext!({ "1": "b" }));
    assert_eq!(
        encode_with_options(&colliding, &Options::strict()),
        Err(Error::ambiguous_delimiter("1"))
    );
    assert!(decode_with_options(&text, &Options::strict()).is_err());
}

#[test]
fn test_malformed_integer() {
    assert_eq!(decode("int(abc)"), Err(Error::malformed_integer("abc")));
    assert_eq!(decode("int()"), Err(Error::malformed_integer("")));
    assert_eq!(
        decode("L:[int(1);int(x);]"),
        Err(Error::malformed_integer("x"))
    );
    assert_eq!(
        decode("int(99999999999999999999)"),
        Err(Error::malformed_integer("99999999999999999999"))
    );
}

#[test]
fn test_unsupported_type_at_encode() {
    #[derive(Serialize)]
    struct Reading {
        sensor: String,
        celsius: f64,
    }

    let reading = Reading {
        sensor: "porch".to_string(),
        celsius: 21.5,
    };
    assert!(matches!(
        to_string(&reading),
        Err(Error::UnsupportedType(_))
    ));
    assert!(matches!(to_string(&true), Err(Error::UnsupportedType(_))));
    assert!(matches!(to_string(&()), Err(Error::UnsupportedType(_))));
    assert!(matches!(
        to_string(&u64::MAX),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_non_text_keys_are_coerced() {
    let mut map = Map::new();
    map.insert(7, "seven");
    let tree = Value::Mapping(map);
    let text = encode(&tree).unwrap();
    assert_eq!(text, "D:{k:str(7):v:str(seven)}");

    // The key comes back as text
    assert_eq!(decode(&text).unwrap(), tagtext!({ "7": "seven" }));
}

#[test]
fn test_untagged_input_is_permissive_by_default() {
    assert_eq!(decode("hello").unwrap(), Value::from("hello"));
    assert_eq!(decode("").unwrap(), Value::from(""));
    assert_eq!(decode("L:[int(1)").unwrap(), Value::from("L:[int(1)"));

    let strict = Options::strict();
    assert_eq!(
        decode_with_options("hello", &strict),
        Err(Error::malformed_structure("hello"))
    );
    assert_eq!(
        decode_with_options("L:[int(1);nope;]", &strict),
        Err(Error::malformed_structure("nope"))
    );
    // Keys keep their permissive decoding
    assert_eq!(
        decode_with_options("D:{k:str(id):v:int(1)}", &strict).unwrap(),
        tagtext!({ "id": 1 })
    );
}

#[test]
fn test_depth_is_bounded_both_ways() {
    let mut deep = Value::Integer(0);
    for _ in 0..10 {
        deep = Value::Sequence(vec![deep]);
    }
    let options = Options::new().with_max_depth(5);
    assert_eq!(
        encode_with_options(&deep, &options),
        Err(Error::depth_exceeded(5))
    );

    let text = encode(&deep).unwrap();
    assert_eq!(
        decode_with_options(&text, &options),
        Err(Error::depth_exceeded(5))
    );
    assert_eq!(decode(&text).unwrap(), deep);
}

#[test]
fn test_default_depth_guards_deep_payloads() {
    let depth = 10_000;
    let text = format!("{}]{}", "L:[".repeat(depth), ";]".repeat(depth - 1));
    assert!(matches!(decode(&text), Err(Error::DepthExceeded { .. })));
}

#[test]
fn test_literal_splitting_matches_nested_on_flat_trees() {
    let flat = tagtext!({ "name": "Boot", "sizes": [40, 41], "price": 450 });
    let options = Options::new().with_splitting(Splitting::Literal);
    let text = encode_with_options(&flat, &options).unwrap();
    assert_eq!(decode_with_options(&text, &options).unwrap(), flat);
    assert_eq!(text, encode(&flat).unwrap());
}
