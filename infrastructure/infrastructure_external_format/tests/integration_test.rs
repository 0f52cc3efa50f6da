//! Integration tests for infrastructure_external_format crate
//!
//! Exercises the public decode / encode pair end to end: exact byte
//! layouts, boundary choices, error reporting and round-trip properties.

use entities_term::tags::*;
use entities_term::{Atom, Export, Integer, Pid, Port, Reference, Term};
use infrastructure_external_format::*;
use proptest::prelude::*;

#[test]
fn test_known_byte_layouts() {
    assert_eq!(encode(&Term::from(0)).unwrap(), vec![131, 97, 0]);
    assert_eq!(decode(&[131, 97, 0]).unwrap(), Term::from(0));

    let true_bytes = vec![131, 100, 0, 4, b't', b'r', b'u', b'e'];
    assert_eq!(encode(&Term::from(true)).unwrap(), true_bytes);
    assert_eq!(decode(&true_bytes).unwrap(), Term::from(true));

    assert_eq!(encode(&Term::tuple(vec![])).unwrap(), vec![131, 104, 0]);
    assert_eq!(encode(&Term::nil()).unwrap(), vec![131, 106]);
    assert_eq!(
        encode(&Term::binary(b"hello".to_vec())).unwrap(),
        vec![131, 109, 0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o']
    );
}

#[test]
fn test_integer_boundaries() {
    let tag_of = |value: i64| encode(&Term::from(value)).unwrap()[1];
    assert_eq!(tag_of(255), SMALL_INTEGER_EXT);
    assert_eq!(tag_of(256), INTEGER_EXT);
    assert_eq!(tag_of((1 << 31) - 1), INTEGER_EXT);
    assert_eq!(tag_of(1 << 31), SMALL_BIG_EXT);
    assert_eq!(tag_of(-1), INTEGER_EXT);

    for value in [255i64, 256, (1 << 31) - 1, 1 << 31, -1, -(1 << 31) - 1] {
        let bytes = encode(&Term::from(value)).unwrap();
        assert_eq!(decode(&bytes).unwrap(), Term::from(value));
    }
}

#[test]
fn test_large_big_round_trip() {
    let value = -(Integer::from(3) << 3000u64);
    let bytes = encode(&Term::Integer(value.clone())).unwrap();
    assert_eq!(bytes[1], LARGE_BIG_EXT);
    assert_eq!(bytes[6], 1);
    assert_eq!(decode(&bytes).unwrap(), Term::Integer(value));
}

#[test]
fn test_tuple_arity_boundary() {
    let small = encode(&Term::tuple(vec![Term::from(1); 255])).unwrap();
    assert_eq!(&small[1..3], &[SMALL_TUPLE_EXT, 255]);

    let large = encode(&Term::tuple(vec![Term::from(1); 256])).unwrap();
    assert_eq!(&large[1..6], &[LARGE_TUPLE_EXT, 0, 0, 1, 0]);
    assert_eq!(decode(&large).unwrap(), Term::tuple(vec![Term::from(1); 256]));
}

#[test]
fn test_improper_list_rejected() {
    // [a | b] with the tail written where NIL_EXT belongs
    let data = [
        131, 108, 0, 0, 0, 1, 115, 1, b'a', 115, 1, b'b',
    ];
    assert_eq!(decode(&data), Err(DecodeError::ImproperList { offset: 9 }));
}

#[test]
fn test_unknown_tag_reports_byte_and_offset() {
    let data = [131, 108, 0, 0, 0, 2, 97, 1, 77, 0, 106];
    assert_eq!(
        decode(&data),
        Err(DecodeError::UnsupportedTag { tag: 77, offset: 8 })
    );
}

#[test]
fn test_export_as_only_term() {
    let export = Term::Export(Export::new("lists", "map", 2));
    let bytes = encode(&export).unwrap();
    let (term, consumed) = Decoder::new().decode_with_len(&bytes).unwrap();
    assert_eq!(term, export);
    assert_eq!(consumed, bytes.len());
}

#[test]
fn test_export_followed_by_sibling() {
    let term = Term::tuple(vec![
        Term::Export(Export::new("erlang", "self", 0)),
        Term::atom("after"),
        Term::from(7),
    ]);
    let bytes = encode(&term).unwrap();
    assert_eq!(decode(&bytes).unwrap(), term);
}

#[test]
fn test_export_module_must_be_atom() {
    let data = [131, 113, 109, 0, 0, 0, 1, b'm', 115, 1, b'f', 97, 0];
    assert_eq!(
        decode(&data),
        Err(DecodeError::TypeMismatch {
            context: "export module",
            expected: "atom",
            found: "BINARY_EXT".to_string(),
            offset: 2
        })
    );
}

#[test]
fn test_identifiers_round_trip() {
    let terms = [
        Term::Pid(Pid::new("node@host", 38, 0, 2)),
        Term::Port(Port::new("node@host", 5, 1)),
        Term::Reference(Reference::new("node@host", vec![1, 2, 3], 1).unwrap()),
        Term::Export(Export::new("m", "f", 255)),
    ];
    for term in terms {
        let bytes = encode(&term).unwrap();
        assert_eq!(decode(&bytes).unwrap(), term);
    }
}

#[test]
fn test_legacy_float_without_nul() {
    let mut data = vec![131, FLOAT_EXT];
    data.extend_from_slice(b"2.5000000000000000000000000e+00");
    assert_eq!(data.len(), 2 + 31);
    assert_eq!(decode(&data).unwrap(), Term::Float(2.5));
}

#[test]
fn test_new_float_decodes() {
    let mut data = vec![131, NEW_FLOAT_EXT];
    data.extend_from_slice(&std::f64::consts::PI.to_be_bytes());
    assert_eq!(decode(&data).unwrap(), Term::Float(std::f64::consts::PI));
}

#[test]
fn test_float_round_trip_is_exact() {
    for value in [0.1, -1.0 / 3.0, 1e-310, f64::MAX, f64::MIN_POSITIVE, 123456.789] {
        let bytes = encode(&Term::Float(value)).unwrap();
        assert_eq!(bytes[1], FLOAT_EXT);
        assert_eq!(decode(&bytes).unwrap(), Term::Float(value));
    }
}

#[test]
fn test_truncated_input() {
    // binary declares 10 bytes, 3 present
    let data = [131, 109, 0, 0, 0, 10, 1, 2, 3];
    assert_eq!(
        decode(&data),
        Err(DecodeError::Truncated {
            offset: 6,
            needed: 10,
            available: 3
        })
    );

    // list declares 4 billion elements
    let data = [131, 108, 0xFF, 0xFF, 0xFF, 0xFF, 97, 1];
    assert!(matches!(decode(&data), Err(DecodeError::Truncated { offset: 8, .. })));
}

#[test]
fn test_nesting_limit() {
    let depth = DEFAULT_MAX_DEPTH;
    let mut data = vec![131];
    for _ in 0..depth {
        data.extend_from_slice(&[SMALL_TUPLE_EXT, 1]);
    }
    data.push(NIL_EXT);
    let term = decode(&data).unwrap();
    // dropping a deeply nested value recurses; keep it off the test stack
    std::mem::forget(term);

    let mut deeper = vec![131];
    for _ in 0..=depth {
        deeper.extend_from_slice(&[LIST_EXT, 0, 0, 0, 1]);
    }
    deeper.push(NIL_EXT);
    assert_eq!(
        decode(&deeper),
        Err(DecodeError::NestingTooDeep {
            limit: depth,
            offset: 1 + 5 * depth
        })
    );
}

#[test]
fn test_deep_input_without_limit_does_not_overflow() {
    let depth = 200_000;
    let config = DecoderConfig::default().with_max_depth(usize::MAX);
    let mut data = vec![131];
    for _ in 0..depth {
        data.extend_from_slice(&[SMALL_TUPLE_EXT, 1]);
    }
    data.push(NIL_EXT);
    let term = Decoder::with_config(config).decode(&data).unwrap();
    assert!(matches!(term, Term::Tuple(_)));
    std::mem::forget(term);
}

#[test]
fn test_text_round_trip_through_string_mode() {
    let encoder = Encoder::with_config(EncoderConfig::from_names(Some("utf-8"), "string").unwrap());
    let decoder = Decoder::with_config(DecoderConfig::from_names(Some("utf-8")).unwrap());
    for text in ["", "hello", "grüße ☃"] {
        let bytes = encoder.encode(&Term::from(text)).unwrap();
        assert_eq!(bytes[1], STRING_EXT);
        assert_eq!(decoder.decode(&bytes).unwrap(), Term::from(text));
    }
}

#[test]
fn test_text_without_decoder_codec_is_char_list() {
    let bytes = Encoder::with_config(EncoderConfig::from_names(Some("latin-1"), "string").unwrap())
        .encode(&Term::from("ü"))
        .unwrap();
    assert_eq!(decode(&bytes).unwrap(), Term::char_list(vec![0xFC]));

    let utf8 = Decoder::with_config(DecoderConfig::from_names(Some("utf-8")).unwrap());
    assert_eq!(utf8.decode(&bytes).unwrap(), Term::char_list(vec![0xFC]));

    let latin1 = Decoder::with_config(DecoderConfig::from_names(Some("latin-1")).unwrap());
    assert_eq!(latin1.decode(&bytes).unwrap(), Term::from("ü"));
}

#[test]
fn test_long_char_list_decodes_as_integer_list() {
    let bytes = encode(&Term::char_list(vec![b'x'; 70_000])).unwrap();
    assert_eq!(bytes[1], LIST_EXT);
    assert_eq!(
        decode(&bytes).unwrap(),
        Term::list(vec![Term::from(b'x'); 70_000])
    );

    let short = encode(&Term::char_list(vec![b'x'; 65_535])).unwrap();
    assert_eq!(decode(&short).unwrap(), Term::char_list(vec![b'x'; 65_535]));
}

#[test]
fn test_reference_round_trip_needs_id_words() {
    let zero_words = [131, NEW_REFERENCE_EXT, 0, 0, SMALL_ATOM_EXT, 1, b'n', 0];
    assert!(matches!(
        decode(&zero_words),
        Err(DecodeError::TypeMismatch { context: "reference id", offset: 2, .. })
    ));

    let one_word = [131, NEW_REFERENCE_EXT, 0, 1, SMALL_ATOM_EXT, 1, b'n', 0, 0, 0, 0, 9];
    let term = decode(&one_word).unwrap();
    assert_eq!(term, Term::Reference(Reference::new("n", vec![9], 0).unwrap()));
    assert_eq!(decode(&encode(&term).unwrap()).unwrap(), term);
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        EncoderConfig::from_names(Some("utf-8"), "text"),
        Err(ConfigError::UnknownTextMode("text".to_string()))
    );
    assert!(matches!(
        EncoderConfig::from_names(Some("klingon"), "binary"),
        Err(ConfigError::UnknownTextCodec(_))
    ));
    let as_encode_error: EncodeError = ConfigError::UnknownTextMode("text".to_string()).into();
    assert!(matches!(as_encode_error, EncodeError::Configuration(_)));
}

#[test]
fn test_unsupported_values() {
    assert!(matches!(
        encode(&Term::Float(f64::INFINITY)),
        Err(EncodeError::UnsupportedValue { kind: "float", .. })
    ));
    let long_atom = Term::Atom(Atom::new(vec![b'a'; 70_000]));
    assert!(matches!(
        encode(&long_atom),
        Err(EncodeError::UnsupportedValue { kind: "atom", .. })
    ));
    let long_string = Encoder::with_config(EncoderConfig::from_names(Some("utf-8"), "string").unwrap())
        .encode(&Term::from("x".repeat(70_000)));
    assert!(matches!(
        long_string,
        Err(EncodeError::UnsupportedValue { kind: "text", .. })
    ));
}

#[test]
fn test_decode_term_at_is_reentrant() {
    let mut buf = Vec::new();
    let encoder = Encoder::new();
    encoder.encode_into(&Term::from(1), &mut buf).unwrap();
    encoder.encode_into(&Term::atom("two"), &mut buf).unwrap();

    let decoder = Decoder::new();
    let (first, end) = decoder.decode_term_at(&buf, 1).unwrap();
    assert_eq!(first, Term::from(1));
    assert_eq!(buf[end], VERSION_MAGIC);
    let (second, end) = decoder.decode_term_at(&buf, end + 1).unwrap();
    assert_eq!(second, Term::atom("two"));
    assert_eq!(end, buf.len());
}

fn atom_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_@]{0,12}".prop_filter("boolean atom names decode as booleans", |name| {
        name != "true" && name != "false"
    })
}

fn leaf() -> impl Strategy<Value = Term> {
    prop_oneof![
        any::<bool>().prop_map(Term::Boolean),
        prop_oneof![
            any::<i32>().prop_map(Term::from),
            any::<i128>().prop_map(Term::from),
        ],
        any::<f64>()
            .prop_filter("finite", |value| value.is_finite())
            .prop_map(Term::Float),
        atom_name().prop_map(|name| Term::atom(name)),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Term::Binary),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Term::CharList),
        (atom_name(), any::<u32>(), any::<u32>(), any::<u8>())
            .prop_map(|(node, id, serial, creation)| Term::Pid(Pid::new(node, id, serial, creation))),
        (atom_name(), any::<u32>(), any::<u8>())
            .prop_map(|(node, id, creation)| Term::Port(Port::new(node, id, creation))),
        (atom_name(), prop::collection::vec(any::<u32>(), 1..5), any::<u8>()).prop_map(
            |(node, id, creation)| Term::Reference(Reference {
                node: Atom::from(node),
                id,
                creation,
            })
        ),
        (atom_name(), atom_name(), any::<u8>())
            .prop_map(|(module, function, arity)| Term::Export(Export::new(module, function, arity))),
    ]
}

fn term() -> impl Strategy<Value = Term> {
    leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Term::List),
            prop::collection::vec(inner, 0..8).prop_map(Term::Tuple),
        ]
    })
}

proptest! {
    #[test]
    fn prop_round_trip(term in term()) {
        let bytes = encode(&term).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), term);
    }

    #[test]
    fn prop_idempotent_parse(term in term()) {
        let bytes = encode(&term).unwrap();
        let decoder = Decoder::new();
        let first = decoder.decode_with_len(&bytes).unwrap();
        let second = decoder.decode_with_len(&bytes).unwrap();
        prop_assert_eq!(first.1, bytes.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_encoded_size_matches(term in term()) {
        let config = EncoderConfig::default();
        let bytes = Encoder::with_config(config).encode(&term).unwrap();
        prop_assert_eq!(encoded_size(&term, &config).unwrap(), bytes.len());
    }

    #[test]
    fn prop_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut input = vec![VERSION_MAGIC];
        input.extend_from_slice(&data);
        let _ = decode(&input);
    }
}
