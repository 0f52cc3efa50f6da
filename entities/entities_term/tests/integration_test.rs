//! Integration tests for entities_term crate
//!
//! Checks the public value model and tag registry as seen by the codec
//! crates.

use entities_term::tags::*;
use entities_term::*;

#[test]
fn test_registry_values_are_wire_exact() {
    let expected = [
        (VERSION_MAGIC, 131),
        (SMALL_INTEGER_EXT, 97),
        (INTEGER_EXT, 98),
        (FLOAT_EXT, 99),
        (NEW_FLOAT_EXT, 70),
        (ATOM_EXT, 100),
        (SMALL_ATOM_EXT, 115),
        (SMALL_TUPLE_EXT, 104),
        (LARGE_TUPLE_EXT, 105),
        (NIL_EXT, 106),
        (STRING_EXT, 107),
        (LIST_EXT, 108),
        (BINARY_EXT, 109),
        (SMALL_BIG_EXT, 110),
        (LARGE_BIG_EXT, 111),
        (REFERENCE_EXT, 101),
        (NEW_REFERENCE_EXT, 114),
        (PORT_EXT, 102),
        (PID_EXT, 103),
        (EXPORT_EXT, 113),
    ];
    for (constant, value) in expected {
        assert_eq!(constant, value);
    }
}

#[test]
fn test_every_registered_tag_has_a_name() {
    let registered: Vec<u8> = (0..=u8::MAX).filter(|&tag| tag_name(tag).is_some()).collect();
    assert_eq!(registered.len(), 19);
    assert!(!registered.contains(&VERSION_MAGIC));
    assert_eq!(tag_name(EXPORT_EXT), Some("EXPORT_EXT"));
}

#[test]
fn test_build_nested_term() {
    let pid = Pid::new("worker@host", 12, 0, 1);
    let reply = Term::tuple(vec![
        Term::atom("reply"),
        Term::from(pid.clone()),
        Term::list(vec![Term::from(1), Term::from(Integer::from(u64::MAX) * Integer::from(4))]),
    ]);

    match &reply {
        Term::Tuple(items) => {
            assert_eq!(items.len(), 3);
            assert_eq!(items[0].as_atom().map(|a| a.as_bytes()), Some(&b"reply"[..]));
            assert_eq!(items[1], Term::Pid(pid));
            assert_eq!(items[2].kind(), "list");
        }
        other => panic!("expected tuple, got {other:?}"),
    }
}

#[test]
fn test_atom_preserves_non_utf8_name() {
    let atom = Atom::new(vec![b'c', 0xE9]);
    assert_eq!(atom.len(), 2);
    assert_eq!(atom.as_str(), None);
    assert_eq!(atom.to_string(), "c\u{FFFD}");
    assert_eq!(atom.clone().into_bytes(), vec![b'c', 0xE9]);
}

#[test]
fn test_reference_shapes() {
    let single = Reference::new("n@h", vec![7], 0).unwrap();
    let multi = Reference::new("n@h", vec![7, 0, 0], 0).unwrap();
    assert_ne!(single, multi);
    assert!(Reference::new("n@h", Vec::new(), 0).is_none());
}
