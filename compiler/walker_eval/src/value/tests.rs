#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use super::*;
use crate::source::Sources;

fn text(v: &Value) -> String {
    let mut v = v.clone();
    v.take_text().to_string_lossy()
}

mod stringify {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_numbers_print_as_integers() {
        assert_eq!(text(&Value::Number(42.0)), "42");
        assert_eq!(text(&Value::Number(-7.0)), "-7");
    }

    #[test]
    fn fractional_numbers_print_fixed_point() {
        assert_eq!(text(&Value::Number(2.5)), "2.500000");
        assert_eq!(text(&Value::Number(1e300)).len(), 308);
    }

    #[test]
    fn scalars() {
        assert_eq!(text(&Value::Integer(-3)), "-3");
        assert_eq!(text(&Value::UInteger(u64::MAX)), "18446744073709551615");
        assert_eq!(text(&Value::Boolean(true)), "1");
        assert_eq!(text(&Value::Boolean(false)), "0");
        assert_eq!(text(&Value::None), "");
    }

    #[test]
    fn array_is_destroyed() {
        let mut v = Value::array([Value::from("a"), Value::from("b")]);
        v.stringify();
        assert_eq!(v, Value::string(""));
    }

    #[test]
    fn code_values_become_empty() {
        let mut sources = Sources::new();
        let at = crate::source::CodePtr::start(sources.load(b"{x}"));
        for v in [Value::Function(at), Value::Expression(at), Value::Macro(at)] {
            assert_eq!(text(&v), "");
        }
    }

    #[test]
    fn error_keeps_its_text() {
        let mut v = Value::error("bad");
        v.stringify();
        assert_eq!(v, Value::string("bad"));
    }

    #[test]
    fn edit_text_stringifies_first() {
        let mut v = Value::Number(3.0);
        v.edit_text(|text| text.push(b'!'));
        assert_eq!(v, Value::string("3!"));

        let mut v = Value::string("ab");
        v.edit_text(|text| text.push_bytes(b"cd"));
        assert_eq!(v, Value::string("abcd"));

        let mut v = Value::None;
        v.edit_text(|text| text.push(b'x'));
        assert_eq!(v, Value::string("x"));
    }

    #[test]
    fn is_idempotent() {
        let mut v = Value::Number(3.25);
        v.stringify();
        let once = v.clone();
        v.stringify();
        assert_eq!(v, once);
    }
}

mod coercion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_from_text() {
        assert_eq!(Value::from("12.5").to_number(), 12.5);
        assert_eq!(Value::from("abc").to_number(), 0.0);
        assert_eq!(Value::from("abc").parse_number(), None);
        assert_eq!(Value::Boolean(true).to_number(), 1.0);
        assert_eq!(Value::None.parse_number(), Some(0.0));
    }

    #[test]
    fn unsigned_selector() {
        assert_eq!(Value::from("2").parse_unsigned(), Some(2));
        assert_eq!(Value::from("-2").parse_unsigned(), None);
        assert_eq!(Value::from("length").parse_unsigned(), None);
        assert_eq!(Value::Number(1.0).parse_unsigned(), Some(1));
        assert_eq!(Value::Number(-1.0).parse_unsigned(), None);
        assert_eq!(Value::Integer(-1).parse_unsigned(), None);
    }

    #[test]
    fn integers_truncate() {
        assert_eq!(Value::Number(2.9).to_integer(), 2);
        assert_eq!(Value::from("0x10").to_integer(), 16);
        assert_eq!(Value::from("2.5").to_integer(), 0);
    }

    #[test]
    fn truthiness_of_text() {
        assert!(!Value::from("").to_boolean());
        assert!(!Value::from("  \t").to_boolean());
        assert!(!Value::from("0").to_boolean());
        assert!(!Value::from("0.0").to_boolean());
        assert!(Value::from("1").to_boolean());
        assert!(Value::from("abc").to_boolean());
        assert!(Value::from("0abc").to_boolean());
    }

    #[test]
    fn truthiness_of_other_kinds() {
        assert!(!Value::None.to_boolean());
        assert!(Value::array([]).to_boolean());
        assert!(Value::error("").to_boolean());
        assert!(!Value::Integer(0).to_boolean());
        assert!(Value::UInteger(5).to_boolean());
    }

    #[test]
    fn into_error_marks_once() {
        assert_eq!(Value::Integer(5).into_error(), Value::error("5"));
        assert_eq!(Value::error("x").into_error(), Value::error("x"));
    }
}

mod list {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capacity_doubles_from_eight() {
        let mut list = List::new();
        list.push(Value::None);
        assert_eq!(list.capacity(), 8);
        for _ in 0..8 {
            list.push(Value::None);
        }
        assert_eq!(list.capacity(), 16);
    }

    #[test]
    fn capacity_halves_below_quarter() {
        let mut list: List = (0..32).map(Value::Integer).collect();
        let full = list.capacity();
        while list.len() >= full / 4 {
            list.remove(0);
        }
        assert!(list.capacity() <= full / 2);
        assert!(list.capacity() >= 8);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut list = List::new();
        assert!(list.insert(0, Value::Integer(1)));
        assert!(!list.insert(5, Value::Integer(2)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_out_of_range() {
        let mut list: List = [Value::Integer(1)].into_iter().collect();
        assert_eq!(list.remove(3), None);
        assert_eq!(list.remove(0), Some(Value::Integer(1)));
        assert!(list.is_empty());
    }
}

fn any_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::None),
        "[a-z0-9 ]{0,12}".prop_map(|s| Value::string(s.as_str())),
        any::<f64>().prop_map(Value::Number),
        any::<i64>().prop_map(Value::Integer),
        any::<u64>().prop_map(Value::UInteger),
        any::<bool>().prop_map(Value::Boolean),
        "[a-z]{0,8}".prop_map(|s| Value::error(s.as_str())),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Value::array)
    })
}

proptest! {
    #[test]
    fn copy_survives_clearing_original(v in any_value()) {
        let mut original = v.clone();
        let copy = original.clone();
        original.clear();
        prop_assert!(original.is_none());
        // NaN breaks PartialEq; compare renderings instead
        prop_assert_eq!(format!("{copy:?}"), format!("{v:?}"));
    }

    #[test]
    fn clear_is_idempotent(v in any_value()) {
        let mut v = v;
        v.clear();
        v.clear();
        prop_assert!(v.is_none());
    }

    #[test]
    fn stringify_is_idempotent(v in any_value()) {
        let mut v = v;
        v.stringify();
        let once = format!("{v:?}");
        v.stringify();
        prop_assert_eq!(format!("{v:?}"), once);
        prop_assert!(matches!(v, Value::String(_)));
    }
}

mod compare {
    use std::cmp::Ordering;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_when_both_sides_parse() {
        assert_eq!(Value::from("10").compare(&Value::from("9")), Some(Ordering::Greater));
        assert_eq!(Value::from("1").compare(&Value::Number(1.0)), Some(Ordering::Equal));
        assert_eq!(Value::Boolean(true).compare(&Value::Integer(1)), Some(Ordering::Equal));
    }

    #[test]
    fn bytes_otherwise() {
        assert_eq!(Value::from("10").compare(&Value::from("9a")), Some(Ordering::Less));
        assert_eq!(Value::from("abc").compare(&Value::from("abc")), Some(Ordering::Equal));
        assert_eq!(Value::None.compare(&Value::from("")), Some(Ordering::Equal));
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(Value::Number(f64::NAN).compare(&Value::Number(1.0)), None);
    }
}
