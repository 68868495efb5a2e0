use std::cell::Cell;
use std::collections::BTreeMap;

use rfunc::{Absent, DynamicMaybe, DynamicSeq, Error, Maybe, Present, Seq, Value};
use rstest::rstest;

fn int(i: i64) -> Value {
    Value::from(i)
}

fn ints(items: &[i64]) -> Seq<Value> {
    items.iter().map(|i| int(*i)).collect()
}

#[rstest]
#[case(int(1))]
#[case(Value::from("a"))]
#[case(Value::from(false))]
#[case(Value::from(vec![1, 2]))]
fn test_of_value_non_null(#[case] value: Value) {
    assert_eq!(Maybe::of_value(value.clone()), Present(value));
}

#[test]
fn test_of_value_null() {
    assert_eq!(Maybe::of_value(Value::Null), Absent);
}

#[test]
fn test_try_present() {
    assert_eq!(Maybe::try_present(int(1)), Ok(Present(int(1))));
    assert!(matches!(
        Maybe::try_present(Value::Null),
        Err(Error::InvalidConstruction { .. })
    ));
}

#[test]
fn test_flat_map_value_present() {
    let result = Present(int(1))
        .flat_map_value(|v| match v {
            Value::Integer(i) => Value::from(Present(int(i + i))),
            _ => unreachable!(),
        })
        .unwrap();
    assert_eq!(result, Present(int(2)));

    let result = Present(int(1))
        .flat_map_value(|_| Value::from(Maybe::<Value>::Absent))
        .unwrap();
    assert_eq!(result, Absent);
}

#[test]
fn test_flat_map_value_rejects_unwrapped_result() {
    let result = Present(int(1)).flat_map_value(|v| match v {
        Value::Integer(i) => int(i + i),
        _ => unreachable!(),
    });
    let error = result.unwrap_err();
    assert_eq!(
        error,
        Error::InvalidReturnType {
            value: "2".to_string(),
            expected: "Maybe",
        }
    );
    insta::assert_snapshot!(error, @"invalid return type 2, expected Maybe");
}

#[test]
fn test_flat_map_value_absent_does_not_call() {
    let calls = Cell::new(0);
    let result = Maybe::<Value>::Absent.flat_map_value(|v| {
        calls.set(calls.get() + 1);
        v
    });
    assert_eq!(result, Ok(Absent));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_or_else_value() {
    let present = Present(int(1))
        .or_else_value(Value::from(Present(int(2))))
        .unwrap();
    assert_eq!(present.get(), int(1));

    let absent = Maybe::<Value>::Absent
        .or_else_value(Value::from(Present(int(2))))
        .unwrap();
    assert_eq!(absent.get(), int(2));

    assert!(matches!(
        Maybe::<Value>::Absent.or_else_value(int(2)),
        Err(Error::InvalidReturnType { .. })
    ));
}

#[test]
fn test_or_else_value_only_checks_when_absent() {
    // the alternative is never looked at for a present value
    assert_eq!(Present(int(1)).or_else_value(int(2)), Ok(Present(int(1))));
}

#[test]
fn test_or_else_value_with_is_lazy() {
    let calls = Cell::new(0);
    let result = Present(int(1)).or_else_value_with(|| {
        calls.set(calls.get() + 1);
        int(2)
    });
    assert_eq!(result, Ok(Present(int(1))));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_flatten_value() {
    let nested = Present(Value::from(Present(int(1))));
    assert_eq!(nested.flatten_value(), Ok(Present(int(1))));
    let nested_absent = Present(Value::from(Maybe::<Value>::Absent));
    assert_eq!(nested_absent.flatten_value(), Ok(Absent));
    assert_eq!(Maybe::<Value>::Absent.flatten_value(), Ok(Absent));
    assert_eq!(Present(int(3)).flatten_value(), Ok(Present(int(3))));
}

fn present_null() -> Value {
    Value::from(Present(Value::Null))
}

fn is_present_construction_error(result: rfunc::Result<Maybe<Value>>) -> bool {
    matches!(
        result,
        Err(Error::InvalidConstruction {
            target: "Present",
            ..
        })
    )
}

#[test]
fn test_flat_map_value_refuses_present_null() {
    let result = Present(int(1)).flat_map_value(|_| present_null());
    assert!(is_present_construction_error(result));
}

#[test]
fn test_or_else_value_refuses_present_null() {
    assert!(is_present_construction_error(
        Maybe::<Value>::Absent.or_else_value(present_null())
    ));
    assert!(is_present_construction_error(
        Maybe::<Value>::Absent.or_else_value_with(present_null)
    ));
}

#[test]
fn test_flatten_value_refuses_present_null() {
    let error = Present(present_null()).flatten_value().unwrap_err();
    insta::assert_snapshot!(error, @"Present cannot be constructed from null");
}

#[test]
fn test_collect_value() {
    let collect = |maybe: Maybe<Value>| {
        maybe.collect_value(|v| match v {
            Value::Integer(i) if i > 2 => int(i * 100),
            _ => Value::Null,
        })
    };
    assert_eq!(collect(Absent), Absent);
    assert_eq!(collect(Present(int(2))), Absent);
    assert_eq!(collect(Present(int(3))), Present(int(300)));
}

#[test]
fn test_seq_construction() {
    assert_eq!(Seq::try_of(Value::from(vec![1, 2, 3])), Ok(ints(&[1, 2, 3])));
    assert_eq!(Seq::try_from(Value::from(ints(&[1]))), Ok(ints(&[1])));
    let error = Seq::try_of(Value::Map(BTreeMap::new())).unwrap_err();
    assert_eq!(error.code(), "RF0001");
    insta::assert_snapshot!(error, @"Seq cannot be constructed from {}");
}

#[rstest]
#[case(Value::Null)]
#[case(int(1))]
#[case(Value::from("abc"))]
#[case(Value::from(Present(int(1))))]
fn test_seq_construction_rejects(#[case] value: Value) {
    assert!(matches!(
        Seq::try_of(value),
        Err(Error::InvalidConstruction { target: "Seq", .. })
    ));
}

#[test]
fn test_concat_value() {
    let seq = ints(&[1, 2, 3]);
    assert_eq!(
        seq.concat_value(Value::from(vec![4, 5, 6])).unwrap().members(),
        ints(&[1, 2, 3, 4, 5, 6]).members()
    );
    assert_eq!(seq.concat_value(Value::from(Seq::<Value>::new())).unwrap(), seq);
    assert!(seq.concat_value(int(4)).is_err());
}

#[test]
fn test_flat_map_value() {
    let seq = ints(&[1, 2]);
    let result = seq
        .flat_map_value(|v| match v {
            Value::Integer(i) => Value::from(vec![*i, i * 10]),
            _ => unreachable!(),
        })
        .unwrap();
    assert_eq!(result, ints(&[1, 10, 2, 20]));
}

#[test]
fn test_collect_first_value() {
    let seq = ints(&[1, 2, 3]);
    let pick = |target: i64| {
        seq.collect_first_value(|v| match v {
            Value::Integer(i) if *i == target => int(i * 100),
            _ => Value::Null,
        })
    };
    assert_eq!(pick(2), Present(int(200)));
    assert_eq!(pick(222), Absent);
}

#[test]
fn test_collect_value_drops_null() {
    let seq = ints(&[1, 2, 3]);
    let result = seq.collect_value(|v| match v {
        Value::Integer(2) => int(8),
        _ => Value::Null,
    });
    assert_eq!(result, ints(&[8]));
}

#[test]
fn test_value_seq_is_sortable_and_joinable() {
    let seq = Seq::of(vec![Value::from("b"), int(3), Value::Null, int(1)]);
    assert_eq!(
        seq.sorted(),
        Seq::of(vec![Value::Null, int(1), int(3), Value::from("b")])
    );
    assert_eq!(ints(&[1, 2, 3]).join(","), "1,2,3");
}

#[test]
fn test_value_seq_intersect() {
    let a = Seq::of(vec![int(1), Value::from("x"), int(2)]);
    let b = Seq::of(vec![Value::from("x"), int(2)]);
    assert_eq!(a.intersect(b), Seq::of(vec![Value::from("x"), int(2)]));
}
