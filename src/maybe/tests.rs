#![cfg(test)]

use super::*;
use crate::util::counter::CallCounter;

#[test]
fn test_presence() {
    assert!(is_nothing(&Maybe::<bool>::Nothing), "Nothing should be Nothing.");
    assert!(!is_something(&Maybe::<bool>::Nothing));

    assert!(!is_nothing(&Something(false)), "A false bool should still be Something.");
    assert!(!is_nothing(&Something(0)), "Zero should still be Something.");
    assert!(!is_nothing(&Something("")), "An empty string should still be Something.");
    assert!(is_something(&Something(())));

    assert!(Maybe::<u8>::default().is_nothing(), "The default Maybe should be Nothing.");
    assert!(Something('a').is_something());
}

#[test]
fn test_map() {
    let upper = |s: &str| s.to_uppercase();
    assert_eq!(map(upper, Something("a string")), Something(String::from("A STRING")));
    assert_eq!(map(upper, Nothing), Nothing);

    let counter = CallCounter::new();
    let result = map(
        |v: u8| {
            counter.hit();
            v
        },
        Nothing,
    );
    assert_eq!(result, Nothing);
    assert_eq!(counter.count(), 0, "Mapping function shouldn't be invoked for Nothing.");
}

#[test]
fn test_map2() {
    let add = |x: i32, y: i32| x + y;
    assert_eq!(map2(add, Something(1), Something(2)), Something(3));
    assert_eq!(map2(add, Nothing, Something(2)), Nothing);
    assert_eq!(map2(add, Something(1), Nothing), Nothing);

    let counter = CallCounter::new();
    let result = map2(
        |x: i32, y: i32| {
            counter.hit();
            x - y
        },
        Something(5),
        Something(3),
    );
    assert_eq!(result, Something(2), "Arguments should be passed in order.");
    assert_eq!(counter.count(), 1);

    let _ = map2(|_: i32, _: i32| counter.hit(), Something(1), Nothing);
    assert_eq!(counter.count(), 1, "A single Nothing should prevent any invocation.");
}

#[test]
fn test_map3() {
    let add = |x: i32, y: i32, z: i32| x + y + z;
    assert_eq!(map3(add, Something(1), Something(2), Something(3)), Something(6));
    assert_eq!(map3(add, Nothing, Something(2), Something(3)), Nothing);
    assert_eq!(map3(add, Something(1), Nothing, Something(3)), Nothing);
    assert_eq!(map3(add, Something(1), Something(2), Nothing), Nothing);

    assert_eq!(
        map3(
            |a: &str, b: u8, c: bool| format!("{a}{b}{c}"),
            Something("x"),
            Something(1),
            Something(true)
        ),
        Something(String::from("x1true")),
        "Mixed argument types should be combined in order."
    );
}

#[test]
#[should_panic(expected = "mapping failed")]
fn test_map_does_not_catch() {
    let _ = map(|_: i32| -> i32 { panic!("mapping failed") }, Something(0));
}

#[test]
fn test_filter() {
    assert_eq!(filter(Something(0), |v| *v < 1), Something(0));
    assert_eq!(filter(Something(0), |v| *v == 1), Nothing);

    let counter = CallCounter::new();
    let result = filter(Maybe::<i32>::Nothing, |_| {
        counter.hit();
        true
    });
    assert_eq!(result, Nothing);
    assert_eq!(counter.count(), 0, "Predicate shouldn't be invoked for Nothing.");

    let _ = filter(Something(0), |_| {
        counter.hit();
        false
    });
    assert_eq!(counter.count(), 1, "Predicate should be invoked exactly once when present.");
}

#[test]
fn test_if_something() {
    let mut num = -1;
    if_something(Something(0), |v| num = v);
    assert_eq!(num, 0, "Function should run with the value when present.");

    let mut num = -1;
    if_something(Nothing, |v| num = v);
    assert_eq!(num, -1, "Function shouldn't run when Nothing.");
}

#[test]
fn test_or_else() {
    assert_eq!(or_else(Something(0), 1), 0);
    assert_eq!(or_else(Nothing, 1), 1);
    assert!(!or_else(Something(false), true), "A false value should be kept.");
}

#[test]
fn test_or_else_get() {
    let counter = CallCounter::new();
    let get = || {
        counter.hit();
        1
    };

    assert_eq!(or_else_get(Something(0), get), 0);
    assert_eq!(counter.count(), 0, "Fallback shouldn't be computed when present.");

    assert_eq!(or_else_get(Nothing, get), 1);
    assert_eq!(counter.count(), 1, "Fallback should be computed exactly once when Nothing.");
}

#[test]
fn test_or_else_throw() {
    #[derive(Debug, PartialEq)]
    struct TestError(&'static str);

    assert_eq!(or_else_throw(Something(0), TestError("not real")), Ok(0));
    assert_eq!(
        or_else_throw(Maybe::<i32>::Nothing, TestError("not real")),
        Err(TestError("not real")),
        "Exactly the supplied error should be returned."
    );

    assert_eq!(or_else_throw_default(Something(0)), Ok(0));
    assert_eq!(or_else_throw_default(Maybe::<i32>::Nothing), Err(NothingError));
}

#[test]
fn test_conversions() {
    assert_eq!(Maybe::from(Some(3)), Something(3));
    assert_eq!(Maybe::<i32>::from(None), Nothing);
    let option: Option<i32> = Something(3).into();
    assert_eq!(option, Some(3));
    assert_eq!(Maybe::<i32>::Nothing.into_option(), None);

    let mut value = Something(String::from("a"));
    assert_eq!(map(String::len, value.as_ref()), Something(1));
    if let Something(s) = value.as_mut() {
        s.push('b');
    }
    assert_eq!(value, Something(String::from("ab")), "as_mut should allow mutation in place.");

    let parsed: Maybe<Result<i32, _>> = map(|s: &str| s.parse::<i32>(), Something("12"));
    assert_eq!(parsed.transpose(), Ok(Something(12)));
    let parsed = map(|s: &str| s.parse::<i32>(), Something("x"));
    assert!(parsed.transpose().is_err(), "Errors from the mapping function should surface.");
    let parsed = map(|s: &str| s.parse::<i32>(), Nothing);
    assert_eq!(parsed.transpose(), Ok(Nothing));
}

#[test]
fn test_ordering() {
    assert!(Nothing < Something(i32::MIN), "Nothing should order before any value.");
    assert!(Something(1) < Something(2));
}
