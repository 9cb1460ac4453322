//! Functor and monad laws over a handful of representative values.

use either_context::{Either, EitherContext, TextStrategy, TEXT};

const CTX: EitherContext<TextStrategy> = EitherContext::new(TEXT);

fn samples() -> Vec<Either<TextStrategy, i32>> {
    vec![CTX.unsafe_value(0), CTX.unsafe_value(42), CTX.failure(), CTX.failure_with("boom")]
}

fn halve(n: i32) -> Either<TextStrategy, i32> {
    CTX.ensure_or(n % 2 == 0, "odd").map(|()| n / 2)
}

fn describe(n: i32) -> Either<TextStrategy, String> {
    CTX.ensure_or(n >= 0, "negative").map(|()| format!("#{n}"))
}

#[test]
fn map_identity() {
    for x in samples() {
        assert_eq!(x.clone().map(|a| a), x);
    }
}

#[test]
fn map_composition() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 3;
    for x in samples() {
        assert_eq!(x.clone().map(f).map(g), x.map(|n| g(f(n))));
    }
}

#[test]
fn left_identity() {
    for a in [-3, 0, 7, 42] {
        assert_eq!(CTX.unsafe_value(a).and_then(halve), halve(a));
    }
}

#[test]
fn right_identity() {
    for x in samples() {
        assert_eq!(x.clone().and_then(|a| CTX.unsafe_value(a)), x);
    }
}

#[test]
fn associativity() {
    for x in samples() {
        let nested = x.clone().and_then(|a| halve(a).and_then(describe));
        assert_eq!(x.and_then(halve).and_then(describe), nested);
    }
}
