use either_context::{Either, EitherContext, TextStrategy, TEXT};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equals_has_value_semantics() {
    let ctx = EitherContext::new(TEXT);
    let foo = ctx.unsafe_value(12);
    let bar = ctx.unsafe_value(12);
    let baz = ctx.unsafe_value(0);
    let qux = ctx.failure::<i32>();
    let mos = ctx.failure_with::<i32>("mos");
    let rit = ctx.failure_with::<i32>("mos");

    assert_eq!(foo, bar);
    assert_ne!(foo, baz);
    assert_ne!(foo, qux);
    assert_ne!(qux, mos);
    assert_eq!(mos, rit);
}

#[test]
fn success_never_equals_failure_with_same_text() {
    let ctx = EitherContext::new(TEXT);
    let success: Either<TextStrategy, String> = ctx.unsafe_value("same".to_string());
    let failure: Either<TextStrategy, String> = ctx.failure_with("same");
    assert_ne!(success, failure);
}

#[test]
fn equal_values_have_equal_hashes() {
    let ctx = EitherContext::new(TEXT);
    assert_eq!(hash_of(&ctx.unsafe_value(12)), hash_of(&ctx.unsafe_value(12)));
    assert_eq!(hash_of(&ctx.failure_with::<i32>("mos")), hash_of(&ctx.failure_with::<i32>("mos")));

    let set: HashSet<_> =
        [ctx.unsafe_value(1), ctx.unsafe_value(1), ctx.failure_with("x"), ctx.failure_with("x")]
            .into_iter()
            .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn values_from_distinct_contexts_compare_by_value() {
    let first = EitherContext::new(TEXT);
    let second = EitherContext::new(TEXT);
    assert_eq!(first.unsafe_value(1), second.unsafe_value(1));
}

#[test]
fn clone_and_debug_show_the_variant() {
    let ctx = EitherContext::new(TEXT);
    let value = ctx.unsafe_value(42);
    assert_eq!(value.clone(), value);
    assert_eq!(format!("{value:?}"), "Success(42)");
    assert_eq!(format!("{:?}", ctx.failure_with::<i32>("bar")), "Failure(\"bar\")");
}
