use crate::common::{configure_criterion, DomainError, CTX};
use criterion::{criterion_group, Criterion};
use either_context::{EitherContext, Fault, FAULT};
use std::hint::black_box;

pub fn bench_safely(c: &mut Criterion) {
    c.bench_function("context/safely_ok", |b| {
        b.iter(|| black_box(CTX.safely(|| Ok::<_, DomainError>(black_box(42))).get()))
    });

    c.bench_function("context/safely_err", |b| {
        b.iter(|| {
            black_box(
                CTX.safely(|| Err::<i32, _>(DomainError::Network("timeout".to_string())))
                    .get_error(),
            )
        })
    });

    c.bench_function("context/safely_or_else_err", |b| {
        b.iter(|| {
            black_box(
                CTX.safely_or_else(
                    || Err::<i32, _>(DomainError::Database("locked".to_string())),
                    || "database unavailable",
                )
                .get_error(),
            )
        })
    });
}

pub fn bench_ensure(c: &mut Criterion) {
    c.bench_function("context/ensure_lazy_pass", |b| {
        b.iter(|| {
            black_box(CTX.ensure_or_else(black_box(true), || format!("failed at {}", 42)).is_success())
        })
    });

    c.bench_function("context/ensure_lazy_fail", |b| {
        b.iter(|| {
            black_box(CTX.ensure_or_else(black_box(false), || format!("failed at {}", 42)).get_error())
        })
    });
}

pub fn bench_get_or_throw(c: &mut Criterion) {
    let faults = EitherContext::new(FAULT);

    c.bench_function("context/get_or_throw_chain", |b| {
        b.iter(|| {
            black_box(
                faults
                    .failure_with::<()>(Fault::with_cause("outer", Fault::new("inner")))
                    .get_or_throw()
                    .map_err(|fault| fault.error_chain()),
            )
        })
    });
}

criterion_group! {
    name = context_benches;
    config = configure_criterion();
    targets =
        bench_safely,
        bench_ensure,
        bench_get_or_throw,
}
