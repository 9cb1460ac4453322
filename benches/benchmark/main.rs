use criterion::criterion_main;

mod common;
mod context;

criterion_main!(core::core_benches, context::context_benches);
