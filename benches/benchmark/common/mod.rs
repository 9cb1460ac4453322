use criterion::Criterion;
use either_context::{EitherContext, TextStrategy, TEXT};
use std::fmt;
use std::time::Duration;

pub static CTX: EitherContext<TextStrategy> = EitherContext::new(TEXT);

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum DomainError {
    Database(String),
    Network(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .sample_size(50)
}
