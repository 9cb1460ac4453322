use either_context::{EitherContext, ErrorStrategy, Fault, MESSAGE_AND_CAUSE, TEXT};

#[derive(Debug, Clone, PartialEq)]
struct Report(String);

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "report: {}", self.0)
    }
}

#[test]
fn map_error_converts_every_synthesized_error() {
    let strategy = TEXT.map_error(Report, |r: Report| r.0);

    assert_eq!(strategy.from_message("bar"), Report("bar".into()));
    assert_eq!(strategy.default_error(), Report(String::new()));
    assert_eq!(strategy.from_fault(Fault::new("boom")), Report("boom".into()));
    assert_eq!(strategy.to_fault(Report("bar".into())), Fault::new("bar"));
    assert_eq!(strategy.inner(), &TEXT);
}

#[test]
fn map_error_preserves_overridden_operations() {
    let strategy = MESSAGE_AND_CAUSE.map_error(|e| e.cause.is_some(), |had_cause: bool| {
        either_context::MessageAndCause::new(if had_cause { "caused" } else { "plain" }, None)
    });

    assert!(strategy.from_fault(Fault::new("x")));
    assert!(!strategy.from_message("x"));
    assert_eq!(strategy.to_fault(true).message(), "caused");
}

#[test]
fn mapped_strategies_drive_contexts() {
    let ctx = EitherContext::new(TEXT.map_error(Report, |r: Report| r.0));
    let error = ctx.unsafe_value(3).filter(|n| *n > 5).get_error();
    assert_eq!(error, Some(Report(String::new())));
}
