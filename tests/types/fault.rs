use either_context::types::fault::{GENERIC_KIND, PANIC_KIND};
use either_context::{BoxError, Fault};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Wrapper {
    inner: std::io::Error,
}

impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reading settings")
    }
}

impl Error for Wrapper {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn new_fault_has_generic_kind_and_no_source() {
    let fault = Fault::new("boom");
    assert_eq!(fault.kind(), GENERIC_KIND);
    assert_eq!(fault.message(), "boom");
    assert!(fault.cause().is_none());
    assert!(fault.source().is_none());
    assert_ne!(GENERIC_KIND, PANIC_KIND);
}

#[test]
fn from_error_records_type_name_and_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml missing");
    let fault = Fault::from_error(io);

    assert!(fault.kind().ends_with("Error"));
    assert_eq!(fault.message(), "settings.toml missing");
    assert_eq!(fault.downcast_ref::<std::io::Error>().map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
    assert!(fault.downcast_ref::<fmt::Error>().is_none());
}

#[test]
fn from_error_returns_faults_unchanged() {
    let original = Fault::with_cause("outer", Fault::new("inner"));
    let converted = Fault::from_error(original.clone());

    assert_eq!(converted, original);
    assert_eq!(converted.kind(), GENERIC_KIND);
    assert_eq!(format!("{converted:#}"), "outer -> inner");
}

#[test]
fn chain_walks_nested_sources() {
    let wrapper = Wrapper { inner: std::io::Error::new(std::io::ErrorKind::Other, "permission denied") };
    let fault = Fault::with_cause("starting server", Fault::from_error(wrapper));

    let links: Vec<String> = fault.chain().map(|e| e.to_string()).collect();
    assert_eq!(
        links,
        ["starting server", "reading settings", "reading settings", "permission denied"],
    );
    assert_eq!(fault.error_chain(), "starting server -> reading settings -> permission denied");
    assert_eq!(fault.to_string(), "starting server");
}

#[test]
fn error_chain_keeps_distinct_causes_with_the_same_text() {
    let fault = Fault::with_cause("retry", Fault::with_cause("retry", Fault::new("timeout")));
    assert_eq!(fault.error_chain(), "retry -> retry -> timeout");
    assert_eq!(format!("{fault:#}"), "retry -> retry -> timeout");
}

#[test]
fn from_boxed_shares_the_box_as_source() {
    let boxed: BoxError = Box::new(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    let fault = Fault::from(boxed);

    assert_eq!(fault.kind(), GENERIC_KIND);
    assert_eq!(fault.message(), "disk full");
    assert!(fault.downcast_ref::<std::io::Error>().is_some());
    assert_eq!(fault.error_chain(), "disk full");
}

#[test]
fn from_boxed_unboxes_faults() {
    let boxed: BoxError = Box::new(Fault::with_kind("Timeout", "slow"));
    assert_eq!(Fault::from_boxed(boxed), Fault::with_kind("Timeout", "slow"));
}

#[test]
fn equality_ignores_sources() {
    let with_source = Fault::with_cause("same", Fault::new("cause"));
    assert_eq!(with_source, Fault::new("same"));
    assert_ne!(Fault::new("same"), Fault::with_kind("Other", "same"));
}

#[test]
fn faults_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Fault>();
}
