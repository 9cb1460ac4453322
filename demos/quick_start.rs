//! Parses a small settings listing, composing every step through `Either`.
//!
//! Run with `cargo run --example quick_start --features tracing`.

use either_context::prelude::*;
use either_context::tracing_ext::EitherTraceExt;

#[derive(Debug)]
struct Settings {
    host: String,
    port: u16,
}

static CTX: EitherContext<MessageAndCauseStrategy> = EitherContext::new(MESSAGE_AND_CAUSE);

fn field<'a>(lines: &[&'a str], key: &str) -> Either<MessageAndCauseStrategy, &'a str> {
    lines
        .iter()
        .find_map(|line| line.strip_prefix(key)?.trim_start().strip_prefix('='))
        .map(|value| CTX.unsafe_value(value.trim()))
        .unwrap_or_else(|| failure!(CTX, "missing `{key}`"))
}

fn parse(source: &str) -> Either<MessageAndCauseStrategy, Settings> {
    let lines: Vec<&str> = source.lines().map(str::trim).collect();

    let host = field(&lines, "host")
        .filter(|host| !host.is_empty())
        .or_else(|| CTX.unsafe_value("localhost"));

    let port = field(&lines, "port")
        .and_then(|raw| CTX.safely(|| raw.parse::<u16>()))
        .and_then(|port| ensure!(CTX, port >= 1024, "port {port} is privileged").map(|()| port));

    host.and_then(|host| port.map(|port| Settings { host: host.to_string(), port }))
        .trace_failure("parse_settings")
}

fn main() {
    tracing_subscriber::fmt().with_target(true).init();

    for source in ["host = example.org\nport = 8080", "port = 80", "port = http"] {
        match parse(source).get_or_throw() {
            Ok(settings) => println!("loaded {settings:?}"),
            Err(fault) => println!("rejected: {fault:#}"),
        }
    }
}
