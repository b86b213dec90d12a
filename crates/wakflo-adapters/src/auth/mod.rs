//! Authentication adapters.

mod noop;

pub use noop::NoopAuthenticator;
