//! Salon Server - HTTP front ends for the inventory search and lead form services.
//!
//! Each service runs as its own binary; both are built from the routers in
//! [`server`] and share the error mapping in [`handlers`].

pub mod handlers;
pub mod server;

pub use server::{
    contact_router, search_router, start_contact_server, start_search_server, ContactState,
    SearchState,
};

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default filter directive: `debug` with `--debug`, `info` otherwise.
pub fn default_log_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global log subscriber used by both binaries.
///
/// `RUST_LOG` takes precedence over the `--debug` flag.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(debug)));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directive() {
        assert_eq!(default_log_directive(true), "debug");
        assert_eq!(default_log_directive(false), "info");
        assert!(EnvFilter::try_new(default_log_directive(false)).is_ok());
    }
}
