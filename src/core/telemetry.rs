use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// Host applications that install their own subscriber should simply not
/// call this.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("taxtrust=info".parse().expect("valid directive"));

        fmt().with_env_filter(filter).init();
    });
}
