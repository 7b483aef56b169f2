use std::sync::Once;

pub use shortid_test_macros::test;
pub use tokio;

static INIT: Once = Once::new();

/// Install the test logger and the colored panic handler once per test binary.
/// Log level can be tuned through `RUST_LOG`, it defaults to `debug`.
pub fn setup_test() {
    INIT.call_once(|| {
        color_backtrace::install();

        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .is_test(true)
            .try_init();

        log::trace!("test environment initialized");
    });
}
