// tests/support.rs
//! Shared test utilities — logging setup

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn init_logging() {
    // idempotent — safe to call multiple times
    let _ = env_logger::builder().is_test(true).try_init();
}
