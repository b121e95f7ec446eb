#![allow(dead_code)]
mod fixtures;
mod operations;

pub use fixtures::*;
pub use operations::*;

/// Initialise `env_logger` for the test harness, safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
