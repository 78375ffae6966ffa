
pub use helpers::*;
pub use test_world::{TestEntity, TestWorld};

/// Routes `log` output to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
