/// Installs a stderr logger for the test binary when the `logging` feature
/// is on. Safe to call from every test.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
