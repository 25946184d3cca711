//! Global logger initialization
//!
//! Kept in its own test binary: the global logger can be installed once per
//! process.

use log::LevelFilter;

use pixelmapper::utils::logger::Logger;

#[test]
fn test_rust_log_overrides_configured_level() {
    std::env::set_var("RUST_LOG", "debug");
    Logger::init_global_logger(None, LevelFilter::Info).unwrap();

    assert_eq!(log::max_level(), LevelFilter::Debug);
}
