use numerus_logger::{ConsoleFormat, LevelFilter, Logger};

#[test]
fn json_console_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("integration-console-json")
        .console(Some(ConsoleFormat::Json))
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(trace_id = "1700000000000-abc", "structured event");
    assert!(!logger.writes_files(), "console-only logger should not create a file guard");
}
