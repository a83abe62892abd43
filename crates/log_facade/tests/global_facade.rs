#![allow(clippy::expect_used)]

use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
    thread,
};

use log_facade::{Attr, Destination};

/// The global logger is shared by every test in this binary.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn configure(dir: &Path, level: &str) {
    log_facade::configure(
        dir.to_str().expect("temporary directory path is not UTF-8"),
        "app.log",
        "day",
        level,
        7,
        100,
        1,
    )
    .expect("failed to configure logger");
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("failed to read log file")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn warn_threshold_suppresses_debug_and_info() {
    let _guard = serial();
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    configure(dir.path(), "WARN");

    log_facade::debug("debug", &[]);
    log_facade::info("info", &[]);
    log_facade::debugf!("debug {}", 1);
    log_facade::infof!("info {}", 2);
    log_facade::warn("warn", &[]);
    log_facade::error("error", &[]);

    let lines = read_lines(&dir.path().join("app.log"));
    assert_eq!(lines.len(), 2, "lines: {lines:?}");
    assert!(lines.iter().any(|line| line.contains("level=WARN")));
    assert!(lines.iter().any(|line| line.contains("level=ERROR")));
    assert!(lines.iter().all(|line| line.starts_with("time=")));
}

#[test]
fn source_field_points_at_the_call_site() {
    let _guard = serial();
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    configure(dir.path(), "debug");

    let function_line = line!() + 1;
    log_facade::warn("from function", &[]);
    let macro_line = line!() + 1;
    log_facade::errorf!("from {}", "macro");

    let lines = read_lines(&dir.path().join("app.log"));
    assert_eq!(lines.len(), 2, "lines: {lines:?}");
    assert!(lines
        .first()
        .is_some_and(|l| l.contains(&format!("source=tests/global_facade.rs:{function_line} "))));
    assert!(lines
        .get(1)
        .is_some_and(|l| l.contains(&format!("source=tests/global_facade.rs:{macro_line} "))));
}

#[test]
fn formatted_and_key_value_variants() {
    let _guard = serial();
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    configure(dir.path(), "debug");

    log_facade::infof!("hello {}", "world");
    log_facade::debug!("this is a debug message", "key1" => "value1");
    log_facade::warn("disk usage", &[Attr::new("percent", &93), Attr::new("mount", &"/var")]);

    let lines = read_lines(&dir.path().join("app.log"));
    assert_eq!(lines.len(), 3, "lines: {lines:?}");
    assert!(lines
        .first()
        .is_some_and(|l| l.contains(r#"msg="hello world""#)));
    assert!(lines.get(1).is_some_and(|l| l.contains("key1=value1")));
    assert!(lines
        .get(2)
        .is_some_and(|l| l.ends_with(r#"msg="disk usage" percent=93 mount=/var"#)));
}

#[test]
fn empty_directory_routes_to_console() {
    let _guard = serial();
    let file_name = "console-routing-check.log";

    log_facade::configure("", file_name, "day", "info", 7, 100, 1)
        .expect("console configuration never fails");
    log_facade::info("to stdout", &[]);

    let logger = log_facade::global().expect("logger was installed");
    assert_eq!(logger.destination(), &Destination::Console);
    assert!(!Path::new(file_name).exists());
}

#[test]
fn reconfiguring_replaces_the_logger() {
    let _guard = serial();
    let first = tempfile::tempdir().expect("failed to create temporary directory");
    let second = tempfile::tempdir().expect("failed to create temporary directory");

    configure(first.path(), "info");
    log_facade::info("first", &[]);
    configure(second.path(), "info");
    log_facade::info("second", &[]);

    let first_lines = read_lines(&first.path().join("app.log"));
    let second_lines = read_lines(&second.path().join("app.log"));
    assert_eq!(first_lines.len(), 1);
    assert_eq!(second_lines.len(), 1);
    assert!(first_lines.iter().all(|l| l.contains("msg=first")));
    assert!(second_lines.iter().all(|l| l.contains("msg=second")));
}

#[test]
fn failed_configuration_keeps_the_previous_logger() {
    let _guard = serial();
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    configure(dir.path(), "info");

    let blocker = dir.path().join("not-a-directory");
    fs::write(&blocker, b"").expect("failed to create file");
    let result = log_facade::configure(
        blocker.to_str().expect("temporary directory path is not UTF-8"),
        "app.log",
        "day",
        "info",
        7,
        100,
        1,
    );
    assert!(matches!(
        result,
        Err(log_facade::LoggerError::FileAppenderInitialization(_))
    ));

    log_facade::info("still here", &[]);
    let lines = read_lines(&dir.path().join("app.log"));
    assert!(lines.iter().any(|l| l.contains(r#"msg="still here""#)));
}

#[test]
fn concurrent_calls_write_whole_lines() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let _guard = serial();
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    configure(dir.path(), "info");

    thread::scope(|scope| {
        for worker in 0..THREADS {
            scope.spawn(move || {
                for seq in 0..PER_THREAD {
                    log_facade::info!("concurrent write", "worker" => worker, "seq" => seq);
                }
            });
        }
    });

    let lines = read_lines(&dir.path().join("app.log"));
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("time="), "malformed line: {line}");
        assert_eq!(line.matches("time=").count(), 1, "merged line: {line}");

        let (_, attrs) = line
            .split_once(r#"msg="concurrent write" "#)
            .expect("line carries the message");
        assert!(seen.insert(attrs.to_owned()), "duplicate line: {line}");
    }
}

#[test]
fn reconfiguring_while_logging_loses_no_records() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 500;

    let _guard = serial();
    let first = tempfile::tempdir().expect("failed to create temporary directory");
    let second = tempfile::tempdir().expect("failed to create temporary directory");
    configure(first.path(), "info");

    thread::scope(|scope| {
        for worker in 0..THREADS {
            scope.spawn(move || {
                for seq in 0..PER_THREAD {
                    log_facade::info!("during swap", "worker" => worker, "seq" => seq);
                }
            });
        }
        configure(second.path(), "info");
    });

    let mut lines = read_lines(&first.path().join("app.log"));
    lines.extend(read_lines(&second.path().join("app.log")));
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("time="), "malformed line: {line}");
        assert_eq!(line.matches("time=").count(), 1, "merged line: {line}");

        let (_, attrs) = line
            .split_once(r#"msg="during swap" "#)
            .expect("line carries the message");
        assert!(seen.insert(attrs.to_owned()), "duplicate line: {line}");
    }
}
