//! Process-wide default logger behavior.

use std::sync::Arc;
use std::thread;

use logging_facade::config::{builder, loader::parse_config};
use logging_facade::registry::{self, State};
use logging_facade::logger::leaves;
use logging_facade::{
    combine, default_logger, remove, set_default, system_logger, DefaultLogger, Filter, LazyLog,
    Logger, Severity,
};

mod common;
use common::{calls, global_lock, trace, Journal, Recorder, TimeoutError};

#[test]
fn test_example_scenario() {
    let _guard = global_lock();
    let journal = Journal::default();

    set_default(combine(Recorder::new("sinkA", &journal), Recorder::new("sinkB", &journal)));
    default_logger().error("db", "timeout", Some(&TimeoutError("5s")));

    let received = calls(&journal);
    assert_eq!(received.len(), 2);
    assert_eq!((received[0].sink, received[1].sink), ("sinkA", "sinkB"));
    for call in &received {
        assert_eq!(call.op, "error");
        assert_eq!(call.tag, "db");
        assert_eq!(call.message, "timeout");
        assert_eq!(call.cause.as_deref(), Some("timeout after 5s"));
    }
    assert_eq!(registry::state(), State::Set);
}

#[test]
fn test_set_default_returns_new_logger_until_replaced() {
    let _guard = global_lock();
    let journal = Journal::default();
    let first: Arc<dyn Logger> = Recorder::new("first", &journal);
    let second: Arc<dyn Logger> = Recorder::new("second", &journal);

    set_default(first.clone());
    assert!(Arc::ptr_eq(&default_logger(), &first));
    assert!(Arc::ptr_eq(&default_logger(), &first));

    let previous = set_default(second.clone());
    assert!(Arc::ptr_eq(&previous, &first));
    assert!(Arc::ptr_eq(&default_logger(), &second));
}

#[test]
fn test_set_default_announces_through_new_logger() {
    let _guard = global_lock();
    let journal = Journal::default();

    set_default(Recorder::new("fresh", &journal));

    let all = journal.lock().unwrap().clone();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].op, "info");
    assert_eq!(all[0].tag, "Logger");
    assert!(all[0].message.starts_with("Default logger changed to Recorder"));
}

#[test]
fn test_snapshot_keeps_binding_but_forwarder_follows() {
    let _guard = global_lock();
    let journal = Journal::default();

    set_default(Recorder::new("old", &journal));
    let snapshot = default_logger();
    set_default(Recorder::new("new", &journal));

    snapshot.info("t", "from snapshot", None);
    DefaultLogger.info("t", "from forwarder", None);

    assert_eq!(trace(&journal), vec![("old", "info"), ("new", "info")]);
    let received = calls(&journal);
    assert_eq!(received[0].message, "from snapshot");
    assert_eq!(received[1].message, "from forwarder");
}

#[test]
fn test_system_logger_identity_survives_set_default() {
    let _guard = global_lock();
    let system = system_logger();
    let journal = Journal::default();

    set_default(Recorder::new("x", &journal));

    assert!(Arc::ptr_eq(&system, &system_logger()));
    assert!(!Arc::ptr_eq(&default_logger(), &system_logger()));
}

#[test]
fn test_concurrent_readers_never_see_torn_value() {
    let _guard = global_lock();
    let journal = Journal::default();
    let old: Arc<dyn Logger> = Recorder::new("old", &journal);
    let new: Arc<dyn Logger> = Recorder::new("new", &journal);
    set_default(old.clone());

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let old = old.clone();
            let new = new.clone();
            thread::spawn(move || {
                for _ in 0..5_000 {
                    let seen = default_logger();
                    assert!(Arc::ptr_eq(&seen, &old) || Arc::ptr_eq(&seen, &new));
                }
            })
        })
        .collect();

    set_default(new.clone());

    for reader in readers {
        reader.join().unwrap();
    }
    assert!(Arc::ptr_eq(&default_logger(), &new));
}

#[test]
fn test_default_filter_governs_lazy_calls_on_plain_sinks() {
    let _guard = global_lock();
    let journal = Journal::default();
    let plain = Recorder::new("plain", &journal);

    registry::set_default_filter(Filter::None);
    let mut ran = false;
    plain.info_lazy("t", || {
        ran = true;
        "expensive"
    });
    // eager calls on a plain sink are never filtered
    plain.info("t", "eager", None);
    registry::set_default_filter(Filter::All);

    assert!(!ran);
    assert_eq!(trace(&journal), vec![("plain", "info")]);
}

#[test]
fn test_explicit_filter_wins_over_default() {
    let _guard = global_lock();
    let journal = Journal::default();
    let logger = logging_facade::filter::with_filter(Recorder::new("r", &journal), Filter::All);

    registry::set_default_filter(Filter::at_least(Severity::Info));
    let mut ran = false;
    logger.debug_lazy("t", || {
        ran = true;
        "debug"
    });
    registry::set_default_filter(Filter::All);

    assert!(ran);
    assert_eq!(trace(&journal), vec![("r", "debug")]);
}

#[test]
fn test_install_config_sets_filter_and_logger() {
    let _guard = global_lock();
    let config = parse_config(
        r#"
        [default]
        sinks = ["tracing"]

        [filter]
        min_level = "warn"
        "#,
    )
    .unwrap();

    let installed = builder::install(&config);

    assert!(Arc::ptr_eq(&default_logger(), &installed));
    assert!(!registry::default_filter().allows(Severity::Info, "t"));
    assert!(!DefaultLogger.enabled(Severity::Info, "t"));
    assert!(DefaultLogger.enabled(Severity::Error, "t"));

    // the wrapper follows the live default filter
    registry::set_default_filter(Filter::All);
    assert!(DefaultLogger.enabled(Severity::Debug, "t"));
}

#[test]
fn test_forwarder_is_refused_as_default() {
    let _guard = global_lock();
    let journal = Journal::default();
    let current: Arc<dyn Logger> = Recorder::new("current", &journal);
    set_default(current.clone());

    let kept = set_default(Arc::new(DefaultLogger));
    let kept_again = set_default(combine(Recorder::new("other", &journal), Arc::new(DefaultLogger)));
    DefaultLogger.info("t", "still delivered", None);

    assert!(Arc::ptr_eq(&kept, &current));
    assert!(Arc::ptr_eq(&kept_again, &current));
    assert!(Arc::ptr_eq(&default_logger(), &current));
    assert_eq!(trace(&journal), vec![("current", "info")]);
}

#[test]
fn test_remove_sink_from_installed_default() {
    let _guard = global_lock();
    let config = parse_config(
        r#"
        [default]
        sinks = ["system", "tracing"]
        "#,
    )
    .unwrap();
    let installed = builder::install(&config);

    let without_system = remove(&default_logger(), &system_logger());

    assert!(!Arc::ptr_eq(&without_system, &installed));
    assert_eq!(leaves(&without_system).len(), 1);
    let rendered = format!("{:?}", without_system);
    assert!(rendered.starts_with("FilteredLogger"));
    assert!(rendered.contains("TracingLogger"));
    assert!(!rendered.contains("SystemLogger"));
}

#[tokio::test]
async fn test_logging_from_tasks() {
    let journal = Journal::default();
    let logger = combine(Recorder::new("a", &journal), Recorder::new("b", &journal));

    let tasks: Vec<_> = (0..4)
        .map(|i| {
            let logger = logger.clone();
            tokio::spawn(async move {
                logger.info("task", &format!("hello {}", i), None);
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let received = calls(&journal);
    assert_eq!(received.len(), 8);
    // each call reaches a before b
    for pair in received.chunks(2) {
        assert_eq!((pair[0].sink, pair[1].sink), ("a", "b"));
        assert_eq!(pair[0].message, pair[1].message);
    }
}
