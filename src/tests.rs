//! End-to-end tests across both initializer surfaces.

use std::io;
use std::sync::{Arc, Mutex};

use crate::go_style::{self, InitializeLibrary, InitializeLibraryWithOptions};
use crate::native;
use crate::{
    initialize_library, initialize_library_with, LibraryError, LibraryOptions, LibraryResult,
    OperationMode,
};

/// In-memory sink for formatted tracing output
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let logs = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || logs.clone())
            .finish()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

async fn native_logs(message: &str, options: LibraryOptions) -> String {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(logs.subscriber());
    initialize_library_with(message, &options).await;
    logs.contents()
}

fn go_style_logs(message: &str, options: LibraryOptions) -> String {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(logs.subscriber());
    InitializeLibraryWithOptions(message, options);
    logs.contents()
}

#[tokio::test]
async fn test_native_then_go_style() {
    let () = initialize_library("test message").await;
    InitializeLibrary("test message");
}

#[tokio::test]
async fn test_go_style_then_native() {
    InitializeLibrary("test message");
    let () = initialize_library("test message").await;
}

#[tokio::test]
async fn test_surfaces_return_identical_records() {
    let messages = ["", "test message", "ünïcödé ✅"];
    let option_sets = [LibraryOptions::new(true, 1000), LibraryOptions::default()];

    for message in messages {
        for options in option_sets {
            let from_native = native::initialize(message, &options).await;
            let from_go = go_style::initialize(message, options);

            assert_eq!(from_native, from_go, "message={:?} {:?}", message, options);
            assert_eq!(from_native.message_chars, message.chars().count());
            assert_eq!(
                from_native.logged,
                options.enable_logging && !message.is_empty()
            );
        }
    }
}

#[tokio::test]
async fn test_logging_enabled_emits_info_event() {
    let options = LibraryOptions::new(true, 1000);

    let native = native_logs("hello from native", options).await;
    assert!(native.contains("INFO"), "{}", native);
    assert!(native.contains("hello from native"), "{}", native);
    assert!(native.contains("timeout_ms=1000"), "{}", native);
    assert!(!native.contains("DEBUG"), "{}", native);

    let go = go_style_logs("hello from native", options);
    assert_eq!(native, go);
}

#[tokio::test]
async fn test_logging_disabled_emits_debug_event() {
    let options = LibraryOptions::new(false, 250);

    let native = native_logs("quiet message", options).await;
    assert!(native.contains("DEBUG"), "{}", native);
    assert!(native.contains("Initialize: quiet message"), "{}", native);
    assert!(native.contains("timeout_ms=250"), "{}", native);
    assert!(!native.contains("INFO"), "{}", native);

    let go = go_style_logs("quiet message", options);
    assert_eq!(native, go);
}

#[tokio::test]
async fn test_empty_message_logs_noop_on_both_surfaces() {
    let options = LibraryOptions::new(true, 0);

    let native = native_logs("", options).await;
    assert!(native.contains("empty message"), "{}", native);
    assert!(!native.contains("INFO"), "{}", native);
    assert_eq!(native, go_style_logs("", options));
}

#[test]
fn test_root_exports() {
    let error = LibraryError::new("test error", "TEST_001");
    assert_eq!(error.message(), "test error");
    assert_eq!(error.code(), "TEST_001");

    let mode: OperationMode = "async".parse().unwrap();
    assert_eq!(mode, OperationMode::Async);

    let result = LibraryResult {
        success: true,
        data: "test data".to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    };
    assert!(result.success);
}
