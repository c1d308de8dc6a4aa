//! Shared helpers for integration tests.

use std::io;
use std::sync::{Arc, Mutex};

use sqlvocab::{BaseVocabulary, Dialect, DialectRegistry};
use tracing_subscriber::fmt::MakeWriter;

/// Route `tracing` output through the test harness, filtered by `RUST_LOG` (default `warn`).
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Register `dialects` into a fresh registry, panicking on registration errors.
#[allow(dead_code)]
pub fn registry(dialects: Vec<Dialect>) -> DialectRegistry {
    let mut builder = DialectRegistry::builder();
    for dialect in dialects {
        builder.register(dialect).expect("dialect should register");
    }
    builder.build()
}

/// A small root vocabulary used by the scenario tests.
#[allow(dead_code)]
pub fn ansi_like_base() -> BaseVocabulary {
    BaseVocabulary::new()
        .reserved(["SELECT", "FROM", "WHERE", "GOTO", "DISK"])
        .unreserved(["NAME", "TYPE"])
        .future_reserved(["ARRAY", "CLASS"])
}

/// In-memory sink for formatted log lines.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return the `warn`-and-above lines it logged.
#[allow(dead_code)]
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}
