// crates/punishment-bridge/src/audit.rs
// ============================================================================
// Module: Bridge Audit Sinks
// Description: JSON-lines audit sink and config-driven sink selection.
// Purpose: Persist structured bridge events for operators.
// Dependencies: punishment-bridge-config, punishment-bridge-core, serde_json
// ============================================================================

//! ## Overview
//! [`JsonLineAuditSink`] writes one JSON object per event, stamped with a
//! per-sink sequence number and the wall-clock time. Write failures are
//! dropped: auditing never fails the bridge operation being audited.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use punishment_bridge_config::AuditConfig;
use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::BridgeAuditSink;
use punishment_bridge_core::NoopAuditSink;
use punishment_bridge_core::Timestamp;
use serde::Serialize;

// ============================================================================
// SECTION: Record Shape
// ============================================================================

/// Audit line written per event.
#[derive(Serialize)]
struct AuditLine<'a> {
    /// Monotonic sequence number, starting at 1.
    seq: u64,
    /// Event time (milliseconds since epoch).
    timestamp_ms: i64,
    /// Event time as RFC 3339, when representable.
    time: Option<String>,
    /// Event payload, flattened so its tag sits beside the stamps.
    #[serde(flatten)]
    event: &'a BridgeAuditEvent,
}

// ============================================================================
// SECTION: JSON Lines Sink
// ============================================================================

/// Audit sink writing JSON lines to any writer.
///
/// # Invariants
/// - Sequence numbers increase by one per recorded event.
/// - A line is written whole or not at all from the sink's perspective.
pub struct JsonLineAuditSink<W: Write + Send> {
    /// Output writer.
    writer: Mutex<W>,
    /// Last issued sequence number.
    seq: AtomicU64,
}

impl<W: Write + Send> JsonLineAuditSink<W> {
    /// Creates a sink over the writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            seq: AtomicU64::new(0),
        }
    }

    /// Returns the writer, consuming the sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JsonLineAuditSink<File> {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> BridgeAuditSink for JsonLineAuditSink<W> {
    fn record(&self, event: &BridgeAuditEvent) {
        let now = Timestamp::now();
        let line = AuditLine {
            seq: self.seq.fetch_add(1, Ordering::Relaxed) + 1,
            timestamp_ms: now.as_unix_millis(),
            time: now.to_rfc3339(),
            event,
        };
        let Ok(mut payload) = serde_json::to_vec(&line) else {
            return;
        };
        payload.push(b'\n');
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(&payload);
        let _ = writer.flush();
    }
}

// ============================================================================
// SECTION: Config Selection
// ============================================================================

/// Builds the audit sink described by configuration.
///
/// Disabled auditing (or no path) yields a no-op sink.
///
/// # Errors
///
/// Returns an error when the audit file cannot be opened.
pub fn audit_sink_from_config(config: &AuditConfig) -> io::Result<Arc<dyn BridgeAuditSink>> {
    match config.path.as_deref() {
        Some(path) if config.enabled => {
            Ok(Arc::new(JsonLineAuditSink::open(Path::new(path.trim()))?))
        }
        _ => Ok(Arc::new(NoopAuditSink)),
    }
}
