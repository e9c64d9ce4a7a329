// crates/punishment-bridge-core/src/core/time.rs
// ============================================================================
// Module: Punishment Bridge Time Model
// Description: Timestamps and expiry values carried by punishment records.
// Purpose: Represent subsystem epoch-millisecond times without lossy conversion.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The punishment subsystem stores issue and end times as unix epoch
//! milliseconds and encodes "never ends" as a negative end time. Providers
//! report these values verbatim; formatting is only used for audit output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Timestamp
// ============================================================================

/// Unix epoch milliseconds.
///
/// # Invariants
/// - Values are reported by the subsystem; no monotonicity is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }

    /// Returns the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self(i64::try_from(millis).unwrap_or(i64::MAX))
    }

    /// Formats the timestamp as RFC 3339, or `None` when out of range.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        let nanos = i128::from(self.0) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?.format(&Rfc3339).ok()
    }
}

// ============================================================================
// SECTION: Expiry
// ============================================================================

/// End of a punishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "at", rename_all = "snake_case")]
pub enum Expiry {
    /// The punishment never ends.
    Permanent,
    /// The punishment ends at the given time.
    At(Timestamp),
}

impl Expiry {
    /// Decodes the subsystem's end-time encoding (negative means permanent).
    #[must_use]
    pub const fn from_end_millis(end: i64) -> Self {
        if end < 0 { Self::Permanent } else { Self::At(Timestamp::from_unix_millis(end)) }
    }

    /// Returns the end time, if any.
    #[must_use]
    pub const fn timestamp(self) -> Option<Timestamp> {
        match self {
            Self::Permanent => None,
            Self::At(at) => Some(at),
        }
    }

    /// Returns true when the punishment has no end time.
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        matches!(self, Self::Permanent)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
