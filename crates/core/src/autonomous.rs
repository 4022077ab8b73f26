//! Autonomous store visits.
//!
//! A visit moves `Idle → QrCode → InStore → Summary → Idle`. The caller
//! supplies the clock so the machine stays deterministic.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use thiserror::Error;

/// How long an issued QR code can be scanned at the door.
pub const QR_VALIDITY_SECS: i64 = 45;

/// Errors raised by visit transitions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VisitError {
    #[error("QR code expired")]
    QrExpired,
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
}

/// Current phase of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    #[default]
    Idle,
    QrCode {
        issued_at: DateTime<Utc>,
    },
    InStore {
        entered_at: DateTime<Utc>,
    },
    Summary(VisitSummary),
}

/// Outcome of a finished visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    pub entered_at: DateTime<Utc>,
    pub exited_at: DateTime<Utc>,
    pub duration_secs: i64,
    pub duration_display: Mmss,
}

/// Seconds rendered as `mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mmss(pub i64);

impl std::fmt::Display for Mmss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.0.max(0);
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Serialize for Mmss {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What the check-in screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum VisitStatus {
    Idle,
    QrCode {
        remaining_secs: i64,
        remaining_display: Mmss,
    },
    InStore {
        elapsed_secs: i64,
        elapsed_display: Mmss,
    },
    Summary(VisitSummary),
}

impl Visit {
    const fn phase(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::QrCode { .. } => "showing a QR code",
            Self::InStore { .. } => "in store",
            Self::Summary(_) => "showing a summary",
        }
    }

    fn qr_expires_at(issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at + TimeDelta::seconds(QR_VALIDITY_SECS)
    }

    /// Issue a fresh QR code. Allowed from `Idle` or to replace a code.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError::InvalidTransition`] during a visit or summary.
    pub fn issue_qr(&mut self, now: DateTime<Utc>) -> Result<(), VisitError> {
        match self {
            Self::Idle | Self::QrCode { .. } => {
                *self = Self::QrCode { issued_at: now };
                Ok(())
            }
            other => Err(VisitError::InvalidTransition {
                action: "issue a QR code",
                phase: other.phase(),
            }),
        }
    }

    /// Scan the QR code at the door.
    ///
    /// # Errors
    ///
    /// An expired code drops the visit back to `Idle` and returns
    /// [`VisitError::QrExpired`]. Any phase other than `QrCode` is rejected.
    pub fn enter(&mut self, now: DateTime<Utc>) -> Result<(), VisitError> {
        let Self::QrCode { issued_at } = *self else {
            return Err(VisitError::InvalidTransition {
                action: "enter",
                phase: self.phase(),
            });
        };

        if now >= Self::qr_expires_at(issued_at) {
            *self = Self::Idle;
            return Err(VisitError::QrExpired);
        }

        *self = Self::InStore { entered_at: now };
        Ok(())
    }

    /// Leave the store.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError::InvalidTransition`] unless the customer is inside.
    pub fn exit(&mut self, now: DateTime<Utc>) -> Result<VisitSummary, VisitError> {
        let Self::InStore { entered_at } = *self else {
            return Err(VisitError::InvalidTransition {
                action: "exit",
                phase: self.phase(),
            });
        };

        let duration_secs = (now - entered_at).num_seconds().max(0);
        let summary = VisitSummary {
            entered_at,
            exited_at: now,
            duration_secs,
            duration_display: Mmss(duration_secs),
        };
        *self = Self::Summary(summary);
        Ok(summary)
    }

    /// Back to `Idle` from anywhere.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Snapshot for display at `now`.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> VisitStatus {
        match *self {
            Self::Idle => VisitStatus::Idle,
            Self::QrCode { issued_at } => {
                let remaining = (Self::qr_expires_at(issued_at) - now).num_seconds().max(0);
                VisitStatus::QrCode {
                    remaining_secs: remaining,
                    remaining_display: Mmss(remaining),
                }
            }
            Self::InStore { entered_at } => {
                let elapsed = (now - entered_at).num_seconds().max(0);
                VisitStatus::InStore {
                    elapsed_secs: elapsed,
                    elapsed_display: Mmss(elapsed),
                }
            }
            Self::Summary(summary) => VisitStatus::Summary(summary),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn secs(n: i64) -> DateTime<Utc> {
        t0() + TimeDelta::seconds(n)
    }

    #[test]
    fn test_mmss_format() {
        assert_eq!(Mmss(0).to_string(), "00:00");
        assert_eq!(Mmss(45).to_string(), "00:45");
        assert_eq!(Mmss(754).to_string(), "12:34");
    }

    #[test]
    fn test_full_visit() {
        let mut visit = Visit::default();
        visit.issue_qr(t0()).unwrap();
        visit.enter(secs(10)).unwrap();
        let summary = visit.exit(secs(130)).unwrap();
        assert_eq!(summary.duration_secs, 120);
        assert_eq!(summary.duration_display.to_string(), "02:00");
        assert_eq!(visit.status(secs(200)), VisitStatus::Summary(summary));

        visit.reset();
        assert_eq!(visit, Visit::Idle);
    }

    #[test]
    fn test_expired_qr_reverts_to_idle() {
        let mut visit = Visit::default();
        visit.issue_qr(t0()).unwrap();
        assert_eq!(visit.enter(secs(45)), Err(VisitError::QrExpired));
        assert_eq!(visit, Visit::Idle);
    }

    #[test]
    fn test_qr_countdown() {
        let mut visit = Visit::default();
        visit.issue_qr(t0()).unwrap();
        assert_eq!(
            visit.status(secs(15)),
            VisitStatus::QrCode {
                remaining_secs: 30,
                remaining_display: Mmss(30),
            }
        );
        assert_eq!(
            visit.status(secs(90)),
            VisitStatus::QrCode {
                remaining_secs: 0,
                remaining_display: Mmss(0),
            }
        );
    }

    #[test]
    fn test_out_of_order_transitions_rejected() {
        let mut visit = Visit::default();
        assert!(matches!(
            visit.enter(t0()),
            Err(VisitError::InvalidTransition { action: "enter", .. })
        ));
        assert!(visit.exit(t0()).is_err());

        visit.issue_qr(t0()).unwrap();
        visit.enter(secs(1)).unwrap();
        assert!(visit.issue_qr(secs(2)).is_err());
        assert!(matches!(visit, Visit::InStore { .. }));
    }

    #[test]
    fn test_status_serializes_phase_tag() {
        let json = serde_json::to_value(Visit::default().status(t0())).unwrap();
        assert_eq!(json["phase"], "idle");

        let mut visit = Visit::default();
        visit.issue_qr(t0()).unwrap();
        visit.enter(secs(1)).unwrap();
        let json = serde_json::to_value(visit.status(secs(66))).unwrap();
        assert_eq!(json["phase"], "in_store");
        assert_eq!(json["elapsed_display"], "01:05");
    }
}
