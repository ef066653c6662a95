//! Package manager detection adapters.
//!
//! Two deliberately independent implementations: the lockfile detector is the
//! primary service behind [`polycheck_application::PackageManagerPort`], and
//! the emergency probe is the last-resort fallback behind
//! [`polycheck_application::EmergencyProbePort`]. They share no code so a bug
//! in one cannot take down both.

pub mod detector;
pub mod emergency;

pub use detector::LockfileDetector;
pub use emergency::EmergencyDetection;
