//! Metric source abstraction and models.
//!
//! The `MetricSource` trait allows the TUI to run against the real host
//! (`SystemSource`) or against scripted data in tests (`mock::MockSource`).

pub mod mock;
mod system;

pub use system::SystemSource;

/// Host identity, captured once at startup and never re-queried.
#[derive(Debug, Clone, PartialEq)]
pub struct HostInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub uptime_secs: u64,
}

/// One best-effort snapshot of the three utilization percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub cpu_percent: f64,
    pub mem_percent: f64,
    pub disk_percent: f64,
}

impl MetricSample {
    /// Validates a raw probe value into a percentage.
    ///
    /// A value that is non-finite or outside [0, 100] counts as a failed
    /// probe, not as data; the caller keeps its previous state.
    pub fn validate(probe: Probe, value: f64) -> Result<f64, SampleError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(value)
        } else {
            Err(SampleError::Invalid(probe, value))
        }
    }
}

/// The individual OS queries behind a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Cpu,
    Memory,
    Disk,
}

impl Probe {
    fn name(&self) -> &'static str {
        match self {
            Probe::Cpu => "cpu",
            Probe::Memory => "memory",
            Probe::Disk => "disk",
        }
    }
}

/// Error types that can occur while sampling metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The probe could not produce a value at all.
    Unavailable(Probe, String),
    /// The probe produced a value outside the meaningful range.
    Invalid(Probe, f64),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::Unavailable(probe, msg) => {
                write!(f, "{} probe unavailable: {}", probe.name(), msg)
            }
            SampleError::Invalid(probe, value) => {
                write!(f, "{} probe returned invalid value: {}", probe.name(), value)
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Abstraction over the host-inspection calls driving the dashboard.
///
/// Implementations must be best-effort: a failed call returns `None` or
/// `Err` and the caller degrades, it never panics.
pub trait MetricSource {
    /// Captures the host-identity snapshot.
    ///
    /// Called once at startup. `None` means the dashboard runs without the
    /// host block.
    fn host_info(&mut self) -> Option<HostInfo>;

    /// Samples CPU, memory, and root-filesystem disk utilization.
    ///
    /// Called once per tick. On `Err` the caller retains its previous
    /// values; no retry happens before the next tick.
    fn sample(&mut self) -> Result<MetricSample, SampleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_range_bounds() {
        assert_eq!(MetricSample::validate(Probe::Cpu, 0.0), Ok(0.0));
        assert_eq!(MetricSample::validate(Probe::Cpu, 100.0), Ok(100.0));
        assert_eq!(MetricSample::validate(Probe::Memory, 37.2), Ok(37.2));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(MetricSample::validate(Probe::Disk, -0.1).is_err());
        assert!(MetricSample::validate(Probe::Disk, 100.1).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(MetricSample::validate(Probe::Cpu, f64::NAN).is_err());
        assert!(MetricSample::validate(Probe::Cpu, f64::INFINITY).is_err());
    }

    #[test]
    fn test_sample_error_display_names_probe() {
        let err = SampleError::Unavailable(Probe::Disk, "no root mount".to_string());
        assert_eq!(err.to_string(), "disk probe unavailable: no root mount");

        let err = SampleError::Invalid(Probe::Cpu, f64::NAN);
        assert!(err.to_string().starts_with("cpu probe returned invalid value"));
    }
}
