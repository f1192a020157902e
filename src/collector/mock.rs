//! Mock metric source for testing.
//!
//! `MockSource` replays a scripted sequence of sample results so the tick
//! handling and rendering can be exercised without touching the real host.

use std::collections::VecDeque;

use super::{HostInfo, MetricSample, MetricSource, Probe, SampleError};

/// Scripted metric source.
///
/// Samples are consumed front-to-back; once the script runs out, every
/// further tick fails (stale-value retention territory).
pub struct MockSource {
    host: Option<HostInfo>,
    samples: VecDeque<Result<MetricSample, SampleError>>,
}

impl MockSource {
    /// Creates a source with no host identity and an empty script.
    pub fn new() -> Self {
        Self {
            host: None,
            samples: VecDeque::new(),
        }
    }

    /// Creates a source reporting a typical small server.
    pub fn typical_host() -> Self {
        Self::new().with_host(HostInfo {
            hostname: "testbox".to_string(),
            platform: "Ubuntu".to_string(),
            platform_version: "24.04".to_string(),
            kernel_version: "6.8.0".to_string(),
            uptime_secs: 7 * 3600 + 1800,
        })
    }

    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = Some(host);
        self
    }

    /// Queues a successful sample.
    pub fn push_sample(mut self, cpu: f64, mem: f64, disk: f64) -> Self {
        self.samples.push_back(Ok(MetricSample {
            cpu_percent: cpu,
            mem_percent: mem,
            disk_percent: disk,
        }));
        self
    }

    /// Queues a failed tick.
    pub fn push_failure(mut self) -> Self {
        self.samples.push_back(Err(SampleError::Unavailable(
            Probe::Cpu,
            "scripted failure".to_string(),
        )));
        self
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for MockSource {
    fn host_info(&mut self) -> Option<HostInfo> {
        self.host.clone()
    }

    fn sample(&mut self) -> Result<MetricSample, SampleError> {
        self.samples.pop_front().unwrap_or_else(|| {
            Err(SampleError::Unavailable(
                Probe::Cpu,
                "script exhausted".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_replays_script_in_order() {
        let mut source = MockSource::new()
            .push_sample(10.0, 20.0, 30.0)
            .push_failure()
            .push_sample(40.0, 50.0, 60.0);

        assert_eq!(source.sample().unwrap().cpu_percent, 10.0);
        assert!(source.sample().is_err());
        assert_eq!(source.sample().unwrap().disk_percent, 60.0);
        // Exhausted script keeps failing.
        assert!(source.sample().is_err());
    }

    #[test]
    fn test_mock_source_host_identity() {
        let mut source = MockSource::new();
        assert!(source.host_info().is_none());

        let mut source = MockSource::typical_host();
        let host = source.host_info().unwrap();
        assert_eq!(host.hostname, "testbox");
        assert_eq!(host.uptime_secs / 3600, 7);
    }
}
