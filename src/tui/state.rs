//! Dashboard state record.

use crate::collector::{HostInfo, MetricSample};

/// The single mutable record behind the rendered view.
///
/// Mutated exactly once per tick by the application loop; a failed sample
/// leaves the previous percentages in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Last successfully sampled CPU utilization, 0-100.
    pub cpu_percent: f64,
    /// Last successfully sampled memory utilization, 0-100.
    pub mem_percent: f64,
    /// Last successfully sampled root-filesystem utilization, 0-100.
    pub disk_percent: f64,
    /// Host identity, captured once at startup. `None` omits the host block.
    pub host: Option<HostInfo>,
    /// Fatal render message. Never set by the current collector; rendering
    /// honors it for forward compatibility.
    pub last_error: Option<String>,
}

impl DashboardState {
    pub fn new(host: Option<HostInfo>) -> Self {
        Self {
            host,
            ..Self::default()
        }
    }

    /// Merges a successful sample.
    ///
    /// Values are clamped to [0, 100] so the record invariant holds even if
    /// a source skips validation.
    pub fn apply(&mut self, sample: MetricSample) {
        self.cpu_percent = sample.cpu_percent.clamp(0.0, 100.0);
        self.mem_percent = sample.mem_percent.clamp(0.0, 100.0);
        self.disk_percent = sample.disk_percent.clamp(0.0, 100.0);
    }
}
