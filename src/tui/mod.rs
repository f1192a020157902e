//! Terminal User Interface for the dashboard.
//!
//! A single-threaded tick-driven loop: every second the metric source is
//! sampled, the state record is updated, and the frame is redrawn.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use state::DashboardState;
