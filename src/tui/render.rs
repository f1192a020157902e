//! Rendering of the dashboard state.
//!
//! Frame content is a pure function of `DashboardState`; `render` only wraps
//! the produced lines in a paragraph.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::DashboardState;
use super::style::{Styles, Theme};

/// Interior width of a progress bar, in characters.
const BAR_WIDTH: usize = 20;

/// Main render function.
pub fn render(frame: &mut Frame, state: &DashboardState) {
    let paragraph = Paragraph::new(build_lines(state)).style(Styles::default());
    frame.render_widget(paragraph, frame.area());
}

/// Builds the full frame as styled lines.
pub fn build_lines(state: &DashboardState) -> Vec<Line<'static>> {
    // Fatal-render path: reserved for adapter errors surfaced by a future
    // source; the current collector never sets it.
    if let Some(message) = &state.last_error {
        return vec![Line::styled(format!("Error: {}", message), Styles::error())];
    }

    let mut lines = Vec::new();

    lines.push(Line::styled("System Monitor", Styles::header()));
    lines.push(Line::default());

    if let Some(host) = &state.host {
        lines.push(Line::raw(format!("Hostname: {}", host.hostname)));
        lines.push(Line::raw(format!(
            "OS:       {} {}",
            host.platform, host.platform_version
        )));
        lines.push(Line::raw(format!("Kernel:   {}", host.kernel_version)));
        lines.push(Line::raw(format!(
            "Uptime:   {} hours",
            host.uptime_secs / 3600
        )));
        lines.push(Line::default());
    }

    lines.push(metric_line("CPU:  ", state.cpu_percent, Theme::CPU_COLOR));
    lines.push(metric_line("RAM:  ", state.mem_percent, Theme::MEM_COLOR));
    lines.push(metric_line("Disk: ", state.disk_percent, Theme::DISK_COLOR));

    lines.push(Line::default());
    lines.push(Line::styled("Press 'q' to quit", Styles::dim()));

    lines
}

fn metric_line(label: &'static str, percent: f64, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(label),
        Span::styled(progress_bar(percent), ratatui::style::Style::default().fg(color)),
    ])
}

/// Formats a percentage as a fixed-width text bar: `[====      ] 20.0%`.
///
/// The fill count is `floor(percent / 100 * 20)` clamped to the bar width,
/// so out-of-range input never overflows the brackets; the label prints the
/// raw value to one decimal place.
pub fn progress_bar(percent: f64) -> String {
    let filled = (percent / 100.0 * BAR_WIDTH as f64)
        .floor()
        .clamp(0.0, BAR_WIDTH as f64) as usize;
    format!(
        "[{}{}] {:.1}%",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        percent
    )
}
