//! Inline SVG bar chart for the analysis page

use std::fmt::Write as _;

use super::pages::escape_html;

const CHART_HEIGHT: u32 = 220;
const PLOT_TOP: u32 = 10;
const PLOT_HEIGHT: u32 = 160;
const AXIS_WIDTH: u32 = 40;
const BAR_WIDTH: u32 = 48;
const BAR_GAP: u32 = 24;
const LABEL_CHARS: usize = 14;

/// Render a vertical bar chart as an `<svg>` element
///
/// Bars are scaled against `max`; values above it are drawn at full height.
/// An empty series yields a chart with axes only.
#[must_use]
pub fn bar_chart_svg(labels: &[String], values: &[u32], max: u32) -> String {
    let max = max.max(1);
    let bars = labels.len().min(values.len());
    let bars_u32 = u32::try_from(bars).unwrap_or(u32::MAX);
    let width = AXIS_WIDTH + BAR_GAP + bars_u32.saturating_mul(BAR_WIDTH + BAR_GAP);
    let baseline = PLOT_TOP + PLOT_HEIGHT;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="chart" role="img" aria-label="Post scores" viewBox="0 0 {width} {CHART_HEIGHT}" width="{width}" height="{CHART_HEIGHT}">"#
    );

    for tick in [0, max / 2, max] {
        let y = baseline - scale(tick, max);
        let _ = write!(
            svg,
            r#"<line class="grid" x1="{AXIS_WIDTH}" y1="{y}" x2="{width}" y2="{y}"/><text class="tick" x="{}" y="{}" text-anchor="end">{tick}</text>"#,
            AXIS_WIDTH - 6,
            y + 4
        );
    }

    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let i = u32::try_from(i).unwrap_or(u32::MAX);
        let x = AXIS_WIDTH + BAR_GAP + i.saturating_mul(BAR_WIDTH + BAR_GAP);
        let h = scale((*value).min(max), max);
        let short: String = label.chars().take(LABEL_CHARS).collect();
        let _ = write!(
            svg,
            r#"<rect class="bar" x="{x}" y="{}" width="{BAR_WIDTH}" height="{h}"><title>{}: {value}</title></rect><text class="value" x="{}" y="{}" text-anchor="middle">{value}</text><text class="label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            baseline - h,
            escape_html(label),
            x + BAR_WIDTH / 2,
            (baseline - h).saturating_sub(4),
            x + BAR_WIDTH / 2,
            baseline + 18,
            escape_html(&short),
        );
    }

    svg.push_str("</svg>");
    svg
}

fn scale(value: u32, max: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(PLOT_HEIGHT) / u64::from(max);
    u32::try_from(scaled).unwrap_or(PLOT_HEIGHT)
}
