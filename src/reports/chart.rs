use normaudit::analysis::{Pattern, PatternStats, ScriptStats};
use normaudit::error::{AuditError, AuditResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use strum::IntoEnumIterator;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn chart_err<E: std::fmt::Display>(e: E) -> AuditError {
    AuditError::Chart(e.to_string())
}

/// Draws the script and pattern bar charts side by side into one SVG file.
pub fn render_charts(
    path: &Path,
    script_stats: &ScriptStats,
    pattern_stats: &PatternStats,
    min_samples: usize,
) -> AuditResult<()> {
    let root = SVGBackend::new(path, (1600, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root
        .titled("Text Normalization Analysis", ("sans-serif", 32))
        .map_err(chart_err)?;

    let (left, right) = root.split_horizontally(800);
    draw_script_panel(&left, script_stats, min_samples)?;
    draw_pattern_panel(&right, pattern_stats)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_script_panel(
    area: &Panel<'_>,
    script_stats: &ScriptStats,
    min_samples: usize,
) -> AuditResult<()> {
    let rows: Vec<(String, f64, usize)> = script_stats
        .ranked()
        .into_iter()
        .filter(|(_, entry)| entry.total >= min_samples)
        .map(|(script, entry)| (script.to_string(), entry.percentage(), entry.total))
        .collect();
    let n = rows.len() as u32;

    // Best-preserved script on top.
    let rows_ref = &rows;
    let row_at = move |segment: u32| n.checked_sub(segment + 1).map(|i| &rows_ref[i as usize]);
    let segment_of = |i: usize| n - 1 - i as u32;

    let mut chart = ChartBuilder::on(area)
        .caption("Script Preservation Rates", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..110f64, (0u32..n.max(1)).into_segmented())
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(rows.len().max(1))
        .y_label_formatter(&|v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(s) => row_at(*s).map(|r| r.0.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Preservation Rate (%)")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::horizontal(&chart)
                .style(SKY_BLUE.filled())
                .margin(6)
                .data(
                    rows.iter()
                        .enumerate()
                        .map(|(i, (_, rate, _))| (segment_of(i), *rate)),
                ),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, (_, rate, total))| {
            Text::new(
                format!("n={}", total),
                (rate + 2.0, SegmentValue::CenterOf(segment_of(i))),
                ("sans-serif", 12).into_font(),
            )
        }))
        .map_err(chart_err)?;

    Ok(())
}

fn draw_pattern_panel(area: &Panel<'_>, pattern_stats: &PatternStats) -> AuditResult<()> {
    let bars: Vec<(&'static str, f64, usize)> = Pattern::iter()
        .map(|p| {
            (
                p.short_label(),
                pattern_stats.percentage(p),
                pattern_stats.count(p),
            )
        })
        .collect();

    let max = bars.iter().map(|b| b.1).fold(0.0, f64::max);
    let y_max = if max > 0.0 { max * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Normalization Patterns", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => bars
                .get(*i as usize)
                .map(|b| b.0.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc("Percentage of Analyzed Rows (%)")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(LIGHT_CORAL.filled())
                .margin(20)
                .data(bars.iter().enumerate().map(|(i, b)| (i as u32, b.1))),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, b)| {
            Text::new(
                format!("n={}", b.2),
                (SegmentValue::CenterOf(i as u32), b.1 + y_max * 0.05),
                ("sans-serif", 12).into_font(),
            )
        }))
        .map_err(chart_err)?;

    Ok(())
}
