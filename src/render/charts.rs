//! Inline SVG charts
//!
//! Two charts explain a decision:
//! - a bar chart with one bar per factor (−1 active risk, +1 active strength, 0 otherwise)
//! - a pie chart splitting active factors into risk vs strength
//!
//! Both are drawn with plotters into an in-memory SVG string so the page needs
//! no client-side code. This module only decides colours, labels and layout.

use super::format::percent;
use crate::analysis::flags::{Balance, FactorKind, RiskStrengthFlags};
use crate::error::CreditError;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use std::error::Error;

/// Fill for risk bars and slices
pub const RISK_COLOR: RGBColor = RGBColor(0xe4, 0x57, 0x56);
/// Fill for strength bars and slices
pub const STRENGTH_COLOR: RGBColor = RGBColor(0x54, 0xa2, 0x4b);

const PLACEHOLDER_COLOR: RGBColor = RGBColor(0xf0, 0xf0, 0xf0);
const MUTED_TEXT: RGBColor = RGBColor(0x77, 0x77, 0x77);

/// Legend names of the two pie slices, risk first
pub const SLICE_LABELS: [&str; 2] = ["Risk Factors", "Strength Factors"];

const BAR_SIZE: (u32, u32) = (720, 320);
const PIE_SIZE: (u32, u32) = (420, 360);
const PIE_RADIUS: f64 = 120.0;
/// First slice starts at 12 o'clock; plotters sweeps clockwise
const PIE_START_DEG: f64 = -90.0;

/// Fill for a factor of the given kind
pub fn factor_color(kind: FactorKind) -> RGBColor {
    match kind {
        FactorKind::Risk => RISK_COLOR,
        FactorKind::Strength => STRENGTH_COLOR,
    }
}

/// Bar chart of factor impacts
///
/// # Errors
///
/// Returns `CreditError::Render` if plotters fails to lay out the chart.
pub fn bar_chart_svg(flags: &RiskStrengthFlags) -> Result<String, CreditError> {
    let mut svg = String::new();
    draw_bars(&mut svg, flags).map_err(|e| CreditError::Render(format!("bar chart: {}", e)))?;
    Ok(svg)
}

fn draw_bars(buf: &mut String, flags: &RiskStrengthFlags) -> Result<(), Box<dyn Error>> {
    let factors: Vec<_> = flags.factors().collect();
    let impacts = flags.impacts();

    let root = SVGBackend::with_string(buf, BAR_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Integer ranges are inclusive in plotters: 0..=7 is eight segments
    let last = impacts.len().saturating_sub(1);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(40)
        .build_cartesian_2d((0..last).into_segmented(), -1.2f64..1.2f64)?;

    let factor_name = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => impacts
            .get(*i)
            .map(|(name, _)| name.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    let impact_tick = |v: &f64| format!("{:.0}", v);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(impacts.len())
        .x_label_formatter(&factor_name)
        .x_label_style(("sans-serif", 11))
        .y_labels(3)
        .y_label_formatter(&impact_tick)
        .y_desc("Impact")
        .light_line_style(WHITE)
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(SegmentValue::Exact(0), 0.0), (SegmentValue::Last, 0.0)],
        BLACK.stroke_width(1),
    )))?;

    chart.draw_series(
        factors
            .iter()
            .enumerate()
            .filter(|(_, f)| f.impact() != 0)
            .map(|(i, f)| {
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), f64::from(f.impact())),
                    ],
                    factor_color(f.kind).filled(),
                );
                bar.set_margin(0, 0, 14, 14);
                bar
            }),
    )?;

    root.present()?;
    Ok(())
}

/// Angle (radians) through the middle of each slice, in plotters' screen frame
///
/// Mirrors how `Pie` walks its wedges so the percentage texts sit on the same
/// radius as their slice. A zero share yields its boundary angle.
fn slice_midpoints(shares: &[f64], start_deg: f64) -> Vec<f64> {
    let mut offset = start_deg.to_radians();
    shares
        .iter()
        .map(|share| {
            let sweep = share * std::f64::consts::TAU;
            let mid = offset + sweep / 2.0;
            offset += sweep;
            mid
        })
        .collect()
}

/// Pie chart of active risk vs strength factors
///
/// Both slices are always labelled, with their percentage, even when one of
/// them is empty. With no active factor there is nothing to split and a grey
/// placeholder is drawn instead.
///
/// # Errors
///
/// Returns `CreditError::Render` if plotters fails to lay out the chart.
pub fn pie_chart_svg(balance: Option<&Balance>) -> Result<String, CreditError> {
    let mut svg = String::new();
    draw_pie(&mut svg, balance).map_err(|e| CreditError::Render(format!("pie chart: {}", e)))?;
    Ok(svg)
}

fn draw_pie(buf: &mut String, balance: Option<&Balance>) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::with_string(buf, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let center = (PIE_SIZE.0 as i32 / 2, PIE_SIZE.1 as i32 / 2);
    let centered = |size: u32, color: &'static RGBColor| {
        ("sans-serif", size)
            .into_font()
            .color(color)
            .pos(Pos::new(HPos::Center, VPos::Center))
    };

    let Some(balance) = balance else {
        root.draw(&Circle::new(
            center,
            PIE_RADIUS as i32,
            PLACEHOLDER_COLOR.filled(),
        ))?;
        root.draw(&Text::new(
            "No risk or strength factors",
            center,
            centered(14, &MUTED_TEXT),
        ))?;
        root.present()?;
        return Ok(());
    };

    let sizes = [balance.risk_count as f64, balance.strength_count as f64];
    let shares = [balance.risk_share, balance.strength_share];
    let colors = [RISK_COLOR, STRENGTH_COLOR];

    let mut pie = Pie::new(&center, &PIE_RADIUS, &sizes, &colors, &SLICE_LABELS);
    pie.start_angle(PIE_START_DEG);
    pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
    pie.label_offset(10.0);
    root.draw(&pie)?;

    // Own percentage texts: whole percents, and a zero share still gets "0%"
    let text_radius = PIE_RADIUS * 0.6;
    for (share, theta) in shares.iter().zip(slice_midpoints(&shares, PIE_START_DEG)) {
        let at = (
            center.0 + (text_radius * theta.cos()).round() as i32,
            center.1 + (text_radius * theta.sin()).round() as i32,
        );
        root.draw(&Text::new(percent(*share, 0), at, centered(15, &WHITE)))?;
    }

    root.present()?;
    Ok(())
}
