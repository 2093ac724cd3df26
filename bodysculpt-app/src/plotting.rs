//! This module is responsible for generating all dashboard charts.

use anyhow::Result;
use bodysculpt_core::dataset::{short_date, TrackingData};
use bodysculpt_schemas::comparison::BodyComparison;
use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

// Dashboard palette
const AMBER: RGBColor = RGBColor(245, 158, 11);
const PURPLE: RGBColor = RGBColor(168, 85, 247);
const CYAN: RGBColor = RGBColor(6, 182, 212);
const EMERALD: RGBColor = RGBColor(16, 185, 129);
const SLATE: RGBColor = RGBColor(100, 116, 139);

/// The main function to generate and save all charts for a dashboard run.
pub fn generate_all_charts(
    run_dir: &Path,
    data: &TrackingData,
    comparisons: &[BodyComparison],
) -> Result<()> {
    println!("[Plotting] Generating charts from tracking data...");

    if data.measurements.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    plot_weight_trend(run_dir, data)?;
    plot_body_composition(run_dir, data)?;
    plot_calorie_balance(run_dir, data)?;
    plot_zone_radar(run_dir, comparisons)?;

    println!("[Plotting] Charts have been saved to '{}'.", run_dir.display());
    Ok(())
}

/// Weight and body-fat evolution on a shared timeline, body fat on the
/// secondary axis.
fn plot_weight_trend(run_dir: &Path, data: &TrackingData) -> Result<()> {
    let path = run_dir.join("1_weight_body_fat.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = data
        .measurements
        .iter()
        .map(|m| short_date(&m.date))
        .collect();
    let max_x = (data.measurements.len() as u64).saturating_sub(1).max(1);

    let weight_min = data.measurements.iter().map(|m| m.weight).fold(f64::MAX, f64::min);
    let weight_max = data.measurements.iter().map(|m| m.weight).fold(0.0, f64::max);
    let fat_min = data.measurements.iter().map(|m| m.body_fat).fold(f64::MAX, f64::min);
    let fat_max = data.measurements.iter().map(|m| m.body_fat).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Evolución del Peso y Grasa", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .right_y_label_area_size(50)
        .build_cartesian_2d(0u64..max_x, (weight_min - 0.5)..(weight_max + 0.5))?
        .set_secondary_coord(0u64..max_x, (fat_min - 0.5)..(fat_max + 0.5));

    chart
        .configure_mesh()
        .x_desc("Fecha")
        .y_desc("Peso (kg)")
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("% Grasa")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            data.measurements
                .iter()
                .enumerate()
                .map(|(i, m)| (i as u64, m.weight)),
            AMBER.stroke_width(3),
        ))?
        .label("Peso (kg)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], AMBER.filled()));

    chart
        .draw_secondary_series(LineSeries::new(
            data.measurements
                .iter()
                .enumerate()
                .map(|(i, m)| (i as u64, m.body_fat)),
            PURPLE.stroke_width(3),
        ))?
        .label("% Grasa")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PURPLE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Muscle mass and visceral fat level over the composition samples.
fn plot_body_composition(run_dir: &Path, data: &TrackingData) -> Result<()> {
    if data.body_compositions.is_empty() {
        println!("[Plotting] Warning: No body-composition samples to plot.");
        return Ok(());
    }

    let path = run_dir.join("2_body_composition.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = data
        .body_compositions
        .iter()
        .map(|c| short_date(&c.date))
        .collect();
    let max_x = (data.body_compositions.len() as u64).saturating_sub(1).max(1);

    let muscle_min = data
        .body_compositions
        .iter()
        .map(|c| c.muscle_mass)
        .fold(f64::MAX, f64::min);
    let muscle_max = data
        .body_compositions
        .iter()
        .map(|c| c.muscle_mass)
        .fold(0.0, f64::max);
    let visceral_max = data
        .body_compositions
        .iter()
        .map(|c| f64::from(c.visceral_fat))
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Composición Corporal", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .right_y_label_area_size(50)
        .build_cartesian_2d(0u64..max_x, (muscle_min - 0.5)..(muscle_max + 0.5))?
        .set_secondary_coord(0u64..max_x, 0f64..visceral_max * 1.2);

    chart
        .configure_mesh()
        .x_desc("Fecha")
        .y_desc("Masa Muscular (kg)")
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Grasa Visceral")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            data.body_compositions
                .iter()
                .enumerate()
                .map(|(i, c)| (i as u64, c.muscle_mass)),
            CYAN.stroke_width(3),
        ))?
        .label("Masa Muscular (kg)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CYAN.filled()));

    chart
        .draw_secondary_series(LineSeries::new(
            data.body_compositions
                .iter()
                .enumerate()
                .map(|(i, c)| (i as u64, f64::from(c.visceral_fat))),
            AMBER.stroke_width(3),
        ))?
        .label("Grasa Visceral")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], AMBER.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Calories consumed versus burned per tracked day. The burned bars are drawn
/// first and wider so the consumed bars overlay inside them.
fn plot_calorie_balance(run_dir: &Path, data: &TrackingData) -> Result<()> {
    if data.nutrition.is_empty() {
        println!("[Plotting] Warning: No nutrition entries to plot.");
        return Ok(());
    }

    let path = run_dir.join("3_calorie_balance.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = data.nutrition.iter().map(|n| short_date(&n.date)).collect();
    let max_cal = data
        .nutrition
        .iter()
        .map(|n| n.calories_consumed.max(n.calories_burned))
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Balance Calórico", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..data.nutrition.len() as u64, 0f64..max_cal * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Fecha")
        .y_desc("kcal")
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .draw()?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(AMBER.mix(0.7).filled())
                .margin(4)
                .data(
                    data.nutrition
                        .iter()
                        .enumerate()
                        .map(|(i, n)| (i as u64, n.calories_burned)),
                ),
        )?
        .label("Calorías Quemadas")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], AMBER.filled()));

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(EMERALD.filled())
                .margin(10)
                .data(
                    data.nutrition
                        .iter()
                        .enumerate()
                        .map(|(i, n)| (i as u64, n.calories_consumed)),
                ),
        )?
        .label("Calorías Consumidas")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], EMERALD.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Radar of each zone's actual circumference as a percentage of its ideal,
/// against the 100 % reference polygon. The radial domain caps at 120 %.
fn plot_zone_radar(run_dir: &Path, comparisons: &[BodyComparison]) -> Result<()> {
    if comparisons.is_empty() {
        return Ok(());
    }

    let path = run_dir.join("4_zone_radar.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled("Comparación Actual vs Ideal", ("sans-serif", 40))?;

    let n = comparisons.len();
    let center = (512, 390);
    let radius = 270.0;
    let max_pct = 120.0;

    let vertex = |pct: f64, i: usize| -> (i32, i32) {
        let angle = 2.0 * PI * (i as f64) / (n as f64) - PI / 2.0;
        let r = radius * (pct / max_pct);
        (
            center.0 + (r * angle.cos()).round() as i32,
            center.1 + (r * angle.sin()).round() as i32,
        )
    };

    // Concentric grid rings every 30 %
    for ring in [30.0, 60.0, 90.0, 120.0] {
        let points: Vec<(i32, i32)> = (0..=n).map(|i| vertex(ring, i % n)).collect();
        area.draw(&PathElement::new(points, SLATE.mix(0.4)))?;
    }

    // Spokes and zone labels
    let label_style = TextStyle::from(("sans-serif", 18).into_font()).color(&BLACK);
    for (i, comp) in comparisons.iter().enumerate() {
        area.draw(&PathElement::new(
            vec![center, vertex(max_pct, i)],
            SLATE.mix(0.4),
        ))?;
        let (x, y) = vertex(max_pct + 16.0, i);
        area.draw_text(&comp.zone, &label_style, (x - 30, y - 8))?;
    }

    // 100 % reference polygon
    let reference: Vec<(i32, i32)> = (0..=n).map(|i| vertex(100.0, i % n)).collect();
    area.draw(&PathElement::new(reference, EMERALD.stroke_width(2)))?;

    // Actual polygon, filled
    let actual: Vec<(i32, i32)> = comparisons
        .iter()
        .enumerate()
        .map(|(i, comp)| vertex((comp.actual / comp.ideal * 100.0).min(max_pct), i))
        .collect();
    area.draw(&Polygon::new(actual.clone(), AMBER.mix(0.3).filled()))?;
    let mut outline = actual;
    outline.push(outline[0]);
    area.draw(&PathElement::new(outline, AMBER.stroke_width(2)))?;

    // Legend
    let legend_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
    area.draw(&PathElement::new(vec![(40, 60), (70, 60)], AMBER.stroke_width(3)))?;
    area.draw_text("Actual % del Ideal", &legend_style, (78, 52))?;
    area.draw(&PathElement::new(vec![(40, 84), (70, 84)], EMERALD.stroke_width(3)))?;
    area.draw_text("Objetivo (100%)", &legend_style, (78, 76))?;

    root.present()?;
    Ok(())
}
