//! Renders the dashboard sections, in the tab order of the UI: Resumen,
//! Progreso, KPIs, Quick Wins. Stdout carries the cards and summaries; the
//! run directory receives the charts, the comparison table, and the trend
//! export.

use crate::config::UserData;
use crate::plotting;
use anyhow::{Context, Result};
use bodysculpt_core::{
    analysis::{self, GoalProgress, MetricDelta},
    export::{self, DerivedSnapshot, TrendExporter},
};
use bodysculpt_schemas::{
    comparison::BodyComparison,
    kpi::{Kpi, KpiStatus},
};
use std::{fs, path::Path};

pub fn run_dashboard(user: &UserData, run_dir: &Path) -> Result<()> {
    let latest = user.data.latest_measurement()?;
    let latest_comp = user.data.latest_composition()?;

    let kpis = analysis::calculate_kpis(&user.profile, latest, latest_comp);
    let comparisons = analysis::get_comparisons(&user.profile, latest);
    let quick_wins = analysis::get_quick_wins(&comparisons);
    let metrics = analysis::overview_metrics(&user.data)?;
    let goals = analysis::goal_progress(&user.goals, &user.data)?;

    print_overview(user, &metrics, &goals)?;
    print_kpis(&kpis);
    print_quick_wins(&quick_wins);

    println!("\n--- [Progreso] Rendering charts ---");
    plotting::generate_all_charts(run_dir, &user.data, &comparisons)?;

    let table_path = run_dir.join("comparison_table.md");
    fs::write(&table_path, comparison_table(&comparisons))
        .with_context(|| format!("Failed to write {}", table_path.display()))?;

    let trends_path = run_dir.join("trends.csv");
    let mut exporter = TrendExporter::new(&trends_path)?;
    exporter.write_trends(&user.data)?;

    export::write_snapshot_json(
        &run_dir.join("derived.json"),
        &DerivedSnapshot {
            kpis: &kpis,
            comparisons: &comparisons,
            quick_wins: &quick_wins,
        },
    )?;
    println!("Comparison table and exports saved to '{}'.", run_dir.display());

    Ok(())
}

fn print_overview(user: &UserData, metrics: &[MetricDelta], goals: &[GoalProgress]) -> Result<()> {
    println!("\n--- [Resumen] {} ---", user.data.period_label()?);

    for metric in metrics {
        println!(
            "  - {:<18} {:>7.2} {:<3} ({:+.2} {})",
            metric.label, metric.value, metric.unit, metric.delta, metric.unit
        );
    }

    println!("\nProgreso hacia objetivos:");
    for goal in goals {
        println!(
            "  - {:<28} {:>7.2} {:<3} -> {:<6} {} {:>5.1}%",
            goal.label,
            goal.current,
            goal.unit,
            goal.target,
            progress_bar(goal.percent),
            goal.percent
        );
    }

    print_highlight(user)?;
    Ok(())
}

fn print_highlight(user: &UserData) -> Result<()> {
    let first = user.data.first_measurement()?;
    let latest = user.data.latest_measurement()?;
    let days = user.data.measurements.len().saturating_sub(1);

    println!("\n¡Excelente progreso en {days} días!");
    println!(
        "Has perdido {:.2} kg y reducido tu grasa corporal en {:.1}%.",
        first.weight - latest.weight,
        first.body_fat - latest.body_fat
    );
    if let (Some(first_waist), Some(latest_waist)) = (first.waist, latest.waist) {
        println!(
            "Tu cintura disminuyó {:.1} cm, lo que mejora significativamente tu Adonis \
             Index y proporción V-Taper.",
            first_waist - latest_waist
        );
    }
    println!("Mantén el déficit calórico moderado para preservar masa muscular.");
    Ok(())
}

fn print_kpis(kpis: &[Kpi]) {
    println!("\n--- [KPIs] Indicadores científicos ---");
    for kpi in kpis {
        let badge = match analysis::kpi_status(kpi) {
            KpiStatus::Optimal => "✓ Óptimo",
            KpiStatus::InProgress => "En progreso",
        };
        // WHtR is quoted to three decimals on the dashboard, the rest to two.
        let decimals: usize = if kpi.name == "WHtR" { 3 } else { 2 };
        println!(
            "\n  {}: {:.*} / {} ideal  [{}]",
            kpi.name, decimals, kpi.actual, kpi.target, badge
        );
        println!("    {}", kpi.description);
        println!("    Acción: {}", kpi.tip);
    }
}

fn print_quick_wins(wins: &[BodyComparison]) {
    println!("\n--- [Quick Wins] Estrategia de transformación ---");
    println!(
        "Enfócate primero en los cambios que generan mayor impacto visual y son más \
         alcanzables."
    );
    for win in wins {
        println!("\n  [{}] {}", win.priority.label(), win.title);
        println!("    {}", win.reason);
        println!("    Impacto: {}", win.impact);
        println!(
            "    Diferencia: {:+.1} {} | Timeline: {}",
            win.difference, win.unit, win.timeline
        );
        println!("    Acciones recomendadas:");
        for action in &win.actions {
            println!("      -> {action}");
        }
    }
}

/// Markdown table mirroring the "Tabla Comparativa Completa" card: signed
/// delta is `actual - ideal` for every zone, unlike the per-zone
/// `difference` policy.
fn comparison_table(comparisons: &[BodyComparison]) -> String {
    let mut table = String::from("| Zona | Actual | Ideal | Diferencia | % del Ideal |\n");
    table.push_str("|------|-------:|------:|-----------:|------------:|\n");
    for comp in comparisons {
        let delta = comp.actual - comp.ideal;
        let pct = (comp.actual / comp.ideal) * 100.0;
        table.push_str(&format!(
            "| {} | {:.1} {} | {:.1} {} | {:+.1} {} | {:.1}% |\n",
            comp.zone, comp.actual, comp.unit, comp.ideal, comp.unit, delta, comp.unit, pct
        ));
    }
    table
}

fn progress_bar(percent: f64) -> String {
    let width = 20usize;
    let filled = ((percent / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
