//! The derivation layer: progress percentages, scientific KPIs, zone
//! comparisons, and the quick-win ranking. Every function is a pure
//! computation over its inputs; nothing here caches or mutates shared state.

use crate::{dataset::TrackingData, error::SculptError};
use bodysculpt_schemas::{
    comparison::{BodyComparison, Priority},
    kpi::{Kpi, KpiStatus},
    measurement::{BodyComposition, Measurement},
    profile::{AnthroProfile, GoalTargets},
};

/// Progress toward a goal line item, ready for a progress-bar card.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub unit: &'static str,
    pub percent: f64,
}

/// A headline metric with its change since the start of the period.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDelta {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub delta: f64,
}

/// Percentage of the initial gap to `target` that has been closed, in
/// [0, 100]. Measures closure of the starting gap rather than proximity to
/// the target, so overshooting past the target still reports 100. Returns
/// 100 outright when `target == start` (the goal was already met).
pub fn calculate_progress(current: f64, target: f64, start: f64) -> f64 {
    let total_change = (target - start).abs();
    let achieved_change = (current - start).abs();
    if total_change == 0.0 {
        return 100.0;
    }
    ((achieved_change / total_change) * 100.0).min(100.0)
}

/// Derives the six scientific KPIs, in fixed dashboard order: WHtR, Adonis
/// Index, Golden Ratio, Biceps/Muñeca, IMC Ajustado, Grasa Visceral.
///
/// The waist comes from the measurement when taped, otherwise from
/// `profile.default_waist`; the remaining circumferences are profile
/// constants.
pub fn calculate_kpis(
    profile: &AnthroProfile,
    measurement: &Measurement,
    composition: &BodyComposition,
) -> Vec<Kpi> {
    let ideal_waist = profile.ideal_waist();
    let current_waist = measurement.waist.unwrap_or(profile.default_waist);
    let ideal_biceps = profile.wrist_cm * 2.5;

    vec![
        Kpi {
            name: "WHtR".to_string(),
            actual: current_waist / profile.height_cm,
            target: 0.47,
            description: "Relación cintura/estatura. Indicador de riesgo metabólico. \
                          Menos de 0.50 es saludable; menos de 0.47 es óptimo."
                .to_string(),
            tip: format!(
                "Reduce cintura {:.1} cm más con déficit calórico moderado y cardio en ayunas 3x semana.",
                current_waist - ideal_waist
            ),
        },
        Kpi {
            name: "Adonis Index".to_string(),
            actual: profile.shoulders / current_waist,
            target: 1.618,
            description: "Ratio hombros/cintura. El \"número de oro\" del físico masculino. \
                          Objetivo: 1.618 (proporción áurea)."
                .to_string(),
            tip: format!(
                "Desarrolla deltoides laterales con press militar y elevaciones laterales. \
                 Reduce cintura otros {:.0} cm.",
                current_waist - ideal_waist
            ),
        },
        Kpi {
            name: "Golden Ratio".to_string(),
            actual: profile.chest / current_waist,
            target: 1.4,
            description: "Relación pecho/cintura. Indica el desarrollo del torso superior \
                          vs. la cintura. Objetivo: 1.3-1.5."
                .to_string(),
            tip: "Añade volumen al pecho con press inclinado y aperturas. Combina con \
                  reducción de cintura para maximizar el ratio."
                .to_string(),
        },
        Kpi {
            name: "Biceps/Muñeca".to_string(),
            actual: profile.biceps / profile.wrist_cm,
            target: 2.5,
            description: "Ratio bíceps flexionado / circunferencia de muñeca. Indica \
                          desarrollo muscular proporcional al frame óseo."
                .to_string(),
            tip: format!(
                "Faltan {:.1} cm de bíceps para el ideal ({:.1} cm). Entrena con curl \
                 concentrado y martillo.",
                ideal_biceps - profile.biceps,
                ideal_biceps
            ),
        },
        Kpi {
            name: "IMC Ajustado".to_string(),
            actual: measurement.bmi,
            target: 23.5,
            description: "IMC corregido por composición corporal. Con alta masa muscular, \
                          el IMC puede estar elevado artificialmente."
                .to_string(),
            tip: "Al ganar músculo y perder grasa, tu IMC bajará naturalmente. Objetivo: \
                  23-24 manteniendo masa magra."
                .to_string(),
        },
        Kpi {
            name: "Grasa Visceral".to_string(),
            actual: f64::from(composition.visceral_fat),
            target: 7.0,
            description: "Grasa alrededor de órganos internos. Nivel 1-9 es saludable; \
                          nivel 10+ es elevado. Reduce con cardio y déficit calórico."
                .to_string(),
            tip: "Incorpora 20-30 min de cardio MISS post-entrenamiento. Prioriza sueño \
                  de 7-8h para regular cortisol."
                .to_string(),
        },
    ]
}

/// Standing of a KPI against its target. WHtR is a risk ratio where lower is
/// better; the other indicators count as optimal within 0.1 of the target.
pub fn kpi_status(kpi: &Kpi) -> KpiStatus {
    let optimal = if kpi.name == "WHtR" {
        kpi.actual < kpi.target
    } else {
        (kpi.actual - kpi.target).abs() < 0.1
    };
    if optimal {
        KpiStatus::Optimal
    } else {
        KpiStatus::InProgress
    }
}

/// Current-versus-ideal comparison for the seven tracked zones, in fixed
/// order: Hombros, Cintura, Bíceps, Pecho, Muslo, Pantorrilla, Antebrazo.
///
/// Ideals follow the McCallum formula anchored on the wrist plus the golden
/// ratio anchored on `height * 0.45`. Only the waist reads from the
/// measurement; the other current values are profile constants.
pub fn get_comparisons(profile: &AnthroProfile, measurement: &Measurement) -> Vec<BodyComparison> {
    let ideal_waist = profile.ideal_waist();
    let current_waist = measurement.waist.unwrap_or(profile.default_waist);

    let ideal_shoulders = ideal_waist * 1.618;
    let ideal_chest = profile.wrist_cm * 6.5;
    let ideal_biceps = profile.wrist_cm * 2.5;
    let ideal_forearm = profile.wrist_cm * 2.0;
    let ideal_thigh = ideal_waist * 0.78;
    let ideal_calf = profile.wrist_cm * 2.5;

    vec![
        BodyComparison {
            zone: "Hombros".to_string(),
            actual: profile.shoulders,
            ideal: ideal_shoulders,
            unit: "cm".to_string(),
            title: "Desarrollar Hombros (Deltoides)".to_string(),
            reason: "Los hombros son el factor #1 del V-Taper y el Adonis Index.".to_string(),
            impact: "Cada 2cm de hombros mejora el Adonis Index en ~0.025 puntos. Impacto \
                     visual inmediato."
                .to_string(),
            difference: ideal_shoulders - profile.shoulders,
            timeline: "12-16 semanas".to_string(),
            actions: vec![
                "Press militar con barra 3x5 (fuerza base)".to_string(),
                "Elevaciones laterales 4x15 (volumen deltoides medios)".to_string(),
                "Face pulls 3x20 (cabeza posterior y salud articular)".to_string(),
                "Frecuencia: 2-3 veces por semana".to_string(),
            ],
            priority: Priority::Critical,
        },
        BodyComparison {
            zone: "Cintura".to_string(),
            actual: current_waist,
            ideal: ideal_waist,
            unit: "cm".to_string(),
            title: format!("Reducir Cintura a {ideal_waist:.1} cm"),
            reason: "La cintura es el denominador del Adonis Index y WHtR. Reducirla \
                     mejora todos los ratios."
                .to_string(),
            impact: format!(
                "Faltan {:.1} cm. Cada cm menos = +0.017 en Adonis Index.",
                current_waist - ideal_waist
            ),
            difference: current_waist - ideal_waist,
            timeline: "4-6 semanas".to_string(),
            actions: vec![
                "Déficit calórico de 400-500 kcal/día".to_string(),
                "Cardio en ayunas 30 min, 4x semana (caminata rápida o bici)".to_string(),
                "Reducir sodio y carbohidratos refinados".to_string(),
                "Planchas y vacuum abdominal para fortalecer transverso".to_string(),
            ],
            priority: Priority::Critical,
        },
        BodyComparison {
            zone: "Bíceps".to_string(),
            actual: profile.biceps,
            ideal: ideal_biceps,
            unit: "cm".to_string(),
            title: "Ganar Masa en Bíceps".to_string(),
            reason: format!(
                "El ratio bíceps/muñeca ({:.2} actual vs 2.5 ideal) indica potencial de \
                 crecimiento.",
                profile.biceps / profile.wrist_cm
            ),
            impact: format!(
                "{:.1} cm para el ideal. Visible al llevar camiseta.",
                ideal_biceps - profile.biceps
            ),
            difference: ideal_biceps - profile.biceps,
            timeline: "16-24 semanas".to_string(),
            actions: vec![
                "Curl con barra EZ 4x8-10 (sobrecarga progresiva)".to_string(),
                "Curl martillo 3x12 (braquial y braquiorradial)".to_string(),
                "Curl concentrado 3x12 por brazo (pico)".to_string(),
                "No exceder 2 días de entrenamiento directo por semana".to_string(),
            ],
            priority: Priority::High,
        },
        BodyComparison {
            zone: "Pecho".to_string(),
            actual: profile.chest,
            ideal: ideal_chest,
            unit: "cm".to_string(),
            title: "Volumen en Pecho".to_string(),
            reason: "Pecho casi en el ideal. Pequeño ajuste mejorará el Golden Ratio."
                .to_string(),
            impact: "Mejora visual del torso y Golden Ratio pecho/cintura.".to_string(),
            difference: ideal_chest - profile.chest,
            timeline: "4-8 semanas".to_string(),
            actions: vec![
                "Press banca inclinado 4x6-8".to_string(),
                "Press con mancuernas plano 3x12".to_string(),
                "Aperturas en cable 3x15".to_string(),
            ],
            priority: Priority::Medium,
        },
        BodyComparison {
            zone: "Muslo".to_string(),
            actual: profile.thigh,
            ideal: ideal_thigh,
            unit: "cm".to_string(),
            title: "Desarrollar Cuádriceps".to_string(),
            reason: "Proporción muslo/cintura importante para el equilibrio visual."
                .to_string(),
            impact: "Equilibrio corporal y simetría general del físico.".to_string(),
            difference: ideal_thigh - profile.thigh,
            timeline: "20-30 semanas".to_string(),
            actions: vec![
                "Sentadilla trasera 4x5-8 (fuerza base)".to_string(),
                "Prensa de piernas 3x12-15".to_string(),
                "Extensiones de cuádriceps 3x15".to_string(),
                "Frecuencia: 2x semana".to_string(),
            ],
            priority: Priority::Medium,
        },
        BodyComparison {
            zone: "Pantorrilla".to_string(),
            actual: profile.calf,
            ideal: ideal_calf,
            unit: "cm".to_string(),
            title: "Desarrollar Pantorrillas".to_string(),
            reason: "Pantorrillas = bíceps del lower body. Proporción ideal = muñeca x 2.5."
                .to_string(),
            impact: "Simetría general y proporciones de las piernas.".to_string(),
            difference: ideal_calf - profile.calf,
            timeline: "24-36 semanas".to_string(),
            actions: vec![
                "Elevaciones de talón de pie 4x20-25 (soleus + gastrocnemius)".to_string(),
                "Elevaciones sentado 4x20 (soleus profundo)".to_string(),
                "Entrena con frecuencia alta (4-6x semana) por su resistencia a la fatiga"
                    .to_string(),
            ],
            priority: Priority::Medium,
        },
        BodyComparison {
            zone: "Antebrazo".to_string(),
            actual: profile.forearm,
            ideal: ideal_forearm,
            unit: "cm".to_string(),
            title: "Fortalecer Antebrazos".to_string(),
            reason: "Ratio ideal antebrazo/bíceps = 0.80. Visible en todos los outfits de \
                     manga corta."
                .to_string(),
            impact: "Apariencia de fuerza y grosor general del brazo.".to_string(),
            difference: ideal_forearm - profile.forearm,
            timeline: "16-24 semanas".to_string(),
            actions: vec![
                "Curl de muñeca con barra 3x20".to_string(),
                "Farmer carries (agarres cargados)".to_string(),
                "Curl martillo y curl reverso para braquiorradial".to_string(),
            ],
            priority: Priority::High,
        },
    ]
}

/// The top five quick wins: highest priority first, ties broken by the larger
/// remaining difference. Sorts a clone; the input slice is left untouched.
pub fn get_quick_wins(comparisons: &[BodyComparison]) -> Vec<BodyComparison> {
    let mut ranked = comparisons.to_vec();
    ranked.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.difference.total_cmp(&a.difference))
    });
    ranked.truncate(5);
    ranked
}

/// The four goal progress cards of the overview tab.
pub fn goal_progress(
    goals: &GoalTargets,
    data: &TrackingData,
) -> Result<Vec<GoalProgress>, SculptError> {
    let first = data.first_measurement()?;
    let latest = data.latest_measurement()?;
    let latest_comp = data.latest_composition()?;

    Ok(vec![
        GoalProgress {
            label: format!("Peso ({} kg objetivo)", goals.weight_kg),
            current: latest.weight,
            target: goals.weight_kg,
            unit: "kg",
            percent: calculate_progress(latest.weight, goals.weight_kg, first.weight),
        },
        GoalProgress {
            label: format!("% Grasa ({}% objetivo)", goals.body_fat_pct),
            current: latest.body_fat,
            target: goals.body_fat_pct,
            unit: "%",
            percent: calculate_progress(latest.body_fat, goals.body_fat_pct, first.body_fat),
        },
        GoalProgress {
            label: format!("Masa Muscular ({} kg)", goals.muscle_mass_kg),
            current: latest_comp.muscle_mass,
            target: goals.muscle_mass_kg,
            unit: "kg",
            percent: calculate_progress(
                latest_comp.muscle_mass,
                goals.muscle_mass_kg,
                goals.muscle_mass_start_kg,
            ),
        },
        GoalProgress {
            label: format!("Grasa Visceral ({})", goals.visceral_fat),
            current: f64::from(latest_comp.visceral_fat),
            target: goals.visceral_fat,
            unit: "",
            percent: calculate_progress(
                f64::from(latest_comp.visceral_fat),
                goals.visceral_fat,
                goals.visceral_fat_start,
            ),
        },
    ])
}

/// The four headline cards: latest value plus change since the first record
/// of the corresponding series.
pub fn overview_metrics(data: &TrackingData) -> Result<Vec<MetricDelta>, SculptError> {
    let first = data.first_measurement()?;
    let latest = data.latest_measurement()?;
    let first_comp = data.first_composition()?;
    let latest_comp = data.latest_composition()?;

    Ok(vec![
        MetricDelta {
            label: "Peso Actual",
            value: latest.weight,
            unit: "kg",
            delta: latest.weight - first.weight,
        },
        MetricDelta {
            label: "% Grasa Corporal",
            value: latest.body_fat,
            unit: "%",
            delta: latest.body_fat - first.body_fat,
        },
        MetricDelta {
            label: "Masa Muscular",
            value: latest_comp.muscle_mass,
            unit: "kg",
            delta: latest_comp.muscle_mass - first_comp.muscle_mass,
        },
        MetricDelta {
            label: "IMC",
            value: latest.bmi,
            unit: "",
            delta: latest.bmi - first.bmi,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn builtin() -> TrackingData {
        TrackingData::builtin()
    }

    fn latest(data: &TrackingData) -> &Measurement {
        data.latest_measurement().unwrap()
    }

    #[test]
    fn progress_measures_gap_closure() {
        let p = calculate_progress(90.3, 83.0, 92.59);
        let expected = (92.59 - 90.3) / (92.59 - 83.0) * 100.0;
        assert!((p - expected).abs() < EPS);
        assert!((p - 23.88).abs() < 0.01);
    }

    #[test]
    fn progress_weight_scenario() {
        let p = calculate_progress(89.03, 83.0, 92.59);
        assert!((p - 37.12).abs() < 0.01);
    }

    #[test]
    fn progress_is_bounded() {
        assert!((calculate_progress(83.0, 83.0, 92.59) - 100.0).abs() < EPS);
        // Overshoot past the target still caps at 100.
        assert!((calculate_progress(80.0, 83.0, 92.59) - 100.0).abs() < EPS);
        for current in [-50.0, 0.0, 83.0, 92.59, 200.0] {
            let p = calculate_progress(current, 83.0, 92.59);
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn progress_degenerate_goal_is_met() {
        assert!((calculate_progress(42.0, 90.0, 90.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn kpis_come_in_fixed_order() {
        let data = builtin();
        let kpis = calculate_kpis(
            &AnthroProfile::default(),
            latest(&data),
            data.latest_composition().unwrap(),
        );
        let names: Vec<&str> = kpis.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "WHtR",
                "Adonis Index",
                "Golden Ratio",
                "Biceps/Muñeca",
                "IMC Ajustado",
                "Grasa Visceral"
            ]
        );
        assert!((kpis[0].target - 0.47).abs() < EPS);
    }

    #[test]
    fn adonis_index_below_target_is_in_progress() {
        let data = builtin();
        let kpis = calculate_kpis(
            &AnthroProfile::default(),
            latest(&data),
            data.latest_composition().unwrap(),
        );
        let adonis = &kpis[1];
        assert!((adonis.actual - 125.0 / 88.0).abs() < EPS);
        assert!((adonis.actual - 1.4205).abs() < 0.001);
        assert_eq!(kpi_status(adonis), KpiStatus::InProgress);
    }

    #[test]
    fn whtr_status_is_directional() {
        let below = Kpi {
            name: "WHtR".to_string(),
            actual: 0.463,
            target: 0.47,
            description: String::new(),
            tip: String::new(),
        };
        assert_eq!(kpi_status(&below), KpiStatus::Optimal);
        let above = Kpi { actual: 0.48, ..below };
        assert_eq!(kpi_status(&above), KpiStatus::InProgress);
    }

    #[test]
    fn waist_falls_back_to_profile_default() {
        let data = builtin();
        let mut measurement = latest(&data).clone();
        measurement.waist = None;
        let kpis = calculate_kpis(
            &AnthroProfile::default(),
            &measurement,
            data.latest_composition().unwrap(),
        );
        assert!((kpis[0].actual - 88.0 / 190.0).abs() < EPS);
    }

    #[test]
    fn comparisons_cover_seven_zones_with_fixed_tiers() {
        let data = builtin();
        let comparisons = get_comparisons(&AnthroProfile::default(), latest(&data));
        let zones: Vec<&str> = comparisons.iter().map(|c| c.zone.as_str()).collect();
        assert_eq!(
            zones,
            [
                "Hombros",
                "Cintura",
                "Bíceps",
                "Pecho",
                "Muslo",
                "Pantorrilla",
                "Antebrazo"
            ]
        );
        let mut tiers: Vec<u8> = comparisons.iter().map(|c| c.priority.tier()).collect();
        tiers.sort_unstable();
        assert_eq!(tiers, [1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn difference_sign_follows_the_zone_policy() {
        let data = builtin();
        let comparisons = get_comparisons(&AnthroProfile::default(), latest(&data));
        let waist = comparisons.iter().find(|c| c.zone == "Cintura").unwrap();
        // Waist wants a decrease: actual - ideal.
        assert!((waist.difference - (88.0 - 85.5)).abs() < EPS);
        let shoulders = comparisons.iter().find(|c| c.zone == "Hombros").unwrap();
        // Shoulders want an increase: ideal - actual.
        assert!((shoulders.difference - (85.5 * 1.618 - 125.0)).abs() < EPS);
    }

    #[test]
    fn quick_wins_rank_without_mutating_input() {
        let data = builtin();
        let comparisons = get_comparisons(&AnthroProfile::default(), latest(&data));
        let before = comparisons.clone();
        let wins = get_quick_wins(&comparisons);
        assert_eq!(comparisons, before);
        assert_eq!(wins.len(), 5);

        // Priority ascending, ties by difference descending.
        for pair in wins.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                assert!(pair[0].difference >= pair[1].difference);
            }
        }
        // Both critical zones lead, shoulders (13.3 cm gap) ahead of waist (2.5 cm).
        assert_eq!(wins[0].zone, "Hombros");
        assert_eq!(wins[1].zone, "Cintura");
    }

    #[test]
    fn quick_wins_cap_at_input_length() {
        let data = builtin();
        let comparisons = get_comparisons(&AnthroProfile::default(), latest(&data));
        let wins = get_quick_wins(&comparisons[..3]);
        assert_eq!(wins.len(), 3);
    }

    #[test]
    fn derivations_are_idempotent() {
        let data = builtin();
        let profile = AnthroProfile::default();
        let measurement = latest(&data);
        let composition = data.latest_composition().unwrap();
        assert_eq!(
            calculate_kpis(&profile, measurement, composition),
            calculate_kpis(&profile, measurement, composition)
        );
        let comparisons = get_comparisons(&profile, measurement);
        assert_eq!(comparisons, get_comparisons(&profile, measurement));
        assert_eq!(get_quick_wins(&comparisons), get_quick_wins(&comparisons));
    }

    #[test]
    fn goal_progress_builds_the_four_cards() {
        let data = builtin();
        let cards = goal_progress(&GoalTargets::default(), &data).unwrap();
        assert_eq!(cards.len(), 4);
        assert!((cards[0].percent - 37.12).abs() < 0.01);
        // Visceral fat went 14 -> 10 toward 5: 4/9 of the gap.
        assert!((cards[3].percent - 4.0 / 9.0 * 100.0).abs() < 0.01);
    }

    #[test]
    fn overview_metrics_report_deltas_from_first_records() {
        let data = builtin();
        let metrics = overview_metrics(&data).unwrap();
        assert_eq!(metrics.len(), 4);
        assert!((metrics[0].delta - (89.03 - 92.59)).abs() < EPS);
        assert!((metrics[2].delta - (66.72 - 65.65)).abs() < EPS);
    }
}
