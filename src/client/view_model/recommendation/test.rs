use std::collections::BTreeMap;

use super::*;

const WEIGHTS: [f64; 17] = [
    0.15, 0.10, 0.08, 0.07, 0.10, 0.08, 0.07, 0.08, 0.07, 0.05, 0.05, 0.03, 0.02, 0.02, 0.01,
    0.01, 0.01,
];

fn weights() -> BTreeMap<String, f64> {
    Parameter::ALL
        .iter()
        .zip(WEIGHTS)
        .map(|(parameter, weight)| (parameter.key().to_string(), weight))
        .collect()
}

fn parameters(score: f64) -> BTreeMap<String, f64> {
    Parameter::ALL
        .iter()
        .map(|parameter| (parameter.key().to_string(), score))
        .collect()
}

fn recommendation(rank: u32, name: &str, composite_score: f64) -> RecommendationDto {
    RecommendationDto {
        rank,
        emp_id: format!("E{:03}", rank),
        name: name.to_string(),
        designation: "Senior Cabin Crew".to_string(),
        base_location: "DEL".to_string(),
        composite_score,
        parameters: parameters(80.0),
        weights: weights(),
        key_strengths: vec!["Fatigue".to_string(), "On Time Record".to_string()],
    }
}

/// Tests that a well-formed payload produces all 17 rows in canonical order.
///
/// Expected: 17 rows, fatigue first, route familiarity last, no issues
#[test]
fn builds_rows_in_canonical_order() {
    let view = RecommendationView::from(&recommendation(1, "Jane Doe", 88.4));

    assert!(view.issues.is_empty());
    assert_eq!(view.parameters.len(), 17);
    assert_eq!(view.parameters[0].name, "Fatigue");
    assert_eq!(view.parameters[0].weight_percent(), 15);
    assert_eq!(view.parameters[16].name, "Route Familiarity");
    assert_eq!(view.parameters[16].weight_percent(), 1);
}

/// Tests that ranking fields pass through untouched.
///
/// Expected: composite score and key strengths equal the payload, rating = score / 20
#[test]
fn passes_backend_values_through() {
    let mut dto = recommendation(3, "Ravi Kumar", 91.25);
    dto.key_strengths = vec!["Reliability".to_string()];

    let view = RecommendationView::from(&dto);

    assert_eq!(view.rank, 3);
    assert_eq!(view.composite_score, 91.25);
    assert_eq!(view.key_strengths, vec!["Reliability".to_string()]);
    assert!((view.rating() - 4.5625).abs() < 1e-9);
    assert!((view.score_fraction() - 0.9125).abs() < 1e-9);
}

/// Tests that the received order and rank badges are kept even when ranks are
/// not in ascending order.
///
/// Expected: output order equals input order, ranks copied verbatim
#[test]
fn does_not_resort() {
    let input = vec![
        recommendation(2, "B", 70.0),
        recommendation(1, "A", 95.0),
        recommendation(3, "C", 60.0),
    ];

    let views = build_recommendation_views(&input);

    let ranks: Vec<_> = views.iter().map(|v| v.rank).collect();
    let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(ranks, vec![2, 1, 3]);
    assert_eq!(names, vec!["B", "A", "C"]);
}

/// Tests a payload where one weight is missing.
///
/// Expected: the affected row is skipped, the rest render, and both the missing
/// weight and the short weight total are reported
#[test]
fn skips_row_with_missing_weight() {
    let mut dto = recommendation(1, "Jane Doe", 80.0);
    dto.weights.remove("fatigueScore");

    let view = RecommendationView::from(&dto);

    assert_eq!(view.parameters.len(), 16);
    assert!(view
        .parameters
        .iter()
        .all(|row| row.parameter != Parameter::Fatigue));
    assert!(view
        .issues
        .contains(&ContractIssue::MissingWeight("fatigueScore".to_string())));
    assert!(view
        .issues
        .iter()
        .any(|issue| matches!(issue, ContractIssue::WeightSum(sum) if (sum - 0.85).abs() < 1e-9)));
}

/// Tests a payload carrying a key outside the canonical set.
///
/// Expected: unknown key reported, never rendered as a row
#[test]
fn reports_unexpected_keys() {
    let mut dto = recommendation(1, "Jane Doe", 80.0);
    dto.parameters.insert("technicalSkillScore".to_string(), 99.0);
    dto.parameters.remove("seniorityScore");

    let view = RecommendationView::from(&dto);

    assert_eq!(view.parameters.len(), 16);
    assert!(view
        .issues
        .contains(&ContractIssue::UnexpectedParameter("technicalSkillScore".to_string())));
    assert!(view
        .issues
        .contains(&ContractIssue::MissingParameter("seniorityScore".to_string())));
}

/// Tests the weight total check against the canonical weights.
///
/// Expected: canonical weights pass, inflated weights are flagged
#[test]
fn validates_weight_total() {
    let dto = recommendation(1, "Jane Doe", 80.0);
    let total: f64 = dto.weights.values().sum();
    assert!((total - 1.0).abs() < WEIGHT_SUM_TOLERANCE);

    let mut inflated = dto.clone();
    inflated.weights.insert("fatigueScore".to_string(), 0.25);
    let view = RecommendationView::from(&inflated);

    assert_eq!(view.parameters.len(), 17);
    assert_eq!(view.issues.len(), 1);
    assert!(matches!(view.issues[0], ContractIssue::WeightSum(_)));
}

/// Tests a flight with five ranked candidates.
///
/// Expected: five views, ranks 1..5, each with its own score and exactly the
/// key strengths of its payload
#[test]
fn renders_five_candidates_with_their_strengths() {
    let input: Vec<_> = (1..=5)
        .map(|rank| {
            let mut dto = recommendation(rank, &format!("Crew {}", rank), 100.0 - rank as f64);
            dto.key_strengths = (0..rank as usize)
                .map(|i| Parameter::ALL[i].display_name())
                .collect();
            dto
        })
        .collect();

    let views = build_recommendation_views(&input);

    assert_eq!(views.len(), 5);
    for (view, dto) in views.iter().zip(&input) {
        assert_eq!(view.rank, dto.rank);
        assert_eq!(view.composite_score, dto.composite_score);
        assert_eq!(view.key_strengths, dto.key_strengths);
    }
}

#[test]
fn empty_payload_builds_no_views() {
    assert!(build_recommendation_views(&[]).is_empty());
}
