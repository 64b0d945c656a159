//! Display decomposition of ranked recommendations.
//!
//! The backend has already scored and ranked every candidate. This module only
//! reshapes each payload for rendering: canonical parameter rows paired with
//! their weights, the 5-point rating, and any contract problems found in the
//! parameter and weight maps. Order, rank, composite score and key strengths
//! are passed through untouched.

use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::recommendation::RecommendationDto;

use super::parameter::{display_name, Parameter};

/// Allowed drift of the weight total from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Mismatch between a recommendation payload and the canonical parameter set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractIssue {
    #[error("no score for parameter '{0}'")]
    MissingParameter(String),

    #[error("no weight for parameter '{0}'")]
    MissingWeight(String),

    #[error("unexpected parameter '{0}'")]
    UnexpectedParameter(String),

    #[error("unexpected weight '{0}'")]
    UnexpectedWeight(String),

    #[error("weights sum to {0:.3} instead of 1.0")]
    WeightSum(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterRow {
    pub parameter: Parameter,
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

impl ParameterRow {
    /// Weight as a whole percentage, e.g. `0.15` → `15`.
    pub fn weight_percent(&self) -> i64 {
        (self.weight * 100.0).round() as i64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationView {
    pub rank: u32,
    pub emp_id: String,
    pub name: String,
    pub designation: String,
    pub base_location: String,
    pub composite_score: f64,
    pub parameters: Vec<ParameterRow>,
    pub key_strengths: Vec<String>,
    pub issues: Vec<ContractIssue>,
}

impl RecommendationView {
    /// Composite score on the 5-point scale.
    pub fn rating(&self) -> f64 {
        (self.composite_score / 20.0).clamp(0.0, 5.0)
    }

    /// Fraction of the score ring to fill, in [0, 1].
    pub fn score_fraction(&self) -> f64 {
        (self.composite_score / 100.0).clamp(0.0, 1.0)
    }
}

impl From<&RecommendationDto> for RecommendationView {
    fn from(dto: &RecommendationDto) -> Self {
        let mut parameters = Vec::with_capacity(Parameter::ALL.len());
        let mut issues = Vec::new();

        for parameter in Parameter::ALL {
            let key = parameter.key();
            match (dto.parameters.get(key), dto.weights.get(key)) {
                (Some(&score), Some(&weight)) => parameters.push(ParameterRow {
                    parameter,
                    name: display_name(key),
                    score,
                    weight,
                }),
                (None, _) => issues.push(ContractIssue::MissingParameter(key.to_string())),
                (Some(_), None) => issues.push(ContractIssue::MissingWeight(key.to_string())),
            }
        }

        issues.extend(
            dto.parameters
                .keys()
                .filter(|key| Parameter::from_key(key).is_none())
                .map(|key| ContractIssue::UnexpectedParameter(key.clone())),
        );
        issues.extend(
            dto.weights
                .keys()
                .filter(|key| Parameter::from_key(key).is_none())
                .map(|key| ContractIssue::UnexpectedWeight(key.clone())),
        );

        let weight_sum: f64 = Parameter::ALL
            .iter()
            .filter_map(|parameter| dto.weights.get(parameter.key()))
            .sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            issues.push(ContractIssue::WeightSum(weight_sum));
        }

        for issue in &issues {
            tracing::warn!("Recommendation #{} ({}): {}", dto.rank, dto.emp_id, issue);
        }

        Self {
            rank: dto.rank,
            emp_id: dto.emp_id.clone(),
            name: dto.name.clone(),
            designation: dto.designation.clone(),
            base_location: dto.base_location.clone(),
            composite_score: dto.composite_score,
            parameters,
            key_strengths: dto.key_strengths.clone(),
            issues,
        }
    }
}

/// Builds one view per recommendation, keeping the order received.
pub fn build_recommendation_views(recommendations: &[RecommendationDto]) -> Vec<RecommendationView> {
    recommendations.iter().map(RecommendationView::from).collect()
}

#[cfg(test)]
mod test;
