use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::{deserialize_id, deserialize_scores, null_as_default};

/// One ranked candidate for a flight, already scored by the backend.
///
/// `parameters` and `weights` are kept as raw maps; the view model checks
/// them against the canonical parameter set instead of trusting the keys.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub rank: u32,
    #[serde(rename = "emp_id", deserialize_with = "deserialize_id")]
    pub emp_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub composite_score: f64,
    #[serde(default, deserialize_with = "deserialize_scores")]
    pub parameters: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "deserialize_scores")]
    pub weights: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_strengths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests a candidate list where one entry carries `null` scores.
    ///
    /// Expected: the whole list decodes, null scores and weights read as 0
    #[test]
    fn null_scores_do_not_reject_the_list() {
        let ranked: Vec<RecommendationDto> = serde_json::from_str(
            r#"[
                {"rank": 1, "emp_id": "E1", "name": "Jane Doe", "compositeScore": 91.5,
                 "parameters": {"performance": 95.0}, "weights": {"performance": 0.2}},
                {"rank": 2, "emp_id": 1002, "name": "Ravi Kumar", "compositeScore": null,
                 "baseLocation": null, "parameters": {"performance": null, "reliability": 80.0},
                 "weights": null, "keyStrengths": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(ranked.len(), 2);
        let second = &ranked[1];
        assert_eq!(second.emp_id, "1002");
        assert_eq!(second.composite_score, 0.0);
        assert_eq!(second.base_location, "");
        assert_eq!(second.parameters.get("performance"), Some(&0.0));
        assert_eq!(second.parameters.get("reliability"), Some(&80.0));
        assert!(second.weights.is_empty());
        assert!(second.key_strengths.is_empty());
    }
}
