//! The canonical scoring parameters and their display helpers.

/// Score at or above which a parameter counts as a key strength.
pub const KEY_STRENGTH_THRESHOLD: f64 = 85.0;

/// Score at or above which a parameter is considered acceptable.
pub const FAIR_THRESHOLD: f64 = 70.0;

/// One of the 17 sub-scores contributing to a candidate's composite score.
///
/// Variants are declared in the order the breakdown is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    Fatigue,
    RestPeriod,
    ConsecutiveDuty,
    MedicalStatus,
    Performance,
    OnTimeRecord,
    SkillProficiency,
    Reliability,
    BackoutHistory,
    Seniority,
    FlightHours,
    Location,
    Availability,
    DutyCompliance,
    CertificationValidity,
    LanguageProficiency,
    RouteFamiliarity,
}

impl Parameter {
    pub const ALL: [Parameter; 17] = [
        Parameter::Fatigue,
        Parameter::RestPeriod,
        Parameter::ConsecutiveDuty,
        Parameter::MedicalStatus,
        Parameter::Performance,
        Parameter::OnTimeRecord,
        Parameter::SkillProficiency,
        Parameter::Reliability,
        Parameter::BackoutHistory,
        Parameter::Seniority,
        Parameter::FlightHours,
        Parameter::Location,
        Parameter::Availability,
        Parameter::DutyCompliance,
        Parameter::CertificationValidity,
        Parameter::LanguageProficiency,
        Parameter::RouteFamiliarity,
    ];

    /// Key used for this parameter in the `parameters` and `weights` maps.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Fatigue => "fatigueScore",
            Parameter::RestPeriod => "restPeriodScore",
            Parameter::ConsecutiveDuty => "consecutiveDutyScore",
            Parameter::MedicalStatus => "medicalStatusScore",
            Parameter::Performance => "performanceScore",
            Parameter::OnTimeRecord => "onTimeRecordScore",
            Parameter::SkillProficiency => "skillProficiencyScore",
            Parameter::Reliability => "reliabilityScore",
            Parameter::BackoutHistory => "backoutHistoryScore",
            Parameter::Seniority => "seniorityScore",
            Parameter::FlightHours => "flightHoursScore",
            Parameter::Location => "locationScore",
            Parameter::Availability => "availabilityScore",
            Parameter::DutyCompliance => "dutyComplianceScore",
            Parameter::CertificationValidity => "certificationValidityScore",
            Parameter::LanguageProficiency => "languageProficiencyScore",
            Parameter::RouteFamiliarity => "routeFamiliarityScore",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|parameter| parameter.key() == key)
    }

    pub fn display_name(self) -> String {
        display_name(self.key())
    }
}

/// Human readable label for a raw parameter key.
///
/// Drops a trailing `Score`, splits camel case on capitals and capitalizes the
/// first letter: `technicalSkillScore` becomes `Technical Skill`.
pub fn display_name(key: &str) -> String {
    let stem = key.strip_suffix("Score").unwrap_or(key);

    let mut name = String::with_capacity(stem.len() + 4);
    for (idx, ch) in stem.chars().enumerate() {
        if idx == 0 {
            name.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                name.push(' ');
            }
            name.push(ch);
        }
    }

    name.trim().to_string()
}

/// Coarse quality band of a 0-100 score, used to color parameter bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= KEY_STRENGTH_THRESHOLD {
            ScoreBand::Strong
        } else if score >= FAIR_THRESHOLD {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            ScoreBand::Strong => "bg-success",
            ScoreBand::Fair => "bg-warning",
            ScoreBand::Weak => "bg-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix_and_splits_camel_case() {
        assert_eq!(display_name("technicalSkillScore"), "Technical Skill");
        assert_eq!(display_name("fatigueScore"), "Fatigue");
        assert_eq!(display_name("onTimeRecordScore"), "On Time Record");
        assert_eq!(
            display_name("certificationValidityScore"),
            "Certification Validity"
        );
    }

    /// Tests keys that do not follow the usual `...Score` shape.
    ///
    /// Expected: only a trailing suffix is removed; a key without it is still split
    #[test]
    fn handles_keys_without_suffix() {
        assert_eq!(display_name("scoreOfSeniority"), "Score Of Seniority");
        assert_eq!(display_name("seniority"), "Seniority");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn canonical_keys_round_trip_and_are_unique() {
        for parameter in Parameter::ALL {
            assert_eq!(Parameter::from_key(parameter.key()), Some(parameter));
        }

        let mut keys: Vec<_> = Parameter::ALL.iter().map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 17);
        assert_eq!(Parameter::from_key("technicalSkillScore"), None);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::of(85.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(84.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(70.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(69.9), ScoreBand::Weak);
    }
}
