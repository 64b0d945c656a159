use crate::model::crew::{Availability, CrewMemberDto};

/// Performance score on the 5-point scale, clamped to [0, 5].
pub fn rating(performance_score: f64) -> f64 {
    (performance_score / 20.0).clamp(0.0, 5.0)
}

/// Rating formatted to one decimal, e.g. `4.6`.
pub fn format_rating(performance_score: f64) -> String {
    format!("{:.1}", rating(performance_score))
}

/// Up to two uppercase initials taken from the first letters of the name's words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

pub fn availability_badge_class(availability: &Availability) -> &'static str {
    match availability {
        Availability::Available => "badge-success",
        Availability::Fatigued => "badge-error",
        Availability::OnLeave => "badge-neutral",
        Availability::Unknown(_) => "badge-ghost",
    }
}

/// `"32h / 120h"` style summary of recent duty hours.
pub fn hours_summary(crew: &CrewMemberDto) -> String {
    format!(
        "{}h / {}h",
        format_number(crew.hours_worked_7d),
        format_number(crew.hours_worked_30d)
    )
}

/// Whole numbers without a trailing `.0`, everything else with one decimal.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Integer with thousands separators, e.g. `4100` → `4,100`.
pub fn format_thousands(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_score_over_twenty() {
        assert_eq!(format_rating(92.0), "4.6");
        assert_eq!(format_rating(100.0), "5.0");
        assert_eq!(format_rating(0.0), "0.0");
    }

    /// Tests that out-of-range scores never leave the 5-point scale.
    #[test]
    fn rating_is_clamped() {
        assert_eq!(rating(140.0), 5.0);
        assert_eq!(rating(-10.0), 0.0);
        for score in [0.0, 17.3, 50.0, 85.0, 99.9] {
            let value = rating(score);
            assert!((0.0..=5.0).contains(&value));
        }
    }

    /// Tests initials for one, two and three word names.
    ///
    /// Expected: "Jane Doe" → "JD", "Madonna" → "M", only the first two words count
    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("Madonna"), "M");
        assert_eq!(initials("anita rao singh"), "AR");
        assert_eq!(initials("  Ravi   Kumar "), "RK");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn unknown_availability_is_neutral() {
        assert_eq!(
            availability_badge_class(&Availability::Unknown("Backup".to_string())),
            "badge-ghost"
        );
        assert_eq!(
            availability_badge_class(&Availability::Fatigued),
            "badge-error"
        );
    }

    #[test]
    fn formats_numbers_for_display() {
        assert_eq!(format_number(32.0), "32");
        assert_eq!(format_number(7.4), "7.4");
        assert_eq!(format_thousands(4100.0), "4,100");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(950.0), "950");
    }
}
