//! Human-readable advisories derived from temperature and sky condition.

/// Temperature bands, evaluated from hottest to coldest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    VeryHot,
    Warm,
    Cool,
    Cold,
    Freezing,
}

impl TemperatureBand {
    /// Classify a Celsius reading. Each threshold is exclusive.
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius > 30.0 {
            Self::VeryHot
        } else if celsius > 20.0 {
            Self::Warm
        } else if celsius > 10.0 {
            Self::Cool
        } else if celsius > 0.0 {
            Self::Cold
        } else {
            Self::Freezing
        }
    }

    pub fn clause(&self) -> &'static str {
        match self {
            Self::VeryHot => "It's very hot! Stay hydrated.",
            Self::Warm => "It's warm and pleasant.",
            Self::Cool => "It's cool outside.",
            Self::Cold => "It's cold, consider wearing a jacket.",
            Self::Freezing => "It's freezing! Bundle up well.",
        }
    }
}

/// Condition categories recognised in a free-text description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    Rain,
    Snow,
    Cloudy,
    Clear,
    LowVisibility,
    Storm,
}

impl ConditionCategory {
    // Order matters: "thunderstorm with light rain" is rain, not storm.
    const KEYWORDS: [(Self, &'static [&'static str]); 6] = [
        (Self::Rain, &["rain", "drizzle"]),
        (Self::Snow, &["snow"]),
        (Self::Cloudy, &["cloud"]),
        (Self::Clear, &["clear"]),
        (Self::LowVisibility, &["fog", "mist"]),
        (Self::Storm, &["thunder", "storm"]),
    ];

    /// Case-insensitive substring match; the first category in list order wins.
    pub fn from_description(description: &str) -> Option<Self> {
        let lowered = description.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(category, _)| *category)
    }

    pub fn clause(&self) -> &'static str {
        match self {
            Self::Rain => "Don't forget your umbrella!",
            Self::Snow => "Watch out for snow and ice!",
            Self::Cloudy => "It's cloudy today.",
            Self::Clear => "Clear skies ahead!",
            Self::LowVisibility => "Be careful of reduced visibility.",
            Self::Storm => "Stormy weather! Stay safe indoors if possible.",
        }
    }
}

/// Builds the advisory: temperature clause, then the condition clause if any.
pub fn weather_message(celsius: f64, description: &str) -> String {
    let temperature = TemperatureBand::from_celsius(celsius).clause();
    match ConditionCategory::from_description(description) {
        Some(condition) => format!("{} {}", temperature, condition.clause()),
        None => temperature.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_exclusive() {
        assert_eq!(TemperatureBand::from_celsius(30.1), TemperatureBand::VeryHot);
        assert_eq!(TemperatureBand::from_celsius(30.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_celsius(20.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::from_celsius(10.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_celsius(0.0), TemperatureBand::Freezing);
        assert_eq!(TemperatureBand::from_celsius(-15.0), TemperatureBand::Freezing);
    }

    #[test]
    fn test_condition_keywords() {
        let cases = [
            ("light rain", ConditionCategory::Rain),
            ("Drizzle", ConditionCategory::Rain),
            ("heavy SNOW", ConditionCategory::Snow),
            ("few clouds", ConditionCategory::Cloudy),
            ("clear sky", ConditionCategory::Clear),
            ("fog", ConditionCategory::LowVisibility),
            ("mist", ConditionCategory::LowVisibility),
            ("thunderstorm", ConditionCategory::Storm),
            ("Storm warning", ConditionCategory::Storm),
        ];
        for (description, expected) in cases {
            assert_eq!(
                ConditionCategory::from_description(description),
                Some(expected),
                "{description}"
            );
        }
    }

    #[test]
    fn test_first_matching_category_wins() {
        assert_eq!(
            ConditionCategory::from_description("thunderstorm with light rain"),
            Some(ConditionCategory::Rain)
        );
        assert_eq!(
            ConditionCategory::from_description("snow clouds"),
            Some(ConditionCategory::Snow)
        );
    }

    #[test]
    fn test_unknown_condition_has_no_category() {
        assert_eq!(ConditionCategory::from_description("haze"), None);
        assert_eq!(ConditionCategory::from_description(""), None);
    }

    #[test]
    fn test_clauses_are_distinct() {
        let clauses: Vec<_> = ConditionCategory::KEYWORDS
            .iter()
            .map(|(category, _)| category.clause())
            .collect();
        for (i, a) in clauses.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &clauses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_message_joins_with_single_space() {
        let message = weather_message(5.0, "light rain");
        assert_eq!(
            message,
            "It's cold, consider wearing a jacket. Don't forget your umbrella!"
        );
        assert!(message.starts_with(TemperatureBand::Cold.clause()));
        assert!(message.ends_with(ConditionCategory::Rain.clause()));
    }

    #[test]
    fn test_message_without_condition_clause() {
        assert_eq!(weather_message(35.0, "haze"), "It's very hot! Stay hydrated.");
    }
}
