use serde::{Deserialize, Serialize};
use std::fmt;

/// Outdoor-suitability rating, ordered from best to worst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Moderate and severe weather call for an indoor plan.
    pub fn is_bad(&self) -> bool {
        *self >= Severity::Moderate
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw current conditions as reported by the weather provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub weathercode: Option<i32>,
}

/// Classified weather, consumed read-only by the Plan-B engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherAssessment {
    pub is_bad_weather: bool,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windspeed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weathercode: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Good < Severity::Mild);
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert_eq!(Severity::Mild.max(Severity::Severe), Severity::Severe);
    }

    #[test]
    fn test_bad_weather_threshold() {
        assert!(!Severity::Good.is_bad());
        assert!(!Severity::Mild.is_bad());
        assert!(Severity::Moderate.is_bad());
        assert!(Severity::Severe.is_bad());
    }

    #[test]
    fn test_assessment_omits_empty_optionals() {
        let assessment = WeatherAssessment {
            is_bad_weather: false,
            severity: Severity::Good,
            description: "晴天".to_string(),
            recommendation: "天气良好，适合户外运动".to_string(),
            temperature_c: None,
            windspeed: None,
            weathercode: Some(0),
            warnings: vec![],
        };
        let value = serde_json::to_value(&assessment).unwrap();
        assert_eq!(value["severity"], "good");
        assert!(value.get("warnings").is_none());
        assert!(value.get("temperature_c").is_none());
        assert_eq!(value["weathercode"], 0);
    }
}
