use crate::constants::{EXTREME_COLD_THRESHOLD_C, EXTREME_HEAT_THRESHOLD_C, HIGH_WIND_THRESHOLD_KMH};
use crate::models::{CurrentWeather, Severity, WeatherAssessment};

/// WMO weather interpretation codes as reported by Open-Meteo.
const WMO_CODES: &[(i32, Severity, &str)] = &[
    (0, Severity::Good, "晴天"),
    (1, Severity::Good, "大部晴朗"),
    (2, Severity::Good, "局部多云"),
    (3, Severity::Good, "阴天"),
    (45, Severity::Mild, "雾"),
    (48, Severity::Mild, "雾凇"),
    (51, Severity::Mild, "小毛毛雨"),
    (53, Severity::Moderate, "中毛毛雨"),
    (55, Severity::Moderate, "密集毛毛雨"),
    (56, Severity::Moderate, "轻度冻毛毛雨"),
    (57, Severity::Severe, "重度冻毛毛雨"),
    (61, Severity::Mild, "小雨"),
    (63, Severity::Moderate, "中雨"),
    (65, Severity::Severe, "大雨"),
    (66, Severity::Severe, "轻度冻雨"),
    (67, Severity::Severe, "重度冻雨"),
    (71, Severity::Mild, "小雪"),
    (73, Severity::Moderate, "中雪"),
    (75, Severity::Severe, "大雪"),
    (77, Severity::Moderate, "霰（雪粒）"),
    (80, Severity::Mild, "小阵雨"),
    (81, Severity::Moderate, "中阵雨"),
    (82, Severity::Severe, "暴雨"),
    (85, Severity::Moderate, "小阵雪"),
    (86, Severity::Severe, "大阵雪"),
    (95, Severity::Severe, "雷暴"),
    (96, Severity::Severe, "雷暴伴冰雹（轻）"),
    (99, Severity::Severe, "雷暴伴冰雹（重）"),
];

/// Severity and Chinese description of a WMO code. Unknown codes rate as good.
pub fn classify_code(code: i32) -> (Severity, String) {
    WMO_CODES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, severity, description)| (*severity, description.to_string()))
        .unwrap_or_else(|| (Severity::Good, format!("未知天气（代码{}）", code)))
}

pub fn recommendation(severity: Severity) -> &'static str {
    match severity {
        Severity::Severe => "天气恶劣，强烈建议改为室内运动",
        Severity::Moderate => "天气不佳，建议改为室内运动",
        Severity::Mild => "天气尚可，建议根据自身情况决定是否户外运动",
        Severity::Good => "天气良好，适合户外运动",
    }
}

/// Combine code, temperature and wind into one assessment.
/// Temperature and wind only ever raise the severity.
pub fn assess(current: &CurrentWeather) -> WeatherAssessment {
    let (mut severity, description) = match current.weathercode {
        Some(code) => classify_code(code),
        None => (Severity::Good, "天气信息不完整".to_string()),
    };
    let mut warnings = Vec::new();

    if let Some(t) = current.temperature {
        if t <= EXTREME_COLD_THRESHOLD_C {
            severity = severity.max(Severity::Severe);
            warnings.push(format!("极端低温（{}℃），不适合户外运动", t));
        } else if t >= EXTREME_HEAT_THRESHOLD_C {
            severity = severity.max(Severity::Severe);
            warnings.push(format!("极端高温（{}℃），有中暑风险", t));
        }
    }

    if let Some(wind) = current.windspeed {
        if wind >= HIGH_WIND_THRESHOLD_KMH {
            severity = severity.max(Severity::Moderate);
            warnings.push(format!("大风（{}km/h），户外运动有安全隐患", wind));
        }
    }

    WeatherAssessment {
        is_bad_weather: severity.is_bad(),
        severity,
        description,
        recommendation: recommendation(severity).to_string(),
        temperature_c: current.temperature,
        windspeed: current.windspeed,
        weathercode: current.weathercode,
        warnings,
    }
}
