//! Advisory recommendation rules
//!
//! Four independent threshold ladders turn a [`MeasurementInput`] into
//! human-readable advice. Boundaries are exact: NDVI 0.4 and 0.7 are
//! moderate, soil moisture 20 and 50 are optimal.

use serde::{Deserialize, Serialize};

use super::MeasurementInput;

/// Crop health band by NDVI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropHealth {
    /// NDVI above 0.7
    Thriving,
    /// NDVI from 0.4 to 0.7 inclusive
    Moderate,
    /// NDVI below 0.4
    Stressed,
}

impl CropHealth {
    pub fn classify(ndvi: f64) -> Self {
        match ndvi {
            n if n > 0.7 => CropHealth::Thriving,
            n if n >= 0.4 => CropHealth::Moderate,
            _ => CropHealth::Stressed,
        }
    }

    pub fn message(&self, crop_type: &str, ndvi: f64) -> String {
        match self {
            CropHealth::Thriving => format!(
                "The NDVI value is high ({}). {} is growing well! Maintain current irrigation and fertilization practices.",
                ndvi, crop_type
            ),
            CropHealth::Moderate => format!(
                "The NDVI value ({}) is moderate. Consider applying organic fertilizers or adjusting irrigation to improve crop health.",
                ndvi
            ),
            CropHealth::Stressed => format!(
                "Low NDVI detected ({}). Possible crop stress in {}. Check for diseases, nutrient deficiencies, or water shortages.",
                ndvi, crop_type
            ),
        }
    }
}

/// Irrigation need by soil moisture, refined by temperature when dry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationNeed {
    /// Moisture below 20 and temperature above 30
    Urgent,
    /// Moisture below 20
    Light,
    /// Moisture from 20 to 50 inclusive
    Maintain,
    /// Moisture above 50
    Reduce,
}

impl IrrigationNeed {
    pub fn classify(soil_moisture: f64, temperature: f64) -> Self {
        match soil_moisture {
            m if m < 20.0 && temperature > 30.0 => IrrigationNeed::Urgent,
            m if m < 20.0 => IrrigationNeed::Light,
            m if m <= 50.0 => IrrigationNeed::Maintain,
            _ => IrrigationNeed::Reduce,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            IrrigationNeed::Urgent => {
                "Soil moisture is low and high temperature detected. Increase irrigation frequency to prevent crop wilting."
            }
            IrrigationNeed::Light => {
                "Soil moisture is below optimal levels. Consider light irrigation to maintain crop health."
            }
            IrrigationNeed::Maintain => {
                "Soil moisture is at an optimal level. Maintain current irrigation schedule."
            }
            IrrigationNeed::Reduce => {
                "Soil moisture is high. Reduce watering to avoid waterlogging and root diseases."
            }
        }
    }
}

/// Pest pressure by temperature and humidity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PestRisk {
    /// Hot (> 30°C) and humid (> 70%)
    High,
    /// Cool (< 20°C) and dry (< 50%)
    Low,
    Moderate,
}

impl PestRisk {
    pub fn classify(temperature: f64, humidity: f64) -> Self {
        match (temperature, humidity) {
            (t, h) if t > 30.0 && h > 70.0 => PestRisk::High,
            (t, h) if t < 20.0 && h < 50.0 => PestRisk::Low,
            _ => PestRisk::Moderate,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PestRisk::High => {
                "High temperature and humidity increase fungal and insect pest risks. Apply a bio-pesticide or Neem-based spray to control infestations."
            }
            PestRisk::Low => {
                "Pest risk is low due to cooler, drier conditions. Reduce pesticide use but continue monitoring for potential outbreaks."
            }
            PestRisk::Moderate => {
                "Moderate weather conditions detected. Continue regular pest monitoring and apply pesticide only if infestation is noticed."
            }
        }
    }
}

/// Extra advice for compound conditions; at most one applies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalAdvice {
    DroughtResilience,
    HeatStress,
    FungalDisease,
}

impl AdditionalAdvice {
    pub fn classify(input: &MeasurementInput) -> Option<Self> {
        let MeasurementInput {
            ndvi_value: ndvi,
            soil_moisture: moisture,
            temperature: temp,
            humidity,
            ..
        } = *input;

        if ndvi < 0.4 && moisture < 20.0 {
            Some(AdditionalAdvice::DroughtResilience)
        } else if ndvi > 0.7 && temp > 35.0 {
            Some(AdditionalAdvice::HeatStress)
        } else if humidity > 80.0 && temp > 28.0 {
            Some(AdditionalAdvice::FungalDisease)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AdditionalAdvice::DroughtResilience => {
                "Crop health is poor, and soil moisture is low. Consider drought-resistant crop varieties or mulching to retain moisture."
            }
            AdditionalAdvice::HeatStress => {
                "High NDVI and extreme temperature detected. Increase shade nets or micro-irrigation to prevent heat stress in crops."
            }
            AdditionalAdvice::FungalDisease => {
                "High humidity and warm temperature detected. Risk of fungal diseases like powdery mildew is high. Use appropriate fungicides."
            }
        }
    }
}

/// Classified state of a field, one variant per ladder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldAssessment {
    pub crop_health: CropHealth,
    pub irrigation: IrrigationNeed,
    pub pest_risk: PestRisk,
    pub additional: Option<AdditionalAdvice>,
}

impl FieldAssessment {
    pub fn assess(input: &MeasurementInput) -> Self {
        Self {
            crop_health: CropHealth::classify(input.ndvi_value),
            irrigation: IrrigationNeed::classify(input.soil_moisture, input.temperature),
            pest_risk: PestRisk::classify(input.temperature, input.humidity),
            additional: AdditionalAdvice::classify(input),
        }
    }
}

/// Advisory sentences returned to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationSet {
    pub crop_recommendation: String,
    pub irrigation_recommendation: String,
    pub pesticide_recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_advice: Option<String>,
}

impl RecommendationSet {
    /// Key/text pairs in display order, skipping absent advice
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            ("crop_recommendation", self.crop_recommendation.as_str()),
            (
                "irrigation_recommendation",
                self.irrigation_recommendation.as_str(),
            ),
            (
                "pesticide_recommendation",
                self.pesticide_recommendation.as_str(),
            ),
        ];
        if let Some(advice) = &self.additional_advice {
            entries.push(("additional_advice", advice.as_str()));
        }
        entries
    }
}

/// Produce the recommendation set for a field
pub fn generate_recommendations(input: &MeasurementInput) -> RecommendationSet {
    let assessment = FieldAssessment::assess(input);

    RecommendationSet {
        crop_recommendation: assessment
            .crop_health
            .message(&input.crop_type, input.ndvi_value),
        irrigation_recommendation: assessment.irrigation.message().to_string(),
        pesticide_recommendation: assessment.pest_risk.message().to_string(),
        additional_advice: assessment.additional.map(|a| a.message().to_string()),
    }
}

/// Render recommendations as plain text, one `Label: text` line per entry
pub fn format_recommendations(recommendations: &RecommendationSet) -> String {
    recommendations
        .entries()
        .into_iter()
        .map(|(key, text)| format!("{}: {}", humanize_key(key), text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `pesticide_recommendation` -> `Pesticide recommendation`
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
