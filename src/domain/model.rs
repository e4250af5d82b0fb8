use crate::utils::error::{FormError, Result};
use crate::utils::validation::validate_required;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Raw contact form values as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn to_request(&self) -> Result<ContactRequest> {
        validate_required("name", &self.name)?;
        validate_required("email", &self.email)?;
        validate_required("subject", &self.subject)?;
        validate_required("message", &self.message)?;

        Ok(ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// Body of `POST /api/contact`. Only built from a validated [`ContactForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ContactResponse {
    /// Returns the confirmation text of an accepted submission.
    pub fn into_result(self) -> Result<String> {
        if self.success {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(FormError::Rejected {
                message: self
                    .error
                    .unwrap_or_else(|| "Failed to send message".to_string()),
            })
        }
    }
}

/// Planner form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlannerField {
    Population,
    Temperature,
    Weather,
    Roads,
}

impl PlannerField {
    pub const ALL: [PlannerField; 4] = [
        PlannerField::Population,
        PlannerField::Temperature,
        PlannerField::Weather,
        PlannerField::Roads,
    ];
}

/// Raw planner form values as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutForm {
    pub population: String,
    pub temperature: String,
    pub weather: String,
    pub roads: String,
}

impl LayoutForm {
    pub fn to_request(&self) -> Result<LayoutRequest> {
        validate_required("population", &self.population)?;
        validate_required("temperature", &self.temperature)?;
        validate_required("weather", &self.weather)?;
        validate_required("roads", &self.roads)?;

        Ok(LayoutRequest {
            population: self.population.clone(),
            temperature: self.temperature.clone(),
            weather: self.weather.clone(),
            roads: self.roads.clone(),
        })
    }

    /// `None` unless population, temperature and weather are all filled in.
    pub fn recommendation_request(&self) -> Option<RecommendationRequest> {
        if self.population.is_empty() || self.temperature.is_empty() || self.weather.is_empty() {
            return None;
        }

        Some(RecommendationRequest {
            population: self.population.clone(),
            temperature: self.temperature.clone(),
            weather: self.weather.clone(),
        })
    }

    pub fn set(&mut self, field: PlannerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PlannerField::Population => self.population = value,
            PlannerField::Temperature => self.temperature = value,
            PlannerField::Weather => self.weather = value,
            PlannerField::Roads => self.roads = value,
        }
    }
}

/// Body of `POST /api/generate-layout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRequest {
    population: String,
    temperature: String,
    weather: String,
    roads: String,
}

/// Body of `POST /api/get-recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRequest {
    population: String,
    temperature: String,
    weather: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    #[serde(deserialize_with = "string_or_number")]
    pub population: String,
    pub density: String,
    #[serde(deserialize_with = "string_or_number")]
    pub temperature: String,
    pub weather: String,
    #[serde(deserialize_with = "string_or_number")]
    pub road_width: String,
    pub road_description: String,
    pub timestamp: String,
    pub amenities: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub layout_image: Option<String>,
    #[serde(default)]
    pub report: Option<LayoutReport>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A generated layout ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLayout {
    pub layout_image: String,
    pub report: LayoutReport,
}

impl LayoutResponse {
    pub fn into_result(self) -> Result<GeneratedLayout> {
        if !self.success {
            return Err(FormError::Rejected {
                message: self
                    .error
                    .unwrap_or_else(|| "Failed to generate layout".to_string()),
            });
        }

        match (self.layout_image, self.report) {
            (Some(layout_image), Some(report)) => Ok(GeneratedLayout {
                layout_image,
                report,
            }),
            (None, _) => Err(FormError::MalformedResponse {
                message: "layout_image missing from successful response".to_string(),
            }),
            (_, None) => Err(FormError::MalformedResponse {
                message: "report missing from successful response".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendationResponse {
    pub density: String,
    #[serde(deserialize_with = "string_or_number")]
    pub road_width: String,
    pub amenities: Vec<String>,
}

impl RecommendationResponse {
    pub fn road_width_label(&self) -> String {
        format!("Level {}/4", self.road_width)
    }
}

/// Planner regions whose visibility the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Loading,
    Output,
    Placeholder,
    QuickStats,
}

/// Scalar report text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    Population,
    Density,
    Temperature,
    Weather,
    RoadWidth,
    RoadDescription,
    Timestamp,
}

impl ReportField {
    pub const ALL: [ReportField; 7] = [
        ReportField::Population,
        ReportField::Density,
        ReportField::Temperature,
        ReportField::Weather,
        ReportField::RoadWidth,
        ReportField::RoadDescription,
        ReportField::Timestamp,
    ];

    pub fn value<'a>(&self, report: &'a LayoutReport) -> &'a str {
        match self {
            ReportField::Population => &report.population,
            ReportField::Density => &report.density,
            ReportField::Temperature => &report.temperature,
            ReportField::Weather => &report.weather,
            ReportField::RoadWidth => &report.road_width,
            ReportField::RoadDescription => &report.road_description,
            ReportField::Timestamp => &report.timestamp,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportField::Population => "Population",
            ReportField::Density => "Density",
            ReportField::Temperature => "Temperature",
            ReportField::Weather => "Weather",
            ReportField::RoadWidth => "Road width",
            ReportField::RoadDescription => "Roads",
            ReportField::Timestamp => "Generated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportList {
    Amenities,
    Recommendations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickStat {
    Density,
    RoadWidth,
    AmenitiesCount,
}

// The backend is loose about scalar types (e.g. road width is an integer in
// recommendations and a label in reports); everything renders as text.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(s) => s,
        Text::Num(n) => n.to_string(),
    })
}
