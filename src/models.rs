use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the classifier's response array.
#[derive(Debug, Deserialize, Clone)]
pub struct Prediction {
    pub label: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    #[serde(rename = "Casual / Everyday")]
    Casual,
    #[serde(rename = "Formal / Business")]
    Formal,
    #[serde(rename = "Streetwear / Urban")]
    Streetwear,
    #[serde(rename = "Chic / Fashion-forward")]
    Chic,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "Casual / Everyday",
            Style::Formal => "Formal / Business",
            Style::Streetwear => "Streetwear / Urban",
            Style::Chic => "Chic / Fashion-forward",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitAssessment {
    pub fit_score: u8,
    pub style_description: Style,
    pub detected_labels: Vec<String>,
    pub caption: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LiveMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
