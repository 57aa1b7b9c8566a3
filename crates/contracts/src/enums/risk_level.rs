use serde::{Deserialize, Serialize};

/// Уровень риска правила или алерта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "BAJ")]
    Low,
    #[default]
    #[serde(rename = "MED")]
    Medium,
    #[serde(rename = "ALT")]
    High,
}

impl RiskLevel {
    pub fn code(&self) -> &'static str {
        match self {
            RiskLevel::Low => "BAJ",
            RiskLevel::Medium => "MED",
            RiskLevel::High => "ALT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Bajo",
            RiskLevel::Medium => "Medio",
            RiskLevel::High => "Alto",
        }
    }

    pub fn all() -> Vec<RiskLevel> {
        vec![RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BAJ" => Some(RiskLevel::Low),
            "MED" => Some(RiskLevel::Medium),
            "ALT" => Some(RiskLevel::High),
            _ => None,
        }
    }
}
