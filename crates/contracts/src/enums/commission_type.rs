use serde::{Deserialize, Serialize};

/// Тип комиссии: процент от суммы или фиксированная сумма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CommissionType {
    #[default]
    #[serde(rename = "POR")]
    Percentage,
    #[serde(rename = "FIJ")]
    Fixed,
}

impl CommissionType {
    pub fn code(&self) -> &'static str {
        match self {
            CommissionType::Percentage => "POR",
            CommissionType::Fixed => "FIJ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommissionType::Percentage => "Porcentaje",
            CommissionType::Fixed => "Fijo",
        }
    }

    pub fn all() -> Vec<CommissionType> {
        vec![CommissionType::Percentage, CommissionType::Fixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "POR" => Some(CommissionType::Percentage),
            "FIJ" => Some(CommissionType::Fixed),
            _ => None,
        }
    }
}
