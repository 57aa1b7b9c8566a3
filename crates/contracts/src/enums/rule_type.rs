use serde::{Deserialize, Serialize};

/// Тип правила фрод-мониторинга (дискриминатор `tipoRegla`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuleType {
    #[default]
    #[serde(rename = "TRX")]
    TransactionCount,
    #[serde(rename = "MNT")]
    Amount,
    #[serde(rename = "GEO")]
    Location,
    #[serde(rename = "COM")]
    Merchant,
    #[serde(rename = "HOR")]
    Schedule,
}

impl RuleType {
    pub fn code(&self) -> &'static str {
        match self {
            RuleType::TransactionCount => "TRX",
            RuleType::Amount => "MNT",
            RuleType::Location => "GEO",
            RuleType::Merchant => "COM",
            RuleType::Schedule => "HOR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RuleType::TransactionCount => "Transacciones",
            RuleType::Amount => "Monto",
            RuleType::Location => "Ubicación",
            RuleType::Merchant => "Comercio",
            RuleType::Schedule => "Horario",
        }
    }

    pub fn all() -> Vec<RuleType> {
        vec![
            RuleType::TransactionCount,
            RuleType::Amount,
            RuleType::Location,
            RuleType::Merchant,
            RuleType::Schedule,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TRX" => Some(RuleType::TransactionCount),
            "MNT" => Some(RuleType::Amount),
            "GEO" => Some(RuleType::Location),
            "COM" => Some(RuleType::Merchant),
            "HOR" => Some(RuleType::Schedule),
            _ => None,
        }
    }
}
