use serde::{Deserialize, Serialize};

/// Статус алерта фрод-мониторинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlertStatus {
    #[default]
    #[serde(rename = "PEN")]
    Pending,
    #[serde(rename = "PRO")]
    Processed,
    #[serde(rename = "REC")]
    Rejected,
    #[serde(rename = "APR")]
    Approved,
    #[serde(rename = "REV")]
    UnderReview,
}

impl AlertStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "PEN",
            AlertStatus::Processed => "PRO",
            AlertStatus::Rejected => "REC",
            AlertStatus::Approved => "APR",
            AlertStatus::UnderReview => "REV",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "Pendiente",
            AlertStatus::Processed => "Procesada",
            AlertStatus::Rejected => "Rechazada",
            AlertStatus::Approved => "Aprobada",
            AlertStatus::UnderReview => "En Revisión",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PEN" => Some(AlertStatus::Pending),
            "PRO" => Some(AlertStatus::Processed),
            "REC" => Some(AlertStatus::Rejected),
            "APR" => Some(AlertStatus::Approved),
            "REV" => Some(AlertStatus::UnderReview),
            _ => None,
        }
    }
}
