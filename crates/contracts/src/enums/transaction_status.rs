use serde::{Deserialize, Serialize};

/// Статус транзакции в истории изменений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "PEN")]
    Pending,
    #[serde(rename = "APR")]
    Approved,
    #[serde(rename = "REC")]
    Rejected,
    #[serde(rename = "REV")]
    UnderReview,
    #[serde(rename = "PRO")]
    Processed,
}

impl TransactionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PEN",
            TransactionStatus::Approved => "APR",
            TransactionStatus::Rejected => "REC",
            TransactionStatus::UnderReview => "REV",
            TransactionStatus::Processed => "PRO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pendiente",
            TransactionStatus::Approved => "Aprobada",
            TransactionStatus::Rejected => "Rechazada",
            TransactionStatus::UnderReview => "En Revisión",
            TransactionStatus::Processed => "Procesada",
        }
    }

    pub fn all() -> Vec<TransactionStatus> {
        vec![
            TransactionStatus::Pending,
            TransactionStatus::Approved,
            TransactionStatus::Rejected,
            TransactionStatus::UnderReview,
            TransactionStatus::Processed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PEN" => Some(TransactionStatus::Pending),
            "APR" => Some(TransactionStatus::Approved),
            "REC" => Some(TransactionStatus::Rejected),
            "REV" => Some(TransactionStatus::UnderReview),
            "PRO" => Some(TransactionStatus::Processed),
            _ => None,
        }
    }
}
