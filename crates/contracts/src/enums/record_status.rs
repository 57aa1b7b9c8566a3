use serde::{Deserialize, Serialize};

/// Состояние записи справочника (банк, правило фрода)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    #[serde(rename = "ACT")]
    Active,
    #[serde(rename = "INA")]
    Inactive,
}

impl RecordStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "ACT",
            RecordStatus::Inactive => "INA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Activo",
            RecordStatus::Inactive => "Inactivo",
        }
    }

    pub fn all() -> Vec<RecordStatus> {
        vec![RecordStatus::Active, RecordStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACT" => Some(RecordStatus::Active),
            "INA" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }
}
