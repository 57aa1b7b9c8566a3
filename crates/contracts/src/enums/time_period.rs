use serde::{Deserialize, Serialize};

/// Окно времени, в котором считается лимит правила
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "MIN")]
    Minute,
    #[serde(rename = "HOR")]
    Hour,
    #[default]
    #[serde(rename = "DIA")]
    Day,
}

impl TimePeriod {
    pub fn code(&self) -> &'static str {
        match self {
            TimePeriod::Minute => "MIN",
            TimePeriod::Hour => "HOR",
            TimePeriod::Day => "DIA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Minute => "Por Minuto",
            TimePeriod::Hour => "Por Hora",
            TimePeriod::Day => "Por Día",
        }
    }

    pub fn all() -> Vec<TimePeriod> {
        vec![TimePeriod::Minute, TimePeriod::Hour, TimePeriod::Day]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MIN" => Some(TimePeriod::Minute),
            "HOR" => Some(TimePeriod::Hour),
            "DIA" => Some(TimePeriod::Day),
            _ => None,
        }
    }
}
