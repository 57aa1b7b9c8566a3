use crate::domain::common::Entity;
use crate::enums::{AlertStatus, RiskLevel, RuleType};
use crate::shared::validation::check_max_length;
use serde::{Deserialize, Serialize};

/// Detail sent when an operator processes an alert from the monitoring page.
pub const DEFAULT_PROCESS_DETAIL: &str = "Alerta procesada por el usuario";

/// Rule that raised the alert (reference only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRuleRef {
    #[serde(rename = "codigo")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipoRegla")]
    pub rule_type: RuleType,
}

/// Transaction the alert was raised for (reference only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertTransactionRef {
    #[serde(rename = "codigo")]
    pub id: i32,
    #[serde(rename = "codigoUnicoTransaccion", default)]
    pub unique_code: Option<String>,
    #[serde(rename = "monto", default)]
    pub amount: f64,
    #[serde(rename = "numeroTarjeta", default)]
    pub card_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAlert {
    #[serde(rename = "codigo")]
    pub id: i32,

    #[serde(rename = "reglaFraude", default)]
    pub rule: Option<AlertRuleRef>,

    #[serde(rename = "transaccion", default)]
    pub transaction: Option<AlertTransactionRef>,

    #[serde(rename = "nivelRiesgo")]
    pub risk_level: RiskLevel,

    #[serde(rename = "puntajeRiesgo", default)]
    pub risk_score: f64,

    #[serde(rename = "estado")]
    pub status: AlertStatus,

    #[serde(rename = "detalle", default)]
    pub detail: Option<String>,

    #[serde(rename = "fechaDeteccion")]
    pub detected_at: String,

    #[serde(rename = "fechaProcesamiento", default)]
    pub processed_at: Option<String>,

    #[serde(rename = "codigoUnicoTransaccion", default)]
    pub transaction_unique_code: Option<String>,
}

impl FraudAlert {
    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}

impl Entity for FraudAlert {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "alerta de fraude"
    }
}

/// Query string of `PUT /alertas/{id}/procesar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessAlertQuery {
    #[serde(rename = "estado")]
    pub status: AlertStatus,
    #[serde(rename = "detalle")]
    pub detail: String,
}

impl ProcessAlertQuery {
    pub fn new(status: AlertStatus, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        check_max_length(
            &self.detail,
            500,
            "El detalle no puede exceder los 500 caracteres",
        )
    }
}
