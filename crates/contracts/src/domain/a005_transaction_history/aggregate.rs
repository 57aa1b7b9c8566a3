use crate::domain::common::Entity;
use crate::enums::TransactionStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRef {
    #[serde(rename = "codigo")]
    pub id: i32,
    #[serde(rename = "nombreComercial", default)]
    pub trade_name: Option<String>,
    #[serde(rename = "razonSocial", default)]
    pub legal_name: Option<String>,
}

/// Transaction the history row belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    #[serde(rename = "codigo")]
    pub id: i32,
    #[serde(rename = "monto", default)]
    pub amount: f64,
    #[serde(rename = "modalidad", default)]
    pub modality: Option<String>,
    #[serde(rename = "codigoMoneda", default)]
    pub currency: Option<String>,
    #[serde(rename = "marca", default)]
    pub brand: Option<String>,
    #[serde(rename = "banco", default)]
    pub bank: Option<BankRef>,
}

impl TransactionSummary {
    pub fn bank_name(&self) -> Option<&str> {
        self.bank.as_ref().and_then(|b| b.trade_name.as_deref())
    }
}

/// One status change of a transaction.
///
/// Older revisions of the history endpoint name the key `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionHistory {
    #[serde(rename = "codHistorialEstado", alias = "code")]
    pub id: i32,

    #[serde(rename = "estado")]
    pub status: TransactionStatus,

    #[serde(rename = "fechaEstadoCambio")]
    pub changed_at: String,

    #[serde(rename = "detalle", default)]
    pub detail: Option<String>,

    #[serde(rename = "transaccion", default)]
    pub transaction: Option<TransactionSummary>,
}

impl TransactionHistory {
    pub fn amount(&self) -> f64 {
        self.transaction.as_ref().map(|t| t.amount).unwrap_or(0.0)
    }

    pub fn bank_name(&self) -> Option<&str> {
        self.transaction.as_ref().and_then(|t| t.bank_name())
    }
}

impl Entity for TransactionHistory {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "transacción"
    }
}

/// Filter of `GET /v1/historial-estados`; absent fields are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    #[serde(rename = "fechaInicio", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    #[serde(rename = "fechaFin", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(rename = "bancoNombre", skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_accepts_legacy_key() {
        let json = r#"{"code": 7, "estado": "APR", "fechaEstadoCambio": "2024-05-01T10:00:00"}"#;
        let row: TransactionHistory = serde_json::from_str(json).unwrap();
        assert_eq!(row.key(), 7);
        assert_eq!(row.amount(), 0.0);
        assert_eq!(row.bank_name(), None);
    }

    #[test]
    fn test_history_with_transaction() {
        let json = r#"{
            "codHistorialEstado": 3,
            "codigoTransaccion": 40,
            "estado": "REC",
            "fechaEstadoCambio": "2024-05-01T10:00:00",
            "detalle": "Fondos insuficientes",
            "transaccion": {
                "codigo": 40,
                "monto": 25.5,
                "modalidad": "SIM",
                "banco": {"codigo": 1, "nombreComercial": "Banco Pichincha"}
            }
        }"#;
        let row: TransactionHistory = serde_json::from_str(json).unwrap();
        assert_eq!(row.status, TransactionStatus::Rejected);
        assert_eq!(row.amount(), 25.5);
        assert_eq!(row.bank_name(), Some("Banco Pichincha"));
    }
}
