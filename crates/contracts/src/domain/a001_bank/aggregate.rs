use crate::domain::common::Entity;
use crate::enums::RecordStatus;
use crate::shared::validation::{check_digits, check_length, check_non_negative};
use serde::{Deserialize, Serialize};

// ============================================================================
// Entity
// ============================================================================

/// Банк-участник процессинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(rename = "codigo")]
    pub id: i32,

    #[serde(rename = "codigoInterno")]
    pub internal_code: String,

    pub ruc: String,

    #[serde(rename = "razonSocial")]
    pub legal_name: String,

    #[serde(rename = "nombreComercial")]
    pub trade_name: String,

    #[serde(rename = "fechaCreacion", default)]
    pub created_at: Option<String>,

    #[serde(rename = "comision", default)]
    pub commission: Option<BankCommission>,

    #[serde(rename = "estado")]
    pub status: RecordStatus,

    #[serde(rename = "fechaInactivacion", default)]
    pub deactivated_at: Option<String>,
}

impl Entity for Bank {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "banco"
    }
}

/// Комиссия, встроенная в банк (принадлежит банку по значению)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankCommission {
    #[serde(rename = "codigo")]
    pub id: i32,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "porcentaje")]
    pub percentage: f64,
}

impl Default for BankCommission {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Comisión Estándar".to_string(),
            percentage: 0.5,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления банка.
///
/// Нет ни `codigo`, ни `fechaCreacion`: их назначает сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BankDto {
    #[serde(rename = "codigoInterno")]
    pub internal_code: String,

    pub ruc: String,

    #[serde(rename = "razonSocial")]
    pub legal_name: String,

    #[serde(rename = "nombreComercial")]
    pub trade_name: String,

    #[serde(rename = "estado")]
    pub status: RecordStatus,

    #[serde(rename = "comision")]
    pub commission: BankCommission,
}

impl BankDto {
    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), String> {
        check_length(
            &self.internal_code,
            3,
            10,
            "El código interno debe tener entre 3 y 10 caracteres",
        )?;
        check_digits(&self.ruc, 13, "El RUC debe tener 13 dígitos numéricos")?;
        check_length(
            &self.legal_name,
            5,
            100,
            "La razón social debe tener entre 5 y 100 caracteres",
        )?;
        check_length(
            &self.trade_name,
            5,
            100,
            "El nombre comercial debe tener entre 5 y 100 caracteres",
        )?;
        check_non_negative(
            self.commission.percentage,
            "El porcentaje no puede ser negativo",
        )?;
        Ok(())
    }
}

impl From<&Bank> for BankDto {
    fn from(bank: &Bank) -> Self {
        Self {
            internal_code: bank.internal_code.clone(),
            ruc: bank.ruc.clone(),
            legal_name: bank.legal_name.clone(),
            trade_name: bank.trade_name.clone(),
            status: bank.status,
            commission: bank.commission.clone().unwrap_or_default(),
        }
    }
}

/// Query для поиска по коммерческому названию
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankNameQuery {
    #[serde(rename = "nombreComercial")]
    pub trade_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> BankDto {
        BankDto {
            internal_code: "BP01".to_string(),
            ruc: "1790010937001".to_string(),
            legal_name: "Banco Pichincha C.A.".to_string(),
            trade_name: "Banco Pichincha".to_string(),
            status: RecordStatus::Active,
            commission: BankCommission::default(),
        }
    }

    #[test]
    fn test_bank_wire_format() {
        let json = r#"{
            "codigo": 7,
            "codigoInterno": "BP01",
            "ruc": "1790010937001",
            "razonSocial": "Banco Pichincha C.A.",
            "nombreComercial": "Banco Pichincha",
            "fechaCreacion": "2024-01-06T10:30:25",
            "comision": {"codigo": 1, "nombre": "Estándar", "porcentaje": 0.5},
            "estado": "ACT"
        }"#;
        let bank: Bank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.key(), 7);
        assert_eq!(bank.status, RecordStatus::Active);
        assert_eq!(bank.commission.unwrap().percentage, 0.5);
        assert!(bank.deactivated_at.is_none());
    }

    #[test]
    fn test_dto_never_serializes_server_fields() {
        let value = serde_json::to_value(valid_dto()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("codigo"));
        assert!(!obj.contains_key("fechaCreacion"));
        assert_eq!(obj["estado"], "ACT");
    }

    #[test]
    fn test_validate() {
        assert!(valid_dto().validate().is_ok());

        let mut dto = valid_dto();
        dto.ruc = "123".to_string();
        assert_eq!(
            dto.validate().unwrap_err(),
            "El RUC debe tener 13 dígitos numéricos"
        );

        let mut dto = valid_dto();
        dto.internal_code = "B".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.commission.percentage = -1.0;
        assert!(dto.validate().is_err());
    }
}
