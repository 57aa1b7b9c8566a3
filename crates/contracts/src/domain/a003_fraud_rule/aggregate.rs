use crate::domain::common::Entity;
use crate::enums::{RecordStatus, RiskLevel, RuleType, TimePeriod};
use crate::shared::validation::{check_length, check_max_length};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Criteria
// ============================================================================

/// Условие срабатывания правила.
///
/// На проводе это плоские поля рядом с `tipoRegla`; каждый тип правила
/// несёт только свои лимиты, поэтому здесь это enum, а не набор `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tipoRegla")]
pub enum RuleCriteria {
    #[serde(rename = "TRX")]
    TransactionCount {
        #[serde(rename = "limiteTransacciones", deserialize_with = "whole_number")]
        max_transactions: u64,
    },
    #[serde(rename = "MNT")]
    Amount {
        #[serde(rename = "limiteMontoTotal")]
        max_total_amount: f64,
    },
    #[serde(rename = "GEO")]
    Location {
        #[serde(rename = "paisesPermitidos", default)]
        allowed_countries: Option<String>,
    },
    #[serde(rename = "COM")]
    Merchant {
        #[serde(rename = "comerciosExcluidos", default)]
        excluded_merchants: Option<String>,
    },
    #[serde(rename = "HOR")]
    Schedule {
        #[serde(rename = "horaInicio", default)]
        starts_at: Option<String>,
        #[serde(rename = "horaFin", default)]
        ends_at: Option<String>,
    },
}

impl RuleCriteria {
    pub fn rule_type(&self) -> RuleType {
        match self {
            RuleCriteria::TransactionCount { .. } => RuleType::TransactionCount,
            RuleCriteria::Amount { .. } => RuleType::Amount,
            RuleCriteria::Location { .. } => RuleType::Location,
            RuleCriteria::Merchant { .. } => RuleType::Merchant,
            RuleCriteria::Schedule { .. } => RuleType::Schedule,
        }
    }

    /// Пустое условие для выбранного в форме типа
    pub fn default_for(rule_type: RuleType) -> Self {
        match rule_type {
            RuleType::TransactionCount => RuleCriteria::TransactionCount {
                max_transactions: 10,
            },
            RuleType::Amount => RuleCriteria::Amount {
                max_total_amount: 1000.0,
            },
            RuleType::Location => RuleCriteria::Location {
                allowed_countries: None,
            },
            RuleType::Merchant => RuleCriteria::Merchant {
                excluded_merchants: None,
            },
            RuleType::Schedule => RuleCriteria::Schedule {
                starts_at: None,
                ends_at: None,
            },
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            RuleCriteria::TransactionCount { max_transactions } => {
                if !(1..=999_999_999).contains(max_transactions) {
                    return Err(
                        "El límite de transacciones debe estar entre 1 y 999999999".to_string(),
                    );
                }
            }
            RuleCriteria::Amount { max_total_amount } => {
                if !max_total_amount.is_finite() || *max_total_amount < 0.01 {
                    return Err("El límite de monto total debe ser mayor a 0".to_string());
                }
            }
            RuleCriteria::Location { .. }
            | RuleCriteria::Merchant { .. }
            | RuleCriteria::Schedule { .. } => {}
        }
        Ok(())
    }
}

impl Default for RuleCriteria {
    fn default() -> Self {
        RuleCriteria::default_for(RuleType::default())
    }
}

/// `limiteTransacciones` на сервере BigDecimal: приходит как `100` или `100.00`
fn whole_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as u64)
    } else {
        Err(serde::de::Error::custom(format!(
            "expected a whole transaction count, got {}",
            value
        )))
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Правило фрод-мониторинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudRule {
    #[serde(rename = "codRegla")]
    pub id: i32,

    #[serde(rename = "nombreRegla")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(flatten)]
    pub criteria: RuleCriteria,

    #[serde(rename = "periodoTiempo")]
    pub period: TimePeriod,

    #[serde(rename = "puntajeRiesgo", default)]
    pub risk_score: Option<f64>,

    #[serde(rename = "nivelRiesgo")]
    pub risk_level: RiskLevel,

    #[serde(rename = "prioridad")]
    pub priority: u8,

    #[serde(rename = "estado")]
    pub status: RecordStatus,

    #[serde(rename = "fechaCreacion", default)]
    pub created_at: Option<String>,

    #[serde(rename = "fechaActualizacion", default)]
    pub updated_at: Option<String>,
}

impl Entity for FraudRule {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "regla de fraude"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления правила
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudRuleDto {
    #[serde(rename = "nombreRegla")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(flatten)]
    pub criteria: RuleCriteria,

    #[serde(rename = "periodoTiempo")]
    pub period: TimePeriod,

    #[serde(rename = "puntajeRiesgo", skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,

    #[serde(rename = "nivelRiesgo")]
    pub risk_level: RiskLevel,

    #[serde(rename = "prioridad")]
    pub priority: u8,

    #[serde(rename = "estado")]
    pub status: RecordStatus,
}

impl Default for FraudRuleDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            criteria: RuleCriteria::default(),
            period: TimePeriod::Day,
            risk_score: Some(50.0),
            risk_level: RiskLevel::Medium,
            priority: 1,
            status: RecordStatus::Active,
        }
    }
}

impl FraudRuleDto {
    pub fn validate(&self) -> Result<(), String> {
        check_length(
            &self.name,
            5,
            50,
            "El nombre debe tener entre 5 y 50 caracteres",
        )?;
        check_length(
            &self.description,
            10,
            500,
            "La descripción debe tener entre 10 y 500 caracteres",
        )?;
        self.criteria.validate()?;
        if let Some(score) = self.risk_score {
            if !score.is_finite() || score < 0.01 {
                return Err("El puntaje de riesgo debe ser mayor a 0".to_string());
            }
        }
        if !(1..=99).contains(&self.priority) {
            return Err("La prioridad debe estar entre 1 y 99".to_string());
        }
        check_max_length(
            self.criteria_text(),
            500,
            "Los valores de la regla no pueden exceder los 500 caracteres",
        )?;
        Ok(())
    }

    /// Сменить тип правила; лимиты предыдущего типа отбрасываются
    pub fn set_rule_type(&mut self, rule_type: RuleType) {
        if self.criteria.rule_type() != rule_type {
            self.criteria = RuleCriteria::default_for(rule_type);
        }
    }

    fn criteria_text(&self) -> &str {
        match &self.criteria {
            RuleCriteria::Location {
                allowed_countries: Some(text),
            } => text,
            RuleCriteria::Merchant {
                excluded_merchants: Some(text),
            } => text,
            _ => "",
        }
    }
}

impl From<&FraudRule> for FraudRuleDto {
    fn from(rule: &FraudRule) -> Self {
        Self {
            name: rule.name.clone(),
            description: rule.description.clone().unwrap_or_default(),
            criteria: rule.criteria.clone(),
            period: rule.period,
            risk_score: rule.risk_score,
            risk_level: rule.risk_level,
            priority: rule.priority,
            status: rule.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_rule_from_wire() {
        let json = r#"{
            "codRegla": 4,
            "nombreRegla": "Exceso de transacciones",
            "descripcion": "Más de 10 transacciones por día",
            "tipoRegla": "TRX",
            "limiteTransacciones": 10.00,
            "limiteMontoTotal": null,
            "periodoTiempo": "DIA",
            "puntajeRiesgo": 75.5,
            "nivelRiesgo": "ALT",
            "prioridad": 1,
            "estado": "ACT",
            "usuarioCreacion": "admin"
        }"#;
        let rule: FraudRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.key(), 4);
        assert_eq!(
            rule.criteria,
            RuleCriteria::TransactionCount {
                max_transactions: 10
            }
        );
        assert_eq!(rule.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_amount_rule_serializes_flat() {
        let dto = FraudRuleDto {
            name: "Monto diario".to_string(),
            description: "Monto total diario elevado".to_string(),
            criteria: RuleCriteria::Amount {
                max_total_amount: 5000.0,
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["tipoRegla"], "MNT");
        assert_eq!(value["limiteMontoTotal"], 5000.0);
        assert!(value.get("limiteTransacciones").is_none());
        assert!(value.get("codRegla").is_none());
    }

    #[test]
    fn test_fractional_transaction_limit_rejected() {
        let json = r#"{"tipoRegla": "TRX", "limiteTransacciones": 2.5}"#;
        assert!(serde_json::from_str::<RuleCriteria>(json).is_err());
    }

    #[test]
    fn test_set_rule_type_resets_limits() {
        let mut dto = FraudRuleDto::default();
        dto.set_rule_type(RuleType::Amount);
        assert_eq!(dto.criteria.rule_type(), RuleType::Amount);

        dto.criteria = RuleCriteria::Amount {
            max_total_amount: 10.0,
        };
        dto.set_rule_type(RuleType::Amount);
        assert_eq!(
            dto.criteria,
            RuleCriteria::Amount {
                max_total_amount: 10.0
            }
        );
    }

    #[test]
    fn test_validate() {
        let mut dto = FraudRuleDto {
            name: "Regla nocturna".to_string(),
            description: "Transacciones fuera de horario".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.priority = 0;
        assert_eq!(
            dto.validate().unwrap_err(),
            "La prioridad debe estar entre 1 y 99"
        );

        dto.priority = 5;
        dto.criteria = RuleCriteria::TransactionCount {
            max_transactions: 0,
        };
        assert!(dto.validate().is_err());
    }
}
