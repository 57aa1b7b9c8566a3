use crate::domain::common::Entity;
use crate::enums::CommissionType;
use crate::shared::validation::check_non_negative;
use serde::{Deserialize, Serialize};

// ============================================================================
// Entity
// ============================================================================

/// Комиссия процессинга с опциональными сегментами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    #[serde(rename = "codigo")]
    pub id: i32,

    #[serde(rename = "tipo")]
    pub kind: CommissionType,

    #[serde(rename = "montoBase")]
    pub base_amount: f64,

    #[serde(rename = "transaccionesBase")]
    pub base_transactions: u32,

    #[serde(rename = "manejaSegmentos")]
    pub has_segments: bool,

    #[serde(rename = "fechaCreacion", default)]
    pub created_at: Option<String>,

    #[serde(rename = "segmentos", default)]
    pub segments: Vec<CommissionSegment>,
}

impl Entity for Commission {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "comisión"
    }
}

/// Составной ключ сегмента.
///
/// Ответ на добавление сегмента несёт только `codComision`, номер сегмента
/// тогда отсутствует.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentKey {
    #[serde(rename = "codComision")]
    pub commission_id: i32,

    #[serde(rename = "codSegmento", default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<i32>,
}

/// Сегмент комиссии: другая сумма после порога по количеству транзакций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentWire")]
pub struct CommissionSegment {
    pub pk: SegmentKey,

    #[serde(rename = "transaccionesDesde", default)]
    pub transactions_from: Option<f64>,

    #[serde(rename = "transaccionesHasta")]
    pub transactions_to: f64,

    #[serde(rename = "monto")]
    pub amount: f64,
}

/// Сегмент на проводе: с вложенным `pk` или плоский, с `codComision` рядом
/// с полями
#[derive(Deserialize)]
pub struct SegmentWire {
    #[serde(default)]
    pk: Option<SegmentKey>,

    #[serde(rename = "codComision", default)]
    commission_id: Option<i32>,

    #[serde(rename = "codSegmento", default)]
    segment_id: Option<i32>,

    #[serde(rename = "transaccionesDesde", default)]
    transactions_from: Option<f64>,

    #[serde(rename = "transaccionesHasta")]
    transactions_to: f64,

    #[serde(rename = "monto")]
    amount: f64,
}

impl TryFrom<SegmentWire> for CommissionSegment {
    type Error = String;

    fn try_from(wire: SegmentWire) -> Result<Self, Self::Error> {
        let pk = match (wire.pk, wire.commission_id) {
            (Some(pk), _) => pk,
            (None, Some(commission_id)) => SegmentKey {
                commission_id,
                segment_id: wire.segment_id,
            },
            (None, None) => return Err("segment without codComision".to_string()),
        };
        Ok(Self {
            pk,
            transactions_from: wire.transactions_from,
            transactions_to: wire.transactions_to,
            amount: wire.amount,
        })
    }
}

impl Entity for CommissionSegment {
    type Key = SegmentKey;

    fn key(&self) -> SegmentKey {
        self.pk
    }

    fn element_name() -> &'static str {
        "segmento"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления комиссии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommissionDto {
    #[serde(rename = "tipo")]
    pub kind: CommissionType,

    #[serde(rename = "montoBase")]
    pub base_amount: f64,

    #[serde(rename = "transaccionesBase")]
    pub base_transactions: u32,

    #[serde(rename = "manejaSegmentos")]
    pub has_segments: bool,
}

impl CommissionDto {
    pub fn validate(&self) -> Result<(), String> {
        check_non_negative(self.base_amount, "El monto base no puede ser negativo")
    }
}

impl From<&Commission> for CommissionDto {
    fn from(c: &Commission) -> Self {
        Self {
            kind: c.kind,
            base_amount: c.base_amount,
            base_transactions: c.base_transactions,
            has_segments: c.has_segments,
        }
    }
}

/// DTO нового сегмента (ключ назначает сервер)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SegmentDto {
    #[serde(rename = "transaccionesDesde", skip_serializing_if = "Option::is_none")]
    pub transactions_from: Option<f64>,

    #[serde(rename = "transaccionesHasta")]
    pub transactions_to: f64,

    #[serde(rename = "monto")]
    pub amount: f64,
}

impl SegmentDto {
    pub fn validate(&self) -> Result<(), String> {
        check_non_negative(self.transactions_to, "El rango final no puede ser negativo")?;
        check_non_negative(self.amount, "El monto no puede ser negativo")?;
        if let Some(from) = self.transactions_from {
            check_non_negative(from, "El rango inicial no puede ser negativo")?;
            if from > self.transactions_to {
                return Err(
                    "El rango final debe ser mayor o igual al rango inicial".to_string(),
                );
            }
        }
        Ok(())
    }
}

/// Фильтры списка комиссий
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommissionQuery {
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommissionType>,

    #[serde(rename = "montoMinimo", skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,

    #[serde(rename = "montoMaximo", skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_without_segments_field() {
        let json = r#"{
            "codigo": 3,
            "tipo": "FIJ",
            "montoBase": 1.25,
            "transaccionesBase": 100,
            "manejaSegmentos": false
        }"#;
        let c: Commission = serde_json::from_str(json).unwrap();
        assert_eq!(c.kind, CommissionType::Fixed);
        assert!(c.segments.is_empty());
    }

    #[test]
    fn test_segment_composite_key() {
        let json = r#"{"pk": {"codComision": 3, "codSegmento": 2}, "transaccionesHasta": 500, "monto": 0.8}"#;
        let s: CommissionSegment = serde_json::from_str(json).unwrap();
        assert_eq!(
            s.key(),
            SegmentKey {
                commission_id: 3,
                segment_id: Some(2)
            }
        );
        assert_eq!(s.transactions_to, 500.0);
    }

    #[test]
    fn test_flat_segment_response() {
        let json = r#"{"codComision": 2, "transaccionesDesde": 0, "transaccionesHasta": 1000, "monto": 0.25}"#;
        let s: CommissionSegment = serde_json::from_str(json).unwrap();
        assert_eq!(
            s.key(),
            SegmentKey {
                commission_id: 2,
                segment_id: None
            }
        );
        assert_eq!(s.transactions_from, Some(0.0));
        assert_eq!(s.amount, 0.25);
    }

    #[test]
    fn test_segment_without_commission_rejected() {
        let json = r#"{"transaccionesHasta": 10, "monto": 1}"#;
        assert!(serde_json::from_str::<CommissionSegment>(json).is_err());
    }

    #[test]
    fn test_segment_validation() {
        let ok = SegmentDto {
            transactions_from: Some(0.0),
            transactions_to: 100.0,
            amount: 1.0,
        };
        assert!(ok.validate().is_ok());

        let reversed = SegmentDto {
            transactions_from: Some(200.0),
            ..ok.clone()
        };
        assert!(reversed.validate().is_err());
    }

    #[test]
    fn test_negative_base_amount_rejected() {
        let dto = CommissionDto {
            base_amount: -0.5,
            ..Default::default()
        };
        assert_eq!(
            dto.validate().unwrap_err(),
            "El monto base no puede ser negativo"
        );
    }
}
