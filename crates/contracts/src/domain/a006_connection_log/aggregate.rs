use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

/// Запись журнала подключений банка к процессору
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionLog {
    #[serde(rename = "codLog")]
    pub id: i32,

    #[serde(rename = "fecha")]
    pub logged_at: String,

    #[serde(rename = "ipOrigen")]
    pub source_ip: String,

    #[serde(rename = "operacion")]
    pub operation: String,

    #[serde(rename = "resultado")]
    pub result: String,
}

impl Entity for ConnectionLog {
    type Key = i32;

    fn key(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "log de conexión"
    }
}

/// Параметры `POST /api/v1/logs-conexion` (передаются в query string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterConnectionQuery {
    #[serde(rename = "marca")]
    pub brand: String,

    #[serde(rename = "codBanco")]
    pub bank_id: i32,

    #[serde(rename = "ipOrigen")]
    pub source_ip: String,

    #[serde(rename = "operacion")]
    pub operation: String,

    #[serde(rename = "resultado")]
    pub result: String,
}

impl RegisterConnectionQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.source_ip.trim().is_empty() || self.source_ip.chars().count() > 15 {
            return Err("La IP de origen es inválida".to_string());
        }
        if self.operation.trim().is_empty() || self.operation.chars().count() > 50 {
            return Err("La operación debe tener entre 1 y 50 caracteres".to_string());
        }
        if self.result.chars().count() != 3 {
            return Err("El resultado debe tener 3 caracteres".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_from_wire_ignores_nested_security_refs() {
        let json = r#"{
            "codLog": 12,
            "seguridadMarca": {"marca": "VISA"},
            "seguridadBanco": {"codBanco": 1},
            "fecha": "2024-05-02T08:30:00",
            "ipOrigen": "10.0.0.8",
            "operacion": "AUTORIZACION",
            "resultado": "EXI"
        }"#;
        let log: ConnectionLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.key(), 12);
        assert_eq!(log.result, "EXI");
    }

    #[test]
    fn test_register_query_validation() {
        let mut query = RegisterConnectionQuery {
            brand: "VISA".to_string(),
            bank_id: 1,
            source_ip: "192.168.100.200".to_string(),
            operation: "AUTORIZACION".to_string(),
            result: "EXI".to_string(),
        };
        assert!(query.validate().is_ok());

        query.source_ip = "2001:db8::ff00:42:8329".to_string();
        assert!(query.validate().is_err());
    }
}
