use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::validation::ValidationError;

/// Store-assigned identifier. Never supplied by callers, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl FromStr for ProductId {
    type Err = ParseIntError;

    /// Only a plain decimal integer is accepted; `"12abc"` and `"-1"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Core product entity. Wire field names are `nombre` / `precio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "id": 3, "nombre": "Teclado Mecánico", "precio": 99.99 }))]
pub struct Product {
    /// ID auto-generado del producto.
    #[schema(value_type = u64, read_only)]
    pub id: ProductId,
    /// Nombre del producto.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Precio del producto.
    #[serde(rename = "precio")]
    #[schema(format = Float)]
    pub price: f64,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of POST and PUT. Fields stay untyped until [`ProductPayload::into_parts`]
/// so that a wrong JSON type is reported as a validation failure, not a
/// deserialization error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[serde(rename = "nombre")]
    #[schema(value_type = String, example = "Mouse Inalámbrico")]
    pub name: Option<Value>,
    #[serde(rename = "precio")]
    #[schema(value_type = f64, example = 45.5)]
    pub price: Option<Value>,
}

impl ProductPayload {
    /// Type check: `nombre` must be a JSON string and `precio` a JSON number.
    pub fn into_parts(self) -> Result<(String, f64), ValidationError> {
        let name = match self.name {
            Some(Value::String(name)) => name,
            _ => return Err(ValidationError::InvalidProduct),
        };
        let price = self
            .price
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or(ValidationError::InvalidProduct)?;
        Ok((name, price))
    }
}
