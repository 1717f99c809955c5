/// Rejection raised before any create/update touches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "Datos de producto inválidos: nombre y precio son requeridos y el precio debe ser positivo."
    )]
    InvalidProduct,
}

/// Checks a candidate name/price pair. Pure: no side effects.
///
/// The name must be non-empty and the price strictly greater than zero.
/// `NaN` and infinities are rejected.
pub fn validate(name: &str, price: f64) -> Result<(), ValidationError> {
    if name.is_empty() || !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::InvalidProduct);
    }
    Ok(())
}
