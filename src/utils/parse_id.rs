/// A path identifier that is not a strictly positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{raw}` is not a valid identifier")]
pub struct ValidationError {
    pub raw: String,
}

pub fn parse_id(raw: &str) -> Result<i32, ValidationError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) | Err(_) => {
            tracing::warn!("Rejected path identifier: {:?}", raw);
            Err(ValidationError { raw: raw.to_string() })
        }
    }
}
