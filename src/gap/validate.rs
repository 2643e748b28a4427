use crate::error::ValidationError;

pub fn validate(labels: &[String], forecasts: &[f64], actuals: &[f64]) -> Result<(), ValidationError> {
    if labels.len() != forecasts.len() || labels.len() != actuals.len() {
        return Err(ValidationError::LengthMismatch {
            labels: labels.len(),
            forecasts: forecasts.len(),
            actuals: actuals.len(),
        });
    }
    if labels.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}
