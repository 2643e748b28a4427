use tracing::debug;

use crate::error::{ParseError, QuantityField};

/// Splits the three raw fields into aligned label and quantity lists.
///
/// Lengths are not checked here; see [`crate::gap::validate`].
pub fn parse(
    labels_text: &str,
    forecast_text: &str,
    actual_text: &str,
) -> Result<(Vec<String>, Vec<f64>, Vec<f64>), ParseError> {
    let labels = parse_labels(labels_text);
    let forecasts = parse_quantities(forecast_text, QuantityField::Forecast)?;
    let actuals = parse_quantities(actual_text, QuantityField::Actual)?;
    debug!(
        labels = labels.len(),
        forecasts = forecasts.len(),
        actuals = actuals.len(),
        "parsed input fields"
    );
    Ok((labels, forecasts, actuals))
}

pub fn parse_labels(raw: &str) -> Vec<String> {
    split_tokens(raw).map(title_case).collect()
}

pub fn parse_quantities(raw: &str, field: QuantityField) -> Result<Vec<f64>, ParseError> {
    split_tokens(raw)
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError {
                    field,
                    position: idx + 1,
                    token: token.to_string(),
                    raw: raw.to_string(),
                })
        })
        .collect()
}

/// A blank field yields no tokens at all; otherwise every comma-separated
/// piece is kept, including empty ones.
fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    let blank = raw.trim().is_empty();
    raw.split(',')
        .map(str::trim)
        .filter(move |_| !blank)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A word starts after any non-alphabetic character.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
