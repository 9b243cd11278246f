// Parsers for price payloads

use super::{NumericField, PriceResponse, SpotAmount};
use crate::domain::errors::{FetchError, FetchOutcome};

/// Normalize either provider's payload to a positive price.
///
/// The shape is picked by key: a present `price` key always means the ticker
/// shape, even when its value turns out to be unusable.
pub fn parse_price_response(body: &str) -> FetchOutcome<f64> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::UnexpectedResponseShape(format!("Invalid JSON: {}", e)))?;

    let object = value.as_object().ok_or_else(|| {
        FetchError::UnexpectedResponseShape("Expected a JSON object".to_string())
    })?;

    let response = if let Some(price) = object.get("price") {
        PriceResponse::Ticker {
            price: field_from(price, "price")?,
        }
    } else if let Some(data) = object.get("data") {
        PriceResponse::Spot {
            data: serde_json::from_value::<SpotAmount>(data.clone()).map_err(|_| {
                FetchError::UnexpectedResponseShape("Missing or invalid 'data.amount'".to_string())
            })?,
        }
    } else {
        return Err(FetchError::UnexpectedResponseShape(
            "Unexpected JSON format".to_string(),
        ));
    };

    let field = match response {
        PriceResponse::Ticker { price } => price,
        PriceResponse::Spot { data } => data.amount,
    };

    let price = match field {
        NumericField::Text(s) => s.trim().parse::<f64>().map_err(|e| {
            FetchError::UnexpectedResponseShape(format!("Invalid price '{}': {}", s, e))
        })?,
        NumericField::Number(n) => n,
    };

    if !price.is_finite() || price <= 0.0 {
        return Err(FetchError::UnexpectedResponseShape(format!(
            "Price must be positive, got {}",
            price
        )));
    }

    Ok(price)
}

fn field_from(value: &serde_json::Value, key: &str) -> FetchOutcome<NumericField> {
    serde_json::from_value(value.clone()).map_err(|_| {
        FetchError::UnexpectedResponseShape(format!("Invalid '{}' value: {}", key, value))
    })
}
