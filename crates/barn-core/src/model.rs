//! Domain Models
//!
//! Request and response shapes exchanged with the analysis service.
//! Amounts are `f64` because unparsable input is carried as `NaN`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A token name paired with an amount
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedAmount {
    pub name: String,
    pub amount: f64,
}

impl NamedAmount {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Ordered name-to-amount association list
///
/// Serialized as a JSON object whose keys follow the list order. Deserialized
/// from a JSON object keeping the order the keys arrive in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AmountMap(Vec<NamedAmount>);

impl AmountMap {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or overwrite `name`, keeping the position of an existing key
    pub fn insert(&mut self, name: impl Into<String>, amount: f64) {
        let name = name.into();
        match self.0.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.amount = amount,
            None => self.0.push(NamedAmount { name, amount }),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|e| e.name == name).map(|e| e.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedAmount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all amounts
    pub fn total(&self) -> f64 {
        self.0.iter().map(|e| e.amount).sum()
    }
}

impl FromIterator<(String, f64)> for AmountMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, amount) in iter {
            map.insert(name, amount);
        }
        map
    }
}

impl<'a> IntoIterator for &'a AmountMap {
    type Item = &'a NamedAmount;
    type IntoIter = std::slice::Iter<'a, NamedAmount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for AmountMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, &entry.amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AmountMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountMapVisitor;

        impl<'de> Visitor<'de> for AmountMapVisitor {
            type Value = AmountMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping token names to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AmountMap, A::Error> {
                let mut map = AmountMap::new();
                while let Some((name, amount)) = access.next_entry::<String, f64>()? {
                    map.insert(name, amount);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AmountMapVisitor)
    }
}

/// One observation in a price history
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
}

/// Trade direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    #[default]
    Buy,
    Sell,
}

impl TradeAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Parse a form value; anything other than "sell" is a buy
    pub fn from_str(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("sell") {
            Self::Sell
        } else {
            Self::Buy
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single trade instruction
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeOrder {
    pub token: String,
    pub amount: f64,
    pub action: TradeAction,
}

/// Body of an optimization request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub portfolio: AmountMap,
    pub risk_tolerance: f64,
}

/// Risk metrics for a price history
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub risk_score: f64,
}

/// Outcome of a trade request as reported by the service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeResult {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Recommended allocation per token, in response order
pub type OptimizationResult = AmountMap;

/// Parse a numeric form field, yielding `NaN` when it is not a number
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 1.5 "), 1.5);
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount("").is_nan());
    }

    #[test]
    fn test_amount_map_keeps_key_order() {
        let json = r#"{"SOL": 3.0, "BTC": 1.0, "ETH": 2.0}"#;
        let map: AmountMap = serde_json::from_str(json).unwrap();
        let names: Vec<_> = map.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["SOL", "BTC", "ETH"]);

        let out = serde_json::to_string(&map).unwrap();
        assert_eq!(out, r#"{"SOL":3.0,"BTC":1.0,"ETH":2.0}"#);
    }

    #[test]
    fn test_amount_map_insert_overwrites_in_place() {
        let mut map = AmountMap::new();
        map.insert("A", 1.0);
        map.insert("B", 2.0);
        map.insert("A", 5.0);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some(5.0));
        assert_eq!(map.iter().next().map(|e| e.name.as_str()), Some("A"));
    }

    #[test]
    fn test_trade_order_wire_shape() {
        let order = TradeOrder {
            token: "BTC".into(),
            amount: 1.5,
            action: TradeAction::Sell,
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value, serde_json::json!({"token": "BTC", "amount": 1.5, "action": "sell"}));
    }

    #[test]
    fn test_nan_amount_serializes_as_null() {
        let order = TradeOrder {
            token: "BTC".into(),
            amount: f64::NAN,
            action: TradeAction::Buy,
        };
        let value = serde_json::to_value(&order).unwrap();
        assert!(value["amount"].is_null());
    }

    #[test]
    fn test_trade_result_without_transaction_id() {
        let result: TradeResult =
            serde_json::from_str(r#"{"status": "error", "message": "Invalid action"}"#).unwrap();
        assert_eq!(result.transaction_id, None);
    }
}
