use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeFundRequest {
    pub ticker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

// Unset `initial_capital` is left to the backend's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_capital: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hedge_fund_request_omits_blank_dates() {
        let req = HedgeFundRequest {
            ticker: "AAPL".to_string(),
            start_date: None,
            end_date: Some("2023-06-01".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"ticker": "AAPL", "end_date": "2023-06-01"})
        );
    }

    #[test]
    fn backtest_request_serializes_exactly_four_keys() {
        let req = BacktestRequest {
            ticker: "AAPL".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            initial_capital: Some(100000.0),
        };
        let v = serde_json::to_value(&req).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["ticker"], "AAPL");
        assert_eq!(obj["start_date"], "2023-01-01");
        assert_eq!(obj["end_date"], "2023-06-01");
        assert_eq!(obj["initial_capital"].as_f64(), Some(100000.0));
    }

    #[test]
    fn backtest_request_without_capital_has_no_capital_key() {
        let req = BacktestRequest {
            ticker: "MSFT".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            initial_capital: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("initial_capital").is_none());
        assert_eq!(v.as_object().unwrap().len(), 3);
    }
}
