use crate::domain::analyze::{AnalyzeRequest, Portfolio};
use crate::domain::request::{BacktestRequest, HedgeFundRequest};
use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
pub struct HedgeFundForm {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
}

impl HedgeFundForm {
    pub fn into_request(self) -> Result<HedgeFundRequest> {
        Ok(HedgeFundRequest {
            ticker: normalize_ticker(&self.ticker)?,
            start_date: optional_date("start date", &self.start_date)?,
            end_date: optional_date("end date", &self.end_date)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BacktestForm {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub initial_capital: String,
}

impl BacktestForm {
    pub fn into_request(self) -> Result<BacktestRequest> {
        let initial_capital = match self.initial_capital.trim() {
            "" => None,
            s => Some(parse_amount("initial capital", s)?),
        };

        Ok(BacktestRequest {
            ticker: normalize_ticker(&self.ticker)?,
            start_date: required_date("start date", &self.start_date)?,
            end_date: required_date("end date", &self.end_date)?,
            initial_capital,
        })
    }
}

// `analysts` is comma-separated; an empty list is sent as no selection.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeForm {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub cash: String,
    pub analysts: String,
}

impl AnalyzeForm {
    pub fn into_request(self) -> Result<AnalyzeRequest> {
        let mut portfolio = Portfolio::new();
        portfolio.insert("cash".to_string(), parse_cash(self.cash.trim())?.into());

        let analysts: Vec<String> = self
            .analysts
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(AnalyzeRequest {
            ticker: normalize_ticker(&self.ticker)?,
            start_date: required_date("start date", &self.start_date)?,
            end_date: required_date("end date", &self.end_date)?,
            portfolio,
            selected_analysts: (!analysts.is_empty()).then_some(Some(analysts)),
        })
    }
}

fn normalize_ticker(raw: &str) -> Result<String> {
    let ticker = raw.trim().to_uppercase();
    ensure!(!ticker.is_empty(), "ticker is required");
    Ok(ticker)
}

fn required_date(field: &str, raw: &str) -> Result<String> {
    optional_date(field, raw)?.with_context(|| format!("{field} is required"))
}

fn optional_date(field: &str, raw: &str) -> Result<Option<String>> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("{field} must be YYYY-MM-DD (got {s:?})"))?;
    Ok(Some(s.to_string()))
}

// Whole amounts stay integers on the wire.
fn parse_cash(raw: &str) -> Result<serde_json::Number> {
    if let Ok(whole) = raw.parse::<u64>() {
        return Ok(whole.into());
    }
    let value = parse_amount("cash", raw)?;
    serde_json::Number::from_f64(value).context("cash must be a finite number")
}

fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let value = raw
        .parse::<f64>()
        .with_context(|| format!("{field} must be a number (got {raw:?})"))?;
    ensure!(
        value.is_finite() && value >= 0.0,
        "{field} must be a non-negative amount (got {raw})"
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hedge_fund_form_uppercases_and_drops_blank_dates() {
        let req = HedgeFundForm {
            ticker: " aapl ".to_string(),
            start_date: "".to_string(),
            end_date: "2023-06-01".to_string(),
        }
        .into_request()
        .unwrap();

        assert_eq!(req.ticker, "AAPL");
        assert_eq!(req.start_date, None);
        assert_eq!(req.end_date.as_deref(), Some("2023-06-01"));
    }

    #[test]
    fn hedge_fund_form_requires_ticker() {
        let err = HedgeFundForm::default().into_request().unwrap_err();
        assert!(err.to_string().contains("ticker is required"));
    }

    #[test]
    fn backtest_form_requires_dates() {
        let err = BacktestForm {
            ticker: "msft".to_string(),
            start_date: "2023-01-01".to_string(),
            ..Default::default()
        }
        .into_request()
        .unwrap_err();
        assert!(err.to_string().contains("end date is required"));
    }

    #[test]
    fn backtest_form_rejects_malformed_date() {
        let err = BacktestForm {
            ticker: "msft".to_string(),
            start_date: "01/02/2023".to_string(),
            end_date: "2023-06-01".to_string(),
            initial_capital: String::new(),
        }
        .into_request()
        .unwrap_err();
        assert!(err.to_string().contains("start date must be YYYY-MM-DD"));
    }

    #[test]
    fn backtest_form_leaves_blank_capital_unset() {
        let req = BacktestForm {
            ticker: "msft".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            initial_capital: "  ".to_string(),
        }
        .into_request()
        .unwrap();
        assert_eq!(req.initial_capital, None);
    }

    #[test]
    fn backtest_form_parses_capital() {
        let req = BacktestForm {
            ticker: "msft".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            initial_capital: "100000".to_string(),
        }
        .into_request()
        .unwrap();
        assert_eq!(req.initial_capital, Some(100000.0));

        let bad = BacktestForm {
            ticker: "msft".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            initial_capital: "-5".to_string(),
        };
        assert!(bad.into_request().is_err());
    }

    #[test]
    fn analyze_form_splits_analysts() {
        let req = AnalyzeForm {
            ticker: "aapl".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            cash: "100000".to_string(),
            analysts: "technicals, sentiment,,".to_string(),
        }
        .into_request()
        .unwrap();

        assert_eq!(
            req.selected_analysts,
            Some(Some(vec!["technicals".to_string(), "sentiment".to_string()]))
        );
        assert_eq!(
            serde_json::Value::Object(req.portfolio),
            serde_json::json!({"cash": 100000})
        );
    }

    #[test]
    fn analyze_form_without_analysts_sends_none() {
        let req = AnalyzeForm {
            ticker: "aapl".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            cash: "10.5".to_string(),
            analysts: String::new(),
        }
        .into_request()
        .unwrap();
        assert_eq!(req.selected_analysts, None);
        assert_eq!(req.portfolio["cash"].as_f64(), Some(10.5));
    }
}
