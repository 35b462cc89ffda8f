use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// Holdings keyed by name (`cash`, tickers); forwarded untouched.
pub type Portfolio = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub portfolio: Portfolio,
    // Outer `None`: key absent. `Some(None)`: explicit null.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_analysts: Option<Option<Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendAnalyzeRequest {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub portfolio: Portfolio,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_analysts: Option<Option<Vec<String>>>,
}

impl From<AnalyzeRequest> for BackendAnalyzeRequest {
    fn from(req: AnalyzeRequest) -> Self {
        Self {
            ticker: req.ticker,
            start_date: req.start_date,
            end_date: req.end_date,
            portfolio: req.portfolio,
            selected_analysts: req.selected_analysts,
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
