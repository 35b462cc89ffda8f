use hedgefund_core::domain::backtest::BacktestResult;
use serde_json::Value;
use std::fmt::Write;

#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Json,
    Backtest,
}

pub fn render(kind: Kind, value: &Value) -> anyhow::Result<String> {
    match kind {
        Kind::Json => Ok(serde_json::to_string_pretty(value)?),
        Kind::Backtest => match BacktestResult::from_value(value) {
            Ok(result) => backtest_summary(&result),
            Err(err) => {
                // Show whatever came back rather than failing the view.
                tracing::warn!(error = %err, "backtest response does not match the expected shape");
                Ok(serde_json::to_string_pretty(value)?)
            }
        },
    }
}

fn backtest_summary(result: &BacktestResult) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "Final value    {:>16.2}", result.final_value)?;
    writeln!(out, "Net profit     {:>16.2}", result.net_profit)?;
    writeln!(out, "Sharpe ratio   {:>16.2}", result.sharpe_ratio)?;
    writeln!(out, "Max drawdown   {:>15.2}%", result.max_drawdown * 100.0)?;
    if let Some(r) = result.total_return() {
        writeln!(out, "Total return   {:>15.2}%", r * 100.0)?;
    }

    writeln!(out)?;
    writeln!(out, "Equity curve ({} points)", result.equity_curve.len())?;
    for point in &result.equity_curve {
        writeln!(out, "  {:<12} {:>16.2}", point.date, point.value)?;
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_backtest_summary() {
        let v = json!({
            "final_value": 105000.0,
            "net_profit": 5000.0,
            "sharpe_ratio": 1.5,
            "max_drawdown": -0.1,
            "equity_curve": [
                {"date": "2023-01-03", "value": 100000.0},
                {"date": "2023-01-04", "value": 105000.0},
            ],
        });

        let out = render(Kind::Backtest, &v).unwrap();
        assert!(out.contains("Net profit"));
        assert!(out.contains("5000.00"));
        assert!(out.contains("-10.00%"));
        assert!(out.contains("Equity curve (2 points)"));
        assert!(out.ends_with("105000.00"));
    }

    #[test]
    fn unexpected_backtest_shape_falls_back_to_json() {
        let v = json!({"final_value": null});
        let out = render(Kind::Backtest, &v).unwrap();
        assert_eq!(out, serde_json::to_string_pretty(&v).unwrap());
    }

    #[test]
    fn json_is_rendered_verbatim() {
        let v = json!({"status": "healthy"});
        assert_eq!(render(Kind::Json, &v).unwrap(), "{\n  \"status\": \"healthy\"\n}");
    }
}
