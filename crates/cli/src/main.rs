use clap::{Parser, Subcommand};
use hedgefund_core::client::relay::DEFAULT_RELAY_URL;
use hedgefund_core::client::{BackendClient, HedgeFundBackend, RelayClient};
use hedgefund_core::view::form::{AnalyzeForm, BacktestForm, HedgeFundForm};
use hedgefund_core::view::Submission;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Debug, Parser)]
#[command(name = "hedgefund_cli")]
struct Args {
    /// Backend origin. Overrides API_BASE_URL (default http://localhost:8000).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the backend is up.
    Health,

    /// Run the hedge fund strategy on a ticker.
    HedgeFund {
        #[arg(long)]
        ticker: String,
        /// YYYY-MM-DD; the backend picks a default when omitted.
        #[arg(long, default_value = "")]
        start_date: String,
        #[arg(long, default_value = "")]
        end_date: String,
    },

    /// Backtest the strategy over a date range.
    Backtest {
        #[arg(long)]
        ticker: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        end_date: String,
        /// Starting cash. Left to the backend's default when omitted.
        #[arg(long, default_value = "")]
        initial_capital: String,
    },

    /// Ask the relay service for an analysis with a portfolio and analysts.
    Analyze {
        #[arg(long)]
        ticker: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        end_date: String,
        #[arg(long)]
        cash: String,
        /// Comma-separated analyst names, e.g. "technicals,sentiment".
        #[arg(long, default_value = "")]
        analysts: String,
        #[arg(long, default_value = DEFAULT_RELAY_URL)]
        relay_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = hedgefund_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(api_url) = args.api_url {
        settings.api_base_url = Some(api_url);
    }

    let client = BackendClient::from_settings(&settings)?;

    let mut submission = Submission::<Value>::new();
    let ticket = submission.begin();

    let (outcome, kind) = match args.command {
        Command::Health => (client.health_check().await, render::Kind::Json),
        Command::HedgeFund {
            ticker,
            start_date,
            end_date,
        } => {
            let request = HedgeFundForm {
                ticker,
                start_date,
                end_date,
            }
            .into_request()?;
            (client.run_hedge_fund(&request).await, render::Kind::Json)
        }
        Command::Backtest {
            ticker,
            start_date,
            end_date,
            initial_capital,
        } => {
            let request = BacktestForm {
                ticker,
                start_date,
                end_date,
                initial_capital,
            }
            .into_request()?;
            (client.run_backtest(&request).await, render::Kind::Backtest)
        }
        Command::Analyze {
            ticker,
            start_date,
            end_date,
            cash,
            analysts,
            relay_url,
        } => {
            let request = AnalyzeForm {
                ticker,
                start_date,
                end_date,
                cash,
                analysts,
            }
            .into_request()?;
            let relay = RelayClient::new(relay_url)?;
            (relay.analyze(&request).await, render::Kind::Json)
        }
    };

    if let Err(err) = &outcome {
        sentry_anyhow::capture_anyhow(err);
        tracing::debug!(error = %format!("{err:#}"), "request failed");
    }
    submission.complete(ticket, outcome);

    match submission.into_outcome() {
        Some(Ok(value)) => {
            println!("{}", render::render(kind, &value)?);
            Ok(())
        }
        Some(Err(message)) => anyhow::bail!("{message}"),
        None => anyhow::bail!("request produced no outcome"),
    }
}

fn init_sentry(settings: &hedgefund_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
