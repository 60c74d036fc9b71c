use clap::Parser;

use currency_gateway::ExchangeRate;

#[derive(Parser)]
#[command(name = "rates-cli")]
#[command(about = "Query a running currency gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Single currency code; all configured currencies when omitted.
    #[arg(short, long)]
    currency: Option<String>,

    /// Print the raw JSON body instead of a table.
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut request = client.get(format!("{}/api", cli.url.trim_end_matches('/')));
    if let Some(currency) = &cli.currency {
        request = request.query(&[("currency", currency)]);
    }

    let res = request.send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(format!("Gateway returned status {}: {}", status, body).into());
    }

    if cli.raw {
        println!("{}", body);
        return Ok(());
    }

    let rates: Vec<ExchangeRate> = serde_json::from_str(&body)?;
    println!("{:<6} {:<6} {:>16} {:>16}  {}", "FROM", "TO", "BID", "ASK", "TIME");
    for rate in rates {
        println!(
            "{:<6} {:<6} {:>16} {:>16}  {}",
            rate.from_currency, rate.to_currency, rate.bid, rate.ask, rate.time
        );
    }
    Ok(())
}
