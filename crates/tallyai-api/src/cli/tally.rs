//! `tallyai tally` -- send requests to a Tally server and print the raw XML.

use anyhow::Result;
use clap::Subcommand;
use console::style;

use crate::state::ConcreteTallyService;

#[derive(Subcommand)]
pub enum TallyCommand {
    /// Check whether the Tally server answers.
    Ping,

    /// Name of the currently loaded company.
    Company,

    /// List companies.
    Companies {
        /// Include simple companies.
        #[arg(long)]
        include_simple: bool,
    },

    /// List ledgers.
    Ledgers {
        /// Company to query instead of the loaded one.
        #[arg(long)]
        company: Option<String>,
    },

    /// List stock items.
    StockItems,

    /// Sales vouchers for the current period.
    Sales,

    /// Call a TDL function.
    Exec {
        /// Function name.
        function: String,

        /// Positional parameters passed as <PARAM> elements.
        params: Vec<String>,
    },
}

pub async fn run(tally: &ConcreteTallyService, action: TallyCommand, json: bool) -> Result<()> {
    let (request, response) = match action {
        TallyCommand::Ping => return ping(tally, json).await,
        TallyCommand::Company => ("company", tally.current_company().await?),
        TallyCommand::Companies { include_simple } => {
            ("companies", tally.companies(include_simple).await?)
        }
        TallyCommand::Ledgers { company } => ("ledgers", tally.ledgers(company.as_deref()).await?),
        TallyCommand::StockItems => ("stock-items", tally.stock_items().await?),
        TallyCommand::Sales => ("sales", tally.sales_vouchers().await?),
        TallyCommand::Exec { function, params } => ("exec", tally.execute(&function, &params).await?),
    };

    if json {
        let out = serde_json::json!({
            "endpoint": tally.endpoint(),
            "request": request,
            "response": response,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", response.trim_end());
    }

    Ok(())
}

async fn ping(tally: &ConcreteTallyService, json: bool) -> Result<()> {
    let reachable = tally.test_connection().await;

    if json {
        let out = serde_json::json!({
            "endpoint": tally.endpoint(),
            "reachable": reachable,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if reachable {
        println!(
            "  {} Tally reachable at {}",
            style("✓").green(),
            style(tally.endpoint()).cyan()
        );
    } else {
        println!(
            "  {} Tally not reachable at {}",
            style("✗").red(),
            style(tally.endpoint()).cyan()
        );
    }

    Ok(())
}
