use crate::cache_commands::CacheCommands;
use crate::cli::Cli;
use crate::commands::Commands;
use crate::contact_commands::ContactCommands;
use crate::error::{CliError, Result as CliErrorResult};

use dw_api::{
    BalanceApi, ConnectivityStatus, HttpClient, InMemorySessionStore, SessionStore, SessionTokens,
};
use dw_app::{CacheStats, ContactResolver, Diagnostics, DiagnosticsReport};
use dw_config::Config;
use dw_core::{Balance, LogEventSink};
use dw_db::CacheStore;

use std::sync::Arc;

use serde_json::{Value, json};

/// Execute one command and return its JSON result.
pub async fn run(cli: &Cli, mut config: Config) -> CliErrorResult<Value> {
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
        config.api.validate()?;
    }

    let store = CacheStore::open(config.database_path()?).await?;
    let result = execute(cli, &config, &store).await;
    store.close().await;
    result
}

async fn execute(cli: &Cli, config: &Config, store: &CacheStore) -> CliErrorResult<Value> {
    match &cli.command {
        Commands::Doctor => {
            let report = Diagnostics::from_config(config, store.clone())?.run().await;
            Ok(report_json(&report))
        }

        Commands::Cache { action } => match action {
            CacheCommands::Clear { yes } => {
                if !yes {
                    return Err(CliError::Usage {
                        message: "Refusing to wipe the cache without --yes".to_string(),
                    });
                }
                store.clear_all_data().await?;
                Ok(json!({ "cleared": true }))
            }
            CacheCommands::Seed => {
                let seeded = store.seed_if_empty().await?;
                Ok(json!({ "seeded": seeded }))
            }
            CacheCommands::Stats => Ok(stats_json(&CacheStats::collect(store).await?)),
        },

        Commands::Contacts { action } => match action {
            ContactCommands::Search {
                query,
                currency,
                local,
            } => {
                let contacts = if *local {
                    store.contacts().search(query).await?
                } else {
                    let client = http_client(cli, config).await?;
                    let resolver = ContactResolver::new(
                        Arc::new(client),
                        store.clone(),
                        &config.search,
                        Arc::new(LogEventSink),
                    );
                    resolver.search(query, *currency).await
                };
                Ok(serde_json::to_value(contacts)?)
            }
            ContactCommands::List => Ok(serde_json::to_value(store.contacts().find_all().await?)?),
        },

        Commands::Balances { user_id } => {
            let client = http_client(cli, config).await?;
            let raw = client.get_balances(user_id).await?;
            Ok(serde_json::to_value(Balance::normalize(&raw))?)
        }
    }
}

async fn http_client(cli: &Cli, config: &Config) -> CliErrorResult<HttpClient> {
    let sessions = Arc::new(InMemorySessionStore::new());
    if let Some(token) = &cli.access_token {
        sessions.save(&SessionTokens::new(token.clone())).await?;
    }
    Ok(HttpClient::from_config(&config.api, sessions)?)
}

pub(crate) fn stats_json(stats: &CacheStats) -> Value {
    json!({
        "users": stats.users,
        "messages": stats.messages,
        "contacts": stats.contacts,
    })
}

pub(crate) fn report_json(report: &DiagnosticsReport) -> Value {
    let connectivity = match &report.connectivity {
        ConnectivityStatus::Reachable { latency_ms } => {
            json!({ "status": "reachable", "latencyMs": latency_ms })
        }
        ConnectivityStatus::Degraded { latency_ms, status } => {
            json!({ "status": "degraded", "latencyMs": latency_ms, "httpStatus": status })
        }
        ConnectivityStatus::TimedOut { timeout_ms } => {
            json!({ "status": "timed_out", "timeoutMs": timeout_ms })
        }
        ConnectivityStatus::Unreachable { error } => {
            json!({ "status": "unreachable", "error": error })
        }
    };

    json!({
        "healthy": report.is_healthy(),
        "api": report.api_base_url,
        "connectivity": connectivity,
        "cache": report.cache.as_ref().map(stats_json),
        "checkedAt": report.checked_at.to_rfc3339(),
    })
}
