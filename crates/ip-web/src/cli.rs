//! Command-line interface of the native binary

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::api::fetch_lookup;
use crate::config::CONFIG;
use crate::i18n::Locale;
use crate::lookup::{LookupEvent, ViewState};

#[derive(Debug, Parser)]
#[command(name = "ip-web", version, about = "Public IP and location widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the built site (output of `trunk build`)
    Serve {
        #[arg(long, env = "SITE_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        #[arg(long, env = "SITE_ROOT", default_value = "dist")]
        site_root: PathBuf,
    },
    /// Look up this machine's public IP and print it
    Lookup {
        #[arg(long, env = "IP_WEB_LOOKUP_URL", default_value = CONFIG.lookup_url)]
        url: String,
        /// Language tag for messages, e.g. `ko-KR` or `en`
        #[arg(long, default_value = "en")]
        lang: String,
    },
}

/// Run one lookup through the same reducer the widget uses
pub async fn run_lookup(url: &str, locale: Locale) -> ViewState {
    let messages = locale.messages();
    let state = ViewState::default().apply(LookupEvent::Started, messages);
    let outcome = fetch_lookup(url).await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("Lookup against {} failed: {}", url, e);
    }
    state.apply(LookupEvent::Finished(outcome), messages)
}

pub async fn lookup(url: &str, locale: Locale) -> Result<()> {
    match run_lookup(url, locale).await {
        ViewState::Loaded(result) => {
            println!("{}", result.ip);
            if let Some(location) = &result.location {
                println!("{}", location);
            }
            Ok(())
        }
        ViewState::Error(message) => bail!(message),
        ViewState::Loading => bail!("lookup did not complete"),
    }
}
