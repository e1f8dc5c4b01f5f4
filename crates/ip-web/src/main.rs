#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use ip_web::cli::{self, Cli, Command};
    use ip_web::i18n::Locale;

    match Cli::parse().command {
        Command::Serve { addr, site_root } => ip_web::server::serve(addr, &site_root).await,
        Command::Lookup { url, lang } => cli::lookup(&url, Locale::from_language_tag(&lang)).await,
    }
}

#[cfg(all(feature = "csr", not(feature = "server")))]
fn main() {
    ip_web::mount();
}

#[cfg(not(any(feature = "server", feature = "csr")))]
fn main() {
    // Nothing to run without a target feature
}
