//! Basic usage example

use envcfg::EnvCfg;

#[derive(Debug, EnvCfg)]
struct Config {
    #[env(name = "DEBUG")]
    pub debug: bool,

    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    #[env(name = "MAX_CONNECTIONS")]
    pub max_connections: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Defaults are the values the struct starts with
    let mut config = Config {
        debug: false,
        database_url: "sqlite:///db.sqlite".to_string(),
        max_connections: 10,
    };

    std::env::set_var("MAX_CONNECTIONS", "42");

    // Reads ./.env if present, then the process environment
    envcfg::load(&mut config)?;

    println!("Configuration loaded:");
    println!("  Debug: {}", config.debug);
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);

    Ok(())
}
