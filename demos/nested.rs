//! Example demonstrating nested configuration structs

use envcfg::{EnvCfg, Loader};

#[derive(Debug, Default, EnvCfg)]
pub struct Database {
    #[env(name = "DB_HOST")]
    pub host: String,

    #[env(name = "DB_PORT")]
    pub port: u16,
}

#[derive(Debug, Default, EnvCfg)]
pub struct Config {
    #[env(name = "SERVICE_NAME")]
    pub name: String,

    // No annotation needed: nested fields bind under their own keys
    pub database: Database,

    // Not `pub`, so never loaded
    #[env(name = "SECRET")]
    secret: String,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config {
        database: Database {
            host: "localhost".to_string(),
            port: 5432,
        },
        ..Config::default()
    };

    Loader::new()
        .environment(["SERVICE_NAME=billing", "DB_HOST=db.internal", "SECRET=hunter2"])
        .load(&mut config)?;

    println!("Nested configuration:");
    println!("  Service: {}", config.name);
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("  Secret loaded: {}", !config.secret.is_empty());

    Ok(())
}
