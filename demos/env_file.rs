//! Example loading a .env file from an explicit path

use envcfg::EnvCfg;
use std::io::Write;

#[derive(Debug, Default, EnvCfg)]
struct Config {
    #[env(name = "LISTEN_ADDR")]
    pub listen_addr: String,

    #[env(name = "WORKERS")]
    pub workers: usize,

    #[env(name = "RATE_LIMIT")]
    pub rate_limit: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "# service settings")?;
    writeln!(file, "LISTEN_ADDR = 0.0.0.0:3000")?;
    writeln!(file, "WORKERS=4")?;
    writeln!(file, "# RATE_LIMIT=2.5")?;

    // Environment values still win over the file
    std::env::set_var("WORKERS", "8");

    let mut config = Config {
        rate_limit: 100.0,
        ..Config::default()
    };
    envcfg::load_file(file.path(), &mut config)?;

    println!("Configuration from {}:", file.path().display());
    println!("  Listen address: {}", config.listen_addr);
    println!("  Workers: {}", config.workers);
    println!("  Rate limit: {}", config.rate_limit);

    Ok(())
}
