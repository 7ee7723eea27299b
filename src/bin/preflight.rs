use jokes_web_app::infra::config;
use jokes_web_app::PostgresJokeStore;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           DB_MAX_CONNECTIONS, BIND_ADDR, JOKE_STORE, SEED_SAMPLE_JOKES\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if missing)
    let backend = config::store_backend()?;
    let database_url = config::database_url()?;

    println!("> Preflight:");
    println!("  JOKE_STORE={:?}", backend);
    println!("  DB_MAX_CONNECTIONS={}", config::db_max_connections());
    println!("  BIND_ADDR={}", config::bind_addr());
    println!(
        "  DATABASE_URL host={}",
        database_url.rsplit('@').next().unwrap_or("<unparsed>")
    );

    // Connecting also creates the `jokes` table if it is missing.
    let store = PostgresJokeStore::connect().await?;
    let count = store.count().await?;
    println!("  jokes table: OK ({} rows)", count);

    println!("> Preflight OK");
    Ok(())
}
