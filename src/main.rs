use cidr_glob::config::Config;
use cidr_glob::logging::init_logging;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config)?;
    //
    log::info!("#Start main()");

    if let Err(e) = cidr_glob::run(&config) {
        log::error!("{e}");
        return Err(e);
    }

    Ok(())
}
