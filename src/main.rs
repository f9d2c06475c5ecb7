use anyhow::Result;
use clap::Parser;
use config::Config;
use log::info;

mod config;
mod constants;
mod data;
mod persistence;
mod service;
mod util;
mod web;

// MAIN
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments and env vars with clap
    let conf = Config::parse();

    let db = persistence::get_db_context(&conf).await?;
    let service_context = service::create_service_context(conf, db);

    let _rocket = web::rocket_main(service_context).launch().await?;

    info!("web server was shut down...");
    Ok(())
}
