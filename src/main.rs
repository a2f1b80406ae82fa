use std::process;
use log::error;
use crate::dashboard::Dashboard;

mod config;
mod dashboard;
mod errors;
mod forecast_source;
mod hourly;
mod initialization;
mod models;

fn main() {
    let (config, source) = match initialization::init() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Dashboard::new(&config, source).run() {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
