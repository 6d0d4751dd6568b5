#[macro_use]
extern crate log;

mod cli;
mod config;

use std::process;

fn main() {
    env_logger::init();
    if let Err(err) = cli::run() {
        error!("{err}");
        process::exit(1);
    }
}
