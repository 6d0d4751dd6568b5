use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use beermap_application::prelude::*;
use beermap_core::usecases::is_happy_hour_active;
use beermap_entities::{id::Id, time_of_day::TimeOfDay};
use beermap_gateways::{HttpDatasetGateway, LogMapLoader};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "beermap", version, about = "Venues on a map, by happy hour and price")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the venue dataset document
    #[arg(long, value_name = "URL")]
    data_url: Option<String>,

    /// Sort the list by price, ascending
    #[arg(long)]
    sort_by_price: bool,

    /// Show only venues whose happy hour is still running
    #[arg(long)]
    only_happy_hour: bool,

    /// Select a venue and print its details
    #[arg(long, value_name = "ID")]
    select: Option<u64>,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(url) = args.data_url {
        cfg.data_url = url;
    }

    let dataset = HttpDatasetGateway::new(cfg.data_url.clone());
    let map_loader = cfg.map_api_key.as_ref().map(|_| LogMapLoader);

    let runtime = tokio::runtime::Runtime::new()?;
    let mut view = runtime.block_on(init_map_view(dataset, map_loader));

    if args.sort_by_price {
        view.toggle_sort_by_price();
    }
    if args.only_happy_hour {
        view.toggle_happy_hour_only();
    }
    if let Some(id) = args.select {
        view.select_from_list(Id::from(id));
    }

    let now = TimeOfDay::now_local();
    let venues = view.displayed_at(now);
    if venues.is_empty() {
        println!("No matching venues.");
    } else {
        for venue in &venues {
            let status = if is_happy_hour_active(venue.happy_hour_end, now) {
                "happy hour"
            } else {
                "regular"
            };
            println!(
                "{:>6}  {:<32} {:>8}  {}",
                venue.id, venue.name, venue.price, status
            );
        }
    }

    if let Some(venue) = view.selected_venue() {
        println!();
        println!("{}", venue.name);
        println!("  rating:          {:.1}", venue.rating.rounded_to_half());
        println!("  cheapest beer:   {}", venue.price);
        println!("  happy hour ends: {}", venue.happy_hour_end);
        println!("  map link:        {}", venue.address);
        if let Some(description) = &venue.description {
            println!("  {description}");
        }
    }

    Ok(())
}
