use std::error::Error;
use std::path::Path;

use colored::*;
use csv::Writer;
use dotenv::dotenv;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{DataPaths, Settings};
use crate::domain::types::RankedOrderView;
use crate::error::RepositoryError;
use crate::fixtures::generate_random_inputs;
use crate::repository::{CourierRepository, OrderRepository};
use crate::service::{AvailabilityPipeline, CourierService};

const USAGE: &str = "usage: available-orders <courier-id> [order-id ...]";

/// Sizes used when generated data is requested instead of fixture files.
const GENERATED_COURIERS: usize = 5;
const GENERATED_ORDERS: usize = 20;

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_span_events(fmt::format::FmtSpan::CLOSE))
        .try_init()?;
    Ok(())
}

/// Load couriers and orders from JSON, or generate them when `paths.generate` is set.
fn load_repositories(
    paths: &DataPaths,
) -> Result<(CourierRepository, OrderRepository), RepositoryError> {
    if paths.generate {
        warn!("Fixture files ignored, using generated couriers and orders");
        let (couriers, orders) = generate_random_inputs(GENERATED_COURIERS, GENERATED_ORDERS);
        return Ok((CourierRepository::new(couriers), OrderRepository::new(orders)));
    }

    let couriers = CourierRepository::from_json_file(&paths.couriers)?;
    let orders = OrderRepository::from_json_file(&paths.orders)?;
    Ok((couriers, orders))
}

pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let Some((courier_id, order_ids)) = args.split_first() else {
        return Err(USAGE.into());
    };

    let settings = Settings::from_env()?;
    let paths = DataPaths::from_env();

    let (couriers, orders) = {
        let span = span!(Level::INFO, "load");
        let _guard = span.enter();
        load_repositories(&paths)?
    };

    let service = CourierService::new(AvailabilityPipeline::new(settings), couriers, orders);

    let views = if order_ids.is_empty() {
        service.find_all_available_orders(courier_id)
    } else {
        service.find_available_orders_by_courier_id(courier_id, order_ids)
    }
    .ok_or_else(|| format!("courier '{courier_id}' not found"))?;

    print_views(courier_id, &views);

    if let Some(path) = &paths.csv_export {
        save_to_csv(&views, path)?;
        info!("Wrote {} rows to {}", views.len(), path);
    }

    Ok(())
}

pub fn save_to_csv(
    views: &[RankedOrderView],
    filename: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["rank", "id", "description"])?;

    for (rank, view) in views.iter().enumerate() {
        wtr.write_record([
            (rank + 1).to_string(),
            view.id.clone(),
            view.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn print_views(courier_id: &str, views: &[RankedOrderView]) {
    if views.is_empty() {
        println!("{}", format!("No orders available for {courier_id}").yellow());
        return;
    }

    println!(
        "{}",
        format!("{} orders available for {courier_id}:", views.len()).bold()
    );
    for (rank, view) in views.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            rank + 1,
            view.id.green(),
            view.description.dimmed()
        );
    }
}
