extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};

mod kmlib;

use kmlib::{kmeans, read_dataset, write_clusters, ArgParser};

fn main() {
    let args = ArgParser::parse();
    let level = if args.io.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    info!("starting");
    info!("params: {:#?}", args);
    if !args.validate() {
        error!("please fix arguments");
        std::process::exit(1);
    }

    let dataset = match read_dataset(&args.io.input) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("read {} points", dataset.len());

    let mut rng = match args.km.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("clustering into {} groups", args.km.k);
    let fit = match kmeans(&dataset, &args.km, &mut rng) {
        Ok(fit) => fit,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("converged after {} iterations", fit.iterations);
    info!(
        "cluster sizes: {}",
        fit.clusters.iter().map(|c| c.points.len()).join(", ")
    );

    if let Err(e) = write_clusters(&fit.clusters, &args.io.out_dir) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("finished");
}
