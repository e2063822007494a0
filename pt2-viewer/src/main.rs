//! ROS node that subscribes to a PointCloud2 topic and renders it in a window.

use clap::Parser;
use cli::AppOptions;
use human_panic::setup_panic;
use log::{debug, error};
use rosrust::api::resolve::get_unused_args;
use std::process::ExitCode;

mod app;
mod cli;
mod frame_stats;
mod input;
mod panel;
mod params;
mod ros;
mod shutdown;
mod viewport;
mod window;

fn main() -> ExitCode {
    setup_panic!();

    // arg parsing
    let args = AppOptions::parse_from(get_unused_args());

    // logger
    simple_logger::init_with_level(args.log_level).unwrap();

    // run
    let result = app::run(args);
    if let Err(e) = result {
        error!("{e}");
        debug!("{e:?}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
