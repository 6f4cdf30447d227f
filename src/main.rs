/*
 * Bouncing Bodies
 *
 * A window full of circles bouncing off the walls and off each other with
 * simple elastic collisions. Close the window or send SIGINT/SIGTERM to quit.
 * Logging is controlled through RUST_LOG (default: info).
 */

use bouncing_bodies::{app, shutdown};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = shutdown::install() {
        log::error!("{err:#}");
        std::process::exit(1);
    }

    nannou::app(app::model).update(app::update).run();
}
