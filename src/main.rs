use anyhow::Context;
use macroquad::prelude::*;
use tracing::{error, info};

use cellular_automata::{
    Config, FrameLimiter, FrameOutcome, Session,
    logging,
    rendering::MacroquadSurface,
};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: config.window_title,
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init_logging();

    if let Err(err) = run().await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::default();
    config.validate().context("refusing to start")?;

    let (rows, cols) = config.grid_dimensions();
    info!(rows, cols, fps = config.target_fps, "starting session");

    let mut session = Session::new(&config, &mut ::rand::rng());
    let mut surface = MacroquadSurface::new();
    let mut limiter = FrameLimiter::new(config.frame_duration());

    loop {
        if session.frame(&mut surface) == FrameOutcome::Quit {
            break;
        }
        next_frame().await;
        limiter.wait();
    }

    info!(generation = session.generation(), "session ended");
    Ok(())
}
