//! Main application entry point.

use std::process::ExitCode;
use kurbo::Size;
use touchtracker_app::{demo_session, load_session, replay, AppConfig, AppError, LoggingHost};
use touchtracker_core::StrokeTracker;
use touchtracker_render::{LineStyle, RenderContext, Renderer, StrokeListRenderer};

fn run() -> Result<(), AppError> {
    let app = AppConfig::from_args(std::env::args().skip(1))?;
    let config = app.tracker_config()?;
    let events = match &app.session {
        Some(path) => load_session(path)?,
        None => {
            log::info!("No session given, replaying the demo session");
            demo_session()
        }
    };

    let mut tracker = StrokeTracker::with_config(LoggingHost::new(), config)?;
    replay(&mut tracker, &events);

    let mut renderer = StrokeListRenderer::new();
    let ctx = RenderContext::new(tracker.scene(), Size::new(1024.0, 768.0))
        .with_style(LineStyle::from(tracker.config()));
    renderer.build_scene(&ctx);

    log::info!(
        "Replayed {} events, {} redraws requested",
        events.len(),
        tracker.host().redraws
    );
    for command in renderer.commands() {
        println!(
            "{:?} ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            command.role, command.line.p0.x, command.line.p0.y, command.line.p1.x, command.line.p1.y
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting TouchTracker");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("touchtracker: {err}");
            ExitCode::FAILURE
        }
    }
}
