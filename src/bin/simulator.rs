use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;
use tracing::info;

use circular_orrery::cli::AnimationArgs;
use circular_orrery::gui::Simulation;

/// Animates the bodies in a window. Keys:
/// - Space: pause / resume
/// - `.` / `,`: speed up / slow down
/// - R: restart from the beginning
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    #[command(flatten)]
    animation: AnimationArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let orrery = opts.animation.load_orrery()?;
    let driver = opts.animation.build_driver(orrery)?;
    info!(
        "Animating {} bodies over {} frames",
        driver.orrery().len(),
        driver.frame_count()
    );

    let mut window = Window::new("Circular Orrery");
    window.set_light(Light::StickToCamera);
    window.set_background_color(0.05, 0.05, 0.1);
    window.set_framerate_limit(Some(opts.animation.frames_per_second()));

    let simulation = Simulation::new(driver)?;
    window.render_loop(simulation);
    Ok(())
}
