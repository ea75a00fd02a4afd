use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use circular_orrery::cli::AnimationArgs;
use circular_orrery::plot::GifSink;

/// Renders one pass of the animation into an animated GIF.
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    #[command(flatten)]
    animation: AnimationArgs,

    /// Where to write the GIF
    #[arg(long, short, default_value = "orrery.gif")]
    output: PathBuf,

    /// Width and height of the image, in pixels
    #[arg(long, default_value_t = 800)]
    size: u32,

    /// Half-width of the plotted region. Defaults to a bit past the
    /// outermost orbit.
    #[arg(long)]
    limit: Option<f64>,

    /// Axis unit label
    #[arg(long, default_value = "AU")]
    unit: String,

    #[arg(long, default_value = "Trajectories of Planets in the Solar System")]
    title: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let orrery = opts.animation.load_orrery()?;
    let limit = opts
        .limit
        .unwrap_or_else(|| 1.15 * orrery.max_radius().unwrap_or(1.0));
    let mut driver = opts.animation.build_driver(orrery)?;

    let frame_delay = opts.animation.interval_ms.min(u32::MAX as u64) as u32;
    let mut sink = GifSink::new(&opts.output, opts.size, frame_delay, limit)
        .map_err(|e| e as Box<dyn std::error::Error>)?
        .with_unit(&opts.unit)
        .with_title(&opts.title);

    info!(
        "Rendering {} frames to {}",
        driver.frame_count(),
        opts.output.display()
    );
    let frames = driver.run(&mut sink)?;
    info!("Wrote {} frames", frames);
    Ok(())
}
