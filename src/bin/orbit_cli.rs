use clap::{Parser, Subcommand};
use tracing::info;

use circular_orrery::animation::TraceSink;
use circular_orrery::cli::AnimationArgs;

#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print where bodies are at a given time
    At {
        /// Simulated time
        #[arg(long, allow_negative_numbers = true)]
        time: f64,

        /// Only print this body
        name: Option<String>,

        #[command(flatten)]
        animation: AnimationArgs,
    },
    /// Drive one full pass without drawing anything. Set RUST_LOG=debug to
    /// see every position.
    Run {
        #[command(flatten)]
        animation: AnimationArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    match opts.command {
        Command::At {
            time,
            name,
            animation,
        } => {
            let orrery = animation.load_orrery()?;
            let snapshot = orrery.snapshot_at(time)?;

            println!("Positions at t = {}", time);
            println!("- {}: (0, 0)", orrery.central_body().name);
            for (id, pt) in snapshot.iter() {
                let body = orrery.get_body(id);
                if let Some(name) = &name {
                    if !body.info.name.eq_ignore_ascii_case(name) {
                        continue;
                    }
                }
                println!(
                    "- {}: ({:.6}, {:.6}), angle {:.2} deg",
                    body.info.name,
                    pt.x,
                    pt.y,
                    body.orbit.angle_at(time).to_degrees()
                );
            }
        }
        Command::Run { animation } => {
            let orrery = animation.load_orrery()?;
            let mut driver = animation.build_driver(orrery)?;
            let mut sink = TraceSink::new();
            let frames = driver.run(&mut sink)?;
            info!(
                "Drove {} frames, ending at t = {}",
                frames,
                driver.current_time()
            );
        }
    }
    Ok(())
}
