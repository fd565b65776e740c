//! Headless runner for the thrust-vectored rocket lander.

use clap::{Parser, ValueEnum};
use rocket_lander::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Open-loop thrust program selected with --program
    Program,
    /// Angular rate suppression around the launch heading
    Stabilize,
    /// Hold the initial throttle
    Manual,
}

#[derive(Parser)]
#[command(name = "lander")]
#[command(about = "Fly as high as possible, then land softly near the origin")]
#[command(version)]
struct Cli {
    /// Control mode
    #[arg(short, long, value_enum, default_value_t = Mode::Program)]
    mode: Mode,

    /// Thrust program number (1-3) for program mode
    #[arg(short, long, default_value_t = 3)]
    program: usize,

    /// Initial main throttle for manual and stabilize modes
    #[arg(long, default_value_t = 0.0)]
    main: f64,

    /// Start from the hover throttle instead of --main
    #[arg(long)]
    balance: bool,

    /// Integration time step (s)
    #[arg(long, default_value_t = TIME_STEP)]
    dt: f64,

    /// Driver ticks per second of simulated wall time
    #[arg(long, default_value_t = REFRESH_RATE)]
    fps: f64,

    /// Stop after this much simulated time (s)
    #[arg(long, default_value_t = MAX_SIMULATION_TIME)]
    max_time: f64,

    /// Use ceil(interval/dt) steps per tick instead of the reference countdown
    #[arg(long)]
    exact_steps: bool,

    /// Print every n-th telemetry sample (0 prints the summary only)
    #[arg(long, default_value_t = 0)]
    telemetry_every: usize,
}

fn build_autopilot(cli: &Cli, rocket: &mut Rocket) -> anyhow::Result<Box<dyn Autopilot>> {
    let autopilot: Box<dyn Autopilot> = match cli.mode {
        Mode::Program => {
            let program = ThrustProgram::from_number(cli.program).ok_or_else(|| {
                anyhow::anyhow!("unknown thrust program {} (expected 1-3)", cli.program)
            })?;
            tracing::info!(%program, "open-loop control");
            Box::new(program)
        }
        Mode::Stabilize => Box::new(Stabilizer::engage(rocket)),
        Mode::Manual => Box::new(ManualControl),
    };
    Ok(autopilot)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if !(cli.fps > 0.0) {
        anyhow::bail!("fps must be positive, got {}", cli.fps);
    }

    let accounting = if cli.exact_steps {
        StepAccounting::Exact
    } else {
        StepAccounting::Reference
    };
    let rocket = Rocket::new(RocketParameters::default(), Environment::default())?;
    let mut driver = SimulationDriver::new(rocket, cli.dt, accounting)?;
    let tick = 1.0 / cli.fps;
    if tick / driver.dt() > MAX_STEPS_PER_TICK as f64 {
        anyhow::bail!(
            "a tick of {}s needs more than {} steps of {}s; raise --fps or --dt",
            tick,
            MAX_STEPS_PER_TICK,
            driver.dt()
        );
    }

    driver.rocket_mut().set_thrust([cli.main, 0.0, 0.0]);
    if cli.balance {
        driver.rocket_mut().balance_main_thrust();
    }
    let mut autopilot = build_autopilot(&cli, driver.rocket_mut())?;

    let mut telemetry = Telemetry::new();
    telemetry.collect_data(&driver);

    while driver.sim_time() < cli.max_time {
        driver.tick(tick, autopilot.as_mut());
        telemetry.collect_data(&driver);

        if driver.status().is_terminal() {
            break;
        }
    }

    telemetry.display_data(cli.telemetry_every);

    println!("\n--- Result ---");
    println!("Status: {:?}", driver.status());
    println!("Steps: {}", driver.steps());
    println!("Highpoint: {}", Telemetry::format_altitude(driver.peak_altitude()));
    match driver.score() {
        Some(score) => println!("Score: {:.2}", score),
        None => println!("Score: n/a (still flying after {})", Telemetry::format_time(driver.sim_time())),
    }

    Ok(())
}
