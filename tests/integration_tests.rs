use rand::{rngs::StdRng, Rng, SeedableRng};
use rocket_lander::{
    Aerodynamics, Environment, FlightStatus, ManualControl, Rocket, RocketParameters, RocketState,
    SimulationDriver, Stabilizer, StepAccounting, ThrustProgram,
};
use std::f64::consts::PI;

const TICK: f64 = 0.02;

fn run_until_terminal<A: rocket_lander::Autopilot>(
    driver: &mut SimulationDriver,
    autopilot: &mut A,
    max_time: f64,
) {
    while driver.sim_time() < max_time && !driver.status().is_terminal() {
        driver.tick(TICK, autopilot);
    }
}

fn vacuum_rocket() -> Rocket {
    let params = RocketParameters {
        aerodynamics: Aerodynamics::new(0.0, 0.0, 0.0),
        ..RocketParameters::default()
    };
    Rocket::new(params, Environment::default()).expect("valid parameters")
}

#[test]
fn test_idle_rocket_settles_onto_pad() {
    println!("INTEGRATION TEST: Idle rocket settles onto the pad");

    let mut driver = SimulationDriver::with_defaults(Rocket::default());
    run_until_terminal(&mut driver, &mut ManualControl, 5.0);

    assert_eq!(
        driver.status(),
        FlightStatus::Landed,
        "Unpowered rocket should drop the last few centimeters and land"
    );
    let peak = driver.peak_altitude();
    assert!(peak > 5.0 && peak < 5.05, "Peak should be the first step height, got {}", peak);

    let score = driver.score().expect("terminal session has a score");
    assert!((score - peak).abs() < 1e-9, "Score {} should equal the peak {}", score, peak);
}

#[test]
fn test_hard_vertical_impact_is_a_crash() {
    println!("INTEGRATION TEST: Powered hop followed by a free fall");

    let mut driver = SimulationDriver::with_defaults(Rocket::default());
    driver.rocket_mut().set_thrust([0.5, 0.0, 0.0]);
    for _ in 0..150 {
        driver.tick(TICK, &mut ManualControl);
    }
    assert_eq!(driver.status(), FlightStatus::InFlight);
    assert!(driver.rocket().state().vy > 20.0);

    driver.rocket_mut().set_thrust([0.0, 0.0, 0.0]);
    run_until_terminal(&mut driver, &mut ManualControl, 60.0);

    assert_eq!(driver.status(), FlightStatus::Crashed);
    assert!(
        driver.peak_altitude() > 50.0,
        "Rocket should have climbed well above the pad, peak {:.1} m",
        driver.peak_altitude()
    );
    let score = driver.score().expect("terminal session has a score");
    assert!(score <= 0.0 && score > -1e-6, "Crash score should be -|x| ~ 0, got {}", score);

    // frozen afterwards
    let frozen = driver.rocket().state();
    driver.tick(1.0, &mut ThrustProgram::Lofted);
    assert_eq!(driver.rocket().state(), frozen);
    assert!(driver.rocket().thrust().is_off());
}

#[test]
fn test_free_flight_follows_ballistic_arc() {
    let mut rocket = vacuum_rocket();
    let start = RocketState {
        mass: 450.0,
        x: 10.0,
        y: 2_000.0,
        vx: -4.0,
        vy: 25.0,
        theta: 0.7,
        omega: 0.0,
    };
    rocket.set_state(start);

    let dt = 0.005;
    let steps = 1_000;
    for i in 0..steps {
        rocket.evolve(i as f64 * dt, dt);
    }

    let t = steps as f64 * dt;
    let g0 = rocket.params().gravity;
    let state = rocket.state();
    assert!((state.vy - (25.0 - g0 * t)).abs() < 1e-8);
    assert!((state.y - (2_000.0 + 25.0 * t - 0.5 * g0 * t * t)).abs() < 1e-8);
    assert!((state.x - (10.0 - 4.0 * t)).abs() < 1e-8);
    assert_eq!(state.mass, 450.0);
    assert!((state.theta - 0.7).abs() < 1e-12);
}

#[test]
fn test_mass_decreases_monotonically_to_dry_mass() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut rocket = Rocket::default();
    let dry_mass = rocket.params().dry_mass;

    let mut state = rocket.state();
    state.y = 50_000.0;
    rocket.set_state(state);

    let dt = 0.005;
    let mut previous = rocket.state().mass;
    for step in 0..12_000 {
        if step % 10 == 0 {
            rocket.set_thrust([
                rng.gen_range(0.05..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            ]);
        }
        rocket.evolve(step as f64 * dt, dt);
        assert_eq!(rocket.status(), FlightStatus::InFlight);

        let mass = rocket.state().mass;
        assert!(mass >= dry_mass, "Mass {} fell below dry mass at step {}", mass, step);
        if previous > dry_mass {
            assert!(mass < previous, "Mass should strictly decrease at step {}", step);
        } else {
            assert_eq!(mass, dry_mass, "Mass should stay at dry mass at step {}", step);
        }
        previous = mass;
    }

    assert_eq!(rocket.state().mass, dry_mass);
    assert!(rocket.is_out_of_fuel());
}

#[test]
fn test_step_accounting_is_deterministic() {
    let run = |accounting: StepAccounting| {
        let mut driver =
            SimulationDriver::new(Rocket::default(), 0.005, accounting).expect("valid time step");
        let mut program = ThrustProgram::Ramp;
        for _ in 0..200 {
            driver.tick(TICK, &mut program);
        }
        (driver.steps(), driver.sim_time(), driver.rocket().state())
    };

    for accounting in [StepAccounting::Reference, StepAccounting::Exact] {
        let first = run(accounting);
        let second = run(accounting);
        assert_eq!(first, second, "{:?} accounting should be reproducible", accounting);
    }

    let (steps, sim_time, _) = run(StepAccounting::Exact);
    assert_eq!(steps, 800);
    assert!((sim_time - 4.0).abs() < 1e-9);
}

#[test]
fn test_landing_and_crash_scenarios() {
    let mut rocket = Rocket::default();
    let half_length = rocket.params().geometry.half_length();

    rocket.set_state(RocketState {
        mass: 400.0,
        x: 0.0,
        y: half_length + 0.02,
        vx: 0.0,
        vy: -1.0,
        theta: PI / 2.0,
        omega: 0.0,
    });
    assert!(rocket.is_landed());
    assert!(!rocket.is_into_ground());

    rocket.set_state(RocketState {
        mass: 400.0,
        x: 12.0,
        y: -1.0,
        vx: 30.0,
        vy: -30.0,
        theta: 0.0,
        omega: 0.0,
    });
    assert!(rocket.is_into_ground());
    assert_eq!(rocket.status(), FlightStatus::Crashed);
}

#[test]
fn test_stabilizer_damps_spin() {
    let mut driver = SimulationDriver::with_defaults(Rocket::default());
    let mut state = driver.rocket().state();
    state.y = 2_000.0;
    state.omega = 0.3;
    driver.rocket_mut().set_state(state);

    let mut stabilizer = Stabilizer::engage(driver.rocket_mut());
    for _ in 0..100 {
        driver.tick(TICK, &mut stabilizer);
    }

    let omega = driver.rocket().state().omega;
    assert!(omega.abs() < 0.1, "Spin should be suppressed, omega = {}", omega);
    assert_eq!(driver.status(), FlightStatus::InFlight);
}

#[test]
fn test_reset_replays_identically() {
    let mut driver = SimulationDriver::with_defaults(Rocket::default());
    let mut program = ThrustProgram::Hop;
    for _ in 0..100 {
        driver.tick(TICK, &mut program);
    }
    let first = (driver.rocket().state(), driver.peak_altitude(), driver.steps());

    driver.reset();
    for _ in 0..100 {
        driver.tick(TICK, &mut program);
    }
    let second = (driver.rocket().state(), driver.peak_altitude(), driver.steps());

    assert_eq!(first, second);
}
