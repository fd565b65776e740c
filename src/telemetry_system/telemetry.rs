use crate::control::{propulsion::Throttle, rocket::RocketState};
use crate::simulation_system::driver::SimulationDriver;
use crate::trajectory_system::terminal::FlightStatus;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: RocketState,
    pub throttle: Throttle,
    pub status: FlightStatus,
}

#[derive(Debug, Default)]
pub struct Telemetry {
    pub log: Vec<Sample>,
    max_speed: f64,
    max_altitude: f64,
    min_fuel: Option<f64>,
    status_times: Vec<(FlightStatus, f64)>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry::default()
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.3}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, driver: &SimulationDriver) {
        let rocket = driver.rocket();
        let state = rocket.state();
        let status = driver.status();
        let fuel = rocket.fuel_fraction();

        self.max_speed = self.max_speed.max(state.speed());
        self.max_altitude = self.max_altitude.max(state.y);
        self.min_fuel = Some(self.min_fuel.map_or(fuel, |min| min.min(fuel)));

        match self.status_times.last() {
            Some((last, _)) if *last == status => {}
            _ => self.status_times.push((status, driver.sim_time())),
        }

        self.log.push(Sample {
            time: driver.sim_time(),
            state,
            throttle: rocket.thrust(),
            status,
        });
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn min_fuel(&self) -> Option<f64> {
        self.min_fuel
    }

    pub fn status_times(&self) -> &[(FlightStatus, f64)] {
        &self.status_times
    }

    pub fn format_sample(sample: &Sample) -> String {
        let state = &sample.state;
        let [main, left, right] = sample.throttle.as_array();
        format!(
            "time: {} | elevation: {} | vert. vel: {:.2} m/s | horz. pos: {:.2} m | \
             heading: {:.1}° | ang. vel: {:.2} rad/s | mass: {:.1} kg | \
             throttle: [{:.2}, {:.2}, {:.2}] | {:?}",
            Self::format_time(sample.time),
            Self::format_altitude(state.y),
            state.vy,
            state.x,
            state.theta.to_degrees(),
            state.omega,
            state.mass,
            main,
            left,
            right,
            sample.status
        )
    }

    pub fn display_data(&self, every: usize) {
        if every > 0 {
            println!("--- Telemetry Data ---");
            for sample in self.log.iter().step_by(every) {
                println!("{}", Self::format_sample(sample));
            }
            println!("--- End of Telemetry ---");
        }

        println!("\n--- Simulation Summary ---");
        println!("Max Speed: {:.2} m/s", self.max_speed);
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        if let Some(fuel) = self.min_fuel {
            println!("Min Fuel: {:.1}%", fuel * 100.0);
        }

        println!("\n--- Status Transitions ---");
        for (status, time) in &self.status_times {
            println!("{:?} at: {}", status, Self::format_time(*time));
        }
    }
}
