use std::fmt;

use super::{guidance::Autopilot, rocket::Rocket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustProgram {
    Lofted,
    Hop,
    Ramp,
}

impl ThrustProgram {
    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(ThrustProgram::Lofted),
            2 => Some(ThrustProgram::Hop),
            3 => Some(ThrustProgram::Ramp),
            _ => None,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            ThrustProgram::Lofted => ThrustProgram::Hop,
            ThrustProgram::Hop => ThrustProgram::Ramp,
            ThrustProgram::Ramp => ThrustProgram::Lofted,
        }
    }

    // Requested `[main, left, right]`, not yet clamped.
    pub fn throttle_at(self, t: f64) -> [f64; 3] {
        let mut u = [0.0; 3];
        let within = |start: f64, end: f64| t > start && t < end;
        match self {
            ThrustProgram::Lofted => {
                if t < 7.0 {
                    u[0] = 0.50;
                }
                if within(5.0, 5.5) {
                    u[1] = 1.0;
                }
                if within(7.0, 9.0) || within(10.0, 10.5) {
                    u[2] = 1.0;
                }
            }
            ThrustProgram::Hop => {
                if t < 1.0 {
                    u[0] = 0.50;
                }
                if within(1.0, 2.0) {
                    u[0] = 0.75;
                }
                if within(6.0, 6.5) {
                    u[2] = 1.0;
                }
                if within(7.0, 7.5) {
                    u[1] = 1.0;
                }
            }
            ThrustProgram::Ramp => {
                if t < 7.0 {
                    u[0] = 0.50 + t / 7.0;
                }
                if within(3.0, 5.0) || within(9.0, 11.0) {
                    u[1] = 1.0;
                }
                if within(5.0, 9.0) || within(20.0, 22.0) {
                    u[2] = 1.0;
                }
            }
        }
        u
    }
}

impl fmt::Display for ThrustProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = match self {
            ThrustProgram::Lofted => 1,
            ThrustProgram::Hop => 2,
            ThrustProgram::Ramp => 3,
        };
        write!(f, "program {} ({:?})", number, self)
    }
}

impl Autopilot for ThrustProgram {
    fn command(&mut self, sim_time: f64, rocket: &mut Rocket) {
        rocket.set_thrust(self.throttle_at(sim_time));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_numbers() {
        assert_eq!(ThrustProgram::from_number(1), Some(ThrustProgram::Lofted));
        assert_eq!(ThrustProgram::from_number(3), Some(ThrustProgram::Ramp));
        assert_eq!(ThrustProgram::from_number(0), None);
        assert_eq!(ThrustProgram::from_number(4), None);
        assert_eq!(ThrustProgram::Ramp.cycle(), ThrustProgram::Lofted);
    }

    #[test]
    fn test_lofted_schedule() {
        let program = ThrustProgram::Lofted;
        assert_eq!(program.throttle_at(0.0), [0.5, 0.0, 0.0]);
        assert_eq!(program.throttle_at(5.2), [0.5, 1.0, 0.0]);
        assert_eq!(program.throttle_at(7.0), [0.0, 0.0, 0.0]);
        assert_eq!(program.throttle_at(8.0), [0.0, 0.0, 1.0]);
        assert_eq!(program.throttle_at(10.25), [0.0, 0.0, 1.0]);
        assert_eq!(program.throttle_at(12.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hop_schedule_has_gap_at_one_second() {
        let program = ThrustProgram::Hop;
        assert_eq!(program.throttle_at(0.5), [0.5, 0.0, 0.0]);
        assert_eq!(program.throttle_at(1.0), [0.0, 0.0, 0.0]);
        assert_eq!(program.throttle_at(1.5), [0.75, 0.0, 0.0]);
        assert_eq!(program.throttle_at(6.2), [0.0, 0.0, 1.0]);
        assert_eq!(program.throttle_at(7.2), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_ramp_saturates_through_setter() {
        let program = ThrustProgram::Ramp;
        assert_eq!(program.throttle_at(3.5)[0], 1.0);
        assert!(program.throttle_at(6.0)[0] > 1.0);

        let mut rocket = Rocket::default();
        let mut pilot = program;
        pilot.command(6.0, &mut rocket);
        assert_eq!(rocket.thrust().as_array(), [1.0, 0.0, 1.0]);
    }
}
