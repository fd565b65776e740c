use super::structure::RocketParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nozzle {
    Main,
    Left,
    Right,
}

impl Nozzle {
    pub const ALL: [Nozzle; 3] = [Nozzle::Main, Nozzle::Left, Nozzle::Right];

    pub fn index(self) -> usize {
        match self {
            Nozzle::Main => 0,
            Nozzle::Left => 1,
            Nozzle::Right => 2,
        }
    }
}

// Throttle fractions for the three nozzles, each kept in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Throttle {
    main: f64,
    left: f64,
    right: f64,
}

fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value < 0.0 {
        0.0
    } else {
        value
    }
}

impl Throttle {
    pub const OFF: Throttle = Throttle {
        main: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn new(main: f64, left: f64, right: f64) -> Self {
        Throttle {
            main: clamp_unit(main),
            left: clamp_unit(left),
            right: clamp_unit(right),
        }
    }

    pub fn from_array(u: [f64; 3]) -> Self {
        Throttle::new(u[0], u[1], u[2])
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.main, self.left, self.right]
    }

    pub fn get(&self, nozzle: Nozzle) -> f64 {
        match nozzle {
            Nozzle::Main => self.main,
            Nozzle::Left => self.left,
            Nozzle::Right => self.right,
        }
    }

    pub fn set(&mut self, nozzle: Nozzle, value: f64) {
        let value = clamp_unit(value);
        match nozzle {
            Nozzle::Main => self.main = value,
            Nozzle::Left => self.left = value,
            Nozzle::Right => self.right = value,
        }
    }

    pub fn increment(&mut self, nozzle: Nozzle, delta: f64) {
        self.set(nozzle, self.get(nozzle) + delta);
    }

    pub fn reset_left_right(&mut self) {
        self.left = 0.0;
        self.right = 0.0;
    }

    pub fn is_off(&self) -> bool {
        self.main == 0.0 && self.left == 0.0 && self.right == 0.0
    }
}

// Instantaneous propulsion output for one throttle setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionOutput {
    pub mass_flow: f64,
    pub main: f64,
    pub left: f64,
    pub right: f64,
}

impl PropulsionOutput {
    pub const IDLE: PropulsionOutput = PropulsionOutput {
        mass_flow: 0.0,
        main: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn differential(&self) -> f64 {
        self.right - self.left
    }
}

// Mass flow (negative while burning) and per-nozzle thrust.
// Everything is zero once the mass has reached the dry mass.
pub fn propulsion_output(
    mass: f64,
    throttle: &Throttle,
    params: &RocketParameters,
) -> PropulsionOutput {
    if mass <= params.dry_mass {
        return PropulsionOutput::IDLE;
    }

    let thrust = |nozzle: Nozzle| {
        params.gravity * params.isp(nozzle) * params.mdot_max(nozzle) * throttle.get(nozzle)
    };
    let mass_flow = -Nozzle::ALL
        .iter()
        .map(|&nozzle| params.mdot_max(nozzle) * throttle.get(nozzle))
        .sum::<f64>();

    PropulsionOutput {
        mass_flow,
        main: thrust(Nozzle::Main),
        left: thrust(Nozzle::Left),
        right: thrust(Nozzle::Right),
    }
}
