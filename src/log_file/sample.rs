/// One row of simulation output
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Elapsed simulation time
    pub time: f64,
    /// Potential energy per particle
    pub potential_energy: f64,
    /// Kinetic energy per particle
    pub kinetic_energy: f64,
    /// Pressure
    pub pressure: f64,
}

impl Sample {
    /// Create a sample from its four raw quantities
    pub fn new(time: f64, potential_energy: f64, kinetic_energy: f64, pressure: f64) -> Self {
        Self {
            time,
            potential_energy,
            kinetic_energy,
            pressure,
        }
    }

    /// Potential plus kinetic energy
    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.potential_energy + self.kinetic_energy
    }

    /// True when every quantity is finite
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.potential_energy.is_finite()
            && self.kinetic_energy.is_finite()
            && self.pressure.is_finite()
    }
}
