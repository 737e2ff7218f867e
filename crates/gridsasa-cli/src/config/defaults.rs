pub struct DefaultsConfig {
    pub n_sphere_points: usize,
    pub probe_radius: f64,
    pub spacing: f64,
    pub exclude_hydrogens: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            n_sphere_points: 960,
            probe_radius: 1.4,
            spacing: 1.0,
            exclude_hydrogens: false,
        }
    }
}
