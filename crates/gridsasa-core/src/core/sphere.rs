use nalgebra::Vector3;
use std::f64::consts::PI;

/// A fixed set of quasi-uniform unit directions used as Monte-Carlo surface samples.
///
/// Points are produced in spiral order, so consecutive points are spatial neighbours on the
/// sphere. The occlusion search relies on that ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct SpherePointSet {
    points: Vec<Vector3<f64>>,
}

impl SpherePointSet {
    /// Generates `n` points with the golden-section spiral.
    ///
    /// Point `i` has height `y = i * 2/n - 1 + 1/n`, ring radius `sqrt(1 - y^2)` and azimuth
    /// `i * pi * (3 - sqrt(5))`.
    pub fn golden_spiral(n: usize) -> Self {
        let inc = PI * (3.0 - 5.0_f64.sqrt());
        let offset = 2.0 / n as f64;

        let points = (0..n)
            .map(|i| {
                let y = i as f64 * offset - 1.0 + offset / 2.0;
                let r = (1.0 - y * y).sqrt();
                let phi = i as f64 * inc;
                Vector3::new(phi.cos() * r, y, phi.sin() * r)
            })
            .collect();

        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Solid angle represented by each point: `4 * pi / n`.
    #[inline]
    pub fn area_weight(&self) -> f64 {
        4.0 * PI / self.points.len() as f64
    }
}
