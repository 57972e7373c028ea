use rand::Rng;

/// Particle colours, darkest last.
pub const PALETTE: [&str; 5] = ["#e91e63", "#d81b60", "#c2185b", "#ad1457", "#880e4f"];

pub const MAX_PARTICLES: usize = 100;

/// Surface area, in square units, that earns one particle.
pub const AREA_PER_PARTICLE: f64 = 10_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width * self.height
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub color: &'static str,
    pub opacity: f64,
}

impl Particle {
    /// Uniform position inside `bounds`, size in [1, 4), speed components in
    /// [-0.25, 0.25), opacity in [0.1, 0.6).
    pub fn random<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..bounds.width),
            y: rng.random_range(0.0..bounds.height),
            size: rng.random_range(1.0..4.0),
            speed_x: rng.random_range(-0.25..0.25),
            speed_y: rng.random_range(-0.25..0.25),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            opacity: rng.random_range(0.1..0.6),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// `min(floor(area / 10000), 100)`
pub fn particle_count(bounds: Bounds) -> usize {
    let count = (bounds.area() / AREA_PER_PARTICLE).floor() as usize;

    count.min(MAX_PARTICLES)
}
