use crate::{Bounds, Particle, Point};

/// Distance under which two particles are linked.
pub const LINK_DISTANCE: f64 = 100.0;
pub const LINK_MAX_OPACITY: f64 = 0.2;
pub const LINK_COLOR: &str = "#e91e63";
pub const LINK_WIDTH: f64 = 0.5;

/// 2D drawing target, e.g. a canvas context.
pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn set_alpha(&mut self, alpha: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
    fn set_stroke(&mut self, color: &str, width: f64);
    fn line(&mut self, from: Point, to: Point);
}

/// `0.2 * (1 - distance / 100)`, never negative.
pub fn link_opacity(distance: f64) -> f64 {
    (LINK_MAX_OPACITY * (1.0 - distance / LINK_DISTANCE)).max(0.0)
}

pub fn render<S: Surface + ?Sized>(particles: &[Particle], bounds: Bounds, surface: &mut S) {
    surface.clear(bounds);

    for particle in particles {
        surface.set_alpha(particle.opacity);
        surface.fill_circle(particle.position(), particle.size, particle.color);
    }

    surface.set_stroke(LINK_COLOR, LINK_WIDTH);

    // O(n²) over at most MAX_PARTICLES
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.position().distance(b.position());
            if distance < LINK_DISTANCE {
                surface.set_alpha(link_opacity(distance));
                surface.line(a.position(), b.position());
            }
        }
    }
}
