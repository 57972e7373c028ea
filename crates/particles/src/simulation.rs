use crate::{Bounds, Particle, Point};

/// Distance under which the pointer pulls particles.
pub const POINTER_RADIUS: f64 = 100.0;
pub const POINTER_STRENGTH: f64 = 0.2;

/// Advances every particle by one frame.
///
/// Order per particle: pointer pull, integration, then reflection. Reflection
/// only flips the velocity component of the axis that left `[0, dimension]`;
/// the position is not clamped, so a particle may sit slightly outside the
/// surface until its reflected velocity carries it back.
pub fn step(particles: &mut [Particle], pointer: Option<Point>, bounds: Bounds) {
    for particle in particles.iter_mut() {
        if let Some(pointer) = pointer {
            pull_towards(particle, pointer);
        }

        particle.x += particle.speed_x;
        particle.y += particle.speed_y;

        if heading_out(particle.x, particle.speed_x, bounds.width) {
            particle.speed_x = -particle.speed_x;
        }
        if heading_out(particle.y, particle.speed_y, bounds.height) {
            particle.speed_y = -particle.speed_y;
        }
    }
}

/// Outside `[0, max]` and still moving away from it.
fn heading_out(position: f64, speed: f64, max: f64) -> bool {
    (position < 0.0 && speed < 0.0) || (position > max && speed > 0.0)
}

fn pull_towards(particle: &mut Particle, pointer: Point) {
    let dx = pointer.x - particle.x;
    let dy = pointer.y - particle.y;
    let distance = dx.hypot(dy);

    if distance < POINTER_RADIUS {
        let force = (1.0 - distance / POINTER_RADIUS) * POINTER_STRENGTH;
        particle.x += dx * force;
        particle.y += dy * force;
    }
}
