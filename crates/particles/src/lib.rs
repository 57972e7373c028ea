mod animation;
mod field;
mod particle;
mod render;
mod simulation;

pub use animation::*;
pub use field::*;
pub use particle::*;
pub use render::*;
pub use simulation::*;
