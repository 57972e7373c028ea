use rand::Rng;

use crate::{Bounds, ParticleField, Point, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host per-frame callback mechanism (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Owns the particle field of one surface and keeps at most one frame
/// request outstanding for it.
pub struct Animation<S: FrameScheduler> {
    scheduler: S,
    field: ParticleField,
    pointer: Option<Point>,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> Animation<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            field: ParticleField::default(),
            pointer: None,
            pending: None,
        }
    }

    pub fn mount<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
        self.resize(bounds, rng);
    }

    /// Drops the outstanding frame and the current set, then starts over on
    /// the new surface. Nothing is scheduled for a surface without area.
    pub fn resize<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
        self.cancel();
        self.field = ParticleField::spawn(bounds, rng);

        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            particles = self.field.len(),
            "Particle field regenerated"
        );

        if bounds.area() > 0.0 {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Frame callback: step, draw, reschedule. Returns false for a callback
    /// that is no longer pending (torn down or superseded by a resize).
    pub fn frame<Sf: Surface + ?Sized>(&mut self, handle: FrameHandle, surface: &mut Sf) -> bool {
        if self.pending != Some(handle) {
            return false;
        }

        self.field.step(self.pointer);
        self.field.render(surface);
        self.pending = Some(self.scheduler.request_frame());

        true
    }

    pub fn teardown(&mut self) {
        self.cancel();
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for Animation<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
