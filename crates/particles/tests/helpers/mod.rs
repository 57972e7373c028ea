use folio_particles::{Bounds, FrameHandle, FrameScheduler, Particle, Point, Surface};

/// Frame scheduler driven by hand.
#[derive(Default)]
pub struct ManualScheduler {
    next: u64,
    pub pending: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

#[allow(dead_code)]
impl ManualScheduler {
    pub fn latest(&self) -> Option<FrameHandle> {
        self.pending.last().copied()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push(handle);

        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear(Bounds),
    Alpha(f64),
    Circle(Point, f64, String),
    Stroke(String, f64),
    Line(Point, Point),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Circle(..))).count()
    }

    /// Alpha in effect for each drawn line.
    pub fn line_alphas(&self) -> Vec<f64> {
        let mut alpha = 1.0;
        let mut alphas = vec![];
        for op in &self.ops {
            match op {
                Op::Alpha(a) => alpha = *a,
                Op::Line(..) => alphas.push(alpha),
                _ => {}
            }
        }

        alphas
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ops.push(Op::Clear(bounds));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::Alpha(alpha));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ops.push(Op::Circle(center, radius, color.to_owned()));
    }

    fn set_stroke(&mut self, color: &str, width: f64) {
        self.ops.push(Op::Stroke(color.to_owned(), width));
    }

    fn line(&mut self, from: Point, to: Point) {
        self.ops.push(Op::Line(from, to));
    }
}

#[allow(dead_code)]
pub fn still(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        size: 2.0,
        speed_x: 0.0,
        speed_y: 0.0,
        color: "#880e4f",
        opacity: 0.4,
    }
}
