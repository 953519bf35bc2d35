use super::vec2::{Point, Vector};

pub const CHECKPOINT_RADIUS: f64 = 400.0;
pub const COLLISION_DISTANCE: f64 = 800.0;

/// Raw per-turn state of one pod as reported by the referee.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct PodState {
    pub pos: Point,
    pub vel: Vector,
    pub angle: f64,
    pub next_checkpoint: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pod {
    pub pos: Point,
    pub vel: Vector,
    /// Heading in degrees.
    pub angle: f64,
    pub next_checkpoint: usize,
    /// Completed wraps of the checkpoint index, `NO_LAP` before the first one.
    pub lap: i32,
}

impl Default for Pod {
    fn default() -> Self {
        Pod {
            pos: Point::default(),
            vel: Vector::default(),
            angle: 0.0,
            next_checkpoint: 0,
            lap: Pod::NO_LAP,
        }
    }
}

impl Pod {
    pub const NO_LAP: i32 = -1;

    pub fn new(state: PodState) -> Self {
        Pod {
            pos: state.pos,
            vel: state.vel,
            angle: state.angle,
            next_checkpoint: state.next_checkpoint,
            lap: Pod::NO_LAP,
        }
    }

    /// Applies the referee's view of this pod. The lap counter moves when the
    /// next checkpoint wraps from the last one back to index 0.
    pub fn update(&mut self, state: PodState, checkpoint_count: usize) {
        let wrapped = checkpoint_count > 0
            && self.next_checkpoint != state.next_checkpoint
            && self.next_checkpoint == checkpoint_count - 1
            && state.next_checkpoint == 0;
        if wrapped {
            self.lap += 1;
        }

        self.pos = state.pos;
        self.vel = state.vel;
        self.angle = state.angle;
        self.next_checkpoint = state.next_checkpoint;
    }

    /// Checkpoint `offset` steps past the next one, wrapping around the track.
    pub fn next_checkpoint(&self, checkpoints: &[Point], offset: usize) -> Point {
        checkpoints[(self.next_checkpoint + offset) % checkpoints.len()]
    }

    /// True if `self` ranks ahead of `other`: lap first, then checkpoint index,
    /// then the distance to the next checkpoint.
    pub fn is_ahead_of(&self, other: &Pod, checkpoints: &[Point]) -> bool {
        if self.lap != other.lap {
            return self.lap > other.lap;
        }
        if self.next_checkpoint != other.next_checkpoint {
            return self.next_checkpoint > other.next_checkpoint;
        }
        self.dist_to(self.next_checkpoint(checkpoints, 0))
            < other.dist_to(other.next_checkpoint(checkpoints, 0))
    }

    /// Heading error towards `target` in degrees, within `[-180, 180]`.
    pub fn angle_to(&self, target: Point) -> f64 {
        let dir = target - self.pos;
        let bearing = dir.dy.atan2(dir.dx).to_degrees();
        let diff = self.angle - bearing;
        if diff < -180.0 {
            diff + 360.0
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff
        }
    }

    pub fn dist_to(&self, target: Point) -> f64 {
        (target - self.pos).len()
    }

    pub fn next_pos(&self) -> Point {
        self.pos + self.vel
    }

    pub fn steps_to(&self, checkpoint: Point) -> f64 {
        self.steps_to_within(checkpoint, CHECKPOINT_RADIUS)
    }

    /// Turns until the pod, coasting at its current velocity, is within
    /// `radius` of `center`. Zero if already inside, infinity if it never gets
    /// there.
    pub fn steps_to_within(&self, center: Point, radius: f64) -> f64 {
        let rel = self.pos - center;
        let a = self.vel.len2();
        let b = 2.0 * self.vel.dot(rel);
        let c = rel.len2() - radius * radius;
        let disc = b * b - 4.0 * a * c;
        if a == 0.0 || disc < 0.0 {
            return f64::INFINITY;
        }

        let sq = disc.sqrt();
        let enter = (-b - sq) / (2.0 * a);
        let leave = (-b + sq) / (2.0 * a);
        if leave < 0.0 {
            return f64::INFINITY;
        }
        enter.max(0.0)
    }

    pub fn will_collide_with(&self, other: &Pod) -> bool {
        self.will_collide_within(other, COLLISION_DISTANCE)
    }

    /// One-turn lookahead: do the extrapolated next positions come closer
    /// than `threshold`?
    pub fn will_collide_within(&self, other: &Pod, threshold: f64) -> bool {
        (self.next_pos() - other.next_pos()).len2() < threshold * threshold
    }
}
