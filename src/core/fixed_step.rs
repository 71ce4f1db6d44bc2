use crate::traits::Updateable;

/// Splits variable frame deltas into fixed-size camera ticks.
///
/// The default rotation step is quadratic in delta, so feeding it a
/// constant timestep keeps easing speed independent of the render rate.
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep: f32,
    accumulator: f32,
    max_steps: u8,
}

impl FixedStep {
    /// Tick at `hz`, running at most `max_steps` ticks per frame
    pub fn new(hz: f32, max_steps: u8) -> Self {
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Bank `delta` and return the fixed steps now due.
    /// Time beyond `max_steps` is dropped. Negative or non-finite deltas
    /// are ignored so the accumulator stays usable.
    pub fn steps(&mut self, delta: f32) -> impl Iterator<Item = f32> {
        if !delta.is_finite() || delta < 0.0 {
            log::warn!("Ignoring frame delta {} in fixed-step driver", delta);
            return std::iter::repeat(self.timestep).take(0);
        }

        self.accumulator += delta;

        let due = (self.accumulator / self.timestep).floor() as usize;
        let steps = due.min(self.max_steps as usize);

        if due > steps {
            log::debug!("Dropping {} camera ticks after a long frame", due - steps);
            self.accumulator = 0.0;
        } else {
            self.accumulator -= steps as f32 * self.timestep;
        }

        std::iter::repeat(self.timestep).take(steps)
    }

    /// Bank `delta` and run every due step on `target`
    pub fn drive(&mut self, delta: f32, target: &mut dyn Updateable) -> usize {
        let mut ran = 0;
        for step in self.steps(delta) {
            target.update(step);
            ran += 1;
        }
        ran
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }
}
