/// Fixed timestep accumulator.
/// Game logic and physics advance in equal `dt` slices regardless of the
/// browser's frame cadence.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 8,
        }
    }

    /// Cap on steps per frame; time beyond the cap is discarded.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add a variable frame delta and return how many fixed steps to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_frame_is_one_step() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.advance(0.008), 0);
        assert_eq!(ts.advance(0.010), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0).with_max_steps(4);
        assert_eq!(ts.advance(2.0), 4);
        // The stall is dropped rather than replayed on the next frame.
        assert_eq!(ts.advance(0.001), 0);
    }

    #[test]
    fn negative_or_nan_delta_runs_nothing() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.advance(-1.0), 0);
        assert_eq!(ts.advance(f32::NAN), 0);
    }
}
