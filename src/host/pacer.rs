use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame's time budget
pub struct FramePacer {
    target_frame_time: Duration,
    frame_start: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_frame_time: Duration) -> Self {
        Self {
            target_frame_time,
            frame_start: None,
        }
    }

    pub fn target_frame_time(&self) -> Duration {
        self.target_frame_time
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Sleep until the frame budget is used up. Returns whether it slept;
    /// a late frame (or one never begun) does not sleep.
    pub fn finish_frame(&mut self) -> bool {
        let Some(frame_start) = self.frame_start.take() else {
            return false;
        };

        let elapsed = frame_start.elapsed();
        if self.target_frame_time > elapsed {
            spin_sleep::sleep(self.target_frame_time - elapsed);
            true
        } else {
            false
        }
    }
}
