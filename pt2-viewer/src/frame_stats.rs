use std::collections::VecDeque;
use std::time::Duration;

const NR_SAMPLES: usize = 60;

/// Rolling average of the frame time over the last frames.
#[derive(Debug, Default)]
pub struct FrameStats {
    samples: VecDeque<Duration>,
    sum: Duration,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, frame_time: Duration) {
        if self.samples.len() == NR_SAMPLES {
            if let Some(oldest) = self.samples.pop_front() {
                self.sum -= oldest;
            }
        }
        self.samples.push_back(frame_time);
        self.sum += frame_time;
    }

    /// Average number of frames per second, or 0.0 if nothing was recorded yet.
    pub fn framerate(&self) -> f32 {
        if self.samples.is_empty() || self.sum.is_zero() {
            return 0.0;
        }
        self.samples.len() as f32 / self.sum.as_secs_f32()
    }

    /// Average frame time in milliseconds.
    pub fn ms_per_frame(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.sum.as_secs_f32() * 1000.0 / self.samples.len() as f32
    }
}
