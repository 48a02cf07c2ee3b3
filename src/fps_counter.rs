pub struct FpsCounter {
    start_time: std::time::Instant,
    frame_count: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
            frame_count: 0,
        }
    }

    /// Counts one frame; yields the average FPS once per second.
    pub fn tick(&mut self) -> Option<f32> {
        self.frame_count += 1;
        let elapsed = self.start_time.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.start_time = std::time::Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_report_within_the_first_second() {
        let mut counter = FpsCounter::new();
        assert!(counter.tick().is_none());
        assert!(counter.tick().is_none());
    }
}
