//! Frame clock: elapsed-time source and a smoothed FPS estimate.

use std::time::Instant;

/// Exponential smoothing factor for the FPS readout; one frame of noise
/// should not make the status line flicker.
const FPS_SMOOTHING: f32 = 0.1;

/// Wall-clock frame timer.
///
/// `tick` returns the seconds elapsed since the previous tick, which is the
/// value movement and turning scale by. The FPS estimate exists only for the
/// status line.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last_tick: Instant,
    smoothed_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            smoothed_fps: 0.0,
        }
    }

    /// Advance the clock and return elapsed seconds since the last tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.smoothed_fps = if self.smoothed_fps == 0.0 {
                instant_fps
            } else {
                self.smoothed_fps + FPS_SMOOTHING * (instant_fps - self.smoothed_fps)
            };
        }

        elapsed
    }

    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Milliseconds since the clock was created (for held-key bookkeeping).
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        sleep(Duration::from_millis(10));
        let elapsed = clock.tick();
        assert!(elapsed >= 0.009, "elapsed {elapsed}");
        assert!(clock.fps() > 0.0);
    }

    #[test]
    fn now_ms_is_monotonic() {
        let clock = FrameClock::new();
        let a = clock.now_ms();
        sleep(Duration::from_millis(2));
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
