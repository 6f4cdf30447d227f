/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that counts simulated frames
 * and frame times, and decides when a diagnostic line is due.
 */

use std::time::Duration;

#[derive(Default)]
pub struct DebugInfo {
    pub frames: u64,
    pub last_frame_time: Duration,
    // Time accumulated since the last report
    window_time: Duration,
    window_frames: u32,
}

impl DebugInfo {
    // Record one frame, returns true when `interval` frames have passed since the last report
    pub fn record(&mut self, frame_time: Duration, interval: u64) -> bool {
        self.frames += 1;
        self.last_frame_time = frame_time;
        self.window_time += frame_time;
        self.window_frames += 1;

        interval > 0 && self.frames % interval == 0
    }

    // Average frame time since the last report, then start a new window
    pub fn take_average(&mut self) -> Duration {
        let average = if self.window_frames == 0 {
            Duration::ZERO
        } else {
            self.window_time / self.window_frames
        };
        self.window_time = Duration::ZERO;
        self.window_frames = 0;
        average
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_due_every_interval() {
        let mut info = DebugInfo::default();
        let due: Vec<bool> = (0..6)
            .map(|_| info.record(Duration::from_millis(50), 3))
            .collect();
        assert_eq!(due, [false, false, true, false, false, true]);
        assert_eq!(info.frames, 6);
    }

    #[test]
    fn zero_interval_never_reports() {
        let mut info = DebugInfo::default();
        assert!(!info.record(Duration::from_millis(1), 0));
    }

    #[test]
    fn average_covers_frames_since_last_report() {
        let mut info = DebugInfo::default();
        info.record(Duration::from_millis(40), 10);
        info.record(Duration::from_millis(60), 10);
        assert_eq!(info.take_average(), Duration::from_millis(50));
        assert_eq!(info.take_average(), Duration::ZERO);
    }
}
