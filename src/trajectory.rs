use std::{collections::VecDeque, time::Duration};

use crate::{clock::Debounce, config::CircleConfig};

/// Fingertip path recorded while the pointing pose is held. Fires once the
/// path closes on itself around a loop wide enough not to be jitter.
#[derive(Clone, Debug)]
pub struct TrajectoryTracker {
    config: CircleConfig,
    path: VecDeque<(f32, f32)>,
}

impl TrajectoryTracker {
    pub fn new(config: CircleConfig) -> Self {
        let capacity = config.max_points + 1;
        Self {
            config,
            path: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a point and reports whether a circle was completed. `back` is
    /// the cooldown shared with the other back gesture; nothing is recorded
    /// while it is still running.
    pub fn feed(&mut self, point: (f32, f32), back: &mut Debounce, now: Duration) -> bool {
        if back.cooling_down(now) {
            return false;
        }

        self.path.push_back(point);

        if self.path.len() > self.config.min_points && self.is_closed_circle() {
            back.mark(now);
            self.path.clear();
            return true;
        }

        if self.path.len() > self.config.max_points {
            self.path.pop_front();
        }

        false
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }

    fn is_closed_circle(&self) -> bool {
        let (Some(start), Some(end)) = (self.path.front(), self.path.back()) else {
            return false;
        };
        if distance(*start, *end) > self.config.completion_threshold {
            return false;
        }

        let count = self.path.len() as f32;
        let (sum_x, sum_y) = self
            .path
            .iter()
            .fold((0.0, 0.0), |acc, p| (acc.0 + p.0, acc.1 + p.1));
        let center = (sum_x / count, sum_y / count);

        let mean_radius = self.path.iter().map(|p| distance(*p, center)).sum::<f32>() / count;
        mean_radius > self.config.min_radius
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;

    fn circle_points(radius: f32, count: usize) -> Vec<(f32, f32)> {
        (0..count)
            .map(|i| {
                let angle = TAU * i as f32 / count as f32;
                (0.5 + radius * angle.cos(), 0.5 + radius * angle.sin())
            })
            .collect()
    }

    fn feed_all(
        tracker: &mut TrajectoryTracker,
        back: &mut Debounce,
        points: &[(f32, f32)],
        now: Duration,
    ) -> usize {
        points
            .iter()
            .filter(|p| tracker.feed(**p, back, now))
            .count()
    }

    #[test]
    fn test_closed_circle_fires_once_and_clears() {
        let mut tracker = TrajectoryTracker::new(CircleConfig::default());
        let mut back = Debounce::new(Duration::from_millis(1_000));
        let points = circle_points(0.1, 24);

        let fired: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| tracker.feed(**p, &mut back, Duration::ZERO))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(fired, vec![23]);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_jitter_sized_loop_never_fires() {
        let mut tracker = TrajectoryTracker::new(CircleConfig::default());
        let mut back = Debounce::new(Duration::from_millis(1_000));
        let mut points = circle_points(0.02, 24);
        points.extend(circle_points(0.02, 24));

        assert_eq!(feed_all(&mut tracker, &mut back, &points, Duration::ZERO), 0);
        assert_eq!(tracker.len(), 48);
    }

    #[test]
    fn test_open_arc_does_not_fire() {
        let mut tracker = TrajectoryTracker::new(CircleConfig::default());
        let mut back = Debounce::new(Duration::from_millis(1_000));
        let arc: Vec<(f32, f32)> = circle_points(0.1, 24).into_iter().take(18).collect();
        assert_eq!(feed_all(&mut tracker, &mut back, &arc, Duration::ZERO), 0);
    }

    #[test]
    fn test_path_is_capped() {
        let mut tracker = TrajectoryTracker::new(CircleConfig::default());
        let mut back = Debounce::new(Duration::from_millis(1_000));
        let line: Vec<(f32, f32)> = (0..80).map(|i| (i as f32 * 0.01, 0.5)).collect();
        feed_all(&mut tracker, &mut back, &line, Duration::ZERO);
        assert_eq!(tracker.len(), 50);
    }

    #[test]
    fn test_cooldown_blocks_recording() {
        let mut tracker = TrajectoryTracker::new(CircleConfig::default());
        let mut back = Debounce::new(Duration::from_millis(1_000));
        back.mark(Duration::from_millis(500));

        let points = circle_points(0.1, 24);
        let during = feed_all(&mut tracker, &mut back, &points, Duration::from_millis(900));
        assert_eq!(during, 0);
        assert!(tracker.is_empty());

        let after = feed_all(&mut tracker, &mut back, &points, Duration::from_millis(1_600));
        assert_eq!(after, 1);
    }
}
