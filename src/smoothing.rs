use std::collections::VecDeque;

/// Per-axis running median over the last `window` raw samples.
#[derive(Clone, Debug)]
pub struct MedianSmoother {
    window: usize,
    xs: VecDeque<f32>,
    ys: VecDeque<f32>,
}

impl MedianSmoother {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            xs: VecDeque::with_capacity(window + 1),
            ys: VecDeque::with_capacity(window + 1),
        }
    }

    pub fn smooth(&mut self, x: f32, y: f32) -> (f32, f32) {
        self.xs.push_back(x);
        self.ys.push_back(y);
        if self.xs.len() > self.window {
            self.xs.pop_front();
            self.ys.pop_front();
        }

        (median(&self.xs), median(&self.ys))
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }
}

// Element at index len / 2 of the sorted window; for an even-length warm-up
// window that is the later of the two middle samples.
fn median(values: &VecDeque<f32>) -> f32 {
    let mut sorted: Vec<f32> = values.iter().copied().collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted[sorted.len() / 2]
}
