pub struct Accumulator {
    n_vals: usize,
    sum: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self { n_vals: 0, sum: 0.0 }
    }

    pub fn add(&mut self, val: f64) {
        self.n_vals += 1;
        self.sum += val;
    }

    pub fn n_vals(&self) -> usize {
        self.n_vals
    }

    /// Arithmetic mean of the added values, or `None` if nothing was added.
    pub fn mean(&self) -> Option<f64> {
        if self.n_vals == 0 {
            return None;
        }
        Some(self.sum / self.n_vals as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_has_no_mean() {
        let acc = Accumulator::new();
        assert_eq!(acc.n_vals(), 0);
        assert_eq!(acc.mean(), None);
    }

    #[test]
    fn mean_is_sum_over_count() {
        let mut acc = Accumulator::new();
        for val in [10.0, 20.0, 0.5] {
            acc.add(val);
        }
        assert_eq!(acc.n_vals(), 3);
        assert_eq!(acc.mean(), Some((10.0 + 20.0 + 0.5) / 3.0));
    }
}
