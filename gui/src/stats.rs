/// Population statistics collected from engine change events.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PopulationStats {
    generation: u64,
    history: Vec<usize>,
    max: usize,
    min: Option<usize>,
}

impl PopulationStats {
    /// Adds a sample unless it repeats the previous `(generation, population)`.
    pub fn record(&mut self, generation: u64, population: usize) {
        if !self.history.is_empty()
            && self.generation == generation
            && self.population() == population
        {
            return;
        }
        self.generation = generation;
        self.history.push(population);
        self.max = self.max.max(population);
        self.min = Some(self.min.map_or(population, |min| min.min(population)));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.history.last().copied().unwrap_or(0)
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Smallest recorded population, 0 before anything was recorded.
    pub fn min(&self) -> usize {
        self.min.unwrap_or(0)
    }

    pub fn average(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().sum::<usize>() as f64 / self.history.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let stats = PopulationStats::default();
        assert_eq!(stats.population(), 0);
        assert_eq!(stats.min(), 0);
        assert_eq!(stats.max(), 0);
        assert_eq!(stats.average(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut stats = PopulationStats::default();
        stats.record(1, 50);
        stats.record(2, 75);
        stats.record(3, 60);

        assert_eq!(stats.generation(), 3);
        assert_eq!(stats.population(), 60);
        assert_eq!(stats.history(), &[50, 75, 60]);
        assert_eq!(stats.max(), 75);
        assert_eq!(stats.min(), 50);
        assert!((stats.average() - 61.666).abs() < 0.001);
    }

    #[test]
    fn test_zero_population_counts_as_minimum() {
        let mut stats = PopulationStats::default();
        stats.record(0, 12);
        stats.record(1, 0);
        stats.record(2, 3);
        assert_eq!(stats.min(), 0);
    }

    #[test]
    fn test_repeated_sample_is_ignored() {
        let mut stats = PopulationStats::default();
        stats.record(0, 4);
        stats.record(0, 4);
        stats.record(0, 5);
        stats.record(1, 5);
        assert_eq!(stats.history(), &[4, 5, 5]);
    }

    #[test]
    fn test_reset() {
        let mut stats = PopulationStats::default();
        stats.record(4, 9);
        stats.reset();
        assert_eq!(stats, PopulationStats::default());
    }
}
