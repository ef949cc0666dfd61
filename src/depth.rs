use log::info;

#[allow(unused_imports)]
use crate::Rbt;

/// Depth calculates minimum, maximum, average and percentile of leaf-node
/// depths in the [`Rbt`] tree. A leaf here is a sentinel position, so an
/// empty tree samples a single leaf at depth zero.
#[derive(Clone)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: [u64; 256],
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        self.min = if self.samples == 0 {
            depth
        } else {
            self.min.min(depth)
        };
        self.max = self.max.max(depth);
        self.samples += 1;
        self.total += depth;
        self.depths[depth] += 1;
    }

    /// Return number of leaf-nodes sampled in [`Rbt`] instance.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of leaf-node in [`Rbt`] instance.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of leaf-node in [`Rbt`] instance.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth of leaf-nodes in [`Rbt`] instance.
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            samples => self.total / samples,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth). Returned percentiles from 90, 91 .. 99
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        let (mut acc, mut prev_perc) = (0_u64, 90_u8);
        let iter = self.depths.iter().enumerate().filter(|(_, &item)| item > 0);
        for (depth, samples) in iter {
            acc += *samples;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            if perc >= prev_perc {
                percentiles.push((perc, depth));
                prev_perc = perc;
            }
        }
        percentiles
    }

    /// Log depth statistics in human readable format.
    pub fn pretty_print(&self, prefix: &str) {
        info!(
            "{}depth (min, avg, max): {:?}",
            prefix,
            (self.min, self.mean(), self.max)
        );
        for (perc, depth) in self.percentiles().into_iter() {
            info!("{}  {} percentile = {}", prefix, perc, depth);
        }
    }

    /// Convert depth statistics to JSON format, useful for plotting.
    pub fn json(&self) -> String {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(p, d)| format!("\"{}\": {}", p, d))
            .collect();
        let strs = [
            format!("\"min\": {}", self.min),
            format!("\"mean\": {}", self.mean()),
            format!("\"max\": {}", self.max),
            format!("\"percentiles\": {{ {} }}", ps.join(", ")),
        ];
        format!("{{ {} }}", strs.join(", "))
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth {
            samples: 0,
            min: 0,
            max: 0,
            total: 0,
            depths: [0; 256],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_depth_empty() {
        let depth = Depth::new();
        assert_eq!(depth.samples(), 0);
        assert_eq!(depth.mean(), 0);
        assert!(depth.percentiles().is_empty());
    }

    #[test]
    fn test_depth_sample() {
        let mut depth = Depth::new();
        for d in [3, 4, 4, 5, 4, 3, 6, 4, 4, 3].iter() {
            depth.sample(*d);
        }
        assert_eq!(depth.samples(), 10);
        assert_eq!(depth.min(), 3);
        assert_eq!(depth.max(), 6);
        assert_eq!(depth.mean(), 4);
        // 3 -> 30%, 4 -> 80%, 5 -> 90%, 6 -> 100%
        assert_eq!(depth.percentiles(), vec![(90, 5), (100, 6)]);
        assert_eq!(
            depth.json(),
            "{ \"min\": 3, \"mean\": 4, \"max\": 6, \"percentiles\": { \"90\": 5, \"100\": 6 } }"
        );
    }

    #[test]
    fn test_depth_zero() {
        let mut depth = Depth::new();
        depth.sample(0);
        assert_eq!(depth.min(), 0);
        assert_eq!(depth.max(), 0);
        assert_eq!(depth.percentiles(), vec![(100, 0)]);
    }
}
