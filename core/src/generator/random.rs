use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        random_layout(config, &mut rng)
    }
}

/// Samples `config.mines()` distinct cells uniformly from the `cols * rows` linear index space.
pub fn random_layout<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> MineLayout {
    let (cols, rows) = config.size();
    let cols = usize::from(cols);
    let mut mine_mask: Array2<bool> = Array2::default((usize::from(rows), cols));

    let total_cells = usize::from(config.total_cells());
    let mines = usize::from(config.mines());
    for index in rand::seq::index::sample(rng, total_cells, mines) {
        mine_mask[[index / cols, index % cols]] = true;
    }

    let layout = MineLayout::from_mine_mask(mine_mask);
    if layout.mine_count() != config.mines() {
        log::warn!(
            "Generated layout count mismatch, actual: {}, requested: {}",
            layout.mine_count(),
            config.mines()
        );
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        for (cols, rows) in [(3, 3), (3, 100), (17, 23), (100, 100)] {
            let config = BoardConfig::new(cols, rows, cols * rows / 5).unwrap();
            let layout = random_layout(config, &mut rng);
            assert_eq!(layout.size(), config.size());
            assert_eq!(layout.mine_count(), config.mines());
            assert_eq!(layout.iter_mines().count(), usize::from(config.mines()));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardConfig::new(30, 16, 96).unwrap();
        let a = RandomLayoutGenerator::new(42).generate(config);
        let b = RandomLayoutGenerator::new(42).generate(config);
        let c = RandomLayoutGenerator::new(43).generate(config);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn every_cell_can_hold_a_mine() {
        let config = BoardConfig::new(3, 3, 1).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut hits = [0u32; 9];
        for _ in 0..900 {
            let layout = random_layout(config, &mut rng);
            let (x, y) = layout.iter_mines().next().unwrap();
            hits[usize::from(y) * 3 + usize::from(x)] += 1;
        }
        assert!(hits.iter().all(|&count| count > 0), "{hits:?}");
    }
}
