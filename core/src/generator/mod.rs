use crate::*;
pub use random::*;

mod random;

/// Strategy that decides where the mines of a new board go.
pub trait MineLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
