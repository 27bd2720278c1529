use super::Grid;
use rayon::prelude::*;

impl Grid {
    /// Same as [`Grid::step`], but rows of the next generation are
    /// computed on the rayon thread pool.
    ///
    /// Workers only read the previous generation and each one owns a
    /// disjoint row of the output buffer.
    pub fn step_parallel(&mut self) {
        let mut next = self.take_next_buffer();
        let this = &*self;
        let population = next
            .par_chunks_mut(this.width)
            .enumerate()
            .map(|(y, row)| this.step_row(y, row))
            .sum();
        self.finish_step(next, population);
    }
}
