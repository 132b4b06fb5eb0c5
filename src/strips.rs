use crate::partition::Partition;

/// One way of detaching a border strip from a partition's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StripRemoval {
    /// What remains of the shape once the strip is gone, in canonical form
    pub remainder: Partition,
    /// Number of rows the strip occupies, i.e. its leg length plus one
    pub rows: usize,
}

/// Walk the rim of `shape`, lazily producing every decomposition of it into
/// a smaller partition plus a connected border strip of exactly `size`
/// cells (connected along edges, containing no 2x2 block). Yields nothing
/// if no such strip exists.
///
/// A full traversal costs O(shape\[0\] + rows): each cell of the first row
/// and each row index is touched a bounded number of times.
pub(crate) fn border_strips(shape: &Partition, size: usize) -> BorderStrips {
    BorderStrips {
        strip: vec![0; shape.len()],
        shape: shape.parts().to_vec(),
        budget: size as i64,
        row: 0,
        first_occupied: 0,
    }
}

/// Iterator state for the rim walk.
///
/// `shape` and `strip` always tile the original partition between them;
/// `budget` is how many cells the strip still owes (negative after an
/// overshooting down step), `row` is the walk cursor and `first_occupied`
/// the topmost row the strip currently touches.
pub(crate) struct BorderStrips {
    shape: Vec<usize>,
    strip: Vec<usize>,
    budget: i64,
    row: usize,
    first_occupied: usize,
}
impl BorderStrips {
    /// Return the strip's topmost row to the shape, crediting the budget,
    /// and advance the first-occupied cursor past it
    fn hand_back_leading_row(&mut self) {
        let cells = self.strip[self.first_occupied];
        self.shape[self.first_occupied] += cells;
        self.budget += cells as i64;
        self.strip[self.first_occupied] = 0;
        self.first_occupied += 1;
    }
}
impl Iterator for BorderStrips {
    type Item = StripRemoval;

    #[allow(clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<StripRemoval> {
        while self.budget > 0 && self.row < self.shape.len() {
            if self.row + 1 == self.shape.len() {
                // last row: only the row itself bounds the peel
                let step = (self.budget as usize).min(self.shape[self.row]);
                self.budget -= step as i64;
                self.shape[self.row] -= step;
                self.strip[self.row] += step;
                if self.budget > 0 {
                    // rim exhausted with budget left over
                    self.row = self.shape.len();
                    return None;
                }
            } else if self.shape[self.row] > self.shape[self.row + 1] {
                // left step: peel this row's overhang over the next
                let overhang = self.shape[self.row] - self.shape[self.row + 1];
                let step = (self.budget as usize).min(overhang);
                self.budget -= step as i64;
                self.shape[self.row] -= step;
                self.strip[self.row] += step;
            } else {
                // down step: every row tied with this one absorbs one cell,
                // keeping the strip connected without forming a 2x2 block
                let block_start = self.row;
                while self.row < self.shape.len()
                    && self.shape[self.row] == self.shape[block_start]
                {
                    self.budget -= 1;
                    self.strip[self.row] += 1;
                    self.row += 1;
                }
                for index in block_start..self.row {
                    self.shape[index] -= 1;
                }
                self.row -= 1;

                // overshoot: hand cells back to the head of the strip until
                // the budget is non-negative again
                while self.budget < 0 {
                    self.hand_back_leading_row();
                }
            }

            if self.budget == 0 {
                let removal = StripRemoval {
                    remainder: Partition::canonical(self.shape.clone()),
                    rows: self.strip.iter().filter(|&&cells| cells > 0).count(),
                };
                // perturb the walk so the next call searches for a different
                // decomposition of the same size
                if self.row == self.first_occupied {
                    self.row += 1;
                }
                self.hand_back_leading_row();
                return Some(removal);
            }
        }
        None
    }
}
