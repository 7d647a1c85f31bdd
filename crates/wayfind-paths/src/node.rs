use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Search bookkeeping for one cell, held in a dense row-major table.
///
/// `f` is finite iff the cell has been pushed onto the frontier at least
/// once. Once `closed` is set, `g` and `parent` are never revised.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    /// Flat index of the predecessor. `None` for undiscovered cells and for
    /// the source, which roots the parent tree.
    pub(crate) parent: Option<usize>,
    pub(crate) closed: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: f64::INFINITY,
            f: f64::INFINITY,
            parent: None,
            closed: false,
        }
    }
}

impl SearchNode {
    /// Whether the cell has ever been pushed onto the frontier.
    #[inline]
    pub(crate) fn discovered(&self) -> bool {
        self.f.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// A frontier entry, ordered for use in `BinaryHeap`.
///
/// The heap pops the smallest `f` first; equal `f` entries pop in the order
/// they were pushed (`seq`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}
