use wayfind_core::Coord;

/// Cached neighbour computation helper.
///
/// Holds a small scratch buffer so that expansion does not allocate per
/// cell.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return `c` shifted by each of `directions`, in order, keeping only
    /// those for which `keep` returns `true`.
    pub fn step(
        &mut self,
        c: Coord,
        directions: &[Coord],
        keep: impl Fn(Coord) -> bool,
    ) -> &[Coord] {
        self.buf.clear();
        for &d in directions {
            let n = c + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the four cardinal neighbours of `c` (up, down, left, right),
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.step(c, &Coord::CARDINALS, keep)
    }
}
