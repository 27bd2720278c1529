/// Describes how the field treats cells beyond its edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Cells outside the field are permanently dead.
    #[default]
    Bounded,
    /// Bounds of the field are stitched together.
    Torus,
}

impl Topology {
    /// Maps a possibly out-of-range coordinate onto an axis of length `len`.
    ///
    /// Returns `None` when the position falls off a bounded edge.
    #[inline]
    pub fn wrap(self, pos: i64, len: usize) -> Option<usize> {
        let len = len as i64;
        if (0..len).contains(&pos) {
            return Some(pos as usize);
        }
        match self {
            Self::Bounded => None,
            Self::Torus => Some(pos.rem_euclid(len) as usize),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Bounded => Self::Torus,
            Self::Torus => Self::Bounded,
        }
    }

    pub fn is_wrapping(self) -> bool {
        matches!(self, Self::Torus)
    }
}

#[cfg(test)]
mod tests {
    use super::Topology;

    #[test]
    fn test_wrap() {
        assert_eq!(Topology::Bounded.wrap(3, 5), Some(3));
        assert_eq!(Topology::Bounded.wrap(-1, 5), None);
        assert_eq!(Topology::Bounded.wrap(5, 5), None);
        assert_eq!(Topology::Torus.wrap(-1, 5), Some(4));
        assert_eq!(Topology::Torus.wrap(5, 5), Some(0));
        assert_eq!(Topology::Torus.wrap(-6, 5), Some(4));
    }
}
