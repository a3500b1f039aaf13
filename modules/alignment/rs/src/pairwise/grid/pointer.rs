use std::fmt::{Display, Formatter};

use derive_more::Constructor;

/// One of the three coupled dynamic programming matrices.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub enum Tag {
    /// Symbols of both sequences are aligned against each other
    #[default]
    M,
    /// A symbol of the first sequence is aligned against a gap (the second sequence has a gap)
    Ix,
    /// A symbol of the second sequence is aligned against a gap (the first sequence has a gap)
    Iy,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::M, Tag::Ix, Tag::Iy];

    /// Dense index of the matrix in the grid arena.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::M => "M",
            Tag::Ix => "Ix",
            Tag::Iy => "Iy",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Address of a cell in the grid: matrix + row + column.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Constructor)]
pub struct Pointer {
    pub tag: Tag,
    pub row: usize,
    pub col: usize,
}

impl Pointer {
    /// Row 0 and column 0 hold the boundary cells, i.e. nothing consumed from one of the sequences.
    #[inline(always)]
    pub fn is_boundary(&self) -> bool {
        self.row == 0 || self.col == 0
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.tag, self.row, self.col)
    }
}

/// Predecessors of a cell that achieve its score. No cell has more than three candidates, so the
/// list is stored inline.
#[derive(Copy, Clone, Eq, Debug, Default)]
pub struct Pointers {
    items: [Pointer; Pointers::CAPACITY],
    len: u8,
}

impl Pointers {
    pub const CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predecessor. Panics if the list is full.
    #[inline(always)]
    pub fn push(&mut self, ptr: Pointer) {
        assert!(
            (self.len as usize) < Self::CAPACITY,
            "A cell can't have more than {} predecessors",
            Self::CAPACITY
        );
        self.items[self.len as usize] = ptr;
        self.len += 1;
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Pointer] {
        &self.items[..self.len as usize]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, ptr: &Pointer) -> bool {
        self.as_slice().contains(ptr)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pointer> {
        self.as_slice().iter()
    }
}

impl PartialEq for Pointers {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a> IntoIterator for &'a Pointers {
    type Item = &'a Pointer;
    type IntoIter = std::slice::Iter<'a, Pointer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Pointer> for Pointers {
    fn from_iter<T: IntoIterator<Item = Pointer>>(iter: T) -> Self {
        let mut pointers = Pointers::new();
        for ptr in iter {
            pointers.push(ptr);
        }
        pointers
    }
}
