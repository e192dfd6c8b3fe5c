//! Disjoint-set forest over provisional component labels.
//!
//! Elements are dense indices `0..n`. `find` uses path halving and `merge`
//! uses union by size, so a long run of operations is close to O(1) each.

/// Union-find over `0..n` with path halving and union by size.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl DisjointSet {
    /// `n` singleton classes, each its own root with size 1.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the class containing `x`.
    ///
    /// Every node visited is re-pointed at its grandparent before stepping up,
    /// halving the path for later calls.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut x = x as usize;
        while self.parent[x] as usize != x {
            let grandparent = self.parent[self.parent[x] as usize];
            self.parent[x] = grandparent;
            x = grandparent as usize;
        }
        x as u32
    }

    /// Union the classes of `x` and `y`.
    ///
    /// The root of the smaller class goes under the root of the larger one.
    /// On equal sizes `y`'s root goes under `x`'s root.
    pub fn merge(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        let (rx, ry) = (root_x as usize, root_y as usize);
        if self.size[rx] < self.size[ry] {
            self.parent[rx] = root_y;
            self.size[ry] += self.size[rx];
        } else {
            self.parent[ry] = root_x;
            self.size[rx] += self.size[ry];
        }
    }

    /// Number of elements in the class containing `x`.
    pub fn size_of(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }

    pub fn same_class(&mut self, x: u32, y: u32) -> bool {
        self.find(x) == self.find(y)
    }
}
