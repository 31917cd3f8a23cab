use crate::{Dir, Link, NodeIdx, RbTree};

enum CameFrom {
    Parent,
    LeftChild,
    Here,
    RightChild,
}

/// In-order iterator over the values of an [`RbTree`].
///
/// Walks the tree through its child and parent links without auxiliary
/// storage, yielding values in non-decreasing order.
pub struct InOrder<'tree, T> {
    tree: &'tree RbTree<T>,

    cur: Link,
    from: CameFrom,

    remaining: usize,
}

impl<'tree, T> InOrder<'tree, T> {
    pub(crate) fn new(tree: &'tree RbTree<T>) -> Self {
        InOrder {
            tree,

            cur: tree.root,
            from: CameFrom::Parent,
            remaining: tree.len(),
        }
    }
}

impl<'tree, T> Iterator for InOrder<'tree, T> {
    type Item = &'tree T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let mut cur = self.cur?;

        loop {
            match self.from {
                CameFrom::Parent => {
                    // Upon entering a new subtree, find the minimum element.
                    while let Some(left) = self.tree.child(cur, Dir::Left) {
                        cur = left;
                    }

                    // Once the minimum is found, its (empty) left subtree has
                    // been exhausted.
                    self.from = CameFrom::LeftChild;
                }

                CameFrom::LeftChild => {
                    // The left subtree has been exhausted, so this node is up
                    // next. Save off the iterator state and return it.
                    self.cur = Some(cur);
                    self.from = CameFrom::Here;
                    self.remaining -= 1;

                    return Some(self.tree.value(cur));
                }

                CameFrom::Here => {
                    // The current node was just yielded.
                    if let Some(right) = self.tree.child(cur, Dir::Right) {
                        // If the right subtree is not empty, go there.
                        self.from = CameFrom::Parent;

                        cur = right;
                    } else if let Some(parent) = self.tree.parent(cur) {
                        // Otherwise, ascend one level.
                        self.from = match self.tree.which_child(parent, cur) {
                            Dir::Left => CameFrom::LeftChild,
                            Dir::Right => CameFrom::RightChild,
                        };

                        cur = parent;
                    } else {
                        unreachable!()
                    }
                }

                CameFrom::RightChild => {
                    // Ascend until we find the successor element.
                    while let Some(parent) = self.tree.parent(cur) {
                        match self.tree.which_child(parent, cur) {
                            Dir::Left => break,
                            Dir::Right => cur = parent,
                        }
                    }

                    self.cur = Some(cur);
                    self.from = CameFrom::LeftChild;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}

/// Pre-order iterator over the values of an [`RbTree`].
///
/// Each node is yielded before either of its subtrees.
pub struct PreOrder<'tree, T> {
    tree: &'tree RbTree<T>,
    stack: Vec<NodeIdx>,
}

impl<'tree, T> PreOrder<'tree, T> {
    pub(crate) fn new(tree: &'tree RbTree<T>) -> Self {
        PreOrder {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'tree, T> Iterator for PreOrder<'tree, T> {
    type Item = &'tree T;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.stack.pop()?;

        // Right first, so the left subtree is popped first.
        if let Some(right) = self.tree.child(cur, Dir::Right) {
            self.stack.push(right);
        }
        if let Some(left) = self.tree.child(cur, Dir::Left) {
            self.stack.push(left);
        }

        Some(self.tree.value(cur))
    }
}

/// Post-order iterator over the values of an [`RbTree`].
///
/// Each node is yielded after both of its subtrees.
pub struct PostOrder<'tree, T> {
    tree: &'tree RbTree<T>,
    // The flag marks nodes whose subtrees have already been expanded.
    stack: Vec<(NodeIdx, bool)>,
}

impl<'tree, T> PostOrder<'tree, T> {
    pub(crate) fn new(tree: &'tree RbTree<T>) -> Self {
        PostOrder {
            tree,
            stack: tree.root.map(|idx| (idx, false)).into_iter().collect(),
        }
    }
}

impl<'tree, T> Iterator for PostOrder<'tree, T> {
    type Item = &'tree T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((cur, expanded)) = self.stack.pop() {
            if expanded {
                return Some(self.tree.value(cur));
            }

            self.stack.push((cur, true));

            if let Some(right) = self.tree.child(cur, Dir::Right) {
                self.stack.push((right, false));
            }
            if let Some(left) = self.tree.child(cur, Dir::Left) {
                self.stack.push((left, false));
            }
        }

        None
    }
}
