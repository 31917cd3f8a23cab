use core::fmt;
use std::collections::VecDeque;

use crate::{Dir, NodeIdx, RbTree};

impl<T: fmt::Display> RbTree<T> {
    /// Renders the tree as a Graphviz digraph, one row per depth level.
    ///
    /// Absent positions are drawn as points; nodes are labeled
    /// `value:Color`.
    pub fn dotgraph<W>(&self, name: &str, mut w: W) -> fmt::Result
    where
        W: fmt::Write,
    {
        use fmt::Write;

        let root = match self.root {
            Some(r) => r,
            None => return write!(w, "digraph \"graph-{name}\" {{}}"),
        };

        enum Item {
            Node(NodeIdx),
            Missing(u32),
        }

        let mut queue = VecDeque::new();
        queue.push_back(Item::Node(root));

        write!(
            w,
            "digraph \"graph-{name}\" {{\n subgraph \"subgraph-{name}\" {{"
        )?;

        let mut missing = 0;
        let mut links = String::new();

        while !queue.is_empty() {
            let remaining = queue.len();

            write!(w, "{{rank=same; ")?;

            for _ in 0..remaining {
                let node = match queue.pop_front().unwrap() {
                    Item::Node(node) => node,
                    Item::Missing(id) => {
                        write!(w, "\"graph{name}-missing{id}\" [shape=point]; ")?;
                        continue;
                    }
                };

                let value = self.value(node);
                let color = self.color_of(node);
                write!(w, "\"graph{name}-{value}\" [label=\"{value}:{color:?}\"]; ")?;

                for dir in [Dir::Left, Dir::Right] {
                    match self.child(node, dir) {
                        Some(child) => {
                            let child_value = self.value(child);

                            queue.push_back(Item::Node(child));
                            writeln!(
                                links,
                                "\"graph{name}-{value}\" -> \"graph{name}-{child_value}\";"
                            )?;
                        }
                        None => {
                            queue.push_back(Item::Missing(missing));
                            writeln!(
                                links,
                                "\"graph{name}-{value}\" -> \"graph{name}-missing{missing}\";"
                            )?;
                            missing += 1;
                        }
                    }
                }
            }

            writeln!(w, "}}")?;
        }

        w.write_str(&links)?;

        w.write_str(" }\n}")
    }
}
