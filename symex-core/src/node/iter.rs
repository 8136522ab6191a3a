use super::Node;

/// An iterator that iteratively traverses a tree of nodes in left-to-right post-order (children
/// before their parent).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
    last_visited: Option<&'a Node>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new post-order iterator rooted at the given node.
    pub fn new(node: &'a Node) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the node on top of the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node is the node that was visited last. Nodes are compared by
    /// address, not by value, since equal subtrees can appear in many places.
    fn is_last_visited(&self, node: &'a Node) -> bool {
        self.last_visited
            .is_some_and(|last_visited| std::ptr::eq(last_visited, node))
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.stack.last()?;
            match node {
                Node::Number(_) | Node::Variable(_) => return self.visit(),
                Node::Negation(arg) | Node::Sine(arg) | Node::Cosine(arg) => {
                    if self.is_last_visited(arg) {
                        return self.visit();
                    }
                    self.stack.push(arg);
                },
                Node::Addition(left, right) | Node::Multiplication(left, right) => {
                    // the right child is always finished last, so seeing it means both are done
                    if self.is_last_visited(right) {
                        return self.visit();
                    }
                    self.stack.push(right);
                    self.stack.push(left);
                },
            }
        }
    }
}
