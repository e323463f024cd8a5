use serde::{Deserialize, Serialize};

pub type NodeIndex = usize;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeNode<V> {
    pub value: V,
    pub parent: Option<NodeIndex>,
    pub children: Vec<NodeIndex>,
}

/// Rooted multiway tree stored as an arena. The root lives at index 0 and
/// child order carries no meaning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tree<V> {
    nodes: Vec<TreeNode<V>>,
}

impl<V> Tree<V> {
    pub fn new(root: V) -> Tree<V> {
        Tree {
            nodes: vec![TreeNode {
                value: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeIndex {
        0
    }

    /// Attaches a new leaf below `parent` and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeIndex, value: V) -> NodeIndex {
        assert!(parent < self.nodes.len(), "parent {} does not exist", parent);

        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    pub fn value(&self, index: NodeIndex) -> Option<&V> {
        self.nodes.get(index).map(|node| &node.value)
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.nodes
            .get(index)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(index)?.parent
    }

    pub fn is_leaf(&self, index: NodeIndex) -> bool {
        self.children(index).is_empty()
    }

    /// Number of nodes in the whole tree.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes in the subtree rooted at `index`.
    pub fn size_of(&self, index: NodeIndex) -> usize {
        1 + self
            .children(index)
            .iter()
            .map(|&child| self.size_of(child))
            .sum::<usize>()
    }

    /// Number of edges between `index` and the root.
    pub fn depth(&self, mut index: NodeIndex) -> usize {
        let mut depth = 0;
        while let Some(parent) = self.parent(index) {
            depth += 1;
            index = parent;
        }
        depth
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }

    /// All `(parent, child)` value pairs.
    pub fn edges(&self) -> Vec<(&V, &V)> {
        self.nodes
            .iter()
            .filter_map(|node| {
                let parent = node.parent?;
                Some((&self.nodes[parent].value, &node.value))
            })
            .collect()
    }
}

impl<V: PartialEq> Tree<V> {
    pub fn contains(&self, value: &V) -> bool {
        self.values().any(|other| other == value)
    }

    pub fn find(&self, value: &V) -> Option<NodeIndex> {
        self.nodes.iter().position(|node| &node.value == value)
    }

    /// Compares two trees as rooted trees with unordered children.
    pub fn structurally_equal(&self, other: &Tree<V>) -> bool {
        subtrees_equal(self, self.root(), other, other.root())
    }
}

fn subtrees_equal<V: PartialEq>(
    left: &Tree<V>,
    left_index: NodeIndex,
    right: &Tree<V>,
    right_index: NodeIndex,
) -> bool {
    if left.value(left_index) != right.value(right_index) {
        return false;
    }

    let left_children = left.children(left_index);
    let right_children = right.children(right_index);
    if left_children.len() != right_children.len() {
        return false;
    }

    // match every left child with a distinct right child
    let mut matched = vec![false; right_children.len()];
    left_children.iter().all(|&left_child| {
        let partner = right_children.iter().enumerate().position(|(i, &right_child)| {
            !matched[i] && subtrees_equal(left, left_child, right, right_child)
        });
        match partner {
            Some(i) => {
                matched[i] = true;
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::Tree;

    fn sample() -> Tree<&'static str> {
        let mut tree = Tree::new("root");
        let p1 = tree.add_child(tree.root(), "p1");
        tree.add_child(p1, "t1");
        let p2 = tree.add_child(tree.root(), "p2");
        tree.add_child(p2, "t2");
        tree
    }

    #[test]
    fn size_law() {
        let tree = sample();

        for index in 0..tree.size() {
            let children_size: usize = tree
                .children(index)
                .iter()
                .map(|&child| tree.size_of(child))
                .sum();
            assert_eq!(tree.size_of(index), 1 + children_size);
            assert_eq!(tree.is_leaf(index), tree.children(index).is_empty());
        }
        assert_eq!(tree.size_of(tree.root()), tree.size());
    }

    #[test]
    fn child_order_is_ignored() {
        let mut other = Tree::new("root");
        let p2 = other.add_child(other.root(), "p2");
        other.add_child(p2, "t2");
        let p1 = other.add_child(other.root(), "p1");
        other.add_child(p1, "t1");

        assert!(sample().structurally_equal(&other));
    }

    #[test]
    fn different_shape_is_unequal() {
        let mut other = Tree::new("root");
        let p1 = other.add_child(other.root(), "p1");
        other.add_child(p1, "t1");
        other.add_child(p1, "p2");

        assert!(!sample().structurally_equal(&other));
    }

    #[test]
    fn depth_and_edges() {
        let tree = sample();
        let t1 = tree.find(&"t1").unwrap();

        assert_eq!(tree.depth(t1), 2);
        assert_eq!(tree.edges().len(), tree.size() - 1);
        assert!(tree.edges().contains(&(&"p1", &"t1")));
    }
}
