//! Hardcoded sample tree used by the driver and the tests

use tracing::instrument;

use crate::domain::Node;

/// Build the seven node sample tree.
///
/// ```text
///         25
///        /  \
///       20    50
///      /  \   /
///     15  30 40
///       \
///       22
/// ```
#[instrument(level = "trace")]
pub fn sample_tree() -> Node {
    let fifteen = Node::leaf(15).with_right(Node::leaf(22));
    let twenty = Node::new(20, Some(fifteen), Some(Node::leaf(30)));
    let fifty = Node::leaf(50).with_left(Node::leaf(40));
    Node::new(25, Some(twenty), Some(fifty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sample_tree_when_built_then_has_expected_shape() {
        let root = sample_tree();
        assert_eq!(root.value(), 25);
        assert_eq!(root.node_count(), 7);
        assert_eq!(root.height(), 4);

        let twenty = root.left().expect("left of root");
        assert_eq!(twenty.value(), 20);
        let fifteen = twenty.left().expect("left of 20");
        assert_eq!(fifteen.value(), 15);
        assert!(fifteen.left().is_none());
        assert_eq!(fifteen.right().map(Node::value), Some(22));
        assert_eq!(twenty.right().map(Node::value), Some(30));

        let fifty = root.right().expect("right of root");
        assert_eq!(fifty.value(), 50);
        assert_eq!(fifty.left().map(Node::value), Some(40));
        assert!(fifty.right().is_none());
    }
}
