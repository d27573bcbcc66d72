//! Properties of the six traversals over assorted tree shapes

use rstest::rstest;

use treewalk::domain::{
    inorder_iterative, inorder_recursive, postorder_iterative, postorder_recursive,
    preorder_iterative, preorder_recursive, sample_tree, traverse, DomainError, Node, Order,
    Strategy,
};
use treewalk::util::testing;

// ============================================================
// Tree shapes
// ============================================================

fn single() -> Node {
    Node::leaf(42)
}

/// 1 <- 2 <- 3 <- 4 <- 5, every child on the left
fn left_chain() -> Node {
    (1..5).rev().fold(Node::leaf(5), |child, value| Node::leaf(value).with_left(child))
}

/// 1 -> 2 -> 3 -> 4 -> 5, every child on the right
fn right_chain() -> Node {
    (1..5).rev().fold(Node::leaf(5), |child, value| Node::leaf(value).with_right(child))
}

/// left, right, left, right, ...
fn zigzag() -> Node {
    (1..6).rev().fold(Node::leaf(6), |child, value| {
        if value % 2 == 0 {
            Node::leaf(value).with_right(child)
        } else {
            Node::leaf(value).with_left(child)
        }
    })
}

/// Complete tree with three levels
fn full() -> Node {
    Node::new(
        1,
        Some(Node::new(2, Some(Node::leaf(4)), Some(Node::leaf(5)))),
        Some(Node::new(3, Some(Node::leaf(6)), Some(Node::leaf(7)))),
    )
}

fn duplicates() -> Node {
    Node::new(
        7,
        Some(Node::new(7, Some(Node::leaf(7)), None)),
        Some(Node::new(7, None, Some(Node::leaf(7)))),
    )
}

/// Balanced binary search tree over a sorted slice.
fn bst(sorted: &[i32]) -> Option<Node> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some(Node::new(
        sorted[mid],
        bst(&sorted[..mid]),
        bst(&sorted[mid + 1..]),
    ))
}

// ============================================================
// Sample fixture
// ============================================================

#[rstest]
#[case(Order::Preorder, vec![25, 20, 15, 22, 30, 50, 40])]
#[case(Order::Inorder, vec![15, 22, 20, 30, 25, 40, 50])]
#[case(Order::Postorder, vec![22, 15, 30, 20, 40, 50, 25])]
fn given_sample_tree_when_traversing_then_matches_reference_sequence(
    #[case] order: Order,
    #[case] expected: Vec<i32>,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    testing::init_test_setup();
    let root = sample_tree();
    assert_eq!(traverse(Some(&root), order, strategy).unwrap(), expected);
}

// ============================================================
// Recursive and iterative agree, output covers every node
// ============================================================

#[rstest]
#[case::single(single())]
#[case::left_chain(left_chain())]
#[case::right_chain(right_chain())]
#[case::zigzag(zigzag())]
#[case::full(full())]
#[case::duplicates(duplicates())]
#[case::sample(sample_tree())]
fn given_tree_when_traversing_both_ways_then_sequences_identical(#[case] root: Node) {
    testing::init_test_setup();
    assert_eq!(
        preorder_recursive(Some(&root)),
        preorder_iterative(Some(&root)).unwrap()
    );
    assert_eq!(
        inorder_recursive(Some(&root)),
        inorder_iterative(Some(&root))
    );
    assert_eq!(
        postorder_recursive(Some(&root)),
        postorder_iterative(Some(&root))
    );
}

#[rstest]
#[case::single(single())]
#[case::left_chain(left_chain())]
#[case::zigzag(zigzag())]
#[case::full(full())]
#[case::sample(sample_tree())]
fn given_tree_when_traversing_then_length_equals_node_count(
    #[case] root: Node,
    #[values(Order::Preorder, Order::Inorder, Order::Postorder)] order: Order,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    let visited = traverse(Some(&root), order, strategy).unwrap();
    assert_eq!(visited.len(), root.node_count());
}

#[test]
fn given_full_tree_when_traversing_then_textbook_orders() {
    let root = full();
    assert_eq!(
        preorder_iterative(Some(&root)).unwrap(),
        vec![1, 2, 4, 5, 3, 6, 7]
    );
    assert_eq!(inorder_iterative(Some(&root)), vec![4, 2, 5, 1, 6, 3, 7]);
    assert_eq!(postorder_iterative(Some(&root)), vec![4, 5, 2, 6, 7, 3, 1]);
}

#[test]
fn given_chains_when_traversing_iteratively_then_follow_the_spine() {
    let left = left_chain();
    assert_eq!(preorder_iterative(Some(&left)).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(inorder_iterative(Some(&left)), vec![5, 4, 3, 2, 1]);
    assert_eq!(postorder_iterative(Some(&left)), vec![5, 4, 3, 2, 1]);

    let right = right_chain();
    assert_eq!(preorder_iterative(Some(&right)).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(inorder_iterative(Some(&right)), vec![1, 2, 3, 4, 5]);
    assert_eq!(postorder_iterative(Some(&right)), vec![5, 4, 3, 2, 1]);
}

// ============================================================
// Binary search trees
// ============================================================

#[rstest]
#[case(vec![1])]
#[case(vec![1, 2])]
#[case(vec![-3, 0, 4, 9, 12])]
#[case((1..=15).collect())]
#[case((0..100).map(|i| i * 3 - 50).collect())]
fn given_bst_when_inorder_then_sorted(
    #[case] sorted: Vec<i32>,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    let root = bst(&sorted).expect("non-empty input");
    let visited = traverse(Some(&root), Order::Inorder, strategy).unwrap();
    assert_eq!(visited, sorted);
}

// ============================================================
// Idempotence
// ============================================================

#[rstest]
fn given_unmodified_tree_when_traversing_twice_then_same_sequence(
    #[values(Order::Preorder, Order::Inorder, Order::Postorder)] order: Order,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    let root = sample_tree();
    let first = traverse(Some(&root), order, strategy).unwrap();
    let second = traverse(Some(&root), order, strategy).unwrap();
    assert_eq!(first, second);
    assert_eq!(root, sample_tree());
}

// ============================================================
// Boundaries
// ============================================================

#[rstest]
fn given_single_node_when_traversing_then_one_element(
    #[values(Order::Preorder, Order::Inorder, Order::Postorder)] order: Order,
    #[values(Strategy::Recursive, Strategy::Iterative)] strategy: Strategy,
) {
    let root = single();
    assert_eq!(traverse(Some(&root), order, strategy).unwrap(), vec![42]);
}

#[test]
fn given_empty_tree_when_traversing_then_empty_sequences() {
    assert!(preorder_recursive(None).is_empty());
    assert!(inorder_recursive(None).is_empty());
    assert!(inorder_iterative(None).is_empty());
    assert!(postorder_recursive(None).is_empty());
    assert!(postorder_iterative(None).is_empty());
}

#[test]
fn given_empty_tree_when_iterative_preorder_then_precondition_violation() {
    let result = preorder_iterative(None);
    assert!(
        matches!(result, Err(DomainError::EmptyTree { .. })),
        "expected EmptyTree, got {:?}",
        result
    );
}

#[test]
fn given_deep_left_chain_when_traversing_iteratively_then_no_recursion_needed() {
    let depth = 2_000;
    let root = (1..depth).rev().fold(Node::leaf(depth), |child, value| {
        Node::leaf(value).with_left(child)
    });

    let post = postorder_iterative(Some(&root));
    assert_eq!(post.len(), depth as usize);
    assert_eq!(post.first(), Some(&depth));
    assert_eq!(post.last(), Some(&1));

    let inorder = inorder_iterative(Some(&root));
    assert_eq!(inorder, post);
}
