use ordered_tree::boxed::{Node, Tree};

#[test]
fn build_find_successor_then_delete_root() {
    let mut tree: Tree = [25, 10, 50, 7, 15, 53].into_iter().collect();
    assert_eq!(tree.length(), 6);

    // The "successor" of 25 is the rightmost node of its left subtree.
    let successor = tree.locate_successor(25).unwrap();
    assert_eq!(successor.as_deref().map(Node::value), Some(15));

    // Deleting the root with two children promotes that node's value.
    assert!(tree.remove(25));
    assert_eq!(tree.root().map(Node::value), Some(15));
    assert_eq!(tree.length(), 5);
    assert!(!tree.contains(25));
    assert!(tree.locate(25).is_none());
}

#[test]
fn delete_sole_node_leaves_empty_tree() {
    let mut tree: Tree = [5].into_iter().collect();

    assert!(tree.remove(5));

    assert!(tree.root().is_none());
    assert_eq!(tree.length(), 0);
}

#[test]
fn empty_tree_operations_are_harmless() {
    let mut tree = Tree::new();

    assert!(tree.locate(1).is_none());
    assert!(tree.locate_parent(1).is_none());
    assert!(tree.locate_successor(1).is_none());
    assert!(!tree.remove(1));
    assert_eq!(tree.length(), 0);
}

#[test]
fn duplicate_adds_do_not_grow_the_tree() {
    let mut tree = Tree::new();

    assert!(tree.add(7));
    assert!(!tree.add(7));

    assert_eq!(tree.length(), 1);
}

#[test]
fn length_tracks_inserts_and_removes() {
    let mut tree = Tree::new();
    for value in [25, 10, 50, 10, 7] {
        tree.add(value);
    }
    assert_eq!(tree.length(), 4);

    assert!(tree.remove(10));
    assert!(!tree.remove(99));
    assert_eq!(tree.length(), 3);
}

#[test]
fn copies_do_not_share_structure() {
    let source: Tree = [25, 10, 50, 7, 15, 53].into_iter().collect();
    let mut copy = source.clone();

    assert!(copy.remove(10));
    assert!(copy.add(99));

    assert_eq!(source.length(), 6);
    assert!(source.contains(10));
    assert!(!source.contains(99));
}

#[test]
fn taking_a_tree_moves_its_nodes() {
    let mut source: Tree = [25, 10, 50].into_iter().collect();

    let destination = std::mem::take(&mut source);

    assert_eq!(source.length(), 0);
    assert_eq!(destination.length(), 3);
    for value in [25, 10, 50] {
        assert!(destination.contains(value));
    }
}

#[test]
fn locate_hands_out_a_replaceable_slot() {
    let mut tree: Tree = [25, 10, 50].into_iter().collect();

    // The slot is the owning reference itself: clearing it prunes the
    // subtree in place.
    let slot = tree.locate(50).unwrap();
    *slot = None;

    assert!(!tree.contains(50));
    assert_eq!(tree.length(), 2);
}

#[test]
fn postfix_increment_semantics() {
    let mut tree: Tree = [25, 10, 50].into_iter().collect();

    let before = tree.increment_all_then_copy();

    assert_eq!(before.values(), vec![25, 10, 50]);
    assert_eq!(tree.values(), vec![26, 11, 51]);

    // And the prefix form returns the tree itself for chaining.
    assert_eq!(tree.increment_all().values(), vec![27, 12, 52]);
}
