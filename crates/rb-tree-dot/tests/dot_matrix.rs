use rb_tree::RbTree;
use rb_tree_dot::{run, to_dot, write_dot, DemoConfig};

#[test]
fn dot_empty_tree_matrix() {
    let tree = RbTree::<i32>::new();
    assert_eq!(
        to_dot(&tree),
        "digraph BST {\n    node [fontname=\"Arial\"];\n\n}\n"
    );
}

#[test]
fn dot_single_node_matrix() {
    let tree = RbTree::from_keys([5]).unwrap();
    assert_eq!(
        to_dot(&tree),
        "digraph BST {\n    node [fontname=\"Arial\"];\n    5;\n}\n"
    );
}

#[test]
fn dot_three_nodes_matrix() {
    let tree = RbTree::from_keys([2, 1, 3]).unwrap();
    let expected = "\
digraph BST {
    node [fontname=\"Arial\"];
    2 -> 1;
    1 [color=red];
    null0 [shape=point];
    1 -> null0;
    null1 [shape=point];
    1 -> null1;
    2 -> 3;
    3 [color=red];
    null2 [shape=point];
    3 -> null2;
    null3 [shape=point];
    3 -> null3;
}
";
    assert_eq!(to_dot(&tree), expected);
}

#[test]
fn dot_placeholder_numbering_restarts_per_call_matrix() {
    let tree = RbTree::from_keys(0..20).unwrap();
    let first = to_dot(&tree);
    let second = to_dot(&tree);
    assert_eq!(first, second);
    // n nodes leave n + 1 absent child slots.
    assert!(first.contains("null20 [shape=point];"));
    assert!(!first.contains("null21"));

    let mut buf = Vec::new();
    write_dot(&tree, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), first);
}

#[test]
fn dot_demo_writes_before_and_after_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let config = DemoConfig {
        seed: 7,
        out_dir: dir.path().to_path_buf(),
        ..DemoConfig::default()
    };

    let report = run(&config).unwrap();
    assert!(report.was_present);
    assert_eq!(report.len_after, report.len_before - 1);

    let before = std::fs::read_to_string(&report.before).unwrap();
    let after = std::fs::read_to_string(&report.after).unwrap();
    assert!(before.starts_with("digraph BST {"));
    assert!(after.ends_with("}\n"));
    assert_ne!(before, after);

    // Same seed, same trees.
    let again = run(&config).unwrap();
    assert_eq!(again, report);
    assert_eq!(std::fs::read_to_string(&again.before).unwrap(), before);
}

#[test]
fn dot_demo_absent_key_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let config = DemoConfig {
        count: 10,
        delete: Some(-1),
        out_dir: dir.path().to_path_buf(),
        ..DemoConfig::default()
    };

    let report = run(&config).unwrap();
    assert!(!report.was_present);
    assert_eq!(report.len_after, report.len_before);
    assert_eq!(
        std::fs::read_to_string(&report.before).unwrap(),
        std::fs::read_to_string(&report.after).unwrap()
    );
}
