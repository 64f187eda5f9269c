use stratum_canvas::{Block, Connection, compute_levels};

#[test]
fn compute_levels_derives_missing_levels() {
    let blocks = vec![
        Block::new("a", 10.0, 10.0),
        Block::new("b", 10.0, 10.0),
        Block::new("c", 10.0, 10.0),
    ];
    let connections = vec![Connection::new(1, "a", "b"), Connection::new(2, "b", "c")];
    let levels = compute_levels(&blocks, &connections);
    assert_eq!(levels["a"], 0);
    assert_eq!(levels["b"], 1);
    assert_eq!(levels["c"], 2);
}

#[test]
fn compute_levels_prefers_block_levels() {
    let blocks = vec![
        Block::new("a", 10.0, 10.0),
        Block::new("b", 10.0, 10.0).with_level(5),
    ];
    let connections = vec![Connection::new("x", "a", "b")];
    let levels = compute_levels(&blocks, &connections);
    assert_eq!(levels["a"], 0);
    assert_eq!(levels["b"], 5);
}

#[test]
fn compute_levels_keeps_the_first_of_repeated_blocks() {
    let blocks = vec![
        Block::new("a", 10.0, 10.0).with_level(2),
        Block::new("a", 10.0, 10.0).with_level(7),
    ];
    let connections: Vec<Connection<&str, u32>> = Vec::new();
    let levels = compute_levels(&blocks, &connections);
    assert_eq!(levels.len(), 1);
    assert_eq!(levels["a"], 2);
}
