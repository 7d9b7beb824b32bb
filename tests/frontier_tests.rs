use rand::prelude::*;
use spatial_astar::data_structures::Frontier;

#[test]
fn test_frontier_extracts_in_priority_order() {
    let mut frontier: Frontier<char, f64> = Frontier::new();
    frontier.push('c', 3.0);
    frontier.push('a', 1.0);
    frontier.push('d', 4.0);
    frontier.push('b', 2.0);

    assert_eq!(frontier.len(), 4);
    assert_eq!(frontier.peek_min(), Some('a'));
    assert_eq!(frontier.peek_priority(), Some(1.0));

    let order: Vec<char> = std::iter::from_fn(|| frontier.extract_min().map(|(node, _)| node)).collect();
    assert_eq!(order, vec!['a', 'b', 'c', 'd']);
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_empty_behaviour() {
    let mut frontier: Frontier<usize, f64> = Frontier::with_capacity(8);
    assert!(frontier.is_empty());
    assert_eq!(frontier.peek_min(), None);
    assert_eq!(frontier.extract_min(), None);

    frontier.push(7, 0.5);
    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.extract_min(), None);
}

#[test]
fn test_frontier_peek_does_not_remove() {
    let mut frontier: Frontier<usize, f64> = Frontier::new();
    frontier.push(1, 5.0);
    frontier.push(2, 1.0);

    assert_eq!(frontier.peek_min(), Some(2));
    assert_eq!(frontier.peek_min(), Some(2));
    assert_eq!(frontier.len(), 2);
}

#[test]
fn test_frontier_keeps_duplicate_entries() {
    let mut frontier: Frontier<usize, f64> = Frontier::new();
    frontier.push(9, 10.0);
    frontier.push(9, 2.0);
    frontier.push(4, 5.0);

    assert_eq!(frontier.len(), 3);
    assert_eq!(frontier.extract_min(), Some((9, 2.0)));
    assert_eq!(frontier.extract_min(), Some((4, 5.0)));
    assert_eq!(frontier.extract_min(), Some((9, 10.0)));
}

#[test]
fn test_frontier_equal_priorities() {
    let mut frontier: Frontier<usize, f64> = Frontier::new();
    for node in 0..5 {
        frontier.push(node, 1.0);
    }
    frontier.push(99, 0.0);

    assert_eq!(frontier.extract_min(), Some((99, 0.0)));

    // Ties come out in some order, but all of them come out
    let mut rest: Vec<usize> = std::iter::from_fn(|| frontier.extract_min().map(|(node, _)| node)).collect();
    rest.sort_unstable();
    assert_eq!(rest, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_frontier_heap_property_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut frontier: Frontier<usize, f64> = Frontier::new();
    let mut live = 0usize;

    for step in 0..5_000 {
        if live == 0 || rng.gen_bool(0.6) {
            // Coarse priorities to force plenty of ties
            let priority = (rng.gen_range(0..50) as f64) * 0.5;
            frontier.push(step, priority);
            live += 1;
        } else {
            let before = frontier.peek_priority().unwrap();
            let (_, popped) = frontier.extract_min().unwrap();
            assert_eq!(popped, before);
            if let Some(next) = frontier.peek_priority() {
                assert!(next >= popped, "extract_min returned {} but {} remains", popped, next);
            }
            live -= 1;
        }

        assert_eq!(frontier.len(), live);
        assert!(frontier.is_valid_heap(), "heap property broken at step {}", step);
    }

    let mut last = f64::NEG_INFINITY;
    while let Some((_, priority)) = frontier.extract_min() {
        assert!(priority >= last);
        last = priority;
        assert!(frontier.is_valid_heap());
    }
}
