extern crate rand;
extern crate rb_collections;
extern crate simplelog;

use self::rand::{thread_rng, Rng};
use rb_collections::ordered_queue::{OrderedQueue, Priority};
use rb_collections::red_black_tree::{RedBlackTree, Traversal};
use simplelog::{Config, LevelFilter, TestLogger};
use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

fn init_logging() {
    TestLogger::init(LevelFilter::Warn, Config::default()).ok();
}

fn depths(tree: &RedBlackTree<u32>) -> Vec<(u32, usize)> {
    // recovers node depths from the pre-order walk, whose shape is fixed by the in-order walk
    fn build(pre: &[u32], depth: usize, out: &mut Vec<(u32, usize)>) {
        if pre.is_empty() {
            return;
        }
        let root = pre[0];
        out.push((root, depth));
        let split = pre[1..].iter().position(|value| *value > root).unwrap_or(pre.len() - 1);
        build(&pre[1..=split], depth + 1, out);
        build(&pre[split + 1..], depth + 1, out);
    }

    let pre = tree.traverse(Traversal::PreOrder).cloned().collect::<Vec<u32>>();
    let mut out = Vec::new();
    build(&pre, 0, &mut out);
    out
}

#[test]
fn int_test_red_black_tree() {
    init_logging();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    let mut expected = Vec::new();
    for i in 0..10_000 {
        let value = rng.gen::<u32>();

        tree.add(value).unwrap();
        expected.push(value);
        if i % 500 == 0 {
            assert!(tree.check().is_ok());
        }
    }
    assert!(tree.check().is_ok());

    expected.sort();

    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.smallest(), Some(&expected[0]));
    assert_eq!(tree.biggest(), Some(&expected[expected.len() - 1]));
    assert_eq!(
        tree.iter().cloned().collect::<Vec<u32>>(),
        expected,
    );

    for _ in 0..100 {
        let k = rng.gen_range(1, expected.len() + 1);
        assert_eq!(tree.nth_smallest(k), Some(&expected[k - 1]));
        assert_eq!(tree.nth_biggest(k), Some(&expected[expected.len() - k]));
    }
    assert_eq!(tree.nth_smallest(expected.len() + 1), None);
    assert_eq!(tree.nth_biggest(0), None);

    thread_rng().shuffle(&mut expected);

    let mut expected_len = expected.len();
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(tree.remove(value), Some(*value));
        expected_len -= 1;
        assert_eq!(tree.len(), expected_len);
        if i % 500 == 0 {
            assert!(tree.check().is_ok());
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.check(), Ok(0));
}

#[test]
fn int_test_red_black_tree_mixed_operations() {
    init_logging();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    let mut expected: Vec<u32> = Vec::new();
    for _ in 0..2_000 {
        let value = rng.gen_range(0, 200);
        if rng.gen::<bool>() {
            tree.add(value).unwrap();
            expected.push(value);
        } else {
            let removed = tree.remove(&value);
            match expected.iter().position(|item| *item == value) {
                Some(index) => {
                    expected.swap_remove(index);
                    assert_eq!(removed, Some(value));
                },
                None => assert_eq!(removed, None),
            }
        }
        assert!(tree.check().is_ok());
    }

    expected.sort();
    assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), expected);
}

#[test]
fn int_test_add_then_remove_keeps_contents() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    for _ in 0..500 {
        tree.add(rng.gen_range(0, 1_000)).unwrap();
    }
    let before = tree.iter().cloned().collect::<Vec<u32>>();

    for _ in 0..100 {
        let value = rng.gen_range(0, 1_000);
        tree.add(value).unwrap();
        assert_eq!(tree.remove(&value), Some(value));
        assert!(tree.check().is_ok());
    }
    assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), before);
}

#[test]
fn int_test_traversals() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    let mut expected = Vec::new();
    while expected.len() < 1_000 {
        let value = rng.gen::<u32>();
        if !tree.contains(&value) {
            tree.add(value).unwrap();
            expected.push(value);
        }
    }
    expected.sort();

    for order in &[
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::InOrder,
        Traversal::LevelOrder,
    ] {
        let mut visited = tree.traverse(*order).cloned().collect::<Vec<u32>>();
        visited.sort();
        assert_eq!(visited, expected);
    }

    let shape = depths(&tree);
    let depth_of = |value: u32| {
        shape
            .iter()
            .find(|(item, _)| *item == value)
            .map(|(_, depth)| *depth)
            .unwrap()
    };

    let level = tree.traverse(Traversal::LevelOrder).cloned().collect::<Vec<u32>>();
    for pair in level.windows(2) {
        assert!(depth_of(pair[0]) <= depth_of(pair[1]));
    }

    let mut post = tree.traverse(Traversal::PostOrder).cloned().collect::<Vec<u32>>();
    assert_eq!(post.pop(), tree.traverse(Traversal::PreOrder).next().cloned());
}

#[test]
fn int_test_clear_with_destroys_each_value_once() {
    struct Tracked {
        key: u32,
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    let mut tree: RedBlackTree<Tracked, _> =
        RedBlackTree::with_comparator(|a: &Tracked, b: &Tracked| a.key.cmp(&b.key));
    for key in 0..257 {
        tree.add(Tracked {
            key,
            drops: Rc::clone(&drops),
        })
        .unwrap();
    }

    let mut destroyed = 0;
    tree.clear_with(|value: Tracked| {
        destroyed += 1;
        drop(value);
    });
    assert_eq!(destroyed, 257);
    assert_eq!(drops.get(), 257);

    tree.add(Tracked {
        key: 0,
        drops: Rc::clone(&drops),
    })
    .unwrap();
    drop(tree);
    assert_eq!(drops.get(), 258);
}

#[test]
fn int_test_ordered_queue() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut queue = OrderedQueue::new(Priority::Increasing);
    let mut expected = Vec::new();
    for _ in 0..1_000 {
        let value = rng.gen::<u32>();
        queue.push(value).unwrap();
        expected.push(value);
    }
    expected.sort();

    for value in expected {
        assert_eq!(queue.pop(), Some(value));
    }
    assert!(queue.is_empty());
}
