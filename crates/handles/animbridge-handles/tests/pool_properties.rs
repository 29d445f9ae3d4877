use std::rc::Rc;

use animbridge_handles::{Handle, HandlePool, HandleRange, Identity, PoolConfig, PoolError};

struct Artboard {
    name: &'static str,
}

fn range(start: i32, end: i32) -> HandleRange {
    HandleRange::new(start, end).unwrap()
}

#[test]
fn allocate_twice_without_release_is_idempotent() {
    let mut pool = HandlePool::new(range(0, 8));
    let first = pool.allocate("a").unwrap();
    let available = pool.available();
    assert_eq!(pool.allocate("a"), Some(first));
    assert_eq!(pool.available(), available, "second allocate must not consume a slot");
}

#[test]
fn distinct_live_objects_get_distinct_handles() {
    let mut pool = HandlePool::new(range(100, 110));
    let handles: Vec<Handle> = (0..10).map(|i| pool.allocate(i).unwrap()).collect();
    for (i, a) in handles.iter().enumerate() {
        for b in &handles[i + 1..] {
            assert_ne!(a, b);
        }
        assert!(pool.range().contains(*a));
    }
}

#[test]
fn released_handle_is_reused_next() {
    let mut pool = HandlePool::new(range(0, 16));
    for i in 0..5 {
        pool.allocate(i);
    }
    let freed = pool.release(&2).unwrap();
    assert_eq!(pool.allocate(99), Some(freed));
}

#[test]
fn reuse_is_last_in_first_out() {
    let mut pool = HandlePool::new(range(0, 4));
    let a = pool.allocate("a").unwrap();
    let b = pool.allocate("b").unwrap();
    pool.release("a");
    pool.release("b");
    assert_eq!(pool.allocate("c"), Some(b));
    assert_eq!(pool.allocate("d"), Some(a));
}

#[test]
fn third_object_in_two_slot_range_is_refused() {
    let mut pool = HandlePool::new(range(0, 2));
    assert!(pool.allocate("one").is_some());
    assert!(pool.allocate("two").is_some());
    assert_eq!(pool.allocate("three"), None);
    assert!(pool.is_exhausted());
    assert_eq!(
        pool.try_allocate("three"),
        Err(PoolError::Exhausted { capacity: 2 })
    );

    // Recoverable: releasing a stale object frees room.
    pool.release("one");
    assert!(pool.allocate("three").is_some());
}

#[test]
fn lookup_tracks_allocation_until_release() {
    let mut pool = HandlePool::new(range(0, 4));
    assert_eq!(pool.lookup("x"), None);
    let h = pool.allocate("x").unwrap();
    assert_eq!(pool.lookup("x"), Some(h));
    pool.allocate("y");
    assert_eq!(pool.lookup("x"), Some(h));
    pool.release("x");
    assert_eq!(pool.lookup("x"), None);
    assert!(!pool.contains("x"));
}

#[test]
fn identity_keys_separate_equal_objects() {
    let left = Rc::new(Artboard { name: "main" });
    let right = Rc::new(Artboard { name: "main" });
    assert_eq!(left.name, right.name);

    let mut pool: HandlePool<Identity<Artboard>> = HandlePool::new(range(0, 4));
    let hl = pool.allocate(Identity::from(&left)).unwrap();
    let hr = pool.allocate(Identity::from(&right)).unwrap();
    assert_ne!(hl, hr);
    assert_eq!(pool.lookup(&Identity::from(&left)), Some(hl));

    pool.release(&Identity::from(&left));
    assert_eq!(pool.lookup(&Identity::from(&left)), None);
    assert_eq!(pool.lookup(&Identity::from(&right)), Some(hr));
}

#[test]
fn pool_from_json_config() {
    let cfg: PoolConfig = serde_json::from_str(r#"{"start":-4,"end":0}"#).unwrap();
    let mut pool: HandlePool<u32> = HandlePool::from_config(&cfg).unwrap();
    assert_eq!(pool.capacity(), 4);
    assert_eq!(pool.allocate(7), Some(Handle(-1)));

    let bad = PoolConfig { start: 1, end: 0 };
    assert!(matches!(
        HandlePool::<u32>::from_config(&bad),
        Err(PoolError::InvalidRange { .. })
    ));
}
