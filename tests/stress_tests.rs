//! Stress tests that push the queues through large, shuffled workloads
//!
//! The workload mirrors a ranking job: fill the queue, drain it, refill it,
//! shuffle every priority through `change_priority`, and drain again, checking
//! that the indexed heap removes in the same order as the reference queue.

use indexed_minpq::indexed::IndexedMinHeap;
use indexed_minpq::unsorted::UnsortedMinPQ;
use indexed_minpq::MinPriorityQueue;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Distinct (label, priority) pairs; priorities are unique so the removal
/// order is the same for every correct implementation
fn workload(rng: &mut StdRng, count: usize) -> Vec<(String, f64)> {
    let mut priorities: Vec<f64> = (0..count).map(|i| i as f64 * 0.5 - 100.0).collect();
    priorities.shuffle(rng);
    priorities
        .into_iter()
        .enumerate()
        .map(|(i, p)| (format!("comment-{i:05}"), p))
        .collect()
}

fn drain<E, Q: MinPriorityQueue<E, f64>>(pq: &mut Q) -> Vec<E> {
    let mut out = Vec::with_capacity(pq.len());
    while let Ok(element) = pq.remove_min() {
        out.push(element);
    }
    out
}

#[test]
fn test_refill_and_shuffle_priorities() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let pairs = workload(&mut rng, 1500);

    let mut reference: UnsortedMinPQ<String, f64> = UnsortedMinPQ::new();
    let mut testing: IndexedMinHeap<String, f64> = IndexedMinHeap::new();
    for (label, priority) in &pairs {
        reference.add(label.clone(), *priority).unwrap();
        testing.add(label.clone(), *priority).unwrap();
    }

    for (label, _) in &pairs {
        assert!(testing.contains(label.as_str()));
    }
    assert_eq!(testing.len(), reference.len());
    assert_eq!(testing.peek_min(), reference.peek_min());
    assert_eq!(drain(&mut testing), drain(&mut reference));

    for (label, _) in &pairs {
        assert!(!testing.contains(label.as_str()));
    }
    assert!(testing.is_empty());

    // Refill, then move every priority somewhere else
    for (label, priority) in &pairs {
        reference.add(label.clone(), *priority).unwrap();
        testing.add(label.clone(), *priority).unwrap();
    }
    let mut shuffled: Vec<f64> = pairs.iter().map(|(_, p)| *p).collect();
    shuffled.shuffle(&mut rng);
    for ((label, _), priority) in pairs.iter().zip(shuffled) {
        reference.change_priority(label, priority).unwrap();
        testing.change_priority(label.as_str(), priority).unwrap();
    }

    assert_eq!(testing.check_invariants(), Ok(()));
    assert_eq!(drain(&mut testing), drain(&mut reference));
}

#[test]
fn test_massive_operations() {
    init_logging();
    let mut heap = IndexedMinHeap::new();

    for i in 0..2000u32 {
        heap.add(i, i64::from(i)).unwrap();
    }
    assert_eq!(heap.len(), 2000);

    for i in 0..2000u32 {
        assert_eq!(heap.remove_min_with_priority(), Ok((i, i64::from(i))));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_many_priority_changes() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(17);
    let mut heap = IndexedMinHeap::new();
    let mut current = vec![0i64; 500];

    for (i, slot) in current.iter_mut().enumerate() {
        *slot = rng.random_range(-10_000..10_000);
        heap.add(i, *slot).unwrap();
    }

    for _ in 0..5000 {
        let e = rng.random_range(0..current.len());
        let p = rng.random_range(-10_000..10_000);
        heap.change_priority(&e, p).unwrap();
        current[e] = p;
    }
    assert_eq!(heap.check_invariants(), Ok(()));

    let mut last = i64::MIN;
    let mut count = 0;
    while let Ok((e, p)) = heap.remove_min_with_priority() {
        assert!(p >= last, "removed {p} after {last}");
        assert_eq!(p, current[e]);
        last = p;
        count += 1;
    }
    assert_eq!(count, current.len());
}

#[test]
fn test_alternating_add_remove() {
    init_logging();
    let mut heap = IndexedMinHeap::new();

    for i in 0..500 {
        heap.add(2 * i, (2 * i) as f64).unwrap();
        heap.add(2 * i + 1, (2 * i + 1) as f64).unwrap();
        assert_eq!(heap.remove_min(), Ok(i));
    }
    assert_eq!(heap.len(), 500);

    let remaining = drain(&mut heap);
    assert_eq!(remaining, (500..1000).collect::<Vec<_>>());
}

#[test]
fn test_readd_after_removal() {
    init_logging();
    let mut heap = IndexedMinHeap::new();

    for round in 0..50 {
        for e in 0..20 {
            heap.add(e, f64::from((e * 7 + round) % 20)).unwrap();
        }
        for _ in 0..20 {
            heap.remove_min().unwrap();
        }
        assert!(heap.is_empty());
        assert_eq!(heap.check_invariants(), Ok(()));
    }
}

/// Operations stay logarithmic in an unoptimised build; a per-operation
/// O(n) check would push this past the limit by orders of magnitude
#[cfg(not(feature = "debug-invariants"))]
#[test]
fn test_large_descending_insertion_is_not_quadratic() {
    init_logging();
    let n = 100_000u32;
    let start = Instant::now();

    let mut heap = IndexedMinHeap::with_capacity(n as usize);
    for i in (0..n).rev() {
        heap.add(i, i).unwrap();
    }
    for i in 0..n {
        heap.change_priority(&i, n - i).unwrap();
    }
    assert_eq!(heap.peek_min(), Ok(&(n - 1)));
    let mut count = 0;
    while heap.remove_min().is_ok() {
        count += 1;
    }

    assert_eq!(count, n);
    let elapsed = start.elapsed();
    assert!(elapsed < Duration::from_secs(20), "{n} elements took {elapsed:?}");
}
