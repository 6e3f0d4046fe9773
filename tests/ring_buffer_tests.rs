//! Behavioral tests for the public ring buffer API

use std::{sync::Arc, thread};

use carousel::{CarouselError, RingBuffer};

#[test]
fn example_scenario_capacity_five() {
    let ring: RingBuffer<u64> = RingBuffer::new(5);

    for i in 1..=5 {
        ring.put(i).unwrap();
    }
    assert!(ring.is_full());
    assert_eq!(ring.fill_level(), 1.0);

    match ring.put(6) {
        Err(CarouselError::Capacity {
            requested,
            available,
        }) => {
            assert_eq!(requested, 1);
            assert_eq!(available, 0);
        }
        other => panic!("expected capacity error, got {:?}", other),
    }

    assert_eq!(ring.put_overwrite(6).unwrap(), Some(1));

    let drained: Vec<u64> = ring.get_bulk(5).unwrap();
    assert_eq!(drained, vec![2, 3, 4, 5, 6]);
    assert!(ring.is_empty());
}

#[test]
fn single_producer_single_consumer_preserves_order() {
    let ring = Arc::new(RingBuffer::<u32>::new(8));
    let item_count = 500u32;

    let producer_ring = Arc::clone(&ring);
    let producer = thread::spawn(move || {
        for i in 0..item_count {
            loop {
                match producer_ring.put(i) {
                    Ok(()) => break,
                    Err(CarouselError::Capacity { .. }) => thread::yield_now(),
                    Err(e) => panic!("unexpected producer error: {}", e),
                }
            }
        }
    });

    let mut received = Vec::with_capacity(item_count as usize);
    while received.len() < item_count as usize {
        match ring.get() {
            Ok(value) => received.push(value),
            Err(CarouselError::Underflow { .. }) => thread::yield_now(),
            Err(e) => panic!("unexpected consumer error: {}", e),
        }
    }

    producer.join().unwrap();

    // With one producer and one consumer the global order is the put order
    let expected: Vec<u32> = (0..item_count).collect();
    assert_eq!(received, expected);
    assert!(ring.is_empty());
}

#[test]
fn error_messages_match_contract() {
    let ring: RingBuffer<u8> = RingBuffer::new(1);

    ring.put(1).unwrap();
    let full = ring.put(2).unwrap_err();
    assert!(full.to_string().contains("buffer is full"));

    ring.get().unwrap();
    let empty = ring.get().unwrap_err();
    assert!(empty.to_string().contains("buffer is empty"));
}

#[test]
fn occupancy_queries_track_state() {
    let ring: RingBuffer<i64> = RingBuffer::new(4);

    assert_eq!(ring.available_space(), 4);
    ring.put_bulk(&[1, 2, 3]).unwrap();
    assert_eq!(ring.len(), 3);
    assert_eq!(ring.available_space(), 1);
    assert!((ring.fill_level() - 0.75).abs() < f64::EPSILON);

    ring.get().unwrap();
    assert_eq!(ring.available_space(), 2);

    ring.clear();
    assert_eq!(ring.available_space(), 4);
    assert_eq!(ring.fill_level(), 0.0);
}

#[test]
fn bulk_and_single_transfers_interleave() {
    let ring: RingBuffer<i32> = RingBuffer::new(6);

    ring.put(1).unwrap();
    ring.put_bulk(&[2, 3, 4]).unwrap();
    ring.put(5).unwrap();

    assert_eq!(ring.get().unwrap(), 1);
    assert_eq!(ring.get_bulk(3).unwrap(), vec![2, 3, 4]);
    assert_eq!(ring.get().unwrap(), 5);

    // A failed bulk call must leave a later drain untouched
    ring.put_bulk(&[6, 7]).unwrap();
    assert!(ring.put_bulk(&[0; 5]).is_err());
    assert!(ring.get_bulk(3).is_err());
    assert_eq!(ring.get_bulk(2).unwrap(), vec![6, 7]);
}

#[test]
fn resize_cycle_keeps_invariants() {
    let ring: RingBuffer<u32> = RingBuffer::new(4);
    ring.put_bulk(&[1, 2, 3, 4]).unwrap();

    ring.resize(8);
    assert_eq!(ring.capacity(), 8);
    assert_eq!(ring.len(), 4);
    assert!(!ring.is_full());

    ring.put_bulk(&[5, 6, 7, 8]).unwrap();
    ring.resize(2);
    assert_eq!(ring.capacity(), 2);
    assert_eq!(ring.get_bulk(2).unwrap(), vec![7, 8]);

    ring.resize(0);
    assert!(ring.is_empty());
    assert!(ring.is_full());
    assert_eq!(ring.fill_level(), 0.0);
}

#[test]
fn stats_snapshot_is_consistent() {
    let ring: RingBuffer<u32> = RingBuffer::new(3);

    ring.put_bulk(&[1, 2, 3]).unwrap();
    ring.put_overwrite(4).unwrap();
    ring.get().unwrap();
    ring.resize(1);

    let stats = ring.stats();
    assert_eq!(stats.capacity, 1);
    assert_eq!(stats.len, 1);
    assert_eq!(
        stats.total_put,
        stats.total_got + stats.total_evicted + stats.len as u64
    );
    assert!(stats.fill_level() >= 0.0 && stats.fill_level() <= 1.0);
    assert!(stats.summary().contains("1/1"));
}
