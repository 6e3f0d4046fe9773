//! Producer-consumer demonstration harness
//!
//! Spawns a fleet of producer threads putting tagged values and a fleet of
//! consumer threads getting them, each with sleep-based pacing. The buffer
//! never blocks; a consumer that finds the buffer empty reports the failure
//! and moves on, and a producer that finds it full either reports the
//! failure or, with --overwrite, evicts the oldest element.

use carousel::{CarouselError, RingBuffer};
use clap::{App, Arg};
use std::{sync::Arc, thread, time::Duration};

struct DemoConfig {
    capacity: usize,
    producers: usize,
    consumers: usize,
    items: usize,
    produce_interval: Duration,
    consume_interval: Duration,
    overwrite: bool,
}

fn parse_args() -> DemoConfig {
    let matches = App::new("producer-consumer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Producer/consumer demonstration for the carousel ring buffer")
        .arg(
            Arg::with_name("capacity")
                .short("c")
                .long("capacity")
                .value_name("N")
                .help("Ring buffer capacity")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::with_name("producers")
                .short("p")
                .long("producers")
                .value_name("N")
                .help("Number of producer threads")
                .takes_value(true)
                .default_value("3"),
        )
        .arg(
            Arg::with_name("consumers")
                .short("k")
                .long("consumers")
                .value_name("N")
                .help("Number of consumer threads")
                .takes_value(true)
                .default_value("3"),
        )
        .arg(
            Arg::with_name("items")
                .short("i")
                .long("items")
                .value_name("N")
                .help("Items produced (and consumption attempts) per thread")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("produce-interval")
                .long("produce-interval")
                .value_name("MS")
                .help("Sleep between puts, in milliseconds")
                .takes_value(true)
                .default_value("100"),
        )
        .arg(
            Arg::with_name("consume-interval")
                .long("consume-interval")
                .value_name("MS")
                .help("Sleep between gets, in milliseconds")
                .takes_value(true)
                .default_value("150"),
        )
        .arg(
            Arg::with_name("overwrite")
                .long("overwrite")
                .help("Evict the oldest element instead of failing when full"),
        )
        .get_matches();

    let parse = |name: &str| -> usize {
        matches
            .value_of(name)
            .unwrap()
            .parse()
            .unwrap_or_else(|_| panic!("--{} expects a non-negative integer", name))
    };

    DemoConfig {
        capacity: parse("capacity"),
        producers: parse("producers"),
        consumers: parse("consumers"),
        items: parse("items"),
        produce_interval: Duration::from_millis(parse("produce-interval") as u64),
        consume_interval: Duration::from_millis(parse("consume-interval") as u64),
        overwrite: matches.is_present("overwrite"),
    }
}

fn main() {
    env_logger::init();
    let config = parse_args();

    println!("Ring Buffer Producer-Consumer Demonstration");
    println!("===========================================");
    println!(
        "capacity: {}, producers: {}, consumers: {}, items per thread: {}, overwrite: {}",
        config.capacity, config.producers, config.consumers, config.items, config.overwrite
    );

    let ring = Arc::new(RingBuffer::<u64>::new(config.capacity));
    let mut handles = Vec::new();

    for id in 0..config.producers {
        let ring = Arc::clone(&ring);
        let items = config.items;
        let interval = config.produce_interval;
        let overwrite = config.overwrite;

        handles.push(thread::spawn(move || {
            for i in 0..items {
                thread::sleep(interval); // Simulate work
                let item = (i + id * 100) as u64;

                if overwrite {
                    match ring.put_overwrite(item) {
                        Ok(None) => println!("Producer {} produced: {}", id, item),
                        Ok(Some(evicted)) => {
                            println!("Producer {} produced: {} (evicted {})", id, item, evicted)
                        }
                        Err(e) => println!("Producer {} failed to produce: {}", id, e),
                    }
                } else {
                    match ring.put(item) {
                        Ok(()) => println!("Producer {} produced: {}", id, item),
                        Err(e @ CarouselError::Capacity { .. }) => {
                            println!("Producer {} failed to produce: {}", id, e)
                        }
                        Err(e) => println!("Producer {} error: {}", id, e),
                    }
                }
            }
        }));
    }

    for id in 0..config.consumers {
        let ring = Arc::clone(&ring);
        let items = config.items;
        let interval = config.consume_interval;

        handles.push(thread::spawn(move || {
            for _ in 0..items {
                thread::sleep(interval); // Simulate work
                match ring.get() {
                    Ok(item) => println!("Consumer {} consumed: {}", id, item),
                    Err(e) => println!("Consumer {} failed to consume: {}", id, e),
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = ring.stats();
    println!("\nFinal state: {}", stats.summary());
}
