// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::cast_possible_truncation)] // Test parameters
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure

//! Concurrent first-use of the registry
//!
//! Many threads race to resolve the same never-seen signatures; exactly one
//! shape and one closed type must be installed per key, and every thread
//! must observe the installed ones.

use anonrec::{ObjectFactory, RecordShape, TypeRegistry, Value};
use indexmap::IndexMap;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 12;
const SIGNATURES: usize = 24;

fn signature(i: usize) -> Vec<String> {
    (0..=i % 5).map(|f| format!("sig{}_f{}", i, f)).collect()
}

#[test]
fn racing_threads_share_one_shape_per_signature() {
    let registry = Arc::new(TypeRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Each thread walks the signatures in its own random order
                let mut rng = fastrand::Rng::with_seed(0x5EED + t as u64);
                let mut order: Vec<usize> = (0..SIGNATURES).collect();
                rng.shuffle(&mut order);

                barrier.wait();
                let mut resolved: Vec<(usize, Arc<RecordShape>)> = order
                    .into_iter()
                    .map(|i| {
                        let shape = registry
                            .resolve_or_create(&signature(i), i % 2 == 0)
                            .expect("shape");
                        (i, shape)
                    })
                    .collect();
                resolved.sort_by_key(|(i, _)| *i);
                resolved
            })
        })
        .collect();

    let results: Vec<Vec<(usize, Arc<RecordShape>)>> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    for per_thread in &results[1..] {
        for ((_, expected), (_, got)) in results[0].iter().zip(per_thread) {
            assert!(Arc::ptr_eq(expected, got));
        }
    }

    let stats = registry.stats();
    assert_eq!(registry.shape_count(), SIGNATURES);
    assert_eq!(stats.misses, SIGNATURES as u64);
    assert_eq!(stats.hits, ((THREADS - 1) * SIGNATURES) as u64);
}

#[test]
fn racing_object_creation_shares_closed_types() {
    let factory = ObjectFactory::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let factory = factory.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut values = IndexMap::new();
                values.insert("worker".to_string(), Value::from(t as u32));
                values.insert("payload".to_string(), Value::from(fastrand::f64()));

                barrier.wait();
                factory.create_object(&values).expect("record")
            })
        })
        .collect();

    let records: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    for record in &records[1..] {
        assert!(Arc::ptr_eq(records[0].record_type(), record.record_type()));
    }
    assert_eq!(factory.registry().shape_count(), 1);
    assert_eq!(factory.registry().closed_count(), 1);
    assert_eq!(factory.registry().stats().instantiations, 1);
}
