use std::collections::{LinkedList as StdLinkedList, VecDeque};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use indexed_linked_list::LinkedList;

struct Xorshift32(u32);

impl Iterator for Xorshift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        Some(self.0)
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let sizes: Vec<usize> = (4..=10).map(|i| 1usize << i).collect();

    let mut group = c.benchmark_group("queue_churn");
    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("indexed_linked_list", size), move |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for v in Xorshift32(42).take(size) {
                    list.push_back(v);
                }
                let mut sum = 0u64;
                while let Some(v) = list.pop_front() {
                    sum += u64::from(v);
                }
                black_box(sum)
            });
        });
        group.bench_function(BenchmarkId::new("std_linked_list", size), move |b| {
            b.iter(|| {
                let mut list = StdLinkedList::new();
                for v in Xorshift32(42).take(size) {
                    list.push_back(v);
                }
                let mut sum = 0u64;
                while let Some(v) = list.pop_front() {
                    sum += u64::from(v);
                }
                black_box(sum)
            });
        });
        group.bench_function(BenchmarkId::new("vec_deque", size), move |b| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for v in Xorshift32(42).take(size) {
                    deque.push_back(v);
                }
                let mut sum = 0u64;
                while let Some(v) = deque.pop_front() {
                    sum += u64::from(v);
                }
                black_box(sum)
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("seek_mid");
    for &size in &sizes {
        group.bench_function(BenchmarkId::new("indexed_linked_list", size), move |b| {
            let list: LinkedList<u32> = Xorshift32(42).take(size).collect();
            b.iter(|| *black_box(&list).get(size / 2).unwrap());
        });
        group.bench_function(BenchmarkId::new("vec_deque", size), move |b| {
            let deque: VecDeque<u32> = Xorshift32(42).take(size).collect();
            b.iter(|| *black_box(&deque).get(size / 2).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("scan");
    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("indexed_linked_list", size), move |b| {
            let list: LinkedList<u32> = Xorshift32(42).take(size).collect();
            b.iter(|| list.iter().map(|&v| u64::from(v)).sum::<u64>());
        });
        group.bench_function(BenchmarkId::new("std_linked_list", size), move |b| {
            let list: StdLinkedList<u32> = Xorshift32(42).take(size).collect();
            b.iter(|| list.iter().map(|&v| u64::from(v)).sum::<u64>());
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
