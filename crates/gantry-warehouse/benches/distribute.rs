// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gantry_model::{product::ProductId, shelf::Shelf, topology::RoomTree};
use gantry_warehouse::warehouse::Warehouse;
use std::hint::black_box;

/// Preorder tokens (right subtree first) for a complete tree of `n` rooms
/// numbered heap-style: the children of room i are 2i and 2i + 1.
fn complete_tree_tokens(n: usize) -> Vec<usize> {
    fn rec(i: usize, n: usize, out: &mut Vec<usize>) {
        if i > n {
            out.push(0);
            return;
        }
        out.push(i);
        rec(2 * i + 1, n, out);
        rec(2 * i, n, out);
    }

    let mut out = Vec::with_capacity(2 * n + 1);
    rec(1, n, &mut out);
    out
}

fn complete_warehouse(n: usize, rows: usize, columns: usize) -> Warehouse {
    let topology = RoomTree::from_preorder(&complete_tree_tokens(n)).expect("well-formed tree");
    let rooms = (0..n).map(|_| Shelf::new(rows, columns)).collect();
    let mut warehouse = Warehouse::new(topology, rooms).expect("consistent tree");
    warehouse.register("crate");
    warehouse
}

fn bench_distribute(c: &mut Criterion) {
    let product = ProductId::from("crate");
    let prototype = complete_warehouse(63, 4, 4);
    let capacity = prototype.capacity();

    c.bench_function("distribute/fill_complete_63", |b| {
        b.iter_batched(
            || prototype.clone(),
            |mut warehouse| {
                let overflow = warehouse.distribute(black_box(&product), capacity).unwrap();
                black_box(overflow)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_shelf_maintenance(c: &mut Criterion) {
    let product_a = ProductId::from("anchor");
    let product_b = ProductId::from("bolt");

    // A big half-full shelf with alternating products and punched holes.
    let mut prototype = Shelf::new(64, 64);
    for chunk in 0..64 {
        let product = if chunk % 2 == 0 { &product_a } else { &product_b };
        prototype.place(product, 48);
    }
    prototype.remove(&product_a, 512);

    c.bench_function("shelf/compact_64x64", |b| {
        b.iter_batched(
            || prototype.clone(),
            |mut shelf| {
                shelf.compact();
                black_box(shelf.occupied())
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("shelf/reorganize_64x64", |b| {
        b.iter_batched(
            || prototype.clone(),
            |mut shelf| {
                shelf.reorganize();
                black_box(shelf.occupied())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_distribute, bench_shelf_maintenance);
criterion_main!(benches);
