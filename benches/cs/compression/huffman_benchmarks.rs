use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffcode::huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, HuffmanTree,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_text(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    // Skewed towards low letters so the code lengths vary.
    (0..len)
        .map(|_| {
            let a: u8 = rng.gen_range(0..26);
            let b: u8 = rng.gen_range(0..26);
            (b'a' + a.min(b)) as char
        })
        .collect()
}

fn bench_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_tree");
    for size in [1_000, 100_000] {
        let freq = build_frequency_table(&generate_text(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &freq, |b, freq| {
            b.iter(|| build_huffman_tree(black_box(freq)))
        });
    }
    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec");
    for size in [1_000, 100_000] {
        let text = generate_text(size);
        let tree = match HuffmanTree::from_text(&text) {
            Ok(tree) => tree,
            Err(_) => continue,
        };
        let table = build_code_table(&tree);
        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| encode(black_box(text), &table))
        });
        if let Ok(encoded) = encode(&text, &table) {
            group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, bits| {
                b.iter(|| decode(black_box(bits), &tree))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_tree_construction, bench_encode_decode);
criterion_main!(benches);
