use criterion::{Criterion, criterion_group, criterion_main};
use notion_blocks_engine::{
    Block, BlockMap, RenderOptions, RendererRegistry, describe_unsupported_block, dispatch,
};

const TYPES: [&str; 6] = [
    "text",
    "collection_view",
    "header",
    "checkbox",
    "equation",
    "mystery_block",
];

fn generate_page(children: usize) -> BlockMap {
    let ids: Vec<String> = (0..children).map(|i| format!("child-{i:05}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    let mut blocks = vec![Block::new("page", "page", "space").with_content(&id_refs)];
    for (i, id) in ids.iter().enumerate() {
        blocks.push(Block::new(id, TYPES[i % TYPES.len()], "page").with_title("Benchmark"));
    }
    BlockMap::from_blocks(blocks)
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("describe_unsupported_block", |b| {
        b.iter(|| {
            for block_type in TYPES {
                std::hint::black_box(describe_unsupported_block(std::hint::black_box(block_type)));
            }
        });
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.sample_size(20);

    let block_map = generate_page(1_000);
    let registry = RendererRegistry::with_types(["page", "text", "header"]);

    group.bench_function("notices_enabled", |b| {
        b.iter(|| {
            let mut count = 0usize;
            let mut on_unsupported = |_: &str, _: Option<&str>| count += 1;
            let nodes = dispatch(
                &block_map,
                &registry,
                RenderOptions::default(),
                Some(&mut on_unsupported),
            );
            std::hint::black_box((nodes, count));
        });
    });

    group.bench_function("notices_disabled", |b| {
        let options = RenderOptions {
            show_unsupported_block_errors: false,
        };
        b.iter(|| std::hint::black_box(dispatch(&block_map, &registry, options, None)));
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_dispatch);
criterion_main!(benches);
