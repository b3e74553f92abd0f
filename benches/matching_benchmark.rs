use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sabdakosh_engine::{
    matching::{Matcher, SubsequenceMatcher},
    ranking, DictEntry, Lexicon,
};

fn create_test_lexicon(count: usize) -> Lexicon {
    let entries = (0..count)
        .map(|i| DictEntry::new(format!("entry{}word{}", i, i % 97)))
        .collect();
    Lexicon::build(entries).unwrap()
}

fn bench_matcher(c: &mut Criterion) {
    let matcher = SubsequenceMatcher::new();

    c.bench_function("subsequence_score_hit", |b| {
        b.iter(|| black_box(matcher.score(black_box("aple"), black_box("applesauce"))));
    });

    c.bench_function("subsequence_score_miss", |b| {
        b.iter(|| black_box(matcher.score(black_box("zzzz"), black_box("applesauce"))));
    });

    c.bench_function("subsequence_score_devanagari", |b| {
        b.iter(|| black_box(matcher.score(black_box("नमस"), black_box("नमस्कारपूर्वक"))));
    });
}

fn bench_search(c: &mut Criterion) {
    let matcher = SubsequenceMatcher::new();

    let lexicon_1k = create_test_lexicon(1_000);
    let lexicon_10k = create_test_lexicon(10_000);
    let lexicon_30k = create_test_lexicon(30_000);

    c.bench_function("search_1k", |b| {
        b.iter(|| black_box(ranking::search(&matcher, &lexicon_1k, "entry50", 25).unwrap()));
    });

    c.bench_function("search_10k", |b| {
        b.iter(|| black_box(ranking::search(&matcher, &lexicon_10k, "entry50", 25).unwrap()));
    });

    c.bench_function("search_30k", |b| {
        b.iter(|| black_box(ranking::search(&matcher, &lexicon_30k, "entry50", 25).unwrap()));
    });
}

criterion_group!(benches, bench_matcher, bench_search);
criterion_main!(benches);
