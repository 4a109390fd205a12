use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lexitrie::spelling::{MAX_EDIT_DISTANCE, levenshtein_distance, levenshtein_distance_threshold};
use lexitrie::trie::Trie;

/// Build a deterministic word list by combining syllables.
fn generate_words(count: usize) -> Vec<String> {
    let onsets = ["b", "c", "d", "f", "g", "l", "m", "p", "s", "t"];
    let nuclei = ["a", "e", "i", "o", "u"];
    let codas = ["n", "r", "st", "ll", "ck"];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let mut word = String::new();
        let syllables = 2 + i % 3;
        for s in 0..syllables {
            let seed = i * 7 + s * 13;
            word.push_str(onsets[seed % onsets.len()]);
            word.push_str(nuclei[(seed / 3) % nuclei.len()]);
            if s + 1 == syllables {
                word.push_str(codas[(seed / 5) % codas.len()]);
            }
        }
        words.push(word);
    }
    words
}

fn bench_trie_operations(c: &mut Criterion) {
    let words = generate_words(1000);
    let populated = Trie::from_words(&words);

    let mut group = c.benchmark_group("trie_operations");

    group.bench_function("insert_1000", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for word in &words {
                trie.insert(black_box(word));
            }
            trie
        })
    });

    group.bench_function("search", |b| {
        b.iter(|| {
            for word in &words {
                let _ = black_box(populated.search(black_box(word)));
            }
        })
    });

    group.bench_function("auto_suggest", |b| {
        b.iter(|| {
            let _ = black_box(populated.auto_suggest(black_box("ba")));
        })
    });

    group.bench_function("all_words", |b| {
        b.iter(|| black_box(populated.all_words()))
    });

    group.finish();
}

fn bench_spelling(c: &mut Criterion) {
    let words = generate_words(1000);
    let populated = Trie::from_words(&words);

    let mut group = c.benchmark_group("spelling");

    group.bench_function("levenshtein_distance", |b| {
        b.iter(|| {
            let _ = black_box(levenshtein_distance(black_box("baneck"), black_box("bonell")));
        })
    });

    group.bench_function("levenshtein_distance_threshold", |b| {
        b.iter(|| {
            let _ = black_box(levenshtein_distance_threshold(
                black_box("baneck"),
                black_box("bonell"),
                MAX_EDIT_DISTANCE,
            ));
        })
    });

    group.bench_function("spelling_suggestions", |b| {
        b.iter(|| black_box(populated.spelling_suggestions(black_box("banek"))))
    });

    group.finish();
}

criterion_group!(benches, bench_trie_operations, bench_spelling);
criterion_main!(benches);
