use autocomplete::Dictionary;
use criterion::{Criterion, criterion_group, criterion_main};

// Every combination of up to four letters from a small alphabet.
fn synthetic_words() -> Vec<String> {
    let alphabet = ['a', 'e', 'i', 'm', 'n', 'o', 'r', 's', 't'];
    let mut words: Vec<String> = alphabet.iter().map(|c| c.to_string()).collect();
    let mut frontier = words.clone();
    for _ in 1..4 {
        let next: Vec<String> = frontier
            .iter()
            .flat_map(|w| alphabet.iter().map(move |c| format!("{w}{c}")))
            .collect();
        words.extend(next.iter().cloned());
        frontier = next;
    }
    words
}

fn bench_autocomplete(c: &mut Criterion) {
    let words = synthetic_words();
    let dictionary: Dictionary = words.iter().collect();
    let prefixes: Vec<String> = words.iter().take(200).cloned().collect();

    c.bench_function("insert_all", |b| {
        b.iter(|| words.iter().collect::<Dictionary>())
    });
    c.bench_function("autocomplete_single", |b| {
        b.iter(|| dictionary.autocomplete("ma"))
    });
    c.bench_function("autocomplete_many", |b| {
        b.iter(|| dictionary.autocomplete_many(&prefixes))
    });
    c.bench_function("collect_all", |b| b.iter(|| dictionary.collect("")));
}

criterion_group!(benches, bench_autocomplete);
criterion_main!(benches);
