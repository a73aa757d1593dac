use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kana_core::KanaConverter;
use kana_session::{Position, Transliterator};

const SENTENCE: &str = "kyouhaiitenkidesune. watashihaanatanokotowoshinjiteimasu.\n";

/// Type `text` key by key into a growing single-line document.
fn type_through(text: &str) -> String {
    let mut t = Transliterator::new(KanaConverter::default());
    t.set_enabled(true);
    let mut doc = String::new();
    let mut line = 0;
    let mut line_start = 0;
    for ch in text.chars() {
        doc.push(ch);
        if ch == '\n' {
            line += 1;
            line_start = doc.len();
        }
        let col = doc[line_start..].chars().count();
        if let Some(r) = t.handle_change(&doc, Position::new(line, col)) {
            let from = line_start
                + doc[line_start..]
                    .char_indices()
                    .nth(r.from.ch)
                    .map(|(i, _)| i)
                    .unwrap_or(doc.len() - line_start);
            doc.replace_range(from.., &r.text);
            t.observe(&doc);
        }
    }
    doc
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");
    group.bench_function("sentence", |b| b.iter(|| type_through(black_box(SENTENCE))));
    group.bench_function("sentence_x10", |b| {
        let long = SENTENCE.repeat(10);
        b.iter(|| type_through(black_box(&long)))
    });
    group.finish();
}

criterion_group!(benches, bench_typing);
criterion_main!(benches);
