use arith_lexer::{LetterMode, Tokenizer, TokenizerConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    let input = "4x + 5x = 0 * (12y - 3) / [a + b] ".repeat(256);
    let grouped = Tokenizer::new();
    let per_character = Tokenizer::with_config(TokenizerConfig {
        letter_mode: LetterMode::PerCharacter,
        ..Default::default()
    });

    c.bench_function("tokenize grouped", |b| {
        b.iter(|| grouped.tokenize(black_box(&input)))
    });
    c.bench_function("tokenize per character", |b| {
        b.iter(|| per_character.tokenize(black_box(&input)))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
