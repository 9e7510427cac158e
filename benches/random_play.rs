//! Throughput of dealing and random play.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use shenzhen_core::board::SlotId;
use shenzhen_core::core::GameConfig;
use shenzhen_core::cursor::Direction;
use shenzhen_core::frontend::{Headless, Intent};
use shenzhen_core::game::{Game, Status};

const INTENTS: [Intent; 6] = [
    Intent::Move(Direction::Left),
    Intent::Move(Direction::Right),
    Intent::Move(Direction::Up),
    Intent::Move(Direction::Down),
    Intent::Primary,
    Intent::Secondary,
];

fn bench_deal(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default().instant()).expect("valid config");
    let mut seed = 0u64;
    c.bench_function("deal_seeded", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            game.deal_seeded(black_box(seed), &mut Headless);
        })
    });
}

fn bench_random_play(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    c.bench_function("random_play_1000_intents", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::default().instant()).expect("valid config");
            game.deal_seeded(rng.gen(), &mut Headless);
            for _ in 0..1000 {
                let intent = INTENTS[rng.gen_range(0..INTENTS.len())];
                if game.step(Some(intent), &mut Headless) == Status::Won {
                    break;
                }
            }
            black_box(game.board().len(SlotId::HAND))
        })
    });
}

criterion_group!(benches, bench_deal, bench_random_play);
criterion_main!(benches);
