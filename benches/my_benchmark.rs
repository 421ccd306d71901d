use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use terrain_pathfinding::prelude::*;

// the size of the Mendon map
const ROWS: usize = 500;
const COLS: usize = 400;

struct Map {
    terrain: Vec<Vec<u8>>,
}

impl Map {
    pub fn new_uniform(class: u8) -> Self {
        Map {
            terrain: vec![vec![class; COLS]; ROWS],
        }
    }

    /// Mostly walkable terrain with roughly 1 in 10 Tiles impassable.
    pub fn new_random() -> Self {
        let mut rng = WyRand::new_seed(4);
        let terrain = (0..ROWS)
            .map(|_| {
                (0..COLS)
                    .map(|_| match rng.generate_range(0_u8..20) {
                        class @ 0..=9 if class != 5 && class != 9 => class,
                        18 => 9,
                        19 => 5,
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Map { terrain }
    }

    fn grid(&self) -> Grid {
        Grid::build(&self.terrain).unwrap()
    }
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug or trace to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_build(c: &mut Criterion) {
    init();
    let map = Map::new_random();
    c.bench_function("build 500x400", |b| b.iter(|| map.grid()));
}

fn bench_search(c: &mut Criterion) {
    init();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let map = Map::new_uniform(0);
    let mut grid = map.grid();
    group.bench_function("uniform short", |b| {
        b.iter(|| find_path(&mut grid, (100, 100), (140, 160)).unwrap())
    });

    let map = Map::new_random();
    let mut grid = map.grid();
    let (start, goal) = ((10, 10), (60, 45));
    if grid.is_passable(start) && grid.is_passable(goal) {
        group.bench_function("random reference", |b| {
            b.iter(|| find_path(&mut grid, start, goal).map(|p| p.cost()).ok())
        });
        group.bench_function("random optimal", |b| {
            b.iter(|| {
                Search::new(&mut grid, start, goal, SearchConfig::OPTIMAL)
                    .and_then(|mut search| search.run())
                    .map(|p| p.cost())
                    .ok()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
