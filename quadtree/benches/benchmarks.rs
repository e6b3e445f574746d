use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::QuadTree;
use quadtree::shapes::{Rectangle, Shape};
use rand::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Entity {
    id: u32,
    bounds: Rectangle,
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Shape for Entity {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}

fn world() -> Rectangle {
    Rectangle::from_min_max(0.0, 0.0, 1000.0, 1000.0)
}

fn populated(rng: &mut StdRng, count: u32) -> (QuadTree<Entity>, Vec<Entity>) {
    let mut quadtree = QuadTree::new(world()).unwrap();
    let mut items = Vec::new();
    for id in 0..count {
        let entity = Entity {
            id,
            bounds: world().get_random_rectangle_inside(20.0, rng),
        };
        quadtree.add(entity).unwrap();
        items.push(entity);
    }
    (quadtree, items)
}

fn add_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quadtree = QuadTree::new(world()).unwrap();
    let mut id = 0;

    c.bench_function("quadtree_add", |b| {
        b.iter(|| {
            let entity = Entity {
                id,
                bounds: world().get_random_rectangle_inside(5.0, &mut rng),
            };
            id = id.wrapping_add(1);
            quadtree.add(black_box(entity)).unwrap();
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut quadtree, items) = populated(&mut rng, 1000);

    c.bench_function("quadtree_remove_add", |b| {
        b.iter(|| {
            let entity = items[rng.gen_range(0..items.len())];
            quadtree.remove(black_box(&entity));
            quadtree.add(entity).unwrap();
        })
    });
}

fn relocate_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (mut quadtree, mut items) = populated(&mut rng, 1000);

    c.bench_function("quadtree_relocate", |b| {
        b.iter(|| {
            let entity = &mut items[rng.gen_range(0..1000)];
            let previous = entity.bounds;
            entity.bounds = world().get_random_rectangle_inside(20.0, &mut rng);
            quadtree.relocate(black_box(*entity), previous).unwrap();
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let (quadtree, _) = populated(&mut rng, 10_000);
    let mut found = Vec::new();

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            found.clear();
            let region = world().get_random_rectangle_inside(100.0, &mut rng);
            quadtree.query(black_box(region), &mut found);
            black_box(found.len());
        })
    });
}

fn clean_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(5);
    let (mut quadtree, items) = populated(&mut rng, 1000);

    c.bench_function("quadtree_clean", |b| {
        b.iter(|| {
            for entity in items.iter().step_by(2) {
                quadtree.remove(entity);
            }
            quadtree.clean();
            for entity in items.iter().step_by(2) {
                quadtree.add(*entity).unwrap();
            }
        })
    });
}

criterion_group!(
    benches,
    add_benchmark,
    remove_benchmark,
    relocate_benchmark,
    query_benchmark,
    clean_benchmark
);
criterion_main!(benches);
