use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::{Vec2, Vec3};
use strafe_math::*;

fn bench_closest_point(c: &mut Criterion) {
    let origin = black_box(Vec2::new(3.0, 4.0));
    let direction = black_box(Vec2::new(-0.6, 0.8));
    c.bench_function("line_point_closest_to_origin", |bencher| {
        bencher.iter(|| black_box(line_point_closest_to_origin(origin, direction)))
    });
}

fn bench_points_at_distance(c: &mut Criterion) {
    let origin = black_box(Vec2::new(-10.0, 3.0));
    let direction = black_box(Vec2::new(1.0, 0.25));
    c.bench_function("line_points_at_distance_from_origin", |bencher| {
        bencher.iter(|| black_box(line_points_at_distance_from_origin(origin, direction, 5.0)))
    });
}

fn bench_move_towards(c: &mut Criterion) {
    let current = black_box(Vec2::new(1.0, 2.0));
    let target = black_box(Vec2::new(5.0, -3.0));
    c.bench_function("move_towards", |bencher| {
        bencher.iter(|| black_box(move_towards(current, target, 0.5)))
    });
}

fn bench_signed_angle(c: &mut Criterion) {
    let from = black_box(Vec2::new(0.2, 0.9));
    let to = black_box(Vec2::new(-0.7, 0.1));
    c.bench_function("signed_angle", |bencher| {
        bencher.iter(|| black_box(signed_angle(from, to)))
    });
}

fn bench_rotate_about_up(c: &mut Criterion) {
    let v = black_box(Vec3::new(0.3, 0.0, 0.7));
    c.bench_function("rotate_about_up", |bencher| {
        bencher.iter(|| black_box(rotate_about_up(v, 0.1)))
    });
}

criterion_group!(
    benches,
    bench_closest_point,
    bench_points_at_distance,
    bench_move_towards,
    bench_signed_angle,
    bench_rotate_about_up,
);
criterion_main!(benches);
