use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::{Vec2, Vec3};
use strafe_movement::*;

fn bench_next_velocity(c: &mut Criterion) {
    let planner = VelocityPlanner::new(MovementSettings::default(), 0.02).unwrap();
    let previous = black_box(Vec2::new(3.0, 1.0));
    let current = black_box(Vec3::new(3.0, 0.0, 1.0));
    let input = black_box(Vec2::new(-0.6, 0.8));
    c.bench_function("planner_next_velocity", |bencher| {
        bencher.iter(|| black_box(planner.next_velocity(previous, current, input)))
    });
}

fn bench_next_velocity_unbound(c: &mut Criterion) {
    let settings = MovementSettings {
        inertia_factor: 0.1,
        ..Default::default()
    };
    c.bench_function("next_velocity_rebinding_curves", |bencher| {
        bencher.iter(|| {
            black_box(next_velocity(
                black_box(Vec2::new(3.0, 1.0)),
                black_box(Vec3::new(3.0, 0.0, 1.0)),
                black_box(Vec2::new(-0.6, 0.8)),
                settings.top_speed,
                settings.time_to_reach_top_speed,
                settings.time_to_stop,
                settings.acceleration_profile,
                settings.deceleration_profile,
                settings.inertia_factor,
                0.02,
            ))
        })
    });
}

fn bench_stopping_distance(c: &mut Criterion) {
    let planner = VelocityPlanner::new(MovementSettings::default(), 0.02).unwrap();
    let velocity = black_box(Vec3::new(2.0, 0.0, 3.5));
    c.bench_function("stopping_distance", |bencher| {
        bencher.iter(|| black_box(planner.stopping_distance(velocity)))
    });
}

fn bench_controller_tick(c: &mut Criterion) {
    let planner = VelocityPlanner::new(MovementSettings::default(), 0.02).unwrap();
    let mut controller =
        MovementController::new(planner, AvoidanceSettings::default(), CapsuleShape::default())
            .unwrap();
    let mut position = Vec3::ZERO;
    c.bench_function("controller_tick_empty_world", |bencher| {
        bencher.iter(|| {
            position = controller.step(position, Vec2::Y, &EmptyWorld).position;
            black_box(position)
        })
    });
}

criterion_group!(
    benches,
    bench_next_velocity,
    bench_next_velocity_unbound,
    bench_stopping_distance,
    bench_controller_tick
);
criterion_main!(benches);
