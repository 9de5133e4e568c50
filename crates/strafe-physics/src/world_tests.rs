use super::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn arena() -> ObstacleWorld {
    ObstacleWorld::new()
        .with_ground(0.0)
        .with_obstacle(Obstacle::pillar(Vec2::new(0.0, 5.0), 1.0))
        .with_obstacle(Obstacle::wall(Vec2::new(-3.0, 10.0), Vec2::new(3.0, 10.0)))
}

fn cast(from: Vec3, direction: Vec3, max_distance: f32) -> CapsuleCast {
    CapsuleCast {
        top: from + Vec3::Y * 0.9,
        bottom: from - Vec3::Y * 0.9,
        radius: 0.5,
        direction,
        max_distance,
        layers: LayerMask::OBSTACLE,
    }
}

#[test]
fn test_ground_raycast() {
    let world = arena();
    let hit = world
        .raycast(&Ray::down(Vec3::new(1.0, 5.0, 2.0), f32::INFINITY, LayerMask::GROUND))
        .unwrap();
    assert!(close(hit.point, Vec3::new(1.0, 0.0, 2.0)));
    assert_eq!(hit.normal, Vec3::Y);
    assert!((hit.distance - 5.0).abs() < 1e-6);

    // Too short, below the plane, or the wrong layer.
    assert!(world.raycast(&Ray::down(Vec3::new(0.0, 5.0, 0.0), 4.0, LayerMask::GROUND)).is_none());
    assert!(world.raycast(&Ray::down(Vec3::new(0.0, -1.0, 0.0), 10.0, LayerMask::GROUND)).is_none());
    assert!(world.raycast(&Ray::down(Vec3::new(0.0, 5.0, 0.0), 10.0, LayerMask::TARGET)).is_none());
}

#[test]
fn test_raycast_hits_pillar_side() {
    let world = arena();
    let ray = Ray {
        origin: Vec3::new(0.0, 1.0, 0.0),
        direction: Vec3::new(0.0, 0.0, 2.0),
        max_distance: 100.0,
        layers: LayerMask::ALL,
    };
    let hit = world.raycast(&ray).unwrap();
    assert!((hit.distance - 4.0).abs() < 1e-5);
    assert!(close(hit.point, Vec3::new(0.0, 1.0, 4.0)));
    assert!(close(hit.normal, Vec3::NEG_Z));
}

#[test]
fn test_raycast_wall_normal_faces_ray() {
    let world = ObstacleWorld::new().with_obstacle(Obstacle::wall(
        Vec2::new(-3.0, 10.0),
        Vec2::new(3.0, 10.0),
    ));
    let from_south = Ray {
        origin: Vec3::new(1.0, 1.0, 0.0),
        direction: Vec3::Z,
        max_distance: 100.0,
        layers: LayerMask::OBSTACLE,
    };
    let hit = world.raycast(&from_south).unwrap();
    assert!(close(hit.point, Vec3::new(1.0, 1.0, 10.0)));
    assert!(close(hit.normal, Vec3::NEG_Z));

    let from_north = Ray {
        origin: Vec3::new(1.0, 1.0, 20.0),
        direction: Vec3::NEG_Z,
        ..from_south
    };
    let hit = world.raycast(&from_north).unwrap();
    assert!(close(hit.normal, Vec3::Z));
    assert!((hit.distance - 10.0).abs() < 1e-5);
}

#[test]
fn test_raycast_respects_extent_and_picks_nearest() {
    let world = ObstacleWorld::new()
        .with_ground(0.0)
        .with_obstacle(Obstacle::pillar(Vec2::new(0.0, 5.0), 1.0).with_extent(0.0, 0.5))
        .with_obstacle(Obstacle::wall(Vec2::new(-3.0, 10.0), Vec2::new(3.0, 10.0)));
    let ray = Ray {
        origin: Vec3::new(0.0, 1.0, 0.0),
        direction: Vec3::Z,
        max_distance: 100.0,
        layers: LayerMask::ALL,
    };
    // Passes over the short pillar and stops at the wall.
    let hit = world.raycast(&ray).unwrap();
    assert!((hit.distance - 10.0).abs() < 1e-5);

    // Angled down, the ground comes first.
    let down = Ray {
        direction: Vec3::new(0.0, -1.0, 1.0),
        ..ray
    };
    let hit = world.raycast(&down).unwrap();
    assert!(close(hit.point, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn test_raycast_layer_filter() {
    let world = ObstacleWorld::new()
        .with_obstacle(Obstacle::pillar(Vec2::new(0.0, 5.0), 1.0).on_layers(LayerMask::TARGET));
    let mut ray = Ray {
        origin: Vec3::ZERO,
        direction: Vec3::Z,
        max_distance: 100.0,
        layers: LayerMask::OBSTACLE,
    };
    assert!(world.raycast(&ray).is_none());
    ray.layers = LayerMask::TARGET;
    assert!(world.raycast(&ray).is_some());
}

#[test]
fn test_capsule_cast_hits_pillar() {
    let world = arena();
    let hit = world
        .capsule_cast(&cast(Vec3::new(0.0, 0.9, 0.0), Vec3::Z, 10.0))
        .unwrap();
    assert!((hit.distance - 3.5).abs() < 1e-5);
    assert!(close(hit.point, Vec3::new(0.0, 0.9, 4.0)));
    assert!(close(hit.normal, Vec3::NEG_Z));
}

#[test]
fn test_capsule_cast_finds_wall_past_pillar() {
    let world = arena();
    let hit = world
        .capsule_cast(&cast(Vec3::new(2.5, 0.9, 0.0), Vec3::Z, 20.0))
        .unwrap();
    assert!((hit.distance - 9.5).abs() < 1e-5);
    assert!(close(hit.normal, Vec3::NEG_Z));
}

#[test]
fn test_capsule_cast_ignores_ground_and_misses() {
    let world = arena();
    let mut sideways = cast(Vec3::new(0.0, 0.9, 0.0), Vec3::X, 50.0);
    sideways.layers = LayerMask::ALL;
    assert!(world.capsule_cast(&sideways).is_none());
    assert!(world.capsule_cast(&cast(Vec3::ZERO, Vec3::Y, 50.0)).is_none());
    assert!(world.capsule_cast(&cast(Vec3::ZERO, Vec3::Z, 3.0)).is_none());
}

#[test]
fn test_capsule_cast_skips_obstacles_out_of_height() {
    let world = ObstacleWorld::new()
        .with_obstacle(Obstacle::pillar(Vec2::new(0.0, 5.0), 1.0).with_extent(3.0, 4.0));
    assert!(world.capsule_cast(&cast(Vec3::new(0.0, 0.9, 0.0), Vec3::Z, 10.0)).is_none());

    let hit = world.capsule_cast(&cast(Vec3::new(0.0, 2.5, 0.0), Vec3::Z, 10.0)).unwrap();
    // Contact height is clamped into the obstacle's extent.
    assert!((hit.point.y - 3.0).abs() < 1e-6);
}

#[test]
fn test_world_accessors() {
    let world = arena();
    assert_eq!(world.obstacles().len(), 2);
    assert_eq!(world.ground().map(|g| g.height), Some(0.0));
    assert!(ObstacleWorld::new().ground().is_none());
}
