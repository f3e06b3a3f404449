#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use flappy_evo::simulation::floor::Floor;
use flappy_evo::simulation::params::Params;
use flappy_evo::simulation::pipe::{Pipe, PipeKind};
use flappy_evo::simulation::sprite::{Positioned, Sprite};
use flappy_evo::simulation::world::{Environment, GameWorld};

fn create_test_params() -> Params {
    Params {
        pipe_heights: vec![600.0],
        ..Params::default()
    }
}

fn create_test_world() -> GameWorld {
    GameWorld::seeded(&create_test_params(), 42)
}

#[test]
fn test_world_creation() {
    let world = create_test_world();

    assert!(world.pipes.is_empty());
    assert_eq!(world.ticks, 0);
    assert!(world.is_alive());
    assert_eq!(world.bird.sprite.center_x(), 100.0);
    assert_eq!(world.bird.sprite.center_y(), 512.0);
    assert_eq!(world.bird.sprite.top(), 488.0);
    assert_eq!(world.bird.velocity, 0.0);
    assert_eq!(world.score(), 0.0);
}

#[test]
fn test_sprite_anchors() {
    let sprite = Sprite::from_mid_top(700.0, 600.0, 104.0, 640.0);
    assert_eq!(sprite.left(), 648.0);
    assert_eq!(sprite.right(), 752.0);
    assert_eq!(sprite.top(), 600.0);
    assert_eq!(sprite.bottom(), 1240.0);

    let sprite = Sprite::from_mid_bottom(700.0, 200.0, 104.0, 640.0);
    assert_eq!(sprite.bottom(), 200.0);
    assert_eq!(sprite.top(), -440.0);
    assert_eq!(sprite.center_x(), 700.0);
}

#[test]
fn test_sprite_overlap_is_strict() {
    let a = Sprite::from_top_left(0.0, 0.0, 10.0, 10.0);
    let touching = Sprite::from_top_left(10.0, 0.0, 10.0, 10.0);
    let crossing = Sprite::from_top_left(9.0, 9.0, 10.0, 10.0);

    assert!(!a.overlaps(&touching));
    assert!(a.overlaps(&crossing));
    assert!(crossing.overlaps(&a));
}

#[test]
fn test_bird_falls_under_gravity() {
    let mut world = create_test_world();

    world.tick();
    // Position moves with the old velocity before gravity applies
    assert_eq!(world.bird.sprite.top(), 488.0);
    assert_abs_diff_eq!(world.bird.velocity, 0.3, epsilon = 1e-12);

    world.tick();
    assert_abs_diff_eq!(world.bird.sprite.top(), 488.3, epsilon = 1e-9);
    assert_abs_diff_eq!(world.bird.velocity, 0.6, epsilon = 1e-12);
}

#[test]
fn test_jump_overrides_velocity() {
    let mut world = create_test_world();
    world.bird.velocity = 5.0;

    world.jump();
    assert_eq!(world.bird.velocity, -9.0);

    world.tick();
    assert_eq!(world.bird.sprite.top(), 479.0);
    assert_abs_diff_eq!(world.bird.velocity, -8.7, epsilon = 1e-12);
}

#[test]
fn test_bird_below_ground_is_dead() {
    let mut world = create_test_world();
    world.bird.sprite.set_top(900.0);

    assert!(world.pipes.is_empty());
    assert!(!world.check_alive());

    world.tick();
    assert!(!world.is_alive());
}

#[test]
fn test_bird_above_ceiling_is_dead() {
    let mut world = create_test_world();
    world.bird.sprite.set_top(-100.0);
    assert!(!world.check_alive());

    world.bird.sprite.set_top(-99.0);
    assert!(world.check_alive());
}

#[test]
fn test_falling_bird_eventually_dies() {
    let mut world = create_test_world();

    let mut ticks = 0;
    while world.is_alive() && ticks < 1000 {
        world.tick();
        ticks += 1;
    }

    assert!(!world.is_alive());
    assert!(world.bird.sprite.bottom() >= 900.0);
}

#[test]
fn test_pipe_collision_kills() {
    let mut world = create_test_world();
    let (bottom, top) = Pipe::pair(600.0, world.params());
    world.pipes.push(bottom);
    world.pipes.push(top);

    // Put the bird inside the bottom pipe
    world.bird.sprite.set_center(700.0, 700.0);
    assert!(!world.check_alive());

    // Inside the gap
    world.bird.sprite.set_center(700.0, 400.0);
    assert!(world.check_alive());
}

#[test]
fn test_pipe_pair_geometry() {
    let params = create_test_params();
    let (bottom, top) = Pipe::pair(600.0, &params);

    assert_eq!(bottom.kind, PipeKind::Bottom);
    assert_eq!(top.kind, PipeKind::Top);
    assert_eq!(bottom.sprite.top(), 600.0);
    assert_eq!(top.sprite.bottom(), 200.0);
    assert_eq!(bottom.sprite.center_x(), 700.0);
    assert_eq!(top.sprite.center_x(), 700.0);
}

#[test]
fn test_pipe_pair_scores_one_point() {
    let mut world = create_test_world();
    world.spawn_pipe();
    assert_eq!(world.pipes.len(), 2);

    for _ in 0..119 {
        world.tick();
    }
    assert_eq!(world.score(), 0.0);

    // Both pipes cross x = 100 on the same tick, 0.5 each
    world.tick();
    assert_eq!(world.score(), 1.0);

    for _ in 0..10 {
        world.tick();
    }
    assert_eq!(world.score(), 1.0);
    assert_eq!(world.bird.high_score, 1.0);
}

#[test]
fn test_pipes_are_culled_off_screen() {
    let mut world = create_test_world();
    world.spawn_pipe();

    for _ in 0..160 {
        world.tick();
    }
    assert_eq!(world.pipes.len(), 2);

    world.tick();
    assert!(world.pipes.is_empty());
}

#[test]
fn test_automatic_pipe_spawn_interval() {
    let mut world = create_test_world();
    assert_eq!(world.spawn_every(), 168);

    for _ in 0..167 {
        world.tick();
    }
    assert!(world.pipes.is_empty());

    world.tick();
    assert_eq!(world.pipes.len(), 2);
    assert_eq!(world.pipes[0].sprite.center_x(), 700.0);
}

#[test]
fn test_spawned_heights_come_from_params() {
    let params = Params::default();
    let mut world = GameWorld::seeded(&params, 3);

    for _ in 0..30 {
        world.spawn_pipe();
    }
    for pipe in world.pipes.iter().filter(|p| p.kind == PipeKind::Bottom) {
        assert!(params.pipe_heights.contains(&pipe.sprite.top()));
    }
}

#[test]
fn test_observation_defaults_without_pipes() {
    let world = create_test_world();

    let observation = world.observation(false);
    assert_eq!(observation.to_vec(), vec![488.0, 500.0, 600.0, 900.0, 0.0]);

    let observation = world.observation(true);
    assert_eq!(observation[4], 1.0);
}

#[test]
fn test_observation_senses_pipe_ahead() {
    let mut world = create_test_world();
    world.spawn_pipe();

    // Right edge at 752 is outside the sensing window
    assert_eq!(world.observation(false)[1], 500.0);

    for _ in 0..41 {
        world.tick();
    }
    let observation = world.observation(false);
    assert_eq!(observation[0], world.bird.sprite.top());
    assert_eq!(observation[1], 495.0);
    assert_eq!(observation[2], 600.0);
    assert_eq!(observation[3], 1000.0);
    assert!(world.pipe_ahead().is_some());
}

#[test]
fn test_observation_ignores_passed_pipes() {
    let mut world = create_test_world();
    world.spawn_pipe();

    // Centre reaches x = 100 after 120 ticks and leaves the window
    for _ in 0..120 {
        world.tick();
    }
    assert!(world.pipe_ahead().is_none());
    assert_eq!(world.observation(false)[1], 500.0);
}

#[test]
fn test_reset_restores_start_state() {
    let mut world = create_test_world();
    world.spawn_pipe();
    for _ in 0..130 {
        world.tick();
    }
    assert_eq!(world.score(), 1.0);

    world.reset();
    assert!(world.pipes.is_empty());
    assert_eq!(world.ticks, 0);
    assert!(world.is_alive());
    assert_eq!(world.bird.sprite.center_y(), 512.0);
    assert_eq!(world.bird.velocity, 0.0);
    assert_eq!(world.score(), 0.0);
    assert_eq!(world.bird.high_score, 1.0);

    // Spawn counter restarts too: the first pair comes a full interval after the reset
    for _ in 0..167 {
        world.tick();
    }
    assert!(world.pipes.is_empty());
    world.tick();
    assert_eq!(world.pipes.len(), 2);
}

#[test]
fn test_floor_tiles_wrap() {
    let params = Params::default();
    let mut tiles = Floor::tiles(&params);
    assert_eq!(tiles[0].sprite.left(), 0.0);
    assert_eq!(tiles[1].sprite.left(), 576.0);

    for _ in 0..575 {
        for tile in &mut tiles {
            tile.update();
        }
    }
    assert_eq!(tiles[0].sprite.left(), -575.0);

    for tile in &mut tiles {
        tile.update();
    }
    assert_eq!(tiles[0].sprite.left(), 576.0);
    assert_eq!(tiles[1].sprite.left(), 0.0);
    assert_eq!(tiles[0].sprite().top(), 900.0);
}
