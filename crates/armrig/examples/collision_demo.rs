//! Sweep a chain's root angle against a square obstacle and print which
//! steps collide — quick visual sanity on the collision queries.
//!
//! Usage:
//!   cargo run -p armrig --example collision_demo
//!   cargo run -p armrig --example collision_demo -- 128

use armrig::arm::Arm;
use armrig::obstacle::Obstacle;
use armrig::Vec2;
use std::f64::consts::TAU;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    let mut chain = Arm::from_lengths(&[100.0, 70.0, 40.0]).expect("non-empty lengths");
    let obstacle = Obstacle::new(vec![
        Vec2::new(-40.0, -40.0),
        Vec2::new(40.0, -40.0),
        Vec2::new(40.0, 40.0),
        Vec2::new(-40.0, 40.0),
    ]);
    let obstacle_origin = Vec2::new(140.0, -60.0);

    let mut hits = 0usize;
    for k in 0..steps {
        let angle = k as f64 / steps as f64 * TAU;
        chain.set_angle(angle);
        chain.layout(Vec2::zeros());
        let colliding = chain
            .segments()
            .iter()
            .any(|&(a, b)| obstacle.collides_with_segment(a, b, obstacle_origin));
        if colliding {
            hits += 1;
            println!("step {k:3}  angle {angle:6.3}  collides");
        }
    }
    println!("{hits}/{steps} steps collide");
}
