use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::constants::*;
use crate::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing in a uniformly random direction.
    pub fn random_unit(rng: &mut Rng) -> Self {
        let angle = rng.range(0.0, std::f64::consts::TAU);
        Self::new(angle.cos(), angle.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, k: f64) {
        self.x *= k;
        self.y *= k;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleKind {
    Rocket,
    Fragment,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub hue: f64,
    pub lifespan: f64,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn rocket(x: f64, y: f64, hue: f64, rng: &mut Rng) -> Self {
        let vy = rng.range(-ROCKET_SPEED_MAX, -ROCKET_SPEED_MIN);
        Self::with_velocity(Vec2::new(x, y), Vec2::new(0.0, vy), hue, ParticleKind::Rocket)
    }

    pub fn fragment(pos: Vec2, hue: f64, rng: &mut Rng) -> Self {
        let vel = Vec2::random_unit(rng) * rng.range(FRAGMENT_SPEED_MIN, FRAGMENT_SPEED_MAX);
        Self::with_velocity(pos, vel, hue, ParticleKind::Fragment)
    }

    pub fn with_velocity(pos: Vec2, vel: Vec2, hue: f64, kind: ParticleKind) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            hue,
            lifespan: LIFESPAN_MAX,
            kind,
        }
    }

    pub fn is_rocket(&self) -> bool {
        self.kind == ParticleKind::Rocket
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// One explicit Euler step. Fragments pull in gravity, drag and decay
    /// themselves; a rocket's owner applies gravity before calling this.
    pub fn update(&mut self, gravity: Vec2) {
        if !self.is_rocket() {
            self.apply_force(gravity);
            self.vel *= FRAGMENT_DRAG;
            self.lifespan -= LIFESPAN_DECAY;
        }
        self.vel += self.acc;
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    pub fn is_finished(&self) -> bool {
        self.lifespan < 0.0
    }

    /// Opacity in [0, 1]; rockets are always opaque.
    pub fn alpha(&self) -> f64 {
        if self.is_rocket() {
            1.0
        } else {
            (self.lifespan / LIFESPAN_MAX).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireworkPhase {
    Launched,
    Exploded,
    Spent,
}

#[derive(Debug, Clone)]
pub struct Firework {
    pub rocket: Particle,
    pub exploded: bool,
    pub fragments: Vec<Particle>,
    pub hue: f64,
}

impl Firework {
    /// Rocket starts on the bottom edge at a random x.
    pub fn launch(width: f64, height: f64, rng: &mut Rng) -> Self {
        let hue = rng.range(0.0, HUE_RANGE);
        let x = rng.range(0.0, width.max(0.0));
        Self::from_rocket(Particle::rocket(x, height, hue, rng))
    }

    pub fn from_rocket(rocket: Particle) -> Self {
        Self {
            hue: rocket.hue,
            rocket,
            exploded: false,
            fragments: Vec::with_capacity(FRAGMENT_COUNT),
        }
    }

    pub fn phase(&self) -> FireworkPhase {
        match (self.exploded, self.fragments.is_empty()) {
            (false, _) => FireworkPhase::Launched,
            (true, false) => FireworkPhase::Exploded,
            (true, true) => FireworkPhase::Spent,
        }
    }

    pub fn update(&mut self, gravity: Vec2, rng: &mut Rng) {
        if !self.exploded {
            self.rocket.apply_force(gravity);
            self.rocket.update(gravity);

            // Apex: the rocket has stopped rising
            if self.rocket.vel.y >= 0.0 {
                self.exploded = true;
                self.explode(rng);
            }
        }

        for fragment in &mut self.fragments {
            fragment.update(gravity);
        }
        self.fragments.retain(|f| !f.is_finished());
    }

    fn explode(&mut self, rng: &mut Rng) {
        let origin = self.rocket.pos;
        for _ in 0..FRAGMENT_COUNT {
            self.fragments.push(Particle::fragment(origin, self.hue, rng));
        }
    }

    pub fn done(&self) -> bool {
        self.phase() == FireworkPhase::Spent
    }

    /// Particles to draw this frame, rocket first while it is still flying.
    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        let rocket = (!self.exploded).then_some(&self.rocket);
        rocket.into_iter().chain(self.fragments.iter())
    }
}

/// The active fireworks, oldest first.
#[derive(Debug, Clone, Default)]
pub struct FireworkShow {
    pub fireworks: Vec<Firework>,
}

impl FireworkShow {
    pub fn new() -> Self {
        Self { fireworks: Vec::with_capacity(8) }
    }

    pub fn spawn(&mut self, width: f64, height: f64, rng: &mut Rng) {
        self.fireworks.push(Firework::launch(width, height, rng));
    }

    /// Advance every firework one frame, then drop the spent ones.
    pub fn update(&mut self, gravity: Vec2, rng: &mut Rng) {
        for fw in &mut self.fireworks {
            fw.update(gravity, rng);
        }
        self.fireworks.retain(|fw| !fw.done());
    }

    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exactly representable so apex timing is not at the mercy of rounding.
    const G: Vec2 = Vec2::new(0.0, 0.25);

    fn rocket_with_vy(vy: f64) -> Firework {
        Firework::from_rocket(Particle::with_velocity(
            Vec2::new(50.0, 400.0),
            Vec2::new(0.0, vy),
            30.0,
            ParticleKind::Rocket,
        ))
    }

    #[test]
    fn launch_starts_on_bottom_edge_moving_up() {
        let mut rng = Rng::seeded(1);
        for _ in 0..200 {
            let fw = Firework::launch(640.0, 480.0, &mut rng);
            assert_eq!(fw.rocket.pos.y, 480.0);
            assert!(fw.rocket.pos.x >= 0.0 && fw.rocket.pos.x < 640.0);
            assert!(fw.rocket.vel.y >= -12.0 && fw.rocket.vel.y < -8.0);
            assert_eq!(fw.rocket.vel.x, 0.0);
            assert_eq!(fw.rocket.acc, Vec2::ZERO);
            assert!(fw.hue >= 0.0 && fw.hue < 360.0);
            assert_eq!(fw.phase(), FireworkPhase::Launched);
        }
    }

    #[test]
    fn rocket_integrates_gravity_then_resets_acceleration() {
        let mut rng = Rng::seeded(2);
        let mut fw = rocket_with_vy(-2.0);
        fw.update(G, &mut rng);
        assert_eq!(fw.rocket.vel.y, -1.75);
        assert_eq!(fw.rocket.pos.y, 400.0 - 1.75);
        assert_eq!(fw.rocket.acc, Vec2::ZERO);
        assert!(!fw.exploded);
    }

    #[test]
    fn rocket_does_not_decay() {
        let mut rng = Rng::seeded(3);
        let mut fw = rocket_with_vy(-10.0);
        for _ in 0..30 {
            fw.update(G, &mut rng);
        }
        assert_eq!(fw.rocket.lifespan, LIFESPAN_MAX);
    }

    #[test]
    fn explodes_exactly_once_at_apex() {
        let mut rng = Rng::seeded(4);
        let mut fw = rocket_with_vy(-1.0);
        let mut transitions = 0;
        let mut frame_of_explosion = None;
        for frame in 1..=200 {
            let before = fw.exploded;
            let vy_before = fw.rocket.vel.y;
            fw.update(G, &mut rng);
            if !before && fw.exploded {
                transitions += 1;
                frame_of_explosion = Some(frame);
                assert!(vy_before < 0.0);
                assert!(fw.rocket.vel.y >= 0.0);
            }
        }
        assert_eq!(transitions, 1);
        // -1.0 + 4 * 0.25 == 0.0
        assert_eq!(frame_of_explosion, Some(4));
    }

    #[test]
    fn explosion_spawns_hundred_fragments_at_rocket() {
        let mut rng = Rng::seeded(5);
        let mut fw = rocket_with_vy(-0.25);
        fw.update(G, &mut rng);
        assert!(fw.exploded);
        // Fragments already took their first step this frame.
        assert_eq!(fw.fragments.len(), FRAGMENT_COUNT);
        for f in &fw.fragments {
            assert_eq!(f.kind, ParticleKind::Fragment);
            assert_eq!(f.hue, fw.hue);
            assert_eq!(f.lifespan, LIFESPAN_MAX - LIFESPAN_DECAY);
        }
        assert_eq!(fw.phase(), FireworkPhase::Exploded);
    }

    #[test]
    fn fragment_speed_within_range() {
        let mut rng = Rng::seeded(6);
        for _ in 0..500 {
            let f = Particle::fragment(Vec2::ZERO, 0.0, &mut rng);
            let speed = f.vel.x.hypot(f.vel.y);
            assert!(speed >= FRAGMENT_SPEED_MIN - 1e-9 && speed < FRAGMENT_SPEED_MAX + 1e-9);
        }
    }

    #[test]
    fn fragment_applies_drag_before_gravity() {
        let mut p = Particle::with_velocity(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.0, ParticleKind::Fragment);
        p.update(G);
        assert_eq!(p.vel, Vec2::new(9.0, 0.25));
        assert_eq!(p.pos, Vec2::new(9.0, 0.25));
        assert_eq!(p.acc, Vec2::ZERO);
    }

    #[test]
    fn fragment_lifespan_strictly_decreases_until_removed() {
        let mut p = Particle::with_velocity(Vec2::ZERO, Vec2::new(1.0, 1.0), 0.0, ParticleKind::Fragment);
        let mut frames = 0;
        while !p.is_finished() {
            let before = p.lifespan;
            p.update(G);
            assert!(p.lifespan < before);
            frames += 1;
        }
        // 255 - 4 * 64 == -1
        assert_eq!(frames, 64);
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn rocket_hidden_after_explosion() {
        let mut rng = Rng::seeded(7);
        let mut fw = rocket_with_vy(-0.5);
        assert_eq!(fw.visible().count(), 1);
        fw.update(G, &mut rng);
        fw.update(G, &mut rng);
        assert!(fw.exploded);
        assert!(fw.visible().all(|p| !p.is_rocket()));
        assert_eq!(fw.visible().count(), FRAGMENT_COUNT);
    }

    #[test]
    fn no_finished_fragment_is_ever_visible() {
        let mut rng = Rng::seeded(8);
        let mut fw = rocket_with_vy(-3.0);
        for _ in 0..200 {
            fw.update(G, &mut rng);
            assert!(fw.visible().all(|p| !p.is_finished()));
        }
        assert!(fw.done());
    }

    #[test]
    fn show_prunes_spent_fireworks_without_skipping() {
        let mut rng = Rng::seeded(9);
        let mut show = FireworkShow::new();
        show.fireworks.push(rocket_with_vy(-0.25));
        show.fireworks.push(rocket_with_vy(-0.25));
        show.fireworks.push(rocket_with_vy(-50.0));
        for _ in 0..80 {
            show.update(G, &mut rng);
        }
        // The two short rockets are spent, the long one is still climbing.
        assert_eq!(show.fireworks.len(), 1);
        assert!(!show.fireworks[0].exploded);
    }

    #[test]
    fn show_eventually_empties() {
        let mut rng = Rng::seeded(10);
        let mut show = FireworkShow::new();
        for _ in 0..5 {
            show.spawn(800.0, 600.0, &mut rng);
        }
        for _ in 0..500 {
            show.update(Vec2::new(0.0, GRAVITY), &mut rng);
        }
        assert!(show.is_empty());
    }
}
