//! Decorative 2D sandbox for the skills window, running on `rapier2d`.
//!
//! Units are CSS pixels and seconds, with the y axis pointing down like the page. Randomness is
//! supplied by the caller so the world stays deterministic under test.

use rapier2d::prelude::*;

/// Downward acceleration in px/s².
pub const GRAVITY: Real = 980.0;
/// Fixed steps per simulated second.
pub const STEPS_PER_SECOND: Real = 60.0;
/// Fraction of velocity lost to air per step.
pub const AIR_FRICTION: Real = 0.05;
/// Bounciness of bodies and walls.
pub const RESTITUTION: Real = 0.8;
/// Minimum distance between a spawned body's center and the side walls.
pub const SPAWN_MARGIN: f64 = 30.0;
/// Spawn height for new bodies.
pub const SPAWN_Y: f64 = 20.0;
/// Speed in px/s added to every body by one shake.
pub const SHAKE_SPEED: Real = 840.0;

const WALL_THICKNESS: Real = 50.0;
const PIXELS_PER_METER: Real = 100.0;

/// Linear damping that removes [`AIR_FRICTION`] of the velocity every fixed step.
pub fn linear_damping() -> Real {
    STEPS_PER_SECOND * (1.0 / (1.0 - AIR_FRICTION) - 1.0)
}

/// Render snapshot of one skill body.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBody {
    /// Skill name.
    pub label: String,
    /// Center x in CSS pixels.
    pub x: f64,
    /// Center y in CSS pixels.
    pub y: f64,
    /// Ball radius in CSS pixels.
    pub radius: f64,
    /// Rotation in radians.
    pub angle: f64,
}

impl SkillBody {
    /// CSS placing the body's bounding box at its current position and rotation.
    pub fn style(&self) -> String {
        format!(
            "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;transform:rotate({:.3}rad);",
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
            self.angle
        )
    }
}

struct SkillHandle {
    label: String,
    radius: f64,
    body: RigidBodyHandle,
}

/// Walled box of ball bodies, one per skill.
pub struct PhysicsWorld {
    width: f64,
    height: f64,
    skills: Vec<SkillHandle>,
    walls: Vec<ColliderHandle>,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Empty box of the given size in CSS pixels.
    pub fn new(width: f64, height: f64) -> Self {
        let mut world = Self {
            width: width.max(0.0),
            height: height.max(0.0),
            skills: Vec::new(),
            walls: Vec::new(),
            gravity: vector![0.0, GRAVITY],
            integration_parameters: IntegrationParameters {
                dt: 1.0 / STEPS_PER_SECOND,
                length_unit: PIXELS_PER_METER,
                ..IntegrationParameters::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        };
        world.rebuild_walls();
        world
    }

    /// Number of skill bodies.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Returns `true` before anything was spawned.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Snapshots of every body in spawn order.
    pub fn bodies(&self) -> Vec<SkillBody> {
        self.skills
            .iter()
            .filter_map(|skill| self.snapshot(skill))
            .collect()
    }

    /// Snapshot of the body spawned at `index`.
    pub fn body(&self, index: usize) -> Option<SkillBody> {
        self.skills
            .get(index)
            .and_then(|skill| self.snapshot(skill))
    }

    /// Box size in CSS pixels.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Adds a ball near the ceiling. `unit_x` in `[0, 1)` picks the horizontal spawn point,
    /// clamped away from the side walls.
    pub fn spawn(&mut self, label: impl Into<String>, radius: f64, unit_x: f64) {
        let max_x = (self.width - SPAWN_MARGIN).max(SPAWN_MARGIN);
        let x = (unit_x * self.width).clamp(SPAWN_MARGIN, max_x);
        let damping = linear_damping();
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![x as Real, SPAWN_Y as Real])
            .linear_damping(damping)
            .angular_damping(damping)
            .build();
        let handle = self.rigid_bodies.insert(body);
        let collider = ColliderBuilder::ball(radius as Real)
            .restitution(RESTITUTION)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.rigid_bodies);
        self.skills.push(SkillHandle {
            label: label.into(),
            radius,
            body: handle,
        });
    }

    /// Resizes the box, moving the walls and pulling bodies back inside.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.rebuild_walls();
        for skill in &self.skills {
            let Some(body) = self.rigid_bodies.get_mut(skill.body) else {
                continue;
            };
            let position = *body.translation();
            let x = clamp_center(f64::from(position.x), skill.radius, self.width);
            let y = clamp_center(f64::from(position.y), skill.radius, self.height);
            body.set_translation(vector![x as Real, y as Real], true);
        }
    }

    /// Applies an impulse worth [`SHAKE_SPEED`] to every body in the direction of the next angle.
    ///
    /// Bodies left without an angle (short iterator) are not pushed.
    pub fn shake(&mut self, angles: impl IntoIterator<Item = f64>) {
        for (skill, angle) in self.skills.iter().zip(angles) {
            if let Some(body) = self.rigid_bodies.get_mut(skill.body) {
                let direction = vector![angle.cos() as Real, angle.sin() as Real];
                let impulse = direction * (SHAKE_SPEED * body.mass());
                body.apply_impulse(impulse, true);
            }
        }
    }

    /// Advances the world by one fixed step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    fn snapshot(&self, skill: &SkillHandle) -> Option<SkillBody> {
        let body = self.rigid_bodies.get(skill.body)?;
        let position = body.translation();
        Some(SkillBody {
            label: skill.label.clone(),
            x: f64::from(position.x),
            y: f64::from(position.y),
            radius: skill.radius,
            angle: f64::from(body.rotation().angle()),
        })
    }

    /// Replaces the four fixed walls so their inner faces match the current size.
    fn rebuild_walls(&mut self) {
        for wall in self.walls.drain(..) {
            self.colliders
                .remove(wall, &mut self.islands, &mut self.rigid_bodies, false);
        }

        let (width, height) = (self.width as Real, self.height as Real);
        let half = WALL_THICKNESS / 2.0;
        let half_width = width / 2.0 + WALL_THICKNESS;
        let half_height = height / 2.0 + WALL_THICKNESS;
        // (center x, center y, half extent x, half extent y)
        let walls = [
            (width / 2.0, -half, half_width, half),
            (width / 2.0, height + half, half_width, half),
            (-half, height / 2.0, half, half_height),
            (width + half, height / 2.0, half, half_height),
        ];
        for (x, y, half_x, half_y) in walls {
            let wall = ColliderBuilder::cuboid(half_x, half_y)
                .translation(vector![x, y])
                .restitution(RESTITUTION)
                .build();
            self.walls.push(self.colliders.insert(wall));
        }
    }
}

fn clamp_center(value: f64, radius: f64, extent: f64) -> f64 {
    value.clamp(radius, (extent - radius).max(radius))
}

/// Stable saturated background color for a skill label.
pub fn skill_color(label: &str) -> String {
    // FNV-1a
    let mut hash: u32 = 0x811c_9dc5;
    for byte in label.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    let hue = hash % 360;
    let saturation = 80 + (hash / 360) % 21;
    format!("hsl({hue}, {saturation}%, 40%)")
}

/// Body radius for a label so longer names get bigger bubbles.
pub fn radius_for_label(label: &str) -> f64 {
    (24.0 + 3.5 * label.chars().count() as f64).clamp(32.0, 64.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn velocity(world: &PhysicsWorld, index: usize) -> (f64, f64) {
        let body = &world.rigid_bodies[world.skills[index].body];
        let linvel = body.linvel();
        (f64::from(linvel.x), f64::from(linvel.y))
    }

    fn set_velocity(world: &mut PhysicsWorld, index: usize, vx: Real, vy: Real) {
        let handle = world.skills[index].body;
        world.rigid_bodies[handle].set_linvel(vector![vx, vy], true);
    }

    #[test]
    fn damping_matches_per_step_air_friction() {
        let per_step = 1.0 / (1.0 + linear_damping() / STEPS_PER_SECOND);
        assert!((per_step - (1.0 - AIR_FRICTION)).abs() < 1e-5);
    }

    #[test]
    fn spawn_clamps_to_side_margins() {
        let mut world = PhysicsWorld::new(400.0, 300.0);
        world.spawn("left", 20.0, 0.0);
        world.spawn("right", 20.0, 0.999);
        world.spawn("middle", 20.0, 0.5);

        let xs: Vec<f64> = world.bodies().iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![30.0, 370.0, 200.0]);
        assert!(world.bodies().iter().all(|b| b.y == SPAWN_Y));
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn falling_bodies_settle_inside_the_box() {
        let mut world = PhysicsWorld::new(320.0, 240.0);
        for (idx, label) in ["Rust", "Leptos", "WebAssembly", "Git"].iter().enumerate() {
            world.spawn(*label, radius_for_label(label), idx as f64 / 4.0);
        }

        for _ in 0..600 {
            world.step();
        }

        let slop = 3.0;
        for body in world.bodies() {
            assert!(body.x - body.radius >= -slop, "{} left the box", body.label);
            assert!(body.x + body.radius <= 320.0 + slop, "{} left the box", body.label);
            assert!(body.y - body.radius >= -slop, "{} left the box", body.label);
            assert!(body.y + body.radius <= 240.0 + slop, "{} left the box", body.label);
        }

        let lowest = world
            .bodies()
            .iter()
            .map(|b| b.y + b.radius)
            .fold(f64::MIN, f64::max);
        assert!(lowest > 240.0 - slop, "nothing reached the floor: {lowest}");
    }

    #[test]
    fn side_wall_bounces_body_back_slower() {
        let mut world = PhysicsWorld::new(400.0, 400.0);
        world.spawn("rust", 20.0, 0.5);
        set_velocity(&mut world, 0, -1800.0, 0.0);

        for _ in 0..20 {
            world.step();
        }

        let (vx, _) = velocity(&world, 0);
        assert!(vx > 0.0, "body did not bounce: {vx}");
        assert!(vx < 1800.0 * f64::from(RESTITUTION));
        let body = world.body(0).expect("body");
        assert!(body.x - body.radius >= -1.0);
    }

    #[test]
    fn overlapping_bodies_are_pushed_apart() {
        let mut world = PhysicsWorld::new(400.0, 400.0);
        world.spawn("a", 32.0, 0.5);
        world.spawn("b", 32.0, 0.52);

        for _ in 0..60 {
            world.step();
        }

        let bodies = world.bodies();
        let (a, b) = (&bodies[0], &bodies[1]);
        let distance = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
        assert!(distance >= 64.0 - 1.0, "still overlapping: {distance}");
    }

    #[test]
    fn shake_pushes_each_body_along_its_angle() {
        let mut world = PhysicsWorld::new(400.0, 400.0);
        world.spawn("a", 20.0, 0.2);
        world.spawn("b", 20.0, 0.8);
        world.spawn("c", 20.0, 0.5);
        world.step();
        let before: Vec<(f64, f64)> = (0..3).map(|idx| velocity(&world, idx)).collect();

        world.shake([0.0, std::f64::consts::FRAC_PI_2]);

        let delta = |idx: usize| {
            let (vx, vy) = velocity(&world, idx);
            (vx - before[idx].0, vy - before[idx].1)
        };
        let speed = f64::from(SHAKE_SPEED);
        let (dx, dy) = delta(0);
        assert!((dx - speed).abs() < 0.5 && dy.abs() < 0.5, "{dx}, {dy}");
        let (dx, dy) = delta(1);
        assert!(dx.abs() < 0.5 && (dy - speed).abs() < 0.5, "{dx}, {dy}");
        assert_eq!(delta(2), (0.0, 0.0));
    }

    #[test]
    fn resize_pulls_bodies_back_inside() {
        let mut world = PhysicsWorld::new(400.0, 400.0);
        world.spawn("rust", 10.0, 0.95);
        world.resize(200.0, 150.0);

        let body = world.body(0).expect("body");
        assert_eq!((body.x, body.y), (190.0, SPAWN_Y));
        assert_eq!(world.size(), (200.0, 150.0));
    }

    #[test]
    fn style_places_bounding_box_from_engine_position() {
        let mut world = PhysicsWorld::new(400.0, 300.0);
        world.spawn("rust", 20.0, 0.5);

        assert_eq!(
            world.body(0).expect("body").style(),
            "left:180.0px;top:0.0px;width:40.0px;height:40.0px;transform:rotate(0.000rad);"
        );
        assert_eq!(world.body(1), None);
    }

    #[test]
    fn skill_colors_are_stable_and_saturated() {
        assert_eq!(skill_color("Rust"), skill_color("Rust"));
        assert!(skill_color("Rust").ends_with("%, 40%)"));
        assert_ne!(skill_color("Rust"), skill_color("Python"));
    }

    #[test]
    fn radius_grows_with_label_and_is_bounded() {
        assert_eq!(radius_for_label("Go"), 32.0);
        assert!(radius_for_label("Tailwind") > radius_for_label("Git"));
        assert_eq!(radius_for_label("An extremely long skill label"), 64.0);
    }
}
