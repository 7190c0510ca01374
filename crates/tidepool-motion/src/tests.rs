#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use approx::assert_relative_eq;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use tidepool_core::config::MotionConfig;
    use tidepool_core::constants::*;
    use tidepool_core::enums::MotionState;
    use tidepool_core::types::{vec3, Pose};

    use crate::fsm::{MotionMachine, Transition};
    use crate::heading::{bearing, bounded_turn, normalize_angle_delta, rotation_target};
    use crate::regions::RegionSet;
    use crate::tween::{ease_in_out_quad, Tween};

    const STEP_MS: f64 = 16.0;

    fn spawn_pose() -> Pose {
        Pose::new(vec3(ACTOR_SPAWN_POSITION), REST_HEADING)
    }

    fn default_regions() -> RegionSet {
        let config = MotionConfig::default();
        RegionSet::new(config.regions, config.start_region)
    }

    /// Poll every `STEP_MS` over `[from, to]`, collecting transitions.
    fn run(
        machine: &mut MotionMachine,
        pose: &mut Pose,
        rng: &mut ChaCha8Rng,
        from: f64,
        to: f64,
    ) -> Vec<(f64, Transition)> {
        let mut out = Vec::new();
        let mut now = from;
        while now <= to {
            if let Some(t) = machine.poll(now, pose, rng) {
                out.push((now, t));
            }
            now += STEP_MS;
        }
        out
    }

    // ---- Region selection ----

    #[test]
    fn test_first_selection_is_start_region() {
        let regions = default_regions();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(regions.select_next(None, &mut rng), START_REGION);
    }

    #[test]
    fn test_region_never_repeats_consecutively() {
        let regions = default_regions();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut current = None;
        let mut seen = [false; 9];
        for i in 0..2000 {
            let next = regions.select_next(current, &mut rng);
            if i == 0 {
                assert_eq!(next, START_REGION);
            }
            assert_ne!(Some(next), current, "region {next} picked twice in a row");
            assert!(next < REGION_POSITIONS.len());
            seen[next] = true;
            current = Some(next);
        }
        assert!(seen.iter().all(|&s| s), "every region should come up eventually");
    }

    #[test]
    fn test_single_region_stays_put() {
        let regions = RegionSet::new(vec![Vec3::ONE], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(regions.select_next(Some(0), &mut rng), 0);
    }

    // ---- Turn bounding ----

    #[test]
    fn test_normalize_angle_delta_range() {
        assert_relative_eq!(normalize_angle_delta(0.0), 0.0);
        assert_relative_eq!(normalize_angle_delta(PI), PI);
        assert_relative_eq!(normalize_angle_delta(-PI), PI);
        assert_relative_eq!(normalize_angle_delta(3.0 * FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle_delta(-3.0 * FRAC_PI_2), FRAC_PI_2, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle_delta(5.0 * TAU + 0.25), 0.25, epsilon = 1e-4);
        for i in -100..100 {
            let d = normalize_angle_delta(i as f32 * 0.37);
            assert!(d > -PI && d <= PI, "{d} out of (-pi, pi]");
        }
    }

    #[test]
    fn test_bearing_uses_horizontal_components() {
        let from = Vec3::new(0.0, -8.0, 12.0);
        assert_relative_eq!(bearing(from, Vec3::new(0.0, 0.0, 5.0)), PI);
        assert_relative_eq!(bearing(Vec3::ZERO, Vec3::new(3.0, 100.0, 0.0)), FRAC_PI_2);
    }

    #[test]
    fn test_turn_is_bounded_for_every_bearing() {
        for i in 0..720 {
            let b = i as f32 * TAU / 720.0 - PI;
            let delta = bounded_turn(REST_HEADING, b, MAX_TURN_RAD);
            assert!(delta.abs() <= MAX_TURN_RAD + 1e-6, "bearing {b} gave {delta}");
        }
    }

    #[test]
    fn test_rotation_target_turns_toward_destination() {
        // Rest faces -Z. A destination off to +X needs a negative turn from pi
        // (bearing pi/2), which the cap limits to 10 degrees.
        let target = rotation_target(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), PI, MAX_TURN_RAD);
        assert_relative_eq!(target, PI - MAX_TURN_RAD);

        // Off to -X: bearing -pi/2, the short way round is positive.
        let target = rotation_target(Vec3::ZERO, Vec3::new(-10.0, 0.0, 0.0), PI, MAX_TURN_RAD);
        assert_relative_eq!(target, PI + MAX_TURN_RAD);

        // Small angle straight ahead is not clamped.
        let target = rotation_target(Vec3::ZERO, Vec3::new(0.1, 0.0, -10.0), PI, MAX_TURN_RAD);
        assert!(target < PI && target > PI - MAX_TURN_RAD);
    }

    // ---- Tweens ----

    #[test]
    fn test_tween_progress_is_monotonic() {
        let tween = Tween::new(0.0_f32, 1.0, 1000.0, ROTATION_DURATION_MS);
        let mut last = -1.0_f32;
        let mut now = 900.0;
        while now < 3500.0 {
            let eased = ease_in_out_quad(tween.progress_at(now));
            assert!(eased >= last, "eased progress fell at {now}");
            last = eased;
            now += 7.0;
        }
        assert_eq!(tween.progress_at(1000.0 + ROTATION_DURATION_MS), 1.0);
        assert_eq!(tween.progress_at(1_000_000.0), 1.0);
    }

    // ---- State machine ----

    #[test]
    fn test_first_poll_leaves_idle_immediately() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(machine.state(), MotionState::Idle);

        let t = machine.poll(0.0, &mut pose, &mut rng).unwrap();
        assert_eq!(t.from, MotionState::Idle);
        assert_eq!(t.to, MotionState::RotatingToTarget);
        assert_eq!(t.region, Some(START_REGION));
        assert_eq!(machine.current_region(), Some(START_REGION));
    }

    #[test]
    fn test_state_cycle_closes_once() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        machine.poll(0.0, &mut pose, &mut rng).unwrap();

        let window = 0.0 + ROTATION_DURATION_MS + TRANSLATION_DURATION_MS + ROTATION_DURATION_MS;
        let transitions = run(&mut machine, &mut pose, &mut rng, STEP_MS, window + 3.0 * STEP_MS);
        let states: Vec<_> = transitions.iter().map(|(_, t)| (t.from, t.to)).collect();
        assert_eq!(
            states,
            vec![
                (MotionState::RotatingToTarget, MotionState::Translating),
                (MotionState::Translating, MotionState::RotatingToRest),
                (MotionState::RotatingToRest, MotionState::Idle),
            ]
        );
        assert_eq!(machine.state(), MotionState::Idle);

        // Ended exactly on the region, facing the rest heading.
        assert_eq!(pose.position, vec3(REGION_POSITIONS[START_REGION]));
        assert_eq!(pose.heading, REST_HEADING);

        let wait = machine.idle_wait_ms().unwrap();
        assert!((IDLE_WAIT_MIN_MS..IDLE_WAIT_MAX_MS).contains(&wait));
    }

    #[test]
    fn test_full_cycle_after_idle_wait() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let first = run(&mut machine, &mut pose, &mut rng, 0.0, 10_000.0);
        let (idle_at, _) = *first.last().unwrap();
        let wait = machine.idle_wait_ms().unwrap();

        // Nothing happens until the wait is over.
        let quiet = run(&mut machine, &mut pose, &mut rng, idle_at + STEP_MS, idle_at + wait - 1.0);
        assert!(quiet.is_empty());

        let span = wait + ROTATION_DURATION_MS + TRANSLATION_DURATION_MS + ROTATION_DURATION_MS;
        let cycle = run(
            &mut machine,
            &mut pose,
            &mut rng,
            idle_at + wait - 1.0 + STEP_MS,
            idle_at + span + 4.0 * STEP_MS,
        );
        let to_idle = cycle.iter().filter(|(_, t)| t.to == MotionState::Idle).count();
        assert_eq!(to_idle, 1);
        assert_eq!(cycle.len(), 4);
        assert_ne!(cycle[0].1.region, Some(START_REGION));
        for pair in cycle.windows(2) {
            assert_eq!(pair[0].1.to, pair[1].1.from, "a state was skipped");
        }
    }

    #[test]
    fn test_heading_stays_within_turn_cap() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut now = 0.0;
        let mut last_region = None;
        while now < 200_000.0 {
            if let Some(t) = machine.poll(now, &mut pose, &mut rng) {
                if let Some(region) = t.region {
                    assert_ne!(Some(region), last_region);
                    last_region = Some(region);
                }
            }
            assert!(
                (pose.heading - REST_HEADING).abs() <= MAX_TURN_RAD + 1e-5,
                "heading {} drifted past the cap at {now}",
                pose.heading
            );
            now += STEP_MS;
        }
    }

    #[test]
    fn test_heading_stays_between_tween_endpoints() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut now = 0.0;
        let mut rotation: Option<(f32, f32)> = None;
        while now < 60_000.0 {
            let before = pose.heading;
            let transition = machine.poll(now, &mut pose, &mut rng);
            if let Some(t) = transition {
                if matches!(t.to, MotionState::RotatingToTarget | MotionState::RotatingToRest) {
                    rotation = Some((before, machine.heading_target().unwrap()));
                } else {
                    rotation = None;
                }
            } else if let Some((start, end)) = rotation {
                let (lo, hi) = (start.min(end), start.max(end));
                assert!(pose.heading >= lo - 1e-6 && pose.heading <= hi + 1e-6);
            }
            now += STEP_MS;
        }
    }

    #[test]
    fn test_one_transition_per_poll_even_after_long_gap() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        machine.poll(0.0, &mut pose, &mut rng);

        let t = machine.poll(1.0e9, &mut pose, &mut rng).unwrap();
        assert_eq!(t.to, MotionState::Translating);
        // The move starts at the gap, so it has not progressed yet.
        assert_eq!(pose.position, vec3(ACTOR_SPAWN_POSITION));

        let t = machine.poll(1.0e9, &mut pose, &mut rng);
        assert!(t.is_none());
        assert_eq!(machine.state(), MotionState::Translating);
    }

    #[test]
    fn test_translation_starts_from_current_position() {
        let mut machine = MotionMachine::from_config(&MotionConfig::default());
        let mut pose = spawn_pose();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        machine.poll(0.0, &mut pose, &mut rng);
        machine.poll(ROTATION_DURATION_MS, &mut pose, &mut rng);
        assert_eq!(machine.state(), MotionState::Translating);

        let halfway = ROTATION_DURATION_MS + TRANSLATION_DURATION_MS / 2.0;
        machine.poll(halfway, &mut pose, &mut rng);
        let expected = vec3(ACTOR_SPAWN_POSITION).lerp(vec3(REGION_POSITIONS[START_REGION]), 0.5);
        assert_relative_eq!(pose.position.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(pose.position.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(pose.position.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn test_same_seed_same_path() {
        let mut a = MotionMachine::from_config(&MotionConfig::default());
        let mut b = MotionMachine::from_config(&MotionConfig::default());
        let (mut pa, mut pb) = (spawn_pose(), spawn_pose());
        let mut ra = ChaCha8Rng::seed_from_u64(1234);
        let mut rb = ChaCha8Rng::seed_from_u64(1234);
        let ta = run(&mut a, &mut pa, &mut ra, 0.0, 50_000.0);
        let tb = run(&mut b, &mut pb, &mut rb, 0.0, 50_000.0);
        assert_eq!(ta, tb);
        assert_eq!(pa, pb);
    }
}
