#[cfg(test)]
mod tests {
    use crate::core::{
        Coordinator, Ease, Len, Pose, RegionRegistry, ScrollError, ScrollRegion, ScrollTimeline,
        SnapMap, Tween, SNAP_BUFFER, SNAP_MAX_DURATION, SNAP_MIN_DURATION,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_region_rejects_inverted_bounds() {
        let result = ScrollRegion::new(500.0, 100.0, false);
        assert_eq!(
            result,
            Err(ScrollError::InvertedRegion {
                start: 500.0,
                end: 100.0
            })
        );
    }

    #[test]
    fn test_region_rejects_non_finite_bounds() {
        assert_eq!(
            ScrollRegion::new(f64::NAN, 10.0, true),
            Err(ScrollError::NonFiniteRegion)
        );
        assert_eq!(
            ScrollRegion::new(0.0, f64::INFINITY, true),
            Err(ScrollError::NonFiniteRegion)
        );
    }

    #[test]
    fn test_region_allows_instantaneous_trigger() {
        let region = ScrollRegion::flowing(1300.0, 1300.0).unwrap();
        assert_eq!(region.span(), 0.0);
        assert!(!region.pinned);
    }

    #[test]
    fn test_registry_add_and_remove() {
        let mut registry = RegionRegistry::new();
        let a = registry
            .add(ScrollRegion::pinned(0.0, 100.0).unwrap())
            .unwrap();
        let b = registry
            .add(ScrollRegion::flowing(200.0, 200.0).unwrap())
            .unwrap();
        assert_eq!(registry.len(), 2);

        let removed = registry.remove(a).unwrap();
        assert!(removed.pinned);
        assert_eq!(registry.len(), 1);

        // Removing the same entry twice yields nothing
        assert!(registry.remove(a).is_none());
        assert!(registry.remove(b).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_rejects_overlapping_pinned_regions() {
        let mut registry = RegionRegistry::new();
        registry
            .add(ScrollRegion::pinned(0.0, 1000.0).unwrap())
            .unwrap();

        let result = registry.add(ScrollRegion::pinned(500.0, 1500.0).unwrap());
        assert!(matches!(result, Err(ScrollError::OverlappingPin { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_allows_endpoint_contact_and_flowing_overlap() {
        let mut registry = RegionRegistry::new();
        registry
            .add(ScrollRegion::pinned(0.0, 1000.0).unwrap())
            .unwrap();

        // Touching at an endpoint is not an overlap
        assert!(registry
            .add(ScrollRegion::pinned(1000.0, 2000.0).unwrap())
            .is_ok());
        // Flowing regions may overlap anything
        assert!(registry
            .add(ScrollRegion::flowing(500.0, 1500.0).unwrap())
            .is_ok());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_no_pinned_regions_means_no_snap_map() {
        let regions = vec![
            ScrollRegion::flowing(100.0, 100.0).unwrap(),
            ScrollRegion::flowing(900.0, 900.0).unwrap(),
        ];
        assert!(SnapMap::build(&regions, 3000.0).is_none());
    }

    #[test]
    fn test_zero_scroll_distance_means_no_snap_map() {
        let regions = vec![ScrollRegion::pinned(0.0, 500.0).unwrap()];
        assert!(SnapMap::build(&regions, 0.0).is_none());
        assert!(SnapMap::build(&regions, -10.0).is_none());
        assert!(SnapMap::build(&regions, f64::NAN).is_none());
    }

    #[test]
    fn test_free_flow_pass_through_is_identity() {
        // Pinned ranges at [0.15, 0.25] and [0.55, 0.65]
        let regions = vec![
            ScrollRegion::pinned(150.0, 250.0).unwrap(),
            ScrollRegion::pinned(550.0, 650.0).unwrap(),
        ];
        let snap = SnapMap::build(&regions, 1000.0).unwrap();

        for v in [0.0, 0.1, 0.4, 0.5, 0.7, 1.0] {
            assert!(close(snap.snap_to(v), v), "expected identity at {v}");
        }
    }

    #[test]
    fn test_snap_to_nearest_center() {
        // Centers at 0.2 and 0.6
        let regions = vec![
            ScrollRegion::pinned(150.0, 250.0).unwrap(),
            ScrollRegion::pinned(550.0, 650.0).unwrap(),
        ];
        let snap = SnapMap::build(&regions, 1000.0).unwrap();

        assert!(close(snap.snap_to(0.25), 0.2));
        assert!(close(snap.snap_to(0.55), 0.6));
    }

    #[test]
    fn test_buffer_boundary_is_inclusive() {
        // Range [0.4, 0.5], center 0.45
        let regions = vec![ScrollRegion::pinned(400.0, 500.0).unwrap()];
        let snap = SnapMap::build(&regions, 1000.0).unwrap();

        assert!(close(snap.snap_to(0.4 - SNAP_BUFFER), 0.45));
        assert!(close(snap.snap_to(0.5 + SNAP_BUFFER), 0.45));
        // Just beyond the buffer scroll flows freely
        let outside = 0.4 - SNAP_BUFFER - 0.001;
        assert!(close(snap.snap_to(outside), outside));
    }

    #[test]
    fn test_exact_center_tie_prefers_first_range() {
        // [0, 0.4] and [0.4, 0.8]: centers 0.2 and 0.6, both 0.2 away from 0.4
        let regions = vec![
            ScrollRegion::pinned(0.0, 400.0).unwrap(),
            ScrollRegion::pinned(400.0, 800.0).unwrap(),
        ];
        let snap = SnapMap::build(&regions, 1000.0).unwrap();
        assert!(close(snap.snap_to(0.4), 0.2));
    }

    #[test]
    fn test_three_section_page_scenario() {
        // A hero pinned over [0, 1300], an instantaneous reveal at 1300 and
        // a CTA pinned over [2600, 3900], on a 3900px scrollable document.
        let regions = vec![
            ScrollRegion::pinned(0.0, 1300.0).unwrap(),
            ScrollRegion::flowing(1300.0, 1300.0).unwrap(),
            ScrollRegion::pinned(2600.0, 3900.0).unwrap(),
        ];
        let snap = SnapMap::build(&regions, 3900.0).unwrap();

        let ranges = snap.ranges();
        assert_eq!(ranges.len(), 2);
        assert!(close(ranges[0].start, 0.0));
        assert!(close(ranges[0].end, 1.0 / 3.0));
        assert!(close(ranges[0].center, 1.0 / 6.0));
        assert!(close(ranges[1].start, 2.0 / 3.0));
        assert!(close(ranges[1].end, 1.0));
        assert!(close(ranges[1].center, 5.0 / 6.0));

        // A stop at 0.30 sits in the hero's buffered range and resolves to
        // the hero center; mid-page flows freely; the tail pulls to the CTA.
        assert!(close(snap.snap_to(0.30), 1.0 / 6.0));
        assert!(close(snap.snap_to(0.5), 0.5));
        assert!(close(snap.snap_to(0.8), 5.0 / 6.0));
    }

    #[test]
    fn test_snap_to_nearest_when_stop_is_between_adjacent_pins() {
        // Two pinned spans meeting at 1300 of 3900: centers 1/6 and 1/3. A
        // stop at 0.30 is 0.133 from the first center and 0.033 from the
        // second, so the second wins.
        let regions = vec![
            ScrollRegion::pinned(0.0, 1300.0).unwrap(),
            ScrollRegion::pinned(1300.0, 1300.0).unwrap(),
        ];
        let snap = SnapMap::build(&regions, 3900.0).unwrap();
        assert!(close(snap.snap_to(0.30), 1.0 / 3.0));
    }

    #[test]
    fn test_snap_duration_scales_with_distance() {
        let regions = vec![ScrollRegion::pinned(0.0, 500.0).unwrap()];
        let snap = SnapMap::build(&regions, 1000.0).unwrap();

        assert!(close(snap.duration_for(0.25, 0.25), SNAP_MIN_DURATION));
        assert!(close(snap.duration_for(0.0, 0.25), SNAP_MAX_DURATION));
        assert!(close(snap.duration_for(0.0, 1.0), SNAP_MAX_DURATION));

        let mid = snap.duration_for(0.0, 0.125);
        assert!(mid > SNAP_MIN_DURATION && mid < SNAP_MAX_DURATION);
    }

    #[test]
    fn test_coordinator_waits_for_every_section() {
        let mut coordinator = Coordinator::new(3);
        coordinator
            .register(ScrollRegion::pinned(0.0, 800.0).unwrap())
            .unwrap();

        assert!(!coordinator.section_done());
        assert!(!coordinator.section_done());
        assert!(!coordinator.ready());
        assert!(coordinator.section_done());
        assert!(coordinator.ready());
    }

    #[test]
    fn test_coordinator_install_is_idempotent() {
        let mut coordinator = Coordinator::new(1);
        coordinator
            .register(ScrollRegion::pinned(0.0, 800.0).unwrap())
            .unwrap();
        coordinator.section_done();

        let center = coordinator.install(2000.0).unwrap().ranges()[0].center;
        assert!(close(center, 0.2));
        assert!(coordinator.installed());

        // A region registered after installation is not observed, even if
        // install is called again with a different scroll distance.
        coordinator
            .register(ScrollRegion::pinned(1500.0, 2000.0).unwrap())
            .unwrap();
        let snap = coordinator.install(4000.0).unwrap();
        assert_eq!(snap.ranges().len(), 1);
        assert!(close(snap.ranges()[0].center, 0.2));
    }

    #[test]
    fn test_coordinator_skips_install_without_pinned_regions() {
        let mut coordinator = Coordinator::new(1);
        coordinator
            .register(ScrollRegion::flowing(100.0, 100.0).unwrap())
            .unwrap();
        coordinator.section_done();

        assert!(coordinator.install(2000.0).is_none());
        assert!(coordinator.installed());
        assert!(coordinator.snap().is_none());
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut coordinator = Coordinator::new(2);
        coordinator
            .register(ScrollRegion::pinned(0.0, 500.0).unwrap())
            .unwrap();
        coordinator
            .register(ScrollRegion::flowing(600.0, 600.0).unwrap())
            .unwrap();
        coordinator.section_done();
        coordinator.section_done();
        coordinator.install(2000.0);

        assert_eq!(coordinator.teardown(), 2);
        assert!(coordinator.snap().is_none());
        assert!(coordinator.registry().is_empty());
        assert_eq!(coordinator.teardown(), 0);
    }

    #[test]
    fn test_teardown_before_setup_completes() {
        // Zero sections reported, nothing installed: teardown must be safe
        let mut coordinator = Coordinator::new(5);
        assert_eq!(coordinator.teardown(), 0);
        assert_eq!(coordinator.teardown(), 0);
        assert!(coordinator.is_torn_down());

        // Install after teardown stays inert
        assert!(coordinator.install(2000.0).is_none());
        assert!(!coordinator.installed());
    }

    #[test]
    fn test_easing_endpoints_and_shape() {
        for ease in [
            Ease::Linear,
            Ease::QuadIn,
            Ease::QuadOut,
            Ease::CubicIn,
            Ease::CubicOut,
            Ease::CubicInOut,
            Ease::BackOut,
        ] {
            assert!(close(ease.apply(0.0), 0.0), "{ease:?} at 0");
            assert!(close(ease.apply(1.0), 1.0), "{ease:?} at 1");
        }

        assert!(close(Ease::Linear.apply(0.3), 0.3));
        assert!(close(Ease::QuadOut.apply(0.5), 0.75));
        assert!(Ease::CubicIn.apply(0.5) < 0.5);
        assert!(Ease::CubicOut.apply(0.5) > 0.5);
        // BackOut overshoots past 1 on its way in
        assert!(Ease::BackOut.apply(0.7) > 1.0);
        // Out-of-range inputs clamp
        assert!(close(Ease::QuadOut.apply(1.5), 1.0));
        assert!(close(Ease::QuadOut.apply(-0.5), 0.0));
    }

    #[test]
    fn test_timeline_samples_before_inside_and_after_a_tween() {
        let from = Pose::new().y(Len::px(24.0)).opacity(0.0);
        let tl = ScrollTimeline::new().with(Tween::of(0).at(0.2).span(0.6).from(from));

        let before = tl.sample(0.1);
        assert_eq!(before.len(), 1);
        assert!(close(before[0].1.opacity, 0.0));
        assert!(close(before[0].1.y.value, 24.0));

        // Timeline extent is 0.8, so the tween midpoint (position 0.5)
        // sits at progress 0.625
        let mid = tl.sample(0.625);
        assert!(close(mid[0].1.opacity, 0.5));
        assert!(close(mid[0].1.y.value, 12.0));

        let after = tl.sample(1.0);
        assert!(close(after[0].1.opacity, 1.0));
        assert!(close(after[0].1.y.value, 0.0));
    }

    #[test]
    fn test_timeline_chained_tweens_hand_over() {
        // Entrance over [0, 0.3], exit over [0.7, 1.0], same target — the
        // pinned hero/CTA choreography shape.
        let entered = Pose::new();
        let tl = ScrollTimeline::new()
            .with(
                Tween::of(0)
                    .span(0.3)
                    .from(Pose::new().y(Len::vh(40.0)).opacity(0.0))
                    .to(entered),
            )
            .with(
                Tween::of(0)
                    .at(0.7)
                    .span(0.3)
                    .from(entered)
                    .to(Pose::new().y(Len::vh(-18.0)).opacity(0.0))
                    .ease(Ease::QuadIn),
            );

        // Mid-entrance
        let pose = tl.sample(0.15)[0].1;
        assert!(close(pose.y.value, 20.0));
        assert!(close(pose.opacity, 0.5));

        // Settled between the two tweens: fully entered
        let pose = tl.sample(0.5)[0].1;
        assert!(close(pose.y.value, 0.0));
        assert!(close(pose.opacity, 1.0));

        // Fully exited
        let pose = tl.sample(1.0)[0].1;
        assert!(close(pose.y.value, -18.0));
        assert!(close(pose.opacity, 0.0));
    }

    #[test]
    fn test_deferred_tween_is_silent_at_rest() {
        // A deferred exit tween contributes nothing while the timeline
        // sits at 0, renders its from pose once moving, and interpolates
        // normally past its start.
        let tl = ScrollTimeline::new().with(
            Tween::of(0)
                .at(0.7)
                .span(0.3)
                .to(Pose::new().opacity(0.0))
                .deferred(),
        );

        assert!(tl.sample(0.0).is_empty());

        let early = tl.sample(0.3);
        assert_eq!(early.len(), 1);
        assert!(close(early[0].1.opacity, 1.0));

        let late = tl.sample(0.85);
        assert!(close(late[0].1.opacity, 0.5));
    }

    #[test]
    fn test_timeline_stagger_offsets_each_target() {
        let tween = Tween::of(0)
            .span(0.6)
            .from(Pose::new().y(Len::px(40.0)).opacity(0.0));
        let tl = ScrollTimeline::new().stagger(0..3, 0.1, tween);

        assert!(close(tl.duration(), 0.2 + 0.6));

        // When the first card completes the later cards still lag behind
        let poses = tl.sample(0.6 / 0.8);
        assert_eq!(poses.len(), 3);
        assert!(close(poses[0].1.opacity, 1.0));
        assert!(poses[1].1.opacity < 1.0);
        assert!(poses[2].1.opacity < poses[1].1.opacity);
    }

    #[test]
    fn test_timeline_duration_spans_latest_tween() {
        let tl = ScrollTimeline::new()
            .with(Tween::of(0).at(0.0).span(0.6))
            .with(Tween::of(1).at(0.3).span(0.5));
        assert!(close(tl.duration(), 0.8));
        assert!(!tl.is_empty());
        assert!(ScrollTimeline::new().is_empty());
    }

    #[test]
    fn test_pose_lerp_adopts_unit_from_nonzero_endpoint() {
        let from = Pose::new().x(Len::vw(-18.0));
        let to = Pose::new(); // x defaults to 0px
        let mid = from.lerp(&to, 0.5);
        assert!(close(mid.x.value, -9.0));
        assert_eq!(mid.x.unit, crate::core::Unit::Vw);
    }

    #[test]
    fn test_pose_transform_css() {
        let pose = Pose::new()
            .x(Len::px(10.0))
            .y(Len::vh(-2.0))
            .rotate(45.0)
            .scale(0.5);
        assert_eq!(
            pose.transform_css(),
            "translate(10px, -2vh) rotate(45deg) scale(0.5)"
        );
        assert!(close(pose.opacity, 1.0));
    }
}
