mod common;

use common::synthetic::{gradient_frame, pixel_projector, standing_pose, PoseTracker, POSE_FRAME};
use rayon::prelude::*;
use skin_baker::homography::{apply_homography_points, quad_to_rect, rect_corners};
use skin_baker::image::RgbBuffer;
use skin_baker::layout::{recipe, SKIN_LAYOUT};
use skin_baker::skeleton::{JointName, SkeletonSnapshot};
use skin_baker::types::{Point2D, Point3D};
use skin_baker::warp::warp_quad;
use skin_baker::{Atlas, BakeError, BakeOptions, RegionStatus, SkinAtlasBuilder};

const SENTINEL: [u8; 3] = [1, 2, 3];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

type PoseBuilder = SkinAtlasBuilder<PoseTracker, fn(Point3D) -> Point2D>;

fn pose_builder(tracker: PoseTracker) -> PoseBuilder {
    SkinAtlasBuilder::new(tracker, pixel_projector as fn(Point3D) -> Point2D)
}

#[test]
fn unit_square_torso_is_uniform_in_both_slots() {
    init_logger();
    use JointName::*;
    let tracker = PoseTracker::new(
        1,
        &[
            (LeftShoulder, (0.0, 0.0)),
            (RightShoulder, (10.0, 0.0)),
            (LeftHip, (0.0, 10.0)),
            (RightHip, (10.0, 10.0)),
        ],
    );
    let color = [40, 90, 160];
    let frame = RgbBuffer::filled(32, 32, color);
    let builder = pose_builder(tracker);

    let front = recipe("torso_front").unwrap();
    let back = recipe("torso_back").unwrap();
    let quad = builder
        .source_quad(1, &front.source)
        .unwrap()
        .mirrored_x();
    let patch = warp_quad(
        &frame.as_view(),
        &quad,
        front.size,
        builder.options().interpolation,
    )
    .unwrap();
    assert!(patch.pixels().iter().all(|&p| p == color));

    let bake = builder.bake(&frame.as_view(), 1).unwrap();
    let front_px = bake.atlas.region_pixels(&front.region());
    let back_px = bake.atlas.region_pixels(&back.region());
    assert_eq!(front_px.len(), 96);
    assert!(front_px.iter().all(|&p| p == color));
    assert_eq!(front_px, back_px);
}

#[test]
fn unresolved_head_leaves_head_regions_untouched() {
    init_logger();
    let tracker = PoseTracker::new(1, &standing_pose()).without(JointName::Head);
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let builder = pose_builder(tracker);

    let mut atlas = Atlas::filled(SENTINEL);
    let report = builder.bake_into(&frame.as_view(), 1, &mut atlas).unwrap();

    let head_regions: Vec<_> = SKIN_LAYOUT
        .iter()
        .filter(|r| r.name.starts_with("head_"))
        .collect();
    assert_eq!(head_regions.len(), 6);
    for r in head_regions {
        assert!(
            atlas.region_pixels(&r.region()).iter().all(|&p| p == SENTINEL),
            "{} was written",
            r.name
        );
        assert_eq!(
            report.region(r.name).unwrap().status,
            RegionStatus::InvalidJoint {
                joint: JointName::Head
            }
        );
    }
    assert_eq!(report.skipped, 6);
}

#[test]
fn full_pose_bakes_every_region() {
    init_logger();
    let tracker = PoseTracker::new(1, &standing_pose());
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let builder = pose_builder(tracker);

    let mut atlas = Atlas::filled(SENTINEL);
    let report = builder.bake_into(&frame.as_view(), 1, &mut atlas).unwrap();
    assert!(report.is_complete(), "skipped: {:?}", report.regions);
    assert_eq!(report.baked, SKIN_LAYOUT.len());
    assert_eq!(report.regions.len(), SKIN_LAYOUT.len());

    for r in &SKIN_LAYOUT {
        let pixels = atlas.region_pixels(&r.region());
        assert!(
            pixels.iter().all(|&p| p != SENTINEL),
            "{} not fully written",
            r.name
        );
    }

    let top = recipe("head_top").unwrap();
    let back = recipe("head_back").unwrap();
    assert_eq!(
        atlas.region_pixels(&top.region()),
        atlas.region_pixels(&back.region())
    );
    let front = recipe("torso_front").unwrap();
    let rear = recipe("torso_back").unwrap();
    assert_eq!(
        atlas.region_pixels(&front.region()),
        atlas.region_pixels(&rear.region())
    );
}

#[test]
fn missing_knee_skips_only_its_strips() {
    let tracker = PoseTracker::new(1, &standing_pose()).without(JointName::LeftKnee);
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let builder = pose_builder(tracker);

    let mut atlas = Atlas::filled(SENTINEL);
    let report = builder.bake_into(&frame.as_view(), 1, &mut atlas).unwrap();
    let skipped: Vec<_> = report
        .regions
        .iter()
        .filter(|r| !r.status.is_baked())
        .map(|r| r.name)
        .collect();
    assert_eq!(
        skipped,
        vec![
            "left_upper_leg_a",
            "left_lower_leg_a",
            "left_upper_leg_b",
            "left_lower_leg_b"
        ]
    );
    for name in skipped {
        let r = recipe(name).unwrap();
        assert!(atlas.region_pixels(&r.region()).iter().all(|&p| p == SENTINEL));
    }
}

#[test]
fn missing_torso_joint_leaves_both_slots_untouched() {
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let front = recipe("torso_front").unwrap();
    let back = recipe("torso_back").unwrap();
    assert_eq!(front.offset, (20, 20));
    assert_eq!(back.offset, (32, 20));

    for joint in [
        JointName::LeftShoulder,
        JointName::RightShoulder,
        JointName::LeftHip,
        JointName::RightHip,
    ] {
        let tracker = PoseTracker::new(1, &standing_pose()).without(joint);
        let builder = pose_builder(tracker);
        let mut atlas = Atlas::filled(SENTINEL);
        let report = builder.bake_into(&frame.as_view(), 1, &mut atlas).unwrap();
        for r in [front, back] {
            assert!(
                atlas.region_pixels(&r.region()).iter().all(|&p| p == SENTINEL),
                "{} was written without {joint:?}",
                r.name
            );
            assert_eq!(
                report.region(r.name).unwrap().status,
                RegionStatus::InvalidJoint { joint }
            );
        }
    }
}

#[test]
fn torso_reports_first_unresolved_joint() {
    let tracker = PoseTracker::new(1, &standing_pose())
        .without(JointName::RightHip)
        .without(JointName::RightShoulder);
    let builder = pose_builder(tracker);
    let front = recipe("torso_front").unwrap();
    let err = builder.source_quad(1, &front.source).unwrap_err();
    assert_eq!(
        err,
        BakeError::InvalidJoint {
            joint: JointName::RightShoulder
        }
    );
}

#[test]
fn far_off_torso_bakes_without_reading_the_frame() {
    use JointName::*;
    let mut pose = standing_pose();
    for (joint, p) in pose.iter_mut() {
        *p = match joint {
            LeftShoulder => (1e20, 1e20),
            RightShoulder => (2e20, 1e20),
            LeftHip => (1e20, 2e20),
            RightHip => (2e20, 2e20),
            _ => *p,
        };
    }
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let builder = pose_builder(PoseTracker::new(1, &pose));

    let mut atlas = Atlas::filled(SENTINEL);
    builder.bake_into(&frame.as_view(), 1, &mut atlas).unwrap();
    for name in ["torso_front", "torso_back"] {
        let r = recipe(name).unwrap();
        assert!(atlas
            .region_pixels(&r.region())
            .iter()
            .all(|&p| p == [0, 0, 0] || p == SENTINEL));
    }
}

#[test]
fn face_decoration_is_optional() {
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let eye = (8 + 1, 8 + 3);

    let decorated = pose_builder(PoseTracker::new(1, &standing_pose()))
        .bake(&frame.as_view(), 1)
        .unwrap();
    assert_eq!(decorated.atlas.pixel(eye.0, eye.1), [200, 200, 200]);

    let plain = SkinAtlasBuilder::with_options(
        PoseTracker::new(1, &standing_pose()),
        pixel_projector,
        BakeOptions {
            decorate_face: false,
            ..Default::default()
        },
    )
    .bake(&frame.as_view(), 1)
    .unwrap();
    assert_ne!(plain.atlas.pixel(eye.0, eye.1), [200, 200, 200]);
}

#[test]
fn every_layout_quad_round_trips_to_its_patch_corners() {
    let builder = pose_builder(PoseTracker::new(1, &standing_pose()));
    for r in &SKIN_LAYOUT {
        let mut quad = builder.source_quad(1, &r.source).unwrap();
        if r.source.is_mirrored() {
            quad = quad.mirrored_x();
        }
        let h = quad_to_rect(&quad, r.size.0, r.size.1).unwrap();
        let mapped = apply_homography_points(&h, quad.corners()).unwrap();
        for (m, c) in mapped.iter().zip(rect_corners(r.size.0, r.size.1)) {
            assert!(
                (m.x - c.x).abs() < 1e-2 && (m.y - c.y).abs() < 1e-2,
                "{}: {m:?} vs {c:?}",
                r.name
            );
        }
    }
}

#[test]
fn untracked_snapshot_has_nothing_to_bake() {
    let snapshot: SkeletonSnapshot = serde_json::from_str(
        r#"{ "users": [ { "id": 5, "tracked": false, "joints": {} } ] }"#,
    )
    .unwrap();
    let builder = SkinAtlasBuilder::new(&snapshot, pixel_projector);
    let frame = RgbBuffer::new(8, 8);
    assert_eq!(
        builder.bake_tracked(&frame.as_view()).unwrap_err(),
        BakeError::NoTrackedUser
    );
}

#[test]
fn parallel_bakes_share_a_read_only_frame() {
    let (w, h) = POSE_FRAME;
    let frame = gradient_frame(w, h, 200);
    let view = frame.as_view();
    let builder = pose_builder(PoseTracker::new(1, &standing_pose()));
    let atlases: Vec<Atlas> = (0..4)
        .into_par_iter()
        .map(|_| builder.bake(&view, 1).map(|b| b.atlas))
        .collect::<Result<_, _>>()
        .unwrap();
    for atlas in &atlases[1..] {
        assert_eq!(atlas, &atlases[0]);
    }
}
