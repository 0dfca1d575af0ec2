use skin_baker::image::RgbBuffer;
use skin_baker::skeleton::{JointName, PinholeProjector, SkeletonSnapshot, UserSkeleton};
use skin_baker::SkinAtlasBuilder;
use std::collections::BTreeMap;

fn main() {
    // Demo stub: bakes a synthetic 640×480 frame with a standing skeleton
    env_logger::init();
    let (w, h) = (640usize, 480usize);
    let mut frame = RgbBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            frame.set(x, y, [(x / 3) as u8, (y / 2) as u8, 128]);
        }
    }

    let snapshot = SkeletonSnapshot {
        users: vec![UserSkeleton {
            id: 1,
            tracked: true,
            joints: standing_pose(),
        }],
    };
    let builder = SkinAtlasBuilder::new(&snapshot, PinholeProjector::kinect());
    match builder.bake_tracked(&frame.as_view()) {
        Ok(bake) => println!(
            "user={} baked={} skipped={} latency_ms={:.3}",
            bake.report.user, bake.report.baked, bake.report.skipped, bake.report.elapsed_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}

fn standing_pose() -> BTreeMap<JointName, [f32; 3]> {
    use JointName::*;
    [
        (Head, [15.0, 600.0, 2000.0]),
        (Neck, [15.0, 450.0, 2000.0]),
        (Torso, [15.0, 250.0, 2000.0]),
        (LeftShoulder, [-165.0, 430.0, 2000.0]),
        (RightShoulder, [195.0, 430.0, 2000.0]),
        (LeftElbow, [-215.0, 180.0, 2000.0]),
        (RightElbow, [245.0, 180.0, 2000.0]),
        (LeftHand, [-235.0, -60.0, 2000.0]),
        (RightHand, [265.0, -60.0, 2000.0]),
        (LeftHip, [-85.0, 20.0, 2000.0]),
        (RightHip, [115.0, 20.0, 2000.0]),
        (LeftKnee, [-95.0, -380.0, 2000.0]),
        (RightKnee, [125.0, -380.0, 2000.0]),
        (LeftFoot, [-105.0, -780.0, 2000.0]),
        (RightFoot, [135.0, -780.0, 2000.0]),
    ]
    .into_iter()
    .collect()
}
