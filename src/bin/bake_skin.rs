//! Batch tool: bakes one skin atlas per configured job.
//!
//! For each job the tool
//! 1. loads the colour frame and skeleton snapshot,
//! 2. bakes the requested (or first tracked) user,
//! 3. writes the atlas PNG, optionally keyed and with an accessory overlay,
//! 4. optionally writes a JSON report and a debug frame (subject mask and
//!    joint markers).
//!
//! Jobs are independent and run in parallel.

use rayon::prelude::*;
use serde::Serialize;
use skin_baker::config::bake::{load_config, BakeJob, BakeToolConfig};
use skin_baker::debug::{draw_joint_markers, segment_user};
use skin_baker::diagnostics::TimingBreakdown;
use skin_baker::image::compose::{overlay_accessory, to_rgba};
use skin_baker::image::io::{
    load_label_map, load_rgb_image, load_rgba_image, save_rgb_image, save_rgba_image,
    write_json_file,
};
use skin_baker::skeleton::{first_tracked_user, load_snapshot};
use skin_baker::{BakeError, BakeReport, SkinAtlasBuilder};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let accessory = match &config.post.accessory {
        Some(acc) => Some((load_rgba_image(&acc.path)?, acc.offset)),
        None => None,
    };

    let outcomes: Vec<Result<JobOutcome, String>> = config
        .jobs
        .par_iter()
        .map(|job| run_job(&config, job, accessory.as_ref()))
        .collect();

    let mut failed = 0usize;
    for (job, outcome) in config.jobs.iter().zip(outcomes) {
        match outcome {
            Ok(JobOutcome::Baked { baked, skipped }) => println!(
                "Saved atlas to {} ({baked} regions baked, {skipped} skipped)",
                job.output.atlas.display()
            ),
            Ok(JobOutcome::NothingTracked) => {
                println!("No tracked user in {}, nothing baked", job.frame.display())
            }
            Err(err) => {
                eprintln!("Job {} failed: {err}", job.frame.display());
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{failed} of {} jobs failed", config.jobs.len()));
    }
    Ok(())
}

enum JobOutcome {
    Baked { baked: usize, skipped: usize },
    NothingTracked,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobReport<'a> {
    frame: String,
    bake: &'a BakeReport,
    timing: TimingBreakdown,
}

fn run_job(
    config: &BakeToolConfig,
    job: &BakeJob,
    accessory: Option<&(image::RgbaImage, (u32, u32))>,
) -> Result<JobOutcome, String> {
    let mut timing = TimingBreakdown::default();
    let frame = timing.time("load_frame", || load_rgb_image(&job.frame))?;
    let snapshot = timing.time("load_skeleton", || load_snapshot(&job.skeleton))?;

    let builder = SkinAtlasBuilder::with_options(
        &snapshot,
        config.camera.projector(),
        config.options.clone(),
    );
    let user = match job.user {
        Some(user) => user,
        None => match first_tracked_user(&snapshot) {
            Ok(user) => user,
            Err(BakeError::NoTrackedUser) => {
                log::warn!("{}: no tracked user", job.frame.display());
                return Ok(JobOutcome::NothingTracked);
            }
            Err(err) => return Err(err.to_string()),
        },
    };

    let bake = timing
        .time("bake", || builder.bake(&frame.as_view(), user))
        .map_err(|e| e.to_string())?;

    timing.time("save_atlas", || {
        if config.post.transparent_black || accessory.is_some() {
            let mut rgba = to_rgba(bake.atlas.buffer(), config.post.transparent_black);
            if let Some((hat, offset)) = accessory {
                overlay_accessory(&mut rgba, hat, *offset);
            }
            save_rgba_image(&rgba, &job.output.atlas)
        } else {
            save_rgb_image(bake.atlas.buffer(), &job.output.atlas)
        }
    })?;

    if let Some(path) = &job.output.debug_frame {
        let mut debug = frame.clone();
        if let Some(labels_path) = &job.labels {
            let labels = load_label_map(labels_path)?;
            segment_user(&mut debug, &labels, user).map_err(|e| e.to_string())?;
        }
        draw_joint_markers(&mut debug, builder.sampler(), user);
        save_rgb_image(&debug, path)?;
    }

    if let Some(path) = &job.output.report {
        let report = JobReport {
            frame: job.frame.display().to_string(),
            bake: &bake.report,
            timing,
        };
        write_json_file(path, &report)?;
    }

    Ok(JobOutcome::Baked {
        baked: bake.report.baked,
        skipped: bake.report.skipped,
    })
}

fn usage() -> String {
    "Usage: bake_skin <config.json>".to_string()
}
