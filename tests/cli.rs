use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn julia() -> Command {
    Command::cargo_bin("julia").unwrap()
}

#[test]
fn requires_a_subcommand() {
    julia().assert().failure();
}

#[test]
fn rejects_malformed_sizes() {
    julia()
        .args(&["famous", "--size", "big"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse image size"));
}

#[test]
fn rejects_empty_sizes() {
    for size in &["0x8", "8x0", "0x0"] {
        julia()
            .args(&["gif", "-s", *size])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Image sides must be between 1 and 65535"));
    }
    julia()
        .args(&["live", "--size", "0x400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image sides must be between"));
}

#[test]
fn rejects_zero_iterations() {
    julia()
        .args(&["frames", "-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Iteration count must be between"));
}

#[test]
fn famous_writes_one_png_per_set() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["famous", "-s", "32x24", "-i", "20", "-t", "1", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating dragon Julia set: c = -0.7269+0.1889i",
        ))
        .stdout(predicate::str::contains("Saved julia_lightning.png"));

    for name in &["dragon", "rabbit", "cauliflower", "lightning"] {
        let path = dir.path().join(format!("julia_{}.png", name));
        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (32, 24));
    }
}

#[test]
fn frames_are_numbered_with_the_prefix() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["frames", "-s", "16x16", "-i", "10", "-n", "3", "-p", "spin", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame 1/3: c = 0.788+0.000i"))
        .stdout(predicate::str::contains("Frame 3/3"))
        .stdout(predicate::str::contains("Animation frames saved!"));

    for frame in 0..3 {
        assert!(dir
            .path()
            .join(format!("spin_frame_{:03}.png", frame))
            .exists());
    }
    assert!(!dir.path().join("spin_frame_003.png").exists());
}

#[test]
fn frames_can_follow_the_line() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["frames", "--line", "-s", "8x8", "-i", "10", "-n", "1", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame 1/1: c = -0.800+0.000i"));
}

#[test]
fn unwritable_frames_are_reported_and_skipped() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["frames", "-s", "8x8", "-i", "10", "-n", "2", "-o"])
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error saving julia_frame_000.png"))
        .stdout(predicate::str::contains("Error saving julia_frame_001.png"))
        .stdout(predicate::str::contains("Frame 2/2"));
}

#[test]
fn gif_is_a_single_looping_file() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["gif", "-s", "20x20", "-n", "4", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating animated Julia set GIF..."))
        .stdout(predicate::str::contains("Animated GIF saved as"));

    let file = std::fs::File::open(dir.path().join("julia_animation.gif")).unwrap();
    let mut decoder = gif::DecodeOptions::new().read_info(file).unwrap();
    let mut frames = 0;
    while decoder.read_next_frame().unwrap().is_some() {
        frames += 1;
    }
    assert_eq!(frames, 4);
}

#[test]
fn gif_reports_an_uncreatable_file() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["gif", "-s", "8x8", "-n", "2", "-o"])
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error creating GIF file:"));
}

#[test]
fn all_renders_the_famous_sets_then_the_frames() {
    let dir = tempdir().unwrap();
    julia()
        .args(&["all", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Julia Set Generator\n===================\n",
        ))
        .stdout(predicate::str::contains("Saved julia_cauliflower.png"))
        .stdout(predicate::str::contains("Frame 63/63: c = "))
        .stdout(predicate::str::ends_with(
            "\nDone! Check the generated PNG files.\n",
        ));

    for name in &["dragon", "rabbit", "cauliflower", "lightning"] {
        let image = image::open(dir.path().join(format!("julia_{}.png", name)))
            .unwrap()
            .to_rgb8();
        assert_eq!(image.dimensions(), (800, 800));
    }
    let last = image::open(dir.path().join("julia_frame_062.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(last.dimensions(), (400, 400));
    assert!(!dir.path().join("julia_frame_063.png").exists());
}
