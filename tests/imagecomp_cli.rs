//! Integration tests for the `imagecomp` binary.
//!
//! These tests verify end-to-end behavior including:
//! - Usage hint with no arguments
//! - Fail-fast existence checks
//! - Scores for identical and differing images

use assert_cmd::cargo::cargo_bin_cmd;
use image::{GrayImage, Luma, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn save_gradient(path: &Path) {
    RgbImage::from_fn(24, 18, |x, y| Rgb([(x * 10) as u8, (y * 14) as u8, 90]))
        .save(path)
        .unwrap();
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    cargo_bin_cmd!("imagecomp")
        .assert()
        .success()
        .stdout("<image1> <image2>\n");
}

#[test]
fn missing_first_path_fails_without_decoding() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.png");
    // Not an image: decoding it would produce a different error
    let second = temp.path().join("garbage.png");
    std::fs::write(&second, b"garbage").unwrap();

    cargo_bin_cmd!("imagecomp")
        .arg(&missing)
        .arg(&second)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(format!("No found: {}\n", missing.display()));
}

#[test]
fn missing_second_path_fails() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    save_gradient(&first);
    let missing = temp.path().join("b.png");

    cargo_bin_cmd!("imagecomp")
        .arg(&first)
        .arg(&missing)
        .assert()
        .failure()
        .stderr(format!("No found: {}\n", missing.display()));
}

#[test]
fn identical_images_print_one() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    let second = temp.path().join("b.png");
    save_gradient(&first);
    save_gradient(&second);

    cargo_bin_cmd!("imagecomp")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("1.0\n");
}

#[test]
fn different_images_print_lower_score() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    let second = temp.path().join("b.png");
    save_gradient(&first);
    RgbImage::from_fn(24, 18, |x, y| {
        let v = ((x * 7919 + y * 104729) % 251) as u8;
        Rgb([v, 255 - v, v / 2])
    })
    .save(&second)
    .unwrap();

    let output = cargo_bin_cmd!("imagecomp")
        .arg(&first)
        .arg(&second)
        .arg("--parallel")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let score: f64 = String::from_utf8(output).unwrap().trim().parse().unwrap();
    assert!(score < 1.0);
    assert!(score >= -1.0);
}

#[test]
fn corrupt_image_fails() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    save_gradient(&first);
    let corrupt = temp.path().join("corrupt.png");
    std::fs::write(&corrupt, b"this is not a valid image file").unwrap();

    cargo_bin_cmd!("imagecomp")
        .arg(&first)
        .arg(&corrupt)
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt.png"));
}

#[test]
fn mismatched_sizes_fail() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    let second = temp.path().join("small.png");
    save_gradient(&first);
    GrayImage::from_pixel(10, 10, Luma([3])).save(&second).unwrap();

    cargo_bin_cmd!("imagecomp")
        .arg(&first)
        .arg(&second)
        .assert()
        .failure()
        .stderr(predicate::str::contains("same resolution"));
}

#[test]
fn extra_paths_are_rejected() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    save_gradient(&first);

    cargo_bin_cmd!("imagecomp")
        .arg(&first)
        .arg(&first)
        .arg(&first)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}
