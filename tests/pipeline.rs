use std::path::Path;

use pixdiff::codec::{load, save};
use pixdiff::pipeline::{run, DiffConfig};
use pixdiff::raster::{PixelBuffer, Rgba};
use pixdiff::PixelError;

fn config_in(dir: &Path) -> DiffConfig {
    DiffConfig {
        base: dir.join("small.png"),
        target: dir.join("full.png"),
        mask_output: dir.join("diffmask.png"),
        applied_output: dir.join("diffapplied.png"),
    }
}

fn checker(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba::new(250, 10, 128, 255)
        } else {
            Rgba::new(3, 200, 64, 40)
        }
    })
}

fn ramp(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(w, h, |x, y| Rgba::new((x * 9) as u8, (y * 13) as u8, 77, 255))
}

#[test]
fn writes_mask_and_reconstruction() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    save(&cfg.base, &checker(5, 4)).unwrap();
    save(&cfg.target, &ramp(10, 8)).unwrap();

    let out = run(&cfg).unwrap();

    let mask = load(&cfg.mask_output).unwrap();
    let applied = load(&cfg.applied_output).unwrap();
    assert_eq!(mask, out.diff);
    assert_eq!(applied, out.applied);
    assert_eq!(mask.dimensions(), (10, 8));

    let target = ramp(10, 8);
    for (got, want) in applied.pixels().iter().zip(target.pixels()) {
        assert_eq!((got.r, got.g, got.b, got.a), (want.r, want.g, want.b, 255));
    }
    assert!(mask.pixels().iter().all(|p| p.a == 255));
    assert_eq!(out.summary.total_pixels, 80);
}

#[test]
fn identical_inputs_give_empty_mask() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    save(&cfg.base, &ramp(6, 6)).unwrap();
    save(&cfg.target, &ramp(6, 6)).unwrap();

    let out = run(&cfg).unwrap();

    assert_eq!(out.summary.changed_pixels, 0);
    assert!(out.diff.pixels().iter().all(|&p| p == Rgba::new(0, 0, 0, 255)));
}

#[test]
fn larger_base_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    save(&cfg.base, &ramp(8, 8)).unwrap();
    save(&cfg.target, &ramp(4, 8)).unwrap();

    let err = run(&cfg).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PixelError>(),
        Some(PixelError::SizeConstraint { .. })
    ));
    assert!(!cfg.mask_output.exists());
    assert!(!cfg.applied_output.exists());
}

#[test]
fn missing_input_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    save(&cfg.target, &ramp(4, 4)).unwrap();

    let err = run(&cfg).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PixelError>(),
        Some(PixelError::Io { .. })
    ));
    assert!(!cfg.mask_output.exists());
}
