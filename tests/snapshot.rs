//! Checks every stage of the pipeline against reference values for a 6x6x6 cube of sRGB colors
//! (every combination of 00, 33, 66, 99, CC and FF per channel).

#[macro_use]
extern crate serde_derive;

use scarlet_hsluv::color::{Color, RGBColor, XYZColor};
use scarlet_hsluv::colors::{CIELCHuvColor, CIELUVColor, HPLuvColor, HSLuvColor};
use scarlet_hsluv::{hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};

const SNAPSHOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/snapshot.csv");
const TOLERANCE: f64 = 1e-8;

#[derive(Debug, Deserialize)]
struct Record {
    hex: String,
    xyz_x: f64,
    xyz_y: f64,
    xyz_z: f64,
    luv_l: f64,
    luv_u: f64,
    luv_v: f64,
    lch_l: f64,
    lch_c: f64,
    lch_h: f64,
    hsluv_h: f64,
    hsluv_s: f64,
    hsluv_l: f64,
    hpluv_h: f64,
    hpluv_s: f64,
    hpluv_l: f64,
}

fn read_snapshot() -> Vec<Record> {
    let mut reader = csv::Reader::from_path(SNAPSHOT).expect("snapshot fixture is readable");
    reader
        .deserialize()
        .map(|result| result.expect("snapshot rows are well-formed"))
        .collect()
}

fn assert_close(stage: &str, hex: &str, actual: [f64; 3], expected: [f64; 3]) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() <= TOLERANCE,
            "{} of {}: got {:?}, expected {:?}",
            stage,
            hex,
            actual,
            expected
        );
    }
}

#[test]
fn snapshot_has_every_cube_color() {
    let records = read_snapshot();
    assert_eq!(records.len(), 216);
    assert_eq!(records[0].hex, "#000000");
    assert_eq!(records[215].hex, "#ffffff");
}

#[test]
fn forward_stages_match_snapshot() {
    for rec in read_snapshot() {
        let rgb = RGBColor::from_hex_code(&rec.hex).unwrap();
        let xyz = rgb.to_xyz();
        assert_close("xyz", &rec.hex, [xyz.x, xyz.y, xyz.z], [rec.xyz_x, rec.xyz_y, rec.xyz_z]);
        let luv = CIELUVColor::from_xyz(xyz);
        assert_close("luv", &rec.hex, [luv.l, luv.u, luv.v], [rec.luv_l, rec.luv_u, rec.luv_v]);
        let lch = CIELCHuvColor::from(luv);
        assert_close("lch", &rec.hex, [lch.l, lch.c, lch.h], [rec.lch_l, rec.lch_c, rec.lch_h]);
        let hsluv: HSLuvColor = rgb.convert();
        assert_close(
            "hsluv",
            &rec.hex,
            [hsluv.h, hsluv.s, hsluv.l],
            [rec.hsluv_h, rec.hsluv_s, rec.hsluv_l],
        );
        let hpluv: HPLuvColor = rgb.convert();
        assert_close(
            "hpluv",
            &rec.hex,
            [hpluv.h, hpluv.s, hpluv.l],
            [rec.hpluv_h, rec.hpluv_s, rec.hpluv_l],
        );
    }
}

#[test]
fn backward_stages_match_snapshot() {
    for rec in read_snapshot() {
        let rgb = RGBColor::from_hex_code(&rec.hex).unwrap();
        let expected = [rgb.r, rgb.g, rgb.b];

        let lch = CIELCHuvColor {
            l: rec.lch_l,
            c: rec.lch_c,
            h: rec.lch_h,
        };
        let luv = CIELUVColor::from(lch);
        assert_close("lch->luv", &rec.hex, [luv.l, luv.u, luv.v], [rec.luv_l, rec.luv_u, rec.luv_v]);
        let xyz: XYZColor = luv.to_xyz();
        assert_close(
            "luv->xyz",
            &rec.hex,
            [xyz.x, xyz.y, xyz.z],
            [rec.xyz_x, rec.xyz_y, rec.xyz_z],
        );

        let (r, g, b) = hsluv_to_rgb(rec.hsluv_h, rec.hsluv_s, rec.hsluv_l);
        assert_close("hsluv->rgb", &rec.hex, [r, g, b], expected);
        let (r, g, b) = hpluv_to_rgb(rec.hpluv_h, rec.hpluv_s, rec.hpluv_l);
        assert_close("hpluv->rgb", &rec.hex, [r, g, b], expected);
    }
}

#[test]
fn triplet_functions_agree_with_types() {
    for rec in read_snapshot() {
        let rgb = RGBColor::from_hex_code(&rec.hex).unwrap();
        let (h, s, l) = rgb_to_hsluv(rgb.r, rgb.g, rgb.b);
        assert_close("rgb_to_hsluv", &rec.hex, [h, s, l], [rec.hsluv_h, rec.hsluv_s, rec.hsluv_l]);
        let hpluv = rgb_to_hpluv(rgb.r, rgb.g, rgb.b);
        let (h, s, l) = hpluv.hpluv;
        assert_close("rgb_to_hpluv", &rec.hex, [h, s, l], [rec.hpluv_h, rec.hpluv_s, rec.hpluv_l]);
        assert_eq!(
            hpluv.is_representable(),
            rec.hpluv_s >= 0. && rec.hpluv_s <= 100.,
            "representability of {}",
            rec.hex
        );
    }
}
