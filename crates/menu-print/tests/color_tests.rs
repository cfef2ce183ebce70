use menu_print::color::*;

#[test]
fn test_hex_to_rgb_accepts_both_forms() {
    assert_eq!(hex_to_rgb("#FF6B35"), Some(Rgb::new(255, 107, 53)));
    assert_eq!(hex_to_rgb("ff6b35"), Some(Rgb::new(255, 107, 53)));
    assert_eq!(hex_to_rgb("#fF6b35"), Some(Rgb::new(255, 107, 53)));
}

#[test]
fn test_hex_to_rgb_rejects_other_shapes() {
    for bad in ["", "#", "#FFF", "#GG0000", "##FF6B35", "#FF6B35 ", "FF6B3", "#FF6B3500", "é12345"] {
        assert_eq!(hex_to_rgb(bad), None, "{:?} should not parse", bad);
    }
}

#[test]
fn test_rgb_to_cmyk_known_values() {
    assert_eq!(rgb_to_cmyk(Rgb::BLACK), Cmyk::PURE_BLACK);
    assert_eq!(rgb_to_cmyk(Rgb::WHITE), Cmyk::WHITE);
    assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk::new(0, 100, 100, 0));
    assert_eq!(rgb_to_cmyk(Rgb::new(128, 128, 128)), Cmyk::new(0, 0, 0, 50));
    assert_eq!(rgb_to_cmyk(Rgb::new(255, 107, 53)), Cmyk::new(0, 58, 79, 0));
}

#[test]
fn test_rgb_to_cmyk_round_trip_within_tolerance() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let original = Rgb::new(r, g, b);
                let cmyk = rgb_to_cmyk(original);
                for channel in [cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                    assert!(channel <= 100);
                }

                let back = cmyk_to_rgb(cmyk);
                let diff = |a: u8, b: u8| (i16::from(a) - i16::from(b)).abs();
                assert!(
                    diff(back.r, r) <= 2 && diff(back.g, g) <= 2 && diff(back.b, b) <= 2,
                    "{} -> {} -> {}",
                    original,
                    cmyk,
                    back
                );
            }
        }
    }
}

#[test]
fn test_black_and_white_round_trip_exactly() {
    assert_eq!(cmyk_to_rgb(rgb_to_cmyk(Rgb::BLACK)), Rgb::BLACK);
    assert_eq!(cmyk_to_rgb(rgb_to_cmyk(Rgb::WHITE)), Rgb::WHITE);
}

#[test]
fn test_near_black_prints_as_pure_black() {
    for hex in ["#000000", "#1E1E1E", "#0A141E", "#1e001e"] {
        assert_eq!(cmyk_for_print(hex, false), Cmyk::PURE_BLACK, "{}", hex);
    }
}

#[test]
fn test_near_black_forced_rich_black() {
    for hex in ["#000000", "#1E1E1E", "#0A141E"] {
        assert_eq!(cmyk_for_print(hex, true), Cmyk::new(60, 40, 40, 100), "{}", hex);
    }
}

#[test]
fn test_just_above_threshold_is_converted() {
    // 31 in one channel is no longer near black
    assert_eq!(cmyk_for_print("#1F0000", false), Cmyk::new(0, 100, 100, 88));
    assert_eq!(cmyk_for_print("#1F0000", true), Cmyk::new(0, 100, 100, 88));
}

#[test]
fn test_unparseable_prints_as_black() {
    assert_eq!(cmyk_for_print("not a color", false), Cmyk::PURE_BLACK);
    assert_eq!(cmyk_for_print("#12", true), Cmyk::PURE_BLACK);
    assert_eq!(hex_to_cmyk("oops"), Cmyk::PURE_BLACK);
}

#[test]
fn test_print_conversion_of_regular_color() {
    assert_eq!(cmyk_for_print("#FF6B35", false), Cmyk::new(0, 58, 79, 0));
    assert_eq!(cmyk_for_print("#FFFFFF", true), Cmyk::WHITE);
}

#[test]
fn test_hex_helpers() {
    assert_eq!(rgb_to_hex(Rgb::new(255, 107, 53)), "#ff6b35");
    assert_eq!(rgb_to_hex(Rgb::new(0, 10, 255)), "#000aff");
    assert_eq!(cmyk_to_hex(Cmyk::PURE_BLACK), "#000000");
    assert_eq!(cmyk_to_hex(Cmyk::WHITE), "#ffffff");
}

#[test]
fn test_cmyk_fractions() {
    assert_eq!(Cmyk::RICH_BLACK.fractions(), [0.6, 0.4, 0.4, 1.0]);
}
