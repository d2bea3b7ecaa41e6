//! Domain-critical regression tests for color-engine.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use crate::{
        classify, composite, distance, generate, legible_text_color, BlendMode, Catalog,
        CatalogEntry, HarmonyScheme, Hsv, Query, Rgb,
    };

    // ========================================================================
    // GAP 1: Truncation, not rounding
    // ========================================================================

    /// If this breaks, it means: some float-to-integer conversion started
    /// rounding instead of truncating toward zero. Rounding shifts every
    /// composite and harmony output by up to one unit per channel, which
    /// silently changes stored swatch values everywhere downstream.
    #[test]
    fn test_normal_blend_truncates_half_channel() {
        // 255 * 0.5 = 127.5; truncation gives 127, rounding would give 128
        let c = composite(
            Rgb::new(255, 0, 0),
            Rgb::new(0, 0, 255),
            BlendMode::Normal,
            0.5,
        );
        assert_eq!(
            c,
            Rgb::new(127, 0, 127),
            "REGRESSION: normal blend of pure red and pure blue at 0.5 must \
             truncate to (127, 0, 127), got {c:?}"
        );
    }

    /// If this breaks, it means: HSV -> RGB conversion started rounding.
    /// v*255 = 128.52 must come out as channel 128, not 129.
    #[test]
    fn test_hsv_to_rgb_truncates() {
        let c = Hsv::new(0.0, 0.0, 128.52 / 255.0).to_rgb();
        assert_eq!(c, Rgb::new(128, 128, 128));
    }

    // ========================================================================
    // GAP 2: Overlay comparison-channel convention
    // ========================================================================

    /// If this breaks, it means: overlay switched from branching on the
    /// base color's channel to branching on the blend color's channel.
    /// The two conventions agree only for gray-symmetric pairs, so this
    /// pair is chosen to separate them: base dark (multiply arm), blend
    /// bright.
    #[test]
    fn test_overlay_branches_on_base_channel() {
        let base = Rgb::new(50, 50, 50); // every channel < 128
        let blend = Rgb::new(200, 200, 200); // every channel >= 128

        // Base convention, multiply arm: 2*50*200/255 = 78
        let c = composite(base, blend, BlendMode::Overlay, 0.5);
        assert_eq!(
            c,
            Rgb::new(78, 78, 78),
            "REGRESSION: overlay must branch on the base (first) channel; \
             branching on the blend channel would give the screen arm \
             (255 - 2*205*55/255 = 167)"
        );

        // And swapped operands take the screen arm
        let swapped = composite(blend, base, BlendMode::Overlay, 0.5);
        assert_eq!(swapped, Rgb::new(167, 167, 167));
    }

    // ========================================================================
    // GAP 3: Exact hex round trip
    // ========================================================================

    /// If this breaks, it means: hex formatting or parsing lost precision
    /// (e.g. a float crept into the codec path). The hex round trip is
    /// the one conversion guaranteed to be exact for every 8-bit triple.
    #[test]
    fn test_hex_round_trip_is_exact_everywhere() {
        for r in (0u16..=255).step_by(17) {
            for g in (0u16..=255).step_by(51) {
                for b in (0u16..=255).step_by(85) {
                    let c = Rgb::new(r as u8, g as u8, b as u8);
                    let back: Rgb = c.to_hex().parse().unwrap();
                    assert_eq!(back, c);
                }
            }
        }
    }

    /// If this breaks, it means: 3-digit shorthand expansion changed.
    /// `#abc` must mean `#aabbcc` (digit duplication), not zero padding.
    #[test]
    fn test_shorthand_hex_expands_by_duplication() {
        let c: Rgb = "#abc".parse().unwrap();
        assert_eq!(c, Rgb::new(0xaa, 0xbb, 0xcc));
    }

    // ========================================================================
    // GAP 4: Similarity tie-break stability
    // ========================================================================

    /// If this breaks, it means: the ranking sort stopped being stable
    /// (or the sort key picked up float noise), so equidistant catalog
    /// entries no longer come back in catalog order. Downstream snapshots
    /// of "closest named color" depend on this order.
    #[test]
    fn test_equidistant_entries_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("East", Rgb::new(110, 100, 100)),
            CatalogEntry::new("West", Rgb::new(90, 100, 100)),
            CatalogEntry::new("North", Rgb::new(100, 110, 100)),
        ]);
        let ranked = catalog.find_similar(Rgb::new(100, 100, 100), 3);
        let names: Vec<&str> = ranked.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["East", "West", "North"],
            "REGRESSION: all three entries are at distance 10; the result \
             must preserve catalog order"
        );
    }

    /// Sanity companion: sqrt ordering and integer ordering agree.
    #[test]
    fn test_distance_matches_ranking() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Near", Rgb::new(10, 0, 0)),
            CatalogEntry::new("Far", Rgb::new(0, 200, 0)),
        ]);
        let ranked = catalog.find_similar(Rgb::BLACK, 2);
        assert!(distance(Rgb::BLACK, ranked[0].rgb()) <= distance(Rgb::BLACK, ranked[1].rgb()));
    }

    // ========================================================================
    // GAP 5: Harmony invariants
    // ========================================================================

    /// If this breaks, it means: hue arithmetic stopped wrapping modulo
    /// 1.0, so schemes applied to high-hue bases walk off the wheel. A
    /// magenta-ish base pushes every square offset past 1.0.
    #[test]
    fn test_square_wraps_around_the_wheel() {
        let base = Hsv::new(0.9, 1.0, 1.0).to_rgb();
        let palette = generate(base, HarmonyScheme::Square, None);
        assert_eq!(palette.len(), 4);
        for pair in palette.windows(2) {
            let a = Hsv::from(pair[0]).h;
            let b = Hsv::from(pair[1]).h;
            let d = (b - a).rem_euclid(1.0);
            assert!(
                (d - 0.25).abs() < 0.01,
                "consecutive square hues must be 0.25 turn apart, got {d}"
            );
        }
    }

    /// If this breaks, it means: the monochromatic sweep lost its value
    /// floor and produced a pure-black (degenerate) swatch for dark bases.
    #[test]
    fn test_monochromatic_never_degenerates_to_black() {
        let near_black = Rgb::new(3, 2, 4);
        for c in generate(near_black, HarmonyScheme::Monochromatic, Some(7))
            .iter()
            .skip(1)
        {
            assert_ne!(*c, Rgb::BLACK, "swept swatch collapsed to pure black");
            assert!(Hsv::from(*c).v >= 0.09, "value floor violated: {c:?}");
        }
    }

    // ========================================================================
    // GAP 6: Classifier routing order
    // ========================================================================

    /// If this breaks, it means: classification order changed. Text that
    /// is simultaneously a plausible name and a valid bare hex string
    /// ("facade") must take the hex reading, and malformed literals must
    /// error rather than degrade into name queries.
    #[test]
    fn test_classifier_precedence_and_failure_mode() {
        assert_eq!(
            classify("facade").unwrap(),
            Query::Hex(Rgb::new(0xfa, 0xca, 0xde))
        );
        assert!(classify("#facad").is_err());
        assert!(classify("rgb(0, 0, 999)").is_err());
        assert_eq!(classify("salmon").unwrap(), Query::Name("salmon".into()));
    }

    // ========================================================================
    // GAP 7: Contrast poles
    // ========================================================================

    /// If this breaks, it means: the brightness threshold or the luma
    /// weights changed. Mid-gray (128) sits just above 0.5 and must take
    /// black text; 127 must take white.
    #[test]
    fn test_contrast_threshold_boundary() {
        assert_eq!(legible_text_color(Rgb::new(128, 128, 128)), Rgb::BLACK);
        assert_eq!(legible_text_color(Rgb::new(127, 127, 127)), Rgb::WHITE);
    }
}
