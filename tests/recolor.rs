#[cfg(test)]
mod recolor {
    use image::{Rgba, RgbaImage};
    use tint_rs::core::color::Color;
    use tint_rs::core::luma::luma;
    use tint_rs::core::recolor::recolor;

    /// Small image with varied RGB and a non-trivial alpha channel.
    fn gradient() -> RgbaImage {
        RgbaImage::from_fn(8, 6, |x, y| {
            Rgba([(x * 32) as u8, (y * 40) as u8, ((x + y) * 16) as u8, (x * 30) as u8])
        })
    }

    #[test]
    fn luma_endpoints() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        // BT.601: green dominates red dominates blue
        assert!(luma(0, 255, 0) > luma(255, 0, 0));
        assert!(luma(255, 0, 0) > luma(0, 0, 255));
    }

    #[test]
    fn dimensions_preserved() {
        let src = gradient();
        let out = recolor(&src, Color::new(10, 20, 30));
        assert_eq!(out.dimensions(), src.dimensions());
    }

    #[test]
    fn rgb_constant_equals_color() {
        let color = Color::new(10, 20, 30);
        let out = recolor(&gradient(), color);
        for px in out.pixels() {
            assert_eq!((px[0], px[1], px[2]), (color.r, color.g, color.b));
        }
    }

    #[test]
    fn alpha_is_inverted_luma() {
        let src = gradient();
        let out = recolor(&src, Color::new(200, 100, 50));
        for (s, o) in src.pixels().zip(out.pixels()) {
            assert_eq!(o[3], 255 - luma(s[0], s[1], s[2]));
        }
    }

    #[test]
    fn white_becomes_transparent() {
        let src = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        let out = recolor(&src, Color::new(77, 0, 200));
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn black_becomes_opaque() {
        let src = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        let out = recolor(&src, Color::new(77, 0, 200));
        assert!(out.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn source_alpha_is_ignored() {
        let opaque = RgbaImage::from_pixel(2, 2, Rgba([120, 60, 30, 255]));
        let translucent = RgbaImage::from_pixel(2, 2, Rgba([120, 60, 30, 7]));
        let a = recolor(&opaque, Color::default());
        let b = recolor(&translucent, Color::default());
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn alpha_independent_of_chosen_color() {
        let src = gradient();
        let a = recolor(&src, Color::new(0, 0, 0));
        let b = recolor(&src, Color::new(255, 128, 1));
        for (pa, pb) in a.pixels().zip(b.pixels()) {
            assert_eq!(pa[3], pb[3]);
        }
    }

    #[test]
    fn second_pass_collapses_alpha() {
        // The second application sees a uniform-color image, so every
        // alpha collapses to 255 − luma(c1). Expected, not a bug.
        let c1 = Color::new(10, 20, 30);
        let c2 = Color::new(200, 200, 200);
        let first = recolor(&gradient(), c1);
        let second = recolor(&first, c2);

        let collapsed = 255 - luma(c1.r, c1.g, c1.b);
        assert!(second.pixels().all(|p| p[3] == collapsed));

        // A single application over a non-uniform input does vary.
        let alphas: Vec<u8> = first.pixels().map(|p| p[3]).collect();
        assert!(alphas.iter().any(|&a| a != alphas[0]), "gradient should not produce constant alpha");
    }

    #[test]
    fn one_by_one_image() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([100, 150, 200, 255]));
        let out = recolor(&src, Color::new(1, 2, 3));
        assert_eq!(out.dimensions(), (1, 1));
        let p = out.get_pixel(0, 0);
        assert_eq!((p[0], p[1], p[2]), (1, 2, 3));
        assert_eq!(p[3], 255 - luma(100, 150, 200));
    }
}
