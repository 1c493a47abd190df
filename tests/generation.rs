use wavecaptcha::{
    CaptchaError, CaptchaGenerator, Distortion, ImageOptions, OutputFormat, generate_code,
};

#[test]
fn test_default_jpeg_scenario() {
    let generator = CaptchaGenerator::new();
    let bytes = generator.generate("fEwS21").unwrap();

    assert!(!bytes.is_empty());
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 120);
    assert_eq!(decoded.height(), 48);
}

#[test]
fn test_custom_dimensions_roundtrip() {
    let generator = CaptchaGenerator::new();
    let opts = ImageOptions {
        width: 250,
        height: 135,
        font_size: 23,
        format: OutputFormat::Png,
        ..ImageOptions::default()
    };

    let bytes = generator.generate_with("fEwS21", &opts).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 250);
    assert_eq!(decoded.height(), 135);
}

#[test]
fn test_legacy_preset_dimensions() {
    let generator = CaptchaGenerator::new();
    let bytes = generator
        .generate_with("fEwS21", &ImageOptions::legacy())
        .unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 150);
    assert_eq!(decoded.height(), 96);
}

#[test]
fn test_all_formats_encode_and_decode() {
    let generator = CaptchaGenerator::new();
    for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
        let opts = ImageOptions {
            format,
            ..ImageOptions::default()
        };
        let bytes = generator.generate_with("abc123", &opts).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 120, "width mismatch for {format:?}");
        assert_eq!(decoded.height(), 48, "height mismatch for {format:?}");
    }
}

#[test]
fn test_fixed_mode_needs_no_randomness_for_the_warp() {
    let generator = CaptchaGenerator::new();
    let opts = ImageOptions {
        distortion: Distortion::Fixed(12.0),
        noise: false,
        format: OutputFormat::Png,
        ..ImageOptions::default()
    };

    // Without the noise pass the whole pipeline is deterministic, so two
    // plain calls must agree byte for byte.
    let first = generator.generate_with("abc123", &opts).unwrap();
    let second = generator.generate_with("abc123", &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validation_precedes_generation() {
    let generator = CaptchaGenerator::new();

    let opts = ImageOptions {
        height: 0,
        ..ImageOptions::default()
    };
    assert!(matches!(
        generator.generate_with("abc", &opts),
        Err(CaptchaError::InvalidDimensions { .. })
    ));

    let opts = ImageOptions {
        quality: 101,
        ..ImageOptions::default()
    };
    assert!(matches!(
        generator.generate_with("abc", &opts),
        Err(CaptchaError::InvalidQuality(101))
    ));

    let opts = ImageOptions {
        distortion: Distortion::Randomized(f64::NAN),
        ..ImageOptions::default()
    };
    assert!(matches!(
        generator.generate_with("abc", &opts),
        Err(CaptchaError::InvalidDistortion(_))
    ));
}

#[test]
fn test_code_generation_contract() {
    let code = generate_code(6).unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    assert!(matches!(
        generate_code(-2),
        Err(CaptchaError::InvalidCodeLength(-2))
    ));
}

#[test]
fn test_generator_is_shareable_across_threads() {
    use std::sync::Arc;

    let generator = Arc::new(CaptchaGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || {
                let code = format!("code{i}");
                generator.generate(&code).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let bytes = handle.join().unwrap();
        assert!(!bytes.is_empty());
    }
}

#[test]
fn test_data_url_is_decodable() {
    use base64::{Engine, engine::general_purpose::STANDARD};

    let generator = CaptchaGenerator::new();
    let opts = ImageOptions {
        format: OutputFormat::Png,
        ..ImageOptions::default()
    };
    let url = generator.data_url("abc123", &opts).unwrap();

    let payload = url.strip_prefix("data:image/png;base64,").unwrap();
    let bytes = STANDARD.decode(payload).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 120);
}
