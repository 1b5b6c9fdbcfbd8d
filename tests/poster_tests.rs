mod common;

use common::pdf_assertions::{font_names, image_count, joined_text, shown_text};
use common::{GeneratedPdf, TestResult, init_logger, png_bytes};
use placard::layout::RegionRole;
use placard::{OutputFormat, PipelineError, PosterPipeline, Preset};
use placard_traits::InMemoryResourceProvider;
use std::sync::Arc;

fn no_images() -> Arc<InMemoryResourceProvider> {
    Arc::new(InMemoryResourceProvider::new())
}

#[test]
fn test_showcase_overflows_by_one_inch() -> TestResult {
    init_logger();
    let document = PosterPipeline::new(Preset::Showcase)
        .with_resources(no_images())
        .compose()?;

    assert_eq!(document.section_count(), 3);
    assert!((document.overflow() - 1.0).abs() < 1e-4);

    let xs: Vec<f32> = document
        .regions()
        .filter(|r| r.role == RegionRole::SectionBackground)
        .map(|r| r.rect.x)
        .collect();
    assert_eq!(xs, vec![1.0, 17.0, 33.0]);
    Ok(())
}

#[test]
fn test_capstone_fits_exactly() -> TestResult {
    let document = PosterPipeline::new(Preset::Capstone)
        .with_resources(no_images())
        .compose()?;

    assert_eq!(document.overflow(), 0.0);
    let backgrounds: Vec<_> = document
        .regions()
        .filter(|r| r.role == RegionRole::SectionBackground)
        .collect();
    assert_eq!(backgrounds.len(), 3);
    for background in backgrounds {
        assert_eq!(background.rect.y, 7.0);
        assert_eq!(background.rect.height, 26.0);
    }

    let bands: Vec<_> = document.bands().collect();
    for (i, a) in bands.iter().enumerate() {
        for b in &bands[i + 1..] {
            assert!(!a.rect.overlaps(&b.rect));
        }
    }
    Ok(())
}

#[test]
fn test_showcase_pdf_contains_poster_text() -> TestResult {
    init_logger();
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("NextStep_Poster.pdf");

    let saved = PosterPipeline::new(Preset::Showcase)
        .with_resources(no_images())
        .with_output(&output)
        .run()?;
    assert_eq!(saved, output);

    let pdf = GeneratedPdf::from_file(&saved)?;
    assert_eq!(pdf.page_count(), 1);

    let shown = shown_text(&pdf.doc);
    assert!(shown.iter().any(|s| s == "NEXTSTEP: Swipe-Based Job Matching App"));
    assert!(shown.iter().any(|s| s == "Security & Optimization"));
    assert!(shown.iter().any(|s| s == "• End-to-end encryption"));
    assert!(shown.iter().any(|s| s == "[INSERT ABOUT_NEXTSTEP.PNG IMAGE HERE]"));

    let text = joined_text(&pdf.doc);
    assert!(text.contains("Contact: info@nextstep4.com"));
    assert!(text.contains("swipe-based interface"));

    let fonts = font_names(&pdf.doc);
    assert!(fonts.contains("Helvetica"));
    assert!(fonts.contains("Helvetica-Bold"));
    assert!(fonts.contains("Helvetica-Oblique"));
    assert_eq!(image_count(&pdf.doc), 0);
    Ok(())
}

#[test]
fn test_showcase_embeds_available_images() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("about_nextstep.png"), png_bytes(26, 13))?;
    std::fs::write(dir.path().join("signup_screen.png"), png_bytes(10, 20))?;
    let output = dir.path().join("poster.pdf");

    let pipeline = PosterPipeline::new(Preset::Showcase)
        .with_assets_dir(dir.path())
        .with_output(&output);
    let document = pipeline.compose()?;
    assert_eq!(document.images().count(), 2);

    pipeline.run()?;
    let pdf = GeneratedPdf::from_file(&output)?;
    assert_eq!(image_count(&pdf.doc), 2);
    Ok(())
}

#[test]
fn test_only_present_images_are_placed() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("signup_screen.png"), png_bytes(10, 20))?;

    let document = PosterPipeline::new(Preset::Showcase)
        .with_assets_dir(dir.path())
        .compose()?;
    let images: Vec<_> = document.images().collect();

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].source.as_str(), "signup_screen.png");
    assert_eq!(images[0].section, 1);
    assert_eq!((images[0].x, images[0].y, images[0].width), (18.0, 15.0, 13.0));
    Ok(())
}

#[test]
fn test_capstone_pdf_uses_uniform_text() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("NextStep_Poster_Final.pdf");
    PosterPipeline::new(Preset::Capstone)
        .with_resources(no_images())
        .with_output(&output)
        .run()?;

    let pdf = GeneratedPdf::from_file(&output)?;
    let shown = shown_text(&pdf.doc);
    assert!(shown.iter().any(|s| s == "PENN STATE CAPSTONE 2025"));
    assert!(shown.iter().any(|s| s == "Key Innovation Points:"));
    assert!(shown.iter().any(|s| s == "• 95% pages load < 2 seconds"));
    Ok(())
}

#[test]
fn test_json_output() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("NextStep_Poster.json");
    PosterPipeline::new(Preset::Showcase)
        .with_resources(no_images())
        .with_format(OutputFormat::Json)
        .with_output(&output)
        .run()?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(value["sectionCount"], 3);
    assert_eq!(value["overflow"], 1.0);

    let roles: Vec<&str> = value["elements"]
        .as_array()
        .ok_or("elements is not an array")?
        .iter()
        .filter_map(|e| e["role"].as_str())
        .collect();
    assert_eq!(roles.first(), Some(&"header"));
    assert_eq!(roles.last(), Some(&"footer"));
    assert_eq!(roles.iter().filter(|r| **r == "section-background").count(), 3);
    Ok(())
}

#[test]
fn test_theme_file_overrides_preset() -> TestResult {
    let dir = tempfile::tempdir()?;
    let theme = dir.path().join("theme.json");
    std::fs::write(
        &theme,
        r##"{ "columns": { "width": "fill", "spacing": 1.5, "margin": 0 } }"##,
    )?;

    let document = PosterPipeline::new(Preset::Showcase)
        .with_resources(no_images())
        .with_theme_file(&theme)?
        .compose()?;

    assert_eq!(document.overflow(), 0.0);
    for background in document
        .regions()
        .filter(|r| r.role == RegionRole::SectionBackground)
    {
        assert!((background.rect.width - 15.0).abs() < 1e-4);
    }
    Ok(())
}

#[test]
fn test_invalid_theme_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("theme.json");
    std::fs::write(&theme, r#"{ "header": { "height": -1 } }"#).unwrap();

    let err = PosterPipeline::new(Preset::Showcase)
        .with_theme_file(&theme)
        .unwrap_err();
    assert!(matches!(err, PipelineError::Theme(_)));
}

#[test]
fn test_composition_is_deterministic() -> TestResult {
    let pipeline = PosterPipeline::new(Preset::Showcase).with_resources(no_images());
    assert_eq!(pipeline.compose()?, pipeline.compose()?);
    Ok(())
}
