//! Rendering scenarios: the SVG output carries one marker per node and one
//! connector per interaction, styled by semantic class.

use fibrogram::{PathwayRenderer, config::AppConfig, figures::Figure};

fn render(figure: Figure) -> String {
    let renderer = PathwayRenderer::default();
    renderer
        .render_svg(&figure.build())
        .unwrap_or_else(|err| panic!("{figure} failed to render: {err}"))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn pathogenesis_renders_all_markers_and_connectors() {
    let svg = render(Figure::Pathogenesis);

    // 21 node markers across the three shape classes
    assert_eq!(count(&svg, "class=\"node\""), 21);
    assert_eq!(count(&svg, "<polygon"), 4);
    assert_eq!(count(&svg, "<circle"), 14);

    // One connector per unique ordered pair, duplicates collapsed
    assert_eq!(count(&svg, "class=\"interaction\""), 30);
}

#[test]
fn pathogenesis_inhibitions_are_dashed() {
    let svg = render(Figure::Pathogenesis);

    // 5 inhibition connectors plus the legend's inhibition sample
    assert_eq!(count(&svg, "stroke-dasharray"), 6);
}

#[test]
fn pathogenesis_has_title_and_legend() {
    let svg = render(Figure::Pathogenesis);

    assert!(svg.contains("Comprehensive Interaction Diagram: Pulmonary Fibrosis Pathogenesis"));
    assert!(svg.contains("Activation (Upregulation)"));
    assert!(svg.contains("Inhibition (Downregulation)"));
}

#[test]
fn cascade_renders_the_chain() {
    let svg = render(Figure::Cascade);

    assert_eq!(count(&svg, "class=\"node\""), 8);
    assert_eq!(count(&svg, "class=\"interaction\""), 7);

    // 6 solid connectors, 1 dashed (the inhibitor edge); no legend
    assert_eq!(count(&svg, "stroke-dasharray"), 1);
    assert!(!svg.contains("Activation (Upregulation)"));

    // All markers are squares
    assert_eq!(count(&svg, "<polygon"), 0);
    assert_eq!(count(&svg, "<circle"), 0);
}

#[test]
fn marker_definitions_cover_both_heads_per_color() {
    for figure in Figure::all() {
        let svg = render(figure);

        // Two connector colors (black, red), each with a triangle and a bar head
        assert_eq!(count(&svg, "<marker "), 4, "{figure}");
        assert_eq!(count(&svg, "id=\"head-triangle-"), 2, "{figure}");
        assert_eq!(count(&svg, "id=\"head-bar-"), 2, "{figure}");
    }
}

#[test]
fn multiline_labels_render_as_tspans() {
    let svg = render(Figure::Cascade);

    // "Macrophage\nOveractivation" renders as two label lines
    assert!(svg.contains(">Macrophage</tspan>"));
    assert!(svg.contains(">Overactivation</tspan>"));
}

#[test]
fn rendering_is_deterministic() {
    for figure in Figure::all() {
        assert_eq!(render(figure), render(figure), "{figure}");
    }
}

#[test]
fn background_color_is_configurable() {
    // Deserialized the same way the CLI's TOML loader does it
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        background_color = "beige"
        "#,
    )
    .unwrap();

    let renderer = PathwayRenderer::new(config);
    let svg = renderer.render_svg(&Figure::Cascade.build()).unwrap();

    assert!(svg.contains("fill=\"beige\""));
}
