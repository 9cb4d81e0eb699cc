// File: crates/highlow-core/tests/smoke.rs
// Purpose: End-to-end scene building: structure, styling, idempotence and markup.

mod common;

use common::{feed, quote, usd_session};
use highlow_core::scene::{Node, PathNode, RectNode};
use highlow_core::theme::Color;
use highlow_core::{build_scene, ChartError, ChartPlan, RenderOptions, ScaleTransform, Theme};

fn rects(scene: &highlow_core::VectorScene) -> Vec<RectNode> {
    scene
        .root
        .find_class("bands")
        .expect("bands group")
        .children
        .iter()
        .filter_map(|n| match n {
            Node::Rect(r) => Some(r.clone()),
            _ => None,
        })
        .collect()
}

fn curve(scene: &highlow_core::VectorScene, class: &str) -> PathNode {
    match scene.root.find_class(class).expect("curve group").children.first() {
        Some(Node::Path(p)) => p.clone(),
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn render_is_idempotent() {
    let opts = RenderOptions::default();
    let plan = ChartPlan::build(&usd_session(), "USD", &opts).expect("plan");
    let a = plan.render(&opts);
    let b = plan.render(&opts);
    assert_eq!(a, b);
    assert_eq!(a.to_svg(), b.to_svg());
}

#[test]
fn bands_alternate_from_accent_at_top() {
    let opts = RenderOptions::default();
    let plan = ChartPlan::build(&usd_session(), "USD", &opts).expect("plan");
    let scene = plan.render(&opts);
    let bands = rects(&scene);
    assert!(bands.len() >= 2);

    let theme = Theme::default();
    let (last, full) = bands.split_last().expect("bands");
    for (i, band) in bands.iter().enumerate() {
        let want = if i % 2 == 0 { theme.band } else { Color::TRANSPARENT };
        assert_eq!(band.fill, want, "band {i}");
        assert_eq!(band.width, opts.config.draw_width());
    }
    assert!(full.iter().all(|b| b.height == 15.0));
    assert!(last.height > 0.0 && last.height <= 15.0);
    assert!(bands.windows(2).all(|w| (w[1].y - w[0].y - 15.0).abs() < 1e-9));
}

#[test]
fn bands_span_exactly_from_max_ask_to_min_bid() {
    let opts = RenderOptions::default();
    let plan = ChartPlan::build(&usd_session(), "USD", &opts).expect("plan");
    let bands = rects(&plan.render(&opts));

    let top = plan.scales.price.to_px(plan.scales.max_ask());
    let bottom = plan.scales.price.to_px(plan.scales.min_bid());
    let first = bands.first().expect("first band");
    let last = bands.last().expect("last band");
    assert!((first.y - top).abs() < 1e-9);
    assert!((last.y + last.height - bottom).abs() < 1e-9, "last band ends at {} not {bottom}", last.y + last.height);
    // 136.71875 px of price range: nine full bands and a 1.71875 px remainder.
    assert_eq!(bands.len(), 10);
    assert!((last.height - 1.71875).abs() < 1e-9);
}

#[test]
fn curves_are_styled_and_follow_series() {
    let opts = RenderOptions::default();
    let scene = build_scene(&usd_session(), "USD", &opts).expect("scene");

    let ask = curve(&scene, "ask");
    let bid = curve(&scene, "bid");
    assert_eq!(ask.fill, None);
    assert_eq!(ask.stroke.map(|s| s.color.to_css()), Some("#7cb5ec".to_string()));
    assert_eq!(bid.stroke.map(|s| s.color.to_css()), Some("#f7a35c".to_string()));
    assert_eq!(ask.stroke.map(|s| s.width), Some(2.0));

    // 7 points: move, lead-in line, 6 cubic segments, closing line.
    assert_eq!(ask.data.commands().len(), 9);
    assert!(ask.data.to_svg_d().starts_with("M0,"));
}

#[test]
fn axes_carry_expected_ticks() {
    let opts = RenderOptions::default();
    let scene = build_scene(&usd_session(), "USD", &opts).expect("scene");
    let svg = scene.to_svg();

    let x = scene.root.find_class("x-axis").expect("x axis");
    let y = scene.root.find_class("y-axis").expect("y axis");
    assert_eq!(x.translate, Some((0.0, 175.0)));
    assert_eq!(x.children.iter().filter(|n| matches!(n, Node::Group(_))).count(), 5);
    assert_eq!(y.children.len(), 6, "no domain path on the y axis");
    assert!(y.descendants().iter().all(|n| !matches!(n, Node::Line(_))), "y axis has no tick marks");

    assert!(svg.contains(">JAN02</text>"));
    assert!(svg.contains(">29.80</text>"));
    assert!(svg.contains(">30.50</text>"));
    assert!(svg.contains(r##"stroke="#d8d8d8""##));
    assert!(svg.contains("<title>USD Exchange Rate</title>"));
}

#[test]
fn legend_is_optional_and_extends_canvas() {
    let mut opts = RenderOptions::default();
    let plain = build_scene(&usd_session(), "USD", &opts).expect("scene");
    assert!(plain.root.find_class("legend").is_none());
    assert_eq!((plain.width, plain.height), (425, 200));

    opts.legend = true;
    let with_legend = build_scene(&usd_session(), "USD", &opts).expect("scene");
    assert!(with_legend.root.find_class("legend").is_some());
    assert_eq!(with_legend.height, 216);
    let svg = with_legend.to_svg();
    assert!(svg.contains(">Sell</text>") && svg.contains(">Buy</text>"));
}

#[test]
fn single_quote_still_renders_with_height() {
    let f = feed(vec![vec![quote("USD", "2020-01-02 09:00:00", 30.0, 29.5)]]);
    let scene = build_scene(&f, "USD", &RenderOptions::default()).expect("scene");
    assert!(!rects(&scene).is_empty());
    assert!(curve(&scene, "ask").data.to_svg_d().ends_with('Z'));
}

#[test]
fn missing_code_is_empty_dataset() {
    let err = build_scene(&usd_session(), "EUR", &RenderOptions::default()).expect_err("no EUR");
    assert!(matches!(err, ChartError::EmptyDataset { .. }));
}
