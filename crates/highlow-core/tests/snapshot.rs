// File: crates/highlow-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Builds the USD session chart and serializes it to SVG markup.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares the markup against the snapshot for exact match.
// - A missing snapshot fails; bless it first.

mod common;

use highlow_core::{build_scene, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, markup: &str) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, markup).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), markup.len());
        return;
    }
    let want = std::fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("missing golden {}; set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    assert_eq!(markup, want, "markup differs from golden snapshot: {}", path.display());
}

#[test]
fn golden_usd_session() {
    let scene = build_scene(&common::usd_session(), "USD", &RenderOptions::default()).expect("scene");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/usd_session.svg");
    write_or_compare(&path, &scene.to_svg());
}

#[test]
fn golden_usd_session_with_legend() {
    let opts = RenderOptions { legend: true, ..RenderOptions::default() };
    let scene = build_scene(&common::usd_session(), "USD", &opts).expect("scene");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/usd_session_legend.svg");
    write_or_compare(&path, &scene.to_svg());
}
