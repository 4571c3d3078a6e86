// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Horos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Horos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end pass over a realistic page snapshot, through the public API only.

use horos::driver::{run_pass, DriverOptions};
use horos::format::{decode_grid_attr, encode_grid_attr};
use horos::model::{Page, PageElement, Rect, Side, Size};
use horos::render::css::grid_css;

const SECTION_ATTR: &str = r##"{
    "enabled": true,
    "exclusionSelectors": ".pullquote",
    "overlaySelectors": ".card",
    "topBottom": {"enabled": true, "color": "#e5e7eb", "opacity": 1},
    "leftRight": {"enabled": true, "lengthMode": "relative", "lengthPercent": 50}
}"##;

fn article_page() -> (Page, usize) {
    let mut page = Page::new(Size::new(1440.0, 4000.0), Size::new(1440.0, 900.0));

    let mut section =
        PageElement::new("section", Rect::from_origin_size(200.0, 120.0, 1200.0, 400.0));
    section.guide_attr = Some(SECTION_ATTR.to_owned());
    let section_index = page.push(section);

    let mut pullquote =
        PageElement::new("blockquote", Rect::from_edges(195.0, 600.0, 205.0, 800.0));
    pullquote.classes = vec!["pullquote".to_owned()];
    pullquote.parent = Some(section_index);
    page.push(pullquote);

    let mut card = PageElement::new("div", Rect::from_origin_size(250.0, 200.0, 300.0, 180.0));
    card.classes = vec!["card".to_owned()];
    card.parent = Some(section_index);
    let card_index = page.push(card);

    (page, card_index)
}

#[test]
fn full_pass_renders_split_lines_and_elevations() {
    let (page, card_index) = article_page();
    let overlay = run_pass(&page, DriverOptions::default());

    // The pullquote sits on the top line and cuts it in two; the bottom line and both relative
    // verticals are untouched: 2 + 1 + 1 + 1 fragments, in side order.
    let sides: Vec<Side> = overlay.fragments().iter().map(|f| f.side()).collect();
    assert_eq!(
        sides,
        [Side::Top, Side::Top, Side::Bottom, Side::Left, Side::Right]
    );

    let second_top = &overlay.fragments()[1];
    assert_eq!(
        second_top.style(),
        "position: absolute; left: 800px; top: 200px; width: 640px; height: 1px; background: rgba(229, 231, 235, 1); pointer-events: none; z-index: -1;"
    );
    assert_eq!(second_top.class_names(), "horos-line horos-line-top");

    // Relative 50% verticals center on the section's own height: [300, 500].
    let left_line = &overlay.fragments()[3];
    assert_eq!(left_line.side(), Side::Left);
    assert_eq!((left_line.top(), left_line.height()), (300.0, 200.0));
    assert_eq!(left_line.left(), 120.0);

    let right_line = &overlay.fragments()[4];
    assert_eq!(right_line.left(), 1320.0 - 1.0);

    assert_eq!(overlay.elevated(), [card_index]);
}

#[test]
fn css_path_emits_rules_for_the_same_spec() {
    let spec = decode_grid_attr(SECTION_ATTR).expect("decode");
    let css = grid_css(&spec, "article-3");

    assert!(css.starts_with(
        "[data-horos-id=\"article-3\"] { position: relative; overflow: visible; }\n"
    ));
    assert!(css.contains("::before"));
    assert!(css.contains("::after"));
    assert!(css.contains("height: 1px;"));
    assert!(css.contains("background: rgba(229, 231, 235, 1);"));
    // Relative verticals carry percentage lengths in the static path.
    assert!(css.contains("background-size: 1px 50%, 1px 50%"));
}

#[test]
fn attribute_codec_round_trips_sparse_forms() {
    let spec = decode_grid_attr(SECTION_ATTR).expect("decode");
    let encoded = encode_grid_attr(&spec);
    assert_eq!(decode_grid_attr(&encoded).expect("re-decode"), spec);

    // Defaults stay off the wire.
    assert!(!encoded.contains("disableOnMobile"));
    assert!(!encoded.contains("\"top\""));
    assert!(encoded.contains("exclusionSelectors"));

    let disabled = decode_grid_attr(r#"{"enabled":false}"#).expect("decode");
    assert_eq!(encode_grid_attr(&disabled), r#"{"enabled":false}"#);
}
