//! Comprehensive tests for dystyle-css
//!
//! Encoded class names compiled against a small document.

use dystyle_css::{ClassNameMatch, CompileError, RuleCompiler};
use dystyle_dom::{Document, NodeId};
use pretty_assertions::assert_eq;

fn doc_with(tag: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let tree = doc.tree_mut();
    let id = tree.create_element(tag);
    tree.append_child(body, id).unwrap();
    (doc, id)
}

fn compile(doc: &mut Document, id: NodeId, class: &str) -> Result<String, CompileError> {
    let m = ClassNameMatch::parse(class).unwrap_or_else(|| panic!("{class} should match the grammar"));
    RuleCompiler::new()
        .compile(doc.tree_mut(), id, &m)
        .map(|rule| rule.css.text)
}

#[test]
fn test_background_color_scenario() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsBackgroundColor_red").unwrap();

    assert_eq!(css, "._BackgroundColor_red{background-color: red;}");
    assert_eq!(
        doc.tree().outer_html(div),
        r#"<div class="_BackgroundColor_red"></div>"#
    );
}

#[test]
fn test_declarations_follow_property_order() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsColor.BackgroundColor.ZIndex_red.blue.10").unwrap();
    assert_eq!(
        css,
        "._Color_BackgroundColor_ZIndex_red_blue_10{color: red; background-color: blue; z-index: 10;}"
    );
}

#[test]
fn test_directional_shorthand_expansion() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsPaddingTR_10px.20px").unwrap();
    assert_eq!(css, "._PaddingTR_10px_20px{padding-top: 10px; padding-right: 20px;}");

    let css = compile(&mut doc, div, "lcsPaddingY_1rem.2rem").unwrap();
    assert_eq!(css, "._PaddingY_1rem_2rem{padding-top: 1rem; padding-bottom: 2rem;}");
}

#[test]
fn test_directional_shorthand_needs_matching_values() {
    let (mut doc, div) = doc_with("div");
    let err = compile(&mut doc, div, "lcsMarginTRBL_10px").unwrap_err();
    assert!(matches!(err, CompileError::CountMismatch(_)));
}

#[test]
fn test_negative_and_decimal_values() {
    let (mut doc, p) = doc_with("p");
    assert_eq!(
        compile(&mut doc, p, "lcsMarginTop_mn4rem").unwrap(),
        "._MarginTop_mn4rem{margin-top: -4rem;}"
    );
    assert_eq!(
        compile(&mut doc, p, "lcsOpacity_05").unwrap(),
        "._Opacity_05{opacity: 0.5;}"
    );
}

#[test]
fn test_length_word_pairs() {
    let (mut doc, div) = doc_with("div");
    assert_eq!(
        compile(&mut doc, div, "lcsMargin_10px-auto").unwrap(),
        "._Margin_10px-auto{margin: 10px auto;}"
    );
    assert_eq!(
        compile(&mut doc, div, "lcsFont_16px-arial").unwrap(),
        "._Font_16px-arial{font: 16px arial;}"
    );
    assert_eq!(
        compile(&mut doc, div, "lcsBorder_1px-solid-notacolor").unwrap(),
        "._Border_1px-solid-notacolor{border: 1px solid notacolor;}"
    );
}

#[test]
fn test_sibling_chain_is_bounded() {
    let (mut doc, li) = doc_with("li");
    let css = compile(&mut doc, li, "lcsSibling3_Color_red").unwrap();
    assert_eq!(css, ".Sibling3__Color_red, .Sibling3__Color_red + * + * + *{color: red;}");

    let css = compile(&mut doc, li, "lcsSibling4294967295_Color_red").unwrap();
    assert_eq!(css, ".Sibling4294967295__Color_red{color: red;}");
}

#[test]
fn test_calc_value() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsWidth_calc(10px-pl-5px)").unwrap();
    assert_eq!(css, "._Width_calc_10px-pl-5px_{width: calc(10px + 5px);}");
}

#[test]
fn test_border_and_colors() {
    let (mut doc, div) = doc_with("div");
    assert_eq!(
        compile(&mut doc, div, "lcsBorder_1px-solid-red").unwrap(),
        "._Border_1px-solid-red{border: 1px solid red;}"
    );
    assert_eq!(
        compile(&mut doc, div, "lcsColor_#ff0000").unwrap(),
        "._Color__ff0000{color: #ff0000;}"
    );
    assert_eq!(
        compile(&mut doc, div, "lcsBgc_rgba(0-0-0-05)").unwrap(),
        "._Bgc_rgba_0-0-0-05_{background-color: rgba(0, 0, 0, 0.5);}"
    );
}

#[test]
fn test_grid_template() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsGtc_repeat(autofill-minmax(100px-1fr))").unwrap();
    assert_eq!(
        css,
        "._Gtc_repeat_autofill-minmax_100px-1fr_{grid-template-columns: repeat(auto-fill, minmax(100px, 1fr));}"
    );
}

#[test]
fn test_media_query_prefix() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsMQMaxWidth600PX_Color_red").unwrap();
    assert!(css.starts_with("@media (max-width: 600px){"));
    assert_eq!(css, "@media (max-width: 600px){.MQMaxWidth600PX__Color_red{color: red;}}");
}

#[test]
fn test_compound_media_query() {
    let (mut doc, div) = doc_with("div");
    let css = compile(&mut doc, div, "lcsMQMinWidth300PXOrientationLandscape_Display_none").unwrap();
    assert_eq!(
        css,
        "@media (min-width: 300px) and (orientation: landscape){.MQMinWidth300PXOrientationLandscape__Display_none{display: none;}}"
    );
}

#[test]
fn test_all_of_type_on_span() {
    let (mut doc, span) = doc_with("span");
    let css = compile(&mut doc, span, "lcsAllOfType_Color_red").unwrap();

    assert_eq!(css, "span{color: red;}");
    assert_eq!(doc.tree().outer_html(span), "<span></span>");
}

#[test]
fn test_structural_spec_with_pseudo() {
    let (mut doc, ul) = doc_with("ul");
    let css = compile(&mut doc, ul, "lcsChildrenNotFirst_BPE_Content_none").unwrap();
    assert_eq!(
        css,
        ".ChildrenNotFirst_BPE__Content_none > :not(:first-child)::before{content: none;}"
    );
    assert!(doc
        .tree()
        .class_list(ul)
        .unwrap()
        .contains("ChildrenNotFirst_BPE__Content_none"));
}

#[test]
fn test_count_mismatch_leaves_element_untouched() {
    let (mut doc, div) = doc_with("div");
    let err = compile(&mut doc, div, "lcsColor.Margin_red").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("lcsColor.Margin_red"));
    assert!(message.contains("<div"));
    assert_eq!(doc.tree().outer_html(div), "<div></div>");
}

#[test]
fn test_unknown_property_is_rejected_not_ignored() {
    let (mut doc, div) = doc_with("div");
    let err = compile(&mut doc, div, "lcsColour_red").unwrap_err();
    let CompileError::CountMismatch(report) = err else {
        panic!("expected a count mismatch");
    };
    assert_eq!(report.rejected_properties, vec!["Colour"]);
    assert_eq!(report.validated_values, vec!["red"]);
}
