//! Comprehensive tests for dystyle-engine
//!
//! Whole passes over parsed documents.

use dystyle_engine::css::CompileError;
use dystyle_engine::{compile_html, Config, Engine};
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use pretty_assertions::assert_eq;

fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
}

fn assert_parses(css: &str) {
    if let Err(err) = StyleSheet::parse(css, ParserOptions::default()) {
        panic!("generated stylesheet does not parse: {err}\n{css}");
    }
}

#[test]
fn test_duplicates_across_elements_emit_once() {
    let html = page(r#"<p class="lcsColor_red"></p><span class="lcsColor_red"></span>"#);
    let output = compile_html(&html, &Config::default()).unwrap();

    assert_eq!(output.css, "._Color_red{color: red;}");
    assert_eq!(output.report.emitted, 1);
    assert_eq!(output.report.duplicates, 1);
    assert_eq!(output.html.matches("_Color_red{").count(), 1);
}

#[test]
fn test_plain_rules_precede_media_rules() {
    let html = page(concat!(
        r#"<div class="lcsMQMaxWidth600PX_Display_none"></div>"#,
        r#"<div class="lcsMarginTop_mn4rem"></div>"#,
    ));
    let output = compile_html(&html, &Config::default()).unwrap();

    assert_eq!(
        output.css,
        concat!(
            "._MarginTop_mn4rem{margin-top: -4rem;}",
            "@media (max-width: 600px){.MQMaxWidth600PX__Display_none{display: none;}}",
        )
    );
    assert_parses(&output.css);
}

#[test]
fn test_stylesheet_lands_in_head() {
    let output = compile_html(&page(r#"<div class="lcsColor_red"></div>"#), &Config::default()).unwrap();
    let head_end = output.html.find("</head>").unwrap();
    let style = output.html.find(r#"<style id="dySTYLEInternalCSS">"#).unwrap();
    assert!(style < head_end);
}

#[test]
fn test_failures_do_not_stop_the_pass() {
    let html = page(concat!(
        r#"<div class="lcsColor.Margin_red"></div>"#,
        r#"<div class="lcsColour_red"></div>"#,
        r#"<div class="lcsColor_blue"></div>"#,
    ));
    let output = compile_html(&html, &Config::default()).unwrap();

    assert_eq!(output.report.failures.len(), 2);
    assert!(output
        .report
        .failures
        .iter()
        .all(|err| matches!(err, CompileError::CountMismatch(_))));
    assert_eq!(output.css, "._Color_blue{color: blue;}");
}

#[test]
fn test_plain_classes_are_ignored() {
    let output = compile_html(&page(r#"<div class="card wide"></div>"#), &Config::default()).unwrap();
    assert_eq!(output.report.elements_scanned, 1);
    assert_eq!(output.report.matched, 0);
    assert!(output.css.is_empty());
}

#[test]
fn test_body_opt_out_skips_document() {
    let html = r#"<html><body data-dystyle="false"><div class="lcsColor_red"></div></body></html>"#;
    let output = compile_html(html, &Config::default()).unwrap();

    assert!(output.report.opted_out);
    assert!(output.css.is_empty());
    assert!(!output.html.contains("_Color_red"));
}

#[test]
fn test_element_opt_out_skips_element_only() {
    let html = page(concat!(
        r#"<div data-dystyle="false" class="lcsColor_red"></div>"#,
        r#"<div class="lcsColor_green"></div>"#,
    ));
    let output = compile_html(&html, &Config::default()).unwrap();
    assert_eq!(output.css, "._Color_green{color: green;}");
}

#[test]
fn test_custom_opt_out_attribute() {
    let config = Config::from_json(r#"{"opt_out_attribute": "data-nostyle", "opt_out_value": "yes"}"#).unwrap();
    let html = page(r#"<div data-nostyle="yes" class="lcsColor_red"></div>"#);
    let output = compile_html(&html, &config).unwrap();
    assert!(output.css.is_empty());
}

#[test]
fn test_custom_prefix() {
    let config = Config::from_json(r#"{"prefix": "ds"}"#).unwrap();
    let html = page(r#"<div class="dsColor_red lcsColor_blue"></div>"#);
    let output = compile_html(&html, &config).unwrap();
    assert_eq!(output.css, "._Color_red{color: red;}");
}

#[test]
fn test_second_pass_appends_only_new_rules() {
    let mut doc = dystyle_engine::html::parse(&page(r#"<div class="lcsColor_red"></div>"#)).unwrap();
    let engine = Engine::new(Config::default()).unwrap();
    let mut ctx = engine.context(&mut doc).unwrap();

    let first = engine.run(&mut doc, &mut ctx).unwrap();
    assert_eq!(first.flushed, 1);

    let body = doc.body();
    let tree = doc.tree_mut();
    let div = tree.create_element("div");
    tree.set_attribute(div, "class", "lcsColor_red lcsWidth_50pct").unwrap();
    tree.append_child(body, div).unwrap();

    let second = engine.run(&mut doc, &mut ctx).unwrap();
    assert_eq!(second.flushed, 1);
    assert_eq!(
        doc.style_text(ctx.style_element()),
        "._Color_red{color: red;}._Width_50pct{width: 50%;}"
    );

    let third = engine.run(&mut doc, &mut ctx).unwrap();
    assert_eq!(third.emitted, 0);
    assert_eq!(third.flushed, 0);
}

#[test]
fn test_existing_style_element_is_reused() {
    let html = concat!(
        r#"<html><head><style id="dySTYLEInternalCSS">.x{color: red;}</style></head>"#,
        r#"<body><div class="lcsColor_blue"></div></body></html>"#,
    );
    let output = compile_html(html, &Config::default()).unwrap();

    assert_eq!(output.html.matches("<style").count(), 1);
    assert!(output
        .html
        .contains(r#"<style id="dySTYLEInternalCSS">.x{color: red;}._Color_blue{color: blue;}</style>"#));
}

#[test]
fn test_structural_rules_over_parsed_document() {
    let html = page(concat!(
        r#"<ul class="lcsChildrenNotFirst_BPE_Content_none"><li></li><li></li></ul>"#,
        r#"<span class="lcsAllOfType_Color_red"></span>"#,
    ));
    let output = compile_html(&html, &Config::default()).unwrap();

    assert_eq!(
        output.css,
        concat!(
            ".ChildrenNotFirst_BPE__Content_none > :not(:first-child)::before{content: none;}",
            "span{color: red;}",
        )
    );
    assert!(output.html.contains(r#"<span class="lcsAllOfType_Color_red">"#));
    assert_parses(&output.css);
}

#[test]
fn test_generated_stylesheet_parses() {
    let html = page(concat!(
        r#"<div class="lcsBackgroundColor_red lcsPaddingTR_10px.20px lcsOpacity_05"></div>"#,
        r#"<div class="lcsWidth_calc(10px-pl-5px) lcsBorder_1px-solid-red lcsColor_#ff0000"></div>"#,
        r#"<div class="lcsBgc_rgba(0-0-0-05) lcsGtc_repeat(autofill-minmax(100px-1fr))"></div>"#,
        r#"<div class="lcsMQMinWidth300PXOrientationLandscape_Display_none lcsColor_red_IMPT"></div>"#,
    ));
    let output = compile_html(&html, &Config::default()).unwrap();

    assert!(output.report.failures.is_empty(), "{:?}", output.report.failures);
    assert_eq!(output.report.emitted, 10);
    assert_parses(&output.css);
}
