//! Edge case tests for fos-html
//!
//! Malformed markup, entities and serialization of parsed fragments.

use fos_dom::Document;
use fos_html::{inner_html, outer_html, parse_fragment, set_inner_html};

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_parse_empty_markup() {
    let mut doc = Document::new();
    let nodes = parse_fragment(&mut doc, "").unwrap();
    assert!(nodes.is_empty());
}

#[test]
fn test_parse_text_only() {
    let mut doc = Document::new();
    let nodes = parse_fragment(&mut doc, "Hello World").unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(doc.text_content(nodes[0]), "Hello World");
}

#[test]
fn test_parse_unclosed_tags_recover() {
    let mut doc = Document::new();
    let nodes = parse_fragment(&mut doc, "<p>one<p>two").unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(doc.text_content(nodes[1]), "two");
}

#[test]
fn test_parse_entities_decoded() {
    let mut doc = Document::new();
    let nodes = parse_fragment(&mut doc, "&lt;img&gt; &amp; more").unwrap();
    assert_eq!(doc.text_content(nodes[0]), "<img> & more");
}

#[test]
fn test_parse_void_elements() {
    let mut doc = Document::new();
    let nodes = parse_fragment(&mut doc, r#"<br><img src="a.png"><input type="text">"#).unwrap();
    let names: Vec<_> = nodes.iter().map(|&n| doc.local_name(n).unwrap().to_string()).collect();
    assert_eq!(names, ["br", "img", "input"]);
    assert_eq!(doc.get_attribute(nodes[1], "src"), Some("a.png"));
}

#[test]
fn test_parse_comment_preserved() {
    let mut doc = Document::new();
    let div = doc.create_element("div");
    set_inner_html(&mut doc, div, "<b>x</b><!--note-->").unwrap();
    assert_eq!(inner_html(&doc, div), "<b>x</b><!--note-->");
}

// ============================================================================
// INNER HTML
// ============================================================================

#[test]
fn test_inner_html_reserializes() {
    let mut doc = Document::new();
    let div = doc.create_element("div");
    set_inner_html(&mut doc, div, r#"<ul class="list"><li>1</li><li>2 &amp; 3</li></ul>"#).unwrap();

    assert_eq!(
        outer_html(&doc, div),
        r#"<div><ul class="list"><li>1</li><li>2 &amp; 3</li></ul></div>"#
    );
}

#[test]
fn test_inner_html_twice_replaces() {
    let mut doc = Document::new();
    let div = doc.create_element("div");
    set_inner_html(&mut doc, div, "<i>a</i><i>b</i>").unwrap();
    set_inner_html(&mut doc, div, "<em>c</em>").unwrap();

    assert_eq!(doc.children(div).len(), 1);
    assert!(doc.get_elements_by_tag_name(div, "i").is_empty());
}

#[test]
fn test_inner_html_on_text_node_fails() {
    let mut doc = Document::new();
    let text = doc.create_text_node("x");
    let div = doc.create_element("div");
    doc.append_child(div, text).unwrap();
    // Text nodes cannot hold children
    assert!(set_inner_html(&mut doc, text, "<b>y</b>").is_err());
    assert!(doc.child_nodes(text).is_empty());
}
