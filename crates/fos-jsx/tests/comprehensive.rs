//! Comprehensive tests for fos-jsx
//!
//! End-to-end construction through `h`/`create_element` and the tag
//! functions, checked against the resulting DOM and its serialization.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use fos_dom::{Document, NodeId, NodeType, PropertyValue};
use fos_html::{inner_html, outer_html};
use fos_jsx::namespace::SVG_TAGS;
use fos_jsx::props::BOOLEAN_ATTRIBUTES;
use fos_jsx::{children, create_element, h, props, tags, Props, Tag, Value, DOM, SVG_NAMESPACE};

fn div(doc: &mut Document, props: Props, children: Vec<Value>) -> NodeId {
    h(doc, "div", props, children).unwrap()
}

// ============================================================================
// ELEMENTS
// ============================================================================

#[test]
fn test_creates_div_element() {
    let mut doc = Document::new();
    let node = div(&mut doc, props! { "id" => "hello" }, children!["world"]);
    assert_eq!(outer_html(&doc, node), "<div id=\"hello\">world</div>");
}

#[test]
fn test_h_without_props_or_children() {
    let mut doc = Document::new();
    let node = h(&mut doc, "div", props! {}, children![]).unwrap();
    assert_eq!(outer_html(&doc, node), "<div></div>");
}

#[test]
fn test_functional_component() {
    let mut doc = Document::new();
    let component = Tag::component(|doc, props| {
        let number = |key: &str| match props.get(key) {
            Some(Value::Number(n)) => *n,
            _ => 0.0,
        };
        assert_eq!(props.get("children"), Some(&Value::List(vec![])));
        let sum = number("a") + number("b") + number("c");
        create_element(doc, "div", Props::new(), children![sum])
    });

    let node = h(&mut doc, component, props! { "a" => 1, "b" => 2, "c" => 3 }, children![]).unwrap();
    assert_eq!(inner_html(&doc, node), "6");
}

#[test]
fn test_component_receives_children() {
    let mut doc = Document::new();
    let list = Tag::component(|doc, mut props| {
        let items = props.remove("children").unwrap_or_default();
        create_element(doc, "ul", Props::new(), vec![items])
    });

    let first = h(&mut doc, "li", props! {}, children!["one"]).unwrap();
    let second = h(&mut doc, "li", props! {}, children!["two"]).unwrap();
    let ul = h(&mut doc, list, props! {}, children![first, second]).unwrap();
    assert_eq!(outer_html(&doc, ul), "<ul><li>one</li><li>two</li></ul>");
}

// ============================================================================
// CHILD NODES
// ============================================================================

#[test]
fn test_null_child_ignored() {
    let mut doc = Document::new();
    let node = div(&mut doc, props! {}, children![Value::Null]);
    assert!(doc.children(node).is_empty());
    assert!(doc.child_nodes(node).is_empty());
}

#[test]
fn test_deep_nested_children() {
    let mut doc = Document::new();
    let flat = div(&mut doc, props! {}, children![vec![2, 3]]);
    assert_eq!(doc.text_content(flat), "23");

    let nested = Value::List(vec![
        2.into(),
        Value::List(vec![2.into(), "3".into(), Value::Null, false.into(), Value::List(vec![4.into()])]),
    ]);
    let deep = div(&mut doc, props! {}, vec![nested]);
    assert_eq!(doc.text_content(deep), "2234");
}

#[test]
fn test_dom_element_as_child() {
    let mut doc = Document::new();
    let img = doc.create_element("img");
    let node = div(&mut doc, props! {}, children![img]);
    assert_eq!(doc.children(node).len(), 1);
    assert_eq!(doc.first_element_child(node), Some(img));
}

#[test]
fn test_string_child() {
    let mut doc = Document::new();
    let node = div(&mut doc, props! {}, children!["text"]);
    assert_eq!(doc.text_content(node), "text");
}

// ============================================================================
// CLASS NAME
// ============================================================================

#[test]
fn test_class_and_class_name() {
    let mut doc = Document::new();
    let a = div(&mut doc, props! { "className" => "me irl" }, children![]);
    let b = div(&mut doc, props! { "class" => "me too thanks" }, children![]);
    assert_eq!(doc.class_name(a), "me irl");
    assert_eq!(doc.class_name(b), "me too thanks");
}

#[test]
fn test_class_array() {
    let mut doc = Document::new();
    let node = div(&mut doc, props! { "class" => vec!["first", "second"] }, children![]);
    assert_eq!(doc.class_name(node), "first second");
}

#[test]
fn test_class_recursive_array() {
    let mut doc = Document::new();
    let class = Value::List(vec![
        "first".into(),
        Value::List(vec!["second".into(), false.into(), "third".into()]),
    ]);
    let node = div(&mut doc, props! { "class" => class }, children![]);
    assert_eq!(doc.class_name(node), "first second third");
}

#[test]
fn test_class_object() {
    let mut doc = Document::new();
    let node = div(
        &mut doc,
        props! { "class" => props! { "included" => true, "excluded" => false } },
        children![],
    );
    assert_eq!(doc.class_name(node), "included");
}

#[test]
fn test_class_filters_falsy_but_not_zero() {
    let mut doc = Document::new();
    let class = Value::List(vec![false.into(), 0.into(), "rest".into()]);
    let node = div(&mut doc, props! { "class" => class }, children![]);
    assert_eq!(doc.class_name(node), "0 rest");
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

#[test]
fn test_boolean_attributes() {
    let mut doc = Document::new();
    let on = h(&mut doc, "input", props! { "disabled" => true }, children![]).unwrap();
    let off = h(&mut doc, "input", props! { "disabled" => false }, children![]).unwrap();
    assert_eq!(doc.get_attribute(on, "disabled"), Some(""));
    assert_eq!(doc.get_attribute(off, "disabled"), None);
}

/// An element that owns the attribute, so host properties get involved
fn owner_of(attribute: &str) -> &'static str {
    match attribute {
        "checked" | "multiple" | "required" | "disabled" | "autofocus" | "formnovalidate" => "input",
        "selected" => "option",
        "readonly" => "textarea",
        "muted" | "autoplay" | "controls" | "loop" | "playsinline" => "video",
        "open" => "details",
        "async" | "defer" | "nomodule" => "script",
        "default" => "track",
        "reversed" => "ol",
        "novalidate" => "form",
        "ismap" => "img",
        "allowfullscreen" => "iframe",
        _ => "div",
    }
}

#[test]
fn test_every_boolean_attribute_on_its_owner() {
    let mut doc = Document::new();
    for &attribute in BOOLEAN_ATTRIBUTES {
        let tag = owner_of(attribute);
        let on = h(&mut doc, tag, props! { attribute => true }, children![]).unwrap();
        let off = h(&mut doc, tag, props! { attribute => false }, children![]).unwrap();
        assert_eq!(doc.get_attribute(on, attribute), Some(""), "{attribute} on <{tag}>");
        assert_eq!(doc.get_attribute(off, attribute), None, "{attribute} on <{tag}>");
    }
}

#[test]
fn test_checked_and_muted_state_follow_attribute() {
    let mut doc = Document::new();
    let input = h(&mut doc, "input", props! { "checked" => true }, children![]).unwrap();
    assert_eq!(outer_html(&doc, input), "<input checked=\"\">");
    assert_eq!(doc.get_property(input, "checked"), Some(PropertyValue::Bool(true)));

    let video = h(&mut doc, "video", props! { "muted" => true }, children![]).unwrap();
    assert_eq!(doc.get_attribute(video, "muted"), Some(""));
    assert_eq!(doc.get_property(video, "muted"), Some(PropertyValue::Bool(true)));
}

#[test]
fn test_dataset() {
    let mut doc = Document::new();
    let literal = div(&mut doc, props! { "data-key" => "value" }, children![]);
    assert_eq!(doc.dataset(literal).get("key"), Some("value"));

    let mapped = div(&mut doc, props! { "dataset" => props! { "key" => 0 } }, children![]);
    assert_eq!(doc.get_attribute(mapped, "data-key"), Some("0"));
}

#[test]
fn test_inner_html_inner_text_text_content() {
    let mut doc = Document::new();
    let html = div(&mut doc, props! { "innerHTML" => "<div></div><div></div>" }, children![]);
    assert_eq!(doc.query_selector_all(html, "div").len(), 2);

    let text = div(&mut doc, props! { "innerText" => "<img>" }, children![]);
    assert!(doc.query_selector_all(text, "img").is_empty());
    assert_eq!(doc.text_content(text), "<img>");

    let content = div(&mut doc, props! { "textContent" => "<img>" }, children![]);
    assert!(doc.query_selector_all(content, "img").is_empty());
}

#[test]
fn test_ref_store_function() {
    let mut doc = Document::new();
    let button = Rc::new(Cell::new(None));
    let slot = Rc::clone(&button);

    let inner = h(
        &mut doc,
        "button",
        props! { "ref" => Value::ref_callback(move |_, node| slot.set(Some(node))) },
        children![],
    )
    .unwrap();
    let node = div(&mut doc, props! {}, children![inner]);

    assert!(button.get().is_some());
    assert_eq!(doc.children(node)[0], button.get().unwrap());
}

#[test]
fn test_ref_in_functional_component() {
    let mut doc = Document::new();
    let button = Rc::new(Cell::new(None));
    let slot = Rc::clone(&button);
    let component = Tag::component(|doc, _props| create_element(doc, "button", Props::new(), vec![]));

    let inner = h(
        &mut doc,
        component,
        props! { "ref" => Value::ref_callback(move |_, node| slot.set(Some(node))) },
        children![],
    )
    .unwrap();
    let node = div(&mut doc, props! {}, children![inner]);

    assert!(button.get().is_some());
    assert_eq!(doc.children(node)[0], button.get().unwrap());
}

#[test]
fn test_spell_check() {
    let mut doc = Document::new();
    for tag in ["input", "textarea"] {
        for flag in [true, false] {
            let node = h(&mut doc, tag, props! { "spellCheck" => flag }, children![]).unwrap();
            assert_eq!(doc.get_property(node, "spellcheck"), Some(PropertyValue::Bool(flag)), "<{tag}>");
        }
    }
}

// ============================================================================
// STYLES
// ============================================================================

#[test]
fn test_style_object() {
    let mut doc = Document::new();
    let node = div(&mut doc, props! { "style" => props! { "display" => "none" } }, children![]);
    assert_eq!(doc.style(node).get_property_value("display"), "none");
}

#[test]
fn test_style_string() {
    let mut doc = Document::new();
    let node = div(&mut doc, props! { "style" => "display: none; margin: 1px;" }, children![]);
    let style = doc.style(node);
    assert_eq!(style.get_property_value("display"), "none");
    assert_eq!(style.get_property_value("margin"), "1px");
}

// ============================================================================
// EVENTS
// ============================================================================

#[test]
fn test_event_listeners() {
    let mut doc = Document::new();
    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    let button = h(
        &mut doc,
        "button",
        props! { "onClick" => Value::listener(move |_, _| flag.set(true)) },
        children![],
    )
    .unwrap();

    doc.click(button).unwrap();
    assert!(done.get());
}

#[test]
fn test_listener_can_mutate_document() {
    let mut doc = Document::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let button = h(
        &mut doc,
        "button",
        props! {
            "onClick" => Value::listener(move |doc, event| {
                doc.set_text_content(event.target, "clicked").unwrap();
                sink.borrow_mut().push(event.event_type.clone());
            })
        },
        children!["idle"],
    )
    .unwrap();

    doc.click(button).unwrap();
    assert_eq!(doc.text_content(button), "clicked");
    assert_eq!(*log.borrow(), vec!["click".to_string()]);
}

// ============================================================================
// SVG
// ============================================================================

#[test]
fn test_svg_namespace_uri() {
    assert_eq!(SVG_NAMESPACE, "http://www.w3.org/2000/svg");
}

#[test]
fn test_supports_svg_elements() {
    let mut doc = Document::new();
    for tag in SVG_TAGS {
        let node = h(&mut doc, *tag, props! {}, children![]).unwrap();
        assert_eq!(doc.namespace_uri(node), Some(SVG_NAMESPACE), "Tag: {tag}");
    }
}

#[test]
fn test_explicit_svg_namespace() {
    let mut doc = Document::new();
    let plain = h(&mut doc, "a", props! {}, children![]).unwrap();
    let svg_a = h(&mut doc, "a", props! { "namespaceURI" => SVG_NAMESPACE }, children![]).unwrap();
    assert_eq!(doc.namespace_uri(plain), Some(fos_jsx::HTML_NAMESPACE));
    assert_eq!(doc.namespace_uri(svg_a), Some(SVG_NAMESPACE));
    assert!(!doc.has_attribute(svg_a, "namespaceURI"));
}

// ============================================================================
// PUBLIC API
// ============================================================================

#[test]
fn test_dom_table_exported() {
    assert!(!DOM.is_empty());
    assert!(DOM.names().any(|name| name == "div"));
}

#[test]
fn test_dom_table_creates_correct_elements() {
    let mut doc = Document::new();
    for tag in [
        "a", "blockquote", "button", "div", "em", "form", "h1", "h2", "h3", "h4", "h5", "h6",
        "hr", "img", "input", "li", "link", "ol", "p", "script", "span", "strong", "table",
        "thead", "td", "th", "tr", "ul",
    ] {
        let node = DOM.call(&mut doc, tag, vec![]).unwrap();
        assert_eq!(doc.tag_name(node), Some(tag.to_uppercase()));
    }
}

#[test]
fn test_dom_table_spread_children() {
    let mut doc = Document::new();
    let node = DOM.call(&mut doc, "div", children!["Hello ", "world", "!"]).unwrap();
    assert_eq!(doc.text_content(node), "Hello world!");
}

#[test]
fn test_tag_function_props_optional() {
    let mut doc = Document::new();
    let el = tags::h3(&mut doc, children!["Hello World"]).unwrap();
    assert_eq!(doc.child_nodes(el).len(), 1);
    assert_eq!(doc.child_element_count(el), 0);
    let first = doc.first_child(el).unwrap();
    assert_eq!(doc.node_type(first), Some(NodeType::Text));
    assert_eq!(doc.text_content(el), "Hello World");
}

#[test]
fn test_tag_functions_compose() -> Result<()> {
    let mut doc = Document::new();
    let item = tags::li(&mut doc, children!["one"])?;
    let list = tags::ul(&mut doc, children![props! { "class" => "menu" }, item])?;
    let nav = tags::nav(&mut doc, children![list])?;
    assert_eq!(outer_html(&doc, nav), "<nav><ul class=\"menu\"><li>one</li></ul></nav>");
    Ok(())
}
