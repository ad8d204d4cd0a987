//! Tag model and composition
//!
//! An [`Element`] is one HTML tag plus its rendered line structure.
//! Attributes keep insertion order for deterministic output, and the rendered
//! lines are rebuilt after every mutation so callers never observe stale
//! state. Nesting is done with [`Element::absorb`], which bakes the child's
//! extra indentation into the parent at absorption time.

use serde::{Deserialize, Serialize};

use crate::errors::RenderError;

/// One nesting level indents absorbed child lines by two of these.
pub const INDENT_UNIT: &str = "    ";

/// One HTML tag and its rendered representation.
///
/// Construct with [`Element::new`] and the chainable configuration methods,
/// then compose with [`Element::absorb`]:
///
/// ```
/// use htmldoc::Element;
///
/// let item = Element::new("li").text("first").inline();
/// let mut list = Element::new("ul");
/// list.absorb(&item);
/// assert_eq!(list.lines()[1], "        <li>first</li>");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Element {
    /// Tag keyword, e.g. "div".
    name: String,
    /// Inline text content; empty means none.
    text: String,
    /// True if the tag has no closing counterpart.
    is_single: bool,
    /// True if opening tag, text, and closing tag render on one line.
    is_inline: bool,
    /// Ordered name/value pairs; insertion order preserved.
    attributes: Vec<(String, String)>,
    /// Absorbed children's lines, extra indentation already baked in.
    children: Vec<String>,
    /// Derived opening tag line.
    opening: String,
    /// Derived closing tag line.
    closing: String,
    /// Prefix applied to this element's own opening/closing lines.
    indent: String,
    /// Set to [`INDENT_UNIT`] once this element has absorbed a child.
    indent_unit: String,
    /// Fully rendered lines, including children. Never stale.
    lines: Vec<String>,
}

impl Element {
    /// Create a tag with no text, attributes, or children.
    pub fn new(name: impl Into<String>) -> Self {
        let mut element = Self {
            name: name.into(),
            text: String::new(),
            is_single: false,
            is_inline: false,
            attributes: Vec::new(),
            children: Vec::new(),
            opening: String::new(),
            closing: String::new(),
            indent: String::new(),
            indent_unit: String::new(),
            lines: Vec::new(),
        };
        element.rebuild();
        element
    }

    /// Set the inline text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.rebuild();
        self
    }

    /// Mark the tag as self-closing: no closing line is ever rendered.
    pub fn single(mut self) -> Self {
        self.is_single = true;
        self.rebuild();
        self
    }

    /// Collapse opening tag, text, and closing tag onto exactly one line.
    ///
    /// Inline elements do not compose with nested children; anything
    /// absorbed afterwards is excluded from the rendered output.
    pub fn inline(mut self) -> Self {
        self.is_inline = true;
        self.rebuild();
        self
    }

    /// Populate the reserved `class` attribute from tokens joined by spaces.
    pub fn classes(mut self, tokens: &[&str]) -> Self {
        self.attributes.push(("class".to_string(), tokens.join(" ")));
        self.rebuild();
        self
    }

    /// Add a named attribute. Underscores in the name become hyphens, so
    /// hyphenated HTML attributes like `data-image` can be written as the
    /// identifier-safe `data_image`.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes
            .push((name.replace('_', "-"), value.to_string()));
        self.rebuild();
        self
    }

    /// Serialize all attributes as `name="value"` pairs joined by single
    /// spaces, in insertion order. An empty set yields the empty string.
    pub fn attrs_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Nest another element's rendered output inside this one.
    ///
    /// Every line of the child's current rendered form is prefixed with two
    /// indent units (eight spaces) and appended to this element's content.
    /// The offset is baked in at absorption time, so absorbing an
    /// already-nested element preserves its accumulated indentation.
    /// Returns `&mut Self` for left-to-right chaining.
    pub fn absorb(&mut self, child: &Element) -> &mut Self {
        if self.is_inline {
            log::warn!(
                "<{}> is inline; absorbed <{}> will not appear in its output",
                self.name,
                child.name
            );
        }
        self.lines.clear();
        self.indent_unit = INDENT_UNIT.to_string();
        for line in child.lines() {
            self.children
                .push(format!("{}{}{line}", self.indent_unit, self.indent_unit));
        }
        self.rebuild();
        self
    }

    /// Elements never produce final output themselves; absorb them into a
    /// [`crate::Document`] and render that instead.
    pub fn render(&self) -> Result<String, RenderError> {
        Err(RenderError::NotRenderable)
    }

    /// Current rendered lines, including any absorbed children.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Tag keyword this element was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recompute the full rendered structure from the current state.
    ///
    /// Pure rebuild: the text line contributes exactly once no matter how
    /// many mutations have occurred.
    fn rebuild(&mut self) {
        let attrs = self.attrs_string();
        self.opening = if attrs.is_empty() {
            format!("{}<{}>", self.indent, self.name)
        } else {
            format!("{}<{} {attrs}>", self.indent, self.name)
        };
        self.closing = format!("{}</{}>", self.indent, self.name);

        self.lines.clear();
        if self.is_inline {
            self.lines
                .push(format!("{}{}{}", self.opening, self.text, self.closing));
            return;
        }
        self.lines.push(self.opening.clone());
        if !self.text.is_empty() {
            self.lines.push(self.text.clone());
        }
        self.lines.extend(self.children.iter().cloned());
        if !self.is_single {
            self.lines.push(self.closing.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_string_preserves_insertion_order() {
        let element = Element::new("div").attr("a", "1").attr("b", "2");
        assert_eq!(
            element.attrs_string(),
            "a=\"1\" b=\"2\"",
            "attributes should serialize in insertion order, space separated"
        );
    }

    #[test]
    fn test_empty_attribute_set_serializes_to_empty_string() {
        let element = Element::new("div");
        assert_eq!(element.attrs_string(), "");
        assert_eq!(element.lines()[0], "<div>", "no stray space without attributes");
    }

    #[test]
    fn test_underscore_in_attribute_name_becomes_hyphen() {
        let element = Element::new("img").single().attr("data_image", "responsive");
        assert_eq!(
            element.lines(),
            &["<img data-image=\"responsive\">".to_string()],
            "underscore names map to hyphenated HTML attributes"
        );
    }

    #[test]
    fn test_class_tokens_join_with_single_spaces() {
        let element = Element::new("div").classes(&["a", "b"]);
        assert_eq!(element.attrs_string(), "class=\"a b\"");
    }

    #[test]
    fn test_single_tag_never_renders_closing_line() {
        let mut element = Element::new("img").single().attr("src", "/icon.png");
        assert!(
            !element.lines().iter().any(|line| line.contains("</img>")),
            "single tags have no closing counterpart"
        );

        let child = Element::new("span").text("x").inline();
        element.absorb(&child);
        assert!(
            !element.lines().iter().any(|line| line.contains("</img>")),
            "absorbing children must not introduce a closing line"
        );
    }

    #[test]
    fn test_inline_element_renders_exactly_one_line() {
        let plain = Element::new("p").text("hi").inline();
        assert_eq!(plain.lines(), &["<p>hi</p>".to_string()]);

        let with_attrs = Element::new("h1").text("Test").inline().classes(&["main-text"]);
        assert_eq!(
            with_attrs.lines(),
            &["<h1 class=\"main-text\">Test</h1>".to_string()]
        );
    }

    #[test]
    fn test_inline_element_ignores_absorbed_children() {
        let child = Element::new("span").text("inner").inline();
        let mut parent = Element::new("p").text("hi").inline();
        parent.absorb(&child);
        assert_eq!(
            parent.lines(),
            &["<p>hi</p>".to_string()],
            "inline elements do not compose with nested children"
        );
    }

    #[test]
    fn test_absorb_indents_child_lines_by_eight_spaces() {
        let child = Element::new("p").text("hi").inline();
        let mut parent = Element::new("div");
        parent.absorb(&child);
        assert_eq!(
            parent.lines(),
            &[
                "<div>".to_string(),
                "        <p>hi</p>".to_string(),
                "</div>".to_string(),
            ]
        );
    }

    #[test]
    fn test_nested_absorption_accumulates_indentation() {
        let leaf = Element::new("p").text("hi").inline();
        let mut inner = Element::new("div");
        inner.absorb(&leaf);
        let mut outer = Element::new("section");
        outer.absorb(&inner);
        assert_eq!(
            outer.lines()[2],
            "                <p>hi</p>",
            "each absorption adds eight more spaces to already-nested lines"
        );
    }

    #[test]
    fn test_repeated_absorption_accumulates_content_in_order() {
        let paragraph = Element::new("p").text("another test").inline();
        let img = Element::new("img").single().attr("src", "/icon.png");
        let mut div = Element::new("div");
        div.absorb(&paragraph).absorb(&img);
        assert_eq!(
            div.lines(),
            &[
                "<div>".to_string(),
                "        <p>another test</p>".to_string(),
                "        <img src=\"/icon.png\">".to_string(),
                "</div>".to_string(),
            ]
        );
    }

    #[test]
    fn test_text_contributes_exactly_one_line_across_mutations() {
        let child = Element::new("span").text("x").inline();
        let mut parent = Element::new("div").text("lead");
        parent.absorb(&child).absorb(&child);
        let text_lines = parent.lines().iter().filter(|line| *line == "lead").count();
        assert_eq!(text_lines, 1, "rebuild must not duplicate the text line");
    }

    #[test]
    fn test_element_render_fails_with_not_renderable() {
        let element = Element::new("div");
        let err = element.render().unwrap_err();
        assert!(
            matches!(err, RenderError::NotRenderable),
            "direct element rendering must fail with the typed NotRenderable error"
        );
    }

    #[test]
    fn test_element_survives_serde_round_trip() {
        let mut element = Element::new("div").classes(&["container"]);
        element.absorb(&Element::new("p").text("hi").inline());

        let json = serde_json::to_string(&element).unwrap();
        let restored: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lines(), element.lines());
        assert_eq!(restored.attrs_string(), element.attrs_string());
    }
}
