//! Lossy flattening of component trees into legacy `§`-coded text.
//!
//! This is the universal fallback: every invoker kind can receive the
//! flattened form, structured delivery or not.

use crate::component::Component;

/// Section-sign prefix of the legacy chat format.
pub const SECTION: char = '§';

/// Flatten `component` into legacy text.
///
/// Depth-first: each node emits its color code, then its style codes in a
/// fixed `k l m n o` order, then its own text, then its children.
/// Formatting is not reset between siblings. The conversion is lossy but
/// deterministic for a given tree.
pub fn to_legacy(component: &Component) -> String {
    let mut out = String::new();
    write_node(component, &mut out);
    out
}

fn write_node(node: &Component, out: &mut String) {
    if let Some(color) = node.color {
        out.push(SECTION);
        out.push(color.legacy_code());
    }
    let styles = [
        (node.obfuscated, 'k'),
        (node.bold, 'l'),
        (node.strikethrough, 'm'),
        (node.underlined, 'n'),
        (node.italic, 'o'),
    ];
    for (set, code) in styles {
        if set {
            out.push(SECTION);
            out.push(code);
        }
    }
    out.push_str(&node.text);
    for child in &node.extra {
        write_node(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Color;

    #[test]
    fn unstyled_text_passes_through() {
        assert_eq!(to_legacy(&Component::text("hello")), "hello");
    }

    #[test]
    fn color_code_precedes_text() {
        let c = Component::text("warn").with_color(Color::Red);
        assert_eq!(to_legacy(&c), "§cwarn");
    }

    #[test]
    fn style_codes_in_fixed_order() {
        let c = Component::text("x").with_bold().with_obfuscated().with_italic();
        // k before l before o, regardless of builder call order
        assert_eq!(to_legacy(&c), "§k§l§ox");
    }

    #[test]
    fn children_follow_parent_text() {
        let c = Component::text("a")
            .with_color(Color::Gold)
            .append(Component::text("b").with_color(Color::White).with_bold());
        assert_eq!(to_legacy(&c), "§6a§f§lb");
    }

    #[test]
    fn flattening_is_deterministic() {
        let c = Component::text("a").append(Component::text("b").with_underlined());
        assert_eq!(to_legacy(&c), to_legacy(&c));
    }
}
