use serde::{Deserialize, Serialize};

/// The sixteen named colors of the host chat format.
///
/// Wire names are lowercase snake case; each color also carries the
/// single-character code used by the legacy flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl Color {
    /// Single-character legacy format code for this color.
    pub fn legacy_code(&self) -> char {
        match self {
            Color::Black => '0',
            Color::DarkBlue => '1',
            Color::DarkGreen => '2',
            Color::DarkAqua => '3',
            Color::DarkRed => '4',
            Color::DarkPurple => '5',
            Color::Gold => '6',
            Color::Gray => '7',
            Color::DarkGray => '8',
            Color::Blue => '9',
            Color::Green => 'a',
            Color::Aqua => 'b',
            Color::Red => 'c',
            Color::LightPurple => 'd',
            Color::Yellow => 'e',
            Color::White => 'f',
        }
    }
}

/// One rich-text node: a run of text with optional formatting plus children.
///
/// Serializes to the host's JSON chat wire form. Unset fields are omitted so
/// the wire stays compact; serialization of a given tree is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub underlined: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub obfuscated: bool,

    /// Child components appended after this node's own text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Component>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Component {
    /// A plain unstyled text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_underlined(mut self) -> Self {
        self.underlined = true;
        self
    }

    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn with_obfuscated(mut self) -> Self {
        self.obfuscated = true;
        self
    }

    /// Append a child component.
    pub fn append(mut self, child: Component) -> Self {
        self.extra.push(child);
        self
    }
}
