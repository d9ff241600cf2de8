use crate::select::models::Labeled;

pub const NAME_PLACEHOLDER: &str = "{name}";

/// How a single row is turned into text.
pub enum ItemTemplate<T> {
    /// The item's label as is.
    Default,
    /// Every `{name}` in the pattern is replaced by the label.
    Pattern(String),
    Custom(Box<dyn Fn(&T) -> String>),
}

impl<T: Labeled> ItemTemplate<T> {
    pub fn from_pattern(pattern: Option<String>) -> Self {
        match pattern {
            Some(pattern) if !pattern.is_empty() => Self::Pattern(pattern),
            _ => Self::Default,
        }
    }

    pub fn custom(render: impl Fn(&T) -> String + 'static) -> Self {
        Self::Custom(Box::new(render))
    }

    pub fn render(&self, item: &T) -> String {
        match self {
            Self::Default => item.label().to_string(),
            Self::Pattern(pattern) => pattern.replace(NAME_PLACEHOLDER, item.label()),
            Self::Custom(render) => render(item),
        }
    }
}

impl<T> Default for ItemTemplate<T> {
    fn default() -> Self {
        Self::Default
    }
}

impl<T> std::fmt::Debug for ItemTemplate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
