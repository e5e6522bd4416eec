//! The styled node tree consumed by layout.
//!
//! Nodes own their children and carry an already-normalized [`Style`]. A tree
//! is read-only for the duration of a layout pass; layout borrows it.
//!
//! [`DocumentSpec`] is the serializable description of a tree (JSON in the
//! CLI); [`DocumentSpec::into_node`] runs every style map through
//! [`Style::from_declarations`].

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::style::{DisplayValue, Property, RawValue, Style, StyleError, StyleValue};

/// A styled element.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Node {
    /// Element name, used only for diagnostics.
    pub name: String,
    /// Children in document order.
    pub children: Vec<Node>,
    /// Class attribute values.
    pub class: Vec<String>,
    /// Id attribute.
    pub id: Option<String>,
    /// The node's style.
    pub style: Style,
    /// Text content. Carried but not laid out.
    pub text: Option<String>,
}

impl Node {
    /// Create a childless node.
    #[must_use]
    pub fn new(name: impl Into<String>, style: Style) -> Self {
        Self {
            name: name.into(),
            style,
            ..Self::default()
        }
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set the id attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The node's display type.
    #[must_use]
    pub const fn display(&self) -> DisplayValue {
        self.style.display
    }

    /// Shorthand for [`Style::get`].
    #[must_use]
    pub fn get(&self, property: Property) -> Option<StyleValue> {
        self.style.get(property)
    }
}

/// A JSON style object, kept in document order so a later declaration
/// overrides an earlier one exactly as in [`Style::from_declarations`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declarations(pub Vec<(String, RawValue)>);

impl Serialize for Declarations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(name, value)| (name, value)))
    }
}

impl<'de> Deserialize<'de> for Declarations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeclarationsVisitor;

        impl<'de> Visitor<'de> for DeclarationsVisitor {
            type Value = Declarations;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of property names to numbers or strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Declarations, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut declarations = Vec::new();
                while let Some(declaration) = map.next_entry::<String, RawValue>()? {
                    declarations.push(declaration);
                }
                Ok(Declarations(declarations))
            }
        }

        deserializer.deserialize_map(DeclarationsVisitor)
    }
}

/// Serializable description of a node tree.
///
/// ```json
/// { "name": "box",
///   "style": { "display": "block", "border-width": 1, "width": "50%" },
///   "children": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSpec {
    /// Element name.
    pub name: String,
    /// Id attribute.
    #[serde(default)]
    pub id: Option<String>,
    /// Class attribute values.
    #[serde(default)]
    pub class: Vec<String>,
    /// Text content.
    #[serde(default)]
    pub text: Option<String>,
    /// Declarations, applied in the order written.
    #[serde(default)]
    pub style: Declarations,
    /// Children in document order.
    #[serde(default)]
    pub children: Vec<DocumentSpec>,
}

impl DocumentSpec {
    /// Normalize this description and its descendants into a [`Node`] tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError`] found, depth first.
    pub fn into_node(self) -> Result<Node, StyleError> {
        let style = Style::from_declarations(self.style.0)?;
        let children = self
            .children
            .into_iter()
            .map(Self::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node {
            name: self.name,
            children,
            class: self.class,
            id: self.id,
            style,
            text: self.text,
        })
    }
}
