//! Element values: the immutable description of one logical node.
//!
//! An [`Element`] pairs a kind (host tag or [`Component`] reference) with its
//! [`Attributes`] and an optional [`Key`]. Elements are plain values: they
//! describe what should exist, and the fiber layer decides how to get there.

use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// AttrValue
// ---------------------------------------------------------------------------

/// A single attribute value: text, number, or flag.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A string-valued attribute (e.g. `style`, `class`).
    Text(String),
    /// A numeric attribute (e.g. `tabindex`).
    Number(f64),
    /// A boolean attribute (e.g. `disabled`).
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Named attributes of an element, plus its ordered children.
///
/// The `children` entry is always present (possibly empty), matching the
/// contract at the element-construction boundary: by the time the core sees
/// an element, its children have been normalized and filtered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
    children: Children,
}

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named attribute (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Replace the children sequence (builder).
    pub fn with_children(mut self, children: impl Into<Children>) -> Self {
        self.children = children.into();
        self
    }

    /// Set a named attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a named attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Look up a named attribute as text. Returns `None` for non-text values.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(AttrValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// The ordered children of this element.
    pub fn children(&self) -> &Children {
        &self.children
    }

    pub(crate) fn take_children(&mut self) -> Children {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn set_children(&mut self, children: Children) {
        self.children = children;
    }

    /// Number of named attributes (children excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no named attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over named attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A reusable component: a named, pure function from attributes to children.
///
/// Identity is the function pointer, so two fibers expanded from the same
/// component compare equal on kind. The name feeds `Debug` output and
/// scheduler logging.
#[derive(Clone, Copy)]
pub struct Component {
    name: &'static str,
    render: fn(&Attributes) -> Children,
}

impl Component {
    /// Create a component from a name and a render function.
    pub const fn new(name: &'static str, render: fn(&Attributes) -> Children) -> Self {
        Self { name, render }
    }

    /// The component's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the component with the given attributes.
    pub fn expand(&self, attributes: &Attributes) -> Children {
        (self.render)(attributes)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.render as usize == other.render as usize
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({})", self.name)
    }
}

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A stable identity for an element among its siblings.
///
/// Only strings and numbers are valid keys; the type makes anything else
/// unrepresentable. Absence of a key means "no stable identity".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// String key.
    Str(String),
    /// Numeric key.
    Num(i64),
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => write!(f, "{value:?}"),
            Self::Num(value) => write!(f, "{value}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ElementKind
// ---------------------------------------------------------------------------

/// What an element describes: one host-platform node, or one component
/// invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// A host-platform node, named by its tag (e.g. `"div"`, `"button"`).
    Host(String),
    /// A reusable component reference.
    Component(Component),
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        Self::Host(tag.to_owned())
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        Self::Host(tag)
    }
}

impl From<Component> for ElementKind {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// An immutable description of one logical node to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    attributes: Attributes,
    key: Option<Key>,
}

impl Element {
    /// Create an element from a kind and attributes.
    ///
    /// Prefer [`create_element`](crate::element::create_element), which also
    /// applies child normalization.
    pub fn new(kind: impl Into<ElementKind>, attributes: Attributes) -> Self {
        Self {
            kind: kind.into(),
            attributes,
            key: None,
        }
    }

    /// Attach a stable key (builder).
    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The element's kind.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// The element's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The element's key, if any.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub(crate) fn into_parts(self) -> (ElementKind, Attributes, Option<Key>) {
        (self.kind, self.attributes, self.key)
    }
}

// ---------------------------------------------------------------------------
// Child / Children
// ---------------------------------------------------------------------------

/// One entry of a children sequence.
///
/// `Bool` and `Nothing` are droppable noise: they may appear in authored
/// input (conditional rendering writes `cond.then(..)` and similar) and are
/// filtered out before any fiber is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// A nested element.
    Element(Element),
    /// A text leaf.
    Text(String),
    /// A numeric leaf, stringified when materialized.
    Number(f64),
    /// Ignored.
    Bool(bool),
    /// Ignored. The typed stand-in for an absent child.
    Nothing,
}

impl Child {
    /// Whether this child produces a fiber.
    pub fn is_renderable(&self) -> bool {
        matches!(self, Self::Element(_) | Self::Text(_) | Self::Number(_))
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Child {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Child {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Nothing,
        }
    }
}

/// An ordered sequence of children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Children(Vec<Child>);

impl Children {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Into<Child>) {
        self.0.push(child.into());
    }

    /// Append a child (builder).
    pub fn and(mut self, child: impl Into<Child>) -> Self {
        self.0.push(child.into());
        self
    }

    /// Number of entries, renderable or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Child> {
        self.0.iter()
    }

    /// Drop every non-renderable entry, preserving order.
    pub fn normalized(mut self) -> Self {
        self.0.retain(Child::is_renderable);
        self
    }
}

impl IntoIterator for Children {
    type Item = Child;
    type IntoIter = std::vec::IntoIter<Child>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a Child;
    type IntoIter = std::slice::Iter<'a, Child>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<I: IntoIterator<Item = Child>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Child> for Children {
    fn from(child: Child) -> Self {
        Self(vec![child])
    }
}

impl From<Element> for Children {
    fn from(element: Element) -> Self {
        Self(vec![Child::Element(element)])
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Self(vec![Child::from(text)])
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Self(vec![Child::from(text)])
    }
}

impl From<f64> for Children {
    fn from(value: f64) -> Self {
        Self(vec![Child::from(value)])
    }
}

impl From<i64> for Children {
    fn from(value: i64) -> Self {
        Self(vec![Child::from(value)])
    }
}

impl From<bool> for Children {
    fn from(value: bool) -> Self {
        Self(vec![Child::from(value)])
    }
}

impl From<Vec<Child>> for Children {
    fn from(children: Vec<Child>) -> Self {
        Self(children)
    }
}

impl From<Vec<Element>> for Children {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements.into_iter().map(Child::Element).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Children {
    fn from(children: [T; N]) -> Self {
        Self(children.into_iter().map(Into::into).collect())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
