//! Formatted text components and written books.
//!
//! This crate builds the text component trees used by Minecraft's book and
//! chat markup and serializes them into the two textual encodings a
//! written book needs: the JSON-like component mapping for individual
//! pieces of styled, interactive text, and the flattened string encoding
//! for a book's pages and metadata that a `/give` command embeds. The
//! output is consumed by the game's own command parser, which is strict;
//! field presence, key order, and quoting are all part of the format.
//!
//! # Examples
//!
//! With [`IntoComponent`] in scope:
//!
//! ```
//! use written_book::{Book, Color, IntoComponent, Page};
//!
//! let mut page = Page::new();
//! page.add_component("Hello, ".into_component().color(Color::GOLD));
//! page.add_component("world!".bold());
//!
//! let mut book = Book::new("Herobrine", "Greetings");
//! book.add_page(page);
//!
//! assert_eq!(
//!     book.give_command("@p", 1),
//!     r#"/give @p minecraft:written_book{author:"Herobrine", title:"Greetings", pages:[["", {"color": "gold", "text": "Hello, ", "type": "text"}, {"bold": true, "text": "world!", "type": "text"}]]} 1"#
//! );
//! ```
//!
//! # Known format boundary
//!
//! [`Page::render`] normalizes string quoting with a global single-quote to
//! double-quote substitution. Component text (or any nested payload) that
//! itself contains a literal `'` is corrupted by that substitution. See
//! [`Page::render`] for details.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub mod color;

mod book;
mod event;
mod into_component;
mod style;
mod stringify;

#[cfg(test)]
mod tests;

pub use book::{Book, Page};
pub use color::{Color, ColorError, HexColor, NamedColor};
pub use event::{ClickEvent, EntityContent, EntityName, HoverEvent, ItemContent};
pub use into_component::IntoComponent;
pub use style::Style;

/// One styled, interactive unit of displayable content.
///
/// A component pairs its [`Content`] variant with the shared base fields:
/// an optional [`Color`], an optional [`Style`], and optional hover/click
/// events. [`produce`](Self::produce) renders it to the mapping the book
/// format expects; the [`IntoComponent`] trait provides fluent builder
/// methods for the base fields.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Component(Box<ComponentInner>);

/// Component content and formatting.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ComponentInner {
    pub content: Content,
    pub color: Option<Color>,
    pub style: Option<Style>,
    pub hover_event: Option<HoverEvent>,
    pub click_event: Option<ClickEvent>,
}

/// The content of a [`Component`].
#[derive(Clone, PartialEq, Debug)]
pub enum Content {
    /// Plain text.
    Text { text: Cow<'static, str> },
    /// A piece of text that will be translated on the client based on the
    /// client language. If no corresponding translation can be found, the
    /// identifier itself (or the fallback, when given) is used.
    Translate {
        /// A translation identifier, corresponding to the identifiers found
        /// in loaded language files.
        translate: Cow<'static, str>,
        /// Text shown when no translation exists for the identifier.
        fallback: Option<Cow<'static, str>>,
        /// Optional component to be inserted into the slot of the
        /// translation text.
        with: Option<Box<Component>>,
    },
    /// Displays a score holder's current score in an objective.
    Score { score: ScoreContent },
    /// Displays the name of one or more entities found by a target
    /// selector.
    Selector {
        /// A string containing a target selector.
        selector: Cow<'static, str>,
        /// An optional custom separator used when the selector returns
        /// multiple entities.
        separator: Option<Box<Component>>,
    },
    /// Displays the name of the button that is currently bound to a
    /// certain configurable control on the client.
    Keybind {
        /// Opaque keybind payload, passed through untouched.
        keybind: Value,
    },
    /// Caller-supplied NBT keys, merged flat into the rendered mapping.
    Nbt { nbt: Map<String, Value> },
    /// Arbitrary passthrough value. Bypasses the base fields and every
    /// rendering invariant; the caller owns output correctness.
    Raw { raw: Value },
}

/// Scoreboard value.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ScoreContent {
    /// The name of the score holder whose score should be displayed. This
    /// can be a selector or an explicit name.
    pub name: Cow<'static, str>,
    /// The internal name of the objective to display the score in.
    pub objective: Cow<'static, str>,
}

#[allow(clippy::self_named_constructors)]
impl Component {
    /// Constructs a new plain text component.
    pub fn text(plain: impl Into<Cow<'static, str>>) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Text { text: plain.into() },
            ..Default::default()
        }))
    }

    /// Creates translated text based on the given translation key, with an
    /// optional fallback and an optional component to be inserted into the
    /// slot of the translation text.
    pub fn translate(
        key: impl Into<Cow<'static, str>>,
        fallback: Option<Cow<'static, str>>,
        with: Option<Component>,
    ) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Translate {
                translate: key.into(),
                fallback,
                with: with.map(Box::new),
            },
            ..Default::default()
        }))
    }

    /// Creates a component displaying a score from the scoreboard.
    pub fn score(
        name: impl Into<Cow<'static, str>>,
        objective: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Score {
                score: ScoreContent {
                    name: name.into(),
                    objective: objective.into(),
                },
            },
            ..Default::default()
        }))
    }

    /// Creates a component for selecting entity names with an optional
    /// custom separator.
    pub fn selector(selector: impl Into<Cow<'static, str>>, separator: Option<Component>) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Selector {
                selector: selector.into(),
                separator: separator.map(Box::new),
            },
            ..Default::default()
        }))
    }

    /// Creates a component for a keybind. The payload is passed through
    /// untouched.
    pub fn keybind(keybind: impl Into<Value>) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Keybind {
                keybind: keybind.into(),
            },
            ..Default::default()
        }))
    }

    /// Creates a component from caller-supplied NBT keys. The keys are
    /// merged flat into the rendered mapping, overwriting any base field of
    /// the same name.
    pub fn nbt(nbt: impl Into<Map<String, Value>>) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Nbt { nbt: nbt.into() },
            ..Default::default()
        }))
    }

    /// Creates a raw passthrough component. [`produce`](Self::produce)
    /// returns the wrapped value unchanged, skipping validation and
    /// base-field merging entirely.
    pub fn raw(raw: impl Into<Value>) -> Self {
        Self(Box::new(ComponentInner {
            content: Content::Raw { raw: raw.into() },
            ..Default::default()
        }))
    }

    /// Renders this component to its serializable mapping.
    ///
    /// Pure and side-effect free; every call returns a freshly built value
    /// that aliases none of the component's internal state. Base fields
    /// come first (`color`, `hoverEvent`, `clickEvent`, then the set style
    /// fields, flattened), followed by the variant-specific keys and the
    /// `type` discriminator. On a key collision the variant-specific key
    /// wins.
    pub fn produce(&self) -> Value {
        let inner = &*self.0;

        if let Content::Raw { raw } = &inner.content {
            return raw.clone();
        }

        let mut map = Map::new();

        if let Some(color) = &inner.color {
            map.insert("color".into(), to_value(color));
        }
        if let Some(hover) = &inner.hover_event {
            map.insert("hoverEvent".into(), to_value(hover));
        }
        if let Some(click) = &inner.click_event {
            map.insert("clickEvent".into(), to_value(click));
        }
        if let Some(style) = &inner.style {
            map.extend(style.to_mapping());
        }

        match &inner.content {
            Content::Text { text } => {
                map.insert("text".into(), text.as_ref().into());
                map.insert("type".into(), "text".into());
            }
            Content::Translate {
                translate,
                fallback,
                with,
            } => {
                map.insert("translate".into(), translate.as_ref().into());
                map.insert("type".into(), "translatable".into());
                if let Some(fallback) = fallback {
                    map.insert("fallback".into(), fallback.as_ref().into());
                }
                if let Some(with) = with {
                    map.insert("with".into(), with.produce());
                }
            }
            Content::Score { score } => {
                map.insert("score".into(), to_value(score));
                map.insert("type".into(), "score".into());
            }
            Content::Selector {
                selector,
                separator,
            } => {
                map.insert("type".into(), "selector".into());
                map.insert("selector".into(), selector.as_ref().into());
                if let Some(separator) = separator {
                    map.insert("separator".into(), separator.produce());
                }
            }
            Content::Keybind { keybind } => {
                map.insert("keybind".into(), keybind.clone());
                map.insert("type".into(), "keybind".into());
            }
            Content::Nbt { nbt } => {
                // TODO: confirm which discriminator the consuming parser
                // expects for nbt components; the established output tags
                // them "keybind" and changing it would alter the wire
                // format.
                map.insert("type".into(), "keybind".into());
                map.extend(nbt.clone());
            }
            Content::Raw { .. } => unreachable!("handled above"),
        }

        Value::Object(map)
    }
}

/// Serializes structured data that cannot fail to serialize (string keys
/// only, no fallible `Serialize` impls).
pub(crate) fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|err| panic!("failed to serialize component data\n{err}"))
}

impl Deref for Component {
    type Target = ComponentInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Component {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.produce().serialize(serializer)
    }
}

/// Displays the component's strict-JSON encoding. The alternate flag
/// (`{:#}`) pretty-prints it.
impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(|_| fmt::Error)?;

        f.write_str(&json)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text { text: "".into() }
    }
}
