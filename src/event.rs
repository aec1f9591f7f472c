//! Click and hover interaction events.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::Component;

/// Action to take on click of the component.
///
/// Serializes as `{"action": <snake_case action>, "value": <value>}`, both
/// fields unconditionally present. Every payload is a string; for
/// [`ChangePage`](Self::ChangePage) the string holds the 1-based page
/// number in decimal.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickEvent {
    /// Opens an URL. Has to use the `http` or `https` protocol.
    OpenUrl(Cow<'static, str>),
    /// Opens a file on the client. Only usable by internal servers for
    /// security reasons.
    OpenFile(Cow<'static, str>),
    /// Sends a chat command. Doesn't actually have to be a command, can be
    /// a normal chat message.
    RunCommand(Cow<'static, str>),
    /// Replaces the contents of the chat box with the text, not necessarily
    /// a command.
    SuggestCommand(Cow<'static, str>),
    /// Only usable within written books. Changes the page of the book.
    /// Indexing starts at 1.
    ChangePage(Cow<'static, str>),
    /// Copies the given text to clipboard.
    CopyToClipboard(Cow<'static, str>),
}

/// Action to take when mouse-hovering on the component.
///
/// The `action` tag is derived from the content variant, so the two can
/// never disagree. Construct via the `From` impls for [`Component`],
/// [`ItemContent`], and [`EntityContent`].
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "action", content = "contents", rename_all = "snake_case")]
#[allow(clippy::enum_variant_names)]
pub enum HoverEvent {
    /// Displays a tooltip with the given component's rendered mapping.
    ShowText(Box<Component>),
    /// Shows an item.
    ShowItem(ItemContent),
    /// Shows an entity.
    ShowEntity(EntityContent),
}

/// Item payload of a [`HoverEvent::ShowItem`].
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ItemContent {
    /// Resource identifier of the item.
    pub id: Cow<'static, str>,
    /// Number of items in the stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Opaque NBT payload of the item, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Value>,
}

/// Entity payload of a [`HoverEvent::ShowEntity`].
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct EntityContent {
    /// Resource identifier of the entity's type.
    #[serde(rename = "type")]
    pub kind: Cow<'static, str>,
    /// The entity's UUID, as a string.
    pub uuid: Cow<'static, str>,
    /// Optional custom name for the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<EntityName>,
}

/// Custom entity name: either a plain string or a full component.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum EntityName {
    Plain(Cow<'static, str>),
    Component(Box<Component>),
}

impl ItemContent {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            count: None,
            tag: None,
        }
    }
}

impl EntityContent {
    pub fn new(kind: impl Into<Cow<'static, str>>, uuid: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: kind.into(),
            uuid: uuid.into(),
            name: None,
        }
    }
}

impl From<Component> for HoverEvent {
    fn from(contents: Component) -> Self {
        Self::ShowText(Box::new(contents))
    }
}

impl From<ItemContent> for HoverEvent {
    fn from(contents: ItemContent) -> Self {
        Self::ShowItem(contents)
    }
}

impl From<EntityContent> for HoverEvent {
    fn from(contents: EntityContent) -> Self {
        Self::ShowEntity(contents)
    }
}

impl From<Component> for EntityName {
    fn from(value: Component) -> Self {
        Self::Component(Box::new(value))
    }
}

impl From<&'static str> for EntityName {
    fn from(value: &'static str) -> Self {
        Self::Plain(value.into())
    }
}

impl From<String> for EntityName {
    fn from(value: String) -> Self {
        Self::Plain(value.into())
    }
}
