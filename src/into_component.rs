//! Provides the [`IntoComponent`] trait and implementations.

use std::borrow::Cow;

use crate::{ClickEvent, Color, Component, EntityContent, HoverEvent, ItemContent, Style};

/// Trait for any data that can be converted to a [`Component`].
///
/// Also conveniently provides fluent methods for the base fields of a
/// [`Component`].
///
/// # Usage
///
/// ```
/// # use written_book::{Color, IntoComponent};
/// let greeting = "hello".color(Color::RED).bold();
/// ```
pub trait IntoComponent<'a>: Sized {
    /// Converts to a [`Component`], either owned or borrowed.
    fn into_cow_component(self) -> Cow<'a, Component>;

    /// Converts to an owned [`Component`].
    fn into_component(self) -> Component {
        self.into_cow_component().into_owned()
    }

    /// Sets the color of the component.
    fn color(self, color: impl Into<Color>) -> Component {
        let mut value = self.into_component();
        value.color = Some(color.into());
        value
    }
    /// Clears the color of the component.
    fn clear_color(self) -> Component {
        let mut value = self.into_component();
        value.color = None;
        value
    }

    /// Replaces the whole style block of the component.
    fn style(self, style: Style) -> Component {
        let mut value = self.into_component();
        value.style = Some(style);
        value
    }
    /// Clears the whole style block of the component.
    fn clear_style(self) -> Component {
        let mut value = self.into_component();
        value.style = None;
        value
    }

    /// Sets the font of the component.
    fn font(self, font: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).font = Some(font.into());
        value
    }
    /// Clears the font of the component.
    fn clear_font(self) -> Component {
        let mut value = self.into_component();
        if let Some(style) = &mut value.style {
            style.font = None;
        }
        value
    }

    /// Makes the component bold.
    fn bold(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).bold = Some(true);
        value
    }
    /// Makes the component explicitly not bold.
    fn not_bold(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).bold = Some(false);
        value
    }
    /// Unsets the `bold` property of the component.
    fn clear_bold(self) -> Component {
        let mut value = self.into_component();
        if let Some(style) = &mut value.style {
            style.bold = None;
        }
        value
    }

    /// Makes the component italic.
    fn italic(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).italic = Some(true);
        value
    }
    /// Makes the component explicitly not italic.
    fn not_italic(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).italic = Some(false);
        value
    }
    /// Unsets the `italic` property of the component.
    fn clear_italic(self) -> Component {
        let mut value = self.into_component();
        if let Some(style) = &mut value.style {
            style.italic = None;
        }
        value
    }

    /// Makes the component underlined.
    fn underlined(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).underlined = Some(true);
        value
    }
    /// Makes the component explicitly not underlined.
    fn not_underlined(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).underlined = Some(false);
        value
    }
    /// Unsets the `underlined` property of the component.
    fn clear_underlined(self) -> Component {
        let mut value = self.into_component();
        if let Some(style) = &mut value.style {
            style.underlined = None;
        }
        value
    }

    /// Adds a strikethrough effect to the component.
    fn strikethrough(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).strikethrough = Some(true);
        value
    }
    /// Explicitly removes the strikethrough effect from the component.
    fn not_strikethrough(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).strikethrough = Some(false);
        value
    }
    /// Unsets the `strikethrough` property of the component.
    fn clear_strikethrough(self) -> Component {
        let mut value = self.into_component();
        if let Some(style) = &mut value.style {
            style.strikethrough = None;
        }
        value
    }

    /// Makes the component obfuscated.
    fn obfuscated(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).obfuscated = Some(true);
        value
    }
    /// Makes the component explicitly not obfuscated.
    fn not_obfuscated(self) -> Component {
        let mut value = self.into_component();
        value.style.get_or_insert_with(Style::new).obfuscated = Some(false);
        value
    }
    /// Unsets the `obfuscated` property of the component.
    fn clear_obfuscated(self) -> Component {
        let mut value = self.into_component();
        if let Some(style) = &mut value.style {
            style.obfuscated = None;
        }
        value
    }

    /// On click, opens the given URL. Has to use the `http` or `https`
    /// protocol.
    fn on_click_open_url(self, url: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.click_event = Some(ClickEvent::OpenUrl(url.into()));
        value
    }
    /// On click, opens the given file. Only usable by internal servers for
    /// security reasons.
    fn on_click_open_file(self, path: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.click_event = Some(ClickEvent::OpenFile(path.into()));
        value
    }
    /// On click, sends a command. Doesn't actually have to be a command,
    /// can be a simple chat message.
    fn on_click_run_command(self, command: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.click_event = Some(ClickEvent::RunCommand(command.into()));
        value
    }
    /// On click, copies the given text to the chat box.
    fn on_click_suggest_command(self, command: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.click_event = Some(ClickEvent::SuggestCommand(command.into()));
        value
    }
    /// On click, turns the page of the opened book to the given number.
    /// Indexing starts at `1`; the number is written in decimal.
    fn on_click_change_page(self, page: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.click_event = Some(ClickEvent::ChangePage(page.into()));
        value
    }
    /// On click, copies the given text to clipboard.
    fn on_click_copy_to_clipboard(self, text: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.click_event = Some(ClickEvent::CopyToClipboard(text.into()));
        value
    }
    /// Clears the `click_event` property of the component.
    fn clear_click_event(self) -> Component {
        let mut value = self.into_component();
        value.click_event = None;
        value
    }

    /// On mouse hover, shows the given component's text in a tooltip.
    fn on_hover_show_text(self, text: impl IntoComponent<'static>) -> Component {
        let mut value = self.into_component();
        value.hover_event = Some(HoverEvent::from(text.into_component()));
        value
    }
    /// On mouse hover, shows the given item.
    fn on_hover_show_item(self, item: ItemContent) -> Component {
        let mut value = self.into_component();
        value.hover_event = Some(HoverEvent::from(item));
        value
    }
    /// On mouse hover, shows the given entity.
    fn on_hover_show_entity(self, entity: EntityContent) -> Component {
        let mut value = self.into_component();
        value.hover_event = Some(HoverEvent::from(entity));
        value
    }
    /// Clears the `hover_event` property of the component.
    fn clear_hover_event(self) -> Component {
        let mut value = self.into_component();
        value.hover_event = None;
        value
    }
}

impl<'a> IntoComponent<'a> for Component {
    fn into_cow_component(self) -> Cow<'a, Component> {
        Cow::Owned(self)
    }
}
impl<'a> IntoComponent<'a> for &'a Component {
    fn into_cow_component(self) -> Cow<'a, Component> {
        Cow::Borrowed(self)
    }
}
impl<'a> From<&'a Component> for Component {
    fn from(value: &'a Component) -> Self {
        value.clone()
    }
}

impl<'a> IntoComponent<'a> for Cow<'a, Component> {
    fn into_cow_component(self) -> Cow<'a, Component> {
        self
    }
}
impl<'a> From<Cow<'a, Component>> for Component {
    fn from(value: Cow<'a, Component>) -> Self {
        value.into_owned()
    }
}
impl<'a, 'b> IntoComponent<'a> for &'a Cow<'b, Component> {
    fn into_cow_component(self) -> Cow<'a, Component> {
        self.clone()
    }
}
impl<'a, 'b> From<&'a Cow<'b, Component>> for Component {
    fn from(value: &'a Cow<'b, Component>) -> Self {
        value.clone().into_owned()
    }
}

impl<'a> IntoComponent<'a> for String {
    fn into_cow_component(self) -> Cow<'a, Component> {
        Cow::Owned(Component::text(self))
    }
}
impl From<String> for Component {
    fn from(value: String) -> Self {
        value.into_component()
    }
}
impl<'a, 'b> IntoComponent<'b> for &'a String {
    fn into_cow_component(self) -> Cow<'b, Component> {
        Cow::Owned(Component::text(self.clone()))
    }
}
impl<'a> From<&'a String> for Component {
    fn from(value: &'a String) -> Self {
        value.into_component()
    }
}

impl<'a> IntoComponent<'a> for Cow<'static, str> {
    fn into_cow_component(self) -> Cow<'a, Component> {
        Cow::Owned(Component::text(self))
    }
}
impl From<Cow<'static, str>> for Component {
    fn from(value: Cow<'static, str>) -> Self {
        value.into_component()
    }
}
impl<'a> IntoComponent<'static> for &'a Cow<'static, str> {
    fn into_cow_component(self) -> Cow<'static, Component> {
        Cow::Owned(Component::text(self.clone()))
    }
}
impl<'a> From<&'a Cow<'static, str>> for Component {
    fn from(value: &'a Cow<'static, str>) -> Self {
        value.into_component()
    }
}

impl<'a> IntoComponent<'a> for &'static str {
    fn into_cow_component(self) -> Cow<'a, Component> {
        Cow::Owned(Component::text(self))
    }
}
impl From<&'static str> for Component {
    fn from(value: &'static str) -> Self {
        value.into_component()
    }
}

macro_rules! impl_primitives {
    ($($primitive:ty),+) => {
        $(
            impl<'a> IntoComponent<'a> for $primitive {
                fn into_cow_component(self) -> Cow<'a, Component> {
                    Cow::Owned(Component::text(self.to_string()))
                }
            }
        )+
    };
}
impl_primitives! {char, bool, f32, f64, isize, usize, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128}
