//! [`Page`] and [`Book`], the written-book aggregates.

use std::borrow::Cow;
use std::ops;

use serde_json::Value;

use crate::stringify::render_content;
use crate::IntoComponent;

/// One book page: an ordered collection of rendered component mappings.
///
/// Every page carries a reserved leading empty-string slot; the consuming
/// parser ignores the first array element, so components start at slot 1.
/// Components are rendered to their mappings at append time and pages are
/// append-only; there is no edit or removal once content is in.
#[derive(Clone, PartialEq, Debug)]
pub struct Page {
    content: Vec<Value>,
}

impl Page {
    /// Constructs an empty page holding only the reserved placeholder
    /// slot.
    pub fn new() -> Self {
        Self {
            content: vec![Value::String(String::new())],
        }
    }

    /// Renders the given component and appends its mapping.
    pub fn add_component<'a>(&mut self, component: impl IntoComponent<'a>) -> &mut Self {
        self.content.push(component.into_cow_component().produce());
        self
    }

    /// Renders and appends every component in the collection, in order.
    pub fn add_components<'a, I>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoComponent<'a>,
    {
        for component in components {
            self.add_component(component);
        }
        self
    }

    /// Returns a copy of this page with the component appended, leaving
    /// the receiver unmodified.
    pub fn with_component<'a>(&self, component: impl IntoComponent<'a>) -> Self {
        let mut page = self.clone();
        page.add_component(component);
        page
    }

    /// Number of appended components. The placeholder slot is not counted.
    pub fn len(&self) -> usize {
        self.content.len() - 1
    }

    /// Returns `true` if no component has been appended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the page to its flattened string encoding.
    ///
    /// The content list (placeholder slot included) is written in a
    /// JSON-array-like form and then normalized to the double-quote
    /// convention the book grammar requires.
    ///
    /// Pure; repeated calls on an unmutated page are byte-identical.
    ///
    /// # Warning
    ///
    /// The normalization is a global single-quote to double-quote
    /// substitution over the serialized text. Any component text, nested
    /// struct, or opaque payload that legitimately contains a literal `'`
    /// is corrupted by it: the quote becomes a `"` and breaks the string
    /// out of its delimiters. The exact escaping rules of the consuming
    /// grammar are unspecified, so the substitution is kept as a known
    /// format boundary rather than guessed around. Keep single quotes out
    /// of page content.
    pub fn render(&self) -> String {
        render_content(&self.content)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: IntoComponent<'a>> ops::Add<T> for Page {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self::Output {
        self.add_component(rhs);
        self
    }
}

impl<'a, T: IntoComponent<'a>> ops::AddAssign<T> for Page {
    fn add_assign(&mut self, rhs: T) {
        self.add_component(rhs);
    }
}

impl<'a, T: IntoComponent<'a>> FromIterator<T> for Page {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut page = Self::new();
        page.add_components(iter);
        page
    }
}

/// A written book: author/title metadata plus an ordered collection of
/// pages.
///
/// Constructed with its metadata, grown by appending pages, and rendered
/// on demand; rendering never mutates and may be repeated freely.
#[derive(Clone, PartialEq, Debug)]
pub struct Book {
    author: Cow<'static, str>,
    title: Cow<'static, str>,
    pages: Vec<Page>,
}

impl Book {
    /// The self-reference selector, targeting the invoking player.
    pub const SELF_SELECTOR: &'static str = "@s";
    /// Conventional item count for a single book.
    pub const DEFAULT_COUNT: i32 = 1;

    /// Constructs a book with the given metadata and no pages.
    pub fn new(author: impl Into<Cow<'static, str>>, title: impl Into<Cow<'static, str>>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            pages: Vec::new(),
        }
    }

    /// Appends a page.
    pub fn add_page(&mut self, page: Page) -> &mut Self {
        self.pages.push(page);
        self
    }

    /// Appends every page in the collection, in order.
    pub fn add_pages(&mut self, pages: impl IntoIterator<Item = Page>) -> &mut Self {
        self.pages.extend(pages);
        self
    }

    /// Returns a copy of this book with the page appended, leaving the
    /// receiver unmodified.
    pub fn with_page(&self, page: Page) -> Self {
        let mut book = self.clone();
        book.add_page(page);
        book
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the book has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Renders the book to its struct-literal encoding:
    /// `{author:"<author>", title:"<title>", pages:[<pages>]}`.
    ///
    /// Author and title are interpolated raw; they are caller-trusted like
    /// the rest of the metadata.
    pub fn render(&self) -> String {
        let mut out = format!("{{author:\"{}\", title:\"{}\", pages:[", self.author, self.title);

        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&page.render());
        }

        out.push_str("]}");
        out
    }

    /// The item form of the book: the item identifier with the rendered
    /// struct as its data payload.
    pub fn item(&self) -> String {
        format!("minecraft:written_book{}", self.render())
    }

    /// Builds the full give command for this book. No validation is done
    /// on `selector` or `count`; both pass through as supplied. The
    /// conventional arguments are [`Self::SELF_SELECTOR`] and
    /// [`Self::DEFAULT_COUNT`].
    pub fn give_command(&self, selector: &str, count: i32) -> String {
        format!("/give {selector} {} {count}", self.item())
    }
}

impl ops::Add<Page> for Book {
    type Output = Self;

    fn add(mut self, rhs: Page) -> Self::Output {
        self.add_page(rhs);
        self
    }
}

impl ops::AddAssign<Page> for Book {
    fn add_assign(&mut self, rhs: Page) {
        self.add_page(rhs);
    }
}
