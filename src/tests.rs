use serde_json::{json, Map, Value};

use super::*;

#[test]
fn style_serializes_only_set_fields() {
    assert!(Style::new().to_mapping().is_empty());

    let style = Style {
        bold: Some(true),
        italic: Some(false),
        ..Default::default()
    };
    let map = style.to_mapping();

    assert_eq!(map.len(), 2);
    assert_eq!(map["bold"], Value::Bool(true));
    assert_eq!(map["italic"], Value::Bool(false));
    assert!(!map.contains_key("underlined"));
    assert!(!map.contains_key("strikethrough"));
    assert!(!map.contains_key("obfuscated"));
    assert!(!map.contains_key("font"));
}

#[test]
fn style_flattened_into_component() {
    let comp = Component::text("x").bold().not_italic().font("minecraft:alt");

    assert_eq!(
        comp.to_string(),
        r#"{"bold":true,"italic":false,"font":"minecraft:alt","text":"x","type":"text"}"#
    );
}

#[test]
fn color_appears_verbatim() {
    let comp = Component::text("x").color(Color::try_from("#AbCdEf").unwrap());
    assert_eq!(comp.produce()["color"], "#AbCdEf");

    let comp = Component::text("x").color(Color::RED);
    assert_eq!(comp.produce()["color"], "red");

    for named in NamedColor::ALL {
        let comp = Component::text("x").color(named);
        assert_eq!(comp.produce()["color"], named.name());
    }
}

#[test]
fn click_event_mapping() {
    let v = crate::to_value(&ClickEvent::OpenUrl("https://example.com".into()));
    assert_eq!(v, json!({"action": "open_url", "value": "https://example.com"}));

    let cases = [
        (ClickEvent::OpenFile("/tmp/shot.png".into()), "open_file"),
        (ClickEvent::RunCommand("/say hi".into()), "run_command"),
        (ClickEvent::SuggestCommand("/tp ".into()), "suggest_command"),
        (ClickEvent::ChangePage("2".into()), "change_page"),
        (ClickEvent::CopyToClipboard("secret".into()), "copy_to_clipboard"),
    ];
    for (event, action) in &cases {
        let v = crate::to_value(event);
        assert_eq!(v["action"], *action);
        assert!(v.get("value").is_some());
    }
}

#[test]
fn hover_action_matches_contents() {
    let v = crate::to_value(&HoverEvent::from(Component::text("tip")));
    assert_eq!(v["action"], "show_text");
    assert_eq!(v["contents"]["type"], "text");

    let item = ItemContent {
        id: "minecraft:diamond".into(),
        count: Some(2),
        tag: None,
    };
    let v = crate::to_value(&HoverEvent::from(item));
    assert_eq!(v["action"], "show_item");
    assert_eq!(v["contents"]["id"], "minecraft:diamond");
    assert_eq!(v["contents"]["count"], 2);
    assert!(v["contents"].get("tag").is_none());

    let mut entity = EntityContent::new("minecraft:zombie", "8dcf3f10-2bb7-42c0-a653-6b2a06256bca");
    entity.name = Some("Bob".into());
    let v = crate::to_value(&HoverEvent::from(entity));
    assert_eq!(v["action"], "show_entity");
    assert_eq!(v["contents"]["type"], "minecraft:zombie");
    assert_eq!(v["contents"]["uuid"], "8dcf3f10-2bb7-42c0-a653-6b2a06256bca");
    assert_eq!(v["contents"]["name"], "Bob");

    let mut entity = EntityContent::new("minecraft:cow", "0-0-0-0-0");
    entity.name = Some(Component::text("Moo").italic().into());
    let v = crate::to_value(&HoverEvent::from(entity));
    assert_eq!(v["contents"]["name"]["text"], "Moo");
}

#[test]
fn text_encoding() {
    let comp = Component::text("Hi").color(Color::RED);
    assert_eq!(comp.to_string(), r#"{"color":"red","text":"Hi","type":"text"}"#);

    assert_eq!(Component::default().to_string(), r#"{"text":"","type":"text"}"#);
}

#[test]
fn translatable_encoding() {
    let comp = Component::translate(
        "item.example.name",
        Some("Example".into()),
        Some(Component::text("slot")),
    );
    assert_eq!(
        comp.to_string(),
        r#"{"translate":"item.example.name","type":"translatable","fallback":"Example","with":{"text":"slot","type":"text"}}"#
    );

    let comp = Component::translate("chat.type.text", None, None);
    assert_eq!(
        comp.to_string(),
        r#"{"translate":"chat.type.text","type":"translatable"}"#
    );
}

#[test]
fn score_encoding() {
    let comp = Component::score("foo", "bar");
    assert_eq!(
        comp.to_string(),
        r#"{"score":{"name":"foo","objective":"bar"},"type":"score"}"#
    );
}

#[test]
fn selector_encoding() {
    let separator = Component::text(", ").color(Color::GRAY);
    let comp = Component::selector("@e[type=cow]", Some(separator));
    assert_eq!(
        comp.to_string(),
        r#"{"type":"selector","selector":"@e[type=cow]","separator":{"color":"gray","text":", ","type":"text"}}"#
    );
}

#[test]
fn keybind_encoding() {
    let comp = Component::keybind(json!({"key": "key.jump"}));
    assert_eq!(comp.to_string(), r#"{"keybind":{"key":"key.jump"},"type":"keybind"}"#);
}

#[test]
fn nbt_merges_flat() {
    let mut nbt = Map::new();
    nbt.insert("block".into(), "1 2 3".into());
    nbt.insert("nbt".into(), "Items".into());

    let comp = Component::nbt(nbt).color(Color::GOLD);
    assert_eq!(
        comp.to_string(),
        r#"{"color":"gold","type":"keybind","block":"1 2 3","nbt":"Items"}"#
    );
}

#[test]
fn variant_keys_win_collisions() {
    let mut nbt = Map::new();
    nbt.insert("color".into(), "green".into());

    let comp = Component::nbt(nbt).color(Color::RED);
    assert_eq!(comp.produce()["color"], "green");
}

#[test]
fn raw_bypasses_everything() {
    let payload = json!(["a", {"b": 1}]);
    let comp = Component::raw(payload.clone()).color(Color::RED).bold();

    assert_eq!(comp.produce(), payload);
}

#[test]
fn produce_is_pure() {
    let comp = Component::text("Hi").color(Color::RED).bold();
    assert_eq!(comp.produce(), comp.produce());
}

#[test]
fn page_length_counts_components_only() {
    let mut page = Page::new();
    assert_eq!(page.len(), 0);
    assert!(page.is_empty());

    page.add_component(Component::text("a"));
    page.add_components([Component::text("b"), Component::text("c")]);
    assert_eq!(page.len(), 3);

    let collected: Page = ["a", "b"].into_iter().collect();
    assert_eq!(collected.len(), 2);
}

#[test]
fn page_composition() {
    let page = Page::new();
    let bigger = page.with_component(Component::text("x"));
    assert_eq!(page.len(), 0);
    assert_eq!(bigger.len(), 1);

    let mut page = Page::new();
    page += Component::text("y");
    assert_eq!(page.len(), 1);

    let page = Page::new() + "plain" + Component::text("z");
    assert_eq!(page.len(), 2);
}

#[test]
fn empty_page_render() {
    assert_eq!(Page::new().render(), r#"["", ]"#);
}

#[test]
fn page_render_exact() {
    let mut page = Page::new();
    page.add_component(Component::text("Hi").color(Color::RED));
    assert_eq!(page.render(), r#"["", {"color": "red", "text": "Hi", "type": "text"}]"#);

    let mut page = Page::new();
    page.add_component(
        Component::text("[Google Search]")
            .color(Color::BLUE)
            .italic()
            .underlined()
            .on_click_open_url("https://google.com"),
    );
    assert_eq!(
        page.render(),
        r#"["", {"color": "blue", "clickEvent": {"action": "open_url", "value": "https://google.com"}, "italic": true, "underlined": true, "text": "[Google Search]", "type": "text"}]"#
    );
}

#[test]
fn page_render_nests_events() {
    let mut page = Page::new();
    page.add_component(
        Component::text("link")
            .on_hover_show_text(Component::text("tip").color(Color::WHITE).underlined()),
    );
    assert_eq!(
        page.render(),
        r#"["", {"hoverEvent": {"action": "show_text", "contents": {"color": "white", "underlined": true, "text": "tip", "type": "text"}}, "text": "link", "type": "text"}]"#
    );
}

#[test]
fn page_render_reparses_as_json() {
    let mut page = Page::new();
    page.add_component(Component::text("Hi").color(Color::RED));

    let parsed: Value = serde_json::from_str(&page.render()).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0], "");
    assert_eq!(arr[1]["type"], "text");
    assert_eq!(arr[1]["text"], "Hi");
    assert_eq!(arr[1]["color"], "red");
}

// The quote normalization is a global substitution; a literal single quote
// inside component text is rewritten into a double quote and breaks the
// string out of its delimiters. Known boundary of the encoding, confined
// to content containing that character.
#[test]
fn single_quote_content_is_corrupted() {
    let mut page = Page::new();
    page.add_component(Component::text("it's mine"));

    let rendered = page.render();
    assert!(!rendered.contains('\''));
    assert!(rendered.contains(r#""it"s mine""#));

    let mut page = Page::new();
    page.add_component(Component::text("it is mine"));
    assert!(page.render().contains(r#""it is mine""#));
}

#[test]
fn book_render_exact() {
    let mut book = Book::new("A", "T");
    let mut page = Page::new();
    page.add_component(Component::text("Hi").color(Color::RED));
    book.add_page(page);

    assert_eq!(
        book.render(),
        r#"{author:"A", title:"T", pages:[["", {"color": "red", "text": "Hi", "type": "text"}]]}"#
    );
}

#[test]
fn book_render_joins_pages() {
    let mut book = Book::new("A", "T");
    book.add_pages([Page::new(), Page::new()]);
    assert_eq!(book.len(), 2);
    assert_eq!(book.render(), r#"{author:"A", title:"T", pages:[["", ], ["", ]]}"#);
}

#[test]
fn book_composition() {
    let book = Book::new("A", "T");
    let bigger = book.with_page(Page::new());
    assert!(book.is_empty());
    assert_eq!(bigger.len(), 1);

    let mut book = Book::new("A", "T");
    book += Page::new();
    let book = book + Page::new();
    assert_eq!(book.len(), 2);
}

#[test]
fn giveable_book() {
    let mut book = Book::new("A", "T");
    book.add_page(Page::new());

    assert_eq!(
        book.item(),
        r#"minecraft:written_book{author:"A", title:"T", pages:[["", ]]}"#
    );
    assert_eq!(
        book.give_command("@p", 5),
        r#"/give @p minecraft:written_book{author:"A", title:"T", pages:[["", ]]} 5"#
    );
    assert_eq!(
        book.give_command(Book::SELF_SELECTOR, Book::DEFAULT_COUNT),
        r#"/give @s minecraft:written_book{author:"A", title:"T", pages:[["", ]]} 1"#
    );
}

#[test]
fn render_is_idempotent() {
    let mut book = Book::new("null", "Mystery notebook");
    let mut page = Page::new();
    page.add_component(
        Component::text("[Google Search]")
            .color(Color::BLUE)
            .style(Style {
                underlined: Some(true),
                italic: Some(true),
                ..Default::default()
            })
            .on_click_open_url("https://google.com")
            .on_hover_show_text(
                Component::text("Go to https://google.com")
                    .color(Color::WHITE)
                    .underlined(),
            ),
    );
    book.add_page(page.clone());

    assert_eq!(page.render(), page.render());
    assert_eq!(book.render(), book.render());
    assert_eq!(book.give_command("@s", 1), book.give_command("@s", 1));
}
