use entmark_core::{Entity, EntityKind, MarkupLanguage, render};

#[test]
fn parses_an_upstream_payload() {
    let payload = r#"[
        {"offset": 0, "length": 10, "type": "bold"},
        {"offset": 0, "length": 5, "type": "italic"},
        {"offset": 11, "length": 4, "type": "text_link", "url": "https://example.com"},
        {"offset": 16, "length": 5, "type": "text_mention",
         "user": {"id": 42, "is_bot": false, "first_name": "Alice"}},
        {"offset": 22, "length": 4, "type": "pre", "language": "rust"}
    ]"#;
    let entities: Vec<Entity> = serde_json::from_str(payload).expect("parse entities");

    assert_eq!(entities[0], Entity::new(0, 10, EntityKind::Bold));
    assert_eq!(
        entities[2].kind,
        EntityKind::TextLink {
            url: "https://example.com".to_string(),
        }
    );
    assert_eq!(entities[3].kind, EntityKind::TextMention { user_id: 42 });
    assert_eq!(
        entities[4].kind,
        EntityKind::Pre {
            language: Some("rust".to_string()),
        }
    );
}

#[test]
fn renders_straight_from_the_wire() {
    let payload = r#"[
        {"offset": 0, "length": 10, "type": "bold"},
        {"offset": 0, "length": 5, "type": "italic"}
    ]"#;
    let entities: Vec<Entity> = serde_json::from_str(payload).expect("parse entities");
    assert_eq!(
        render("HelloWorld", &entities, MarkupLanguage::Html).as_deref(),
        Ok("<b><i>Hello</i>World</b>")
    );
}

#[test]
fn aux_fields_are_required_per_kind() {
    let missing_url = r#"{"offset": 0, "length": 1, "type": "text_link"}"#;
    let err = serde_json::from_str::<Entity>(missing_url).expect_err("url is required");
    assert!(err.to_string().contains("url"), "got: {}", err);

    let missing_user = r#"{"offset": 0, "length": 1, "type": "text_mention"}"#;
    let err = serde_json::from_str::<Entity>(missing_user).expect_err("user is required");
    assert!(err.to_string().contains("user"), "got: {}", err);

    // `language` stays optional on pre.
    let plain_pre = r#"{"offset": 0, "length": 1, "type": "pre"}"#;
    let entity: Entity = serde_json::from_str(plain_pre).expect("parse pre");
    assert_eq!(entity.kind, EntityKind::Pre { language: None });
}

#[test]
fn unknown_kind_is_rejected() {
    let unknown = r#"{"offset": 0, "length": 1, "type": "marquee"}"#;
    let err = serde_json::from_str::<Entity>(unknown).expect_err("unknown type");
    assert!(err.to_string().contains("marquee"), "got: {}", err);
}

#[test]
fn entities_round_trip() {
    let entities = vec![
        Entity::new(0, 3, EntityKind::Bold),
        Entity::new(
            3,
            4,
            EntityKind::TextLink {
                url: "https://example.com".to_string(),
            },
        ),
        Entity::new(7, 2, EntityKind::TextMention { user_id: -7 }),
        Entity::new(9, 1, EntityKind::Pre { language: None }),
        Entity::new(
            10,
            2,
            EntityKind::CustomEmoji {
                custom_emoji_id: "5368324170671202286".to_string(),
            },
        ),
    ];
    let json = serde_json::to_string(&entities).expect("serialize");
    let back: Vec<Entity> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, entities);

    // Kinds without aux data serialize without aux fields.
    let bold = serde_json::to_value(Entity::new(0, 3, EntityKind::Bold)).expect("serialize");
    assert_eq!(
        bold,
        serde_json::json!({"offset": 0, "length": 3, "type": "bold"})
    );
}
