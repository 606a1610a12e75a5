// Wire-shape tests: the JSON sent as the `payload_json` form field

use runehook::message::{
    Author, Color, Embed, Field, Footer, NotificationBody, NotificationType, Replacement,
    Template, UrlEmbed,
};

fn simple_template(text: &str) -> Template {
    Template::builder().template(text).build()
}

#[test]
fn body_serializes_discord_field_names() {
    let body: NotificationBody<()> =
        NotificationBody::new(NotificationType::Quest, simple_template("done"))
            .player_name("Forsen");
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["type"], "QUEST");
    assert_eq!(json["playerName"], "Forsen");
    assert_eq!(json["embeds"], serde_json::json!([]));
    // Unset optionals and non-wire fields are omitted entirely
    for absent in ["content", "extra", "text", "thumbnailUrl", "screenshot"] {
        assert!(json.get(absent).is_none(), "{absent} should be omitted");
    }
}

#[test]
fn embed_serializes_nested_objects() {
    let embed = Embed {
        title: Some("Loot Drop".to_string()),
        description: Some("desc".to_string()),
        url: Some("https://example.com".to_string()),
        author: Some(Author {
            name: "Forsen".to_string(),
            icon_url: Some("https://img.example/a.png".to_string()),
        }),
        color: Some(Color::PINK),
        image: Some(UrlEmbed {
            url: "attachment://screenshot.png".to_string(),
        }),
        thumbnail: Some(UrlEmbed {
            url: "https://img.example/t.png".to_string(),
        }),
        fields: vec![Field::inline("Total Value", "1,000 gp")],
        footer: Some(Footer {
            text: "via runehook".to_string(),
            icon_url: None,
        }),
    };

    let json = serde_json::to_value(&embed).unwrap();
    assert_eq!(json["author"]["icon_url"], "https://img.example/a.png");
    assert_eq!(json["color"], 0xF4_00_98);
    assert_eq!(json["image"]["url"], "attachment://screenshot.png");
    assert_eq!(json["thumbnail"]["url"], "https://img.example/t.png");
    assert_eq!(json["fields"][0]["name"], "Total Value");
    assert_eq!(json["fields"][0]["inline"], true);
    assert_eq!(json["footer"]["text"], "via runehook");
    assert!(json["footer"].get("icon_url").is_none());
}

#[test]
fn empty_embed_serializes_to_empty_object() {
    let json = serde_json::to_value(Embed::default()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn image_embed_helper() {
    let json = serde_json::to_value(Embed::of_image("attachment://screenshot.png")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"image": {"url": "attachment://screenshot.png"}})
    );
}

#[test]
fn extra_is_kind_specific_opaque_data() {
    #[derive(serde::Serialize)]
    struct SlayerExtra {
        monster: String,
        points: u32,
    }

    let body = NotificationBody::new(NotificationType::Slayer, simple_template("task done"))
        .extra(SlayerExtra {
            monster: "Abyssal demons".to_string(),
            points: 15,
        });
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["extra"]["monster"], "Abyssal demons");
    assert_eq!(json["extra"]["points"], 15);
}

#[test]
fn template_text_never_reaches_the_wire() {
    let text = Template::builder()
        .template("%NAME% secret template")
        .replacement("%NAME%", Replacement::text("Forsen"))
        .build();
    let body: NotificationBody<()> = NotificationBody::new(NotificationType::Pet, text);
    let serialized = serde_json::to_string(&body).unwrap();
    assert!(!serialized.contains("secret template"));
}
