//! Asset catalog and screen layout tests.

use setrs::asset::{AssetCatalog, parse_asset_id};
use setrs::layout::{self, Rect};
use setrs::{
    AssetError, BOARD_SIZE, Card, Color, Control, DECK_SIZE, Event, GameState, Number, Shading,
    Symbol, build_deck,
};

fn canonical_ids() -> Vec<String> {
    build_deck().iter().map(Card::asset_id).collect()
}

#[test]
fn canonical_ids_decode_back_to_their_cards() {
    for card in build_deck() {
        assert_eq!(parse_asset_id(&card.asset_id()), Ok(card));
    }
}

#[test]
fn asset_ids_follow_naming_convention() {
    let card = Card::new(Color::Red, Symbol::Squiggle, Shading::Empty, Number::Three);
    assert_eq!(card.asset_id(), "redsquiggleempty3.gif");

    assert_eq!(
        parse_asset_id("purdiamondshaded1.gif"),
        Ok(Card::new(
            Color::Purple,
            Symbol::Diamond,
            Shading::Shaded,
            Number::One
        ))
    );
}

#[test]
fn malformed_ids_are_rejected() {
    for id in [
        "redsquiggleempty3.png",
        "bluesquiggleempty3.gif",
        "redstarempty3.gif",
        "redsquigglestriped3.gif",
        "redsquiggleempty4.gif",
        "redsquiggleempty.gif",
        "redovalovalempty1.gif",
        ".gif",
        "",
    ] {
        assert_eq!(
            parse_asset_id(id),
            Err(AssetError::MalformedId(id.to_string())),
            "{id} should be rejected"
        );
    }
}

#[test]
fn catalog_resolves_every_card() {
    let mut ids = canonical_ids();
    ids.push("Thumbs.db".to_string());
    ids.push("readme.txt".to_string());

    let catalog = AssetCatalog::from_ids(&ids).unwrap();

    assert_eq!(catalog.len(), DECK_SIZE);
    for card in build_deck() {
        assert_eq!(catalog.resolve(&card), Some(card.asset_id().as_str()));
    }
    assert_eq!(catalog, AssetCatalog::canonical());
}

#[test]
fn catalog_keeps_collaborator_identifiers() {
    let ids: Vec<String> = canonical_ids()
        .into_iter()
        .map(|id| id.replacen("green", "gre", 1).replacen("purple", "pur", 1))
        .collect();

    let catalog = AssetCatalog::from_ids(&ids).unwrap();
    let card = Card::new(Color::Green, Symbol::Oval, Shading::Filled, Number::Two);

    assert_eq!(catalog.resolve(&card), Some("greovalfilled2.gif"));
}

#[test]
fn catalog_reports_missing_card() {
    let mut ids = canonical_ids();
    let missing = build_deck()[40];
    ids.retain(|id| *id != missing.asset_id());

    assert_eq!(
        AssetCatalog::from_ids(&ids),
        Err(AssetError::Missing(missing))
    );
}

#[test]
fn catalog_rejects_malformed_and_duplicate_images() {
    let mut ids = canonical_ids();
    ids.push("redblobempty1.gif".to_string());
    assert_eq!(
        AssetCatalog::from_ids(&ids),
        Err(AssetError::MalformedId("redblobempty1.gif".to_string()))
    );

    let mut ids = canonical_ids();
    ids.push("reddiamondempty1.gif".to_string());
    assert!(matches!(
        AssetCatalog::from_ids(&ids),
        Err(AssetError::Duplicate(_))
    ));
}

#[test]
fn catalog_from_missing_directory_fails() {
    let result = AssetCatalog::from_dir("/nonexistent/setrs/kaarten");
    assert!(matches!(result, Err(AssetError::Io(_))));
}

#[test]
fn slot_rectangles_follow_grid() {
    assert_eq!(layout::slot_rect(0), Rect::new(10, 10, 150, 100));
    assert_eq!(layout::slot_rect(5), Rect::new(260, 210, 150, 100));
    assert_eq!(layout::slot_rect(11), Rect::new(760, 410, 150, 100));
}

#[test]
fn points_map_to_slots() {
    assert_eq!(layout::slot_at_point(0, 0), Some(0));
    assert_eq!(layout::slot_at_point(249, 199), Some(0));
    assert_eq!(layout::slot_at_point(250, 0), Some(1));
    assert_eq!(layout::slot_at_point(999, 599), Some(BOARD_SIZE - 1));
    assert_eq!(layout::slot_at_point(1010, 10), None);
    assert_eq!(layout::slot_at_point(10, 700), None);
    assert_eq!(layout::slot_at_point(-1, 10), None);

    for index in 0..BOARD_SIZE {
        let rect = layout::slot_rect(index);
        assert_eq!(layout::slot_at_point(rect.x, rect.y), Some(index));
    }
}

#[test]
fn hit_test_depends_on_screen() {
    assert_eq!(
        layout::hit_test(GameState::Home, 620, 370),
        Some(Event::Control(Control::MoreTime))
    );
    assert_eq!(
        layout::hit_test(GameState::Home, 670, 370),
        Some(Event::Control(Control::LessTime))
    );
    assert_eq!(
        layout::hit_test(GameState::Home, 500, 420),
        Some(Event::Control(Control::Start))
    );
    assert_eq!(layout::hit_test(GameState::Home, 10, 10), None);

    assert_eq!(
        layout::hit_test(GameState::Playing, 300, 250),
        Some(Event::Select(5))
    );
    assert_eq!(layout::hit_test(GameState::Playing, 500, 420), Some(Event::Select(10)));

    assert_eq!(
        layout::hit_test(GameState::End, 500, 520),
        Some(Event::Control(Control::Replay))
    );
    assert_eq!(layout::hit_test(GameState::End, 500, 420), None);
}
