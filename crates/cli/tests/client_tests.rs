//! Tests for client.rs mosaic definition handling

use nem_cli::client::{split_slug, MosaicDefinition, MosaicDefinitionPage};
use nem_cli::DEFAULT_MOSAIC_DIVISIBILITY;

fn sample_page() -> MosaicDefinitionPage {
    serde_json::from_value(serde_json::json!({
        "data": [
            {
                "meta": {"id": 631},
                "mosaic": {
                    "creator": "3e82e1c1e4a75adaa3cba8c101c3cd31d9817a2eb966eb3b511fb2ed45b8e262",
                    "id": {"namespaceId": "nem", "name": "xem"},
                    "description": "reserved xem mosaic",
                    "properties": [
                        {"name": "divisibility", "value": "6"},
                        {"name": "initialSupply", "value": "8999999999"},
                        {"name": "supplyMutable", "value": "false"},
                        {"name": "transferable", "value": "true"}
                    ]
                }
            },
            {
                "meta": {"id": 745},
                "mosaic": {
                    "creator": "a3cba8c101c3cd31d9817a2eb966eb3b511fb2ed45b8e2623e82e1c1e4a75ada",
                    "id": {"namespaceId": "nem", "name": "points"},
                    "properties": [
                        {"name": "divisibility", "value": "0"}
                    ]
                }
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_split_slug() {
    assert_eq!(
        split_slug("nem:xem").unwrap(),
        ("nem".to_string(), "xem".to_string())
    );
    assert_eq!(
        split_slug("dim:coin").unwrap(),
        ("dim".to_string(), "coin".to_string())
    );
}

#[test]
fn test_split_slug_rejects_malformed() {
    assert!(split_slug("nemxem").is_err());
    assert!(split_slug(":xem").is_err());
    assert!(split_slug("nem:").is_err());
}

#[test]
fn test_page_lookup_by_mosaic_name() {
    let page = sample_page();

    let xem = page.find("xem").unwrap();
    assert_eq!(xem.id.namespace_id, "nem");
    assert_eq!(xem.divisibility(), 6);
    assert_eq!(xem.description.as_deref(), Some("reserved xem mosaic"));

    let points = page.find("points").unwrap();
    assert_eq!(points.divisibility(), 0);
    assert!(points.description.is_none());

    assert!(page.find("nosuchmosaic").is_none());
}

#[test]
fn test_unknown_definition_carries_default_divisibility() {
    let definition = MosaicDefinition::unknown("dim", "coin");
    assert_eq!(definition.id.namespace_id, "dim");
    assert_eq!(definition.id.name, "coin");
    assert_eq!(definition.divisibility(), DEFAULT_MOSAIC_DIVISIBILITY);
}

#[test]
fn test_divisibility_defaults_when_unparsable() {
    let page: MosaicDefinitionPage = serde_json::from_value(serde_json::json!({
        "data": [{
            "mosaic": {
                "id": {"namespaceId": "foo", "name": "bar"},
                "properties": [{"name": "divisibility", "value": "not-a-number"}]
            }
        }]
    }))
    .unwrap();

    assert_eq!(
        page.find("bar").unwrap().divisibility(),
        DEFAULT_MOSAIC_DIVISIBILITY
    );
}
