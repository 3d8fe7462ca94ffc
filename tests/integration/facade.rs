//! DTO boundary tests: validation rules and pass-through translation

use crate::common::*;
use phonecat::{BrandDto, EntityId, Error, PageRequest, PhoneDto, SortSpec};
use rust_decimal_macros::dec;

fn acme() -> BrandDto {
    BrandDto {
        id: None,
        name: Some("Acme".into()),
        country: Some("US".into()),
    }
}

#[test]
fn create_rejects_dto_with_preset_id() {
    let facade = brand_facade();

    let result = facade.create(BrandDto {
        id: Some("preset".into()),
        ..acme()
    });

    match result {
        Err(Error::InvalidRequest(msg)) => assert!(msg.contains("brand")),
        other => panic!("expected InvalidRequest, got {:?}", other.map(|_| ())),
    }

    // rejected before the core ran: no record, no index entry
    assert_eq!(facade.list(&PageRequest::new(0, 10)).unwrap().total, 0);
    assert_eq!(facade.search("Acme", 0, 10).unwrap().total, 0);
}

#[test]
fn update_rejects_dto_without_id() {
    let facade = brand_facade();

    let result = facade.update(acme());
    assert!(matches!(result, Err(Error::InvalidRequest(_))));
    assert_eq!(facade.list(&PageRequest::new(0, 10)).unwrap().total, 0);
}

#[test]
fn create_then_update_then_delete() {
    let facade = brand_facade();

    let created = facade.create(acme()).unwrap();
    let id_string = created.id.clone().expect("create must assign an id");
    let id = EntityId::from(id_string.clone());

    let updated = facade
        .update(BrandDto {
            id: Some(id_string),
            name: Some("Acme Corp".into()),
            country: Some("US".into()),
        })
        .unwrap();
    assert_eq!(updated.id, created.id);

    let fetched = facade.get(&id).unwrap().unwrap();
    assert_eq!(fetched.name.as_deref(), Some("Acme Corp"));

    facade.delete(&id).unwrap();
    assert!(facade.get(&id).unwrap().is_none());
}

#[test]
fn update_with_fabricated_id_silently_creates() {
    // upsert semantics surface through the boundary unchanged
    let facade = brand_facade();

    let updated = facade
        .update(BrandDto {
            id: Some("fabricated".into()),
            name: Some("Ghost".into()),
            country: None,
        })
        .unwrap();
    assert_eq!(updated.id.as_deref(), Some("fabricated"));

    let fetched = facade.get(&EntityId::from("fabricated")).unwrap().unwrap();
    assert_eq!(fetched.name.as_deref(), Some("Ghost"));
}

#[test]
fn phone_facade_lists_sorted_pages_of_dtos() {
    let facade = phone_facade();

    for (name, price) in [("high", dec!(900)), ("low", dec!(100)), ("mid", dec!(400))] {
        facade
            .create(PhoneDto {
                id: None,
                name: Some(name.into()),
                brand: Some("Acme".into()),
                price: Some(price),
            })
            .unwrap();
    }

    let request = PageRequest::new(0, 2).with_sort(SortSpec::asc("price"));
    let page = facade.list(&request).unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);

    let names: Vec<&str> = page.items.iter().filter_map(|p| p.name.as_deref()).collect();
    assert_eq!(names, vec!["low", "mid"]);
}

#[test]
fn create_accepts_wire_payload() {
    let facade = phone_facade();

    let dto: PhoneDto =
        serde_json::from_str(r#"{"name":"Galaxy S9","brand":"Samsung","price":"719.99"}"#)
            .unwrap();
    let created = facade.create(dto).unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.price, Some(dec!(719.99)));
}

#[test]
fn phone_facade_search_returns_dtos() {
    let facade = phone_facade();

    facade
        .create(PhoneDto {
            id: None,
            name: Some("Galaxy S9".into()),
            brand: Some("Samsung".into()),
            price: Some(dec!(719.99)),
        })
        .unwrap();

    let hits = facade.search("name:galaxy", 0, 10).unwrap();
    assert_eq!(hits.total, 1);
    assert_eq!(hits.items[0].brand.as_deref(), Some("Samsung"));
    assert_eq!(hits.items[0].price, Some(dec!(719.99)));
}
