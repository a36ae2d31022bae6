// gerant-client/tests/dish_api.rs
// Dish resource: validation, body-keyed updates and ingredient associations

mod common;

use common::FakeBackend;
use gerant_client::shared::{DishForm, DishIngredient, PriceChange};
use gerant_client::{ClientError, CreateResource, ListController, ListResource, UpdateResource};
use rust_decimal::Decimal;
use serde_json::json;

fn seed_pizza(backend: &FakeBackend) {
    backend.state.dishes.lock().unwrap().push(json!({
        "id_plat": 1,
        "nom": "Pizza",
        "description": "Margherita",
        "prix": "12.50",
        "calorie": 800,
        "categorie": "pizza",
        "image": "",
        "ingredients": [{"id_ingredient": 5, "quantite": 2}],
        "maladies": [1]
    }));
}

fn pasta_form(price: &str) -> DishForm {
    DishForm {
        name: "Pasta".into(),
        description: "Carbonara".into(),
        price: price.into(),
        calories: "650".into(),
        ingredients: vec![DishIngredient::new(5, 1)],
        health_alerts: vec![1],
        ..DishForm::default()
    }
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected_locally() {
    let backend = FakeBackend::start().await;
    let api = backend.client().dishes();

    let err = api.create(&pasta_form("abc")).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(backend.state.request_count(), 0);
}

#[tokio::test]
async fn test_missing_dish_is_not_found() {
    let backend = FakeBackend::start().await;
    let api = backend.client().dishes();

    let err = api.get(999).await.unwrap_err();
    match err {
        ClientError::NotFound(message) => assert_eq!(message, "Plat not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_bare_array_list_and_string_price() {
    let backend = FakeBackend::start().await;
    seed_pizza(&backend);
    let api = backend.client().dishes();

    let dishes = api.list().await.unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].price, Decimal::new(1250, 2));
    assert_eq!(dishes[0].ingredients, vec![DishIngredient::new(5, 2)]);
}

#[tokio::test]
async fn test_create_sends_defaults_and_refreshes() {
    let backend = FakeBackend::start().await;
    let controller = ListController::new(backend.client().dishes());

    controller.create(&pasta_form("9,5")).await.unwrap();

    let sent = backend.state.writes_to("POST /Gerant_plat");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["nom"], "Pasta");
    assert_eq!(sent[0]["prix"], json!(9.5));
    assert_eq!(sent[0]["categorie"], "viande");
    assert_eq!(sent[0]["ingredients"], json!([{"id_ingredient": 5, "quantite": 1}]));

    let items = controller.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pasta");
}

#[tokio::test]
async fn test_price_update_keys_dish_in_body() {
    let backend = FakeBackend::start().await;
    seed_pizza(&backend);
    let controller = ListController::new(backend.client().dishes());

    controller.update(1, &PriceChange::new("14")).await.unwrap();

    let sent = backend.state.writes_to("PATCH /Gerant_plat");
    assert_eq!(sent, vec![json!({"id_plat": 1, "prix": 14.0})]);
    assert_eq!(controller.items().await[0].price, Decimal::new(14, 0));
}

#[tokio::test]
async fn test_negative_price_update_is_rejected_locally() {
    let backend = FakeBackend::start().await;
    let api = backend.client().dishes();

    let err = api.update(1, &PriceChange::new("-3")).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(backend.state.request_count(), 0);
}

#[tokio::test]
async fn test_ingredient_associations() {
    let backend = FakeBackend::start().await;
    let api = backend.client().dishes();

    api.add_ingredient(1, 5, 3).await.unwrap();
    api.update_ingredient_quantity(1, 5, 4).await.unwrap();
    api.remove_ingredient(1, 5).await.unwrap();

    assert_eq!(
        backend.state.writes_to("POST /Gerant_plat/ingredient"),
        vec![json!({"id_plat": 1, "id_ingredient": 5, "quantite": 3})]
    );
    assert_eq!(
        backend.state.writes_to("PATCH /Gerant_plat/ingredient"),
        vec![json!({"id_plat": 1, "id_ingredient": 5, "quantite": 4})]
    );
    assert_eq!(
        backend.state.writes_to("DELETE /Gerant_plat"),
        vec![json!({"id_plat": 1, "id_ingredient": 5})]
    );

    let err = api.add_ingredient(1, 5, 0).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_dish_ingredients_lookup() {
    let backend = FakeBackend::start().await;
    let api = backend.client().dishes();

    let ingredients = api.ingredients(1).await.unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].name, "Tomate");

    // 404 on a collection endpoint reads as empty
    assert!(api.ingredients(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_price_update_of_deleted_dish_is_not_found() {
    let backend = FakeBackend::start().await;
    seed_pizza(&backend);
    let controller = ListController::new(backend.client().dishes());
    controller.refresh().await.unwrap();

    let err = controller
        .update(999, &PriceChange::new("14"))
        .await
        .unwrap_err();
    match err {
        ClientError::NotFound(message) => assert_eq!(message, "Plat not found"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        backend.state.writes_to("PATCH /Gerant_plat"),
        vec![json!({"id_plat": 999, "prix": 14.0})]
    );
    let items = controller.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].price, Decimal::new(1250, 2));
}
