// gerant-client/tests/promotion_staff_reservation.rs
// Promotions, staff and reservations against the fake backend

mod common;

use std::sync::atomic::Ordering;

use chrono::{TimeZone, Utc};
use common::FakeBackend;
use gerant_client::shared::{
    Password, PromotionForm, ReservationStatus, StaffForm, TableAssignment,
};
use gerant_client::{ClientError, CreateResource, ListController};
use serde_json::json;

#[tokio::test]
async fn test_promotion_attached_to_each_dish_in_order() {
    let backend = FakeBackend::start().await;
    let api = backend.client().promotions();

    let promotion = api
        .create_for_dishes(&PromotionForm::new("15% Off", "01/05/2025", "31/05/2025"), &[3, 1])
        .await
        .unwrap();

    assert_eq!(promotion.reduction, 15);
    assert_eq!(promotion.dish_ids, vec![3, 1]);
    assert_eq!(
        backend.state.writes_to("POST /Gerant_offre"),
        vec![json!({"date_deb": "01/05/2025", "date_fin": "31/05/2025", "reduction": 15})]
    );
    assert_eq!(
        backend.state.writes_to("POST /Gerant_offre_inplat"),
        vec![
            json!({"id_offre": promotion.id, "id_plat": 3}),
            json!({"id_offre": promotion.id, "id_plat": 1}),
        ]
    );
}

#[tokio::test]
async fn test_promotion_attachment_stops_at_first_failure() {
    let backend = FakeBackend::start().await;
    backend.state.refuse_dish_link.store(2, Ordering::SeqCst);
    let api = backend.client().promotions();

    let err = api
        .create_for_dishes(&PromotionForm::new("", "lundi", "mardi"), &[1, 2, 3])
        .await
        .unwrap_err();

    match err {
        ClientError::RemoteRejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Plat already in offre");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // dish 3 was never attempted
    assert_eq!(backend.state.writes_to("POST /Gerant_offre_inplat").len(), 2);
    assert_eq!(backend.state.promotion_links.lock().unwrap().len(), 1);
    // blank discount falls back to the default
    assert_eq!(backend.state.writes_to("POST /Gerant_offre")[0]["reduction"], 20);
}

#[tokio::test]
async fn test_promotion_without_dishes_is_rejected_locally() {
    let backend = FakeBackend::start().await;
    let api = backend.client().promotions();

    let err = api
        .create_for_dishes(&PromotionForm::new("10", "a", "b"), &[])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(backend.state.request_count(), 0);
}

#[tokio::test]
async fn test_promotions_list_from_data_array() {
    let backend = FakeBackend::start().await;
    let controller = ListController::new(backend.client().promotions());
    controller
        .create(&PromotionForm::new("30%", "01/06", "15/06"))
        .await
        .unwrap();

    let items = controller.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].discount_label(), "30% Off");
    assert_eq!(items[0].start_date, "01/06");
}

fn waiter_form() -> StaffForm {
    StaffForm {
        first_name: "Amine".into(),
        last_name: "Kaci".into(),
        age: "27".into(),
        job_title: "Serveur".into(),
        email: "amine@example.com".into(),
        phone: "0550000000".into(),
        password: Password::new("s3cret"),
        table_ids: vec![4],
    }
}

#[tokio::test]
async fn test_staff_sign_up_and_table_assignment() {
    let backend = FakeBackend::start().await;
    let controller = ListController::new(backend.client().staff());

    controller.create(&waiter_form()).await.unwrap();
    let sent = backend.state.writes_to("POST /inscription-personnel");
    assert_eq!(sent[0]["mot_de_passe"], "s3cret");
    assert_eq!(sent[0]["age"], 27);

    let member = controller.items().await.remove(0);
    assert_eq!(member.full_name(), "Amine Kaci");
    assert_eq!(member.table_ids, vec![4]);

    controller
        .update(member.id, &TableAssignment::new(7))
        .await
        .unwrap();
    assert_eq!(
        backend.state.writes_to("PATCH /Personnel"),
        vec![json!({"id_table": 7})]
    );
    assert_eq!(controller.items().await[0].table_ids, vec![7]);
}

#[tokio::test]
async fn test_staff_without_password_is_rejected_locally() {
    let backend = FakeBackend::start().await;
    let api = backend.client().staff();
    let form = StaffForm {
        password: Password::new("  "),
        ..waiter_form()
    };

    let err = api.create(&form).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(backend.state.request_count(), 0);
}

#[tokio::test]
async fn test_reservation_status_filter() {
    let backend = FakeBackend::start().await;
    backend.state.reservations.lock().unwrap().extend([
        json!({
            "id_reserv": 1, "id_client": 10, "id_table": 2, "nb_personne": 4,
            "date_deb_res": "2025-05-10T18:00:00Z", "date_fin_res": "2025-05-10T20:00:00Z"
        }),
        json!({
            "id_reserv": 2, "id_client": 11, "id_table": 3, "nb_personne": 2,
            "date_deb_res": "2025-05-10T12:00:00Z", "date_fin_res": "2025-05-10T13:00:00Z"
        }),
        json!({
            "id_reserv": 3, "id_client": 12, "id_table": 5, "nb_personne": 6,
            "date_deb_res": "2025-05-12T19:00:00Z", "date_fin_res": "2025-05-12T22:00:00Z"
        }),
    ]);
    let controller = ListController::new(backend.client().reservations());
    controller.refresh().await.unwrap();

    let now = Utc.with_ymd_and_hms(2025, 5, 10, 17, 30, 0).unwrap();
    let ids = |items: Vec<gerant_client::shared::Reservation>| {
        items.into_iter().map(|r| r.id).collect::<Vec<_>>()
    };

    assert_eq!(ids(controller.filtered_by_status(None, now).await), vec![1, 2, 3]);
    assert_eq!(
        ids(controller.filtered_by_status(Some(ReservationStatus::Imminent), now).await),
        vec![1]
    );
    assert_eq!(
        ids(controller.filtered_by_status(Some(ReservationStatus::Completed), now).await),
        vec![2]
    );
    assert_eq!(
        ids(controller.filtered_by_status(Some(ReservationStatus::Planned), now).await),
        vec![3]
    );

    controller.set_search_text("11").await;
    assert_eq!(ids(controller.filtered_by_status(None, now).await), vec![2]);
}
