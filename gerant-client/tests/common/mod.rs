// gerant-client/tests/common/mod.rs
// In-process fake backend shared by the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use gerant_client::{ClientConfig, GerantClient};
use serde_json::{Value, json};

type Shared = Arc<BackendState>;

#[derive(Default)]
pub struct BackendState {
    pub alerts: Mutex<Vec<Value>>,
    pub dishes: Mutex<Vec<Value>>,
    pub ingredients: Mutex<Vec<Value>>,
    pub promotions: Mutex<Vec<Value>>,
    pub promotion_links: Mutex<Vec<Value>>,
    pub staff: Mutex<Vec<Value>>,
    pub reservations: Mutex<Vec<Value>>,
    /// Bodies of every write request, as `(method path, body)`
    pub writes: Mutex<Vec<(String, Value)>>,
    pub requests: AtomicUsize,
    pub alert_lists_in_flight: AtomicUsize,
    pub alert_lists_max_in_flight: AtomicUsize,
    pub alert_list_delay_ms: AtomicU64,
    /// Dish id whose promotion attachment is refused
    pub refuse_dish_link: AtomicI64,
    next_id: AtomicI64,
}

impl BackendState {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 100
    }

    fn record(&self, what: &str, body: &Value) {
        self.writes
            .lock()
            .unwrap()
            .push((what.to_string(), body.clone()));
    }

    pub fn writes_to(&self, what: &str) -> Vec<Value> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|(w, _)| w == what)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

pub struct FakeBackend {
    pub base_url: String,
    pub state: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(BackendState::default());
        state.refuse_dish_link.store(-1, Ordering::SeqCst);

        let api = Router::new()
            .route("/maladie", get(list_alerts).post(create_alert))
            .route("/maladie/{id}", get(get_alert).delete(delete_alert))
            .route(
                "/Gerant_plat",
                get(list_dishes)
                    .post(create_dish)
                    .patch(update_dish_price)
                    .delete(remove_dish_ingredient),
            )
            .route("/Gerant_plat/ingredient", post(add_dish_ingredient).patch(update_dish_ingredient))
            .route("/Gerant_plat/{id}", get(get_dish).delete(delete_dish))
            .route("/ingredient", get(list_ingredients))
            .route("/ingredient/{id}", patch(update_stock))
            .route("/ingredient/plat/{id}", get(dish_ingredients))
            .route("/Gerant_offre", get(list_promotions).post(create_promotion))
            .route("/Gerant_offre_inplat", post(link_promotion))
            .route("/Personnel", get(list_staff))
            .route("/Personnel/{id}", patch(assign_table))
            .route("/inscription-personnel", post(sign_up_staff))
            .route("/reservation", get(list_reservations))
            .with_state(state.clone());

        let app = Router::new()
            .nest("/api", api)
            .layer(middleware::from_fn_with_state(state.clone(), count_requests));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    pub fn client(&self) -> GerantClient {
        GerantClient::new(&ClientConfig::new(&self.base_url).with_timeout(5)).unwrap()
    }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

async fn count_requests(State(state): State<Shared>, req: Request, next: Next) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    next.run(req).await
}

fn not_found_text(message: &str) -> Response {
    (StatusCode::NOT_FOUND, message.to_string()).into_response()
}

fn ok(body: Value) -> Response {
    Json(body).into_response()
}

fn position(items: &[Value], key: &str, id: i64) -> Option<usize> {
    items.iter().position(|item| item[key].as_i64() == Some(id))
}

// Health alerts: `{status, data: {maladies}}` envelope

async fn list_alerts(State(state): State<Shared>) -> Response {
    // snapshot before the delay so an overlapping request would serve stale data
    let snapshot = state.alerts.lock().unwrap().clone();

    let now = state.alert_lists_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.alert_lists_max_in_flight.fetch_max(now, Ordering::SeqCst);
    let delay = state.alert_list_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    state.alert_lists_in_flight.fetch_sub(1, Ordering::SeqCst);

    ok(json!({"status": "success", "data": {"maladies": snapshot}}))
}

async fn create_alert(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /maladie", &body);
    let name = body["nom_maladie"].as_str().unwrap_or_default().to_string();
    let mut alerts = state.alerts.lock().unwrap();
    if alerts.iter().any(|a| a["nom_maladie"] == name.as_str()) {
        return (StatusCode::CONFLICT, Json(json!("Maladie already exists"))).into_response();
    }
    let alert = json!({
        "id_maladie": state.next_id(),
        "nom_maladie": name,
        "desc_maladie": body["desc_maladie"],
    });
    alerts.push(alert.clone());
    (StatusCode::CREATED, Json(json!({"status": "success", "data": {"maladie": alert}})))
        .into_response()
}

async fn get_alert(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let alerts = state.alerts.lock().unwrap();
    match position(&alerts, "id_maladie", id) {
        Some(i) => ok(json!({"data": {"maladie": alerts[i]}})),
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "Maladie not found"}))).into_response(),
    }
}

async fn delete_alert(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut alerts = state.alerts.lock().unwrap();
    match position(&alerts, "id_maladie", id) {
        Some(i) => {
            alerts.remove(i);
            StatusCode::NO_CONTENT.into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "Maladie not found"}))).into_response(),
    }
}

// Dishes: bare array collection

async fn list_dishes(State(state): State<Shared>) -> Response {
    ok(Value::Array(state.dishes.lock().unwrap().clone()))
}

async fn get_dish(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let dishes = state.dishes.lock().unwrap();
    match position(&dishes, "id_plat", id) {
        Some(i) => ok(json!({"plat": dishes[i]})),
        None => not_found_text("Plat not found"),
    }
}

async fn create_dish(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /Gerant_plat", &body);
    let mut dish = body.clone();
    dish["id_plat"] = json!(state.next_id());
    state.dishes.lock().unwrap().push(dish);
    (StatusCode::CREATED, "Plat created").into_response()
}

async fn update_dish_price(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("PATCH /Gerant_plat", &body);
    let Some(id) = body["id_plat"].as_i64() else {
        return (StatusCode::BAD_REQUEST, "Missing fields").into_response();
    };
    let mut dishes = state.dishes.lock().unwrap();
    match position(&dishes, "id_plat", id) {
        Some(i) => {
            dishes[i]["prix"] = body["prix"].clone();
            ok(json!({"message": "Prix updated"}))
        }
        None => not_found_text("Plat not found"),
    }
}

async fn delete_dish(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut dishes = state.dishes.lock().unwrap();
    match position(&dishes, "id_plat", id) {
        Some(i) => {
            dishes.remove(i);
            ok(json!({"message": "Plat deleted"}))
        }
        None => not_found_text("Plat not found"),
    }
}

async fn add_dish_ingredient(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /Gerant_plat/ingredient", &body);
    (StatusCode::CREATED, Json(json!({"message": "Ingredient added"}))).into_response()
}

async fn update_dish_ingredient(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("PATCH /Gerant_plat/ingredient", &body);
    ok(json!({"message": "Quantity updated"}))
}

async fn remove_dish_ingredient(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("DELETE /Gerant_plat", &body);
    StatusCode::NO_CONTENT.into_response()
}

async fn dish_ingredients(Path(id): Path<i64>) -> Response {
    if id == 1 {
        ok(json!([{"id_ingedient": 5, "nom_igredient": "Tomate", "quantité_ing": 40}]))
    } else {
        not_found_text("No ingredients found")
    }
}

// Ingredients: `{ingredients}` envelope

async fn list_ingredients(State(state): State<Shared>) -> Response {
    ok(json!({"ingredients": state.ingredients.lock().unwrap().clone()}))
}

async fn update_stock(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.record("PATCH /ingredient", &body);
    let mut ingredients = state.ingredients.lock().unwrap();
    match position(&ingredients, "id_ingedient", id) {
        Some(i) => {
            ingredients[i]["quantité_ing"] = body["quantite"].clone();
            ok(json!({"message": "Quantity updated"}))
        }
        None => not_found_text("Ingredient not found"),
    }
}

// Promotions: `{data: [...]}` envelope

async fn list_promotions(State(state): State<Shared>) -> Response {
    ok(json!({"data": state.promotions.lock().unwrap().clone()}))
}

async fn create_promotion(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /Gerant_offre", &body);
    let promotion = json!({
        "id_offre": state.next_id(),
        "reduction": body["reduction"],
        "date_deb": body["date_deb"],
        "date_fin": body["date_fin"],
    });
    state.promotions.lock().unwrap().push(promotion.clone());
    (StatusCode::CREATED, Json(json!({"data": {"offre": promotion}}))).into_response()
}

async fn link_promotion(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /Gerant_offre_inplat", &body);
    if body["id_plat"].as_i64() == Some(state.refuse_dish_link.load(Ordering::SeqCst)) {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": "Plat already in offre"})))
            .into_response();
    }
    state.promotion_links.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({"message": "Linked"}))).into_response()
}

// Staff: `{data: {personnels}}` envelope

async fn list_staff(State(state): State<Shared>) -> Response {
    ok(json!({"data": {"personnels": state.staff.lock().unwrap().clone()}}))
}

async fn sign_up_staff(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.record("POST /inscription-personnel", &body);
    let mut member = body.clone();
    if let Some(map) = member.as_object_mut() {
        map.remove("mot_de_passe");
    }
    member["id_personnel"] = json!(state.next_id());
    state.staff.lock().unwrap().push(member.clone());
    (StatusCode::CREATED, Json(json!({"data": {"personnel": member}}))).into_response()
}

async fn assign_table(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.record("PATCH /Personnel", &body);
    let mut staff = state.staff.lock().unwrap();
    match position(&staff, "id_personnel", id) {
        Some(i) => {
            staff[i]["tables"] = json!([body["id_table"]]);
            ok(json!({"data": {"newTable": body["id_table"]}}))
        }
        None => not_found_text("Personnel not found"),
    }
}

// Reservations: `{data: {reservation}}` envelope

async fn list_reservations(State(state): State<Shared>) -> Response {
    ok(json!({"data": {"reservation": state.reservations.lock().unwrap().clone()}}))
}
