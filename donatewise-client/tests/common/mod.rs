// donatewise-client/tests/common/mod.rs
// In-process fake backend for integration tests
//
// Mirrors the server's donation and delivery state machines, including the
// delivery side effects on donations and drivers. Tokens are unsigned.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use donatewise_client::models::*;
use donatewise_client::{DeliveryAction, DonateWiseClient, OneshotHttpClient, Session};
use serde_json::json;
use shared::client::{LoginRequest, SignupRequest, TokenResponse};
use shared::lifecycle::{self, DonationContext};
use shared::token;
use shared::validation::SignupForm;

type Reply<T> = Result<Json<T>, Response>;

/// Unsigned token carrying `sub` and `roles`
pub fn token_for(username: &str, role: Role) -> String {
    let payload = json!({"sub": username, "roles": role.authority()}).to_string();
    format!("eyJhbGciOiJub25lIn0.{}.unsigned", URL_SAFE_NO_PAD.encode(payload))
}

struct Account {
    username: String,
    password: String,
    role: Role,
}

#[derive(Default)]
struct Db {
    next_id: i64,
    accounts: Vec<Account>,
    donors: Vec<Donor>,
    donations: Vec<Donation>,
    centers: Vec<CollectionCenter>,
    drivers: Vec<Driver>,
    recipients: Vec<Recipient>,
    deliveries: Vec<Delivery>,
    failing: HashSet<String>,
    mutations: usize,
}

impl Db {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn center_of(&self, username: &str) -> Option<&CollectionCenter> {
        self.centers.iter().find(|c| c.is_staffed_by(username))
    }

    fn driver_of(&self, username: &str) -> Option<&Driver> {
        self.drivers
            .iter()
            .find(|d| d.user.as_ref().is_some_and(|u| u.username == username))
    }

    fn donor_of(&self, username: &str) -> Option<&Donor> {
        self.donors
            .iter()
            .find(|d| d.user.as_ref().is_some_and(|u| u.username == username))
    }

    fn donation_mut(&mut self, id: i64) -> Result<&mut Donation, Response> {
        self.donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| error(StatusCode::NOT_FOUND, "Donation not found"))
    }

    fn set_donation_status(&mut self, id: i64, status: DonationStatus) {
        if let Some(d) = self.donations.iter_mut().find(|d| d.id == id) {
            d.status = status;
        }
    }

    fn set_driver_available(&mut self, id: i64, available: bool) {
        if let Some(d) = self.drivers.iter_mut().find(|d| d.id == id) {
            d.is_available = available;
        }
    }

    fn release_driver(&mut self, id: Option<i64>) {
        if let Some(id) = id {
            self.set_driver_available(id, true);
        }
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "status": status.as_u16(),
        "error": status.canonical_reason(),
        "message": message,
    });
    (status, Json(body)).into_response()
}

fn caller(headers: &HeaderMap) -> Result<User, Response> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|t| token::decode_user(t).ok())
        .ok_or_else(|| StatusCode::UNAUTHORIZED.into_response())
}

fn require(user: &User, roles: &[Role]) -> Result<(), Response> {
    if roles.contains(&user.role) {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN.into_response())
    }
}

const STAFF: &[Role] = &[Role::Staff, Role::Admin];

#[derive(Clone, Default)]
pub struct FakeBackend {
    db: Arc<Mutex<Db>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.add_account("admin", "admin123", Role::Admin);
        backend
    }

    fn db(&self) -> MutexGuard<'_, Db> {
        self.db.lock().unwrap()
    }

    pub fn add_account(&self, username: &str, password: &str, role: Role) {
        self.db().accounts.push(Account {
            username: username.into(),
            password: password.into(),
            role,
        });
    }

    pub fn add_recipient(&self, name: &str, active: bool) -> i64 {
        let mut db = self.db();
        let id = db.id();
        db.recipients.push(Recipient {
            id,
            name: name.into(),
            recipient_type: RecipientType::Shelter,
            address: Some("1 Harbor Rd".into()),
            contact_person: None,
            phone: None,
            email: None,
            is_active: active,
        });
        id
    }

    /// Make every request to `path` fail with a 500
    pub fn fail_path(&self, path: &str) {
        self.db().failing.insert(path.to_string());
    }

    /// Number of non-GET requests served
    pub fn mutations(&self) -> usize {
        self.db().mutations
    }

    pub fn donation(&self, id: i64) -> Donation {
        self.db().donations.iter().find(|d| d.id == id).cloned().unwrap()
    }

    pub fn center(&self, id: i64) -> CollectionCenter {
        self.db().centers.iter().find(|c| c.id == id).cloned().unwrap()
    }

    pub fn driver(&self, id: i64) -> Driver {
        self.db().drivers.iter().find(|d| d.id == id).cloned().unwrap()
    }

    pub fn donors(&self) -> Vec<Donor> {
        self.db().donors.clone()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.db().deliveries.clone()
    }

    /// Client with its own session against this backend
    pub fn client(&self) -> DonateWiseClient<OneshotHttpClient> {
        DonateWiseClient::new(OneshotHttpClient::new(self.router()), Session::new())
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/signup", post(signup))
            .route("/api/donors", get(list_donors).post(create_donor))
            .route("/api/donors/me", get(my_donor))
            .route("/api/donors/{id}", get(get_donor))
            .route("/api/donations", get(list_donations))
            .route("/api/donations/my", get(my_donations))
            .route("/api/donations/center/pending", get(center_pending))
            .route("/api/donations/center/all", get(center_all))
            .route("/api/donations/donor/{donor_id}", post(create_donation))
            .route("/api/donations/item", post(create_item))
            .route("/api/donations/{id}", get(get_donation))
            .route("/api/donations/{id}/accept", put(accept_donation))
            .route("/api/donations/{id}/reject", put(reject_donation))
            .route("/api/donations/{id}/status", put(update_donation_status))
            .route("/api/centers", get(list_centers))
            .route("/api/centers/me", get(my_center))
            .route("/api/deliveries", get(list_deliveries).post(create_delivery))
            .route("/api/deliveries/my", get(my_deliveries))
            .route("/api/deliveries/my/pending", get(my_pending_deliveries))
            .route("/api/deliveries/{id}", get(get_delivery).delete(delete_delivery))
            .route("/api/deliveries/{id}/{action}", put(delivery_action))
            .route("/api/drivers/me", get(my_driver))
            .route("/api/drivers/me/availability", put(my_availability))
            .route("/api/drivers/{id}", get(get_driver))
            .route("/api/recipients", post(create_recipient))
            .route("/api/recipients/{id}", get(get_recipient))
            .route("/api/ai/thank-you/my", get(my_thank_you))
            .layer(middleware::from_fn_with_state(self.clone(), track_requests))
            .with_state(self.clone())
    }
}

async fn track_requests(State(s): State<FakeBackend>, request: Request, next: Next) -> Response {
    let failing = {
        let mut db = s.db();
        if request.method() != Method::GET {
            db.mutations += 1;
        }
        db.failing.contains(request.uri().path())
    };
    if failing {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Service temporarily unavailable");
    }
    next.run(request).await
}

// ========== Auth ==========

async fn login(State(s): State<FakeBackend>, Json(req): Json<LoginRequest>) -> Response {
    let db = s.db();
    match db
        .accounts
        .iter()
        .find(|a| a.username == req.username && a.password == req.password)
    {
        Some(account) => Json(TokenResponse {
            token: token_for(&account.username, account.role),
            message: None,
        })
        .into_response(),
        None => (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response(),
    }
}

async fn signup(State(s): State<FakeBackend>, Json(req): Json<SignupRequest>) -> Response {
    let mut db = s.db();
    if db.accounts.iter().any(|a| a.username == req.username) {
        return (StatusCode::BAD_REQUEST, "Error: Username is already taken!").into_response();
    }
    db.accounts.push(Account {
        username: req.username.clone(),
        password: req.password.clone(),
        role: req.role,
    });
    let owner = UserSummary {
        username: req.username.clone(),
        ..Default::default()
    };
    if let Some(center) = &req.collection_center {
        let id = db.id();
        db.centers.push(CollectionCenter {
            id,
            name: center.name.clone(),
            location: Some(center.location.clone()),
            max_capacity: center.max_capacity,
            current_load: 0,
            user: Some(owner.clone()),
        });
    }
    if let Some(info) = &req.driver_info {
        let id = db.id();
        db.drivers.push(Driver {
            id,
            name: info.name.clone(),
            phone: Some(info.phone.clone()),
            vehicle_number: info.vehicle_number.clone(),
            vehicle_type: info.vehicle_type.clone(),
            is_available: true,
            collection_center_id: None,
            collection_center_name: None,
            user: Some(owner),
        });
    }
    Json(TokenResponse {
        token: token_for(&req.username, req.role),
        message: Some("User registered successfully!".into()),
    })
    .into_response()
}

// ========== Donors ==========

async fn list_donors(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Donor>> {
    require(&caller(&headers)?, STAFF)?;
    Ok(Json(s.db().donors.clone()))
}

async fn my_donor(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Donor> {
    let user = caller(&headers)?;
    s.db()
        .donor_of(&user.username)
        .cloned()
        .map(Json)
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())
}

async fn get_donor(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Donor> {
    require(&caller(&headers)?, STAFF)?;
    s.db()
        .donors
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Donor not found"))
}

async fn create_donor(State(s): State<FakeBackend>, headers: HeaderMap, Json(input): Json<DonorInput>) -> Reply<Donor> {
    let user = caller(&headers)?;
    let mut db = s.db();
    let donor = Donor {
        id: db.id(),
        name: input.name,
        contact: Some(input.contact),
        location: Some(input.location),
        user: Some(UserSummary {
            username: user.username,
            ..Default::default()
        }),
    };
    db.donors.push(donor.clone());
    Ok(Json(donor))
}

// ========== Donations ==========

async fn list_donations(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Donation>> {
    require(&caller(&headers)?, STAFF)?;
    Ok(Json(s.db().donations.clone()))
}

async fn get_donation(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Donation> {
    caller(&headers)?;
    let mut db = s.db();
    Ok(Json(db.donation_mut(id)?.clone()))
}

async fn my_donations(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Donation>> {
    let user = caller(&headers)?;
    let db = s.db();
    let Some(donor) = db.donor_of(&user.username) else {
        return Ok(Json(Vec::new()));
    };
    let mine = db
        .donations
        .iter()
        .filter(|d| d.donor_ref() == Some(donor.id))
        .cloned()
        .collect();
    Ok(Json(mine))
}

async fn center_pending(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Donation>> {
    require(&caller(&headers)?, STAFF)?;
    let db = s.db();
    Ok(Json(
        db.donations
            .iter()
            .filter(|d| d.status == DonationStatus::Pending)
            .cloned()
            .collect(),
    ))
}

async fn center_all(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Donation>> {
    let user = caller(&headers)?;
    require(&user, STAFF)?;
    let db = s.db();
    let Some(center_id) = db.center_of(&user.username).map(|c| c.id) else {
        return Err(error(StatusCode::NOT_FOUND, "No collection center found for staff"));
    };
    Ok(Json(
        db.donations
            .iter()
            .filter(|d| d.center_id() == Some(center_id))
            .cloned()
            .collect(),
    ))
}

async fn create_donation(
    State(s): State<FakeBackend>,
    headers: HeaderMap,
    Path(donor_id): Path<i64>,
    Json(input): Json<DonationCreate>,
) -> Reply<Donation> {
    caller(&headers)?;
    let mut db = s.db();
    let donor = db
        .donors
        .iter()
        .find(|d| d.id == donor_id)
        .cloned()
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Donor not found"))?;
    let donation = Donation {
        id: db.id(),
        name: input.name,
        donation_date: Some(chrono::Local::now().naive_local()),
        status: input.status,
        donor: Some(donor),
        donor_id: None,
        collection_center: None,
        donation_items: Vec::new(),
    };
    db.donations.push(donation.clone());
    Ok(Json(donation))
}

async fn create_item(State(s): State<FakeBackend>, headers: HeaderMap, Json(input): Json<DonationItemCreate>) -> Reply<DonationItem> {
    caller(&headers)?;
    let mut db = s.db();
    let id = db.id();
    let item = DonationItem {
        id,
        item_name: input.item_name,
        quantity: input.quantity,
        unit: input.unit,
        item_type: input.item_type,
        donation_id: input.donation_id,
        collection_center_id: input.collection_center_id,
    };
    db.donation_mut(input.donation_id)?.donation_items.push(item.clone());
    Ok(Json(item))
}

async fn accept_donation(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Donation> {
    let user = caller(&headers)?;
    require(&user, STAFF)?;
    let mut db = s.db();
    let center = db
        .center_of(&user.username)
        .cloned()
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "No collection center found for staff"))?;
    let donation = db.donation_mut(id)?;
    if donation.status != DonationStatus::Pending {
        return Err(error(StatusCode::BAD_REQUEST, "Only pending donations can be accepted"));
    }
    donation.status = DonationStatus::Collected;
    donation.collection_center = Some(center.clone());
    let load: i64 = donation.donation_items.iter().map(|i| i64::from(i.quantity)).sum();
    let accepted = donation.clone();
    if let Some(c) = db.centers.iter_mut().find(|c| c.id == center.id) {
        c.current_load += load;
    }
    Ok(Json(accepted))
}

async fn reject_donation(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Donation> {
    require(&caller(&headers)?, STAFF)?;
    let mut db = s.db();
    let donation = db.donation_mut(id)?;
    if donation.status != DonationStatus::Pending {
        return Err(error(StatusCode::BAD_REQUEST, "Only pending donations can be rejected"));
    }
    donation.status = DonationStatus::Rejected;
    Ok(Json(donation.clone()))
}

async fn update_donation_status(
    State(s): State<FakeBackend>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(to): Json<DonationStatus>,
) -> Reply<Donation> {
    require(&caller(&headers)?, STAFF)?;
    let mut db = s.db();
    let deliveries = db.deliveries.clone();
    let donation = db.donation_mut(id)?;
    let ctx = DonationContext::for_donation(donation, &deliveries);
    lifecycle::donation::plan(donation.status, to, &ctx).map_err(|e| error(StatusCode::BAD_REQUEST, &e.message))?;
    donation.status = to;
    Ok(Json(donation.clone()))
}

// ========== Centers ==========

async fn list_centers(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<CollectionCenter>> {
    caller(&headers)?;
    Ok(Json(s.db().centers.clone()))
}

async fn my_center(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<CollectionCenter> {
    let user = caller(&headers)?;
    s.db()
        .center_of(&user.username)
        .cloned()
        .map(Json)
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())
}

// ========== Deliveries ==========

async fn list_deliveries(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Delivery>> {
    require(&caller(&headers)?, STAFF)?;
    Ok(Json(s.db().deliveries.clone()))
}

async fn get_delivery(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Delivery> {
    require(&caller(&headers)?, STAFF)?;
    s.db()
        .deliveries
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Delivery not found"))
}

fn deliveries_of(s: &FakeBackend, headers: &HeaderMap, pending_only: bool) -> Reply<Vec<Delivery>> {
    let user = caller(headers)?;
    require(&user, &[Role::Driver])?;
    let db = s.db();
    let driver_id = db
        .driver_of(&user.username)
        .map(|d| d.id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Driver profile not found"))?;
    Ok(Json(
        db.deliveries
            .iter()
            .filter(|d| d.is_assigned_to(driver_id))
            .filter(|d| !pending_only || d.status == DeliveryStatus::Assigned)
            .cloned()
            .collect(),
    ))
}

async fn my_deliveries(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Delivery>> {
    deliveries_of(&s, &headers, false)
}

async fn my_pending_deliveries(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Vec<Delivery>> {
    deliveries_of(&s, &headers, true)
}

async fn create_delivery(
    State(s): State<FakeBackend>,
    headers: HeaderMap,
    Json(req): Json<CreateDeliveryRequest>,
) -> Reply<Delivery> {
    require(&caller(&headers)?, STAFF)?;
    let mut db = s.db();
    let not_found = |what: &str| error(StatusCode::NOT_FOUND, &format!("{} not found", what));
    let donation = db
        .donations
        .iter()
        .find(|d| d.id == req.donation_id)
        .cloned()
        .ok_or_else(|| not_found("Donation"))?;
    let driver = db
        .drivers
        .iter()
        .find(|d| d.id == req.driver_id)
        .cloned()
        .ok_or_else(|| not_found("Driver"))?;
    let recipient = db
        .recipients
        .iter()
        .find(|r| r.id == req.recipient_id)
        .cloned()
        .ok_or_else(|| not_found("Recipient"))?;
    lifecycle::check_creation(&donation, &driver, &recipient, &db.deliveries)
        .map_err(|e| error(StatusCode::BAD_REQUEST, &e.message))?;

    let id = db.id();
    let delivery: Delivery = serde_json::from_value(json!({
        "id": id,
        "donationId": donation.id,
        "driverId": driver.id,
        "recipientId": recipient.id,
        "status": DeliveryStatus::Assigned,
        "notes": req.notes,
        "donationName": donation.name,
        "fromCenterId": donation.center_id(),
        "driverName": driver.name,
        "recipientName": recipient.name,
    }))
    .unwrap();
    db.deliveries.push(delivery.clone());
    db.set_donation_status(donation.id, DonationStatus::Assigned);
    Ok(Json(delivery))
}

async fn delivery_action(
    State(s): State<FakeBackend>,
    headers: HeaderMap,
    Path((id, segment)): Path<(i64, String)>,
) -> Reply<Delivery> {
    let user = caller(&headers)?;
    let action = DeliveryAction::ALL
        .into_iter()
        .find(|a| a.path_segment() == Some(segment.as_str()))
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;
    let mut db = s.db();
    let driver_id = db.driver_of(&user.username).map(|d| d.id);
    let index = db
        .deliveries
        .iter()
        .position(|d| d.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Delivery not found"))?;
    let delivery = db.deliveries[index].clone();

    let is_assignee = driver_id.is_some_and(|id| delivery.is_assigned_to(id));
    if !action.actors().admits(user.role, is_assignee) {
        return Err(StatusCode::FORBIDDEN.into_response());
    }
    let next = action
        .apply(delivery.status)
        .map_err(|e| error(StatusCode::BAD_REQUEST, &e.message))?
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;

    db.deliveries[index].status = next;
    match action {
        DeliveryAction::Pickup => db.set_donation_status(delivery.donation_id, DonationStatus::InTransit),
        DeliveryAction::Complete => {
            db.set_donation_status(delivery.donation_id, DonationStatus::Delivered);
            db.release_driver(delivery.driver_id);
        }
        DeliveryAction::Cancel => {
            db.set_donation_status(delivery.donation_id, DonationStatus::Collected);
            db.release_driver(delivery.driver_id);
        }
        DeliveryAction::Transit | DeliveryAction::Delete => {}
    }
    Ok(Json(db.deliveries[index].clone()))
}

async fn delete_delivery(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if let Err(rejection) = caller(&headers).and_then(|u| require(&u, STAFF)) {
        return rejection;
    }
    let mut db = s.db();
    let Some(index) = db.deliveries.iter().position(|d| d.id == id) else {
        return error(StatusCode::NOT_FOUND, "Delivery not found");
    };
    if let Err(e) = lifecycle::check_deletable(&db.deliveries[index]) {
        return error(StatusCode::BAD_REQUEST, &e.message);
    }
    let removed = db.deliveries.remove(index);
    db.set_donation_status(removed.donation_id, DonationStatus::Collected);
    StatusCode::NO_CONTENT.into_response()
}

// ========== Drivers ==========

async fn my_driver(State(s): State<FakeBackend>, headers: HeaderMap) -> Reply<Driver> {
    let user = caller(&headers)?;
    s.db()
        .driver_of(&user.username)
        .cloned()
        .map(Json)
        .ok_or_else(|| StatusCode::NOT_FOUND.into_response())
}

async fn get_driver(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Driver> {
    require(&caller(&headers)?, STAFF)?;
    s.db()
        .drivers
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Driver not found"))
}

async fn my_availability(State(s): State<FakeBackend>, headers: HeaderMap, Json(available): Json<bool>) -> Reply<Driver> {
    let user = caller(&headers)?;
    let mut db = s.db();
    let id = db
        .driver_of(&user.username)
        .map(|d| d.id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Driver profile not found"))?;
    db.set_driver_available(id, available);
    Ok(Json(db.driver_of(&user.username).cloned().unwrap()))
}

// ========== Recipients ==========

async fn get_recipient(State(s): State<FakeBackend>, headers: HeaderMap, Path(id): Path<i64>) -> Reply<Recipient> {
    require(&caller(&headers)?, STAFF)?;
    s.db()
        .recipients
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Recipient not found"))
}

async fn create_recipient(State(s): State<FakeBackend>, headers: HeaderMap, Json(input): Json<RecipientInput>) -> Reply<Recipient> {
    require(&caller(&headers)?, STAFF)?;
    let mut db = s.db();
    let recipient = Recipient {
        id: db.id(),
        name: input.name,
        recipient_type: input.recipient_type,
        address: Some(input.address),
        contact_person: input.contact_person,
        phone: input.phone,
        email: input.email,
        is_active: true,
    };
    db.recipients.push(recipient.clone());
    Ok(Json(recipient))
}

// ========== AI ==========

async fn my_thank_you(headers: HeaderMap) -> Reply<Vec<SavedContent>> {
    require(&caller(&headers)?, &[Role::Donor])?;
    Ok(Json(Vec::new()))
}

// ========== Account helpers ==========

fn form(role: Role, username: &str) -> SignupForm {
    SignupForm {
        role: Some(role),
        username: username.into(),
        email: format!("{}@example.org", username),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        ..Default::default()
    }
}

pub fn donor_form(username: &str) -> SignupForm {
    form(Role::Donor, username)
}

pub fn staff_form(username: &str, center: &str) -> SignupForm {
    SignupForm {
        center_name: center.into(),
        center_location: "12 Market St".into(),
        max_capacity: 100,
        ..form(Role::Staff, username)
    }
}

pub fn driver_form(username: &str) -> SignupForm {
    SignupForm {
        driver_name: username.to_uppercase(),
        driver_phone: "5551234567".into(),
        vehicle_type: "Van".into(),
        ..form(Role::Driver, username)
    }
}

/// Fresh client signed up with `form`
pub async fn signed_up(backend: &FakeBackend, form: &SignupForm) -> DonateWiseClient<OneshotHttpClient> {
    let client = backend.client();
    client.signup(form).await.unwrap();
    client
}

pub fn item(name: &str, quantity: i32) -> ItemDraft {
    ItemDraft {
        item_name: name.into(),
        quantity,
        unit: Unit::Kg,
        item_type: ItemType::Food,
    }
}
