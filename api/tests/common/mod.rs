#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken},
        booking::{
            event::{CreateBooking, DecideBooking},
            workflow::{self, BookingState, Decision},
            Booking, BookingGround, BookingStatus,
        },
        ground::{
            event::{CreateGround, UpdateGround},
            normalize_tags, Ground, GroundLocation, GroundOwner, GroundPrice, DEFAULT_CURRENCY,
        },
        id::{BookingId, GroundId, UserId},
        payment::{PaymentCode, PaymentIntent},
        user::{event::CreateUser, User, UserSummary},
    },
    repository::{
        auth::AuthRepository, booking::BookingRepository, ground::GroundRepository,
        health::HealthCheckRepository, payment::PaymentCodeRenderer, user::UserRepository,
    },
};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    tokens: HashMap<String, UserId>,
    grounds: Vec<Ground>,
    bookings: Vec<Booking>,
}

/// PostgreSQL と Redis の代わりにメモリ上で状態を持つストア
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn ground_available(&self, ground_id: GroundId) -> Option<bool> {
        let state = self.state.lock().unwrap();
        state
            .grounds
            .iter()
            .find(|g| g.ground_id == ground_id)
            .map(|g| g.available)
    }

    fn decide(&self, decision: Decision, event: DecideBooking) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let booking = state
            .bookings
            .iter()
            .find(|b| b.booking_id == event.booking_id)
            .ok_or_else(|| AppError::EntityNotFound("booking".into()))?;
        let current = BookingState {
            booking_id: booking.booking_id,
            ground_id: booking.ground.ground_id,
            owner_id: booking.owner.user_id,
            status: booking.status,
        };
        let transition = workflow::decide(
            decision,
            event.requested_by,
            event.requester_role,
            &current,
        )?;

        for b in state.bookings.iter_mut() {
            if b.booking_id == transition.booking_id {
                b.status = transition.status;
            }
            if b.ground.ground_id == transition.ground_id {
                b.ground.available = transition.ground_available;
            }
        }
        for g in state.grounds.iter_mut() {
            if g.ground_id == transition.ground_id {
                g.available = transition.ground_available;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|(u, _)| u.email == event.email) {
            return Err(AppError::DuplicateContact(event.email));
        }
        let user = User {
            user_id: UserId::new(),
            user_name: event.user_name,
            email: event.email,
            phone: event.phone,
            role: event.role,
            upi_id: event.upi_id,
        };
        state.users.push((user.clone(), event.password));
        Ok(user)
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.user_id == current_user_id)
            .map(|(u, _)| u.clone()))
    }
}

#[async_trait]
impl AuthRepository for InMemoryStore {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let state = self.state.lock().unwrap();
        Ok(state.tokens.get(access_token.as_str()).copied())
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|(u, p)| u.email == email && p == password)
            .map(|(u, _)| u.user_id)
            .ok_or(AppError::InvalidCredentials)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let mut state = self.state.lock().unwrap();
        state
            .tokens
            .insert(event.access_token.clone(), event.user_id);
        Ok(AccessToken(event.access_token))
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.tokens.remove(access_token.as_str());
        Ok(())
    }
}

#[async_trait]
impl GroundRepository for InMemoryStore {
    async fn create(&self, event: CreateGround) -> AppResult<Ground> {
        let mut state = self.state.lock().unwrap();
        let (owner, _) = state
            .users
            .iter()
            .find(|(u, _)| u.user_id == event.owner_id)
            .ok_or_else(|| AppError::EntityNotFound("owner".into()))?;
        let ground = Ground {
            ground_id: GroundId::new(),
            owner: GroundOwner {
                owner_id: owner.user_id,
                owner_name: owner.user_name.clone(),
                email: owner.email.clone(),
                phone: owner.phone.clone(),
                upi_id: owner.upi_id.clone(),
            },
            title: event.title,
            description: event.description,
            thumbnail: event.thumbnail,
            images: event.images,
            price: GroundPrice {
                amount: event.price_amount,
                currency: DEFAULT_CURRENCY.into(),
                negotiable: event.negotiable,
            },
            sport_tags: normalize_tags(&event.sport_tags),
            facility_tags: normalize_tags(&event.facility_tags),
            location: GroundLocation {
                address: event.address,
                lat: event.lat,
                lng: event.lng,
            },
            available: true,
            created_at: Utc::now(),
        };
        state.grounds.push(ground.clone());
        Ok(ground)
    }

    async fn find_available(&self) -> AppResult<Vec<Ground>> {
        let state = self.state.lock().unwrap();
        Ok(state.grounds.iter().filter(|g| g.available).cloned().collect())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Ground>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .grounds
            .iter()
            .filter(|g| g.owner.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, ground_id: GroundId) -> AppResult<Option<Ground>> {
        let state = self.state.lock().unwrap();
        Ok(state.grounds.iter().find(|g| g.ground_id == ground_id).cloned())
    }

    async fn update(&self, event: UpdateGround) -> AppResult<Ground> {
        let mut state = self.state.lock().unwrap();
        let ground = state
            .grounds
            .iter_mut()
            .find(|g| g.ground_id == event.ground_id)
            .ok_or_else(|| AppError::EntityNotFound("ground".into()))?;
        ground.ensure_owned_by(event.requested_user)?;

        if let Some(title) = event.title {
            ground.title = title;
        }
        if let Some(amount) = event.price_amount {
            ground.price.amount = amount;
        }
        if let Some(available) = event.available {
            ground.available = available;
        }
        Ok(ground.clone())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        workflow::ensure_can_request(event.requester_role)?;

        let mut state = self.state.lock().unwrap();
        let ground = state
            .grounds
            .iter()
            .find(|g| g.ground_id == event.ground_id)
            .cloned()
            .ok_or_else(|| AppError::EntityNotFound("ground".into()))?;
        workflow::ensure_bookable(ground.ground_id, ground.available)?;

        let find_summary = |user_id: UserId| {
            state
                .users
                .iter()
                .find(|(u, _)| u.user_id == user_id)
                .map(|(u, _)| UserSummary::from(u.clone()))
                .ok_or_else(|| AppError::EntityNotFound("user".into()))
        };
        let renter = find_summary(event.requested_by)?;
        let owner = find_summary(ground.owner.owner_id)?;

        let booking = Booking {
            booking_id: BookingId::new(),
            ground: BookingGround {
                ground_id: ground.ground_id,
                title: ground.title.clone(),
                address: ground.location.address.clone(),
                available: ground.available,
            },
            renter,
            owner,
            amount: event.amount.unwrap_or(ground.price.amount),
            slot: event.slot,
            payment_proof: event.payment_proof,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        let booking_id = booking.booking_id;
        state.bookings.push(booking);
        Ok(booking_id)
    }

    async fn confirm(&self, event: DecideBooking) -> AppResult<()> {
        self.decide(Decision::Confirm, event)
    }

    async fn reject(&self, event: DecideBooking) -> AppResult<()> {
        self.decide(Decision::Reject, event)
    }

    async fn find_owner_queue(&self, owner_id: UserId) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .filter(|b| b.owner.user_id == owner_id && b.status != BookingStatus::Confirmed)
            .cloned()
            .collect())
    }

    async fn find_by_renter(&self, renter_id: UserId) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .filter(|b| b.renter.user_id == renter_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned())
    }
}

/// QR の代わりに支払いリンクをそのまま SVG に埋め込む
pub struct EchoRenderer;

#[async_trait]
impl PaymentCodeRenderer for EchoRenderer {
    async fn render(&self, intent: &PaymentIntent) -> AppResult<PaymentCode> {
        Ok(PaymentCode {
            mime_type: "image/svg+xml",
            bytes: format!("<svg><desc>{}</desc></svg>", intent.to_uri()).into_bytes(),
        })
    }
}

pub fn build_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::default();
    let repo = Arc::new(store.clone());
    let registry = AppRegistry::from_parts(
        repo.clone(),
        repo.clone(),
        repo.clone(),
        repo.clone(),
        repo,
        Arc::new(EchoRenderer),
    );
    let app = api::route::v1::routes().with_state(registry);
    (app, store)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// サインアップしてアクセストークンを返す
pub async fn signup(app: &Router, name: &str, role: &str, upi_id: Option<&str>) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(serde_json::json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "password": "password",
            "role": role,
            "upiId": upi_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["accessToken"].as_str().unwrap().to_string()
}

pub async fn list_ground(app: &Router, owner_token: &str, title: &str, amount: i64) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/grounds",
        Some(owner_token),
        Some(serde_json::json!({
            "title": title,
            "amount": amount,
            "address": "MG Road",
            "sportTags": ["football"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

pub fn booking_body(ground_id: &str) -> Value {
    serde_json::json!({
        "groundId": ground_id,
        "from": "2026-11-01T18:00:00Z",
        "to": "2026-11-01T20:00:00Z",
    })
}
