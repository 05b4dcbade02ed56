use std::sync::Arc;

use adapter::payment::QrCodeRenderer;
use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl, ground::GroundRepositoryImpl,
    health::HealthCheckRepositoryImpl, user::UserRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, ground::GroundRepository,
    health::HealthCheckRepository, payment::PaymentCodeRenderer, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    ground_repository: Arc<dyn GroundRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    payment_code_renderer: Arc<dyn PaymentCodeRenderer>,
    payment_scheme: Arc<str>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let ground_repository = Arc::new(GroundRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let payment_code_renderer = Arc::new(QrCodeRenderer);
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            ground_repository,
            booking_repository,
            payment_code_renderer,
            payment_scheme: app_config.payment.scheme.into(),
        }
    }

    // 実装を差し替えて組み立てる（ルーターのテストなど）
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        ground_repository: Arc<dyn GroundRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        payment_code_renderer: Arc<dyn PaymentCodeRenderer>,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            ground_repository,
            booking_repository,
            payment_code_renderer,
            payment_scheme: kernel::model::payment::DEFAULT_SCHEME.into(),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn ground_repository(&self) -> Arc<dyn GroundRepository> {
        self.ground_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn payment_code_renderer(&self) -> Arc<dyn PaymentCodeRenderer> {
        self.payment_code_renderer.clone()
    }

    pub fn payment_scheme(&self) -> &str {
        &self.payment_scheme
    }
}
