use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    booking::BookingRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, hotel::HotelRepositoryImpl, ticket::TicketRepositoryImpl,
};
use kernel::repository::{
    booking::BookingRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
    hotel::HotelRepository, ticket::TicketRepository,
};
use kernel::service::{
    booking::BookingService,
    eligibility::{BookingEligibility, HotelAccess},
    hotel::HotelService,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    booking_service: BookingService,
    hotel_service: HotelService,
    app_config: AppConfig,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let enrollment_repository: Arc<dyn EnrollmentRepository> =
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let ticket_repository: Arc<dyn TicketRepository> =
            Arc::new(TicketRepositoryImpl::new(pool.clone()));
        let hotel_repository: Arc<dyn HotelRepository> =
            Arc::new(HotelRepositoryImpl::new(pool.clone()));
        let booking_repository: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(pool.clone()));

        let booking_service = BookingService::new(
            BookingEligibility::new(enrollment_repository.clone(), ticket_repository.clone()),
            hotel_repository.clone(),
            booking_repository,
        );
        let hotel_service = HotelService::new(
            HotelAccess::new(enrollment_repository, ticket_repository),
            hotel_repository,
        );

        Self {
            health_check_repository,
            booking_service,
            hotel_service,
            app_config,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn booking_service(&self) -> BookingService {
        self.booking_service.clone()
    }

    pub fn hotel_service(&self) -> HotelService {
        self.hotel_service.clone()
    }

    pub fn jwt_secret(&self) -> &str {
        &self.app_config.auth.jwt_secret
    }
}
