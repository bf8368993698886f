//! Application state and factory
//!
//! The application factory is generic over the repository traits so the same
//! route table runs against MySQL in the binary and against the in-memory
//! mocks in integration tests.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use hh_core::repositories::{BookingRepository, HouseRepository, UserRepository};
use hh_core::services::auth::AuthService;
use hh_core::services::booking::BookingService;
use hh_core::services::house::HouseService;
use hh_core::services::token::TokenService;

use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes::{auth, bookings, houses, users};

/// Application state that holds shared services
pub struct AppState<U, H, B>
where
    U: UserRepository,
    H: HouseRepository,
    B: BookingRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub house_service: Arc<HouseService<H>>,
    pub booking_service: Arc<BookingService<B, H>>,
    pub token_service: Arc<TokenService>,
}

impl<U, H, B> AppState<U, H, B>
where
    U: UserRepository,
    H: HouseRepository,
    B: BookingRepository,
{
    /// Wire the domain services over the given repositories
    pub fn new(
        user_repository: Arc<U>,
        house_repository: Arc<H>,
        booking_repository: Arc<B>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                user_repository,
                Arc::clone(&token_service),
            )),
            house_service: Arc::new(HouseService::new(Arc::clone(&house_repository))),
            booking_service: Arc::new(BookingService::new(
                booking_repository,
                house_repository,
            )),
            token_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, H, B>(
    app_state: web::Data<AppState<U, H, B>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let cors = create_cors();
    let jwt = |state: &web::Data<AppState<U, H, B>>| {
        JwtAuth::new(Arc::clone(&state.token_service))
    };

    App::new()
        .app_data(app_state.clone())
        .wrap(actix_web::middleware::Compat::new(Logger::default()))
        .wrap(actix_web::middleware::Compat::new(cors))
        // Liveness
        .route("/", web::get().to(health_check))
        .route("/health", web::get().to(health_check))
        // Accounts and sessions
        .route("/signup", web::post().to(auth::signup::<U, H, B>))
        .route("/login", web::post().to(auth::login::<U, H, B>))
        .route("/currentuser", web::get().to(auth::current_user::<U, H, B>))
        .route("/owner/{email}", web::get().to(users::owner_check::<U, H, B>))
        .route(
            "/profile/{email}",
            web::get().to(users::profile_by_email::<U, H, B>),
        )
        .route(
            "/getprofileinfo/{id}",
            web::get().to(users::profile_by_id::<U, H, B>),
        )
        .route(
            "/updateprofile/{id}",
            web::put()
                .to(users::update_profile::<U, H, B>)
                .wrap(jwt(&app_state)),
        )
        // Listing catalog
        .route("/houses", web::get().to(houses::search_houses::<U, H, B>))
        // tail match so an empty search text still hits the route
        .route(
            "/housesearch/{text:.*}",
            web::get().to(houses::search_by_name::<U, H, B>),
        )
        .route("/house/{id}", web::get().to(houses::get_house::<U, H, B>))
        .route(
            "/ownhouse/{email}",
            web::get().to(houses::own_houses::<U, H, B>),
        )
        .route(
            "/addhouse",
            web::post()
                .to(houses::add_house::<U, H, B>)
                .wrap(jwt(&app_state)),
        )
        .route(
            "/updatehouse/{id}",
            web::put()
                .to(houses::update_house::<U, H, B>)
                .wrap(jwt(&app_state)),
        )
        .route(
            "/deletehouse/{id}",
            web::delete()
                .to(houses::delete_house::<U, H, B>)
                .wrap(jwt(&app_state)),
        )
        // Bookings
        .route(
            "/mybooking",
            web::post().to(bookings::create_booking::<U, H, B>),
        )
        .route(
            "/mybooking/{email}",
            web::get().to(bookings::tenant_bookings::<U, H, B>),
        )
        .route(
            "/bookedhouse/{email}",
            web::get().to(bookings::owner_bookings::<U, H, B>),
        )
        .route(
            "/approvedbooking/{id}",
            web::patch()
                .to(bookings::approve_booking::<U, H, B>)
                .wrap(jwt(&app_state)),
        )
        .route(
            "/booking/{id}",
            web::delete()
                .to(bookings::delete_booking::<U, H, B>)
                .wrap(jwt(&app_state)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "house-hunter-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
