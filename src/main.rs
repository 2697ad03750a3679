pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{
    auth, category, certificate, contact, course, dashboard, email, enrollment, media, payment,
    progress, review, tutor,
};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    DeleteUserService, GetProfileService, ListUsersService, LoginUserService, LogoutUserService,
    RefreshTokenService, RegisterUserService, SetInstructorStatusService, UpdateProfileService,
};

use crate::category::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::services::{
    CreateCategoryService, DeleteCategoryService, ListCategoriesService,
};

use crate::certificate::adapter::outgoing::CertificateRepositoryPostgres;
use crate::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::certificate::application::services::{
    GetCertificateService, IssueCertificateService, ListMyCertificatesService,
};

use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::services::{
    ListContactsService, ReplyContactService, SubmitContactService,
};

use crate::course::adapter::outgoing::{CourseQueryPostgres, CourseRepositoryPostgres};
use crate::course::application::course_use_cases::CourseUseCases;
use crate::course::application::services::{
    CreateCourseService, DeleteCourseService, GetCourseService, ListAllCoursesService,
    ListCoursesService, ListInstructorCoursesService, SetCourseStatusService, UpdateCourseService,
};

use crate::dashboard::adapter::outgoing::DashboardQueryPostgres;
use crate::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::dashboard::application::services::{InstructorDashboardService, PlatformStatsService};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::email::application::services::EmailNotificationService;

use crate::enrollment::adapter::outgoing::{
    EnrollmentQueryPostgres, EnrollmentRepositoryPostgres,
};
use crate::enrollment::application::enrollment_use_cases::EnrollmentUseCases;
use crate::enrollment::application::ports::incoming::use_cases::GrantEnrollmentUseCase;
use crate::enrollment::application::services::{
    EnrollInCourseService, GrantEnrollmentService, ListAllEnrollmentsService,
    ListInstructorStudentsService, ListMyCoursesService,
};

use crate::media::adapter::outgoing::cloud_storage::GcsUploadSigner;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::services::CreateUploadUrlService;

use crate::payment::adapter::outgoing::stripe::{
    StripeConfig, StripeGateway, StripeWebhookVerifier,
};
use crate::payment::application::payment_use_cases::PaymentUseCases;
use crate::payment::application::services::{
    CreateCheckoutSessionService, HandleWebhookService, VerifySessionService,
};

use crate::progress::adapter::outgoing::ProgressRepositoryPostgres;
use crate::progress::application::progress_use_cases::ProgressUseCases;
use crate::progress::application::services::{GetProgressService, ToggleLessonService};

use crate::review::adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres};
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::review::application::services::{
    ListCourseReviewsService, ListInstructorReviewsService, SubmitReviewService,
};

use crate::tutor::adapter::outgoing::gemini::{GeminiClient, GeminiConfig};
use crate::tutor::application::services::AskTutorService;
use crate::tutor::application::tutor_use_cases::TutorUseCases;

use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub course: CourseUseCases,
    pub category: CategoryUseCases,
    pub enrollment: EnrollmentUseCases,
    pub progress: ProgressUseCases,
    pub review: ReviewUseCases,
    pub certificate: CertificateUseCases,
    pub payment: PaymentUseCases,
    pub tutor: TutorUseCases,
    pub contact: ContactUseCases,
    pub media: MediaUseCases,
    pub dashboard: DashboardUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_smtp_sender() -> SmtpEmailSender {
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");

    if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Invalid SMTP relay configuration")
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::warn!("rustls crypto provider was already installed");
    }

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis = Arc::new(redis_pool);

    // Outgoing adapters
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());
    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(Argon2Hasher::from_env().expect("Invalid ARGON2_* parameters"));

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let token_repo = RedisTokenRepository::new(Arc::clone(&redis));

    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db));
    let course_query = CourseQueryPostgres::new(Arc::clone(&db));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db));
    let enrollment_repo = EnrollmentRepositoryPostgres::new(Arc::clone(&db));
    let enrollment_query = EnrollmentQueryPostgres::new(Arc::clone(&db));
    let progress_repo = ProgressRepositoryPostgres::new(Arc::clone(&db));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db));
    let review_query = ReviewQueryPostgres::new(Arc::clone(&db));
    let certificate_repo = CertificateRepositoryPostgres::new(Arc::clone(&db));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
    let dashboard_query = DashboardQueryPostgres::new(Arc::clone(&db));

    let stripe_config = StripeConfig::from_env();
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(build_smtp_sender());
    let notifications = Arc::new(EmailNotificationService::new(
        email_sender,
        stripe_config.client_url.clone(),
    ));
    let upload_policy = Arc::new(UploadPolicy::from_env());

    // Use cases
    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        refresh: Arc::new(RefreshTokenService::new(
            user_query.clone(),
            token_repo.clone(),
            Arc::clone(&tokens),
        )),
        logout: Arc::new(LogoutUserService::new(token_repo, Arc::clone(&tokens))),
        get_profile: Arc::new(GetProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        list_users: Arc::new(ListUsersService::new(user_query.clone())),
        delete_user: Arc::new(DeleteUserService::new(user_repo.clone())),
        set_instructor_status: Arc::new(SetInstructorStatusService::new(
            user_repo,
            user_query.clone(),
        )),
    };

    let course = CourseUseCases {
        list: Arc::new(ListCoursesService::new(course_query.clone())),
        get: Arc::new(GetCourseService::new(
            course_query.clone(),
            enrollment_query.clone(),
        )),
        create: Arc::new(CreateCourseService::new(
            course_repo.clone(),
            user_query.clone(),
            category_query.clone(),
        )),
        list_for_instructor: Arc::new(ListInstructorCoursesService::new(course_query.clone())),
        update: Arc::new(UpdateCourseService::new(
            course_repo.clone(),
            course_query.clone(),
            category_query.clone(),
        )),
        delete: Arc::new(DeleteCourseService::new(
            course_repo.clone(),
            course_query.clone(),
        )),
        list_all: Arc::new(ListAllCoursesService::new(course_query.clone())),
        set_status: Arc::new(SetCourseStatusService::new(course_repo)),
    };

    let category = CategoryUseCases {
        list: Arc::new(ListCategoriesService::new(category_query)),
        create: Arc::new(CreateCategoryService::new(category_repo.clone())),
        delete: Arc::new(DeleteCategoryService::new(category_repo)),
    };

    let grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync> =
        Arc::new(GrantEnrollmentService::new(
            enrollment_repo,
            enrollment_query.clone(),
            course_query.clone(),
            user_query.clone(),
            notifications.clone(),
        ));

    let enrollment = EnrollmentUseCases {
        enroll: Arc::new(EnrollInCourseService::new(
            course_query.clone(),
            enrollment_query.clone(),
            Arc::clone(&grant),
        )),
        grant: Arc::clone(&grant),
        my_courses: Arc::new(ListMyCoursesService::new(enrollment_query.clone())),
        instructor_students: Arc::new(ListInstructorStudentsService::new(
            enrollment_query.clone(),
        )),
        list_all: Arc::new(ListAllEnrollmentsService::new(enrollment_query.clone())),
    };

    let progress = ProgressUseCases {
        get: Arc::new(GetProgressService::new(
            progress_repo.clone(),
            enrollment_query.clone(),
            course_query.clone(),
        )),
        toggle_lesson: Arc::new(ToggleLessonService::new(
            progress_repo.clone(),
            enrollment_query.clone(),
            course_query.clone(),
        )),
    };

    let review = ReviewUseCases {
        submit: Arc::new(SubmitReviewService::new(
            review_repo,
            enrollment_query.clone(),
        )),
        list_for_course: Arc::new(ListCourseReviewsService::new(review_query.clone())),
        list_for_instructor: Arc::new(ListInstructorReviewsService::new(review_query)),
    };

    let certificate = CertificateUseCases {
        issue: Arc::new(IssueCertificateService::new(
            certificate_repo.clone(),
            progress_repo,
            enrollment_query.clone(),
            course_query.clone(),
        )),
        get: Arc::new(GetCertificateService::new(certificate_repo.clone())),
        list_mine: Arc::new(ListMyCertificatesService::new(certificate_repo)),
    };

    let webhook_verifier = StripeWebhookVerifier::new(stripe_config.webhook_secret.clone());
    let stripe = StripeGateway::new(stripe_config);

    let payment = PaymentUseCases {
        checkout: Arc::new(CreateCheckoutSessionService::new(
            course_query,
            enrollment_query,
            stripe.clone(),
        )),
        verify: Arc::new(VerifySessionService::new(stripe, Arc::clone(&grant))),
        webhook: Arc::new(HandleWebhookService::new(webhook_verifier, grant)),
    };

    let tutor = TutorUseCases {
        ask: Arc::new(AskTutorService::new(GeminiClient::new(
            GeminiConfig::from_env(),
        ))),
    };

    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(contact_repo.clone())),
        list: Arc::new(ListContactsService::new(contact_repo.clone())),
        reply: Arc::new(ReplyContactService::new(contact_repo, notifications)),
    };

    let media = MediaUseCases {
        create_upload_url: Arc::new(CreateUploadUrlService::new(
            GcsUploadSigner::new(),
            user_query,
            Arc::clone(&upload_policy),
        )),
        policy: upload_policy,
    };

    let dashboard = DashboardUseCases {
        instructor: Arc::new(InstructorDashboardService::new(dashboard_query.clone())),
        platform: Arc::new(PlatformStatsService::new(dashboard_query)),
    };

    let state = AppState {
        auth,
        course,
        category,
        enrollment,
        progress,
        review,
        certificate,
        payment,
        tutor,
        contact,
        media,
        dashboard,
    };

    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(Arc::clone(&redis)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::category::adapter::incoming::web::routes as category_routes;
    use crate::certificate::adapter::incoming::web::routes as certificate_routes;
    use crate::contact::adapter::incoming::web::routes as contact_routes;
    use crate::course::adapter::incoming::web::routes as course_routes;
    use crate::dashboard::adapter::incoming::web::routes as dashboard_routes;
    use crate::enrollment::adapter::incoming::web::routes as enrollment_routes;
    use crate::media::adapter::incoming::web::routes as media_routes;
    use crate::payment::adapter::incoming::web::routes as payment_routes;
    use crate::progress::adapter::incoming::web::routes as progress_routes;
    use crate::review::adapter::incoming::web::routes as review_routes;
    use crate::tutor::adapter::incoming::web::routes as tutor_routes;

    // Health and docs
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth and users
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::get_profile_handler);
    cfg.service(auth_routes::update_profile_handler);
    cfg.service(auth_routes::list_users_handler);
    cfg.service(auth_routes::delete_user_handler);
    cfg.service(auth_routes::set_instructor_status_handler);
    // Catalog
    cfg.service(category_routes::list_categories_handler);
    cfg.service(category_routes::create_category_handler);
    cfg.service(category_routes::delete_category_handler);
    cfg.service(course_routes::list_courses_handler);
    cfg.service(course_routes::get_course_handler);
    cfg.service(course_routes::create_course_handler);
    cfg.service(course_routes::list_instructor_courses_handler);
    cfg.service(course_routes::update_course_handler);
    cfg.service(course_routes::delete_instructor_course_handler);
    cfg.service(course_routes::admin_list_courses_handler);
    cfg.service(course_routes::set_course_status_handler);
    cfg.service(course_routes::admin_delete_course_handler);
    cfg.service(review_routes::course_reviews_handler);
    // Learning
    cfg.service(enrollment_routes::enroll_handler);
    cfg.service(enrollment_routes::my_courses_handler);
    cfg.service(enrollment_routes::instructor_students_handler);
    cfg.service(enrollment_routes::admin_enrollments_handler);
    cfg.service(progress_routes::get_progress_handler);
    cfg.service(progress_routes::toggle_lesson_handler);
    cfg.service(review_routes::submit_review_handler);
    cfg.service(review_routes::instructor_reviews_handler);
    cfg.service(certificate_routes::issue_certificate_handler);
    cfg.service(certificate_routes::get_certificate_handler);
    cfg.service(certificate_routes::my_certificates_handler);
    cfg.service(tutor_routes::ai_chat_handler);
    // Payments
    cfg.service(payment_routes::create_checkout_session_handler);
    cfg.service(payment_routes::verify_session_handler);
    cfg.service(payment_routes::payment_webhook_handler);
    // Contact, media, dashboards
    cfg.service(contact_routes::submit_contact_handler);
    cfg.service(contact_routes::list_contacts_handler);
    cfg.service(contact_routes::reply_contact_handler);
    cfg.service(media_routes::create_upload_handler);
    cfg.service(dashboard_routes::instructor_dashboard_handler);
    cfg.service(dashboard_routes::platform_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
