use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    auth_use_cases::AuthUseCases,
    domain::entities::{InstructorStatus, UserId, UserProfile},
    ports::{incoming::use_cases::*, outgoing::UserListFilter},
};
use crate::category::application::{
    category_use_cases::CategoryUseCases, domain::entities::Category,
    ports::incoming::use_cases::*,
};
use crate::certificate::application::{
    certificate_use_cases::CertificateUseCases,
    domain::entities::{Certificate, MyCertificate},
    ports::incoming::use_cases::*,
};
use crate::contact::application::{
    contact_use_cases::ContactUseCases,
    domain::entities::{ContactMessage, ContactStatus},
    ports::incoming::use_cases::*,
};
use crate::course::application::{
    course_use_cases::CourseUseCases,
    domain::entities::{Course, CourseAccess, CourseCard, CourseDetails, CourseId, CourseStatus},
    ports::{incoming::use_cases::*, outgoing::CourseFilter},
};
use crate::dashboard::application::{
    dashboard_use_cases::DashboardUseCases,
    domain::entities::{InstructorDashboard, PlatformStats},
    ports::incoming::use_cases::*,
};
use crate::enrollment::application::{
    domain::entities::{EnrolledStudent, EnrollmentOverview, MyCourse},
    enrollment_use_cases::EnrollmentUseCases,
    ports::incoming::use_cases::*,
};
use crate::media::application::{
    domain::{entities::UploadTicket, policies::UploadPolicy},
    media_use_cases::MediaUseCases,
    ports::incoming::use_cases::*,
};
use crate::payment::application::{
    domain::entities::CheckoutSession, payment_use_cases::PaymentUseCases,
    ports::incoming::use_cases::*,
};
use crate::progress::application::{
    domain::entities::Progress, ports::incoming::use_cases::*,
    progress_use_cases::ProgressUseCases,
};
use crate::review::application::{
    domain::entities::{CourseReview, InstructorReview, Review},
    ports::incoming::use_cases::*,
    review_use_cases::ReviewUseCases,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::tutor::application::{ports::incoming::use_cases::*, tutor_use_cases::TutorUseCases};
use crate::AppState;

/// Fills every slot a route test does not override. Reaching it means the
/// test forgot a `with_*` call.
#[derive(Clone, Copy)]
pub struct UnusedUseCase;

fn unused() -> Arc<UnusedUseCase> {
    Arc::new(UnusedUseCase)
}

macro_rules! not_configured {
    () => {
        panic!("use case not configured for this test")
    };
}

#[async_trait]
impl RegisterUserUseCase for UnusedUseCase {
    async fn execute(&self, _: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        not_configured!()
    }
}

#[async_trait]
impl LoginUserUseCase for UnusedUseCase {
    async fn execute(&self, _: LoginCommand) -> Result<AuthSession, LoginError> {
        not_configured!()
    }
}

#[async_trait]
impl RefreshTokenUseCase for UnusedUseCase {
    async fn execute(&self, _: &str) -> Result<RefreshedToken, RefreshTokenError> {
        not_configured!()
    }
}

#[async_trait]
impl LogoutUseCase for UnusedUseCase {
    async fn execute(&self, _: LogoutCommand) -> Result<(), LogoutError> {
        not_configured!()
    }
}

#[async_trait]
impl GetProfileUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<UserProfile, GetProfileError> {
        not_configured!()
    }
}

#[async_trait]
impl UpdateProfileUseCase for UnusedUseCase {
    async fn execute(&self, _: UpdateProfileCommand) -> Result<UserProfile, UpdateProfileError> {
        not_configured!()
    }
}

#[async_trait]
impl ListUsersUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: UserListFilter,
        _: PageRequest,
    ) -> Result<PageResult<UserProfile>, ListUsersError> {
        not_configured!()
    }
}

#[async_trait]
impl DeleteUserUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId, _: UserId) -> Result<(), DeleteUserError> {
        not_configured!()
    }
}

#[async_trait]
impl SetInstructorStatusUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: UserId,
        _: InstructorStatus,
    ) -> Result<UserProfile, SetInstructorStatusError> {
        not_configured!()
    }
}

#[async_trait]
impl ListCoursesUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: CourseFilter,
        _: PageRequest,
    ) -> Result<PageResult<CourseCard>, ListCoursesError> {
        not_configured!()
    }
}

#[async_trait]
impl GetCourseUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: CourseId,
        _: Option<CourseViewer>,
    ) -> Result<CourseDetails, GetCourseError> {
        not_configured!()
    }
}

#[async_trait]
impl CreateCourseUseCase for UnusedUseCase {
    async fn execute(&self, _: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        not_configured!()
    }
}

#[async_trait]
impl ListInstructorCoursesUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<Vec<CourseCard>, ListInstructorCoursesError> {
        not_configured!()
    }
}

#[async_trait]
impl UpdateCourseUseCase for UnusedUseCase {
    async fn execute(&self, _: UpdateCourseCommand) -> Result<Course, UpdateCourseError> {
        not_configured!()
    }
}

#[async_trait]
impl DeleteCourseUseCase for UnusedUseCase {
    async fn execute(&self, _: CourseId, _: CourseAccess) -> Result<(), DeleteCourseError> {
        not_configured!()
    }
}

#[async_trait]
impl ListAllCoursesUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: Option<CourseStatus>,
    ) -> Result<Vec<CourseCard>, ListAllCoursesError> {
        not_configured!()
    }
}

#[async_trait]
impl SetCourseStatusUseCase for UnusedUseCase {
    async fn execute(&self, _: CourseId, _: CourseStatus) -> Result<Course, SetCourseStatusError> {
        not_configured!()
    }
}

#[async_trait]
impl ListCategoriesUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError> {
        not_configured!()
    }
}

#[async_trait]
impl CreateCategoryUseCase for UnusedUseCase {
    async fn execute(&self, _: CreateCategoryCommand) -> Result<Category, CreateCategoryError> {
        not_configured!()
    }
}

#[async_trait]
impl DeleteCategoryUseCase for UnusedUseCase {
    async fn execute(&self, _: Uuid) -> Result<(), DeleteCategoryError> {
        not_configured!()
    }
}

#[async_trait]
impl EnrollInCourseUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId, _: CourseId) -> Result<GrantOutcome, EnrollInCourseError> {
        not_configured!()
    }
}

#[async_trait]
impl GrantEnrollmentUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: GrantEnrollmentCommand,
    ) -> Result<GrantOutcome, GrantEnrollmentError> {
        not_configured!()
    }
}

#[async_trait]
impl ListMyCoursesUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<Vec<MyCourse>, ListMyCoursesError> {
        not_configured!()
    }
}

#[async_trait]
impl ListInstructorStudentsUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<Vec<EnrolledStudent>, ListInstructorStudentsError> {
        not_configured!()
    }
}

#[async_trait]
impl ListAllEnrollmentsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<EnrollmentOverview>, ListAllEnrollmentsError> {
        not_configured!()
    }
}

#[async_trait]
impl GetProgressUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId, _: CourseId) -> Result<Progress, GetProgressError> {
        not_configured!()
    }
}

#[async_trait]
impl ToggleLessonUseCase for UnusedUseCase {
    async fn execute(&self, _: ToggleLessonCommand) -> Result<Progress, ToggleLessonError> {
        not_configured!()
    }
}

#[async_trait]
impl SubmitReviewUseCase for UnusedUseCase {
    async fn execute(&self, _: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        not_configured!()
    }
}

#[async_trait]
impl ListCourseReviewsUseCase for UnusedUseCase {
    async fn execute(&self, _: CourseId) -> Result<Vec<CourseReview>, ListCourseReviewsError> {
        not_configured!()
    }
}

#[async_trait]
impl ListInstructorReviewsUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: UserId,
    ) -> Result<Vec<InstructorReview>, ListInstructorReviewsError> {
        not_configured!()
    }
}

#[async_trait]
impl IssueCertificateUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: UserId,
        _: CourseId,
    ) -> Result<IssuedCertificate, IssueCertificateError> {
        not_configured!()
    }
}

#[async_trait]
impl GetCertificateUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId, _: CourseId) -> Result<Certificate, GetCertificateError> {
        not_configured!()
    }
}

#[async_trait]
impl ListMyCertificatesUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<Vec<MyCertificate>, ListMyCertificatesError> {
        not_configured!()
    }
}

#[async_trait]
impl CreateCheckoutSessionUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: UserId,
        _: CourseId,
    ) -> Result<CheckoutSession, CreateCheckoutSessionError> {
        not_configured!()
    }
}

#[async_trait]
impl VerifySessionUseCase for UnusedUseCase {
    async fn execute(&self, _: VerifySessionCommand) -> Result<GrantOutcome, VerifySessionError> {
        not_configured!()
    }
}

#[async_trait]
impl HandleWebhookUseCase for UnusedUseCase {
    async fn execute(&self, _: &[u8], _: &str) -> Result<(), HandleWebhookError> {
        not_configured!()
    }
}

#[async_trait]
impl AskTutorUseCase for UnusedUseCase {
    async fn execute(&self, _: AskTutorCommand) -> Result<String, AskTutorError> {
        not_configured!()
    }
}

#[async_trait]
impl SubmitContactUseCase for UnusedUseCase {
    async fn execute(&self, _: SubmitContactCommand) -> Result<ContactMessage, SubmitContactError> {
        not_configured!()
    }
}

#[async_trait]
impl ListContactsUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: Option<ContactStatus>,
    ) -> Result<Vec<ContactMessage>, ListContactsError> {
        not_configured!()
    }
}

#[async_trait]
impl ReplyContactUseCase for UnusedUseCase {
    async fn execute(&self, _: ReplyContactCommand) -> Result<ContactMessage, ReplyContactError> {
        not_configured!()
    }
}

#[async_trait]
impl CreateUploadUrlUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _: CreateUploadUrlCommand,
    ) -> Result<UploadTicket, CreateUploadUrlError> {
        not_configured!()
    }
}

#[async_trait]
impl GetInstructorDashboardUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<InstructorDashboard, GetInstructorDashboardError> {
        not_configured!()
    }
}

#[async_trait]
impl GetPlatformStatsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<PlatformStats, GetPlatformStatsError> {
        not_configured!()
    }
}

pub fn test_upload_policy() -> UploadPolicy {
    UploadPolicy::new("test-media".to_string(), "https://cdn.test".to_string())
}

pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                auth: AuthUseCases {
                    register: unused(),
                    login: unused(),
                    refresh: unused(),
                    logout: unused(),
                    get_profile: unused(),
                    update_profile: unused(),
                    list_users: unused(),
                    delete_user: unused(),
                    set_instructor_status: unused(),
                },
                course: CourseUseCases {
                    list: unused(),
                    get: unused(),
                    create: unused(),
                    list_for_instructor: unused(),
                    update: unused(),
                    delete: unused(),
                    list_all: unused(),
                    set_status: unused(),
                },
                category: CategoryUseCases {
                    list: unused(),
                    create: unused(),
                    delete: unused(),
                },
                enrollment: EnrollmentUseCases {
                    enroll: unused(),
                    grant: unused(),
                    my_courses: unused(),
                    instructor_students: unused(),
                    list_all: unused(),
                },
                progress: ProgressUseCases {
                    get: unused(),
                    toggle_lesson: unused(),
                },
                review: ReviewUseCases {
                    submit: unused(),
                    list_for_course: unused(),
                    list_for_instructor: unused(),
                },
                certificate: CertificateUseCases {
                    issue: unused(),
                    get: unused(),
                    list_mine: unused(),
                },
                payment: PaymentUseCases {
                    checkout: unused(),
                    verify: unused(),
                    webhook: unused(),
                },
                tutor: TutorUseCases { ask: unused() },
                contact: ContactUseCases {
                    submit: unused(),
                    list: unused(),
                    reply: unused(),
                },
                media: MediaUseCases {
                    create_upload_url: unused(),
                    policy: Arc::new(test_upload_policy()),
                },
                dashboard: DashboardUseCases {
                    instructor: unused(),
                    platform: unused(),
                },
            },
        }
    }
}

/// `with_<name>(field.path, Trait)` setters.
macro_rules! setters {
    ($($name:ident => $module:ident . $field:ident : $trait:path;)*) => {
        impl TestAppStateBuilder {
            $(
                pub fn $name(mut self, uc: impl $trait + Send + Sync + 'static) -> Self {
                    self.state.$module.$field = Arc::new(uc);
                    self
                }
            )*
        }
    };
}

setters! {
    with_register => auth.register: RegisterUserUseCase;
    with_login => auth.login: LoginUserUseCase;
    with_refresh => auth.refresh: RefreshTokenUseCase;
    with_logout => auth.logout: LogoutUseCase;
    with_get_profile => auth.get_profile: GetProfileUseCase;
    with_update_profile => auth.update_profile: UpdateProfileUseCase;
    with_list_users => auth.list_users: ListUsersUseCase;
    with_delete_user => auth.delete_user: DeleteUserUseCase;
    with_set_instructor_status => auth.set_instructor_status: SetInstructorStatusUseCase;
    with_list_courses => course.list: ListCoursesUseCase;
    with_get_course => course.get: GetCourseUseCase;
    with_create_course => course.create: CreateCourseUseCase;
    with_list_instructor_courses => course.list_for_instructor: ListInstructorCoursesUseCase;
    with_update_course => course.update: UpdateCourseUseCase;
    with_delete_course => course.delete: DeleteCourseUseCase;
    with_list_all_courses => course.list_all: ListAllCoursesUseCase;
    with_set_course_status => course.set_status: SetCourseStatusUseCase;
    with_list_categories => category.list: ListCategoriesUseCase;
    with_create_category => category.create: CreateCategoryUseCase;
    with_delete_category => category.delete: DeleteCategoryUseCase;
    with_enroll => enrollment.enroll: EnrollInCourseUseCase;
    with_grant_enrollment => enrollment.grant: GrantEnrollmentUseCase;
    with_my_courses => enrollment.my_courses: ListMyCoursesUseCase;
    with_instructor_students => enrollment.instructor_students: ListInstructorStudentsUseCase;
    with_list_all_enrollments => enrollment.list_all: ListAllEnrollmentsUseCase;
    with_get_progress => progress.get: GetProgressUseCase;
    with_toggle_lesson => progress.toggle_lesson: ToggleLessonUseCase;
    with_submit_review => review.submit: SubmitReviewUseCase;
    with_list_course_reviews => review.list_for_course: ListCourseReviewsUseCase;
    with_list_instructor_reviews => review.list_for_instructor: ListInstructorReviewsUseCase;
    with_issue_certificate => certificate.issue: IssueCertificateUseCase;
    with_get_certificate => certificate.get: GetCertificateUseCase;
    with_list_my_certificates => certificate.list_mine: ListMyCertificatesUseCase;
    with_checkout => payment.checkout: CreateCheckoutSessionUseCase;
    with_verify_session => payment.verify: VerifySessionUseCase;
    with_webhook => payment.webhook: HandleWebhookUseCase;
    with_ask_tutor => tutor.ask: AskTutorUseCase;
    with_submit_contact => contact.submit: SubmitContactUseCase;
    with_list_contacts => contact.list: ListContactsUseCase;
    with_reply_contact => contact.reply: ReplyContactUseCase;
    with_create_upload_url => media.create_upload_url: CreateUploadUrlUseCase;
    with_instructor_dashboard => dashboard.instructor: GetInstructorDashboardUseCase;
    with_platform_stats => dashboard.platform: GetPlatformStatsUseCase;
}

impl TestAppStateBuilder {
    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
