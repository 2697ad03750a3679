use async_trait::async_trait;

use crate::auth::application::domain::entities::UserRole;
use crate::course::application::{
    domain::entities::{CourseDetails, CourseId},
    ports::{
        incoming::use_cases::{CourseViewer, GetCourseError, GetCourseUseCase},
        outgoing::CourseQuery,
    },
};
use crate::enrollment::application::ports::outgoing::EnrollmentQuery;

/// Course page. Drafts are visible to their owner, admins and enrolled
/// students; lesson content is gated behind enrollment unless the lesson is
/// a free preview.
pub struct GetCourseService<Q, E>
where
    Q: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    query: Q,
    enrollments: E,
}

impl<Q, E> GetCourseService<Q, E>
where
    Q: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q, enrollments: E) -> Self {
        Self { query, enrollments }
    }
}

#[async_trait]
impl<Q, E> GetCourseUseCase for GetCourseService<Q, E>
where
    Q: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: CourseId,
        viewer: Option<CourseViewer>,
    ) -> Result<CourseDetails, GetCourseError> {
        let record = self
            .query
            .find_record(course_id)
            .await
            .map_err(|e| GetCourseError::QueryError(e.to_string()))?
            .ok_or(GetCourseError::CourseNotFound)?;

        let privileged = viewer.is_some_and(|v| {
            v.role == UserRole::Admin || record.course.is_owned_by(v.user_id)
        });

        let is_enrolled = match viewer {
            Some(v) => self
                .enrollments
                .is_enrolled(v.user_id, course_id)
                .await
                .map_err(|e| GetCourseError::QueryError(e.to_string()))?,
            None => false,
        };

        if !record.course.is_published() && !privileged && !is_enrolled {
            return Err(GetCourseError::CourseNotFound);
        }

        let mut course = record.course;
        if !privileged && !is_enrolled {
            course.strip_locked_content();
        }

        Ok(CourseDetails {
            total_duration: course.total_duration(),
            course,
            instructor_name: record.instructor_name,
            enrolled_students: record.enrolled_students,
            is_enrolled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::course::application::domain::entities::CourseStatus;
    use crate::tests::support::course_fakes::{sample_course, FakeCourseStore};
    use crate::tests::support::enrollment_fakes::FakeEnrollmentStore;
    use uuid::Uuid;

    fn viewer(user_id: UserId, role: UserRole) -> Option<CourseViewer> {
        Some(CourseViewer { user_id, role })
    }

    fn locked_video_url(details: &CourseDetails) -> Option<String> {
        details.course.sections[0].lessons[1].video_url.clone()
    }

    #[tokio::test]
    async fn anonymous_viewer_sees_only_previews() {
        let course = sample_course(UserId::from(Uuid::new_v4()));
        let service = GetCourseService::new(
            FakeCourseStore::with_course(course.clone()),
            FakeEnrollmentStore::default(),
        );

        let details = service.execute(course.id, None).await.unwrap();

        assert!(!details.is_enrolled);
        assert!(details.course.sections[0].lessons[0].video_url.is_some());
        assert!(locked_video_url(&details).is_none());
        assert_eq!(details.total_duration, 40);
    }

    #[tokio::test]
    async fn enrolled_student_sees_everything() {
        let course = sample_course(UserId::from(Uuid::new_v4()));
        let student = UserId::from(Uuid::new_v4());
        let service = GetCourseService::new(
            FakeCourseStore::with_course(course.clone()),
            FakeEnrollmentStore::with_enrollment(student, course.id),
        );

        let details = service
            .execute(course.id, viewer(student, UserRole::User))
            .await
            .unwrap();

        assert!(details.is_enrolled);
        assert!(locked_video_url(&details).is_some());
    }

    #[tokio::test]
    async fn draft_is_hidden_from_students_but_visible_to_owner() {
        let owner = UserId::from(Uuid::new_v4());
        let mut course = sample_course(owner);
        course.status = CourseStatus::Draft;
        let service = GetCourseService::new(
            FakeCourseStore::with_course(course.clone()),
            FakeEnrollmentStore::default(),
        );

        let hidden = service
            .execute(course.id, viewer(UserId::from(Uuid::new_v4()), UserRole::User))
            .await;
        assert!(matches!(hidden, Err(GetCourseError::CourseNotFound)));

        let details = service
            .execute(course.id, viewer(owner, UserRole::Instructor))
            .await
            .unwrap();
        assert!(locked_video_url(&details).is_some());
        assert!(!details.is_enrolled);
    }

    #[tokio::test]
    async fn enrolled_student_keeps_access_to_unpublished_course() {
        let mut course = sample_course(UserId::from(Uuid::new_v4()));
        course.status = CourseStatus::Draft;
        let student = UserId::from(Uuid::new_v4());
        let service = GetCourseService::new(
            FakeCourseStore::with_course(course.clone()),
            FakeEnrollmentStore::with_enrollment(student, course.id),
        );

        let details = service
            .execute(course.id, viewer(student, UserRole::User))
            .await
            .unwrap();

        assert!(details.is_enrolled);
        assert!(locked_video_url(&details).is_some());
    }

    #[tokio::test]
    async fn admin_sees_drafts_in_full() {
        let mut course = sample_course(UserId::from(Uuid::new_v4()));
        course.status = CourseStatus::Draft;
        let service = GetCourseService::new(
            FakeCourseStore::with_course(course.clone()),
            FakeEnrollmentStore::default(),
        );

        let details = service
            .execute(course.id, viewer(UserId::from(Uuid::new_v4()), UserRole::Admin))
            .await
            .unwrap();

        assert!(locked_video_url(&details).is_some());
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let service =
            GetCourseService::new(FakeCourseStore::default(), FakeEnrollmentStore::default());

        let result = service.execute(CourseId::from(Uuid::new_v4()), None).await;

        assert!(matches!(result, Err(GetCourseError::CourseNotFound)));
    }
}
