use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::course::application::domain::entities::CourseLevel;
use crate::course::application::ports::incoming::use_cases::ListCoursesError;
use crate::course::application::ports::outgoing::CourseFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListCoursesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/courses")]
pub async fn list_courses_handler(
    query: web::Query<ListCoursesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let level = match query.level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match CourseLevel::parse(raw) {
            Some(level) => Some(level),
            None => {
                return ApiResponse::bad_request(
                    "INVALID_LEVEL",
                    &format!("Unknown level '{raw}'"),
                )
            }
        },
    };

    let filter = CourseFilter {
        search: query.search,
        category: query.category,
        level,
    };
    let page = PageRequest::from_query(query.page, query.per_page);

    match data.course.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListCoursesError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list courses");
            ApiResponse::internal_error()
        }
    }
}
