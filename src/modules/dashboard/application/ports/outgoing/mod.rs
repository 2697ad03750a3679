pub mod dashboard_query;

pub use dashboard_query::{DashboardQuery, DashboardQueryError, InstructorTotals, MonthCount};
