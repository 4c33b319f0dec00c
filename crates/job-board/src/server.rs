/// MCP server exposing the job board.
///
/// Job tools:
/// - `list_jobs`, `search_jobs`, `get_job`: read the in-memory postings
/// - `refresh_jobs`, `get_job_board_status`: reload from the source and inspect the flags
///
/// Page tools:
/// - `list_routes`, `resolve_route`: the route table
/// - `get_navigation`, `get_breadcrumbs`: menus and breadcrumbs
/// - `resolve_scroll`: where a navigation should land
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::routes::{self, FooterNav, NavItem, RouteEntry};
use crate::scroll::{self, SavedPosition, ScrollTarget};
use crate::source::Source;
use crate::store::{JobStore, StoreStatus};
use jobboard_common::board_api::{
    GetJobParams, JobBoardStatusResponse, JobDetailResponse, JobListResponse, SearchJobsParams,
};

#[derive(Debug, Deserialize, JsonSchema)]
struct ResolveRouteParams {
    /// Route name from `list_routes`, e.g. "jobs.detail" or "auth.login".
    name: String,
    /// Value for parameterised routes (job ID, category, search query).
    param: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BreadcrumbsParams {
    /// Current page path, e.g. "/jobs/42".
    path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ResolveScrollParams {
    /// Fragment of the target location including '#', e.g. "#requirements".
    hash: Option<String>,
    /// Position saved by the browser for back/forward navigation.
    saved_position: Option<SavedPosition>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct RouteListResponse {
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct PathResponse {
    path: String,
}

#[derive(Debug, Serialize, JsonSchema)]
struct NavigationResponse {
    main: Vec<NavItem>,
    footer: FooterNav,
}

#[derive(Debug, Serialize, JsonSchema)]
struct BreadcrumbsResponse {
    breadcrumbs: Vec<NavItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct ScrollResponse {
    target: ScrollTarget,
}

#[derive(Clone)]
pub struct JobBoardServer {
    store: Arc<JobStore<Source>>,
    tool_router: ToolRouter<JobBoardServer>,
}

impl JobBoardServer {
    pub fn new(store: Arc<JobStore<Source>>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl JobBoardServer {
    #[tool(description = "List every job posting on the board, in board order.")]
    async fn list_jobs(&self) -> Result<Json<JobListResponse>, String> {
        Ok(Json(self.store.list().await.into()))
    }

    #[tool(description = "Search job postings by keyword. Matches title, company or location as a case-insensitive substring. An empty query returns every posting.")]
    async fn search_jobs(
        &self,
        Parameters(params): Parameters<SearchJobsParams>,
    ) -> Result<Json<JobListResponse>, String> {
        let query = params.query.trim();
        Ok(Json(self.store.search(query).await.into()))
    }

    #[tool(description = "Get the full details of one job posting by numeric ID (e.g. 2).")]
    async fn get_job(
        &self,
        Parameters(params): Parameters<GetJobParams>,
    ) -> Result<Json<JobDetailResponse>, String> {
        let job = self
            .store
            .find_by_id(params.job_id)
            .await
            .ok_or_else(|| format!("job not found: {}", params.job_id))?;

        Ok(Json(JobDetailResponse {
            path: routes::jobs::detail(job.id),
            job,
        }))
    }

    #[tool(description = "Reload job postings from the configured source (simulated delay or the upstream jobs API). Returns the loading/error flags and job count afterwards.")]
    async fn refresh_jobs(&self) -> Result<Json<JobBoardStatusResponse>, String> {
        info!("refresh_jobs tool invoked");
        self.store.refresh().await;
        Ok(Json(to_status_response(self.store.status().await)))
    }

    #[tool(description = "Report whether a refresh is in flight, the last refresh error and the number of postings.")]
    async fn get_job_board_status(&self) -> Result<Json<JobBoardStatusResponse>, String> {
        Ok(Json(to_status_response(self.store.status().await)))
    }

    #[tool(description = "List every route the board declares, with its path pattern and parameter name.")]
    async fn list_routes(&self) -> Result<Json<RouteListResponse>, String> {
        Ok(Json(RouteListResponse {
            routes: routes::ROUTE_TABLE.to_vec(),
        }))
    }

    #[tool(description = "Build a concrete path for a named route, e.g. name='jobs.detail' param='42' gives '/jobs/42'. Search queries are URL-encoded.")]
    async fn resolve_route(
        &self,
        Parameters(params): Parameters<ResolveRouteParams>,
    ) -> Result<Json<PathResponse>, String> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        let path = routes::resolve(name, params.param.as_deref()).map_err(|e| e.to_string())?;
        Ok(Json(PathResponse { path }))
    }

    #[tool(description = "Get the main navigation menu and the grouped footer links.")]
    async fn get_navigation(&self) -> Result<Json<NavigationResponse>, String> {
        Ok(Json(NavigationResponse {
            main: routes::main_nav(),
            footer: routes::footer_nav(),
        }))
    }

    #[tool(description = "Get the breadcrumb trail for a page path, starting from the home page.")]
    async fn get_breadcrumbs(
        &self,
        Parameters(params): Parameters<BreadcrumbsParams>,
    ) -> Result<Json<BreadcrumbsResponse>, String> {
        Ok(Json(BreadcrumbsResponse {
            breadcrumbs: routes::breadcrumbs(params.path.trim()),
        }))
    }

    #[tool(description = "Decide where the page should scroll after navigating: the fragment element, else the saved position, else the top of the page.")]
    async fn resolve_scroll(
        &self,
        Parameters(params): Parameters<ResolveScrollParams>,
    ) -> Result<Json<ScrollResponse>, String> {
        let hash = params.hash.as_deref().map(str::trim);
        Ok(Json(ScrollResponse {
            target: scroll::scroll_behavior(hash, params.saved_position),
        }))
    }
}

fn to_status_response(status: StoreStatus) -> JobBoardStatusResponse {
    JobBoardStatusResponse {
        loading: status.loading,
        error: status.error,
        job_count: status.job_count,
    }
}

#[tool_handler]
impl ServerHandler for JobBoardServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "job-board".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Job board MCP server. Use list_jobs or search_jobs to browse postings, \
                 get_job for one posting by ID, and refresh_jobs to reload from the source. \
                 list_routes, resolve_route, get_navigation and get_breadcrumbs describe the \
                 board's pages; resolve_scroll decides where a navigation lands."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::seed::seed_jobs;
    use crate::source::SeededSource;

    fn server() -> JobBoardServer {
        let source = Source::Seeded(SeededSource::new(Duration::ZERO));
        let store = JobStore::new(seed_jobs(), source).expect("seed ids are unique");
        JobBoardServer::new(Arc::new(store))
    }

    #[test]
    fn tools_publish_output_schemas() {
        let tools = JobBoardServer::tool_router().list_all();
        for name in [
            "list_jobs",
            "search_jobs",
            "get_job",
            "refresh_jobs",
            "get_job_board_status",
            "list_routes",
            "resolve_route",
            "get_navigation",
            "get_breadcrumbs",
            "resolve_scroll",
        ] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn get_job_returns_detail_with_path() {
        let Json(detail) = server()
            .get_job(Parameters(GetJobParams { job_id: 2 }))
            .await
            .expect("job 2 exists");
        assert_eq!(detail.job.title, "Staff Administrasi");
        assert_eq!(detail.path, "/jobs/2");
    }

    #[tokio::test]
    async fn get_job_reports_missing_id() {
        let err = server()
            .get_job(Parameters(GetJobParams { job_id: 404 }))
            .await
            .err()
            .expect("job 404 does not exist");
        assert_eq!(err, "job not found: 404");
    }

    #[tokio::test]
    async fn search_jobs_trims_query() {
        let server = server();
        let Json(found) = server
            .search_jobs(Parameters(SearchJobsParams {
                query: "  jakarta ".to_string(),
            }))
            .await
            .expect("search never fails");
        assert_eq!(found.total, 1);
        assert_eq!(found.jobs[0].title, "Frontend Developer");

        let Json(all) = server
            .search_jobs(Parameters(SearchJobsParams {
                query: "   ".to_string(),
            }))
            .await
            .expect("search never fails");
        assert_eq!(all.total, 4);
    }

    #[tokio::test]
    async fn refresh_reports_settled_status() {
        let Json(status) = server().refresh_jobs().await.expect("refresh tool never fails");
        assert!(!status.loading);
        assert_eq!(status.error, None);
        assert_eq!(status.job_count, 4);
    }

    #[tokio::test]
    async fn resolve_route_maps_errors_to_messages() {
        let server = server();
        let Json(path) = server
            .resolve_route(Parameters(ResolveRouteParams {
                name: "jobs.search".to_string(),
                param: Some("staff admin".to_string()),
            }))
            .await
            .expect("route exists");
        assert_eq!(path.path, "/jobs?q=staff%20admin");

        let err = server
            .resolve_route(Parameters(ResolveRouteParams {
                name: "careers".to_string(),
                param: None,
            }))
            .await
            .err()
            .expect("unknown route");
        assert_eq!(err, "unknown route: careers");
    }

    #[tokio::test]
    async fn breadcrumbs_and_scroll_tools() {
        let server = server();
        let Json(crumbs) = server
            .get_breadcrumbs(Parameters(BreadcrumbsParams {
                path: "/dashboard/profile".to_string(),
            }))
            .await
            .expect("breadcrumbs never fail");
        let labels: Vec<&str> = crumbs.breadcrumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Beranda", "Dashboard"]);

        let Json(scroll) = server
            .resolve_scroll(Parameters(ResolveScrollParams {
                hash: Some(" ".to_string()),
                saved_position: Some(SavedPosition { left: 0.0, top: 300.0 }),
            }))
            .await
            .expect("scroll never fails");
        assert_eq!(
            scroll.target,
            ScrollTarget::Restore(SavedPosition { left: 0.0, top: 300.0 })
        );
    }
}
