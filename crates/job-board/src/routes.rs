//! Route table, navigation menus and breadcrumbs for the board's pages.
//!
//! Paths are declared here once so links, menus and breadcrumbs agree. Most
//! of them are only declared; the pages behind them live in the front-end.
use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::AppError;

pub const HOME: &str = "/";

pub mod jobs {
    use std::fmt::Display;

    pub const LIST: &str = "/jobs";

    pub fn detail(id: impl Display) -> String {
        format!("/jobs/{id}")
    }

    pub fn by_category(category: &str) -> String {
        format!("/jobs/category/{category}")
    }

    pub fn search(query: &str) -> String {
        format!("/jobs?q={}", urlencoding::encode(query))
    }
}

pub mod companies {
    use std::fmt::Display;

    pub const LIST: &str = "/companies";

    pub fn detail(id: impl Display) -> String {
        format!("/companies/{id}")
    }
}

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
}

pub mod dashboard {
    pub const HOME: &str = "/dashboard";
    pub const PROFILE: &str = "/dashboard/profile";
    pub const APPLICATIONS: &str = "/dashboard/applications";
    pub const SAVED_JOBS: &str = "/dashboard/saved-jobs";
    pub const SETTINGS: &str = "/dashboard/settings";
}

pub mod pages {
    pub const ABOUT: &str = "/about";
    pub const CONTACT: &str = "/contact";
    pub const FAQ: &str = "/faq";
    pub const PRIVACY: &str = "/privacy";
    pub const TERMS: &str = "/terms";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct RouteEntry {
    pub name: &'static str,
    pub pattern: &'static str,
    /// Name of the value substituted into the pattern, if any.
    pub param: Option<&'static str>,
}

const fn fixed(name: &'static str, pattern: &'static str) -> RouteEntry {
    RouteEntry {
        name,
        pattern,
        param: None,
    }
}

const fn with_param(name: &'static str, pattern: &'static str, param: &'static str) -> RouteEntry {
    RouteEntry {
        name,
        pattern,
        param: Some(param),
    }
}

pub const ROUTE_TABLE: &[RouteEntry] = &[
    fixed("home", HOME),
    fixed("jobs.list", jobs::LIST),
    with_param("jobs.detail", "/jobs/{id}", "id"),
    with_param("jobs.by_category", "/jobs/category/{category}", "category"),
    with_param("jobs.search", "/jobs?q={query}", "query"),
    fixed("companies.list", companies::LIST),
    with_param("companies.detail", "/companies/{id}", "id"),
    fixed("auth.login", auth::LOGIN),
    fixed("auth.register", auth::REGISTER),
    fixed("auth.forgot_password", auth::FORGOT_PASSWORD),
    fixed("auth.reset_password", auth::RESET_PASSWORD),
    fixed("dashboard.home", dashboard::HOME),
    fixed("dashboard.profile", dashboard::PROFILE),
    fixed("dashboard.applications", dashboard::APPLICATIONS),
    fixed("dashboard.saved_jobs", dashboard::SAVED_JOBS),
    fixed("dashboard.settings", dashboard::SETTINGS),
    fixed("pages.about", pages::ABOUT),
    fixed("pages.contact", pages::CONTACT),
    fixed("pages.faq", pages::FAQ),
    fixed("pages.privacy", pages::PRIVACY),
    fixed("pages.terms", pages::TERMS),
];

/// Build a concrete path for a named route from [`ROUTE_TABLE`].
///
/// Parameterised routes require `param`; fixed routes ignore it.
pub fn resolve(name: &str, param: Option<&str>) -> Result<String, AppError> {
    let entry = ROUTE_TABLE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::UnknownRoute(name.to_string()))?;

    if entry.param.is_none() {
        return Ok(entry.pattern.to_string());
    }
    let value = param
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::MissingRouteParam(entry.name.to_string()))?;

    let path = match entry.name {
        "jobs.detail" => jobs::detail(value),
        "jobs.by_category" => jobs::by_category(value),
        "jobs.search" => jobs::search(value),
        "companies.detail" => companies::detail(value),
        other => return Err(AppError::UnknownRoute(other.to_string())),
    };
    Ok(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct NavItem {
    pub label: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn link(label: impl Into<String>, to: impl Display) -> Self {
        Self {
            label: label.into(),
            to: to.to_string(),
            icon: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FooterNav {
    pub menu: Vec<NavItem>,
    pub info: Vec<NavItem>,
    pub legal: Vec<NavItem>,
}

pub fn main_nav() -> Vec<NavItem> {
    vec![
        NavItem::link("Beranda", HOME),
        NavItem::link("Lowongan", jobs::LIST),
        NavItem::link("Perusahaan", companies::LIST),
        NavItem::link("Tentang", pages::ABOUT),
    ]
}

pub fn footer_nav() -> FooterNav {
    FooterNav {
        menu: vec![
            NavItem::link("Beranda", HOME),
            NavItem::link("Lowongan", jobs::LIST),
            NavItem::link("Perusahaan", companies::LIST),
        ],
        info: vec![
            NavItem::link("Tentang Kami", pages::ABOUT),
            NavItem::link("FAQ", pages::FAQ),
            NavItem::link("Kontak", pages::CONTACT),
        ],
        legal: vec![
            NavItem::link("Kebijakan Privasi", pages::PRIVACY),
            NavItem::link("Syarat & Ketentuan", pages::TERMS),
        ],
    }
}

/// Section crumbs appended after home, checked in this order.
const SECTION_CRUMBS: [(&str, &str, &str); 3] = [
    (jobs::LIST, "Lowongan", jobs::LIST),
    (companies::LIST, "Perusahaan", companies::LIST),
    (dashboard::HOME, "Dashboard", dashboard::HOME),
];

pub fn breadcrumbs(path: &str) -> Vec<NavItem> {
    let mut crumbs = vec![NavItem::link("Beranda", HOME)];
    crumbs.extend(
        SECTION_CRUMBS
            .iter()
            .filter(|(prefix, _, _)| path.starts_with(prefix))
            .map(|(_, label, to)| NavItem::link(*label, to)),
    );
    crumbs
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn labels(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn parameterised_paths() {
        assert_eq!(jobs::detail(123), "/jobs/123");
        assert_eq!(jobs::detail("abc"), "/jobs/abc");
        assert_eq!(jobs::by_category("it"), "/jobs/category/it");
        assert_eq!(companies::detail(7), "/companies/7");
    }

    #[test]
    fn search_path_encodes_query() {
        assert_eq!(jobs::search("web developer"), "/jobs?q=web%20developer");
        assert_eq!(jobs::search("a&b=c"), "/jobs?q=a%26b%3Dc");
        assert_eq!(jobs::search(""), "/jobs?q=");
    }

    #[test]
    fn route_table_names_are_unique_and_cover_surface() {
        let names: HashSet<&str> = ROUTE_TABLE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ROUTE_TABLE.len());
        assert_eq!(ROUTE_TABLE.len(), 21);
        assert!(ROUTE_TABLE.iter().any(|e| e.pattern == "/dashboard/saved-jobs"));
    }

    #[test]
    fn resolve_fixed_and_parameterised() {
        assert_eq!(resolve("auth.login", None).unwrap(), "/auth/login");
        assert_eq!(resolve("pages.faq", Some("ignored")).unwrap(), "/faq");
        assert_eq!(resolve("jobs.detail", Some("42")).unwrap(), "/jobs/42");
        assert_eq!(resolve("Jobs.Search", Some("kasir toko")).unwrap(), "/jobs?q=kasir%20toko");
    }

    #[test]
    fn resolve_errors() {
        assert!(matches!(
            resolve("jobs.apply", None),
            Err(AppError::UnknownRoute(name)) if name == "jobs.apply"
        ));
        assert!(matches!(
            resolve("companies.detail", None),
            Err(AppError::MissingRouteParam(name)) if name == "companies.detail"
        ));
        assert!(matches!(
            resolve("jobs.detail", Some("")),
            Err(AppError::MissingRouteParam(_))
        ));
    }

    #[test]
    fn breadcrumbs_by_section() {
        assert_eq!(labels(&breadcrumbs("/")), vec!["Beranda"]);
        assert_eq!(labels(&breadcrumbs("/jobs/42")), vec!["Beranda", "Lowongan"]);
        assert_eq!(labels(&breadcrumbs("/dashboard/profile")), vec!["Beranda", "Dashboard"]);
        assert_eq!(labels(&breadcrumbs("/companies")), vec!["Beranda", "Perusahaan"]);
        assert_eq!(labels(&breadcrumbs("/about")), vec!["Beranda"]);
    }

    #[test]
    fn breadcrumb_targets() {
        let crumbs = breadcrumbs("/jobs?q=bandung");
        assert_eq!(crumbs[0].to, "/");
        assert_eq!(crumbs[1].to, "/jobs");
    }

    #[test]
    fn menus_point_at_declared_routes() {
        assert_eq!(
            labels(&main_nav()),
            vec!["Beranda", "Lowongan", "Perusahaan", "Tentang"]
        );

        let footer = footer_nav();
        let declared: HashSet<&str> = ROUTE_TABLE.iter().map(|e| e.pattern).collect();
        for item in main_nav()
            .iter()
            .chain(&footer.menu)
            .chain(&footer.info)
            .chain(&footer.legal)
        {
            assert!(declared.contains(item.to.as_str()), "{} is not declared", item.to);
        }
        assert_eq!(labels(&footer.legal), vec!["Kebijakan Privasi", "Syarat & Ketentuan"]);
    }

    #[test]
    fn nav_item_serializes_without_empty_fields() {
        let value = serde_json::to_value(NavItem::link("FAQ", pages::FAQ)).unwrap();
        assert_eq!(value, serde_json::json!({ "label": "FAQ", "to": "/faq" }));
    }
}
