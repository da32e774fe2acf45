//! Route-guard decision helper.
//!
//! The actual navigation lives in the external router; this helper only
//! encodes the decision table the router applies on every route change.

use bookwell_core::config::routes::RoutesConfig;
use bookwell_entity::session::Session;

/// Outcome of a route-guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Redirect to the unauthenticated landing route.
    ToLanding,
    /// Redirect to the main authenticated route.
    ToHome,
    /// Stay on the current route.
    Stay,
}

/// Decide where the router should send the user.
///
/// A token holder sitting on the landing route goes home; a visitor
/// without a token anywhere else goes to the landing route.
pub fn route_guard(session: &Session, current_path: &str, routes: &RoutesConfig) -> RouteDecision {
    if session.has_token() && current_path == routes.landing {
        RouteDecision::ToHome
    } else if !session.has_token() && current_path != routes.landing {
        RouteDecision::ToLanding
    } else {
        RouteDecision::Stay
    }
}
