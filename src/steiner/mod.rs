pub mod metric_closure;
pub mod planner;
pub mod steiner_tree;

pub use metric_closure::{metric_closure, MetricClosureEdge};
pub use planner::{RoutePlanner, RouteRequest, RoutingLimits};
pub use steiner_tree::{approximate_steiner_tree, SteinerTree};
