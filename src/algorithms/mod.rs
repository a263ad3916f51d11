pub mod convex_hull;
pub mod ordering;
pub mod point_cloud;
pub mod rasterization;
pub mod vertex_count;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;

#[doc(inline)]
pub use ordering::order_counter_clockwise;

#[doc(inline)]
pub use point_cloud::random_points;

#[doc(inline)]
pub use rasterization::{PointInPolygonRasterizer, Rasterizer, ScanlineRasterizer};

#[doc(inline)]
pub use vertex_count::adjust_vertex_count;
