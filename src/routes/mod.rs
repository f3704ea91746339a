pub mod auth_routes;
pub mod cadastro_routes;
pub mod checkpoint_routes;
pub mod collect_routes;
pub mod portaria_routes;
pub mod report_routes;
pub mod transport_routes;
pub mod user_routes;
pub mod vehicle_routes;
