pub mod auth_controller;
pub mod cadastro_controller;
pub mod checkpoint_controller;
pub mod collect_controller;
pub mod report_controller;
pub mod transport_controller;
pub mod user_controller;
pub mod vehicle_controller;
