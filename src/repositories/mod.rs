pub mod cadastro_repository;
pub mod checkpoint_repository;
pub mod collect_repository;
pub mod report_repository;
pub mod transport_repository;
pub mod user_repository;
pub mod vehicle_repository;
