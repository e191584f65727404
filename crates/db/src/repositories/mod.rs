pub mod preset_repo;

pub use preset_repo::PresetRepo;
