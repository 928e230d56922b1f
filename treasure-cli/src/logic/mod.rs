pub mod reports;
pub mod runner;

pub use runner::{MapRun, MapSource, load_render_config, write_map_file};
