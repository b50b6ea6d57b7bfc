pub mod analysis;
pub mod config;
pub mod error;
pub mod extras;
pub mod options;
pub mod parser;
pub mod plan;
pub mod prompt;
pub mod render;
pub mod scene;
pub mod summary;
pub mod templates;
pub mod text;

pub use config::AppConfig;
pub use error::PlanError;
pub use extras::Extras;
pub use options::{GenerationOptions, OptionDefaults, RawOptions, VisualStyle};
pub use parser::OptionsParser;
pub use plan::{PlanGenerator, VideoPlan};
pub use render::{OutputFormat, PlanRenderer};
pub use scene::Scene;
pub use summary::Summary;

/// Generates a plan from already normalized options.
pub fn generate_video_plan(options: &GenerationOptions) -> error::Result<VideoPlan> {
    PlanGenerator::generate(options)
}
