pub mod encoding;
pub mod manager;
pub mod mutation;
pub mod problem;
pub mod run;
pub mod traits;

pub use encoding::EncodingConfig;
pub use manager::{AppConfig, ConfigManager};
pub use mutation::{MutationConfig, MutationStrategy};
pub use problem::ProblemConfig;
pub use run::RunConfig;
