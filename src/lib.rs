pub mod api;
pub mod cli;
pub mod dex;
pub mod evolution;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use ui::{ConsoleUi, Phase, SilentUi, Ui, UiApp};
