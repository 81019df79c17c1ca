//! Reader core: pure reading state machine and text layout helpers.
mod chapter;
mod effect;
mod msg;
mod resolve;
mod state;
mod update;
mod view_model;
mod viewport;
mod wrap;

pub use chapter::{Chapter, HistoryRecord};
pub use effect::Effect;
pub use msg::{LoadStage, Msg};
pub use resolve::resolve_link;
pub use state::{LoadId, Phase, ReaderConfig, ReaderState};
pub use update::update;
pub use view_model::ReaderView;
pub use viewport::{Scroll, Viewport};
pub use wrap::wrap;
