pub mod base;
pub mod bilibili;
pub mod download;
pub mod logging;
pub mod search;
pub mod throttle;

pub use base::*;
pub use bilibili::*;
pub use download::*;
pub use logging::*;
pub use search::*;
pub use throttle::*;
