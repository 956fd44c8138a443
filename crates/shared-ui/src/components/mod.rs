// Primitives
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;

// Dashboard widgets
pub mod stat_card;
pub mod status_badge;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use stat_card::*;
pub use status_badge::*;
