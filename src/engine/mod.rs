//! The rules machine: bids, rejections, the round lifecycle, and views.

pub mod bid;
pub mod error;
pub mod round;
pub mod view;

pub use bid::Bid;
pub use error::ActionError;
pub use round::{Phase, RoundEngine, STARTING_DICE, WILD_FACE};
pub use view::{ViewSnapshot, VisibleDie};
