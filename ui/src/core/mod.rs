//! Platform-agnostic page logic. Nothing in here renders; components hold
//! these values in signals and call into them from event handlers.

pub mod contact;
pub mod diagnostics;
pub mod header;
pub mod hover;
pub mod language;
pub mod navigation;
pub mod reveal;
pub mod storage;
pub mod timing;
