pub mod allocator;
pub mod extractor;
pub mod parser;
pub mod session;

pub use crate::domain::model::{
    BillItem, CostBreakdown, ImagePayload, ItemAssignments, Participant,
};
pub use crate::domain::ports::{ConfigProvider, ImageSource, VisionModel};
pub use crate::utils::error::Result;
