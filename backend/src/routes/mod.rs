pub mod layout;
pub mod payload_scatter;
pub mod success_pie;
