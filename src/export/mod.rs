//! Document export: printable artifacts derived from project payloads.

mod sales_order;

pub use sales_order::SalesOrder;
