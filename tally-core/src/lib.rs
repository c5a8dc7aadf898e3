pub mod enricher;
pub mod models;

pub use enricher::{EnrichError, OrderEnricher, GENERATED_PRODUCT_COUNT};
pub use models::{Order, Product};
