mod loading;
mod pagination;
mod search_box;
mod service_table;

pub use loading::Loading;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use service_table::ServiceTable;
