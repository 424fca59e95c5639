pub mod static_page;

pub use static_page::StaticPage;
