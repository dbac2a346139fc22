mod app;
mod link_list;

pub use app::*;
pub use link_list::*;
