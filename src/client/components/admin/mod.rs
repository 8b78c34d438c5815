//! Building blocks shared by the admin console pages.

pub mod drawer;
pub mod error_panel;
pub mod inventory;
pub mod layout;
pub mod pagination;
pub mod toolbar;

pub use drawer::{EditDrawer, EditTarget};
pub use error_panel::ErrorPanel;
pub use inventory::{render_inventory, use_inventory, Inventory};
pub use layout::AdminLayout;
pub use pagination::{EmptyRow, PaginationFooter};
pub use toolbar::SearchToolbar;
