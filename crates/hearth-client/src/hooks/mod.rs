//! Per-feature hooks, the surface a UI binds to.
//!
//! Each hook scopes the data service and query cache to one feature: reads
//! come from the cache, mutations invalidate the keys whose values they may
//! have changed, and `subscribe` hands out a watch receiver so a view can
//! re-render when its key changes.

mod categories;
mod current_user;
mod events;
mod families;
mod friends;
mod profile;
mod tasks;
mod wishlist;

pub use categories::CategoriesHook;
pub use current_user::CurrentUserHook;
pub use events::EventsHook;
pub use families::FamiliesHook;
pub use friends::FriendsHook;
pub use profile::{ProfileHook, ProfileView};
pub use tasks::{TaskView, TasksHook};
pub use wishlist::WishlistHook;
