mod ids;
mod notification;
mod page;
mod route;
mod user;

pub use ids::UserId;
pub use notification::{Notification, NotificationKind};
pub use page::Page;
pub use route::Route;
pub use user::{Credentials, User, UserFields};
