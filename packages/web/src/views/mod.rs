mod auth;
pub use auth::Auth;

mod welcome;
pub use welcome::Welcome;

mod help;
pub use help::Help;

mod guides;
pub use guides::{GuideDetail, Guides};

mod legal;
pub use legal::Legal;
