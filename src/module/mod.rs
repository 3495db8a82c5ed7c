mod context;
mod home;
mod setting;

pub use context::Context;
pub use home::pyrun_home;
pub use setting::Setting;
