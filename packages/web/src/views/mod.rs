mod guards;
pub use guards::{PageNotFound, PublicOnly, RequireAuth, Shell};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;
