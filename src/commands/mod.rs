pub mod runserver;
pub mod runtests;
pub mod setup;
