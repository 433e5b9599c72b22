pub mod browse;
pub mod list;
pub mod nav;
pub mod whoami;
