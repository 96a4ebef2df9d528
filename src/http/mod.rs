pub mod client;

pub use client::SiteSession;
