pub mod analytics_store;
