pub mod cache_store;
