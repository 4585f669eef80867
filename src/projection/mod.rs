pub mod map_singleton;
