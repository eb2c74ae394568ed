pub mod floor_map;
