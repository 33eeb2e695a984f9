pub mod a001_collection_item;
pub mod a002_collection_point;
