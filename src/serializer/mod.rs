pub mod fountain_serializer;

pub use fountain_serializer::FountainSerializer;
