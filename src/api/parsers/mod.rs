mod archive;

pub use archive::extract_games;
