pub const SEE_CHUNK_CONFIG_PATH: &str = "assets/see_chunk.ron";
